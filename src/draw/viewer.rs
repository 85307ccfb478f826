//! 绘图查看器
//!
//! 在终端中显示画布；阻塞模式下等待用户按回车“关闭窗口”后才返回

use super::figure::Figure;
use crate::error::Result;
use std::io::{self, BufRead, Write};

/// 画布查看器
pub struct Viewer {
    /// 关闭窗口的输入源；`None` 时不阻塞
    input: Option<Box<dyn BufRead>>,
    width: usize,
    height: usize,
}

impl Viewer {
    /// 从标准输入等待关闭
    pub fn blocking(width: usize, height: usize) -> Self {
        Self::with_input(io::BufReader::new(io::stdin()), width, height)
    }

    /// 从指定输入源等待关闭
    pub fn with_input(input: impl BufRead + 'static, width: usize, height: usize) -> Self {
        Self {
            input: Some(Box::new(input)),
            width,
            height,
        }
    }

    /// 显示后立即返回
    pub fn non_blocking(width: usize, height: usize) -> Self {
        Self {
            input: None,
            width,
            height,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.input.is_some()
    }

    /// 显示画布，阻塞模式下读取一行输入后返回（输入结束也视为关闭）
    pub fn show<W: Write>(&mut self, out: &mut W, figure: &Figure) -> Result<()> {
        let canvas = figure.to_canvas(self.width, self.height)?;
        let border = format!("+{}+", "-".repeat(self.width));

        writeln!(out, "{}", border)?;
        for line in canvas.lines() {
            writeln!(out, "|{:<width$}|", line, width = self.width)?;
        }
        writeln!(out, "{}", border)?;

        if let Some(input) = self.input.as_mut() {
            write!(out, "[按回车键关闭窗口]")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
