//! 绘图结果
//!
//! `Figure` 保存布局后的节点坐标、标签和边，可渲染为终端画布或 SVG

use super::layout::Point;
use crate::error::{Error, Result};
use std::fmt::Write as _;
use std::path::Path;

/// 节点填充色
const NODE_COLOR: &str = "#1f78b4";
/// SVG 节点半径（像素）
const NODE_RADIUS: f64 = 12.0;

/// 已布局的图
#[derive(Debug, Clone)]
pub struct Figure {
    pub(crate) labels: Vec<String>,
    pub(crate) positions: Vec<Point>,
    pub(crate) edges: Vec<(usize, usize)>,
    pub(crate) with_labels: bool,
}

impl Figure {
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// 渲染为字符画布
    ///
    /// 节点以 `o` 表示，标签写在节点右侧；画布右侧预留最长标签的宽度。
    pub fn to_canvas(&self, width: usize, height: usize) -> Result<String> {
        let label_width = if self.with_labels {
            self.labels
                .iter()
                .map(|l| l.chars().count() + 1)
                .max()
                .unwrap_or(0)
        } else {
            0
        };
        if height < 2 || width < label_width + 2 {
            return Err(Error::Layout(format!(
                "画布 {}x{} 太小，至少需要 {}x2",
                width,
                height,
                label_width + 2
            )));
        }

        let usable = width - label_width - 1;
        let cells: Vec<(usize, usize)> = self
            .positions
            .iter()
            .map(|p| {
                let col = (p.x * usable as f64).round() as usize;
                let row = ((1.0 - p.y) * (height - 1) as f64).round() as usize;
                (col.min(usable), row.min(height - 1))
            })
            .collect();

        let mut grid = vec![vec![' '; width]; height];

        for &(a, b) in &self.edges {
            if a == b {
                continue;
            }
            draw_line(&mut grid, cells[a], cells[b]);
        }

        for (i, &(col, row)) in cells.iter().enumerate() {
            grid[row][col] = 'o';
            if self.with_labels {
                for (offset, c) in self.labels[i].chars().enumerate() {
                    if let Some(cell) = grid[row].get_mut(col + 1 + offset) {
                        *cell = c;
                    }
                }
            }
        }

        let mut out = String::new();
        for row in grid {
            let line: String = row.into_iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        Ok(out)
    }

    /// 渲染为 SVG 文本
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let margin = NODE_RADIUS * 2.0;
        let w = f64::from(width) - 2.0 * margin;
        let h = f64::from(height) - 2.0 * margin;
        let project = |p: &Point| (margin + p.x * w, margin + (1.0 - p.y) * h);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
            width, height
        );
        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);

        for &(a, b) in &self.edges {
            let (x1, y1) = project(&self.positions[a]);
            let (x2, y2) = project(&self.positions[b]);
            let _ = writeln!(
                svg,
                r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
                x1, y1, x2, y2
            );
        }

        for (i, p) in self.positions.iter().enumerate() {
            let (x, y) = project(p);
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{}" fill="{}"/>"#,
                x, y, NODE_RADIUS, NODE_COLOR
            );
            if self.with_labels {
                let _ = writeln!(
                    svg,
                    r#"  <text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-size="12">{}</text>"#,
                    x,
                    y,
                    escape_xml(&self.labels[i])
                );
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// 保存为 SVG 文件
    pub fn save_svg<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> Result<()> {
        std::fs::write(path, self.to_svg(width, height))?;
        Ok(())
    }
}

/// 在网格上画线段，端点本身留给节点
fn draw_line(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (x0, y0) = (from.0 as i64, from.1 as i64);
    let (x1, y1) = (to.0 as i64, to.1 as i64);
    let dx = x1 - x0;
    let dy = y1 - y0;

    let glyph = if dy == 0 || dx.abs() >= 4 * dy.abs() {
        '-'
    } else if dx == 0 || dy.abs() >= 2 * dx.abs() {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    };

    let steps = dx.abs().max(dy.abs());
    for step in 1..steps {
        let x = x0 + dx * step / steps;
        let y = y0 + dy * step / steps;
        if let Some(cell) = grid
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            if *cell == ' ' {
                *cell = glyph;
            }
        }
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
