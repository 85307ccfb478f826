//! 命令行展示
//!
//! 属性表打印与分节标题

mod printer;

pub use printer::{PrintMode, Printer};

use colored::Colorize;

/// 分节标题，终端下加粗着色
pub fn banner(title: &str) -> String {
    format!("== {} ==", title).bold().cyan().to_string()
}
