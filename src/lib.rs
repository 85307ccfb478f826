//! SocialGraph - 图模型入门
//!
//! 用两个小型图模型演示图的基本用法：
//! - 带标签图：节点由任意可哈希标签标识，携带属性映射
//! - 索引图：顶点按整数索引寻址，属性按列存储
//! - 基础绘图：力导向/圆形布局，终端画布、SVG 与 DOT 输出

pub mod cli;
pub mod demo;
pub mod draw;
pub mod error;
pub mod graph;
pub mod indexed;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Graph, NodeKey};
pub use indexed::IndexedGraph;
pub use types::{properties, Properties, PropertyValue};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
