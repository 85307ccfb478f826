//! 带标签图模块
//!
//! 定义节点标签、带标签无向图及其视图

mod export;
mod graph;
mod node;
mod view;

pub use graph::Graph;
pub use node::NodeKey;
pub use view::{EdgeView, NodeDataView, NodeView};
