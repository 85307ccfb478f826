//! 索引寻址图模块
//!
//! 顶点按整数索引寻址，属性按列存储

mod attrs;
mod graph;
mod seq;
mod summary;

pub use graph::IndexedGraph;
pub use seq::{AttributeSeq, AttributeSeqMut, Element, ElementMut};
