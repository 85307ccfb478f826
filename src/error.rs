//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("节点不存在: {0}")]
    NodeNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("顶点索引越界: {index} (顶点数 {count})")]
    VertexIndexOutOfRange { index: usize, count: usize },

    #[error("边索引越界: {index} (边数 {count})")]
    EdgeIndexOutOfRange { index: usize, count: usize },

    #[error("属性 {attribute} 的值列表长度不匹配: 期望 {expected}, 实际 {actual}")]
    AttributeLengthMismatch {
        attribute: String,
        expected: usize,
        actual: usize,
    },

    #[error("属性不存在: {0}")]
    AttributeNotFound(String),

    #[error("未找到名称为 {0} 的顶点")]
    VertexNameNotFound(String),

    #[error("布局错误: {0}")]
    Layout(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
