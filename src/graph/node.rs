//! 节点标识
//!
//! 带标签图的节点可以是任意可哈希的标签，此处用 `NodeKey` 约束

use crate::types::quote;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// 节点标签
///
/// `repr` 用于视图打印（字符串带引号），`label_text` 用于绘图与转换时的纯文本名称；
/// 序列化形式用作 node-link JSON 中的 `id`。
pub trait NodeKey: Clone + Eq + Hash + Debug + Serialize {
    fn repr(&self) -> String;

    fn label_text(&self) -> String;
}

impl NodeKey for String {
    fn repr(&self) -> String {
        quote(self)
    }

    fn label_text(&self) -> String {
        self.clone()
    }
}

impl NodeKey for &'static str {
    fn repr(&self) -> String {
        quote(self)
    }

    fn label_text(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_integer_key {
    ($($t:ty),*) => {
        $(
            impl NodeKey for $t {
                fn repr(&self) -> String {
                    self.to_string()
                }

                fn label_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_key!(i32, i64, u32, u64, usize);

/// 二元组标签，例如网格坐标 `(0, 1)`
impl<A: NodeKey, B: NodeKey> NodeKey for (A, B) {
    fn repr(&self) -> String {
        format!("({}, {})", self.0.repr(), self.1.repr())
    }

    fn label_text(&self) -> String {
        format!("({}, {})", self.0.label_text(), self.1.label_text())
    }
}
