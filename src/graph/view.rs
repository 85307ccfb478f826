//! 节点与边视图
//!
//! 只读视图，`Display` 输出与演示脚本打印的列表格式一致

use super::graph::Graph;
use super::node::NodeKey;
use crate::types::{Properties, PropertiesDisplay};
use indexmap::Equivalent;
use std::fmt;
use std::hash::Hash;

/// 节点视图，打印为 `['Jeremy', 'Mark']`
pub struct NodeView<'a, N: NodeKey> {
    graph: &'a Graph<N>,
}

impl<'a, N: NodeKey> NodeView<'a, N> {
    pub(crate) fn new(graph: &'a Graph<N>) -> Self {
        Self { graph }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a N> + 'a {
        self.graph.iter_nodes().map(|(node, _)| node)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.graph.has_node(node)
    }

    /// 带属性的节点视图，打印为 `[('Mark', {'followers': 2100})]`
    pub fn with_data(&self) -> NodeDataView<'a, N> {
        NodeDataView { graph: self.graph }
    }
}

impl<N: NodeKey> fmt::Display for NodeView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&node.repr())?;
        }
        f.write_str("]")
    }
}

/// 带属性的节点视图
pub struct NodeDataView<'a, N: NodeKey> {
    graph: &'a Graph<N>,
}

impl<'a, N: NodeKey> NodeDataView<'a, N> {
    pub fn iter(&self) -> impl Iterator<Item = (&'a N, &'a Properties)> + 'a {
        self.graph.iter_nodes()
    }
}

impl<N: NodeKey> fmt::Display for NodeDataView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (node, attrs)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", node.repr(), PropertiesDisplay(attrs))?;
        }
        f.write_str("]")
    }
}

/// 边视图，打印为 `[('Jeremy', 'Mark')]`
pub struct EdgeView<'a, N: NodeKey> {
    graph: &'a Graph<N>,
}

impl<'a, N: NodeKey> EdgeView<'a, N> {
    pub(crate) fn new(graph: &'a Graph<N>) -> Self {
        Self { graph }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a N, &'a N)> + 'a {
        self.graph.iter_edges().map(|(u, v, _)| (u, v))
    }

    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    pub fn contains<Q>(&self, u: &Q, v: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.graph.has_edge(u, v)
    }
}

impl<N: NodeKey> fmt::Display for EdgeView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (u, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", u.repr(), v.repr())?;
        }
        f.write_str("]")
    }
}
