//! 带标签的无向图
//!
//! 节点以任意可哈希标签标识并携带属性映射，边以无序节点对表示

use super::node::NodeKey;
use super::view::{EdgeView, NodeView};
use crate::error::{Error, Result};
use crate::types::{Properties, PropertyValue};
use indexmap::{Equivalent, IndexMap};
use std::fmt;
use std::hash::Hash;

/// 节点条目：节点属性 + 邻接表（邻居 -> 边属性）
#[derive(Debug, Clone)]
struct NodeEntry<N: NodeKey> {
    attrs: Properties,
    neighbors: IndexMap<N, Properties>,
}

impl<N: NodeKey> Default for NodeEntry<N> {
    fn default() -> Self {
        Self {
            attrs: Properties::new(),
            neighbors: IndexMap::new(),
        }
    }
}

/// 带标签的无向图
///
/// 节点与邻居均保持插入顺序；无向边在两个端点的邻接表中对称存储，只计数一次。
#[derive(Debug, Clone)]
pub struct Graph<N: NodeKey = String> {
    /// 图名称
    name: Option<String>,
    /// 图级属性
    attrs: Properties,
    /// 节点表
    nodes: IndexMap<N, NodeEntry<N>>,
    /// 边数量
    edge_count: usize,
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> Graph<N> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            name: None,
            attrs: Properties::new(),
            nodes: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// 创建带名称的空图
    pub fn named(name: impl Into<String>) -> Self {
        let mut g = Self::new();
        g.name = Some(name.into());
        g
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// 图级属性
    pub fn graph_attrs(&self) -> &Properties {
        &self.attrs
    }

    pub fn graph_attrs_mut(&mut self) -> &mut Properties {
        &mut self.attrs
    }

    // ==================== 节点操作 ====================

    /// 添加节点，已存在时不做任何修改
    pub fn add_node(&mut self, node: impl Into<N>) {
        self.nodes.entry(node.into()).or_default();
    }

    /// 添加节点并合并属性：新键插入，同名键覆盖，其余键保留
    pub fn add_node_with(&mut self, node: impl Into<N>, attrs: Properties) {
        self.nodes.entry(node.into()).or_default().attrs.extend(attrs);
    }

    /// 批量添加节点
    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator,
        I::Item: Into<N>,
    {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// 批量添加带属性的节点，属性合并进已有节点
    pub fn add_nodes_with<I, K>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = (K, Properties)>,
        K: Into<N>,
    {
        for (node, attrs) in nodes {
            self.add_node_with(node, attrs);
        }
    }

    /// 删除节点及其关联的边，返回节点属性
    pub fn remove_node<Q>(&mut self, node: &Q) -> Result<Properties>
    where
        Q: ?Sized + Hash + Equivalent<N> + fmt::Debug,
    {
        let (key, entry) = self
            .nodes
            .shift_remove_entry(node)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", node)))?;

        for neighbor in entry.neighbors.keys() {
            if neighbor != &key {
                if let Some(other) = self.nodes.get_mut(neighbor) {
                    other.neighbors.shift_remove(&key);
                }
            }
        }
        self.edge_count -= entry.neighbors.len();

        Ok(entry.attrs)
    }

    pub fn has_node<Q>(&self, node: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.nodes.contains_key(node)
    }

    /// 获取节点属性
    pub fn node_attrs<Q>(&self, node: &Q) -> Option<&Properties>
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.nodes.get(node).map(|entry| &entry.attrs)
    }

    pub fn node_attrs_mut<Q>(&mut self, node: &Q) -> Option<&mut Properties>
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.nodes.get_mut(node).map(|entry| &mut entry.attrs)
    }

    /// 获取单个节点属性
    pub fn node_attr<Q>(&self, node: &Q, key: &str) -> Option<&PropertyValue>
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.node_attrs(node)?.get(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 节点视图
    pub fn nodes(&self) -> NodeView<'_, N> {
        NodeView::new(self)
    }

    /// 按插入顺序遍历节点及其属性
    pub fn iter_nodes(&self) -> impl Iterator<Item = (&N, &Properties)> + '_ {
        self.nodes.iter().map(|(node, entry)| (node, &entry.attrs))
    }

    /// 节点在插入顺序中的位置
    pub fn node_index<Q>(&self, node: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.nodes.get_index_of(node)
    }

    // ==================== 边操作 ====================

    /// 添加边，缺失的端点会被隐式创建
    pub fn add_edge(&mut self, u: impl Into<N>, v: impl Into<N>) {
        self.add_edge_with(u, v, Properties::new());
    }

    /// 添加边并合并边属性
    pub fn add_edge_with(&mut self, u: impl Into<N>, v: impl Into<N>, attrs: Properties) {
        let u = u.into();
        let v = v.into();

        let u_entry = self.nodes.entry(u.clone()).or_default();
        let is_new = !u_entry.neighbors.contains_key(&v);
        u_entry
            .neighbors
            .entry(v.clone())
            .or_default()
            .extend(attrs.clone());

        if u != v {
            self.nodes
                .entry(v)
                .or_default()
                .neighbors
                .entry(u)
                .or_default()
                .extend(attrs);
        }

        if is_new {
            self.edge_count += 1;
        }
    }

    /// 批量添加边
    pub fn add_edges_from<I, K>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (K, K)>,
        K: Into<N>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    /// 删除边，返回边属性
    pub fn remove_edge<Q>(&mut self, u: &Q, v: &Q) -> Result<Properties>
    where
        Q: ?Sized + Hash + Equivalent<N> + fmt::Debug,
    {
        let not_found = || Error::EdgeNotFound(format!("({:?}, {:?})", u, v));

        let (u_index, u_key, _) = self.nodes.get_full(u).ok_or_else(not_found)?;
        let u_key = u_key.clone();
        let (v_index, v_key, _) = self.nodes.get_full(v).ok_or_else(not_found)?;
        let v_key = v_key.clone();

        let attrs = self.nodes[u_index]
            .neighbors
            .shift_remove(&v_key)
            .ok_or_else(not_found)?;
        if u_index != v_index {
            self.nodes[v_index].neighbors.shift_remove(&u_key);
        }
        self.edge_count -= 1;

        Ok(attrs)
    }

    pub fn has_edge<Q>(&self, u: &Q, v: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        let Some((_, v_key, _)) = self.nodes.get_full(v) else {
            return false;
        };
        self.nodes
            .get(u)
            .map_or(false, |entry| entry.neighbors.contains_key(v_key))
    }

    /// 获取边属性
    pub fn edge_attrs<Q>(&self, u: &Q, v: &Q) -> Option<&Properties>
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        let (_, v_key, _) = self.nodes.get_full(v)?;
        self.nodes.get(u)?.neighbors.get(v_key)
    }

    /// 设置边属性（两个方向同步更新）
    pub fn set_edge_attr<Q>(
        &mut self,
        u: &Q,
        v: &Q,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Result<()>
    where
        Q: ?Sized + Hash + Equivalent<N> + fmt::Debug,
    {
        let not_found = || Error::EdgeNotFound(format!("({:?}, {:?})", u, v));
        let u_key = self.nodes.get_key_value(u).ok_or_else(not_found)?.0.clone();
        let v_key = self.nodes.get_key_value(v).ok_or_else(not_found)?.0.clone();
        let key = key.into();
        let value = value.into();

        let forward = self
            .nodes
            .get_mut(&u_key)
            .and_then(|entry| entry.neighbors.get_mut(&v_key))
            .ok_or_else(not_found)?;
        forward.insert(key.clone(), value.clone());

        if let Some(backward) = self
            .nodes
            .get_mut(&v_key)
            .and_then(|entry| entry.neighbors.get_mut(&u_key))
        {
            backward.insert(key, value);
        }
        Ok(())
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 边视图
    pub fn edges(&self) -> EdgeView<'_, N> {
        EdgeView::new(self)
    }

    /// 遍历边及其属性
    ///
    /// 按节点插入顺序遍历，每个节点只产出尚未访问过的邻居，因此每条边恰好出现一次。
    pub fn iter_edges(&self) -> impl Iterator<Item = (&N, &N, &Properties)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(move |(i, (u, entry))| {
                entry.neighbors.iter().filter_map(move |(v, attrs)| {
                    let j = self.nodes.get_index_of(v)?;
                    (j >= i).then_some((u, v, attrs))
                })
            })
    }

    // ==================== 邻居查询 ====================

    /// 获取节点的邻居
    pub fn neighbors<Q>(&self, node: &Q) -> Result<impl Iterator<Item = &N> + '_>
    where
        Q: ?Sized + Hash + Equivalent<N> + fmt::Debug,
    {
        let entry = self
            .nodes
            .get(node)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", node)))?;
        Ok(entry.neighbors.keys())
    }

    /// 节点度数，自环计两次
    pub fn degree<Q>(&self, node: &Q) -> Result<usize>
    where
        Q: ?Sized + Hash + Equivalent<N> + fmt::Debug,
    {
        let (_, key, entry) = self
            .nodes
            .get_full(node)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", node)))?;
        let self_loop = usize::from(entry.neighbors.contains_key(key));
        Ok(entry.neighbors.len() + self_loop)
    }

    /// 清空所有节点、边和图属性
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.attrs.clear();
        self.edge_count = 0;
        self.name = None;
    }
}

impl<N: NodeKey> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Graph")?;
        if let Some(name) = &self.name {
            write!(f, " named {}", crate::types::quote(name))?;
        }
        write!(
            f,
            " with {} nodes and {} edges",
            self.node_count(),
            self.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::properties;

    #[test]
    fn test_add_node_idempotent() {
        let mut g: Graph = Graph::new();
        g.add_node("Jeremy");
        assert_eq!(g.nodes().iter().collect::<Vec<_>>(), vec!["Jeremy"]);

        g.add_nodes_from(["Mark", "Jeremy"]);
        assert_eq!(g.node_count(), 2);
        assert!(g.has_node("Mark"));
        assert!(g.has_node("Jeremy"));
        assert_eq!(g.to_string(), "Graph with 2 nodes and 0 edges");
    }

    #[test]
    fn test_attribute_merge() {
        let mut g: Graph = Graph::new();
        g.add_node_with("Mark", properties([("city", "Leeds")]));
        g.add_nodes_with([
            ("Mark", properties([("followers", 2100)])),
            ("Jeremy", properties([("followers", 130)])),
        ]);

        assert_eq!(g.node_attr("Mark", "followers"), Some(&PropertyValue::Int(2100)));
        assert_eq!(g.node_attr("Jeremy", "followers"), Some(&PropertyValue::Int(130)));
        assert_eq!(g.node_attr("Mark", "city"), Some(&PropertyValue::from("Leeds")));

        g.add_node_with("Mark", properties([("followers", 2200)]));
        assert_eq!(g.node_attr("Mark", "followers"), Some(&PropertyValue::Int(2200)));
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_add_edge_creates_nodes() {
        let mut g: Graph = Graph::new();
        g.add_edge("Jeremy", "Mark");

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge("Jeremy", "Mark"));
        assert!(g.has_edge("Mark", "Jeremy"));

        // 重复添加不增加边数
        g.add_edge("Mark", "Jeremy");
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_edge_attrs_symmetric() {
        let mut g: Graph = Graph::new();
        g.add_edge_with("a", "b", properties([("weight", 2.5)]));
        g.set_edge_attr("b", "a", "color", "red").unwrap();

        let forward = g.edge_attrs("a", "b").unwrap();
        let backward = g.edge_attrs("b", "a").unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.get("weight"), Some(&PropertyValue::Float(2.5)));
        assert_eq!(forward.get("color"), Some(&PropertyValue::from("red")));

        assert!(matches!(
            g.set_edge_attr("a", "z", "color", "blue"),
            Err(Error::EdgeNotFound(_))
        ));
    }

    #[test]
    fn test_remove_node_drops_edges() {
        let mut g: Graph = Graph::new();
        g.add_edges_from([("a", "b"), ("b", "c"), ("c", "c")]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree("c").unwrap(), 3);

        g.remove_node("c").unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree("b").unwrap(), 1);

        assert!(matches!(g.remove_node("c"), Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_remove_edge() {
        let mut g: Graph = Graph::new();
        g.add_edge("a", "b");
        g.remove_edge("b", "a").unwrap();

        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge("a", "b"));
        assert_eq!(g.node_count(), 2);
        assert!(matches!(g.remove_edge("a", "b"), Err(Error::EdgeNotFound(_))));
    }

    #[test]
    fn test_neighbors_and_degree() {
        let mut g: Graph = Graph::new();
        g.add_edges_from([("a", "b"), ("a", "c")]);

        let neighbors: Vec<_> = g.neighbors("a").unwrap().cloned().collect();
        assert_eq!(neighbors, vec!["b".to_string(), "c".to_string()]);
        assert_eq!(g.degree("a").unwrap(), 2);
        assert!(g.neighbors("z").is_err());
    }

    #[test]
    fn test_iter_edges_each_once() {
        let mut g: Graph = Graph::new();
        g.add_edges_from([("b", "a"), ("a", "c"), ("c", "c")]);

        let edges: Vec<_> = g
            .iter_edges()
            .map(|(u, v, _)| (u.as_str(), v.as_str()))
            .collect();
        assert_eq!(edges, vec![("b", "a"), ("a", "c"), ("c", "c")]);
    }

    #[test]
    fn test_display_named() {
        let mut g: Graph<u32> = Graph::named("karate");
        g.add_edge(1u32, 2u32);
        assert_eq!(g.to_string(), "Graph named 'karate' with 2 nodes and 1 edges");

        g.clear();
        assert_eq!(g.to_string(), "Graph with 0 nodes and 0 edges");
    }
}
