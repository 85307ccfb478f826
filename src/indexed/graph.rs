//! 索引寻址图
//!
//! 顶点按 `0..n-1` 连续编号，边是顶点索引对，属性以列的形式存储

use super::attrs::AttributeColumns;
use super::seq::{AttributeSeq, AttributeSeqMut, ElementKind};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeKey};
use crate::types::{Properties, PropertyValue};
use std::ops::Range;

/// 索引寻址图
///
/// 允许多重边与自环；有向性在创建时确定。
#[derive(Debug, Clone, Default)]
pub struct IndexedGraph {
    /// 是否有向
    directed: bool,
    /// 边列表 (源, 目标)
    edges: Vec<(usize, usize)>,
    /// 顶点属性列
    vertex_attrs: AttributeColumns,
    /// 边属性列
    edge_attrs: AttributeColumns,
    /// 图级属性
    graph_attrs: Properties,
}

impl IndexedGraph {
    /// 创建空的无向图
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建空的有向图
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// 从带标签图转换
    ///
    /// 顶点顺序与节点插入顺序一致，节点标签写入 `name` 属性；
    /// 节点自身若带有 `name` 属性则以其为准。
    pub fn from_labeled<N: NodeKey>(graph: &Graph<N>) -> Self {
        let mut g = Self::new();
        g.add_vertices(graph.node_count());

        for (index, (node, attrs)) in graph.iter_nodes().enumerate() {
            g.vertex_attrs
                .set(index, "name", PropertyValue::String(node.label_text()));
            for (key, value) in attrs {
                g.vertex_attrs.set(index, key, value.clone());
            }
        }

        for (u, v, attrs) in graph.iter_edges() {
            let (Some(a), Some(b)) = (graph.node_index(u), graph.node_index(v)) else {
                continue;
            };
            g.edges.push((a, b));
            g.edge_attrs.grow(1);
            let index = g.edges.len() - 1;
            for (key, value) in attrs {
                g.edge_attrs.set(index, key, value.clone());
            }
        }

        for (key, value) in graph.graph_attrs() {
            g.graph_attrs.insert(key.clone(), value.clone());
        }
        if let Some(name) = graph.name() {
            g.graph_attrs
                .insert("name".to_string(), PropertyValue::from(name));
        }

        g
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_attrs.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== 顶点操作 ====================

    /// 追加 `n` 个顶点，返回新顶点的索引范围
    pub fn add_vertices(&mut self, n: usize) -> Range<usize> {
        let start = self.vertex_count();
        self.vertex_attrs.grow(n);
        start..self.vertex_count()
    }

    /// 追加单个顶点
    pub fn add_vertex(&mut self) -> usize {
        self.add_vertices(1).start
    }

    /// 追加一组带名称的顶点
    pub fn add_named_vertices<I>(&mut self, names: I) -> Range<usize>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let range = self.add_vertices(names.len());
        for (index, name) in range.clone().zip(names) {
            self.vertex_attrs
                .set(index, "name", PropertyValue::String(name));
        }
        range
    }

    /// 顶点序列
    pub fn vs(&self) -> AttributeSeq<'_> {
        AttributeSeq::new(&self.vertex_attrs, ElementKind::Vertex)
    }

    pub fn vs_mut(&mut self) -> AttributeSeqMut<'_> {
        AttributeSeqMut::new(&mut self.vertex_attrs, ElementKind::Vertex)
    }

    /// 顶点属性名（按添加顺序）
    pub fn vertex_attribute_names(&self) -> Vec<&str> {
        self.vertex_attrs.names().collect()
    }

    /// 按 `name` 属性查找顶点
    pub fn find_vertex(&self, name: &str) -> Option<usize> {
        self.vs().find(name)
    }

    fn check_vertex(&self, index: usize) -> Result<()> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::VertexIndexOutOfRange {
                index,
                count: self.vertex_count(),
            })
        }
    }

    // ==================== 边操作 ====================

    /// 添加一条边，返回边索引
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<usize> {
        Ok(self.add_edges([(a, b)])?.start)
    }

    /// 批量添加边
    ///
    /// 任一端点越界时整体失败，图保持不变。
    pub fn add_edges<I>(&mut self, pairs: I) -> Result<Range<usize>>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let pairs: Vec<(usize, usize)> = pairs.into_iter().collect();
        for &(a, b) in &pairs {
            self.check_vertex(a)?;
            self.check_vertex(b)?;
        }

        let start = self.edges.len();
        self.edge_attrs.grow(pairs.len());
        self.edges.extend(pairs);
        Ok(start..self.edges.len())
    }

    /// 按顶点名称批量添加边
    pub fn add_edges_by_name<I, S>(&mut self, pairs: I) -> Result<Range<usize>>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let resolve = |name: &str| {
            self.find_vertex(name)
                .ok_or_else(|| Error::VertexNameNotFound(name.to_string()))
        };

        let resolved = pairs
            .into_iter()
            .map(|(a, b)| -> Result<(usize, usize)> {
                Ok((resolve(a.as_ref())?, resolve(b.as_ref())?))
            })
            .collect::<Result<Vec<_>>>()?;

        self.add_edges(resolved)
    }

    /// 获取边的端点
    pub fn edge(&self, index: usize) -> Result<(usize, usize)> {
        self.edges
            .get(index)
            .copied()
            .ok_or(Error::EdgeIndexOutOfRange {
                index,
                count: self.edges.len(),
            })
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// 边序列
    pub fn es(&self) -> AttributeSeq<'_> {
        AttributeSeq::new(&self.edge_attrs, ElementKind::Edge)
    }

    pub fn es_mut(&mut self) -> AttributeSeqMut<'_> {
        AttributeSeqMut::new(&mut self.edge_attrs, ElementKind::Edge)
    }

    /// 边属性名（按添加顺序）
    pub fn edge_attribute_names(&self) -> Vec<&str> {
        self.edge_attrs.names().collect()
    }

    // ==================== 邻居查询 ====================

    /// 顶点的邻居（忽略方向），自环出现两次
    pub fn neighbors(&self, index: usize) -> Result<Vec<usize>> {
        self.check_vertex(index)?;
        let mut neighbors = Vec::new();
        for &(a, b) in &self.edges {
            if a == index {
                neighbors.push(b);
            }
            if b == index {
                neighbors.push(a);
            }
        }
        neighbors.sort_unstable();
        Ok(neighbors)
    }

    /// 顶点度数（忽略方向），自环计两次
    pub fn degree(&self, index: usize) -> Result<usize> {
        Ok(self.neighbors(index)?.len())
    }

    // ==================== 图属性 ====================

    pub fn graph_attr(&self, name: &str) -> Option<&PropertyValue> {
        self.graph_attrs.get(name)
    }

    pub fn set_graph_attr(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.graph_attrs.insert(name.into(), value.into());
    }

    pub fn graph_attrs(&self) -> &Properties {
        &self.graph_attrs
    }

    // 摘要输出使用的内部访问
    pub(crate) fn vertex_columns(&self) -> &AttributeColumns {
        &self.vertex_attrs
    }

    pub(crate) fn edge_columns(&self) -> &AttributeColumns {
        &self.edge_attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::properties;

    #[test]
    fn test_add_vertices_sequential() {
        let mut g = IndexedGraph::new();
        assert_eq!(g.add_vertices(2), 0..2);
        assert_eq!(g.add_vertex(), 2);
        assert_eq!(g.add_named_vertices(["x", "y"]), 3..5);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.find_vertex("y"), Some(4));
        assert_eq!(g.vs().at(0).unwrap().get("name"), Some(&PropertyValue::Null));
    }

    #[test]
    fn test_demo_bulk_assignment() {
        let mut g = IndexedGraph::new();
        g.add_vertices(2);
        g.vs_mut().set_all("name", ["Jeremy", "Mark"]).unwrap();
        g.vs_mut().set_all("followers", [130, 2100]).unwrap();

        let v0 = g.vs().at(0).unwrap();
        let v1 = g.vs().at(1).unwrap();
        assert_eq!(v0.get("name"), Some(&PropertyValue::from("Jeremy")));
        assert_eq!(v0.get("followers"), Some(&PropertyValue::Int(130)));
        assert_eq!(v1.get("name"), Some(&PropertyValue::from("Mark")));
        assert_eq!(v1.get("followers"), Some(&PropertyValue::Int(2100)));

        assert_eq!(g.add_edge(0, 1).unwrap(), 0);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge(0).unwrap(), (0, 1));
    }

    #[test]
    fn test_add_edges_is_atomic() {
        let mut g = IndexedGraph::new();
        g.add_vertices(2);

        let err = g.add_edges([(0, 1), (1, 5)]).unwrap_err();
        assert!(matches!(err, Error::VertexIndexOutOfRange { index: 5, count: 2 }));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.es().len(), 0);
    }

    #[test]
    fn test_add_edges_by_name() {
        let mut g = IndexedGraph::new();
        g.add_named_vertices(["Jeremy", "Mark", "Ana"]);
        assert_eq!(
            g.add_edges_by_name([("Jeremy", "Mark"), ("Mark", "Ana")]).unwrap(),
            0..2
        );
        assert_eq!(g.edges(), &[(0, 1), (1, 2)]);

        assert!(matches!(
            g.add_edges_by_name([("Jeremy", "Zed")]),
            Err(Error::VertexNameNotFound(name)) if name == "Zed"
        ));
    }

    #[test]
    fn test_neighbors_and_degree() {
        let mut g = IndexedGraph::directed();
        g.add_vertices(3);
        g.add_edges([(0, 1), (2, 0), (1, 1)]).unwrap();

        assert!(g.is_directed());
        assert_eq!(g.neighbors(0).unwrap(), vec![1, 2]);
        assert_eq!(g.degree(1).unwrap(), 3);
        assert!(g.neighbors(3).is_err());
    }

    #[test]
    fn test_edge_attributes_padded() {
        let mut g = IndexedGraph::new();
        g.add_vertices(3);
        g.add_edge(0, 1).unwrap();
        g.es_mut().at(0).unwrap().set("weight", 1.5);
        g.add_edge(1, 2).unwrap();

        assert_eq!(
            g.es().get("weight").unwrap(),
            &[PropertyValue::Float(1.5), PropertyValue::Null]
        );
        assert_eq!(g.edge_attribute_names(), vec!["weight"]);
    }

    #[test]
    fn test_from_labeled() {
        let mut labeled: Graph = Graph::named("friends");
        labeled.add_nodes_with([
            ("Jeremy", properties([("followers", 130)])),
            ("Mark", properties([("followers", 2100)])),
        ]);
        labeled.add_edge_with("Jeremy", "Mark", properties([("since", 2019)]));

        let g = IndexedGraph::from_labeled(&labeled);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edges(), &[(0, 1)]);
        assert_eq!(g.find_vertex("Mark"), Some(1));
        assert_eq!(
            g.vs().at(1).unwrap().get("followers"),
            Some(&PropertyValue::Int(2100))
        );
        assert_eq!(
            g.es().at(0).unwrap().get("since"),
            Some(&PropertyValue::Int(2019))
        );
        assert_eq!(g.graph_attr("name"), Some(&PropertyValue::from("friends")));
    }
}
