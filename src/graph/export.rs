//! node-link JSON 导出
//!
//! 常见图交换格式：`{"directed", "multigraph", "graph", "nodes", "links"}`

use super::graph::Graph;
use super::node::NodeKey;
use crate::error::Result;
use crate::types::{Properties, PropertyValue};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Serialize)]
struct NodeLinkData<'a, N: NodeKey> {
    directed: bool,
    multigraph: bool,
    graph: &'a Properties,
    nodes: Vec<NodeRecord<'a, N>>,
    links: Vec<LinkRecord<'a, N>>,
}

/// 节点记录：属性在前，`id` 最后写入并覆盖同名属性
struct NodeRecord<'a, N: NodeKey> {
    attrs: &'a Properties,
    id: &'a N,
}

/// 边记录：`source`/`target` 覆盖同名属性
struct LinkRecord<'a, N: NodeKey> {
    attrs: &'a Properties,
    source: &'a N,
    target: &'a N,
}

/// 写出除 `reserved` 之外的属性
fn serialize_attrs<M: SerializeMap>(
    map: &mut M,
    attrs: &Properties,
    reserved: &[&str],
) -> std::result::Result<(), M::Error> {
    for (key, value) in attrs {
        if !reserved.contains(&key.as_str()) {
            map.serialize_entry(key, value)?;
        }
    }
    Ok(())
}

impl<N: NodeKey> Serialize for NodeRecord<'_, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        serialize_attrs(&mut map, self.attrs, &["id"])?;
        map.serialize_entry("id", self.id)?;
        map.end()
    }
}

impl<N: NodeKey> Serialize for LinkRecord<'_, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        serialize_attrs(&mut map, self.attrs, &["source", "target"])?;
        map.serialize_entry("source", self.source)?;
        map.serialize_entry("target", self.target)?;
        map.end()
    }
}

impl<N: NodeKey> Graph<N> {
    /// 导出为 node-link JSON 字符串
    pub fn to_node_link_json(&self) -> Result<String> {
        let mut graph = self.graph_attrs().clone();
        if let Some(name) = self.name() {
            graph.insert("name".to_string(), PropertyValue::from(name));
        }

        let data = NodeLinkData {
            directed: false,
            multigraph: false,
            graph: &graph,
            nodes: self
                .iter_nodes()
                .map(|(id, attrs)| NodeRecord { attrs, id })
                .collect(),
            links: self
                .iter_edges()
                .map(|(source, target, attrs)| LinkRecord {
                    attrs,
                    source,
                    target,
                })
                .collect(),
        };

        Ok(serde_json::to_string(&data)?)
    }
}
