//! Graphviz DOT 导出

use crate::graph::{Graph, NodeKey};
use crate::types::PropertyValue;
use std::io::{self, Write};

/// 将带标签图写为 DOT 格式，节点属性作为 DOT 属性输出
pub fn write_dot<N: NodeKey, W: Write>(graph: &Graph<N>, out: &mut W) -> io::Result<()> {
    let name = graph.name().unwrap_or("G");
    writeln!(out, "graph {:?} {{", name)?;

    for (i, (node, attrs)) in graph.iter_nodes().enumerate() {
        write!(out, "    v{} [label={:?}", i, node.label_text())?;
        for (key, value) in attrs {
            write!(out, ", {:?}={:?}", key, dot_value(value))?;
        }
        out.write_all(b"];\n")?;
    }

    for (u, v, _) in graph.iter_edges() {
        if let (Some(a), Some(b)) = (graph.node_index(u), graph.node_index(v)) {
            writeln!(out, "    v{} -- v{};", a, b)?;
        }
    }

    out.write_all(b"}\n")
}

/// DOT 文本
pub fn to_dot<N: NodeKey>(graph: &Graph<N>) -> String {
    let mut buf = Vec::new();
    // 写入 Vec 不会失败
    let _ = write_dot(graph, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn dot_value(value: &PropertyValue) -> String {
    value.to_plain_string()
}
