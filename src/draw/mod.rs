//! 绘图模块
//!
//! 布局、终端画布、SVG 与 DOT 输出

mod dot;
mod figure;
mod layout;
mod viewer;

pub use dot::{to_dot, write_dot};
pub use figure::Figure;
pub use layout::{circular_layout, spring_layout, LayoutKind, Point, SpringParams};
pub use viewer::Viewer;

use crate::graph::{Graph, NodeKey};

/// 绘图选项
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawOptions {
    pub layout: LayoutKind,
    pub spring: SpringParams,
    pub with_labels: bool,
}

/// 计算布局并生成 `Figure`
pub fn draw<N: NodeKey>(graph: &Graph<N>, options: &DrawOptions) -> Figure {
    let positions = match options.layout {
        LayoutKind::Spring => spring_layout(graph, &options.spring),
        LayoutKind::Circular => circular_layout(graph),
    };

    let labels = graph.nodes().iter().map(|node| node.label_text()).collect();
    let edges = graph
        .iter_edges()
        .filter_map(|(u, v, _)| Some((graph.node_index(u)?, graph.node_index(v)?)))
        .collect();

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        layout = ?options.layout,
        "图布局完成"
    );

    Figure {
        labels,
        positions,
        edges,
        with_labels: options.with_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_collects_labels_and_edges() {
        let mut g: Graph = Graph::new();
        g.add_nodes_from(["Jeremy", "Mark"]);
        g.add_edge("Jeremy", "Mark");

        let figure = draw(
            &g,
            &DrawOptions {
                layout: LayoutKind::Circular,
                with_labels: true,
                ..DrawOptions::default()
            },
        );
        assert_eq!(figure.labels(), &["Jeremy".to_string(), "Mark".to_string()]);
        assert_eq!(figure.node_count(), 2);
        assert!(figure.to_canvas(40, 10).unwrap().contains("oMark"));
    }
}
