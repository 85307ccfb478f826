//! 索引图摘要输出
//!
//! ```text
//! IGRAPH UN-- 2 1 --
//! + attr: followers (v), name (v)
//! + edges (vertex names):
//! Jeremy--Mark
//! ```

use super::graph::IndexedGraph;
use std::fmt;

/// 边列表单行最大宽度
const LINE_WIDTH: usize = 78;

impl IndexedGraph {
    /// 四位标志：有向(D/U)、命名(N)、加权(W)、二分(B)
    pub fn summary_code(&self) -> String {
        let vertices = self.vertex_columns();
        let edges = self.edge_columns();
        [
            if self.is_directed() { 'D' } else { 'U' },
            if vertices.contains("name") { 'N' } else { '-' },
            if edges.contains("weight") { 'W' } else { '-' },
            if vertices.contains("type") { 'B' } else { '-' },
        ]
        .iter()
        .collect()
    }

    fn attribute_line(&self) -> Option<String> {
        let mut graph_names: Vec<&str> = self.graph_attrs().keys().map(String::as_str).collect();
        graph_names.sort_unstable();

        let entries: Vec<String> = graph_names
            .into_iter()
            .map(|name| format!("{} (g)", name))
            .chain(
                self.vertex_columns()
                    .sorted_names()
                    .into_iter()
                    .map(|name| format!("{} (v)", name)),
            )
            .chain(
                self.edge_columns()
                    .sorted_names()
                    .into_iter()
                    .map(|name| format!("{} (e)", name)),
            )
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(format!("+ attr: {}", entries.join(", ")))
        }
    }

    fn vertex_label(&self, index: usize) -> String {
        self.vs()
            .at(index)
            .ok()
            .and_then(|v| v.get("name"))
            .map(|name| name.to_plain_string())
            .unwrap_or_else(|| index.to_string())
    }
}

impl fmt::Display for IndexedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IGRAPH {} {} {} --",
            self.summary_code(),
            self.vertex_count(),
            self.edge_count()
        )?;
        if let Some(name) = self.graph_attr("name") {
            write!(f, " {}", name.to_plain_string())?;
        }

        if let Some(line) = self.attribute_line() {
            write!(f, "\n{}", line)?;
        }

        if self.edge_count() == 0 {
            return Ok(());
        }

        let named = self.vertex_columns().contains("name");
        let arrow = if self.is_directed() { "->" } else { "--" };
        let (header, separator) = if named {
            ("+ edges (vertex names):", ", ")
        } else {
            ("+ edges:", " ")
        };
        write!(f, "\n{}", header)?;

        let mut line = String::new();
        for &(a, b) in self.edges() {
            let item = if named {
                format!("{}{}{}", self.vertex_label(a), arrow, self.vertex_label(b))
            } else {
                format!("{}{}{}", a, arrow, b)
            };
            if !line.is_empty() && line.len() + separator.len() + item.len() > LINE_WIDTH {
                write!(f, "\n{}", line)?;
                line.clear();
            } else if !line.is_empty() {
                line.push_str(separator);
            }
            line.push_str(&item);
        }
        write!(f, "\n{}", line)
    }
}

#[cfg(test)]
mod tests {
    use crate::indexed::IndexedGraph;

    #[test]
    fn test_demo_summary() {
        let mut g = IndexedGraph::new();
        g.add_vertices(2);
        g.vs_mut().set_all("name", ["Jeremy", "Mark"]).unwrap();
        g.vs_mut().set_all("followers", [130, 2100]).unwrap();
        g.add_edges([(0, 1)]).unwrap();

        assert_eq!(
            g.to_string(),
            "IGRAPH UN-- 2 1 --\n\
             + attr: followers (v), name (v)\n\
             + edges (vertex names):\n\
             Jeremy--Mark"
        );
    }

    #[test]
    fn test_empty_summary() {
        let g = IndexedGraph::new();
        assert_eq!(g.to_string(), "IGRAPH U--- 0 0 --");
    }

    #[test]
    fn test_unnamed_directed_weighted() {
        let mut g = IndexedGraph::directed();
        g.set_graph_attr("name", "flows");
        g.add_vertices(3);
        g.add_edges([(0, 1), (1, 2)]).unwrap();
        g.es_mut().set_all("weight", [0.5, 2.0]).unwrap();

        assert_eq!(g.summary_code(), "D-W-");
        assert_eq!(
            g.to_string(),
            "IGRAPH D-W- 3 2 -- flows\n\
             + attr: name (g), weight (e)\n\
             + edges:\n\
             0->1 1->2"
        );
    }

    #[test]
    fn test_long_edge_list_wraps() {
        let mut g = IndexedGraph::new();
        g.add_vertices(100);
        g.add_edges((0..40).map(|i| (i, i + 50))).unwrap();

        let text = g.to_string();
        assert!(text.lines().skip(2).all(|line| line.len() <= 78));
        assert_eq!(
            text.lines()
                .skip(2)
                .map(|line| line.split(' ').count())
                .sum::<usize>(),
            40
        );
    }
}
