//! 属性表打印器
//!
//! 以表格或垂直格式输出两种图的节点/顶点属性

use crate::graph::{Graph, NodeKey};
use crate::indexed::IndexedGraph;
use crate::types::Properties;
use indexmap::IndexSet;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 属性表打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 带标签图的节点属性表
    pub fn node_table<N: NodeKey>(&self, graph: &Graph<N>) -> String {
        let keys = attribute_keys(graph.iter_nodes().map(|(_, attrs)| attrs));
        let mut columns = vec!["node".to_string()];
        columns.extend(keys.iter().cloned());

        let rows: Vec<Vec<String>> = graph
            .iter_nodes()
            .map(|(node, attrs)| {
                let mut row = vec![node.label_text()];
                row.extend(keys.iter().map(|k| cell_text(attrs, k)));
                row
            })
            .collect();

        self.format_rows(&columns, &rows)
    }

    /// 带标签图的边属性表
    pub fn edge_table<N: NodeKey>(&self, graph: &Graph<N>) -> String {
        let keys = attribute_keys(graph.iter_edges().map(|(_, _, attrs)| attrs));
        let mut columns = vec!["source".to_string(), "target".to_string()];
        columns.extend(keys.iter().cloned());

        let rows: Vec<Vec<String>> = graph
            .iter_edges()
            .map(|(u, v, attrs)| {
                let mut row = vec![u.label_text(), v.label_text()];
                row.extend(keys.iter().map(|k| cell_text(attrs, k)));
                row
            })
            .collect();

        self.format_rows(&columns, &rows)
    }

    /// 索引图的顶点属性表
    pub fn vertex_table(&self, graph: &IndexedGraph) -> String {
        let names = graph.vertex_attribute_names();
        let mut columns = vec!["index".to_string()];
        columns.extend(names.iter().map(|n| n.to_string()));

        let rows: Vec<Vec<String>> = graph
            .vs()
            .iter()
            .map(|v| {
                let mut row = vec![v.index().to_string()];
                row.extend(
                    names
                        .iter()
                        .map(|n| v.get(n).map(|p| p.to_plain_string()).unwrap_or_default()),
                );
                row
            })
            .collect();

        self.format_rows(&columns, &rows)
    }

    fn format_rows(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if rows.is_empty() {
            return "Empty set\n".to_string();
        }
        match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        }
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, node_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Node Count", node_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }
}

/// 所有元素出现过的属性名（按首次出现顺序）
fn attribute_keys<'a>(attrs: impl Iterator<Item = &'a Properties>) -> IndexSet<String> {
    attrs.flat_map(|a| a.keys().cloned()).collect()
}

fn cell_text(attrs: &Properties, key: &str) -> String {
    attrs
        .get(key)
        .map(|v| v.to_plain_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::properties;

    fn demo_graph() -> Graph {
        let mut g = Graph::new();
        g.add_nodes_with([
            ("Jeremy", properties([("followers", 130)])),
            ("Mark", properties([("followers", 2100)])),
        ]);
        g.add_node("Ana");
        g.add_edge("Jeremy", "Mark");
        g
    }

    #[test]
    fn test_node_table() {
        let table = Printer::default().node_table(&demo_graph());
        assert!(table.contains("node"));
        assert!(table.contains("followers"));
        assert!(table.contains("Jeremy"));
        assert!(table.contains("2100"));
        assert!(table.contains("Ana"));
    }

    #[test]
    fn test_vertical_mode() {
        let printer = Printer::new(PrintMode::Vertical);
        let text = printer.node_table(&demo_graph());
        assert!(text.contains("1. row"));
        assert!(text.contains("     node: Jeremy"));
        assert!(text.contains("followers: 130"));
    }

    #[test]
    fn test_set_mode_switches_to_vertical() {
        let mut printer = Printer::default();
        let table = printer.node_table(&demo_graph());
        assert!(!table.contains("1. row"));

        printer.set_mode(PrintMode::Vertical);
        assert!(printer.node_table(&demo_graph()).contains("1. row"));
    }

    #[test]
    fn test_edge_and_vertex_tables() {
        let printer = Printer::default();
        assert!(printer.edge_table(&demo_graph()).contains("source"));
        assert_eq!(printer.edge_table(&Graph::<String>::new()), "Empty set\n");

        let mut g = IndexedGraph::new();
        g.add_named_vertices(["Jeremy", "Mark"]);
        let table = printer.vertex_table(&g);
        assert!(table.contains("index"));
        assert!(table.contains("Mark"));
    }

    #[test]
    fn test_stats() {
        let stats = Printer::default().print_stats(2, 1);
        assert!(stats.contains("Node Count"));
        assert!(stats.contains("Edge Count"));
    }
}
