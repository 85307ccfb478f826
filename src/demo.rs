//! 入门演示
//!
//! 依次演示带标签图与索引图的构建、属性赋值、加边与打印。
//! 两段演示互不共享状态；所有输出写入调用方提供的 writer。

use crate::draw::{self, DrawOptions, Viewer};
use crate::error::Result;
use crate::graph::Graph;
use crate::indexed::IndexedGraph;
use crate::types::properties;
use crate::VERSION;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// SVG 默认尺寸（像素）
const SVG_SIZE: (u32, u32) = (640, 480);

/// 演示配置
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// 绘图选项
    pub draw: DrawOptions,
    /// 额外保存的 SVG 路径
    pub svg_path: Option<PathBuf>,
    /// 是否额外打印 DOT 文本
    pub print_dot: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            draw: DrawOptions {
                with_labels: true,
                ..DrawOptions::default()
            },
            svg_path: None,
            print_dot: false,
        }
    }
}

/// 带标签图演示
pub fn run_labeled<W: Write>(
    out: &mut W,
    viewer: &mut Viewer,
    config: &DemoConfig,
) -> Result<Graph> {
    writeln!(out, "Current version of socialgraph imported is {}", VERSION)?;

    let mut g = Graph::new();

    g.add_node("Jeremy");
    debug!(nodes = g.node_count(), "添加节点 Jeremy");
    writeln!(out, "{}", g.nodes())?;
    writeln!(out, "{}", g)?;

    g.add_nodes_from(["Mark", "Jeremy"]);
    debug!(nodes = g.node_count(), "批量添加节点");
    writeln!(out, "{}. Current nodes in network: {}", g, g.nodes())?;

    g.add_nodes_with([
        ("Mark", properties([("followers", 2100)])),
        ("Jeremy", properties([("followers", 130)])),
    ]);
    debug!(nodes = %g.nodes().with_data(), "合并节点属性");
    writeln!(out, "{}", g)?;

    g.add_edge("Jeremy", "Mark");
    debug!(edges = g.edge_count(), "添加边");
    writeln!(out, "{}", g)?;
    writeln!(out, "{}", g.edges())?;

    let figure = draw::draw(&g, &config.draw);
    viewer.show(out, &figure)?;

    if let Some(path) = &config.svg_path {
        figure.save_svg(path, SVG_SIZE.0, SVG_SIZE.1)?;
        debug!(path = %path.display(), "SVG 已保存");
    }
    if config.print_dot {
        write!(out, "{}", draw::to_dot(&g))?;
    }

    Ok(g)
}

/// 索引图演示
pub fn run_indexed<W: Write>(out: &mut W) -> Result<IndexedGraph> {
    writeln!(
        out,
        "Current version of socialgraph indexed imported is: {}",
        VERSION
    )?;

    let mut g = IndexedGraph::new();
    g.add_vertices(2);

    // 逐个顶点赋值
    g.vs_mut().at(0)?.set("name", "Jeremy");
    g.vs_mut().at(1)?.set("name", "Mark");
    g.vs_mut().at(0)?.set("followers", 130);
    g.vs_mut().at(1)?.set("followers", 2100);

    // 整列赋值
    g.vs_mut().set_all("name", ["Jeremy", "Mark"])?;
    g.vs_mut().set_all("followers", [130, 2100])?;
    debug!(vertices = g.vertex_count(), "顶点属性已设置");

    g.add_edges([(0, 1)])?;
    writeln!(out, "{}", g)?;

    Ok(g)
}

/// 完整演示
pub fn run<W: Write>(out: &mut W, viewer: &mut Viewer, config: &DemoConfig) -> Result<()> {
    run_labeled(out, viewer, config)?;
    run_indexed(out)?;
    Ok(())
}
