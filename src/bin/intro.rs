//! SocialGraph 入门演示
//!
//! 构建小型图、添加节点与属性、加边、打印摘要并绘图

use anyhow::Context;
use clap::{Parser, ValueEnum};
use socialgraph::cli::{banner, PrintMode, Printer};
use socialgraph::demo::{self, DemoConfig};
use socialgraph::draw::{LayoutKind, SpringParams, Viewer};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Layout {
    Spring,
    Circular,
}

impl From<Layout> for LayoutKind {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Spring => LayoutKind::Spring,
            Layout::Circular => LayoutKind::Circular,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "socialgraph-intro")]
#[command(about = "SocialGraph 入门演示：带标签图与索引图")]
struct Args {
    /// 绘图后不等待关闭
    #[arg(long)]
    no_wait: bool,

    /// 布局算法
    #[arg(long, value_enum, default_value = "spring")]
    layout: Layout,

    /// 力导向布局的随机种子
    #[arg(long, default_value = "42")]
    seed: u64,

    /// 画布宽度（字符）
    #[arg(long, default_value = "60")]
    width: usize,

    /// 画布高度（行）
    #[arg(long, default_value = "20")]
    height: usize,

    /// 额外保存 SVG 到该路径
    #[arg(long)]
    svg: Option<PathBuf>,

    /// 额外打印 DOT 文本
    #[arg(long)]
    dot: bool,

    /// 打印属性表
    #[arg(long)]
    tables: bool,

    /// 属性表改用垂直格式（配合 --tables）
    #[arg(long)]
    vertical: bool,

    /// 日志级别（设置 RUST_LOG 时以其为准）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("无效的日志级别")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("启动参数: {:?}", args);

    let config = DemoConfig {
        draw: socialgraph::draw::DrawOptions {
            layout: args.layout.into(),
            spring: SpringParams {
                seed: args.seed,
                ..SpringParams::default()
            },
            with_labels: true,
        },
        svg_path: args.svg.clone(),
        print_dot: args.dot,
    };

    let mut viewer = if args.no_wait {
        Viewer::non_blocking(args.width, args.height)
    } else {
        Viewer::blocking(args.width, args.height)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut printer = Printer::default();
    if args.vertical {
        printer.set_mode(PrintMode::Vertical);
    }

    let labeled = demo::run_labeled(&mut out, &mut viewer, &config)?;
    if args.tables {
        writeln!(out, "{}", banner("nodes"))?;
        write!(out, "{}", printer.node_table(&labeled))?;
        writeln!(out, "{}", banner("edges"))?;
        write!(out, "{}", printer.edge_table(&labeled))?;
    }

    let indexed = demo::run_indexed(&mut out)?;
    if args.tables {
        writeln!(out, "{}", banner("vertices"))?;
        write!(out, "{}", printer.vertex_table(&indexed))?;
        write!(
            out,
            "{}",
            printer.print_stats(indexed.vertex_count(), indexed.edge_count())
        )?;
    }

    if let Some(path) = &args.svg {
        info!("SVG 已保存到 {}", path.display());
    }
    Ok(())
}
