//! 节点布局
//!
//! 坐标落在单位正方形内，顺序与节点插入顺序一致

use crate::graph::{Graph, NodeKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// 二维坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 布局算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    /// 力导向（Fruchterman-Reingold）
    #[default]
    Spring,
    /// 圆形
    Circular,
}

/// 力导向布局参数
#[derive(Debug, Clone, Copy)]
pub struct SpringParams {
    /// 初始位置的随机种子
    pub seed: u64,
    /// 迭代次数
    pub iterations: usize,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            seed: 42,
            iterations: 50,
        }
    }
}

/// 圆形布局：第 i 个节点位于角度 2πi/n
pub fn circular_layout<N: NodeKey>(graph: &Graph<N>) -> Vec<Point> {
    let n = graph.node_count();
    if n == 1 {
        return vec![Point::new(0.5, 0.5)];
    }
    (0..n)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / n as f64;
            Point::new(0.5 + 0.5 * theta.cos(), 0.5 + 0.5 * theta.sin())
        })
        .collect()
}

/// 力导向布局
///
/// 相邻节点相互吸引、所有节点两两排斥，温度线性衰减；结果缩放到单位正方形。
pub fn spring_layout<N: NodeKey>(graph: &Graph<N>, params: &SpringParams) -> Vec<Point> {
    let n = graph.node_count();
    match n {
        0 => return Vec::new(),
        1 => return vec![Point::new(0.5, 0.5)],
        _ => {}
    }

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let mut adjacent = vec![vec![false; n]; n];
    for (u, v, _) in graph.iter_edges() {
        if let (Some(i), Some(j)) = (graph.node_index(u), graph.node_index(v)) {
            adjacent[i][j] = true;
            adjacent[j][i] = true;
        }
    }

    let k = (1.0 / n as f64).sqrt();
    let mut t = 0.1;
    let dt = t / (params.iterations as f64 + 1.0);

    for _ in 0..params.iterations {
        let mut displacement = vec![Point::new(0.0, 0.0); n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let distance = (dx * dx + dy * dy).sqrt().max(0.01);
                let attraction = if adjacent[i][j] { distance / k } else { 0.0 };
                let force = k * k / (distance * distance) - attraction;
                displacement[i].x += dx * force;
                displacement[i].y += dy * force;
            }
        }
        for (p, d) in pos.iter_mut().zip(&displacement) {
            let length = (d.x * d.x + d.y * d.y).sqrt().max(0.01);
            p.x += d.x * t / length;
            p.y += d.y * t / length;
        }
        t -= dt;
    }

    rescale(pos)
}

/// 按坐标轴分别缩放到 [0, 1]，退化的轴放在 0.5
fn rescale(mut pos: Vec<Point>) -> Vec<Point> {
    let (min_x, max_x) = bounds(pos.iter().map(|p| p.x));
    let (min_y, max_y) = bounds(pos.iter().map(|p| p.y));
    for p in &mut pos {
        p.x = scale(p.x, min_x, max_x);
        p.y = scale(p.y, min_y, max_y);
    }
    pos
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn scale(v: f64, lo: f64, hi: f64) -> f64 {
    if hi - lo < f64::EPSILON {
        0.5
    } else {
        (v - lo) / (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new();
        g.add_edges_from([("a", "b"), ("b", "c"), ("c", "a")]);
        g.add_node("lonely");
        g
    }

    #[test]
    fn test_spring_deterministic_and_bounded() {
        let g = triangle();
        let params = SpringParams::default();
        let first = spring_layout(&g, &params);
        let second = spring_layout(&g, &params);

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert!(first
            .iter()
            .all(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)));
    }

    #[test]
    fn test_spring_trivial_graphs() {
        let mut g: Graph = Graph::new();
        assert!(spring_layout(&g, &SpringParams::default()).is_empty());

        g.add_node("Jeremy");
        assert_eq!(
            spring_layout(&g, &SpringParams::default()),
            vec![Point::new(0.5, 0.5)]
        );
    }

    #[test]
    fn test_circular_on_circle() {
        let g = triangle();
        let pos = circular_layout(&g);
        assert_eq!(pos.len(), 4);
        for p in &pos {
            let r = ((p.x - 0.5).powi(2) + (p.y - 0.5).powi(2)).sqrt();
            assert!((r - 0.5).abs() < 1e-9);
        }
        assert!((pos[0].x - 1.0).abs() < 1e-9);
    }
}
