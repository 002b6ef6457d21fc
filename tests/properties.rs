use std::collections::HashSet;

use mstgraph::{EdgeWeightedGraph, KruskalMst, PrimMst, UnionFind, WeightedEdge};
use proptest::prelude::*;

/// 頂点数と辺の列. 重みは整数値にして和の誤差を無くす.
fn graph_strategy(
    max_n: usize,
    max_e: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (1..=max_n).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, -5i32..20).prop_map(|(u, v, w)| (u, v, f64::from(w)));
        (Just(n), prop::collection::vec(edge, 0..=max_e))
    })
}

fn build(n: usize, edges: &[(usize, usize, f64)]) -> EdgeWeightedGraph {
    EdgeWeightedGraph::from_edges(n, edges.iter().map(|&(u, v, w)| WeightedEdge::new(u, v, w)))
        .unwrap()
}

fn components(g: &EdgeWeightedGraph) -> UnionFind {
    let mut uf = UnionFind::new(g.vertex_count());
    for e in g.edges() {
        uf.union(e.from(), e.to());
    }
    uf
}

/// 辺集合が閉路を含まないか
fn is_forest<'a>(n: usize, edges: impl IntoIterator<Item = &'a WeightedEdge>) -> bool {
    let mut uf = UnionFind::new(n);
    edges.into_iter().all(|e| {
        let merged = !uf.same(e.from(), e.to());
        uf.union(e.from(), e.to());
        merged
    })
}

/// 全ての辺部分集合を調べて最小全域森の重みを求める
fn brute_force_weight(n: usize, edges: &[WeightedEdge], forest_size: usize) -> f64 {
    let mut best = f64::INFINITY;
    for mask in 0u32..1 << edges.len() {
        if mask.count_ones() as usize != forest_size {
            continue;
        }
        let chosen = (0..edges.len())
            .filter(|i| mask >> i & 1 == 1)
            .map(|i| &edges[i])
            .collect::<Vec<_>>();
        if is_forest(n, chosen.iter().copied()) {
            best = best.min(chosen.iter().map(|e| e.weight()).sum());
        }
    }
    best
}

proptest! {
    #[test]
    fn edges_are_enumerated_once((n, edges) in graph_strategy(8, 20)) {
        let g = build(n, &edges);
        prop_assert_eq!(g.edge_count(), edges.len());
        let seen = g.edges().map(|e| e as *const WeightedEdge).collect::<HashSet<_>>();
        prop_assert_eq!(g.edges().count(), edges.len());
        prop_assert_eq!(seen.len(), edges.len());

        let degree_sum = (0..n).map(|v| g.degree(v).unwrap()).sum::<usize>();
        prop_assert_eq!(degree_sum, 2 * edges.len());
        for &(u, v, _) in &edges {
            prop_assert!(g.exists_edge(u, v).unwrap());
            prop_assert!(g.exists_edge(v, u).unwrap());
        }
    }

    #[test]
    fn kruskal_is_minimum_spanning_forest((n, edges) in graph_strategy(8, 20)) {
        let g = build(n, &edges);
        let mst = KruskalMst::kruskal(&g);
        let expected_components = components(&g).count();

        prop_assert_eq!(mst.component_count(), expected_components);
        prop_assert_eq!(mst.edges().len(), n - expected_components);
        prop_assert!(is_forest(n, mst.edges()));
        prop_assert_eq!(mst.weight(), mst.edges().iter().map(|e| e.weight()).sum::<f64>());
    }

    #[test]
    fn kruskal_matches_brute_force((n, edges) in graph_strategy(5, 8)) {
        let g = build(n, &edges);
        let mst = KruskalMst::kruskal(&g);
        let all = g.edges().copied().collect::<Vec<_>>();
        let forest_size = n - components(&g).count();
        prop_assert_eq!(mst.weight(), brute_force_weight(n, &all, forest_size));
    }

    #[test]
    fn prim_spans_start_component((n, edges) in graph_strategy(8, 20), start in 0usize..8) {
        let g = build(n, &edges);
        let start = start % n;
        let mst = PrimMst::prim(&g, start).unwrap();
        let kruskal = KruskalMst::kruskal(&g);
        let mut uf = components(&g);

        prop_assert!(is_forest(n, mst.edges()));
        for v in 0..n {
            prop_assert_eq!(mst.contains(v), uf.same(start, v));
        }
        let component_size = uf.size(start);
        prop_assert_eq!(mst.edges().count(), component_size - 1);

        // 同じ連結成分の中ではKruskal法と重みが一致する
        let kruskal_weight = kruskal
            .edges()
            .iter()
            .filter(|e| uf.same(start, e.from()))
            .map(|e| e.weight())
            .sum::<f64>();
        prop_assert_eq!(mst.weight(), kruskal_weight);
        if kruskal.is_spanning_tree() {
            prop_assert!(mst.is_spanning_tree());
            prop_assert_eq!(mst.weight(), kruskal.weight());
        }
    }

    #[test]
    fn results_are_stable((n, edges) in graph_strategy(6, 12)) {
        let g = build(n, &edges);
        let kruskal = KruskalMst::kruskal(&g);
        prop_assert_eq!(kruskal.edges(), kruskal.edges());
        prop_assert_eq!(kruskal.weight(), kruskal.weight());

        let prim = PrimMst::prim(&g, 0).unwrap();
        let first = prim.edges().copied().collect::<Vec<_>>();
        prop_assert_eq!(prim.edges().copied().collect::<Vec<_>>(), first);
        prop_assert_eq!(prim.weight(), prim.weight());
    }
}

#[test]
fn four_cycle_with_chord() {
    let g = build(
        4,
        &[
            (0, 1, 1.0),
            (1, 2, 2.0),
            (2, 3, 3.0),
            (3, 0, 4.0),
            (0, 2, 5.0),
        ],
    );
    let kruskal = KruskalMst::kruskal(&g);
    assert_eq!(kruskal.weight(), 6.0);
    for s in 0..4 {
        assert_eq!(PrimMst::prim(&g, s).unwrap().weight(), 6.0);
    }
}

#[test]
fn empty_graphs() {
    let kruskal = KruskalMst::kruskal(&EdgeWeightedGraph::new(0));
    assert!(kruskal.edges().is_empty());
    assert_eq!(kruskal.weight(), 0.0);

    let g = EdgeWeightedGraph::new(1);
    assert_eq!(KruskalMst::kruskal(&g).weight(), 0.0);
    let prim = PrimMst::prim(&g, 0).unwrap();
    assert_eq!(prim.edges().count(), 0);
    assert_eq!(prim.weight(), 0.0);
}
