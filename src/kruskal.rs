use super::disjointset::{DisjointSet, UnionFind};
use super::edgeweightedgraph::EdgeWeightedGraph;
use super::weightededge::WeightedEdge;

/// Kruskal法で求めた最小全域木
///
/// 連結でないグラフが与えられた場合は最小全域森 (連結成分数を変えないまま辺の重みの和を最小化したもの) になる.
/// 計算は構築時に1回だけ行われ, その後は変更されない. 別のグラフについて求めるには新しく構築する.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KruskalMst {
    edges: Vec<WeightedEdge>,
    weight: f64,
    components: usize,
}

impl KruskalMst {
    /// グラフ`graph`の最小全域木を構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *E*)
    #[must_use]
    pub fn kruskal(graph: &EdgeWeightedGraph) -> Self {
        Self::kruskal_with::<UnionFind>(graph)
    }

    /// 素集合データ構造に`D`を使って最小全域木を構築する.
    #[must_use]
    pub fn kruskal_with<D: DisjointSet>(graph: &EdgeWeightedGraph) -> Self {
        let n = graph.vertex_count();
        let tree_size = n.saturating_sub(1);

        // グラフの隣接リストの順序は変えず, コピーした辺だけを重みの昇順に並べる
        let mut sorted = graph.edges().copied().collect::<Vec<_>>();
        sorted.sort_by(WeightedEdge::compare_weight);

        let mut ds = D::with_len(n);
        let mut edges = Vec::with_capacity(tree_size);
        let mut weight = 0.0;
        for e in sorted {
            if edges.len() == tree_size {
                break;
            }
            let (u, v) = (e.from(), e.to());
            if ds.find(u) != ds.find(v) {
                ds.union(u, v);
                log::trace!("kruskal: accept {e}");
                weight += e.weight();
                edges.push(e);
            }
        }

        let components = ds.count();
        log::debug!(
            "kruskal: {} vertices, {} edges -> {} tree edges, weight {}, {} components",
            n,
            graph.edge_count(),
            edges.len(),
            weight,
            components
        );
        Self {
            edges,
            weight,
            components,
        }
    }

    /// 最小全域木の辺を, 採用した順 (重みの昇順) に返す.
    #[must_use]
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// 最小全域木の辺の重みの和を返す.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// グラフの連結成分数を返す.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// 全ての頂点を繋ぐ全域木になっているか判定する.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }
}
