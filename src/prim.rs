use super::edgeweightedgraph::EdgeWeightedGraph;
use super::error::{GraphError, Result};
use super::indexminpq::{IndexMinPq, IndexedMinPriorityQueue};
use super::weightededge::WeightedEdge;

/// Prim法で求めた最小全域木
///
/// 始点を含む連結成分の最小全域木だけを持ち, 始点から到達できない頂点は木に含まれない.
/// 計算は構築時に1回だけ行われ, その後は変更されない.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimMst {
    start: usize,
    // 各頂点を木に繋いだ辺 (始点と到達不可能な頂点はNone)
    edge_to: Box<[Option<WeightedEdge>]>,
}

impl PrimMst {
    /// 頂点`start`から木を伸ばして最小全域木を構築する.
    ///
    /// # Errors
    ///
    /// `start`が`0..V`の範囲外なら`GraphError::InvalidArgument`を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *V*)
    pub fn prim(graph: &EdgeWeightedGraph, start: usize) -> Result<Self> {
        Self::prim_with::<IndexMinPq>(graph, start)
    }

    /// 優先度付きキューに`Q`を使って最小全域木を構築する.
    ///
    /// # Errors
    ///
    /// `start`が`0..V`の範囲外なら`GraphError::InvalidArgument`を返す.
    pub fn prim_with<Q: IndexedMinPriorityQueue>(
        graph: &EdgeWeightedGraph,
        start: usize,
    ) -> Result<Self> {
        let n = graph.vertex_count();
        if start >= n {
            return Err(GraphError::vertex_out_of_range("start", start, n));
        }

        let mut edge_to = vec![None; n].into_boxed_slice();
        let mut dist_to = vec![f64::INFINITY; n].into_boxed_slice();
        let mut marked = vec![false; n].into_boxed_slice();
        dist_to[start] = 0.0;

        let mut pq = Q::with_capacity(n);
        for (v, &d) in dist_to.iter().enumerate() {
            pq.insert(v, d);
        }

        while let Some(v) = pq.extract_min() {
            // 残りは全て始点から到達できない
            if dist_to[v] == f64::INFINITY {
                break;
            }
            marked[v] = true;
            for e in graph.adjacent(v)? {
                let w = e.other(v)?;
                if marked[w] {
                    continue;
                }
                if e.weight() < dist_to[w] {
                    log::trace!("prim: {w} reached by {e}");
                    dist_to[w] = e.weight();
                    edge_to[w] = Some(*e);
                    pq.decrease_key(w, e.weight());
                }
            }
        }

        let mst = Self { start, edge_to };
        log::debug!(
            "prim: {} vertices, {} edges, start {} -> {} tree edges, weight {}",
            n,
            graph.edge_count(),
            start,
            mst.edges().count(),
            mst.weight()
        );
        Ok(mst)
    }

    /// 始点を返す.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// 最小全域木の辺を, 繋がれた側の頂点番号の順に返す.
    pub fn edges(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.edge_to.iter().flatten()
    }

    /// 最小全域木の辺の重みの和を求める. 呼ぶたびに辺を走査して計算する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*V*)
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.edges().map(WeightedEdge::weight).sum()
    }

    /// 頂点`v`を木に繋いだ辺を返す. `v`が始点, 範囲外, 到達不可能のいずれかなら`None`を返す.
    #[must_use]
    pub fn edge_to(&self, v: usize) -> Option<&WeightedEdge> {
        self.edge_to.get(v)?.as_ref()
    }

    /// 頂点`v`が始点を含む木に含まれるか判定する.
    #[must_use]
    pub fn contains(&self, v: usize) -> bool {
        v == self.start || self.edge_to(v).is_some()
    }

    /// 全ての頂点を繋ぐ全域木になっているか判定する.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.edges().count() + 1 == self.edge_to.len()
    }
}
