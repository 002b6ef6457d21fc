use std::fmt;

use crate::error::{GraphError, Result};
use crate::weightededge::WeightedEdge;

/// グラフに追加された辺の番号. 追加された順に`0, 1, 2, ...`と振られる.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// 頂点`0..V`を持つ辺重み付き無向グラフ
///
/// 辺は`edges`に一度だけ格納し, 両端点の隣接リストはその番号を持つ.
/// 多重辺と自己ループも区別せずそのまま保持する.
#[derive(Clone, Debug, Default)]
pub struct EdgeWeightedGraph {
    edges: Vec<WeightedEdge>,
    adj: Box<[Vec<EdgeId>]>,
}

impl EdgeWeightedGraph {
    /// 頂点数`n`, 辺数0のグラフを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            edges: Vec::new(),
            adj: std::iter::repeat_with(Vec::new).take(n).collect(),
        }
    }

    /// 頂点数`n`のグラフを作り, `edges`を順に追加する.
    ///
    /// # Errors
    ///
    /// 頂点番号が範囲外の辺があれば, その時点で`GraphError::InvalidArgument`を返す.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = WeightedEdge>) -> Result<Self> {
        let mut graph = Self::new(n);
        for e in edges {
            graph.add_edge(e)?;
        }
        Ok(graph)
    }

    /// 頂点数を返す.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// 辺数を返す.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn validate_vertex(&self, arg: &'static str, v: usize) -> Result<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::vertex_out_of_range(arg, v, self.vertex_count()))
        }
    }

    /// 辺`e`をグラフに追加し, その辺の番号を返す.
    ///
    /// # Errors
    ///
    /// 端点のどちらかが`0..V`の範囲外なら`GraphError::InvalidArgument`を返し, グラフは変更されない.
    ///
    /// # Time complexity
    ///
    /// - *O*(1) (償却)
    pub fn add_edge(&mut self, e: WeightedEdge) -> Result<EdgeId> {
        self.validate_vertex("e.from", e.from())?;
        self.validate_vertex("e.to", e.to())?;
        let id = EdgeId(self.edges.len());
        self.edges.push(e);
        self.adj[e.from()].push(id);
        self.adj[e.to()].push(id);
        Ok(id)
    }

    /// 番号`id`の辺を返す.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&WeightedEdge> {
        self.edges.get(id.0)
    }

    /// 頂点`v`に接続する辺を追加した順に返すイテレータを作る.
    /// 自己ループは2回現れる.
    ///
    /// # Errors
    ///
    /// `v`が範囲外なら`GraphError::InvalidArgument`を返す.
    pub fn adjacent(&self, v: usize) -> Result<Adjacent<'_>> {
        self.validate_vertex("v", v)?;
        Ok(Adjacent {
            ids: self.adj[v].iter(),
            edges: &self.edges,
        })
    }

    /// 頂点`v`の次数 (隣接リストの長さ) を返す.
    ///
    /// # Errors
    ///
    /// `v`が範囲外なら`GraphError::InvalidArgument`を返す.
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex("v", v)?;
        Ok(self.adj[v].len())
    }

    /// 全ての辺をちょうど1回ずつ返す.
    ///
    /// 頂点`v`の隣接リストを見ている時, 反対側の端点が`v`より大きい辺だけを返すことで重複を除く.
    /// 自己ループは隣接リストに2回続けて現れるので, その1回目だけを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(*V* + *E*)
    pub fn edges(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.adj.iter().enumerate().flat_map(move |(v, ids)| {
            let mut self_loops = 0usize;
            ids.iter()
                .map(move |id| &self.edges[id.0])
                .filter(move |e| match e.other(v) {
                    Ok(w) if w > v => true,
                    Ok(w) if w == v => {
                        self_loops += 1;
                        self_loops % 2 == 1
                    }
                    _ => false,
                })
        })
    }

    /// 頂点`v`と頂点`w`を結ぶ辺が存在するか判定する.
    ///
    /// # Errors
    ///
    /// `v`か`w`が範囲外なら`GraphError::InvalidArgument`を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(deg(*v*))
    pub fn exists_edge(&self, v: usize, w: usize) -> Result<bool> {
        self.validate_vertex("w", w)?;
        Ok(self.adjacent(v)?.any(|e| e.other(v) == Ok(w)))
    }
}

/// 符号付き整数の頂点数からグラフを作るための実装を生やすマクロ
macro_rules! impl_try_from {
    ($($t: ty),*) => {$(
        impl TryFrom<$t> for EdgeWeightedGraph {
            type Error = GraphError;

            fn try_from(n: $t) -> Result<Self> {
                usize::try_from(n).map(Self::new).map_err(|_| GraphError::InvalidArgument {
                    arg: "n",
                    reason: format!("number of vertices must be non-negative, got {n}"),
                })
            }
        }
    )*};
}

impl_try_from! { i32, i64, isize }

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count())?;
        for (v, ids) in self.adj.iter().enumerate() {
            write!(f, "{v}: ")?;
            for id in ids {
                write!(f, "{}  ", self.edges[id.0])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// 頂点に接続する辺を列挙するイテレータ
#[derive(Clone, Debug)]
pub struct Adjacent<'a> {
    ids: std::slice::Iter<'a, EdgeId>,
    edges: &'a [WeightedEdge],
}

impl<'a> Iterator for Adjacent<'a> {
    type Item = &'a WeightedEdge;

    fn next(&mut self) -> Option<&'a WeightedEdge> {
        self.ids.next().map(|id| &self.edges[id.0])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}
impl ExactSizeIterator for Adjacent<'_> {
    fn len(&self) -> usize {
        self.ids.len()
    }
}
impl DoubleEndedIterator for Adjacent<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|id| &self.edges[id.0])
    }
}
impl std::iter::FusedIterator for Adjacent<'_> {}
