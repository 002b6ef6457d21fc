//! 辺重み付き無向グラフと, その最小全域木を求めるKruskal法とPrim法.
//!
//! 連結でないグラフに対してはどちらもエラーにせず, Kruskal法は最小全域森を,
//! Prim法は始点を含む連結成分の最小全域木を返す.
//!
//! ログは`log`クレートに出力する. ロガーの設定は利用側で行う.

pub mod disjointset;
pub mod edgeweightedgraph;
pub mod error;
pub mod indexminpq;
pub mod kruskal;
pub mod prim;
pub mod weightededge;

pub use disjointset::{DisjointSet, UnionFind};
pub use edgeweightedgraph::{Adjacent, EdgeId, EdgeWeightedGraph};
pub use error::{GraphError, Result};
pub use indexminpq::{IndexMinPq, IndexedMinPriorityQueue};
pub use kruskal::KruskalMst;
pub use prim::PrimMst;
pub use weightededge::WeightedEdge;
