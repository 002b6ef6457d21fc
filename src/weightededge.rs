use std::cmp::Ordering;
use std::fmt;

use crate::error::{GraphError, Result};

/// 重み付きの無向辺
///
/// 生成後は変更されない値で, `(u, v, w)` と `(v, u, w)` は等しい辺として扱う.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl WeightedEdge {
    /// 頂点`from`と頂点`to`を結ぶ重み`weight`の辺を作る.
    /// 頂点番号の範囲はグラフに追加する時に検査される.
    #[must_use]
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> usize {
        self.to
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 辺の端点のどちらか (`from`) を返す.
    #[must_use]
    pub fn either(&self) -> usize {
        self.from
    }

    /// 端点`v`とは反対側の端点を返す. 自己ループなら`v`自身を返す.
    ///
    /// # Errors
    ///
    /// `v`がこの辺の端点でない場合は`GraphError::InvalidArgument`を返す.
    pub fn other(&self, v: usize) -> Result<usize> {
        if v == self.from {
            Ok(self.to)
        } else if v == self.to {
            Ok(self.from)
        } else {
            Err(GraphError::InvalidArgument {
                arg: "v",
                reason: format!("vertex {v} is not an endpoint of edge {}", self),
            })
        }
    }

    /// 重みで辺を比較する. `f64::total_cmp`による全順序なのでソートに使える.
    #[must_use]
    pub fn compare_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        let same_ends = (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from);
        same_ends && self.weight.total_cmp(&other.weight) == Ordering::Equal
    }
}
impl Eq for WeightedEdge {}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{} {:5.2}", self.from, self.to, self.weight)
    }
}
