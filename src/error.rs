use thiserror::Error;

/// グラフ操作の事前条件違反を表すエラー
///
/// 頂点番号の範囲外や, 辺に接続していない頂点の指定など, 呼び出し側の契約違反のみを表す.
/// 再試行で回復することは無い.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },
}

impl GraphError {
    /// 頂点番号`vertex`が`0..n`の範囲外であることを表すエラーを作る.
    pub(crate) fn vertex_out_of_range(arg: &'static str, vertex: usize, n: usize) -> Self {
        let reason = if n == 0 {
            format!("vertex {vertex} is out of range: the graph has no vertices")
        } else {
            format!("vertex {vertex} is not between 0 and {}", n - 1)
        };
        Self::InvalidArgument { arg, reason }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
