use crate::engine::board::Board;
use crate::engine::moves::Move;
use crate::engine::types::Color;

/// 手の選択に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// 終局済み、または合法手が無い。
    #[error("no move available")]
    NoMoveFound,
    /// AI の担当色が手番ではない。
    #[error("{side} asked to move, but it is {turn}'s turn")]
    NotMyTurn {
        /// AI の担当色。
        side: Color,
        /// 盤面の手番。
        turn: Color,
    },
}

/// 手を選択するAI。
pub trait Ai {
    /// 現在局面から次の手を選択する。
    ///
    /// # Errors
    ///
    /// 手を選べない場合は `SearchError` を返す。
    fn select_move(&mut self, board: &Board) -> Result<Move, SearchError>;
}
