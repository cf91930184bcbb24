use crate::ai::types::{Ai, SearchError};
use crate::engine::board::Board;
use crate::engine::moves::Move;
use crate::engine::types::Color;

/// 評価関数。
mod eval;
/// 探索の制限と統計。
mod limits;
/// ミニマックス探索（αβ枝刈り）。
mod search;

use limits::SearchLimits;

/// 既定の探索深さ（ply）。
pub const DEFAULT_DEPTH: u8 = 4;

/// 探索深さの上限（ply）。`WINNING_VALUE + MAX_DEPTH` が `INF` 未満に収まる。
pub const MAX_DEPTH: u8 = 19;

/// 勝ちを表す評価値の大きさ（残り深さを足して使う）。
const WINNING_VALUE: i32 = i32::MAX - 20;

/// 通常の評価値より大きい値。
const INF: i32 = i32::MAX;

/// 連結成分数の項の重み（`1000 / 成分数`）。
const WEIGHT_REGION_COUNT: i32 = 1000;

/// 最大連結成分サイズの重み。
const WEIGHT_LARGEST_REGION: i32 = 10;

/// アルファベータ探索を行うAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索深さ。
    depth: u8,
    /// 担当する色。
    side: Color,
}

impl Agent {
    /// 探索深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// 手を選び、`report` で対局進行側へ通知してから表記を返す。
    ///
    /// # Errors
    ///
    /// 担当色の手番でない場合、または選べる手が無い場合は `SearchError` を返す。
    #[inline]
    pub fn get_move<F: FnOnce(Move)>(
        &mut self,
        board: &Board,
        report: F,
    ) -> Result<String, SearchError> {
        let choice = self.select_move(board)?;
        report(choice);
        Ok(choice.to_string())
    }

    /// 担当色 `side` と探索深さ `depth` を指定して初期化する。
    ///
    /// 深さは探索時に `1..=MAX_DEPTH` へ丸める。
    #[inline]
    #[must_use]
    pub const fn new(side: Color, depth: u8) -> Self {
        Self { depth, side }
    }

    /// 担当色を返す。
    #[inline]
    #[must_use]
    pub const fn side(&self) -> Color {
        self.side
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board) -> Result<Move, SearchError> {
        let depth = search::normalize_depth(self.depth);
        let result = search::search_for_move(board, self.side, SearchLimits::new(depth))?;
        result.best_move().ok_or(SearchError::NoMoveFound)
    }
}
