use crate::ai::types::SearchError;
use crate::engine::board::Board;
use crate::engine::moves::Move;
use crate::engine::types::Color;

use super::{INF, MAX_DEPTH};
use super::eval::evaluate;
use super::limits::{SearchLimits, SearchStats};

/// 探索結果。
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchResult {
    /// ルートで選択した最善手（ルートが葉なら `None`）。
    best_move: Option<Move>,
    /// ルートの評価値。
    #[cfg(test)]
    best_score: i32,
    /// 探索統計。
    #[cfg(test)]
    stats: SearchStats,
}

impl SearchResult {
    /// ルートで選択した最善手を返す。
    pub(super) const fn best_move(self) -> Option<Move> {
        self.best_move
    }

    #[cfg(test)]
    /// ルートの評価値を返す（テスト用）。
    pub(super) const fn best_score(self) -> i32 {
        self.best_score
    }

    #[cfg(test)]
    /// 探索統計を返す（テスト用）。
    pub(super) const fn stats(self) -> SearchStats {
        self.stats
    }
}

/// 探索深さを正規化する（0は1に、`MAX_DEPTH` を超える値は `MAX_DEPTH` にする）。
#[inline]
pub(super) const fn normalize_depth(depth: u8) -> u8 {
    if depth == u8::MIN {
        u8::MIN.wrapping_add(1)
    } else if depth > MAX_DEPTH {
        MAX_DEPTH
    } else {
        depth
    }
}

/// ルート探索。盤面を複製し、`side` を最大化側として探索する。
pub(super) fn search_for_move(
    board: &Board,
    side: Color,
    limits: SearchLimits,
) -> Result<SearchResult, SearchError> {
    let work = board.clone();
    let turn = work.side_to_move();
    if turn != side {
        return Err(SearchError::NotMyTurn { side, turn });
    }

    let mut stats = SearchStats::default();
    let (score, best_move) = find_move(&work, limits.max_depth(), side, -INF, INF, &mut stats);

    tracing::debug!(
        side = %side,
        depth = limits.max_depth(),
        nodes = stats.nodes(),
        cutoffs = stats.cutoffs(),
        score,
        best_move = ?best_move.map(|mv| mv.to_string()),
        "search finished"
    );

    Ok(SearchResult {
        best_move,
        #[cfg(test)]
        best_score: score,
        #[cfg(test)]
        stats,
    })
}

/// ミニマックス（αβ付き）。評価値と、最大化側ノードで見つけた最善手を返す。
///
/// - 深さ0、決着済み、合法手なしのいずれかなら静的評価を返し、手は記録しない。
/// - 最善手は評価値が真に改善したときだけ更新する（同値なら先に見つけた手が残る）。
/// - 各子ノードは盤面の複製に着手して探索するので、取り消しは不要。
pub(super) fn find_move(
    board: &Board,
    depth: u8,
    maximizer: Color,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> (i32, Option<Move>) {
    stats.inc_nodes();

    if depth == u8::MIN || board.game_over() {
        return (evaluate(board, maximizer, depth), None);
    }

    let legal_moves = board.legal_moves();
    if legal_moves.is_empty() {
        return (evaluate(board, maximizer, depth), None);
    }

    let next_depth = depth.saturating_sub(1);

    if board.side_to_move() == maximizer {
        let mut best_value = -INF;
        let mut best_move: Option<Move> = None;

        for mv in legal_moves {
            let mut child = board.clone();
            if child.apply_move(mv).is_err() {
                continue;
            }
            let (value, _) = find_move(&child, next_depth, maximizer, alpha, beta, stats);
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_value);
            if beta <= alpha {
                stats.inc_cutoffs();
                break;
            }
        }

        (best_value, best_move)
    } else {
        let mut best_value = INF;

        for mv in legal_moves {
            let mut child = board.clone();
            if child.apply_move(mv).is_err() {
                continue;
            }
            let (value, _) = find_move(&child, next_depth, maximizer, alpha, beta, stats);
            best_value = best_value.min(value);
            beta = beta.min(best_value);
            if beta <= alpha {
                stats.inc_cutoffs();
                break;
            }
        }

        (best_value, None)
    }
}
