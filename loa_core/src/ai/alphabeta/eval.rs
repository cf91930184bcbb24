use crate::engine::board::{Board, Outcome};
use crate::engine::types::Color;

use super::{WEIGHT_LARGEST_REGION, WEIGHT_REGION_COUNT, WINNING_VALUE};

/// 葉ノードの評価（`maximizer` 視点）。
///
/// 決着済みなら `±(WINNING_VALUE + depth)`。残り深さが大きい（早い）勝ちほど
/// 高く、負けは残り深さが大きいほど低くなる。引き分けと対局中は連結成分で評価する。
/// `depth` は `MAX_DEPTH` 以下を前提とし、勝ち負けの値は `±INF` に届かない。
pub(super) fn evaluate(board: &Board, maximizer: Color, depth: u8) -> i32 {
    let win = WINNING_VALUE.saturating_add(i32::from(depth));
    match board.winner() {
        Some(Outcome::Win(side)) if side == maximizer => win,
        Some(Outcome::Win(_)) => win.wrapping_neg(),
        Some(Outcome::Tie) | None => region_score(board, maximizer),
    }
}

/// 連結成分の数と最大サイズによる評価（`maximizer` 視点）。
pub(super) fn region_score(board: &Board, maximizer: Color) -> i32 {
    let regions = board.regions();
    let white = regions.sizes(Color::White);
    let black = regions.sizes(Color::Black);

    let mut score: i32 = 0;
    score = score.wrapping_add(count_term(white));
    score = score.wrapping_sub(count_term(black));
    score = score.wrapping_add(largest_term(white));
    score = score.wrapping_sub(largest_term(black));

    match maximizer {
        Color::White => score,
        Color::Black => score.wrapping_neg(),
    }
}

/// `1000 / 成分数`（駒が無ければ0）。
fn count_term(sizes: &[u8]) -> i32 {
    i32::try_from(sizes.len())
        .ok()
        .and_then(|count| WEIGHT_REGION_COUNT.checked_div(count))
        .unwrap_or(0)
}

/// `10 * 最大成分サイズ`（駒が無ければ0）。
fn largest_term(sizes: &[u8]) -> i32 {
    sizes
        .first()
        .map_or(0, |&size| i32::from(size).wrapping_mul(WEIGHT_LARGEST_REGION))
}
