use core::fmt;
use core::str::FromStr;
use std::sync::LazyLock;

use crate::engine::types::{ParseError, Square};

/// 盤面の内容に依存しない、幾何的に可能な全指し手。
///
/// 移動元インデックス、移動先インデックスの順に並ぶ。この順序が
/// 合法手の列挙順になる。
static UNIVERSE: LazyLock<Vec<Move>> = LazyLock::new(|| {
    let mut moves = Vec::new();
    for from in Square::all() {
        for to in Square::all() {
            if let Some(mv) = Move::new(from, to) {
                moves.push(mv);
            }
        }
    }
    moves
});

/// 指し手（移動元→移動先、取り込みかどうか）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// 相手の駒を取る手かどうか。
    capture: bool,
    /// 移動元。
    from: Square,
    /// 移動先。
    to: Square,
}

impl Move {
    /// 幾何的に可能な全指し手（取り込みなし）を返す。
    #[inline]
    #[must_use]
    pub fn all() -> &'static [Self] {
        UNIVERSE.as_slice()
    }

    /// 同じ移動で取り込みフラグを立てた手を返す。
    #[inline]
    #[must_use]
    pub const fn capture_move(self) -> Self {
        Self {
            capture: true,
            from: self.from,
            to: self.to,
        }
    }

    /// 移動元を返す。
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// 取り込みかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.capture
    }

    /// 取り込みなしの指し手を生成する。8方向の直線移動でない場合は `None`。
    #[inline]
    #[must_use]
    pub fn new(from: Square, to: Square) -> Option<Self> {
        from.is_valid_move(to).then_some(Self {
            capture: false,
            from,
            to,
        })
    }

    /// 移動先を返す。
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// `c2-c4` 形式の指し手を解析する（取り込みフラグは立たない）。
    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Move(text.to_owned());
        let (from_text, to_text) = text.split_once('-').ok_or_else(invalid)?;
        let from = from_text.parse::<Square>().map_err(|_err| invalid())?;
        let to = to_text.parse::<Square>().map_err(|_err| invalid())?;
        Self::new(from, to).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::engine::types::Square;

    #[test]
    fn universe_holds_every_straight_line_once() {
        let all = Move::all();
        // 各方向・各距離の組み合わせを数え上げた値。
        assert_eq!(all.len(), 1456);
        assert!(all.iter().all(|mv| !mv.is_capture()));
        assert!(all.iter().all(|mv| mv.from().is_valid_move(mv.to())));

        let from_corner = all
            .iter()
            .filter(|mv| mv.from() == Square::from_index(0).unwrap_or_else(|| panic!("a1")))
            .count();
        assert_eq!(from_corner, 21);
    }

    #[test]
    fn universe_is_ordered_by_origin_then_destination() {
        let all = Move::all();
        let keys: Vec<(u8, u8)> = all
            .iter()
            .map(|mv| (mv.from().index(), mv.to().index()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn text_form_parses_and_prints() {
        let mv: Move = "c2-c4".parse().unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(mv.to_string(), "c2-c4");
        assert!(!mv.is_capture());
        assert_eq!(mv.capture_move().to_string(), "c2-c4");
        assert_ne!(mv, mv.capture_move());

        assert!("c2c4".parse::<Move>().is_err());
        assert!("c2-d4".parse::<Move>().is_err());
        assert!("c2-c2".parse::<Move>().is_err());
        assert!("c2-c9".parse::<Move>().is_err());
    }
}
