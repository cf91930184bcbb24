use crate::engine::types::{Color, Square};

/// 盤面の中身（インデックス = `row * 8 + col`）。
pub(crate) type Cells = [Option<Color>; Square::COUNT];

/// 色ごとの連結成分（8近傍）のサイズ一覧。
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Regions {
    /// 黒の連結成分サイズ（降順）。
    black: Vec<u8>,
    /// 白の連結成分サイズ（降順）。
    white: Vec<u8>,
}

impl Regions {
    /// 盤面から両色の連結成分を求める。
    pub(crate) fn compute(cells: &Cells) -> Self {
        Self {
            black: region_sizes(cells, Color::Black),
            white: region_sizes(cells, Color::White),
        }
    }

    /// 最大の連結成分のサイズを返す（駒が無ければ `None`）。
    #[inline]
    #[must_use]
    pub fn largest(&self, side: Color) -> Option<u8> {
        self.sizes(side).first().copied()
    }

    /// 指定色の連結成分サイズ（降順）を返す。
    #[inline]
    #[must_use]
    pub fn sizes(&self, side: Color) -> &[u8] {
        match side {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }
}

/// `side` の連結成分サイズを降順で返す。
fn region_sizes(cells: &Cells, side: Color) -> Vec<u8> {
    let mut visited = [false; Square::COUNT];
    let mut sizes: Vec<u8> = Square::all()
        .map(|sq| flood_fill(cells, sq, side, &mut visited))
        .filter(|&size| size != u8::MIN)
        .collect();
    sizes.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));
    sizes
}

/// `start` を含む未訪問の連結成分のサイズを返し、訪問済みに印を付ける。
fn flood_fill(
    cells: &Cells,
    start: Square,
    side: Color,
    visited: &mut [bool; Square::COUNT],
) -> u8 {
    let mut size = u8::MIN;
    let mut stack = vec![start];

    while let Some(sq) = stack.pop() {
        let idx = usize::from(sq.index());
        let seen = match visited.get_mut(idx) {
            Some(slot) => slot,
            None => continue,
        };
        if *seen || cells.get(idx).copied().flatten() != Some(side) {
            continue;
        }
        *seen = true;
        size = size.saturating_add(1);
        stack.extend(sq.adjacent());
    }

    size
}
