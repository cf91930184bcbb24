use core::fmt;
use core::str::FromStr;

/// 手番（駒の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 盤面表示用の1文字表記を返す。
    #[inline]
    #[must_use]
    pub const fn abbrev(self) -> char {
        match self {
            Self::Black => 'b',
            Self::White => 'w',
        }
    }

    /// 表示用の名前を返す。
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 8方向。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// 北（行が増える向き）。
    N,
    /// 北東。
    NE,
    /// 東（列が増える向き）。
    E,
    /// 南東。
    SE,
    /// 南。
    S,
    /// 南西。
    SW,
    /// 西。
    W,
    /// 北西。
    NW,
}

impl Direction {
    /// 全方向（N から時計回り）。
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// 1歩あたりの（列, 行）の変化量を返す。
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::N => (0, 1),
            Self::NE => (1, 1),
            Self::E => (1, 0),
            Self::SE => (1, -1),
            Self::S => (0, -1),
            Self::SW => (-1, -1),
            Self::W => (-1, 0),
            Self::NW => (-1, 1),
        }
    }

    /// 変化量の符号から方向を求める（`(0, 0)` なら `None`）。
    #[inline]
    const fn from_signs(dcol: i8, drow: i8) -> Option<Self> {
        match (dcol.signum(), drow.signum()) {
            (0, 1) => Some(Self::N),
            (1, 1) => Some(Self::NE),
            (1, 0) => Some(Self::E),
            (1, -1) => Some(Self::SE),
            (0, -1) => Some(Self::S),
            (-1, -1) => Some(Self::SW),
            (-1, 0) => Some(Self::W),
            (-1, 1) => Some(Self::NW),
            _ => None,
        }
    }

    /// 逆向きの方向を返す。
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::E => Self::W,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::W => Self::E,
            Self::NW => Self::SE,
        }
    }
}

/// マス表記・指し手表記の解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// 盤面図の形式が不正。
    #[error("invalid board diagram: {0:?}")]
    Board(String),
    /// `<a-h><1-8>` の形式ではない。
    #[error("invalid square designator: {0:?}")]
    Square(String),
    /// `<マス>-<マス>` の形式ではない、または直線上にない。
    #[error("invalid move: {0:?}")]
    Move(String),
}

/// 盤面上のマス（0..=63のインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square(
    /// `row * 8 + col` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// マスの総数。
    pub const COUNT: usize = 64;

    /// 最長の移動距離。
    pub const MAX_DISTANCE: u8 = 7;

    /// 隣接するマス（最大8つ）を返す。
    #[inline]
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.move_dest(dir, 1))
    }

    /// 全64マスをインデックス順に返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::MIN..64_u8).map(Self)
    }

    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// `to` への方向を返す。同じ行・列・斜め線上にない場合は `None`。
    #[inline]
    #[must_use]
    pub fn direction(self, to: Self) -> Option<Direction> {
        let (dcol, drow) = self.offset(to);
        if dcol != 0 && drow != 0 && dcol.unsigned_abs() != drow.unsigned_abs() {
            return None;
        }
        Direction::from_signs(dcol, drow)
    }

    /// `to` までの距離（チェビシェフ距離）を返す。直線上にない場合は `None`。
    #[inline]
    #[must_use]
    pub fn distance(self, to: Self) -> Option<u8> {
        self.direction(to)?;
        let (dcol, drow) = self.offset(to);
        Some(dcol.unsigned_abs().max(drow.unsigned_abs()))
    }

    /// 座標が盤内かどうかを返す。
    #[inline]
    #[must_use]
    pub const fn exists(col: i8, row: i8) -> bool {
        col >= 0 && row >= 0 && col < 8 && row < 8
    }

    /// 盤面座標（col, row）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_col_row(col: u8, row: u8) -> Option<Self> {
        if col >= Self::BOARD_LEN || row >= Self::BOARD_LEN {
            return None;
        }

        let mut idx = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(col) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=63 のインデックスから `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 { Some(Self(index)) } else { None }
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// `to` への移動が8方向の直線移動（距離1..=7）かどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_valid_move(self, to: Self) -> bool {
        self.distance(to)
            .is_some_and(|dist| dist >= 1 && dist <= Self::MAX_DISTANCE)
    }

    /// `dir` 方向へ `steps` マス進んだマスを返す。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn move_dest(self, dir: Direction, steps: u8) -> Option<Self> {
        let steps_i8 = i8::try_from(steps).ok()?;
        let (dcol, drow) = dir.delta();
        let col = self.col_i8().checked_add(dcol.checked_mul(steps_i8)?)?;
        let row = self.row_i8().checked_add(drow.checked_mul(steps_i8)?)?;
        if !Self::exists(col, row) {
            return None;
        }
        Self::from_col_row(u8::try_from(col).ok()?, u8::try_from(row).ok()?)
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// 列を符号付きで返す。
    #[inline]
    fn col_i8(self) -> i8 {
        i8::try_from(self.col()).unwrap_or(i8::MAX)
    }

    /// `to` との（列, 行）の差を返す。
    #[inline]
    fn offset(self, to: Self) -> (i8, i8) {
        (
            to.col_i8().wrapping_sub(self.col_i8()),
            to.row_i8().wrapping_sub(self.row_i8()),
        )
    }

    /// 行を符号付きで返す。
    #[inline]
    fn row_i8(self) -> i8 {
        i8::try_from(self.row()).unwrap_or(i8::MAX)
    }
}

impl fmt::Display for Square {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = char::from(b'a'.wrapping_add(self.col()));
        let row = char::from(b'1'.wrapping_add(self.row()));
        write!(f, "{col}{row}")
    }
}

impl FromStr for Square {
    type Err = ParseError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Square(text.to_owned());
        let [col, row] = text.as_bytes() else {
            return Err(invalid());
        };
        if !(b'a'..=b'h').contains(col) || !(b'1'..=b'8').contains(row) {
            return Err(invalid());
        }
        Self::from_col_row(col.wrapping_sub(b'a'), row.wrapping_sub(b'1')).ok_or_else(invalid)
    }
}
