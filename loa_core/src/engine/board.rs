use core::cell::OnceCell;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::engine::moves::Move;
use crate::engine::regions::{Cells, Regions};
use crate::engine::types::{Color, Direction, ParseError, Square};

/// 引き分けになるまでの各手番の手数（既定値）。
pub const DEFAULT_MOVE_LIMIT: u16 = 60;

/// 黒駒。
const B: Option<Color> = Some(Color::Black);

/// 白駒。
const W: Option<Color> = Some(Color::White);

/// 空きマス。
const E: Option<Color> = None;

/// 初期配置（下の行＝1段目から）。
const INITIAL_ROWS: [[Option<Color>; 8]; 8] = [
    [E, B, B, B, B, B, B, E],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [E, B, B, B, B, B, B, E],
];

/// 対局結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// 引き分け（手数制限）。
    Tie,
    /// 指定色の勝ち（全駒が連結）。
    Win(Color),
}

/// 盤面操作の事前条件違反。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BoardError {
    /// 合法手ではない手を適用しようとした。
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// 手数制限が既に指された手数以下になる。
    #[error("move limit {limit} per side is too small after {moves_made} moves")]
    MoveLimitTooSmall {
        /// 指定された各手番の手数。
        limit: u16,
        /// 既に指された手数。
        moves_made: usize,
    },
    /// 取り消す手が無い。
    #[error("no move to retract")]
    NoMoveToRetract,
}

/// Lines of Action の盤面（駒配置、手番、棋譜、派生情報のキャッシュ）。
///
/// 変更は `apply_move` / `retract` / `set` 系のみで行い、そのたびに
/// 連結成分と勝敗のキャッシュを破棄する。
#[derive(Clone, Debug)]
pub struct Board {
    /// 64マスの中身。
    cells: Cells,
    /// 引き分けになる総手数（両手番の合計）。
    move_limit: usize,
    /// 適用済みの手（取り消されていないもの）。
    moves: Vec<Move>,
    /// 連結成分のキャッシュ。
    regions: OnceCell<Regions>,
    /// 手番。
    side_to_move: Color,
    /// 勝敗のキャッシュ（`None` は対局中）。
    winner: OnceCell<Option<Outcome>>,
}

impl Board {
    /// 着手を適用する。
    ///
    /// 移動先に相手の駒があれば、受け取った手のフラグに関わらず
    /// 取り込みとして棋譜に記録する。
    ///
    /// # Errors
    ///
    /// `mv` が合法手でない場合、盤面を変更せずに `BoardError::IllegalMove` を返す。
    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_legal_move(mv) {
            return Err(BoardError::IllegalMove(mv));
        }

        let mover = self.side_to_move;
        let opponent = mover.opponent();
        let recorded = if self.get(mv.to()) == Some(opponent) {
            tracing::trace!(mv = %mv, "capture");
            mv.capture_move()
        } else {
            mv
        };

        self.put(mv.to(), Some(mover));
        self.put(mv.from(), None);
        self.moves.push(recorded);
        self.invalidate_caches();

        if self.pieces_contiguous(mover) {
            tracing::trace!(winner = %mover, mv = %recorded, "game decided");
            self.winner = OnceCell::from(Some(Outcome::Win(mover)));
        } else if self.pieces_contiguous(opponent) {
            tracing::trace!(winner = %opponent, mv = %recorded, "game decided");
            self.winner = OnceCell::from(Some(Outcome::Win(opponent)));
        } else {
            // 手数制限による引き分けは `winner` で遅延評価する。
        }

        self.side_to_move = opponent;
        Ok(())
    }

    /// 初期配置に戻す（手数制限も既定値に戻る）。
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::initial();
    }

    /// 盤面図（`Display` の駒部分と同じ形式）から盤面を生成する。
    ///
    /// 上の行（8段目）から順に、空白区切りの `b` / `w` / `-` を8行並べる。
    /// 空行、`===` 行、`Next move:` 行は無視する。
    ///
    /// # Errors
    ///
    /// 行数・列数・駒記号が不正な場合、`ParseError::Board` を返す。
    #[inline]
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> Result<Self, ParseError> {
        let invalid = || ParseError::Board(diagram.to_owned());
        let lines: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| {
                !line.is_empty() && !line.starts_with("===") && !line.starts_with("Next move:")
            })
            .collect();
        if lines.len() != usize::from(Square::BOARD_LEN) {
            return Err(invalid());
        }

        let mut rows = [[None; 8]; 8];
        for (line, row) in lines.iter().zip(rows.iter_mut().rev()) {
            let pieces: Vec<Option<Color>> = line
                .split_whitespace()
                .map(|token| match token {
                    "b" => Ok(Some(Color::Black)),
                    "w" => Ok(Some(Color::White)),
                    "-" => Ok(None),
                    _ => Err(invalid()),
                })
                .collect::<Result<_, _>>()?;
            *row = pieces.try_into().map_err(|_len| invalid())?;
        }

        Ok(Self::from_rows(rows, side_to_move))
    }

    /// 任意の配置から盤面を生成する（`rows[row][col]`、下の行から）。
    #[inline]
    #[must_use]
    pub fn from_rows(rows: [[Option<Color>; 8]; 8], side_to_move: Color) -> Self {
        let mut cells: Cells = [None; Square::COUNT];
        for (slot, piece) in cells.iter_mut().zip(rows.into_iter().flatten()) {
            *slot = piece;
        }

        Self {
            cells,
            move_limit: usize::from(DEFAULT_MOVE_LIMIT).saturating_mul(2),
            moves: Vec::new(),
            regions: OnceCell::new(),
            side_to_move,
            winner: OnceCell::new(),
        }
    }

    /// 終局しているかどうかを返す（勝ち、または引き分け）。
    #[inline]
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// 指定マスの駒を返す。
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Color> {
        self.cells
            .get(usize::from(square.index()))
            .copied()
            .flatten()
    }

    /// 初期局面（黒番）を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self::from_rows(INITIAL_ROWS, Color::Black)
    }

    /// `from` から `to` への移動が現手番にとって合法かを返す。
    ///
    /// `Square` は常に盤内なので、盤外座標の判定は型で済んでいる。
    #[inline]
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        let side = self.side_to_move;
        if self.get(from) != Some(side) || self.get(to) == Some(side) {
            return false;
        }

        let (Some(dir), Some(dist)) = (from.direction(to), from.distance(to)) else {
            return false;
        };
        if !from.is_valid_move(to) {
            return false;
        }

        if self.opposite_blocked(from, dir, dist) {
            return false;
        }

        self.pieces_along_line(from, dir) == dist
    }

    /// 指し手が現手番にとって合法かを返す。
    ///
    /// 取り込みフラグが立っている場合は、移動先に相手の駒があることも要求する。
    #[inline]
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        if mv.is_capture() && self.get(mv.to()) != Some(self.side_to_move.opponent()) {
            return false;
        }
        self.is_legal(mv.from(), mv.to())
    }

    /// 現手番の合法手を、全指し手の列挙順で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::all()
            .iter()
            .copied()
            .filter(|&mv| self.is_legal_move(mv))
            .collect()
    }

    /// 引き分けになる総手数（両手番の合計）を返す。
    #[inline]
    #[must_use]
    pub const fn move_limit(&self) -> usize {
        self.move_limit
    }

    /// 適用済みの手を古い順に返す。
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// 指された手数（取り消し分を除く）を返す。
    #[inline]
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.moves.len()
    }

    /// 指定色の駒数を返す。
    #[inline]
    #[must_use]
    pub fn piece_count(&self, side: Color) -> usize {
        self.cells
            .iter()
            .filter(|&&piece| piece == Some(side))
            .count()
    }

    /// 指定色の駒がちょうど1つの連結成分を成すかを返す。
    ///
    /// 駒が1つも無い場合は連結とみなさない。
    #[inline]
    #[must_use]
    pub fn pieces_contiguous(&self, side: Color) -> bool {
        self.region_sizes(side).len() == 1
    }

    /// 指定色の連結成分サイズ（降順）を返す。
    #[inline]
    #[must_use]
    pub fn region_sizes(&self, side: Color) -> &[u8] {
        self.regions().sizes(side)
    }

    /// 両色の連結成分を返す（必要なら再計算する）。
    #[inline]
    #[must_use]
    pub fn regions(&self) -> &Regions {
        self.regions.get_or_init(|| Regions::compute(&self.cells))
    }

    /// 直前の手を取り消し、その手を返す。
    ///
    /// # Errors
    ///
    /// 指された手が無い場合、`BoardError::NoMoveToRetract` を返す。
    #[inline]
    pub fn retract(&mut self) -> Result<Move, BoardError> {
        let Some(mv) = self.moves.pop() else {
            return Err(BoardError::NoMoveToRetract);
        };

        let mover = self.side_to_move.opponent();
        self.put(mv.from(), self.get(mv.to()));
        let restored = if mv.is_capture() {
            Some(mover.opponent())
        } else {
            None
        };
        self.put(mv.to(), restored);

        self.invalidate_caches();
        let _: &Regions = self.regions();
        self.side_to_move = mover;
        Ok(mv)
    }

    /// 指定マスに駒を置く（手番は変えない）。
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Color>) {
        self.put(square, piece);
        self.invalidate_caches();
    }

    /// 各手番の手数制限を設定する。
    ///
    /// # Errors
    ///
    /// `2 * limit` が既に指された手数以下の場合、`BoardError::MoveLimitTooSmall` を返す。
    #[inline]
    pub fn set_move_limit(&mut self, limit: u16) -> Result<(), BoardError> {
        let total = usize::from(limit).saturating_mul(2);
        if total <= self.moves_made() {
            return Err(BoardError::MoveLimitTooSmall {
                limit,
                moves_made: self.moves_made(),
            });
        }

        self.move_limit = total;
        self.invalidate_caches();
        Ok(())
    }

    /// 指定マスに駒を置き、手番を `next` にする。
    #[inline]
    pub fn set_with_turn(&mut self, square: Square, piece: Option<Color>, next: Color) {
        self.set(square, piece);
        self.side_to_move = next;
    }

    /// 手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 勝者を返す。
    ///
    /// - `None`: 対局中
    /// - `Some(Outcome::Tie)`: 手数制限による引き分け
    /// - `Some(Outcome::Win(color))`: `color` の勝ち
    ///
    /// 未確定時は、手数制限 → 白の連結 → 黒の連結の順に判定し、
    /// 後の判定が前の結果を上書きする。
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Option<Outcome> {
        *self.winner.get_or_init(|| {
            let mut outcome = None;
            if self.moves_made() >= self.move_limit {
                outcome = Some(Outcome::Tie);
            }
            if self.pieces_contiguous(Color::White) {
                outcome = Some(Outcome::Win(Color::White));
            }
            if self.pieces_contiguous(Color::Black) {
                outcome = Some(Outcome::Win(Color::Black));
            }
            outcome
        })
    }

    /// 盤面が変わったので派生情報を破棄する。
    fn invalidate_caches(&mut self) {
        self.regions = OnceCell::new();
        self.winner = OnceCell::new();
    }

    /// `from` と `to` の間（両端を除く）に相手の駒があるかを返す。
    fn opposite_blocked(&self, from: Square, dir: Direction, dist: u8) -> bool {
        let opponent = Some(self.side_to_move.opponent());
        (1..dist)
            .filter_map(|steps| from.move_dest(dir, steps))
            .any(|square| self.get(square) == opponent)
    }

    /// `from` を通る `dir` 方向の直線（両向き、`from` を含む）上の駒数を返す。
    fn pieces_along_line(&self, from: Square, dir: Direction) -> u8 {
        let mut count: u8 = 1;
        for step_dir in [dir, dir.reverse()] {
            let mut current = from;
            while let Some(next) = current.move_dest(step_dir, 1) {
                if self.get(next).is_some() {
                    count = count.saturating_add(1);
                }
                current = next;
            }
        }
        count
    }

    /// キャッシュを触らずにマスの中身を書き換える。
    fn put(&mut self, square: Square, piece: Option<Color>) {
        if let Some(slot) = self.cells.get_mut(usize::from(square.index())) {
            *slot = piece;
        }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl PartialEq for Board {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.side_to_move == other.side_to_move
    }
}

impl Eq for Board {}

impl Hash for Board {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.side_to_move.hash(state);
    }
}

impl fmt::Display for Board {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in (u8::MIN..Square::BOARD_LEN).rev() {
            f.write_str("    ")?;
            for col in u8::MIN..Square::BOARD_LEN {
                let piece = Square::from_col_row(col, row).and_then(|square| self.get(square));
                let abbrev = piece.map_or('-', Color::abbrev);
                write!(f, "{abbrev} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Next move: {}", self.side_to_move)?;
        f.write_str("===")
    }
}
