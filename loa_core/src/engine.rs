/// 盤面（駒配置、手番、棋譜）と合法手判定・着手/取り消し・終局判定の実装。
pub mod board;
/// 指し手と、幾何的に可能な全指し手の列挙。
pub mod moves;
/// 同色の駒の連結成分（8近傍）の計算。
pub mod regions;
pub mod types;

pub type Board = board::Board;
pub type BoardError = board::BoardError;
pub type Color = types::Color;
pub type Direction = types::Direction;
pub type Move = moves::Move;
pub type Outcome = board::Outcome;
pub type ParseError = types::ParseError;
pub type Regions = regions::Regions;
pub type Square = types::Square;
