//! Lines of Action の CPU 対局デモ。
//!
//! 2つの AI を対局させ、1手ごとに盤面を表示する。

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use loa_core::ai::SearchError;
use loa_core::ai::types::Ai as _;
use loa_core::engine::{self, Color, Move, Outcome};
use loa_core::{ai, logging};

/// 対局させるプレイヤーの種類。
#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlayerKind {
    /// アルファベータ探索。
    Alphabeta,
    /// 合法手からランダム。
    Random,
}

/// ログの出力形式。
#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogFormatArg {
    /// 1行1イベントの JSON。
    Json,
    /// テキスト。
    Pretty,
}

/// Lines of Action: machine vs machine
#[derive(Debug, Parser)]
#[command(name = "loa", author, version, about, long_about = None)]
struct Cli {
    /// 黒のプレイヤー
    #[arg(long, value_enum, default_value_t = PlayerKind::Alphabeta)]
    black: PlayerKind,
    /// 白のプレイヤー
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    white: PlayerKind,
    /// アルファベータ探索の深さ（ply）
    #[arg(
        long,
        default_value_t = ai::alphabeta::DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(ai::alphabeta::MAX_DEPTH)),
    )]
    depth: u8,
    /// 引き分けまでの各手番の手数
    #[arg(long, default_value_t = engine::board::DEFAULT_MOVE_LIMIT)]
    move_limit: u16,
    /// ランダムプレイヤーの乱数シード
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// ログの出力形式
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty)]
    log_format: LogFormatArg,
}

/// 手を選ぶ主体。
#[derive(Debug)]
enum Controller {
    Alphabeta(ai::alphabeta::Agent),
    Random(ai::random::Agent),
}

impl Controller {
    fn new(kind: PlayerKind, side: Color, depth: u8, seed: u64) -> Self {
        match kind {
            PlayerKind::Alphabeta => Self::Alphabeta(ai::alphabeta::Agent::new(side, depth)),
            PlayerKind::Random => Self::Random(ai::random::Agent::new(seed)),
        }
    }

    fn choose(&mut self, board: &engine::Board) -> Result<Option<Move>> {
        let selected = match self {
            Self::Alphabeta(agent) => {
                let mut chosen = None;
                agent
                    .get_move(board, |mv| chosen = Some(mv))
                    .map(|text| {
                        tracing::info!(side = %agent.side(), mv = %text, "machine move");
                    })
                    .and_then(|()| chosen.ok_or(SearchError::NoMoveFound))
            }
            Self::Random(agent) => agent.select_move(board),
        };

        match selected {
            Ok(mv) => Ok(Some(mv)),
            Err(SearchError::NoMoveFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug)]
struct App {
    black: Controller,
    board: engine::Board,
    white: Controller,
}

impl App {
    fn new(cli: &Cli) -> Result<Self> {
        let mut board = engine::Board::initial();
        board.set_move_limit(cli.move_limit)?;
        Ok(Self {
            black: Controller::new(cli.black, Color::Black, cli.depth, cli.seed),
            board,
            white: Controller::new(cli.white, Color::White, cli.depth, cli.seed.wrapping_add(1)),
        })
    }

    fn controller_for_mut(&mut self, color: Color) -> &mut Controller {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// 決着まで対局する。手番側に合法手が無くなった場合は `None` を返す。
    fn play(&mut self) -> Result<Option<Outcome>> {
        println!("{}", self.board);
        while !self.board.game_over() {
            let side = self.board.side_to_move();
            let board = self.board.clone();
            let Some(mv) = self.controller_for_mut(side).choose(&board)? else {
                tracing::warn!(side = %side, "no legal move");
                return Ok(None);
            };
            self.board.apply_move(mv)?;
            println!("{side} plays {mv}");
            println!("{}", self.board);
        }

        match self.board.winner() {
            Some(outcome) => Ok(Some(outcome)),
            None => bail!("game loop ended without a result"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = match cli.log_format {
        LogFormatArg::Json => logging::LogFormat::Json,
        LogFormatArg::Pretty => logging::LogFormat::Pretty,
    };
    logging::init(format)?;

    let mut app = App::new(&cli)?;
    let outcome = app.play()?;
    let moves = app.board.moves_made();
    match outcome {
        Some(Outcome::Win(side)) => println!("{side} wins after {moves} moves."),
        Some(Outcome::Tie) => println!("Tie game after {moves} moves."),
        None => println!(
            "{} has no legal move after {moves} moves; game stopped.\n{}",
            app.board.side_to_move(),
            app.board
        ),
    }
    Ok(())
}
