//! 結合テスト: ランダム対局で到達した局面に対し、盤面の不変条件を確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use loa_core::ai::types::Ai as _;
    use loa_core::{ai, engine};

    /// `seed` の乱択対局で通過した局面を全て返す（初期局面を含む）。
    fn reachable_positions(seed: u64, plies: u16) -> Vec<engine::Board> {
        let mut agent = ai::random::Agent::new(seed);
        let mut board = engine::Board::initial();
        let mut positions = vec![board.clone()];

        for _ply in 0..plies {
            if board.game_over() {
                break;
            }
            let Ok(mv) = agent.select_move(&board) else {
                break;
            };
            assert!(board.apply_move(mv).is_ok());
            positions.push(board.clone());
        }

        positions
    }

    fn sample_positions() -> Vec<engine::Board> {
        [11_u64, 12, 13, 14]
            .into_iter()
            .flat_map(|seed| reachable_positions(seed, 60))
            .collect()
    }

    #[test]
    fn region_sizes_sum_to_piece_count() {
        for board in sample_positions() {
            for side in [engine::Color::Black, engine::Color::White] {
                let sizes = board.region_sizes(side);
                let total: usize = sizes.iter().map(|&size| usize::from(size)).sum();
                assert_eq!(total, board.piece_count(side), "{board}");
                assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
                assert_eq!(board.pieces_contiguous(side), sizes.len() == 1);
            }
        }
    }

    #[test]
    fn legal_moves_are_sound_and_complete() {
        for board in sample_positions() {
            let legal = board.legal_moves();
            let expected: Vec<engine::Move> = engine::Move::all()
                .iter()
                .copied()
                .filter(|&mv| board.is_legal(mv.from(), mv.to()))
                .collect();
            assert_eq!(legal, expected, "{board}");
            assert!(legal.iter().all(|&mv| board.is_legal_move(mv)));

            let side = board.side_to_move();
            for mv in &legal {
                assert_eq!(board.get(mv.from()), Some(side));
                assert_ne!(board.get(mv.to()), Some(side));
                let captures = board.get(mv.to()) == Some(side.opponent());
                assert_eq!(board.is_legal_move(mv.capture_move()), captures);
            }
        }
    }

    #[test]
    fn apply_then_retract_restores_every_position() {
        for board in sample_positions() {
            let regions_before = board.regions().clone();
            for mv in board.legal_moves() {
                let mut work = board.clone();
                assert!(work.apply_move(mv).is_ok());
                assert_eq!(work.moves_made(), board.moves_made() + 1);
                assert_eq!(work.side_to_move(), board.side_to_move().opponent());

                let retracted = work.retract();
                assert!(
                    retracted.is_ok_and(|done| done.from() == mv.from() && done.to() == mv.to())
                );
                assert_eq!(work, board, "round trip failed for {mv}");
                assert_eq!(work.moves(), board.moves());
                assert_eq!(work.regions(), &regions_before);
                if !board.game_over() {
                    assert_eq!(work.winner(), None);
                }
            }
        }
    }

    #[test]
    fn full_history_unwinds_to_initial_position() {
        let positions = reachable_positions(21, 80);
        let Some(last) = positions.last() else {
            panic!("no positions");
        };

        let mut board = last.clone();
        for expected in positions.iter().rev().skip(1) {
            assert!(board.retract().is_ok());
            assert_eq!(&board, expected);
        }
        assert_eq!(board, engine::Board::initial());
        assert!(board.retract().is_err());
    }

    #[test]
    fn round_trip_keeps_hash_identity() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        for board in reachable_positions(5, 10) {
            let mut work = board.clone();
            seen.insert(board.clone());
            for mv in board.legal_moves() {
                assert!(work.apply_move(mv).is_ok());
                assert!(work.retract().is_ok());
                assert!(seen.contains(&work), "{work}");
            }
        }
        assert!(seen.contains(&engine::Board::initial()));
    }
}
