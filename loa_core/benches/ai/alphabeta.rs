//! `loa_core::ai::alphabeta` の性能計測（深さ別の1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use loa_core::ai::types::Ai;
use loa_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args().sample_size(10)
}

/// `alphabeta::Agent::select_move` を初期局面で計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let board = engine::Board::initial();
    let mut group = criterion.benchmark_group("ai/alphabeta/select_move_initial");

    for depth in [1_u8, 2, 3] {
        let bench_id = BenchmarkId::new("depth", depth);
        group.bench_with_input(bench_id, &depth, |bench, &input| {
            let mut agent = ai::alphabeta::Agent::new(engine::Color::Black, input);
            bench.iter(|| black_box(agent.select_move(&board)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
