//! `loa_core::engine` の性能計測（合法手生成、着手適用/取り消し、連結成分）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use loa_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 初期局面（黒番）での代表的な合法手を返す。
fn initial_black_move() -> Option<engine::Move> {
    "c1-c3".parse().ok()
}

/// `Board::apply_move` と `Board::retract` を計測する。
fn bench_apply_retract(criterion: &mut Criterion) {
    let Some(mv) = initial_black_move() else {
        return;
    };

    criterion.bench_function("engine/apply_move_initial", |bench| {
        bench.iter_batched(
            engine::Board::initial,
            |mut board| black_box(board.apply_move(mv)),
            BatchSize::SmallInput,
        );
    });

    criterion.bench_function("engine/apply_retract_initial", |bench| {
        bench.iter_batched(
            engine::Board::initial,
            |mut board| {
                let applied = board.apply_move(mv);
                black_box((applied, board.retract()))
            },
            BatchSize::SmallInput,
        );
    });
}

/// `Board::legal_moves` を計測する。
fn bench_legal_moves(criterion: &mut Criterion) {
    criterion.bench_function("engine/legal_moves_initial", |bench| {
        bench.iter(|| black_box(engine::Board::initial().legal_moves()));
    });
}

/// 連結成分の計算（キャッシュなし）を計測する。
fn bench_regions(criterion: &mut Criterion) {
    criterion.bench_function("engine/regions_initial", |bench| {
        bench.iter_batched(
            engine::Board::initial,
            |board| black_box(board.regions().clone()),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_apply_retract(&mut criterion);
    bench_legal_moves(&mut criterion);
    bench_regions(&mut criterion);

    criterion.final_summary();
}
