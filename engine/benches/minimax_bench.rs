use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{
    Board, Difficulty, GamePhase, GameController, Mark, SideAssignment, TurnState,
    calculate_minimax_move,
};

fn bench_minimax_opening_move() {
    let board = Board::new();
    calculate_minimax_move(black_box(&board), SideAssignment::ai_first());
}

fn bench_minimax_reply_to_corner() {
    let mut board = Board::new();
    board.place(0, 0, Mark::X);
    calculate_minimax_move(black_box(&board), SideAssignment::human_first());
}

fn bench_full_hard_game() {
    let mut controller: GameController = GameController::new(SessionRng::new(17));
    if controller.start_game(Difficulty::Hard).is_err() {
        return;
    }
    while let GamePhase::InProgress(turn) = controller.phase() {
        let result = match turn {
            TurnState::Player => {
                let Some(position) = controller
                    .board()
                    .and_then(|board| board.available_moves().last().copied())
                else {
                    return;
                };
                controller.player_move(position.row, position.col)
            }
            TurnState::Ai => controller.ai_move(),
        };
        if result.is_err() {
            return;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("opening_move", |b| b.iter(bench_minimax_opening_move));

    group.bench_function("reply_to_corner", |b| b.iter(bench_minimax_reply_to_corner));

    group.bench_function("full_hard_game", |b| b.iter(bench_full_hard_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
