//! Session tests - full ticks, scoring, levels and game over

use megatetris::core::{get_shape, Board, DropOutcome, GameConfig, PieceQueue, Session, TickOutcome};
use megatetris::types::{HeldKeys, InputEvent, PieceKind, Point, Status, TickInput, SPAWN_POSITION};

fn status(score: u32, lines: u32, level: u32) -> Status {
    Status {
        score,
        lines,
        level,
    }
}

fn fixture(rows: &[&str]) -> Session<Vec<Status>> {
    Session::with_board(Board::from_ascii(rows), 7, Vec::new())
}

const EMPTY: &str = "..........";
const FULL: &str = "##########";

#[test]
fn test_single_row_scores_100() {
    let mut s = fixture(&[
        EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "#.........", FULL,
    ]);

    assert_eq!(s.clear_rows(), 1);
    assert_eq!(s.score(), 100);
    assert_eq!(s.lines(), 1);
    assert!(s.board().is_occupied(0, 8));
    assert!(s.board().is_row_empty(0));
    assert_eq!(s.board().occupied_count(), 1);
    assert_eq!(s.status_sink().as_slice(), &[status(0, 0, 1), status(100, 1, 1)]);
}

#[test]
fn test_two_rows_in_one_pass_score_250() {
    let mut s = fixture(&[EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, FULL, FULL]);

    assert_eq!(s.clear_rows(), 2);
    assert_eq!(s.score(), 250);
    assert_eq!(s.lines(), 2);
    assert_eq!(s.board().occupied_count(), 0);
    assert_eq!(
        s.status_sink().as_slice(),
        &[status(0, 0, 1), status(100, 1, 1), status(250, 2, 1)]
    );
}

#[test]
fn test_score_accumulates_across_passes() {
    let mut s = fixture(&[EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, FULL, FULL]);
    s.clear_rows();
    assert_eq!(s.clear_rows(), 0);
    assert_eq!(s.score(), 250);
}

#[test]
fn test_level_advances_once_at_threshold() {
    // 100 + 150 + 200 + 250 + 300 = 1000 on the fifth row.
    let mut s = fixture(&[EMPTY, EMPTY, EMPTY, FULL, FULL, FULL, FULL, FULL]);
    assert_eq!(s.fall_interval(), 10);

    assert_eq!(s.clear_rows(), 5);
    assert_eq!(s.score(), 1000);
    assert_eq!(s.lines(), 5);
    assert_eq!(s.level(), 2);
    // level / 2 = 1 at level 2
    assert_eq!(s.fall_interval(), 10);

    let reports = s.status_sink();
    assert_eq!(reports.len(), 7);
    assert_eq!(reports[4], status(700, 4, 1));
    assert_eq!(reports[5], status(1000, 5, 2));
    assert_eq!(reports[6], status(1000, 5, 2));
}

#[test]
fn test_level_skip_speed_sequence() {
    let mut s = Session::new(GameConfig::default(), Vec::new());
    let mut intervals = Vec::new();
    for _ in 0..8 {
        s.step(&TickInput::event(InputEvent::LevelSkip));
        intervals.push(s.fall_interval());
    }
    assert_eq!(s.level(), 9);
    assert_eq!(intervals, vec![10, 7, 7, 6, 4, 2, 1, 1]);
    assert_eq!(s.status_sink().len(), 9);
}

#[test]
fn test_initial_fall_interval_tracks_width() {
    let s = Session::new(
        GameConfig {
            columns: 16,
            rows: 12,
            seed: 3,
        },
        (),
    );
    assert_eq!(s.fall_interval(), 16);
    assert_eq!(s.board().width(), 16);
    assert_eq!(s.board().height(), 12);
}

#[test]
fn test_game_over_when_top_row_occupied() {
    let mut s = fixture(&["#.........", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY]);

    assert_eq!(s.resolve(), TickOutcome::GameOver);
    assert!(s.is_game_over());
    assert_eq!(s.ticks(), 1);

    // Further ticks change nothing.
    let anchor = s.active().anchor();
    assert_eq!(s.tick(&TickInput::default()), TickOutcome::GameOver);
    assert_eq!(s.active().anchor(), anchor);
    assert_eq!(s.ticks(), 1);
}

#[test]
fn test_full_top_row_clears_instead_of_ending() {
    let mut s = fixture(&[FULL, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY]);
    assert_eq!(s.resolve(), TickOutcome::Running);
    assert_eq!(s.score(), 100);
    assert!(!s.check_game_over());
}

#[test]
fn test_running_while_top_row_empty() {
    let mut s = fixture(&[EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "#########."]);
    assert_eq!(s.resolve(), TickOutcome::Running);
    assert!(!s.is_game_over());
}

#[test]
fn test_lock_writes_four_cells_and_respawns() {
    let mut s = Session::new(GameConfig::default(), Vec::new());
    let remaining = s.queue().remaining().len();

    // Bring the piece fully onto the board and turn it, unless it is an O.
    for _ in 0..3 {
        assert_eq!(s.drop_piece(), DropOutcome::Moved);
    }
    if s.active().kind() != PieceKind::O {
        assert!(s.rotate());
        assert_eq!(s.active().rotation(), 0);
    }

    let mut descents = 0;
    while s.drop_piece() == DropOutcome::Moved {
        descents += 1;
    }
    assert!(descents > 0);

    assert_eq!(s.board().occupied_count(), 4);
    assert!(s.board().row(19).iter().any(|&c| c));
    assert_eq!(s.active().anchor(), Point::new(SPAWN_POSITION.0, SPAWN_POSITION.1));
    assert_eq!(s.active().rotation(), -1);
    assert_eq!(*s.active().offsets(), get_shape(s.active().kind()));
    assert_eq!(s.queue().remaining().len(), remaining - 1);
}

#[test]
fn test_held_left_moves_then_gravity() {
    let mut s = Session::new(GameConfig::default(), ());
    let left = TickInput::held(HeldKeys {
        left: true,
        ..HeldKeys::default()
    });

    assert_eq!(s.tick(&left), TickOutcome::Running);
    assert_eq!(s.active().anchor(), Point::new(4, 1));
}

#[test]
fn test_rotate_event_turns_piece() {
    let mut s = Session::new(GameConfig::default(), ());
    // Get the piece fully onto the board first.
    for _ in 0..3 {
        s.drop_piece();
    }
    let kind = s.active().kind();
    s.step(&TickInput::event(InputEvent::Rotate));

    match kind {
        PieceKind::O => assert_eq!(s.active().rotation(), -1),
        _ => assert_eq!(s.active().rotation(), 0),
    }
}

#[test]
fn test_same_seed_same_game() {
    let run = || {
        let mut s = Session::new(GameConfig::default(), Vec::new());
        let drop = TickInput::held(HeldKeys {
            down: true,
            ..HeldKeys::default()
        });
        while s.tick(&drop) == TickOutcome::Running {}
        (s.board().clone(), s.ticks(), s.into_status_sink())
    };
    assert_eq!(run(), run());
}

#[test]
fn test_queue_never_repeats_within_batch() {
    for seed in [0, 1, 42, 9001] {
        let mut queue = PieceQueue::new(seed);
        for _ in 0..5 {
            let mut batch: Vec<PieceKind> = (0..7).map(|_| queue.draw()).collect();
            batch.sort_by_key(|k| k.as_str());
            batch.dedup();
            assert_eq!(batch.len(), 7, "seed {seed} repeated a kind");
        }
    }
}

#[test]
fn test_shuffle_queue_refills() {
    let mut s = Session::new(GameConfig::default(), ());
    assert_eq!(s.queue().remaining().len(), 6);
    s.shuffle_queue();
    assert_eq!(s.queue().remaining().len(), 7);
}
