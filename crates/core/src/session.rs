//! Game session - ties the board, active piece, queue and progression together
//!
//! A tick has two phases so the frame loop can render in between:
//!
//! 1. [`Session::step`]: apply edge events (rotate, level skip), then held
//!    keys (left, right, soft drop), then the gravity descent when the tick
//!    counter hits the fall interval.
//! 2. [`Session::resolve`]: clear full rows, advance the tick counter and
//!    check for game over.
//!
//! [`Session::tick`] runs both back to back.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::piece::Tetromino;
use crate::rng::PieceQueue;
use crate::scoring::Progression;
use crate::status::StatusSink;
use crate::types::{
    Direction, InputEvent, Point, Status, TickInput, DEFAULT_COLUMNS, DEFAULT_ROWS,
    MAX_BOARD_SIDE, MIN_BOARD_SIDE,
};

/// Board size and RNG seed for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: u8,
    pub rows: u8,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            seed: 1,
        }
    }
}

/// Result of one forced or soft descent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece could not move, was locked and a new piece spawned
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S = ()> {
    board: Board,
    active: Tetromino,
    queue: PieceQueue,
    progress: Progression,
    /// Ticks resolved so far; gravity fires when this is a multiple of the
    /// fall interval.
    ticks: u64,
    game_over: bool,
    status: S,
}

impl<S: StatusSink> Session<S> {
    /// Start a new game: empty board, shuffled queue, first piece at spawn.
    ///
    /// The initial fall interval equals the board width in ticks.
    pub fn new(config: GameConfig, status: S) -> Self {
        Self::with_board(Board::new(config.columns, config.rows), config.seed, status)
    }

    /// Start a game on a prepared board, e.g. a puzzle or a test fixture.
    ///
    /// Locked cells are kept as given; nothing is cleared until the first
    /// [`resolve`](Self::resolve).
    pub fn with_board(board: Board, seed: u64, status: S) -> Self {
        let side = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        assert!(
            side.contains(&board.width()) && side.contains(&board.height()),
            "board size {}x{} outside {MIN_BOARD_SIDE}..={MAX_BOARD_SIDE}",
            board.width(),
            board.height()
        );

        let mut queue = PieceQueue::new(seed);
        let first = queue.draw();
        let columns = board.width();
        let rows = board.height();

        let mut session = Self {
            board,
            active: Tetromino::new(first),
            queue,
            progress: Progression::new(columns as u32),
            ticks: 0,
            game_over: false,
            status,
        };

        debug!(
            columns,
            rows,
            seed,
            first = first.as_str(),
            "session started"
        );
        session.report();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn progress(&self) -> &Progression {
        &self.progress
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn fall_interval(&self) -> u32 {
        self.progress.fall_interval()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> Status {
        self.progress.status()
    }

    /// The status display this session reports to
    pub fn status_sink(&self) -> &S {
        &self.status
    }

    pub fn into_status_sink(self) -> S {
        self.status
    }

    /// Cells of the active piece that are on the board, for rendering
    pub fn active_cells(&self) -> ArrayVec<Point, 4> {
        self.active.cells_on_board(&self.board)
    }

    fn report(&mut self) {
        self.status.report(self.progress.status());
    }

    /// Replace the queue with a fresh random permutation of all seven kinds
    pub fn shuffle_queue(&mut self) {
        self.queue.shuffle();
    }

    pub fn rotate(&mut self) -> bool {
        self.active.rotate(&self.board)
    }

    pub fn move_horizontal(&mut self, direction: Direction) -> bool {
        self.active.move_horizontal(&self.board, direction)
    }

    /// Move the active piece down one row, or lock it and spawn the next one.
    pub fn drop_piece(&mut self) -> DropOutcome {
        if !self.active.move_down(&self.board) {
            return DropOutcome::Moved;
        }

        let cells = self.active.cells_on_board(&self.board);
        self.board.lock_cells(&cells);

        let next = self.queue.draw();
        debug!(
            locked = self.active.kind().as_str(),
            x = self.active.anchor().x,
            y = self.active.anchor().y,
            next = next.as_str(),
            "piece locked"
        );
        self.active.respawn(next);
        DropOutcome::Locked
    }

    /// Move up one level and report the new status
    pub fn advance_level(&mut self) {
        self.progress.advance_level();
        Self::on_level_up(&self.progress, &mut self.status);
    }

    /// Log and report a level that `progress` has just reached.
    ///
    /// Takes fields instead of `&mut self` so row clearing can call it while
    /// the board is borrowed.
    fn on_level_up(progress: &Progression, status: &mut S) {
        info!(
            level = progress.level(),
            fall_interval = progress.fall_interval(),
            "level up"
        );
        status.report(progress.status());
    }

    /// Clear every full row, scoring each one as it is found
    pub fn clear_rows(&mut self) -> usize {
        let progress = &mut self.progress;
        let status = &mut self.status;

        let cleared = self.board.clear_full_rows_with(|nth| {
            if progress.score_row_clear(nth) {
                Self::on_level_up(progress, status);
            }
            status.report(progress.status());
        });

        if cleared > 0 {
            debug!(cleared, score = self.progress.score(), "rows cleared");
        }
        cleared
    }

    /// Whether anything is locked in the top row
    pub fn check_game_over(&self) -> bool {
        self.board.top_row_occupied()
    }

    /// Apply input and gravity for this tick
    pub fn step(&mut self, input: &TickInput) {
        if self.game_over {
            return;
        }

        for event in &input.events {
            match event {
                InputEvent::Rotate => {
                    self.rotate();
                }
                InputEvent::LevelSkip => self.advance_level(),
            }
        }

        if input.held.left {
            self.move_horizontal(Direction::Left);
        }
        if input.held.right {
            self.move_horizontal(Direction::Right);
        }
        if input.held.down {
            self.drop_piece();
        }

        let interval = self.progress.fall_interval().max(1) as u64;
        if self.ticks % interval == 0 {
            self.drop_piece();
        }
    }

    /// Clear rows, advance the tick counter and check for game over
    pub fn resolve(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::GameOver;
        }

        self.clear_rows();
        self.ticks += 1;

        if self.check_game_over() {
            self.game_over = true;
            info!(
                score = self.progress.score(),
                lines = self.progress.lines(),
                level = self.progress.level(),
                ticks = self.ticks,
                "game over"
            );
            return TickOutcome::GameOver;
        }
        TickOutcome::Running
    }

    /// One full tick: [`step`](Self::step) then [`resolve`](Self::resolve)
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome {
        self.step(input);
        self.resolve()
    }
}
