//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no behavior beyond parsing and small
//! conversions, so it can be shared by the core rules, the input layer and the
//! terminal renderer without pulling any of them into the others.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Both are configurable at
//! start-up but fixed for the lifetime of a game.
//!
//! - **Width**: `DEFAULT_COLUMNS` (indexed 0-9)
//! - **Height**: `DEFAULT_ROWS` (indexed 0-19)
//! - **Spawn anchor**: `SPAWN_POSITION` = (5, 0)
//!
//! # Timing
//!
//! The game is frame-stepped: one logical tick per rendered frame. Gravity is
//! measured in ticks, not milliseconds.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 60 | Frame (tick) rate cap |
//! | `HOLD_TIMEOUT_MS` | 0 | Hold expiry for terminals without release events |
//! | `LEVEL_SCORE_STEP` | 1000 | Score per level threshold |
//!
//! # Examples
//!
//! ```
//! use megatetris_types::{PieceKind, Point, SPAWN_POSITION};
//!
//! let parsed = PieceKind::from_str("lin").unwrap();
//! assert_eq!(parsed, PieceKind::J);
//!
//! let p = Point::new(SPAWN_POSITION.0, SPAWN_POSITION.1).offset(1, -1);
//! assert_eq!(p, Point::new(6, -1));
//! ```

use arrayvec::ArrayVec;

/// Default board width in cells
pub const DEFAULT_COLUMNS: u8 = 10;

/// Default board height in cells
pub const DEFAULT_ROWS: u8 = 20;

/// Smallest accepted board side. Pieces around the spawn anchor reach columns 3..=6.
pub const MIN_BOARD_SIDE: u8 = 8;

/// Largest accepted board side
pub const MAX_BOARD_SIDE: u8 = 40;

/// Anchor of every freshly spawned piece (x, y)
pub const SPAWN_POSITION: (i8, i8) = (5, 0);

/// Default frame (tick) rate
pub const DEFAULT_FPS: u32 = 60;

/// Extra time a hold survives after the last press/repeat on terminals that
/// cannot report key releases. With 0 every press or repeat holds the key for
/// exactly one tick.
pub const HOLD_TIMEOUT_MS: u64 = 0;

/// Base points for a cleared row
pub const ROW_CLEAR_BASE: u32 = 100;

/// A level is gained once score reaches `LEVEL_SCORE_STEP * level`
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Level a new game starts at
pub const START_LEVEL: u32 = 1;

/// Maximum edge-triggered events buffered between two ticks
pub const MAX_TICK_EVENTS: usize = 16;

/// The seven piece kinds
///
/// `J` is the mirrored L (called "Lin" in some key maps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    L,
    J,
    I,
    S,
    Z,
    O,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::O,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use megatetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Lin"), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" | "lin" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "o" => Some(PieceKind::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::O => "o",
        }
    }
}

/// Absolute board coordinate. `y` may be negative for cells above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Translate by a relative offset
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one step
    pub fn delta(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Edge-triggered input: fires once per key-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Rotate the active piece
    Rotate,
    /// Debug: jump to the next level
    LevelSkip,
}

/// Level-triggered input: true for every tick the key is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub down: bool,
}

/// Everything the session consumes in one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub events: ArrayVec<InputEvent, MAX_TICK_EVENTS>,
    pub held: HeldKeys,
}

impl TickInput {
    /// Input with only hold state
    pub fn held(held: HeldKeys) -> Self {
        Self {
            events: ArrayVec::new(),
            held,
        }
    }

    /// Input with a single edge event and nothing held
    pub fn event(event: InputEvent) -> Self {
        let mut events = ArrayVec::new();
        events.push(event);
        Self {
            events,
            held: HeldKeys::default(),
        }
    }
}

/// Progress figures handed to the status display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}
