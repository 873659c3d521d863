//! Active piece - position, rotation and movement probes
//!
//! Every move is a probe against the locked board: it either commits fully or
//! leaves the piece untouched. The piece's own cells are never on the board
//! while it is active, so they cannot block themselves.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{get_shape, rotate_offsets, PieceShape, I_ROTATIONS};
use crate::types::{Direction, PieceKind, Point, SPAWN_POSITION};

/// Rotation index of a piece that has not rotated since it spawned
pub const UNROTATED: i8 = -1;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    anchor: Point,
    offsets: PieceShape,
    /// -1 until the first rotation, then 0..=3
    rotation: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, Point::new(SPAWN_POSITION.0, SPAWN_POSITION.1))
    }

    /// Create an unrotated tetromino at an arbitrary anchor
    pub fn at(kind: PieceKind, anchor: Point) -> Self {
        Self {
            kind,
            anchor,
            offsets: get_shape(kind),
            rotation: UNROTATED,
        }
    }

    /// Reset in place to a fresh piece of `kind` at the spawn position
    pub fn respawn(&mut self, kind: PieceKind) {
        *self = Self::new(kind);
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn offsets(&self) -> &PieceShape {
        &self.offsets
    }

    pub fn rotation(&self) -> i8 {
        self.rotation
    }

    /// Absolute cells of the piece
    pub fn cells(&self) -> [Point; 4] {
        self.offsets.map(|(dx, dy)| self.anchor.offset(dx, dy))
    }

    /// Absolute cells that lie on the board
    pub fn cells_on_board(&self, board: &Board) -> ArrayVec<Point, 4> {
        self.cells()
            .into_iter()
            .filter(|p| board.contains(p.x, p.y))
            .collect()
    }

    /// Rotate one step if the result fits.
    ///
    /// O never rotates. I walks its four-state table once and then stays on
    /// the last state. Everything else takes a quarter turn. Returns whether
    /// the piece rotated.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let candidate = match self.kind {
            PieceKind::O => return false,
            PieceKind::I => {
                let next = self.rotation + 1;
                if next as usize >= I_ROTATIONS.len() {
                    return false;
                }
                I_ROTATIONS[next as usize]
            }
            _ => rotate_offsets(&self.offsets),
        };

        if !self.fits(board, &candidate) {
            return false;
        }

        self.rotation = (self.rotation + 1).rem_euclid(4);
        self.offsets = candidate;
        true
    }

    /// Strict fit used by rotation: on the board and not occupied
    fn fits(&self, board: &Board, offsets: &PieceShape) -> bool {
        offsets.iter().all(|&(dx, dy)| {
            let p = self.anchor.offset(dx, dy);
            board.contains(p.x, p.y) && !board.is_occupied(p.x, p.y)
        })
    }

    /// Shift one column left or right if every cell stays inside the side
    /// walls and lands on a free cell of its current row.
    ///
    /// Rows above the board count as free. Returns whether the piece moved.
    pub fn move_horizontal(&mut self, board: &Board, direction: Direction) -> bool {
        let delta = direction.delta();
        let width = board.width() as i8;

        let clear = self.cells().iter().all(|p| {
            let x = p.x + delta;
            x >= 0 && x < width && !blocked(board, x, p.y)
        });

        if clear {
            self.anchor.x += delta;
        }
        clear
    }

    /// Move one row down.
    ///
    /// Returns `true` when the piece is resting on the floor or the stack and
    /// could not move (it should lock), `false` when it moved.
    pub fn move_down(&mut self, board: &Board) -> bool {
        let height = board.height() as i8;

        let resting = self.cells().iter().any(|p| {
            let y = p.y + 1;
            y >= height || blocked(board, p.x, y)
        });

        if !resting {
            self.anchor.y += 1;
        }
        resting
    }
}

/// Occupied board cell. Positions above the board are open space.
#[inline(always)]
fn blocked(board: &Board, x: i8, y: i8) -> bool {
    board.contains(x, y) && board.is_occupied(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Board {
        Board::new(10, 20)
    }

    #[test]
    fn test_new_piece_spawns_unrotated() {
        let piece = Tetromino::new(PieceKind::T);
        assert_eq!(piece.anchor(), Point::new(5, 0));
        assert_eq!(piece.rotation(), UNROTATED);
        assert_eq!(*piece.offsets(), get_shape(PieceKind::T));
    }

    #[test]
    fn test_o_never_rotates() {
        let board = empty();
        let mut piece = Tetromino::at(PieceKind::O, Point::new(4, 10));
        let before = piece;
        assert!(!piece.rotate(&board));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_rotation_index_wraps_for_quarter_turn_pieces() {
        let board = empty();
        let mut piece = Tetromino::at(PieceKind::T, Point::new(5, 10));
        let seen: Vec<i8> = (0..5)
            .map(|_| {
                assert!(piece.rotate(&board));
                piece.rotation()
            })
            .collect();
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_i_rotation_stops_after_last_state() {
        let board = empty();
        let mut piece = Tetromino::at(PieceKind::I, Point::new(5, 10));
        for state in 0..4 {
            assert!(piece.rotate(&board));
            assert_eq!(piece.rotation(), state);
            assert_eq!(*piece.offsets(), I_ROTATIONS[state as usize]);
        }
        let before = piece;
        assert!(!piece.rotate(&board));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_move_down_on_floor_reports_resting() {
        let board = empty();
        // O occupies rows y and y+1; anchor at 18 touches the floor.
        let mut piece = Tetromino::at(PieceKind::O, Point::new(4, 18));
        assert!(piece.move_down(&board));
        assert_eq!(piece.anchor(), Point::new(4, 18));
    }

    #[test]
    fn test_cells_above_board_are_not_on_board() {
        let board = empty();
        let piece = Tetromino::new(PieceKind::T);
        // T has one cell at dy = -1.
        assert_eq!(piece.cells_on_board(&board).len(), 3);
    }
}
