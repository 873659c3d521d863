//! Pieces module - shape catalog
//!
//! Each kind is four offsets around an anchor in its spawn orientation. Every
//! kind except I rotates algebraically (see [`rotate_offsets`]). The I piece
//! has its own precomputed four-state table because the quarter-turn transform
//! would leave it shifted off its column.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

const T_SHAPE: PieceShape = [(0, 0), (1, 0), (-1, 0), (0, -1)];
const L_SHAPE: PieceShape = [(0, 0), (1, 1), (0, -1), (0, 1)];
const J_SHAPE: PieceShape = [(0, 0), (-1, 1), (0, -1), (0, 1)];
const I_SHAPE: PieceShape = [(-1, 2), (-1, 1), (-1, 0), (-1, -1)];
const S_SHAPE: PieceShape = [(0, 0), (0, 1), (1, 0), (1, -1)];
const Z_SHAPE: PieceShape = [(0, 0), (0, -1), (1, 0), (1, 1)];
const O_SHAPE: PieceShape = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Rotation states of the I piece, indexed by rotation index 0..=3.
///
/// State 0 equals the spawn shape; the piece leaves its spawn state on the
/// first rotation by entering state 0 again.
pub const I_ROTATIONS: [PieceShape; 4] = [
    // vertical, one column left of the anchor
    [(-1, 2), (-1, 1), (-1, 0), (-1, -1)],
    // horizontal on the anchor row
    [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    // vertical through the anchor
    [(0, 2), (0, 1), (0, 0), (0, -1)],
    // horizontal one row below the anchor
    [(-2, 1), (-1, 1), (0, 1), (1, 1)],
];

/// Get the spawn shape for a piece kind.
///
/// The returned array is a copy; callers may mutate it freely.
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::T => T_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::I => I_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::O => O_SHAPE,
    }
}

/// Quarter turn: (dx, dy) -> (-dy, dx)
pub fn rotate_offsets(shape: &PieceShape) -> PieceShape {
    shape.map(|(dx, dy)| (-dy, dx))
}
