//! RNG module - shuffled piece queue
//!
//! The queue holds one of each of the seven kinds in a random order and is
//! consumed from the front. When it runs dry a fresh shuffled batch replaces
//! it, so no kind repeats until all seven have been dealt.
//!
//! Shuffling uses a seeded `StdRng`: the same seed deals the same sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// Shuffled 7-piece queue
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Current batch of pieces
    bag: [PieceKind; 7],
    /// Index of the next piece to deal
    bag_index: usize,
    rng: StdRng,
}

impl PieceQueue {
    /// Create a queue with a freshly shuffled batch
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        queue.shuffle();
        queue
    }

    /// Replace the queue contents with a new random permutation of all kinds
    pub fn shuffle(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Take the front piece, reshuffling first if the queue is empty
    pub fn draw(&mut self) -> PieceKind {
        if self.is_empty() {
            self.shuffle();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Pieces still queued in the current batch, front first
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }

    pub fn is_empty(&self) -> bool {
        self.bag_index >= self.bag.len()
    }
}
