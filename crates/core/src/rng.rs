//! RNG module - seedable piece generation
//!
//! Pieces are drawn uniformly from the seven kinds. The engine takes its
//! source at construction, so a seed fully determines the piece sequence.
//!
//! Also provides a fixed cycling sequence for tests and replays.

use crate::types::{PieceKind, NUM_KINDS};

/// Anything that can hand the engine its next piece kind
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.next_range(NUM_KINDS as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Cycles through a fixed list of kinds
///
/// An empty list is treated as `[PieceKind::I]`, so the source always has a
/// piece to hand out.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl FixedSequence {
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<_> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::I);
        }
        Self { kinds, pos: 0 }
    }
}

impl PieceSource for FixedSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
