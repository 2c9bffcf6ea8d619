//! RNG module - upcoming-shape queue
//!
//! The engine asks a [`ShapeSource`] for every new piece. The default source,
//! [`PreviewQueue`], keeps a short preview of upcoming shapes: each draw pops the front
//! and appends a uniformly random shape at the back.
//!
//! Also provides a simple LCG for deterministic play and testing.

use crate::types::{PieceKind, PREVIEW_LEN};

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Pick a shape uniformly at random.
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Provider of the next shape to spawn.
///
/// Called exactly once per spawn attempt, whether or not the spawn succeeds.
pub trait ShapeSource {
    fn next_shape(&mut self) -> PieceKind;

    /// Shapes that will be returned next, front first. Empty when the source cannot tell.
    fn preview(&self) -> &[PieceKind] {
        &[]
    }
}

impl<F> ShapeSource for F
where
    F: FnMut() -> PieceKind,
{
    fn next_shape(&mut self) -> PieceKind {
        self()
    }
}

/// Random shape queue with a fixed-length preview.
#[derive(Debug, Clone)]
pub struct PreviewQueue {
    upcoming: [PieceKind; PREVIEW_LEN],
    rng: SimpleRng,
    seed: u32,
}

impl PreviewQueue {
    /// Create a new queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let upcoming = std::array::from_fn(|_| rng.next_kind());
        Self {
            upcoming,
            rng,
            seed,
        }
    }

    /// Peek at the upcoming shapes (front is spawned next).
    pub fn upcoming(&self) -> &[PieceKind; PREVIEW_LEN] {
        &self.upcoming
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Pop the front shape and refill the back.
    pub fn draw(&mut self) -> PieceKind {
        let next = self.upcoming[0];
        self.upcoming.rotate_left(1);
        self.upcoming[PREVIEW_LEN - 1] = self.rng.next_kind();
        next
    }
}

impl ShapeSource for PreviewQueue {
    fn next_shape(&mut self) -> PieceKind {
        self.draw()
    }

    fn preview(&self) -> &[PieceKind] {
        &self.upcoming
    }
}
