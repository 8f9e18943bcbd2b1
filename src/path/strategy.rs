use rand::Rng;

/// Chooses which branch a condition node takes during a simulated run.
///
/// Abstractly this is nondeterministic choice among enabled transitions;
/// keeping it behind a trait lets tests pin the walk to an exact path while
/// production uses a uniform draw. Any `FnMut(usize) -> usize` works too.
pub trait BranchStrategy {
    /// Picks an index in `0..branches`. `branches` is always at least 1.
    fn choose(&mut self, branches: usize) -> usize;
}

/// Picks uniformly at random among all outgoing edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandom;

impl BranchStrategy for UniformRandom {
    fn choose(&mut self, branches: usize) -> usize {
        rand::rng().random_range(0..branches)
    }
}

impl<F: FnMut(usize) -> usize> BranchStrategy for F {
    fn choose(&mut self, branches: usize) -> usize {
        self(branches)
    }
}
