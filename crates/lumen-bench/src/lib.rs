//! Benchmark workloads for the Lumen ray tracer.
//!
//! - [`vector_cloud`]: deterministic pseudo-random vectors from a seed
//! - [`point_cloud`]: the same for points
//! - [`REFERENCE_CAPACITY`]: arena size of the reference program

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lumen_core::Tuple;

/// Arena capacity used by the reference program.
pub const REFERENCE_CAPACITY: usize = 1000;

/// Map the next LCG state to a component in `[-10, 10)`.
fn next_component(state: &mut u64) -> f32 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    // Top 24 bits give an exactly representable f32 fraction.
    let unit = (*state >> 40) as f32 / (1u64 << 24) as f32;
    unit * 20.0 - 10.0
}

fn cloud(n: usize, seed: u64, w: f32) -> Vec<Tuple> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            let x = next_component(&mut state);
            let y = next_component(&mut state);
            let z = next_component(&mut state);
            Tuple::new(x, y, z, w)
        })
        .collect()
}

/// `n` vectors with components in `[-10, 10)`, reproducible from `seed`.
pub fn vector_cloud(n: usize, seed: u64) -> Vec<Tuple> {
    cloud(n, seed, 0.0)
}

/// `n` points with components in `[-10, 10)`, reproducible from `seed`.
pub fn point_cloud(n: usize, seed: u64) -> Vec<Tuple> {
    cloud(n, seed, 1.0)
}
