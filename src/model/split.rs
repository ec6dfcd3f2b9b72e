//! Seeded train/test partitioning.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Deterministically shuffle `0..n` and split off the held-out share.
///
/// Returns `(train, test)` index vectors. The same `(n, test_ratio, seed)`
/// triple always yields the same partition.
pub fn train_test_indices(n: usize, test_ratio: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let mut n_test = ((n as f64) * test_ratio).round() as usize;
    if n > 1 {
        n_test = n_test.clamp(1, n - 1);
    }
    let test = indices[..n_test].to_vec();
    let train = indices[n_test..].to_vec();
    (train, test)
}

/// Select labels by index, preserving index order.
pub fn gather(labels: &[u8], indices: &[usize]) -> Vec<u8> {
    indices.iter().map(|&i| labels[i]).collect()
}
