use rand::Rng;
use rand::rngs::SmallRng;

/// In-place Fisher–Yates shuffle. Uniform over permutations for a uniform
/// RNG; no seeding or reproducibility requirement beyond what the caller's
/// RNG provides.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut SmallRng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
