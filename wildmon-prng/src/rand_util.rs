use crate::RandomSource;

/// Returns whether a random event with probability `numerator / denominator` occurs.
pub fn chance(prng: &mut dyn RandomSource, numerator: u64, denominator: u64) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn RandomSource, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(prng: &mut dyn RandomSource, slice: &'a [T]) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    if slice.len() == 1 {
        return slice.first();
    }
    let index = range(prng, 0, slice.len() as u64) as usize;
    slice.get(index)
}
