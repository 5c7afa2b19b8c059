use std::collections::hash_map::Entry;

use ahash::{
    HashMap,
    HashMapExt,
};

use crate::{
    RandomSource,
    SeededRandomSource,
};

/// A controlled random source, for tests that need fine-grained control over individual rolls.
///
/// Draws pass through to an underlying seeded source, except at positions (1-based) where a fake
/// value has been planted.
pub struct ControlledRandomSource {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: SeededRandomSource,
}

impl ControlledRandomSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: SeededRandomSource::new(seed),
        }
    }

    /// The number of values drawn so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    /// Plants a fake value at the given 1-based position in the sequence.
    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    /// Plants fake values at positions relative to the current position.
    pub fn insert_fake_values_relative<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(count, value)| (count + self.count, value)),
        );
    }
}

impl RandomSource for ControlledRandomSource {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying source either way to keep the sequence consistent.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(entry) => entry.remove(),
            Entry::Vacant(_) => next,
        }
    }
}

#[cfg(test)]
mod controlled_random_source_test {
    use crate::{
        ControlledRandomSource,
        RandomSource,
        SeededRandomSource,
    };

    #[test]
    fn fake_values_override_single_positions() {
        let mut real = SeededRandomSource::new(Some(7));
        let mut controlled = ControlledRandomSource::new(Some(7));
        controlled.insert_fake_value(2, 999);

        assert_eq!(controlled.next(), real.next());
        real.next();
        assert_eq!(controlled.next(), 999);
        assert_eq!(controlled.next(), real.next());
        assert_eq!(controlled.sequence_count(), 3);
    }
}
