use rand::Rng;

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;
const DEFAULT_SEED: u64 = 3819201;

/// Source of randomness for picking among equally good moves.
pub trait RandomGenerator: Default {
    /// Returns the next raw value.
    fn next(&mut self) -> u32;

    /// Returns a value in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    /// Picks one element of `items`, or `None` for an empty slice.
    fn pick<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

/// Generator backed by rand's thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> u32 {
        rand::random()
    }

    fn next_range(&mut self, from: usize, to: usize) -> usize {
        rand::rng().random_range(from..to)
    }
}

/// Deterministic 64-bit linear congruential generator.
///
/// Two generators built from the same seed produce the same sequence, which makes
/// computer games reproducible.
#[derive(Debug, Clone)]
pub struct SeededGenerator {
    state: u64,
}

impl Default for SeededGenerator {
    fn default() -> Self {
        SeededGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededGenerator {
    fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        // high bits of an LCG are the well-distributed ones
        (self.state >> 33) as u32
    }

    fn next_range(&mut self, from: usize, to: usize) -> usize {
        from + self.next() as usize % (to - from)
    }
}

impl SeededGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{RandomGenerator, SeededGenerator, StandardRandomGenerator};

    #[test]
    fn outputs_same_numbers() {
        let mut generator = SeededGenerator::new(42);
        assert_eq!(generator.next_range(0, 10), 4);
        assert_eq!(generator.next_range(0, 10), 6);
        assert_eq!(generator.next_range(0, 10), 8);
        assert_eq!(generator.next_range(0, 10), 3);
        assert_eq!(generator.next_range(0, 10), 4);
    }

    #[test]
    fn same_seed_same_picks() {
        let items = [432, 6542, 534, 6, 13, 645, 88, 2352, 345];
        let mut first = SeededGenerator::new(7);
        let mut second = SeededGenerator::new(7);
        for _ in 0..20 {
            assert_eq!(first.pick(&items), second.pick(&items));
        }
    }

    #[test]
    fn pick_stays_inside_slice() {
        let items = [1, 2, 3];
        let mut generator = StandardRandomGenerator;
        for _ in 0..100 {
            let picked = generator.pick(&items);
            assert!(picked.is_some_and(|value| items.contains(value)));
        }
        assert_eq!(generator.pick::<u8>(&[]), None);
    }

    #[test]
    fn range_is_offset_by_start() {
        let mut generator = SeededGenerator::default();
        for _ in 0..100 {
            let value = generator.next_range(3, 7);
            assert!((3..7).contains(&value));
        }
    }
}
