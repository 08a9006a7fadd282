use rand::Rng;

/// Modulus of the seeded generator. Every state stays in `0..LCG_MODULUS`.
const LCG_MODULUS: i64 = i32::MAX as i64;
const LCG_MULTIPLIER: i64 = 1103515245;
const LCG_INCREMENT: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness for the Easy computer opponent.
///
/// Passed to the move selector explicitly so tests can swap in a seeded generator and assert
/// exact moves.
pub trait RandomGenerator: Default {
    /// Returns a number in `from..to`. `from` must be less than `to`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one element uniformly, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// Generator backed by the thread-local `rand` generator.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A linear congruential generator. Same seed, same sequence.
///
/// Any `i64` is accepted as a seed; seeds that differ by a multiple of `i32::MAX` produce the
/// same sequence.
#[derive(Debug, Clone)]
pub struct SeededGenerator {
    state: i64,
}

impl SeededGenerator {
    pub const fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(LCG_MODULUS),
        }
    }

    fn step(&mut self) -> i64 {
        // state < 2^31 and the multiplier < 2^31, so this cannot overflow
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state
    }
}

impl Default for SeededGenerator {
    fn default() -> Self {
        SeededGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededGenerator {
    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        let span = i64::from(to) - i64::from(from);
        (self.step() % span + i64::from(from)) as i32
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{RandomGenerator, SeededGenerator, StandardRandomGenerator};

    #[test]
    fn seeded_sequence_is_fixed() {
        let mut rg = SeededGenerator::new(7);
        let drawn: Vec<i32> = (0..6).map(|_| rg.next_range(0, 9)).collect();
        assert_eq!(drawn, vec![3, 7, 6, 5, 6, 3]);

        let mut rg = SeededGenerator::new(42);
        let drawn: Vec<i32> = (0..5).map(|_| rg.next_range(10, 20)).collect();
        assert_eq!(drawn, vec![18, 14, 11, 12, 14]);
    }

    #[test]
    fn large_and_negative_seeds_are_reduced() {
        // arrange
        let mut large = SeededGenerator::new(10_000_000_000);
        let mut negative = SeededGenerator::new(-5);
        let mut extreme = SeededGenerator::new(i64::MIN);

        // act
        let from_large: Vec<i32> = (0..5).map(|_| large.next_range(0, 9)).collect();
        let from_negative: Vec<i32> = (0..5).map(|_| negative.next_range(0, 9)).collect();
        let from_extreme: Vec<i32> = (0..100).map(|_| extreme.next_range(0, 9)).collect();

        // assert
        assert_eq!(from_large, vec![3, 1, 6, 2, 1]);
        assert_eq!(from_negative, vec![0, 2, 6, 8, 8]);
        assert!(from_extreme.iter().all(|n| (0..9).contains(n)));
    }

    #[test]
    fn seeds_a_modulus_apart_agree() {
        let mut a = SeededGenerator::new(5);
        let mut b = SeededGenerator::new(5 + i32::MAX as i64);
        for _ in 0..20 {
            assert_eq!(a.next_range(0, 100), b.next_range(0, 100));
        }
    }

    #[test]
    fn choose_should_be_same() {
        let items = [432, 6542, 534, 6, 13, 645, 88, 2352, 345, 2667, 8287];
        let mut rg = SeededGenerator::default();
        let picked: Vec<i32> = (0..5).map(|_| *rg.choose(&items).unwrap()).collect();
        assert_eq!(picked, vec![6, 2667, 534, 8287, 6]);
    }

    #[test]
    fn choose_from_nothing() {
        let items: [usize; 0] = [];
        assert_eq!(SeededGenerator::default().choose(&items), None);
        assert_eq!(StandardRandomGenerator.choose(&items), None);
    }

    #[test]
    fn standard_stays_in_range() {
        let mut rg = StandardRandomGenerator;
        for _ in 0..1000 {
            let n = rg.next_range(3, 7);
            assert!((3..7).contains(&n));
        }
    }
}
