// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::models::{CharacterClass, PasswordGenerationOptions};

/// Concatenate the enabled classes in order. Characters shared by two
/// classes are kept twice and therefore weigh double.
pub fn build_pool(classes: &[CharacterClass]) -> Vec<char> {
    classes.iter().flat_map(|class| class.all().chars()).collect()
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Draw `length` characters from the enabled classes using the OS CSPRNG.
    pub fn generate(&self, classes: &[CharacterClass], length: usize) -> String {
        self.generate_with_rng(&mut OsRng, classes, length)
    }

    /// Same as [`generate`](Self::generate) with a caller supplied secure RNG.
    ///
    /// Each position is an independent draw with replacement. `Uniform`
    /// rejects out-of-zone samples, so every index of the pool is equally
    /// likely whatever the pool size.
    pub fn generate_with_rng<R>(&self, rng: &mut R, classes: &[CharacterClass], length: usize) -> String
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let pool = build_pool(classes);
        if pool.is_empty() {
            log::debug!("No character class enabled, returning an empty password");
            return String::new();
        }

        let dist = Uniform::from(0..pool.len());
        let password: String = (0..length).map(|_| pool[dist.sample(rng)]).collect();

        log::debug!(
            "Generated password of length {} from a pool of {} characters",
            length,
            pool.len()
        );
        password
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> String {
        self.generate(&options.classes, options.length)
    }

    /// Generate `count` independent passwords with the same options.
    pub fn generate_batch(&self, options: &PasswordGenerationOptions, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate_password(options)).collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashMap;

    #[test]
    fn pool_preserves_class_order() {
        let pool = build_pool(&[CharacterClass::Digit, CharacterClass::Lowercase]);
        assert_eq!(pool.len(), 36);
        assert_eq!(pool[0], '0');
        assert_eq!(pool[9], '9');
        assert_eq!(pool[10], 'a');
        assert_eq!(*pool.last().unwrap(), 'z');
    }

    #[test]
    fn pool_keeps_duplicate_classes() {
        let pool = build_pool(&[CharacterClass::Digit, CharacterClass::Digit]);
        assert_eq!(pool.len(), 20);
        assert_eq!(pool.iter().filter(|c| **c == '7').count(), 2);
    }

    #[test]
    fn generates_exact_length_from_enabled_classes() {
        let generator = PasswordGenerator::new();
        let classes = [CharacterClass::Uppercase, CharacterClass::Symbol];
        let allowed = build_pool(&classes);

        for length in [0, 1, 7, 16, 64, 128] {
            let password = generator.generate(&classes, length);
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(|c| allowed.contains(&c)));
        }
    }

    #[test]
    fn empty_pool_yields_empty_password() {
        let generator = PasswordGenerator::new();
        assert_eq!(generator.generate(&[], 0), "");
        assert_eq!(generator.generate(&[], 32), "");
    }

    #[test]
    fn zero_length_yields_empty_password() {
        let generator = PasswordGenerator::new();
        assert_eq!(generator.generate(&CharacterClass::ALL, 0), "");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let generator = PasswordGenerator::new();
        let mut a = ChaCha20Rng::seed_from_u64(7);
        let mut b = ChaCha20Rng::seed_from_u64(7);
        assert_eq!(
            generator.generate_with_rng(&mut a, &CharacterClass::ALL, 40),
            generator.generate_with_rng(&mut b, &CharacterClass::ALL, 40)
        );
    }

    #[test]
    fn single_class_selection_is_uniform() {
        // Chi-square goodness of fit over the ten digits (9 degrees of freedom).
        // 27.88 is the critical value at p = 0.001.
        let generator = PasswordGenerator::new();
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        let draws = 100_000;
        let password = generator.generate_with_rng(&mut rng, &[CharacterClass::Digit], draws);

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in password.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 10);

        let expected = draws as f64 / 10.0;
        let chi_square: f64 = counts
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi_square < 27.88, "chi-square too large: {chi_square}");
    }

    #[test]
    fn batch_produces_requested_count() {
        let generator = PasswordGenerator::new();
        let options = PasswordGenerationOptions {
            length: 12,
            classes: vec![CharacterClass::Lowercase],
        };
        let batch = generator.generate_batch(&options, 5);
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 12));
    }
}
