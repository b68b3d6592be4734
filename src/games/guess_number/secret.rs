use std::fmt;

use rand::Rng;

use crate::config::{SECRET_MAX, SECRET_MIN};

/// The number the player is trying to guess.
///
/// No `Display` impl, and `Debug` is redacted. The value is only observable
/// through
/// [`RoundOutcome::judge`](super::outcome::RoundOutcome::judge).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secret(u8);

impl Secret {
    /// Returns `None` when `value` lies outside the configured range.
    pub fn new(value: u8) -> Option<Self> {
        (SECRET_MIN..=SECRET_MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    pub(crate) fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}

/// Where each round gets its secret from.
pub trait SecretSource {
    fn draw(&mut self) -> Secret;
}

impl<F: FnMut() -> Secret> SecretSource for F {
    fn draw(&mut self) -> Secret {
        self()
    }
}

/// Uniform draws over `SECRET_MIN..=SECRET_MAX`.
pub struct RandomSecrets<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSecrets<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecrets<rand::rngs::ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> SecretSource for RandomSecrets<R> {
    fn draw(&mut self) -> Secret {
        Secret(self.rng.random_range(SECRET_MIN..=SECRET_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_rejects_values_outside_range() {
        assert!(Secret::new(0).is_none());
        assert!(Secret::new(11).is_none());
        assert_eq!(Secret::new(1).map(Secret::value), Some(1));
        assert_eq!(Secret::new(10).map(Secret::value), Some(10));
    }

    #[test]
    fn debug_does_not_leak_value() {
        let secret = Secret::new(7).unwrap();
        assert_eq!(format!("{:?}", secret), "Secret(..)");
    }

    #[test]
    fn draws_stay_in_range() {
        let mut source = RandomSecrets::new(StdRng::seed_from_u64(1));
        for _ in 0..1_000 {
            let v = source.draw().value();
            assert!((SECRET_MIN..=SECRET_MAX).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn draws_are_roughly_uniform() {
        const N: usize = 100_000;
        let mut source = RandomSecrets::new(StdRng::seed_from_u64(0x5eed));
        let mut counts = [0usize; SECRET_MAX as usize + 1];
        for _ in 0..N {
            counts[source.draw().value() as usize] += 1;
        }

        let buckets = (SECRET_MAX - SECRET_MIN + 1) as f64;
        let expected = N as f64 / buckets;
        // chi-squared, 9 degrees of freedom; 27.88 is the 0.001 critical value
        let chi2: f64 = counts[SECRET_MIN as usize..]
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(chi2 < 27.88, "chi2 = {chi2}, counts = {counts:?}");
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn closures_are_secret_sources() {
        let mut source = || Secret::new(3).unwrap();
        assert_eq!(source.draw().value(), 3);
    }
}
