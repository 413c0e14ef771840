// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic pseudo-random perturbation seeded by book ids.
//!
//! The engine never draws from wall-clock time or a mutable generator.
//! Instead, each book's id is reduced to a stable 32-bit seed by
//! [`hash_id`], and that seed indexes low-discrepancy radical-inverse
//! (Halton) sequences with a distinct prime base per axis:
//!
//! - base 2 for the horizontal offset,
//! - base 3 for the tilt about the vertical axis,
//! - base 5 for the simulated depth displacement.
//!
//! Distinct bases keep the three axes decorrelated while every value remains
//! a pure function of the id. Both [`hash_id`] and [`radical_inverse`] are
//! stable, documented algorithms: changing either reshuffles all jitter and
//! must be treated as a breaking change to visual output.

/// Reduces an id string to a stable 32-bit seed.
///
/// This is the classic polynomial rolling hash over the id's UTF-8 bytes,
/// `h = h * 31 + byte` with wrapping arithmetic. It is intentionally simple
/// and intentionally frozen; it is a compatibility surface, not a quality
/// hash.
#[must_use]
pub fn hash_id(id: &str) -> u32 {
    let mut h: u32 = 0;
    for &b in id.as_bytes() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(b));
    }
    h
}

/// Radical inverse of `n` in the given base, in `[0, 1)`.
///
/// Reflects the base-`base` digits of `n` about the radix point. For a fixed
/// base this is the Halton/van der Corput construction; consecutive `n`
/// values produce well-distributed, non-clumping samples.
///
/// `base` must be at least 2; smaller values are treated as 2.
#[must_use]
pub fn radical_inverse(base: u32, mut n: u32) -> f64 {
    let base = base.max(2);
    let inv_base = 1.0 / f64::from(base);
    let mut inv = inv_base;
    let mut result = 0.0;
    while n > 0 {
        result += f64::from(n % base) * inv;
        n /= base;
        inv *= inv_base;
    }
    result
}

/// Per-item jitter source derived from a book id.
///
/// Each accessor returns a signed unit value in `[-1, 1)`, ready to be scaled
/// by the configured jitter magnitude for its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jitter {
    seed: u32,
}

impl Jitter {
    /// Builds the jitter source for a book id.
    #[must_use]
    pub fn for_id(id: &str) -> Self {
        Self {
            seed: hash_id(id),
        }
    }

    /// Builds the jitter source from a precomputed seed.
    #[must_use]
    pub fn from_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Signed unit value for the horizontal offset axis (base 2).
    #[must_use]
    pub fn offset_unit(self) -> f64 {
        signed(radical_inverse(2, self.seed))
    }

    /// Signed unit value for the tilt axis (base 3).
    #[must_use]
    pub fn tilt_unit(self) -> f64 {
        signed(radical_inverse(3, self.seed))
    }

    /// Signed unit value for the depth axis (base 5).
    #[must_use]
    pub fn depth_unit(self) -> f64 {
        signed(radical_inverse(5, self.seed))
    }
}

/// Maps `[0, 1)` to `[-1, 1)`.
fn signed(unit: f64) -> f64 {
    unit * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::{Jitter, hash_id, radical_inverse};

    #[test]
    fn hash_is_stable() {
        // Frozen values: these are part of the compatibility contract.
        assert_eq!(hash_id(""), 0);
        assert_eq!(hash_id("a"), 97);
        assert_eq!(hash_id("ab"), 97 * 31 + 98);
        assert_eq!(hash_id("isbn:9780140449136"), hash_id("isbn:9780140449136"));
    }

    #[test]
    fn radical_inverse_reflects_digits() {
        // 1 -> 0.1b = 0.5, 2 -> 0.01b = 0.25, 3 -> 0.11b = 0.75.
        assert!((radical_inverse(2, 1) - 0.5).abs() < 1e-12);
        assert!((radical_inverse(2, 2) - 0.25).abs() < 1e-12);
        assert!((radical_inverse(2, 3) - 0.75).abs() < 1e-12);
        // Base 3: 1 -> 1/3, 5 = 12_3 -> 0.21_3 = 2/3 + 1/9.
        assert!((radical_inverse(3, 1) - 1.0 / 3.0).abs() < 1e-12);
        assert!((radical_inverse(3, 5) - (2.0 / 3.0 + 1.0 / 9.0)).abs() < 1e-12);
    }

    #[test]
    fn radical_inverse_stays_in_unit_interval() {
        for n in 0..10_000 {
            for base in [2, 3, 5] {
                let v = radical_inverse(base, n);
                assert!((0.0..1.0).contains(&v), "base {base}, n {n} gave {v}");
            }
        }
    }

    #[test]
    fn axes_are_decorrelated_per_id() {
        let j = Jitter::for_id("some-book");
        let (a, b, c) = (j.offset_unit(), j.tilt_unit(), j.depth_unit());
        assert!(a != b && b != c && a != c);
        for v in [a, b, c] {
            assert!((-1.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_id_same_jitter() {
        assert_eq!(
            Jitter::for_id("x").offset_unit().to_bits(),
            Jitter::for_id("x").offset_unit().to_bits()
        );
    }
}
