// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit, caller-owned layout cache.
//!
//! Hosts recompute layout on every width change and list change, but scroll
//! and focus churn often re-request a layout whose inputs have not moved.
//! [`LayoutMemo`] skips those recomputes by fingerprinting the inputs.
//!
//! This is deliberately an owned object with a defined lifecycle (create one
//! per shelf view, drop it with the view) rather than a module-level
//! memoization map; there is no hidden process-wide state.

use alloc::vec::Vec;

use crate::book::Book;
use crate::config::{HeightScaling, LayoutConfig, Normalization};
use crate::engine::{LayoutItem, compute_layout};

/// Caches the most recent layout keyed by an input fingerprint.
///
/// ```rust
/// use shelfside_layout::{Book, LayoutConfig, LayoutMemo};
///
/// let books = vec![Book::new("a", 120.0, 190.0, 15.0)];
/// let config = LayoutConfig::default();
/// let mut memo = LayoutMemo::new();
///
/// let first = memo.layout(&books, 800.0, &config).to_vec();
/// // Unchanged inputs: served from the cache, identical output.
/// assert_eq!(memo.layout(&books, 800.0, &config), &first[..]);
/// // A width change invalidates the fingerprint; here the narrower
/// // container also shrinks the row, so the output itself changes.
/// assert_ne!(memo.layout(&books, 100.0, &config), &first[..]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutMemo {
    fingerprint: Option<u64>,
    items: Vec<LayoutItem>,
}

impl LayoutMemo {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout for the given inputs, recomputing only when the
    /// input fingerprint differs from the cached one.
    pub fn layout(
        &mut self,
        books: &[Book],
        container_width: f64,
        config: &LayoutConfig,
    ) -> &[LayoutItem] {
        let fp = fingerprint(books, container_width, config);
        if self.fingerprint != Some(fp) {
            self.items = compute_layout(books, container_width, config);
            self.fingerprint = Some(fp);
        }
        &self.items
    }

    /// Drops the cached layout, forcing the next call to recompute.
    pub fn invalidate(&mut self) {
        self.fingerprint = None;
        self.items.clear();
    }

    /// The cached items, if any input has been laid out yet.
    #[must_use]
    pub fn cached(&self) -> Option<&[LayoutItem]> {
        self.fingerprint.map(|_| self.items.as_slice())
    }
}

fn fingerprint(books: &[Book], container_width: f64, config: &LayoutConfig) -> u64 {
    let mut h = 0xcbf2_9ce4_8422_2325_u64; // FNV offset basis as a seed.
    h = mix(h, books.len() as u64);
    for book in books {
        h = mix(h, u64::from(crate::jitter::hash_id(&book.id)));
        h = mix(h, book.width_mm.to_bits());
        h = mix(h, book.height_mm.to_bits());
        h = mix(h, book.thickness_mm.to_bits());
    }
    h = mix(h, container_width.to_bits());
    for v in [
        config.base_height,
        config.target_row_height,
        config.gutter_x,
        config.gutter_y,
        config.jitter_x,
        config.max_tilt_y,
        config.max_depth,
        config.max_stretch,
        config.row_wave_amplitude,
        config.row_wave_frequency,
    ] {
        h = mix(h, v.to_bits());
    }
    h = mix(h, u64::from(config.ragged_last_row));
    h = mix(h, u64::from(config.center_rows));
    h = mix(
        h,
        match config.normalization {
            Normalization::RelativeToBase => 0,
            Normalization::EqualHeight => 1,
        },
    );
    h = mix(
        h,
        match config.height_scaling {
            HeightScaling::Proportional => 0,
            HeightScaling::Uniform => 1,
        },
    );
    h = mix(
        h,
        config.force_row_count.map_or(u64::MAX, |n| n as u64),
    );
    h
}

#[inline]
fn mix(h: u64, v: u64) -> u64 {
    (h ^ v)
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .rotate_left(31)
}
