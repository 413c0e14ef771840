// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Shelfside demos.

use shelfside_layout::Book;

/// Builds a synthetic library with plausibly varied physical dimensions.
#[must_use]
pub fn synthetic_library(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| {
            let w = 105.0 + (i % 9) as f64 * 9.0;
            let h = 170.0 + (i % 6) as f64 * 15.0;
            Book::new(format!("isbn-{i:05}"), w, h, 12.0 + (i % 4) as f64 * 6.0)
        })
        .collect()
}
