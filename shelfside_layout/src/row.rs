// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal row construction: normalization, greedy packing, justification.

use alloc::vec::Vec;

use crate::book::Book;
use crate::config::{LayoutConfig, Normalization};

/// Natural (pre-justification) rendered size of one book.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NaturalSize {
    pub(crate) w: f64,
    pub(crate) h: f64,
    pub(crate) d: f64,
}

/// One closed row over a slice of natural sizes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Row {
    /// Index of the first member (into the placeable-size slice).
    pub(crate) start: usize,
    /// One past the last member.
    pub(crate) end: usize,
    /// Sum of the members' natural widths, excluding gutters.
    pub(crate) natural_sum: f64,
    /// Justification scale applied to member widths.
    pub(crate) scale: f64,
}

impl Row {
    pub(crate) fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Maps a book's millimeter dimensions to its natural rendered size.
pub(crate) fn natural_size(book: &Book, config: &LayoutConfig) -> NaturalSize {
    let per_mm = match config.normalization {
        Normalization::RelativeToBase => {
            if config.base_height > 0.0 {
                config.target_row_height / config.base_height
            } else {
                1.0
            }
        }
        Normalization::EqualHeight => config.target_row_height / book.height_mm,
    };
    NaturalSize {
        w: book.width_mm * per_mm,
        h: book.height_mm * per_mm,
        d: book.thickness_mm * per_mm,
    }
}

/// Packs natural sizes into rows and computes each row's justification scale.
///
/// A single left-to-right pass: before appending the next book, check whether
/// it would overflow the row budget; if so and the row is non-empty, close the
/// row. The budget is the container width, or a per-row share of the total
/// natural width when `force_row_count` is set.
pub(crate) fn pack_rows(
    sizes: &[NaturalSize],
    container_width: f64,
    config: &LayoutConfig,
) -> Vec<Row> {
    if sizes.is_empty() {
        return Vec::new();
    }

    let ranges = match config.force_row_count {
        Some(rows) if rows > 0 => split_fixed_rows(sizes, rows),
        _ => split_by_width(sizes, container_width, config.gutter_x),
    };

    let last = ranges.len() - 1;
    ranges
        .into_iter()
        .enumerate()
        .map(|(i, (start, end))| {
            let natural_sum: f64 = sizes[start..end].iter().map(|s| s.w).sum();
            let count = end - start;
            let usable = container_width - (count - 1) as f64 * config.gutter_x;
            let mut scale = if natural_sum > 0.0 {
                usable / natural_sum
            } else {
                1.0
            };
            scale = scale.min(config.max_stretch);
            if i == last && config.ragged_last_row {
                scale = scale.min(1.0);
            }
            // A row can only stretch, never grow unbounded; shrinking stays
            // exact so a single oversized book still fits the container.
            Row {
                start,
                end,
                natural_sum,
                scale,
            }
        })
        .collect()
}

/// Greedy split against the container width.
fn split_by_width(
    sizes: &[NaturalSize],
    container_width: f64,
    gutter_x: f64,
) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    for (i, s) in sizes.iter().enumerate() {
        let needed = if i == start { s.w } else { used + gutter_x + s.w };
        if i > start && needed > container_width {
            ranges.push((start, i));
            start = i;
            used = s.w;
        } else {
            used = needed;
        }
    }
    ranges.push((start, sizes.len()));
    ranges
}

/// Split into exactly `rows` rows of near-equal natural width.
///
/// The budget ignores gutters; the final row absorbs any remainder. When
/// there are fewer books than rows, trailing rows are simply not produced.
fn split_fixed_rows(sizes: &[NaturalSize], rows: usize) -> Vec<(usize, usize)> {
    let total: f64 = sizes.iter().map(|s| s.w).sum();
    let budget = total / rows as f64;
    let mut ranges = Vec::with_capacity(rows);
    let mut start = 0;
    let mut used = 0.0;
    for (i, s) in sizes.iter().enumerate() {
        if i > start && ranges.len() + 1 < rows && used + s.w > budget {
            ranges.push((start, i));
            start = i;
            used = 0.0;
        }
        used += s.w;
    }
    ranges.push((start, sizes.len()));
    ranges
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{natural_size, pack_rows};
    use crate::book::Book;
    use crate::config::{LayoutConfig, Normalization};

    fn sizes_for(books: &[Book], config: &LayoutConfig) -> alloc::vec::Vec<super::NaturalSize> {
        books.iter().map(|b| natural_size(b, config)).collect()
    }

    #[test]
    fn equal_height_normalization_preserves_aspect() {
        let config = LayoutConfig {
            normalization: Normalization::EqualHeight,
            target_row_height: 100.0,
            ..LayoutConfig::default()
        };
        let s = natural_size(&Book::new("a", 50.0, 200.0, 20.0), &config);
        assert!((s.h - 100.0).abs() < 1e-9);
        assert!((s.w - 25.0).abs() < 1e-9);
        assert!((s.d - 10.0).abs() < 1e-9);
    }

    #[test]
    fn relative_normalization_keeps_relative_sizes() {
        let config = LayoutConfig::default(); // base 200, target 200 -> 1 px per mm
        let tall = natural_size(&Book::new("tall", 100.0, 300.0, 20.0), &config);
        let short = natural_size(&Book::new("short", 100.0, 150.0, 20.0), &config);
        assert!(tall.h > short.h);
        assert!((tall.h - 300.0).abs() < 1e-9);
    }

    #[test]
    fn rows_close_before_overflow() {
        let config = LayoutConfig {
            gutter_x: 10.0,
            ..LayoutConfig::default()
        };
        let books = vec![
            Book::new("a", 150.0, 200.0, 10.0),
            Book::new("b", 150.0, 200.0, 10.0),
            Book::new("c", 150.0, 200.0, 10.0),
        ];
        let sizes = sizes_for(&books, &config);
        // Two books plus one gutter is 310; a third would need 470.
        let rows = pack_rows(&sizes, 320.0, &config);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].start, rows[0].end), (0, 2));
        assert_eq!((rows[1].start, rows[1].end), (2, 3));
    }

    #[test]
    fn oversized_single_book_shrinks_to_fit() {
        let config = LayoutConfig::default();
        let books = vec![Book::new("folio", 500.0, 200.0, 10.0)];
        let sizes = sizes_for(&books, &config);
        let rows = pack_rows(&sizes, 400.0, &config);
        assert_eq!(rows.len(), 1);
        assert!((rows[0].scale - 0.8).abs() < 1e-9);
    }

    #[test]
    fn stretch_is_clamped_but_shrink_is_not() {
        let config = LayoutConfig {
            ragged_last_row: false,
            max_stretch: 1.15,
            ..LayoutConfig::default()
        };
        let books = vec![Book::new("lonely", 100.0, 200.0, 10.0)];
        let sizes = sizes_for(&books, &config);
        let rows = pack_rows(&sizes, 800.0, &config);
        // Unclamped scale would be 8.0.
        assert!((rows[0].scale - 1.15).abs() < 1e-9);
    }

    #[test]
    fn ragged_last_row_stays_natural() {
        let config = LayoutConfig::default(); // ragged_last_row: true
        let books = vec![Book::new("lonely", 100.0, 200.0, 10.0)];
        let sizes = sizes_for(&books, &config);
        let rows = pack_rows(&sizes, 800.0, &config);
        assert!((rows[0].scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn force_row_count_splits_into_requested_rows() {
        let config = LayoutConfig {
            force_row_count: Some(3),
            ..LayoutConfig::default()
        };
        let books: alloc::vec::Vec<Book> = (0..9)
            .map(|i| Book::new(alloc::format!("b{i}"), 100.0, 200.0, 10.0))
            .collect();
        let sizes = sizes_for(&books, &config);
        let rows = pack_rows(&sizes, 10_000.0, &config);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().map(super::Row::len).sum::<usize>(), 9);
    }
}
