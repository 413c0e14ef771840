// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: row packing, justification, and seeded jitter.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::book::Book;
use crate::config::{HeightScaling, LayoutConfig};
use crate::jitter::Jitter;
use crate::row::{natural_size, pack_rows};

/// Fraction of the nominal free gap a jittered item may consume toward each
/// neighbor. Both neighbors jitter independently, so anything below 0.5
/// guarantees no intra-row overlap.
const GAP_SHARE: f64 = 0.4;

/// One positioned placement produced by [`compute_layout`].
///
/// `x`/`y` locate the top-left corner in the virtual canvas; `w`/`h` are the
/// rendered size. `z`, `d`, and `ry` feed a simulated-3D presentation
/// (stacking order, spine depth, and rotation about the vertical axis) and
/// never participate in overlap guarantees.
///
/// Items are plain values, produced fresh on every recompute; a previous
/// result is never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutItem {
    /// Back-reference to [`Book::id`].
    pub id: String,
    /// Left edge in the virtual canvas.
    pub x: f64,
    /// Top edge in the virtual canvas.
    pub y: f64,
    /// Simulated depth displacement, in `[-max_depth, max_depth)`.
    pub z: f64,
    /// Rendered width.
    pub w: f64,
    /// Rendered height.
    pub h: f64,
    /// Rendered spine thickness.
    pub d: f64,
    /// Rotation about the vertical axis, in degrees.
    pub ry: f64,
}

impl LayoutItem {
    /// The item's 2D frame as a [`Rect`].
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }
}

/// Computes a justified, organically jittered shelf layout.
///
/// A pure function of its inputs: same books, same width, same config give
/// bit-identical output. Books that are not placeable (see
/// [`Book::is_placeable`]) are silently skipped; the output id set equals the
/// placeable input id set, in input order.
///
/// A non-positive or non-finite `container_width` is a caller contract
/// violation; this implementation returns an empty layout rather than
/// panicking, so a degenerate measurement can never take down a render pass.
#[must_use]
pub fn compute_layout(
    books: &[Book],
    container_width: f64,
    config: &LayoutConfig,
) -> Vec<LayoutItem> {
    if !container_width.is_finite() || container_width <= 0.0 {
        return Vec::new();
    }

    let placeable: Vec<&Book> = books.iter().filter(|b| b.is_placeable()).collect();
    let sizes: Vec<_> = placeable
        .iter()
        .map(|b| natural_size(b, config))
        .collect();
    let rows = pack_rows(&sizes, container_width, config);

    let mut items = Vec::with_capacity(placeable.len());
    let mut y_cursor = 0.0;

    // Reused per row: nominal (pre-jitter) frames, needed for gap clamping.
    let mut nominal: Vec<(f64, f64, f64, f64)> = Vec::new(); // (x, w, h, d)

    for (row_index, row) in rows.iter().enumerate() {
        let scale = row.scale;
        let count = row.len();

        let mut row_h = 0.0_f64;
        nominal.clear();
        let total_row_width =
            row.natural_sum * scale + (count - 1) as f64 * config.gutter_x;
        let mut x = if config.center_rows {
            ((container_width - total_row_width) / 2.0).max(0.0)
        } else {
            0.0
        };
        for s in &sizes[row.start..row.end] {
            let w = s.w * scale;
            let h = match config.height_scaling {
                HeightScaling::Proportional => s.h * scale,
                HeightScaling::Uniform => s.h,
            };
            let d = s.d * scale;
            row_h = row_h.max(h);
            nominal.push((x, w, h, d));
            x += w + config.gutter_x;
        }

        let wave = sin(row_index as f64 * config.row_wave_frequency) * config.row_wave_amplitude;
        let row_y = y_cursor + wave;

        for (i, &(nx, w, h, d)) in nominal.iter().enumerate() {
            let book = placeable[row.start + i];
            let jit = Jitter::for_id(&book.id);

            // Free gaps from nominal positions; the container edges bound the
            // outermost items.
            let gap_left = if i == 0 {
                nx
            } else {
                let (px, pw, ..) = nominal[i - 1];
                nx - (px + pw)
            };
            let gap_right = if i + 1 == count {
                container_width - (nx + w)
            } else {
                let (sx, ..) = nominal[i + 1];
                sx - (nx + w)
            };

            let dx = (jit.offset_unit() * config.jitter_x).clamp(
                -GAP_SHARE * gap_left.max(0.0),
                GAP_SHARE * gap_right.max(0.0),
            );

            items.push(LayoutItem {
                id: book.id.clone(),
                x: nx + dx,
                // Books sit on the shelf baseline: bottom-aligned within the row.
                y: row_y + (row_h - h),
                z: jit.depth_unit() * config.max_depth,
                w,
                h,
                d,
                ry: jit.tilt_unit() * config.max_tilt_y,
            });
        }

        y_cursor += row_h + config.gutter_y;
    }

    items
}

/// Bounding box of a layout, or [`Rect::ZERO`] for an empty one.
#[must_use]
pub fn layout_bounds(items: &[LayoutItem]) -> Rect {
    let mut iter = items.iter();
    let Some(first) = iter.next() else {
        return Rect::ZERO;
    };
    iter.fold(first.frame(), |acc, item| acc.union(item.frame()))
}

#[inline]
fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return f64::sin(x);
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    return libm::sin(x);
}
