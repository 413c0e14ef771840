// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration and the named scaling policies.

/// How a book's millimeter dimensions map to natural (pre-justification)
/// rendered sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Scale every book by the same pixels-per-millimeter factor,
    /// `target_row_height / base_height`.
    ///
    /// Books keep their relative physical sizes: a 300 mm folio renders
    /// taller than a 178 mm paperback, as on a photographed shelf.
    #[default]
    RelativeToBase,
    /// Normalize every book to `target_row_height` tall, scaling width to
    /// preserve aspect ratio.
    ///
    /// All books in a row start at the same height; rows look more like a
    /// justified image gallery than a physical shelf.
    EqualHeight,
}

/// How row justification affects item heights.
///
/// Justification always scales widths so a row fills the container. The two
/// policies differ in what happens to heights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeightScaling {
    /// Heights scale with widths, preserving each book's aspect ratio
    /// exactly. Row heights vary with the justification scale.
    #[default]
    Proportional,
    /// Heights stay at their natural values; only widths are scaled. A
    /// heavily stretched row distorts aspect ratios slightly, but every row
    /// keeps its natural height.
    Uniform,
}

/// Immutable configuration for one layout run.
///
/// The policy fields ([`Normalization`], [`HeightScaling`], `max_stretch`,
/// `force_row_count`) unify what would otherwise be divergent engine
/// variants into a single configurable engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Reference normalization height in millimeters.
    ///
    /// Under [`Normalization::RelativeToBase`], a book exactly this tall
    /// renders at `target_row_height`.
    pub base_height: f64,
    /// Desired visual row height (in output units) before justification.
    pub target_row_height: f64,
    /// Fixed horizontal spacing between items in a row.
    pub gutter_x: f64,
    /// Fixed vertical spacing between rows.
    pub gutter_y: f64,
    /// Maximum magnitude of the horizontal jitter offset.
    ///
    /// Regardless of this value, per-item jitter is clamped to at most 40%
    /// of the nominal free gap toward each neighbor, so jitter can never
    /// cause intra-row overlap.
    pub jitter_x: f64,
    /// Maximum rotation about the vertical axis, in degrees.
    pub max_tilt_y: f64,
    /// Maximum simulated forward/backward displacement.
    pub max_depth: f64,
    /// When `true`, an under-filled final row is left at natural scale
    /// instead of being stretched to fill the container.
    pub ragged_last_row: bool,
    /// Millimeter-to-output mapping policy.
    pub normalization: Normalization,
    /// Height behavior during row justification.
    pub height_scaling: HeightScaling,
    /// Upper clamp on the justification scale, to avoid grotesque
    /// enlargement of a nearly empty row. Shrinking is never clamped.
    pub max_stretch: f64,
    /// When set, pack into exactly this many rows (demo variant) instead of
    /// closing rows against the container width.
    pub force_row_count: Option<usize>,
    /// Horizontally center each row within the container.
    pub center_rows: bool,
    /// Amplitude of the deterministic sinusoidal per-row vertical offset.
    pub row_wave_amplitude: f64,
    /// Angular frequency of the row wave, applied as
    /// `sin(row_index * frequency) * amplitude`.
    pub row_wave_frequency: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_height: 200.0,
            target_row_height: 200.0,
            gutter_x: 8.0,
            gutter_y: 24.0,
            jitter_x: 6.0,
            max_tilt_y: 4.0,
            max_depth: 12.0,
            ragged_last_row: true,
            normalization: Normalization::default(),
            height_scaling: HeightScaling::default(),
            max_stretch: 1.15,
            force_row_count: None,
            center_rows: false,
            row_wave_amplitude: 3.0,
            row_wave_frequency: 0.7,
        }
    }
}
