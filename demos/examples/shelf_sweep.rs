// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out a synthetic library, then sweeps a viewport down the shelf and
//! prints which chunks would be materialized at each stop.
//!
//! Run with: `cargo run -p shelfside_demos --example shelf_sweep`

use shelfside_demos::synthetic_library;
use shelfside_layout::{LayoutConfig, compute_layout, layout_bounds};
use shelfside_virtual::{DEFAULT_CHUNK_SIZE, ShelfViewport, VisibilityParams};

fn main() {
    let books = synthetic_library(5_000);
    let config = LayoutConfig::default();
    let items = compute_layout(&books, 1_200.0, &config);
    let bounds = layout_bounds(&items);
    println!(
        "{} books -> {} items, canvas {:.0} x {:.0}",
        books.len(),
        items.len(),
        bounds.width(),
        bounds.height()
    );

    let mut shelf = ShelfViewport::new(800.0, DEFAULT_CHUNK_SIZE, VisibilityParams::default());
    shelf.set_items(&items);
    println!(
        "{} chunks of <= {} items, total extent {:.0}",
        shelf.chunks().len(),
        DEFAULT_CHUNK_SIZE,
        shelf.total_extent()
    );

    let total = shelf.total_extent();
    let mut offset = 0.0;
    while offset < total {
        shelf.set_scroll_offset(offset);
        let visible: Vec<String> = shelf
            .visible_chunks()
            .iter()
            .map(|(i, reason)| format!("{i} ({reason:?})"))
            .collect();
        println!("scroll {offset:>8.0}: [{}]", visible.join(", "));
        offset += total / 12.0;
    }

    // Keyboard navigation: jump focus to a far-away book and reveal it.
    shelf.set_scroll_offset(0.0);
    shelf.set_focus("isbn-04321");
    let forced = shelf.focused_chunk().expect("book exists");
    println!(
        "focused isbn-04321 (chunk {forced}); visible without scrolling: {}",
        shelf.is_chunk_visible(forced)
    );
    if let Some(new_offset) = shelf.scroll_to_reveal_focus() {
        println!("revealed focus by scrolling to {new_offset:.0}");
    }
    println!("{:#?}", shelf.debug_info());
}
