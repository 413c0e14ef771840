// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shelfside Virtual: chunked visibility culling for large shelf layouts.
//!
//! This crate is the renderer-facing half of a virtual bookshelf. It consumes
//! the `LayoutItem` list produced by `shelfside_layout` plus live viewport
//! metrics (scroll offset, viewport height) and decides which items must be
//! materialized into real UI versus replaced by height-preserving
//! placeholders. It owns no widgets and performs no drawing; hosts diff the
//! returned chunk set to mount and unmount their own views.
//!
//! The core concepts are:
//!
//! - [`Chunk`]: a fixed-size contiguous slice of the item list with a
//!   conservative vertical extent. Visibility is decided per chunk, never per
//!   item, so a measurement cycle costs `O(chunk_count)` instead of
//!   `O(item_count)`.
//! - [`compute_visible_chunks`]: interval intersection of chunk extents
//!   against the buffered viewport window plus a forward-looking window that
//!   masks asynchronous image loading.
//! - [`ShelfViewport`]: a controller owning scroll state, the chunk list, the
//!   focused item, and the cached visible set, recomputed lazily when any
//!   input changed.
//! - [`CommitScheduler`]: per-animation-frame coalescing of DOM-visible
//!   writes; at most one merged flush per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use shelfside_layout::{Book, LayoutConfig, compute_layout};
//! use shelfside_virtual::{ShelfViewport, VisibilityParams};
//!
//! let books: Vec<Book> = (0..1_000)
//!     .map(|i| Book::new(format!("b{i}"), 120.0, 190.0, 15.0))
//!     .collect();
//! let items = compute_layout(&books, 800.0, &LayoutConfig::default());
//!
//! let mut shelf = ShelfViewport::new(600.0, 200, VisibilityParams::default());
//! shelf.set_items(&items);
//! shelf.set_scroll_offset(4_000.0);
//!
//! // Only chunks near the viewport are materialized; the rest stay
//! // placeholders whose reserved heights keep the scroll extent exact.
//! assert!(shelf.visible_chunks().len() < shelf.chunks().len());
//! ```
//!
//! Stale references degrade softly everywhere: focusing an id that no longer
//! exists in the layout is ignored rather than an error, so a book deleted
//! mid-session can never take down a render pass.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chunk;
mod commit;
mod viewport;
mod visibility;

pub use chunk::{Chunk, DEFAULT_CHUNK_SIZE, build_chunks};
pub use commit::{CommitScheduler, MergeCommit};
pub use viewport::{ShelfViewport, ShelfViewportDebugInfo};
pub use visibility::{VisibilityParams, VisibilityReason, VisibleChunks, compute_visible_chunks};
