// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shelfside Layout: deterministic shelf-packing geometry for book collections.
//!
//! This crate is the pure computational half of a virtual bookshelf. It
//! consumes an ordered list of [`Book`]s with physical millimeter dimensions
//! and a container width, and produces absolute placement data per book:
//! position, rendered size, spine depth, simulated z-displacement, and a small
//! rotation about the vertical axis. It has no knowledge of the DOM, any
//! rendering backend, or any widget system.
//!
//! The core concepts are:
//!
//! - [`Book`]: an input record (id plus physical dimensions).
//! - [`LayoutConfig`]: immutable configuration for one layout run, including
//!   the named policy parameters ([`Normalization`], [`HeightScaling`]) that
//!   select between the competing row-scaling strategies.
//! - [`compute_layout`]: the engine itself — a pure function. Same books,
//!   same width, same config produce bit-identical output.
//! - [`LayoutItem`]: one positioned placement, a plain value type rebuilt on
//!   every recompute.
//! - [`LayoutMemo`]: an explicit, caller-owned cache that skips recomputation
//!   when the inputs are unchanged.
//!
//! ## Minimal example
//!
//! ```rust
//! use shelfside_layout::{Book, LayoutConfig, compute_layout};
//!
//! let books = vec![
//!     Book::new("hardback", 140.0, 210.0, 30.0),
//!     Book::new("paperback", 110.0, 178.0, 18.0),
//! ];
//! let items = compute_layout(&books, 800.0, &LayoutConfig::default());
//!
//! assert_eq!(items.len(), 2);
//! // Output order follows input order; ids are carried through.
//! assert_eq!(items[0].id, "hardback");
//! ```
//!
//! ## Determinism
//!
//! All stochastic-looking perturbation (horizontal jitter, tilt, depth)
//! derives from a stable polynomial hash of each book's id fed through
//! radical-inverse sequences (see [`jitter`]). Nothing depends on wall-clock
//! time or mutable global state. The hash and sequence construction are part
//! of the crate's stable contract: changing either changes all jitter output
//! and is a breaking change to visual output, not a neutral refactor.
//!
//! All coordinates live in a caller-chosen unit (typically logical pixels).
//! This crate is `no_std` and uses `alloc`; enable the `libm` feature for
//! builds without `std`.

#![no_std]

extern crate alloc;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("shelfside_layout requires either the `std` or `libm` feature");

mod book;
mod config;
mod engine;
pub mod jitter;
mod memo;
mod row;

pub use book::Book;
pub use config::{HeightScaling, LayoutConfig, Normalization};
pub use engine::{LayoutItem, compute_layout, layout_bounds};
pub use memo::LayoutMemo;
