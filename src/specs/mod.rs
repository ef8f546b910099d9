// src/specs/mod.rs
//! # Page “specs” module
//!
//! Knows how to read the profile page. Each spec encodes *where the ground
//! truth lives in the rendered text* and *how to recover it robustly*.
//!
//! ## What lives here
//! - **Pure extraction** from a `core::PageText` (visible text + script blocks).
//! - **Signal precedence**: explicit numbers first, the fused level/XP run next,
//!   embedded script data last.
//! - **The split policy** for fused digit runs (`split`), kept apart from the
//!   extraction plumbing so it can be corrected or replaced on its own.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and HTML rendering (`core::html`).
//! - **History and sync decisions**: that is `sync`.
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::PageSource::fetch → core::PageText::from_html
//!        → specs::profile::extract(.., &config.split) → ProgressReading
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against saved HTML (`tests/fixtures/`).
pub mod profile;
pub mod split;

pub use profile::{extract, ExtractError};
pub use split::{LengthSplit, SplitPolicy, SplitRule};
