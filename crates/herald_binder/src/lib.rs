//! Binding capture, exact and pattern binding, and reference resolution
//! for Herald.
//!
//! This crate provides:
//! - [`capture`] - Element-shape validation producing a [`herald_grammar::Binding`]
//! - [`bind_exact`] - The exact (namespace) binding strategy
//! - [`bind_pattern`] - The overlapping pattern binding strategy
//! - [`resolve_references`] - Per-node ancestor reference resolution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capture;
pub mod exact;
pub mod pattern;
pub mod reference;

pub use capture::capture;
pub use exact::bind_exact;
pub use pattern::bind_pattern;
pub use reference::resolve_references;
