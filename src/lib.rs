//! Herald - Compile-time command-grammar compiler
//!
//! This crate re-exports all layers of the Herald system for convenient
//! access and hosts the pipeline driver that runs them in order. For
//! detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: herald (this crate) — pipeline driver, integration tests
//! Layer 2: herald_lints        — static validators over bound trees
//!          herald_binder       — capture, exact/pattern binding, references
//! Layer 1: herald_grammar      — lexer, command tree, namespaces
//! Layer 0: herald_foundation   — identity, diagnostics, collections
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod pipeline;

pub use herald_binder as binder;
pub use herald_foundation as foundation;
pub use herald_grammar as grammar;
pub use herald_lints as lints;

pub use pipeline::{BindMode, BindSite, Declaration, compile};
