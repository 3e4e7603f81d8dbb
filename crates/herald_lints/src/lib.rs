//! Static validators over fully bound Herald command trees.
//!
//! Each lint is a pure pass over a finished [`Environment`]: it reports
//! findings through the injected [`Reporter`] and never mutates the tree
//! or aborts the run. All lints run regardless of earlier findings, so a
//! single compilation surfaces every violation at once.
//!
//! This crate provides:
//! - [`exclusivity`] - One binding per exclusivity group per node
//! - [`collision`] - Sibling name/alias uniqueness
//! - [`literal_first`] - Commands must start with literals
//! - [`required`] - Argument nodes need an argument-type binding
//! - [`visibility`] - Modifier constraints on bound elements

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collision;
pub mod exclusivity;
pub mod literal_first;
pub mod required;
pub mod visibility;

use herald_foundation::Reporter;
use herald_grammar::Environment;

/// Runs every lint in its fixed, deterministic order.
pub fn run_default_lints(env: &Environment, reporter: &mut dyn Reporter) {
    exclusivity::check(env, reporter);
    collision::check(env, reporter);
    literal_first::check(env, reporter);
    required::check(env, reporter);
    visibility::check(env, reporter);
}
