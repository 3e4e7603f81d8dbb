//! Pattern lexer, command tree, and namespaces for Herald.
//!
//! This crate provides:
//! - [`lex`] - Tokenization of command pattern strings
//! - [`Token`] - The lexer's output unit
//! - [`CommandTree`] / [`Command`] - The arena-based grammar tree
//! - [`Binding`] - The handler association attached to tree nodes
//! - [`declare`] - The tree builder merging declarations into namespaces
//! - [`Environment`] - Per-compilation state consumed by binders and lints

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binding;
pub mod builder;
pub mod environment;
pub mod lexer;
pub mod token;
pub mod tree;


pub use binding::{
    Binding, BindingGroup, BindingKind, FieldBinding, MethodBinding, MethodShape, ParamReference,
};
pub use builder::declare;
pub use environment::{BoundCommand, Environment, Namespace};
pub use lexer::lex;
pub use token::{Token, join_tokens};
pub use tree::{Command, CommandId, CommandTree};
