//! The compilation pipeline.
//!
//! The host annotation system hands Herald a batch of declare sites and
//! bind sites; [`compile`] runs the whole pass sequence over them:
//! register elements, build every namespace tree, capture and bind every
//! bind site, then run all lints. Diagnostics flow through the injected
//! reporter; the run fails as a whole only after every independent
//! declaration has had its chance.

use herald_binder::{bind_exact, bind_pattern, capture};
use herald_foundation::{Element, Error, Reporter, Result};
use herald_grammar::{Environment, declare};
use herald_lints::run_default_lints;

/// How a bind site's pattern lines locate their targets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BindMode {
    /// Walk one exact path from a namespace root.
    Exact,
    /// Search the whole tree for every (possibly overlapping) occurrence.
    Pattern,
}

/// One declare site: an element introducing command pattern lines.
#[derive(Clone, Debug)]
pub struct Declaration {
    /// The namespace scope the lines are declared into.
    pub scope: String,
    /// The declaring element.
    pub element: Element,
    /// The raw pattern lines.
    pub lines: Vec<String>,
}

impl Declaration {
    /// Creates a declaration from borrowed lines.
    #[must_use]
    pub fn new(scope: impl Into<String>, element: Element, lines: &[&str]) -> Self {
        Self {
            scope: scope.into(),
            element,
            lines: lines.iter().map(ToString::to_string).collect(),
        }
    }
}

/// One bind site: an element to capture and attach to tree nodes.
#[derive(Clone, Debug)]
pub struct BindSite {
    /// The namespace scope the patterns resolve against.
    pub scope: String,
    /// The element to capture.
    pub element: Element,
    /// The binding strategy; exact and pattern are mutually exclusive per
    /// site.
    pub mode: BindMode,
    /// The raw pattern lines.
    pub lines: Vec<String>,
}

impl BindSite {
    /// Creates a bind site from borrowed lines.
    #[must_use]
    pub fn new(
        scope: impl Into<String>,
        element: Element,
        mode: BindMode,
        lines: &[&str],
    ) -> Self {
        Self {
            scope: scope.into(),
            element,
            mode,
            lines: lines.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Compiles a batch of declarations and bind sites into an [`Environment`].
///
/// Every declaration and bind site is processed regardless of earlier
/// failures, and all lints run at the end, so one invocation surfaces
/// every diagnostic the batch produces.
///
/// # Errors
/// Returns `CompilationFailed` if any diagnostics were reported; the
/// Environment is only handed to the downstream generator on a clean run.
pub fn compile(
    declarations: &[Declaration],
    bind_sites: &[BindSite],
    reporter: &mut dyn Reporter,
) -> Result<Environment> {
    let mut env = Environment::new();

    for declaration in declarations {
        env.register_element(declaration.element.clone());
        let lines: Vec<&str> = declaration.lines.iter().map(String::as_str).collect();
        declare(
            &mut env,
            &declaration.scope,
            &declaration.element.site,
            &lines,
            reporter,
        );
    }

    for site in bind_sites {
        env.register_element(site.element.clone());
        let Some(binding) = capture(&site.element, reporter) else {
            continue;
        };
        let lines: Vec<&str> = site.lines.iter().map(String::as_str).collect();
        match site.mode {
            BindMode::Exact => bind_exact(&mut env, &site.scope, &binding, &lines, reporter),
            BindMode::Pattern => bind_pattern(&mut env, &site.scope, &binding, &lines, reporter),
        }
    }

    run_default_lints(&env, reporter);

    let errors = reporter.error_count();
    if errors > 0 {
        return Err(Error::compilation_failed(errors));
    }
    Ok(env)
}
