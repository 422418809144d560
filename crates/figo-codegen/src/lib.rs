//! figo Code Generator
//!
//! Turns a parsed design document and its variable registry into CSS
//! custom-property tokens, component rule sheets and preview HTML.
//!
//! ```text
//! File      ─► tokens::extract ──────┐
//! Variables ─► variables::resolve ───┴─► css::group_tokens ─► tokens.css
//! File      ─► components::assemble ───► components.css + components.html
//! ```
//!
//! The two pipelines are independent. Content problems (missing styles,
//! dangling aliases, unsupported paints) never fail; they are skipped and
//! logged at `debug` level.

pub mod components;
pub mod css;
pub mod declarations;
pub mod format;
pub mod html;
pub mod naming;
pub mod selector;
pub mod style;
pub mod text;
pub mod tokens;
pub mod variables;

use figo_parser::{File, Variables};
use tracing::debug;

pub use components::{ComponentMap, Element, Variant};
pub use declarations::Declarations;
pub use tokens::{Token, TokenMap};

/// Default nesting limit for document traversal.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The compiled output from a design document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOutput {
    pub tokens_css: String,
    pub components_css: String,
    pub html: String,
    /// Merged style and variable tokens.
    pub tokens: TokenMap,
    pub components: ComponentMap,
}

/// Code generation error.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("Codegen error: document nesting depth {depth} exceeds limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
    #[error("Codegen error: template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Generation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Prepended to component element names (`vp` → `vp-button`).
    pub prefix: Option<String>,
    pub max_depth: usize,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodegenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

pub(crate) fn check_depth(depth: usize, limit: usize) -> Result<(), CodegenError> {
    if depth > limit {
        return Err(CodegenError::TooDeep { depth, limit });
    }
    Ok(())
}

/// Compile a design document (and optionally its variables) into CSS + HTML.
pub fn compile(
    file: &File,
    variables: Option<&Variables>,
    options: &CodegenOptions,
) -> Result<CompilerOutput, CodegenError> {
    let mut tokens = tokens::extract(file, options)?;
    if let Some(variables) = variables {
        tokens.extend(variables::resolve(variables));
    }
    let components = components::assemble(file, options)?;

    let renderer = css::CssRenderer::new()?;
    let tokens_css = renderer.tokens(&css::group_tokens(&tokens))?;
    let components_css = renderer.components(components.values())?;
    let html = html::generate(components.values());

    debug!(
        tokens = tokens.len(),
        components = components.len(),
        "compiled document"
    );

    Ok(CompilerOutput {
        tokens_css,
        components_css,
        html,
        tokens,
        components,
    })
}
