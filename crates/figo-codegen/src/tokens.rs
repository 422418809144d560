//! Token extractor.
//!
//! Walks the document collecting the styles referenced by frame-like nodes
//! and their direct text children. Each referenced style becomes one
//! [`Token`], computed from the first node that resolves it to a non-empty
//! value.

use std::collections::BTreeMap;

use figo_parser::schema::{File, Node};
use tracing::{debug, trace};

use crate::naming::{to_kebab_case, token_values};
use crate::{check_depth, style, text, CodegenError, CodegenOptions};

/// A CSS custom property derived from a style or a variable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// Display name of the source style or variable.
    pub name: String,
    /// Custom property identifier, e.g. `--brand-primary`.
    pub variable: String,
    pub value: String,
    /// Theme scope (`:root` or a theme class). Empty for class tokens.
    pub theme: String,
    /// Class for text-style tokens, rendered as a declaration block.
    pub class_name: String,
}

/// Tokens keyed by style id (or `variable/mode` for variable tokens).
pub type TokenMap = BTreeMap<String, Token>;

/// Which resolver a style reference reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StyleSlot {
    Fill,
    Stroke,
    Effect,
    Grid,
    Text,
}

impl StyleSlot {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "fill" | "fills" => Some(Self::Fill),
            "stroke" | "strokes" => Some(Self::Stroke),
            "effect" | "effects" => Some(Self::Effect),
            "grid" => Some(Self::Grid),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Collect style tokens from every page of `file`.
pub fn extract(file: &File, options: &CodegenOptions) -> Result<TokenMap, CodegenError> {
    let mut tokens = TokenMap::new();
    for page in file.pages() {
        walk(page, file, &mut tokens, 1, options.max_depth)?;
    }
    debug!(count = tokens.len(), "extracted style tokens");
    Ok(tokens)
}

fn walk(
    node: &Node,
    file: &File,
    tokens: &mut TokenMap,
    depth: usize,
    limit: usize,
) -> Result<(), CodegenError> {
    check_depth(depth, limit)?;

    if node.is_frame() {
        collect(node, file, tokens, false);
        for child in node.children.iter().filter(|c| c.is_text()) {
            collect(child, file, tokens, true);
        }
    }

    for child in &node.children {
        walk(child, file, tokens, depth + 1, limit)?;
    }
    Ok(())
}

/// Add a token for each style `node` references that has none yet.
fn collect(node: &Node, file: &File, tokens: &mut TokenMap, is_text: bool) {
    for (key, style_id) in &node.styles {
        if style_id.is_empty() || tokens.contains_key(style_id) {
            continue;
        }
        let Some(slot) = StyleSlot::from_key(key) else {
            trace!(%key, "ignoring style category");
            continue;
        };
        if slot == StyleSlot::Text && !is_text {
            continue;
        }
        let Some(style) = file.styles.get(style_id) else {
            debug!(%style_id, node = %node.name, "style reference not in registry");
            continue;
        };

        let value = match slot {
            StyleSlot::Fill => style::background(node),
            StyleSlot::Stroke => style::border_color(node),
            StyleSlot::Effect => style::box_shadow(node),
            StyleSlot::Text => text::font(node),
            StyleSlot::Grid => String::new(),
        };
        if value.is_empty() {
            trace!(%style_id, "style resolved to an empty value");
            continue;
        }

        let (variable, theme) = token_values(&style.name);
        let token = if slot == StyleSlot::Text {
            Token {
                name: style.name.clone(),
                variable,
                value,
                theme: String::new(),
                class_name: to_kebab_case(&style.name),
            }
        } else {
            Token {
                name: style.name.clone(),
                variable,
                value,
                theme,
                class_name: String::new(),
            }
        };
        tokens.insert(style_id.clone(), token);
    }
}
