//! Variable resolver.
//!
//! Turns the variable registry into tokens, one per (variable, mode) pair.
//! Only colour and float variables are emitted. Aliases become `var()`
//! references to the target's custom property.
//!
//! ```text
//! Colors/Primary (mode "Dark theme") → .dark-theme { --colors-primary: rgba(...); }
//! Spacing/Small  (mode "Mode 1")     → :root { --spacing-small: 8px; }
//! ```

use std::collections::BTreeMap;

use figo_parser::variables::{ResolvedType, StructuredValue, Variable, VariableValue, Variables};
use tracing::debug;

use crate::format::{format_number, rgba, round_to_decimals};
use crate::naming::{mode_scope, to_kebab_case, ROOT_SCOPE};
use crate::tokens::{Token, TokenMap};

/// Mode id → theme scope, across every collection.
pub fn mode_themes(variables: &Variables) -> BTreeMap<String, String> {
    variables
        .meta
        .variable_collections
        .values()
        .flat_map(|collection| &collection.modes)
        .map(|mode| (mode.mode_id.clone(), mode_scope(&mode.name)))
        .collect()
}

/// Custom property identifier for a variable, or `None` when its collection
/// is unknown.
pub fn variable_name(variables: &Variables, variable: &Variable) -> Option<String> {
    let collection = variables.collection(&variable.variable_collection_id)?;
    Some(format!(
        "--{}-{}",
        to_kebab_case(&collection.name),
        to_kebab_case(&variable.name)
    ))
}

/// Resolve every colour and float variable into tokens keyed by
/// `variable_id/mode_id`.
pub fn resolve(variables: &Variables) -> TokenMap {
    let themes = mode_themes(variables);
    let mut tokens = TokenMap::new();

    for variable in variables.meta.variables.values() {
        if !matches!(
            variable.resolved_type,
            ResolvedType::Color | ResolvedType::Float
        ) || variable.deleted_but_referenced
        {
            continue;
        }

        let Some(name) = variable_name(variables, variable) else {
            debug!(variable = %variable.name, "variable has no collection");
            continue;
        };

        for (mode_id, raw) in &variable.values_by_mode {
            let value = mode_value(variables, raw);
            if value.is_empty() {
                debug!(variable = %variable.name, %mode_id, "skipping unresolved mode value");
                continue;
            }
            let theme = themes
                .get(mode_id)
                .cloned()
                .unwrap_or_else(|| ROOT_SCOPE.to_string());

            tokens.insert(
                format!("{}/{mode_id}", variable.id),
                Token {
                    name: variable.name.clone(),
                    variable: name.clone(),
                    value,
                    theme,
                    class_name: String::new(),
                },
            );
        }
    }

    debug!(count = tokens.len(), "resolved variable tokens");
    tokens
}

/// CSS value for one mode entry, or empty when it cannot be resolved.
pub fn mode_value(variables: &Variables, raw: &VariableValue) -> String {
    match raw {
        VariableValue::Number(n) => format!("{}px", format_number(round_to_decimals(*n, 2))),
        VariableValue::Structured(structured) => structured_value(variables, structured),
        _ => String::new(),
    }
}

/// An alias to a known variable, else the literal colour, else nothing.
fn structured_value(variables: &Variables, value: &StructuredValue) -> String {
    let target = value.alias().and_then(|alias| {
        let target = variables.variable(&alias.id);
        if target.is_none() {
            debug!(id = %alias.id, "alias target not found");
        }
        target
    });

    if let Some(name) = target.and_then(|target| variable_name(variables, target)) {
        return format!("var({name})");
    }

    value.color().map(|color| rgba(&color)).unwrap_or_default()
}
