//! CSS rendering.
//!
//! Tokens are grouped into declaration blocks here; the text itself comes
//! from two `minijinja` templates, one for the token sheet and one for the
//! recursive component rules.

use std::collections::{BTreeMap, BTreeSet};

use minijinja::Environment;
use serde::Serialize;

use crate::components::Element;
use crate::naming::ROOT_SCOPE;
use crate::tokens::TokenMap;
use crate::CodegenError;

const TOKENS_TEMPLATE: &str = "tokens.css";
const COMPONENTS_TEMPLATE: &str = "components.css";

const TOKENS_SOURCE: &str = r#"
{%- for block in themes %}
{% if block.scope != ":root" %}.{% endif %}{{ block.scope }} {
{%- for declaration in block.declarations %}
  {{ declaration }}
{%- endfor %}
}
{% endfor %}
{%- for block in classes %}
.{{ block.scope }} {
{%- for declaration in block.declarations %}
  {{ declaration }}
{%- endfor %}
}
{% endfor %}"#;

const COMPONENTS_SOURCE: &str = r#"
{%- for element in elements recursive %}
{%- if element.selector and element.declarations %}
{{ element.selector }} {
{%- for property, value in element.declarations %}
  {{ property }}: {{ value }};
{%- endfor %}
}
{% endif %}
{{- loop(element.children) }}
{%- endfor %}"#;

/// Tokens grouped for rendering: scope or class → declaration lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenGroups {
    pub themes: BTreeMap<String, Vec<String>>,
    pub classes: BTreeMap<String, Vec<String>>,
}

/// Group tokens into one block per theme scope and one per text class.
///
/// Theme declarations are `--name: value;`, exact duplicates removed and
/// sorted case-insensitively. Class tokens carry pipe-delimited declarations
/// which are split back into lines.
pub fn group_tokens(tokens: &TokenMap) -> TokenGroups {
    let mut themes: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut classes: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for token in tokens.values() {
        if !token.theme.is_empty() {
            themes
                .entry(token.theme.clone())
                .or_default()
                .insert(format!("{}: {};", token.variable, token.value));
        }
        if !token.class_name.is_empty() {
            let block = classes.entry(token.class_name.clone()).or_default();
            for declaration in token.value.split('|').map(str::trim) {
                if !declaration.is_empty() && !block.iter().any(|d| d == declaration) {
                    block.push(declaration.to_string());
                }
            }
        }
    }

    let themes = themes
        .into_iter()
        .map(|(scope, declarations)| {
            let mut declarations: Vec<String> = declarations.into_iter().collect();
            declarations.sort_by_key(|d| d.to_lowercase());
            (scope, declarations)
        })
        .collect();

    TokenGroups { themes, classes }
}

#[derive(Serialize)]
struct Block<'a> {
    scope: &'a str,
    declarations: &'a [String],
}

#[derive(Serialize)]
struct TokenSheet<'a> {
    themes: Vec<Block<'a>>,
    classes: Vec<Block<'a>>,
}

#[derive(Serialize)]
struct ComponentSheet<'a> {
    elements: Vec<&'a Element>,
}

fn block<'a>((scope, declarations): (&'a String, &'a Vec<String>)) -> Block<'a> {
    Block {
        scope: scope.as_str(),
        declarations: declarations.as_slice(),
    }
}

/// Renders the token and component stylesheets.
pub struct CssRenderer {
    env: Environment<'static>,
}

impl CssRenderer {
    pub fn new() -> Result<Self, CodegenError> {
        let mut env = Environment::new();
        env.add_template(TOKENS_TEMPLATE, TOKENS_SOURCE)?;
        env.add_template(COMPONENTS_TEMPLATE, COMPONENTS_SOURCE)?;
        Ok(Self { env })
    }

    /// The root scope renders first, then the theme scopes, then the text
    /// classes, each in name order.
    pub fn tokens(&self, groups: &TokenGroups) -> Result<String, CodegenError> {
        let (root, themed): (Vec<_>, Vec<_>) = groups
            .themes
            .iter()
            .partition(|(scope, _)| scope.as_str() == ROOT_SCOPE);

        let sheet = TokenSheet {
            themes: root.into_iter().chain(themed).map(block).collect(),
            classes: groups.classes.iter().map(block).collect(),
        };
        Ok(self.env.get_template(TOKENS_TEMPLATE)?.render(&sheet)?)
    }

    pub fn components<'a>(
        &self,
        elements: impl IntoIterator<Item = &'a Element>,
    ) -> Result<String, CodegenError> {
        let sheet = ComponentSheet {
            elements: elements.into_iter().collect(),
        };
        Ok(self.env.get_template(COMPONENTS_TEMPLATE)?.render(&sheet)?)
    }
}
