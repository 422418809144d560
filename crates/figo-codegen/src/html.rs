//! HTML code generator.
//!
//! Emits one preview snippet per component. The root renders as a custom
//! element named after the component, with default variant values as
//! attributes; descendants render as `<div class="...">` wrappers. A
//! component set collapses to its first variant, since every variant shares
//! the same markup shape. Text goes through `minijinja`'s HTML escaper.

use minijinja::HtmlEscape;

use crate::components::{Element, Variant};
use crate::naming::to_kebab_case;

const DEFAULT_VALUE: &str = "default";

/// Generate HTML for a sequence of component roots.
pub fn generate<'a>(roots: impl IntoIterator<Item = &'a Element>) -> String {
    let mut html = String::new();
    for root in roots {
        generate_root(root, &mut html);
    }
    html
}

fn generate_root(root: &Element, out: &mut String) {
    // A set collapses to its first variant.
    let body = if root.is_set {
        root.children.first().unwrap_or(root)
    } else {
        root
    };

    out.push('<');
    out.push_str(&root.name);
    for (name, value) in variant_attributes(&root.variants) {
        out.push_str(&format!(" {name}=\"{}\"", escape(&value)));
    }
    out.push('>');

    if body.children.is_empty() {
        out.push_str(&escape(&body.content));
    } else {
        out.push('\n');
        for child in &body.children {
            generate_element(child, out, 1);
        }
    }

    out.push_str(&format!("</{}>", root.name));
    out.push('\n');
}

fn generate_element(el: &Element, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    out.push_str(&indent);
    out.push_str("<div");
    if !el.name.is_empty() {
        out.push_str(&format!(" class=\"{}\"", el.name));
    }
    out.push('>');

    if el.children.is_empty() {
        // Leaf: inline text content.
        out.push_str(&escape(&el.content));
    } else {
        out.push('\n');
        for child in &el.children {
            generate_element(child, out, depth + 1);
        }
        out.push_str(&indent);
    }

    out.push_str("</div>");
    out.push('\n');
}

/// Attributes for a set's default variant, skipping `default` values.
fn variant_attributes(variants: &[Variant]) -> Vec<(String, String)> {
    variants
        .iter()
        .map(|v| (to_kebab_case(&v.name), to_kebab_case(&v.value)))
        .filter(|(name, value)| !name.is_empty() && !value.is_empty() && value != DEFAULT_VALUE)
        .collect()
}

fn escape(text: &str) -> String {
    HtmlEscape(text).to_string()
}
