//! Naming-convention selector parser.
//!
//! Component variants are named with comma-separated `key=value` terms
//! (`"type=primary, state=hover"`). Each term becomes a CSS selector
//! fragment:
//!
//! ```text
//! my-component            → .my-component
//! type=test               → [type="test"]
//! type=default            → (nothing)
//! type=hover              → :hover
//! hover=true / hover=false → :hover / (nothing)
//! type=test;ok            → [type="test"].ok
//! state=default;hover     → :hover
//! ```
//!
//! Attribute and class fragments come first, pseudo-classes after, each group
//! in term order.

use crate::naming::to_kebab_case;

/// Pseudo-classes recognised in variant names.
pub const PSEUDO_CLASSES: &[&str] = &[
    "hover",
    "active",
    "focus",
    "disabled",
    "focus-visible",
    "focus-within",
];

const DEFAULT_VALUE: &str = "default";

pub fn is_pseudo_class(name: &str) -> bool {
    PSEUDO_CLASSES.contains(&name)
}

/// Selector fragments contributed by a single term.
#[derive(Debug, Default, PartialEq)]
struct Fragments {
    attribute: String,
    pseudo: String,
}

/// Parse a node name into its selector fragment.
pub fn parse(name: &str) -> String {
    let mut attributes = String::new();
    let mut pseudos = String::new();

    for term in name.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let fragments = parse_term(term);
        attributes.push_str(&fragments.attribute);
        pseudos.push_str(&fragments.pseudo);
    }

    attributes + &pseudos
}

fn parse_term(term: &str) -> Fragments {
    let Some((key, value)) = term.split_once('=') else {
        let class = to_kebab_case(term);
        return Fragments {
            attribute: if class.is_empty() {
                String::new()
            } else {
                format!(".{class}")
            },
            pseudo: String::new(),
        };
    };

    let key = to_kebab_case(key);
    if key.is_empty() || value.trim().is_empty() {
        return Fragments::default();
    }

    if is_pseudo_class(&key) {
        let pseudo = match to_kebab_case(value).as_str() {
            "true" => format!(":{key}"),
            _ => String::new(),
        };
        return Fragments {
            attribute: String::new(),
            pseudo,
        };
    }

    match value.split_once(';') {
        Some((value, modifier)) => compound_term(&key, value, modifier),
        None => simple_term(&key, &to_kebab_case(value)),
    }
}

fn simple_term(key: &str, value: &str) -> Fragments {
    if value == DEFAULT_VALUE {
        Fragments::default()
    } else if is_pseudo_class(value) {
        Fragments {
            attribute: String::new(),
            pseudo: format!(":{value}"),
        }
    } else {
        Fragments {
            attribute: format!("[{key}=\"{value}\"]"),
            pseudo: String::new(),
        }
    }
}

/// `key=value;modifier`: the modifier is a pseudo-class or an extra class.
fn compound_term(key: &str, value: &str, modifier: &str) -> Fragments {
    let value = to_kebab_case(value);
    let modifier = to_kebab_case(modifier);
    let mut fragments = Fragments::default();

    if !value.is_empty() && value != DEFAULT_VALUE {
        fragments.attribute = format!("[{key}=\"{value}\"]");
    }

    if modifier.is_empty() || modifier == DEFAULT_VALUE {
        return fragments;
    }

    if is_pseudo_class(&modifier) {
        fragments.pseudo = format!(":{modifier}");
    } else {
        fragments.attribute.push_str(&format!(".{modifier}"));
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Plain names
    // =========================================================================

    #[test]
    fn test_plain_class() {
        assert_eq!(parse("my-component"), ".my-component");
    }

    #[test]
    fn test_plain_class_is_kebab_cased() {
        assert_eq!(parse("Primary Button"), ".primary-button");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(parse(""), "");
        assert_eq!(parse(" , "), "");
    }

    // =========================================================================
    // Attribute terms
    // =========================================================================

    #[test]
    fn test_default_value_suppressed() {
        assert_eq!(parse("type=default"), "");
    }

    #[test]
    fn test_attribute() {
        assert_eq!(parse("type=test"), "[type=\"test\"]");
    }

    #[test]
    fn test_attribute_kebab_cases_both_sides() {
        assert_eq!(parse("Button Size=Extra Large"), "[button-size=\"extra-large\"]");
    }

    #[test]
    fn test_value_is_pseudo_class() {
        assert_eq!(parse("type=hover"), ":hover");
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(parse("type="), "");
        assert_eq!(parse("=test"), "");
    }

    // =========================================================================
    // Pseudo-class keys
    // =========================================================================

    #[test]
    fn test_pseudo_key_true() {
        assert_eq!(parse("hover=true"), ":hover");
        assert_eq!(parse("Focus Visible=True"), ":focus-visible");
    }

    #[test]
    fn test_pseudo_key_false() {
        assert_eq!(parse("hover=false"), "");
    }

    #[test]
    fn test_pseudo_key_other_value() {
        assert_eq!(parse("disabled=maybe"), "");
    }

    // =========================================================================
    // Compound values
    // =========================================================================

    #[test]
    fn test_compound_class_modifier() {
        assert_eq!(parse("type=test;ok"), "[type=\"test\"].ok");
    }

    #[test]
    fn test_compound_pseudo_modifier() {
        assert_eq!(parse("type=test;hover"), "[type=\"test\"]:hover");
    }

    #[test]
    fn test_compound_default_value() {
        assert_eq!(parse("state=default;hover"), ":hover");
        assert_eq!(parse("state=default;ok"), ".ok");
    }

    #[test]
    fn test_compound_default_modifier() {
        assert_eq!(parse("type=test;default"), "[type=\"test\"]");
    }

    // =========================================================================
    // Multiple terms
    // =========================================================================

    #[test]
    fn test_attribute_then_pseudo() {
        assert_eq!(parse("type=test,state=hover"), "[type=\"test\"]:hover");
    }

    #[test]
    fn test_pseudo_ordered_after_attributes() {
        assert_eq!(
            parse("state=default;hover, type=test"),
            "[type=\"test\"]:hover"
        );
    }

    #[test]
    fn test_term_order_preserved_within_groups() {
        assert_eq!(
            parse("size=large, disabled=true, type=primary, state=focus"),
            "[size=\"large\"][type=\"primary\"]:disabled:focus"
        );
    }

    #[test]
    fn test_plain_term_among_variants() {
        assert_eq!(parse("icon, type=ghost"), ".icon[type=\"ghost\"]");
    }

    #[test]
    fn test_pseudo_class_table() {
        for name in PSEUDO_CLASSES {
            assert!(is_pseudo_class(name));
        }
        assert!(!is_pseudo_class("visited"));
    }
}
