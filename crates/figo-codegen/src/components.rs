//! Component tree assembler.
//!
//! Finds every component set and standalone component in the document and
//! builds an [`Element`] tree for each, carrying resolved declarations and
//! an accumulated selector.
//!
//! ```text
//! COMPONENT_SET "Button"                 → vp-button
//!   COMPONENT "type=primary, hover=true" → vp-button[type="primary"]:hover
//!     TEXT "Label"                       → vp-button[type="primary"]:hover .label
//! ```
//!
//! Variants of a set share the set's element name; each contributes its own
//! selector. Instances are references to other components and are skipped
//! along with their subtrees.

use figo_parser::schema::{File, Node};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::declarations::Declarations;
use crate::naming::to_kebab_case;
use crate::{check_depth, selector, style, text, CodegenError, CodegenOptions};

/// Assembled components keyed by the root node id, in document order.
pub type ComponentMap = IndexMap<String, Element>;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Element {
    pub name: String,
    pub declarations: Declarations,
    pub selector: String,
    /// Text content, for text nodes.
    pub content: String,
    pub children: Vec<Element>,
    pub variants: Vec<Variant>,
    /// Root of a component set; its children are the set's variants.
    pub is_set: bool,
}

/// A variant property axis declared on a component set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Variant {
    pub name: String,
    /// Default option.
    pub value: String,
    pub options: Vec<String>,
}

/// Build the component registry for `file`.
pub fn assemble(file: &File, options: &CodegenOptions) -> Result<ComponentMap, CodegenError> {
    let mut components = ComponentMap::new();
    for page in file.pages() {
        find_roots(page, None, file, options, &mut components, 1)?;
    }
    debug!(count = components.len(), "assembled components");
    Ok(components)
}

fn find_roots(
    node: &Node,
    parent: Option<&Node>,
    file: &File,
    options: &CodegenOptions,
    components: &mut ComponentMap,
    depth: usize,
) -> Result<(), CodegenError> {
    check_depth(depth, options.max_depth)?;

    if node.is_instance() {
        return Ok(());
    }

    let in_set = parent.is_some_and(Node::is_component_set);
    if node.is_component_set() || (node.is_component() && !in_set) {
        let element = build_root(node, file, options, depth)?;
        trace!(id = %node.id, name = %element.name, "component root");
        components.insert(node.id.clone(), element);
        return Ok(());
    }

    for child in &node.children {
        find_roots(child, Some(node), file, options, components, depth + 1)?;
    }
    Ok(())
}

/// Synthesized element name for a component root: the registry name when the
/// file declares one, kebab-cased and optionally prefixed.
pub fn component_name(node: &Node, file: &File, options: &CodegenOptions) -> String {
    let registered = if node.is_component_set() {
        file.component_sets.get(&node.id).map(|set| set.name.as_str())
    } else {
        file.components.get(&node.id).map(|c| c.name.as_str())
    };
    let name = registered
        .filter(|name| !name.is_empty())
        .unwrap_or(node.name.as_str());

    match options.prefix.as_deref().filter(|p| !p.is_empty()) {
        Some(prefix) => to_kebab_case(&format!("{prefix} {name}")),
        None => to_kebab_case(name),
    }
}

/// Variant axes declared on a component set, ordered by property name.
pub fn variants(node: &Node) -> Vec<Variant> {
    node.variant_definitions()
        .map(|(name, definition)| Variant {
            name: name.clone(),
            value: definition.default_value.clone(),
            options: definition.variant_options.clone(),
        })
        .collect()
}

fn build_root(
    node: &Node,
    file: &File,
    options: &CodegenOptions,
    depth: usize,
) -> Result<Element, CodegenError> {
    let name = component_name(node, file, options);
    let is_set = node.is_component_set();
    let mut root = Element {
        selector: name.clone(),
        name,
        variants: if is_set { variants(node) } else { Vec::new() },
        is_set,
        ..Element::default()
    };

    root.children = build_children(node, &root, options, depth)?;
    Ok(root)
}

fn build_children(
    node: &Node,
    element: &Element,
    options: &CodegenOptions,
    depth: usize,
) -> Result<Vec<Element>, CodegenError> {
    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        if let Some(built) = build(child, node, element, options, depth + 1)? {
            children.push(built);
        }
    }
    Ok(children)
}

fn build(
    node: &Node,
    parent: &Node,
    parent_element: &Element,
    options: &CodegenOptions,
    depth: usize,
) -> Result<Option<Element>, CodegenError> {
    check_depth(depth, options.max_depth)?;

    if node.is_instance() {
        return Ok(None);
    }

    let fragment = selector::parse(&node.name);
    let (name, selector) = if node.is_component() && parent.is_component_set() {
        // A variant: same element as its set, narrowed by its own fragment.
        (
            parent_element.name.clone(),
            format!("{}{fragment}", parent_element.selector),
        )
    } else if fragment.is_empty() {
        (to_kebab_case(&node.name), parent_element.selector.clone())
    } else {
        (
            to_kebab_case(&node.name),
            format!("{} {fragment}", parent_element.selector),
        )
    };

    let declarations = if node.is_text() {
        text::css(node)
    } else if node.is_component_or_set() || node.is_vector() {
        Declarations::new()
    } else {
        style::css(node, Some(parent))
    };

    let mut element = Element {
        name,
        declarations,
        selector,
        content: if node.is_text() {
            node.characters.clone()
        } else {
            String::new()
        },
        ..Element::default()
    };
    element.children = build_children(node, &element, options, depth)?;

    Ok(Some(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figo_parser::parse_document;
    use pretty_assertions::assert_eq;

    const BUTTONS: &str = r#"{
        "document": { "type": "DOCUMENT", "children": [{
            "type": "CANVAS",
            "name": "Components",
            "children": [
                {
                    "id": "1:1",
                    "type": "COMPONENT_SET",
                    "name": "Button",
                    "componentPropertyDefinitions": {
                        "type": {
                            "type": "VARIANT",
                            "defaultValue": "primary",
                            "variantOptions": ["primary", "ghost"]
                        },
                        "Label": { "type": "TEXT", "defaultValue": "Click" }
                    },
                    "children": [
                        {
                            "id": "1:2",
                            "type": "COMPONENT",
                            "name": "type=primary",
                            "layoutMode": "HORIZONTAL",
                            "children": [
                                {
                                    "type": "TEXT",
                                    "name": "Label",
                                    "characters": "Click me",
                                    "style": { "fontSize": 14 }
                                },
                                { "type": "INSTANCE", "name": "Icon", "children": [
                                    { "type": "FRAME", "name": "Inner" }
                                ]}
                            ]
                        },
                        {
                            "id": "1:3",
                            "type": "COMPONENT",
                            "name": "type=ghost, state=hover",
                            "children": [{ "type": "VECTOR", "name": "Outline" }]
                        }
                    ]
                },
                {
                    "id": "2:1",
                    "type": "FRAME",
                    "name": "Layout",
                    "children": [{
                        "id": "2:2",
                        "type": "COMPONENT",
                        "name": "Badge",
                        "children": [{
                            "type": "FRAME",
                            "name": "Dot",
                            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 8, "height": 8 },
                            "cornerRadius": 4
                        }]
                    }]
                }
            ]
        }]},
        "componentSets": { "1:1": { "key": "k1", "name": "Button" } },
        "components": {
            "1:2": { "key": "k2", "name": "type=primary", "componentSetId": "1:1" },
            "1:3": { "key": "k3", "name": "type=ghost, state=hover", "componentSetId": "1:1" },
            "2:2": { "key": "k4", "name": "Status Badge" }
        }
    }"#;

    fn assemble_json(json: &str, options: &CodegenOptions) -> ComponentMap {
        let file = parse_document(json).unwrap();
        assemble(&file, options).unwrap()
    }

    // =========================================================================
    // Roots
    // =========================================================================

    #[test]
    fn test_roots_in_document_order() {
        let components = assemble_json(BUTTONS, &CodegenOptions::default());
        assert_eq!(components.keys().collect::<Vec<_>>(), vec!["1:1", "2:2"]);
    }

    #[test]
    fn test_root_names_come_from_registry() {
        let components = assemble_json(BUTTONS, &CodegenOptions::default());
        assert_eq!(components["1:1"].name, "button");
        assert_eq!(components["1:1"].selector, "button");
        assert_eq!(components["2:2"].name, "status-badge");
    }

    #[test]
    fn test_prefix() {
        let components = assemble_json(BUTTONS, &CodegenOptions::new().prefix("vp"));
        assert_eq!(components["1:1"].name, "vp-button");
        assert_eq!(components["1:1"].children[0].name, "vp-button");
        assert_eq!(
            components["1:1"].children[0].selector,
            "vp-button[type=\"primary\"]"
        );
    }

    #[test]
    fn test_set_variants() {
        let components = assemble_json(BUTTONS, &CodegenOptions::default());
        assert_eq!(
            components["1:1"].variants,
            vec![Variant {
                name: "type".to_string(),
                value: "primary".to_string(),
                options: vec!["primary".to_string(), "ghost".to_string()],
            }]
        );
        assert!(components["2:2"].variants.is_empty());
        assert!(components["1:1"].is_set);
        assert!(!components["2:2"].is_set);
    }

    // =========================================================================
    // Variants and descendants
    // =========================================================================

    #[test]
    fn test_variant_selectors_share_set_name() {
        let components = assemble_json(BUTTONS, &CodegenOptions::default());
        let set = &components["1:1"];
        let selectors: Vec<_> = set.children.iter().map(|c| c.selector.as_str()).collect();
        assert_eq!(
            selectors,
            vec!["button[type=\"primary\"]", "button[type=\"ghost\"]:hover"]
        );
        assert!(set.children.iter().all(|c| c.name == "button"));
        assert!(set.children.iter().all(|c| c.declarations.is_empty()));
    }

    #[test]
    fn test_text_child() {
        let components = assemble_json(BUTTONS, &CodegenOptions::default());
        let primary = &components["1:1"].children[0];
        assert_eq!(primary.children.len(), 1, "instance is skipped");

        let label = &primary.children[0];
        assert_eq!(label.name, "label");
        assert_eq!(label.selector, "button[type=\"primary\"] .label");
        assert_eq!(label.content, "Click me");
        assert_eq!(label.declarations.get("font-size"), Some("14px"));
    }

    #[test]
    fn test_selectors_follow_markup_nesting() {
        let components = assemble_json(BUTTONS, &CodegenOptions::default());
        let set = &components["1:1"];
        let primary = &set.children[0];
        let label = &primary.children[0];

        // The root renders as a custom element, so it is matched by tag name.
        assert_eq!(set.selector, "button");
        // A variant narrows that same element.
        assert_eq!(primary.selector, "button[type=\"primary\"]");
        // Descendants render as nested divs, so they join with a space.
        assert_eq!(label.selector, format!("{} .label", primary.selector));
        assert!(!label.selector.contains("].label"));
    }

    #[test]
    fn test_vector_has_no_declarations() {
        let components = assemble_json(BUTTONS, &CodegenOptions::default());
        let outline = &components["1:1"].children[1].children[0];
        assert_eq!(outline.selector, "button[type=\"ghost\"]:hover .outline");
        assert!(outline.declarations.is_empty());
    }

    #[test]
    fn test_frame_declarations() {
        let components = assemble_json(BUTTONS, &CodegenOptions::default());
        let dot = &components["2:2"].children[0];
        assert_eq!(dot.selector, "status-badge .dot");
        assert_eq!(
            dot.declarations.iter().collect::<Vec<_>>(),
            vec![("width", "8px"), ("height", "8px"), ("border-radius", "4px")]
        );
    }

    #[test]
    fn test_default_variant_keeps_set_selector() {
        let json = r#"{
            "document": { "type": "DOCUMENT", "children": [{
                "type": "CANVAS",
                "children": [{
                    "id": "1:1",
                    "type": "COMPONENT_SET",
                    "name": "Chip",
                    "children": [{ "id": "1:2", "type": "COMPONENT", "name": "state=default" }]
                }]
            }]}
        }"#;
        let components = assemble_json(json, &CodegenOptions::default());
        assert_eq!(components["1:1"].children[0].selector, "chip");
        assert!(components["1:1"].is_set);
        assert!(components["1:1"].variants.is_empty());
    }

    #[test]
    fn test_top_level_instances_are_ignored() {
        let json = r#"{
            "document": { "type": "DOCUMENT", "children": [{
                "type": "CANVAS",
                "children": [{
                    "type": "INSTANCE",
                    "name": "Button",
                    "children": [{ "id": "9:9", "type": "COMPONENT", "name": "Nested" }]
                }]
            }]}
        }"#;
        assert!(assemble_json(json, &CodegenOptions::default()).is_empty());
    }

    #[test]
    fn test_depth_limit() {
        let file = parse_document(BUTTONS).unwrap();
        let result = assemble(&file, &CodegenOptions::new().max_depth(3));
        assert!(matches!(result, Err(CodegenError::TooDeep { depth: 4, limit: 3 })));
        assert!(assemble(&file, &CodegenOptions::new().max_depth(4)).is_ok());
    }
}
