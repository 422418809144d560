//! Text style resolver.
//!
//! Text leaves size themselves from their own sizing fields only; they never
//! take the flex-item branch that frames get from an auto-layout parent.

use figo_parser::schema::{Node, TextAlign, TextCase, TextDecoration, TextTruncation};

use crate::declarations::Declarations;
use crate::format::px;
use crate::style::{axis_size, background, min_max_sizes};

/// Compute the declarations for a text node.
pub fn css(node: &Node) -> Declarations {
    let mut rules = font_rules(node);
    let style = &node.style;

    let text_align = match style.text_align_horizontal {
        Some(TextAlign::Right) => "right",
        Some(TextAlign::Center) => "center",
        Some(TextAlign::Justified) => "justify",
        _ => "",
    };
    rules.set("text-align", text_align);

    let decoration = match style.text_decoration {
        Some(TextDecoration::Strikethrough) => "strikethrough",
        Some(TextDecoration::Underline) => "underline",
        _ => "",
    };
    rules.set("text-decoration-line", decoration);

    match style.text_case {
        Some(TextCase::Upper) => rules.set("text-transform", "uppercase"),
        Some(TextCase::Lower) => rules.set("text-transform", "lowercase"),
        Some(TextCase::Title) => rules.set("text-transform", "capitalize"),
        Some(TextCase::SmallCaps) => rules.set("font-variant", "small-caps"),
        Some(TextCase::SmallCapsForced) => rules.set("font-variant", "all-small-caps"),
        _ => {}
    }

    if style.text_truncation == Some(TextTruncation::Ending) {
        rules.set("text-overflow", "ellipsis");
        if style.max_lines != 0.0 {
            rules.set("-webkit-box-orient", "vertical");
            rules.set("-webkit-line-clamp", (style.max_lines as i64).to_string());
        }
    }

    // Text colour comes from the fill.
    rules.set("color", background(node));

    rules.extend(min_max_sizes(node));
    let bounds = &node.absolute_bounding_box;
    rules.set("width", axis_size(node.layout_sizing_horizontal, bounds.width));
    rules.set("height", axis_size(node.layout_sizing_vertical, bounds.height));

    rules
}

/// Font declarations shared by [`css`] and [`font`].
fn font_rules(node: &Node) -> Declarations {
    let style = &node.style;
    let mut rules = Declarations::new();

    rules.set("font-family", style.font_family.as_str());
    if style.font_size != 0.0 {
        rules.set("font-size", px(style.font_size));
    }
    if style.font_weight != 0.0 {
        rules.set("font-weight", (style.font_weight as i64).to_string());
    }
    if style.line_height_px != 0.0 {
        rules.set("line-height", px(style.line_height_px));
    }
    if style.letter_spacing != 0.0 {
        rules.set("letter-spacing", px(style.letter_spacing));
    }

    rules
}

/// Font summary for text-style tokens: `"font-family: Inter;|font-size: 16px;"`.
///
/// Each declaration is terminated and the list is pipe-delimited so the token
/// renderer can split it back into lines.
pub fn font(node: &Node) -> String {
    font_rules(node)
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join("|")
}
