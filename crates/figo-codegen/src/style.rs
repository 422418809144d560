//! Node style resolver.
//!
//! Computes the CSS declarations for a single frame-like node from its
//! geometry, auto-layout, paint and effect attributes. Sizing depends on the
//! parent: children of an auto-layout parent are flex items.
//!
//! Only solid paints resolve to a colour; gradients, images and the rest
//! resolve to nothing and are skipped.

use figo_parser::schema::{
    AlignContent, AlignItems, Effect, EffectType, LayoutAlign, LayoutMode, LayoutSizing,
    LayoutWrap, Node, Paint, PaintType,
};

use crate::declarations::Declarations;
use crate::format::{px, rgba, to_degrees};

/// Compute the declarations for `node`, laid out inside `parent`.
pub fn css(node: &Node, parent: Option<&Node>) -> Declarations {
    let mut rules = Declarations::new();

    if !node.visible {
        rules.set("display", "none");
    }

    if node.clips_content {
        rules.set("overflow", "hidden");
    }

    rules.extend(sizes(node, parent));

    if node.is_auto_layout() {
        if node.visible {
            rules.set("display", "flex");
        }
        if node.layout_wrap == LayoutWrap::Wrap {
            rules.set("flex-wrap", "wrap");
        }
        if node.layout_mode == LayoutMode::Vertical {
            rules.set("flex-direction", "column");
        }

        rules.extend(alignment(node));

        if node.item_spacing != 0.0 {
            rules.set("gap", px(node.item_spacing));
        }
        rules.set("padding", padding(node));
    }

    // Only multiples of 90° survive the round trip; the design tool resizes
    // the bounding box for anything else.
    if node.rotation != 0.0 {
        let degrees = to_degrees(node.rotation);
        if degrees != 0 {
            rules.set("transform", format!("rotate({degrees}deg)"));
        }
    }

    rules.set("border-radius", border_radius(node));
    rules.extend(border(node));
    rules.set("background", background(node));
    rules.set("box-shadow", box_shadow(node));
    rules.set("filter", blur(node));
    rules.set("backdrop-filter", backdrop_blur(node));

    rules
}

// ---------------------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------------------

pub fn sizes(node: &Node, parent: Option<&Node>) -> Declarations {
    let mut rules = min_max_sizes(node);
    let bounds = &node.absolute_bounding_box;
    let horizontal = node.layout_sizing_horizontal;
    let vertical = node.layout_sizing_vertical;

    if node.layout_mode == LayoutMode::None {
        if parent.is_some_and(Node::is_auto_layout) {
            if horizontal == Some(LayoutSizing::Fixed) && bounds.width != 0.0 {
                rules.set("width", px(bounds.width));
            }
            if node.layout_grow == 0.0 {
                rules.set("flex-shrink", "0");
            }
            if horizontal == Some(LayoutSizing::Fill) {
                if node.layout_align == LayoutAlign::Stretch {
                    rules.set("align-self", "stretch");
                } else {
                    rules.set("flex", "1 0 0");
                }
            }
            if vertical == Some(LayoutSizing::Fixed) && bounds.height != 0.0 {
                rules.set("height", px(bounds.height));
            }
            if vertical == Some(LayoutSizing::Fill) {
                if node.layout_grow == 1.0 {
                    rules.set("flex", "1 0 0");
                } else {
                    rules.set("align-self", "stretch");
                }
            }
        } else {
            if bounds.width != 0.0 {
                rules.set("width", px(bounds.width));
            }
            if bounds.height != 0.0 {
                rules.set("height", px(bounds.height));
            }
        }
    } else if node.is_auto_layout() {
        rules.set("width", axis_size(horizontal, bounds.width));
        rules.set("height", axis_size(vertical, bounds.height));
    }

    rules
}

/// Width or height for one axis under the fixed/hug/fill vocabulary.
pub(crate) fn axis_size(sizing: Option<LayoutSizing>, fixed: f64) -> String {
    match sizing {
        Some(LayoutSizing::Hug) => "fit-content".to_string(),
        Some(LayoutSizing::Fixed) => px(fixed),
        Some(LayoutSizing::Fill) => "100%".to_string(),
        _ => String::new(),
    }
}

/// Each bound is emitted from its own field whenever it is nonzero.
pub(crate) fn min_max_sizes(node: &Node) -> Declarations {
    let mut rules = Declarations::new();
    let bounds = [
        ("min-width", node.min_width),
        ("max-width", node.max_width),
        ("min-height", node.min_height),
        ("max-height", node.max_height),
    ];
    for (property, value) in bounds {
        if value != 0.0 {
            rules.set(property, px(value));
        }
    }
    rules
}

// ---------------------------------------------------------------------------
// Auto layout
// ---------------------------------------------------------------------------

pub fn alignment(node: &Node) -> Declarations {
    let mut rules = Declarations::new();

    let align_items = match node.counter_axis_align_items {
        AlignItems::Center => "center",
        AlignItems::Max => "flex-end",
        AlignItems::Baseline => "baseline",
        // No counter-axis equivalent in CSS.
        AlignItems::SpaceBetween => "",
        _ => "flex-start",
    };
    rules.set("align-items", align_items);

    let justify_content = match node.primary_axis_align_items {
        AlignItems::Center => "center",
        AlignItems::Max => "flex-end",
        AlignItems::SpaceBetween => "space-between",
        _ => "flex-start",
    };
    rules.set("justify-content", justify_content);

    if node.counter_axis_align_content == AlignContent::SpaceBetween
        && node.layout_wrap == LayoutWrap::Wrap
    {
        rules.set("align-content", "space-between");
    }

    rules
}

/// Shortest `padding` shorthand for the four sides, or empty when all are zero.
pub fn padding(node: &Node) -> String {
    shorthand(
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    )
}

/// Shortest `border-radius` shorthand, or empty when there are no radii.
pub fn border_radius(node: &Node) -> String {
    if node.corner_radius != 0.0 {
        return px(node.corner_radius);
    }
    match node.rectangle_corner_radii.as_slice() {
        [top_left, top_right, bottom_right, bottom_left, ..] => {
            shorthand(*top_left, *top_right, *bottom_right, *bottom_left)
        }
        _ => String::new(),
    }
}

/// CSS 1/2/3/4-value box shorthand. Both `padding` (top, right, bottom, left)
/// and `border-radius` (top-left, top-right, bottom-right, bottom-left) share
/// the same collapsing rule.
fn shorthand(a: f64, b: f64, c: f64, d: f64) -> String {
    if a == 0.0 && b == 0.0 && c == 0.0 && d == 0.0 {
        return String::new();
    }

    if a == c && b == d && a == b {
        px(a)
    } else if a == c && b == d {
        format!("{} {}", px(a), px(b))
    } else if b == d {
        format!("{} {} {}", px(a), px(b), px(c))
    } else {
        format!("{} {} {} {}", px(a), px(b), px(c), px(d))
    }
}

// ---------------------------------------------------------------------------
// Border
// ---------------------------------------------------------------------------

pub fn border_style(node: &Node) -> &'static str {
    if node.stroke_dashes.is_empty() {
        "solid"
    } else {
        "dashed"
    }
}

/// A single `border` for uniform strokes, otherwise one declaration per side.
pub fn border(node: &Node) -> Declarations {
    let mut rules = Declarations::new();
    let color = border_color(node);
    if color.is_empty() {
        return rules;
    }
    let style = border_style(node);

    if node.stroke_weight != 0.0 {
        rules.set(
            "border",
            format!("{} {style} {color}", px(node.stroke_weight)),
        );
        return rules;
    }

    if let Some(weights) = node.individual_stroke_weights.filter(|w| !w.is_zero()) {
        let sides = [
            ("border-top", weights.top),
            ("border-right", weights.right),
            ("border-bottom", weights.bottom),
            ("border-left", weights.left),
        ];
        for (property, weight) in sides {
            if weight > 0.0 {
                rules.set(property, format!("{} {style} {color}", px(weight)));
            }
        }
    }

    rules
}

// ---------------------------------------------------------------------------
// Paint
// ---------------------------------------------------------------------------

/// Colour of the first visible solid paint, or empty.
fn solid_color(paints: &[Paint]) -> String {
    paints
        .iter()
        .find(|paint| paint.visible && paint.kind == PaintType::Solid)
        .map(|paint| rgba(&paint.color))
        .unwrap_or_default()
}

pub fn background(node: &Node) -> String {
    solid_color(&node.fills)
}

pub fn border_color(node: &Node) -> String {
    solid_color(&node.strokes)
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

/// `Xpx Ypx Rpx Spx <colour>`.
pub fn shadow(effect: &Effect) -> String {
    format!(
        "{} {} {} {} {}",
        px(effect.offset.x),
        px(effect.offset.y),
        px(effect.radius),
        px(effect.spread),
        rgba(&effect.color)
    )
}

/// CSS value for one effect: a shadow for `box-shadow`, or a `blur()` function.
pub fn effect_value(effect: &Effect) -> String {
    match effect.kind {
        EffectType::InnerShadow => format!("inset {}", shadow(effect)),
        EffectType::DropShadow => shadow(effect),
        EffectType::LayerBlur | EffectType::BackgroundBlur => {
            format!("blur({})", px(effect.radius))
        }
        EffectType::Unknown => String::new(),
    }
}

/// All visible shadows, in declaration order.
pub fn box_shadow(node: &Node) -> String {
    node.effects
        .iter()
        .filter(|effect| effect.visible && effect.is_shadow())
        .map(effect_value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Last visible effect of `kind` wins.
fn last_blur(node: &Node, kind: EffectType) -> String {
    node.effects
        .iter()
        .filter(|effect| effect.visible && effect.kind == kind)
        .last()
        .map(effect_value)
        .unwrap_or_default()
}

pub fn blur(node: &Node) -> String {
    last_blur(node, EffectType::LayerBlur)
}

pub fn backdrop_blur(node: &Node) -> String {
    last_blur(node, EffectType::BackgroundBlur)
}
