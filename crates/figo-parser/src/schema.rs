//! Design document schema.
//!
//! Mirrors the subset of the design tool's file format that the CSS pipeline
//! reads. Every optional field carries its own default rule, so a document is
//! fully populated as soon as it is deserialized.
//!
//! ```text
//! File { document: Node, components, component_sets, styles }
//! Node { kind, children: Vec<Node>, fills, strokes, effects, style, styles, ... }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Default rules
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// A complete design file as returned by the file endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct File {
    pub name: String,
    pub last_modified: String,
    pub version: String,
    pub document: Node,
    #[serde(deserialize_with = "null_as_default")]
    pub component_sets: BTreeMap<String, ComponentSet>,
    #[serde(deserialize_with = "null_as_default")]
    pub components: BTreeMap<String, Component>,
    #[serde(deserialize_with = "null_as_default")]
    pub styles: BTreeMap<String, Style>,
}

impl File {
    /// Top-level pages (canvas nodes) of the document.
    pub fn pages(&self) -> &[Node] {
        &self.document.children
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ComponentSet {
    pub key: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Component {
    pub key: String,
    pub name: String,
    pub description: String,
    pub component_set_id: Option<String>,
}

/// A named, reusable style definition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    pub key: String,
    pub name: String,
    pub description: String,
    pub style_type: StyleType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleType {
    #[default]
    Fill,
    Text,
    Effect,
    Grid,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Canvas,
    #[default]
    Frame,
    Group,
    Section,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    Rectangle,
    Text,
    Slice,
    Component,
    ComponentSet,
    Instance,
    #[serde(other)]
    Unknown,
}

/// A visual node in the design tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: String,
    pub name: String,
    pub visible: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
    /// Rotation in radians.
    pub rotation: f64,

    // Geometry
    #[serde(deserialize_with = "null_as_default")]
    pub absolute_bounding_box: Rectangle,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub clips_content: bool,

    // Auto layout
    pub layout_mode: LayoutMode,
    pub layout_sizing_horizontal: Option<LayoutSizing>,
    pub layout_sizing_vertical: Option<LayoutSizing>,
    pub layout_wrap: LayoutWrap,
    pub layout_align: LayoutAlign,
    pub layout_grow: f64,
    pub primary_axis_align_items: AlignItems,
    pub counter_axis_align_items: AlignItems,
    pub counter_axis_align_content: AlignContent,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub item_spacing: f64,

    // Paint
    #[serde(deserialize_with = "null_as_default")]
    pub fills: Vec<Paint>,
    #[serde(deserialize_with = "null_as_default")]
    pub strokes: Vec<Paint>,
    pub stroke_weight: f64,
    pub individual_stroke_weights: Option<StrokeWeights>,
    #[serde(deserialize_with = "null_as_default")]
    pub stroke_dashes: Vec<f64>,
    pub corner_radius: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rectangle_corner_radii: Vec<f64>,
    pub opacity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub effects: Vec<Effect>,

    /// Style category key (`fill`, `strokes`, `effect`, `text`, ...) to style id.
    #[serde(deserialize_with = "null_as_default")]
    pub styles: BTreeMap<String, String>,

    // Text
    pub characters: String,
    #[serde(deserialize_with = "null_as_default")]
    pub style: TypeStyle,

    // Components
    #[serde(deserialize_with = "null_as_default")]
    pub component_property_definitions: BTreeMap<String, ComponentPropertyDefinition>,
    pub component_id: Option<String>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            kind: NodeKind::default(),
            id: String::new(),
            name: String::new(),
            visible: default_true(),
            children: Vec::new(),
            rotation: 0.0,
            absolute_bounding_box: Rectangle::default(),
            min_width: 0.0,
            max_width: 0.0,
            min_height: 0.0,
            max_height: 0.0,
            clips_content: false,
            layout_mode: LayoutMode::default(),
            layout_sizing_horizontal: None,
            layout_sizing_vertical: None,
            layout_wrap: LayoutWrap::default(),
            layout_align: LayoutAlign::default(),
            layout_grow: 0.0,
            primary_axis_align_items: AlignItems::default(),
            counter_axis_align_items: AlignItems::default(),
            counter_axis_align_content: AlignContent::default(),
            padding_left: 0.0,
            padding_right: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            item_spacing: 0.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            individual_stroke_weights: None,
            stroke_dashes: Vec::new(),
            corner_radius: 0.0,
            rectangle_corner_radii: Vec::new(),
            opacity: default_one(),
            effects: Vec::new(),
            styles: BTreeMap::new(),
            characters: String::new(),
            style: TypeStyle::default(),
            component_property_definitions: BTreeMap::new(),
            component_id: None,
        }
    }
}

impl Node {
    pub fn is_component_set(&self) -> bool {
        self.kind == NodeKind::ComponentSet
    }

    pub fn is_component(&self) -> bool {
        self.kind == NodeKind::Component
    }

    pub fn is_component_or_set(&self) -> bool {
        self.is_component() || self.is_component_set()
    }

    pub fn is_instance(&self) -> bool {
        self.kind == NodeKind::Instance
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    pub fn is_vector(&self) -> bool {
        self.kind == NodeKind::Vector
    }

    pub fn is_auto_layout(&self) -> bool {
        matches!(
            self.layout_mode,
            LayoutMode::Horizontal | LayoutMode::Vertical
        )
    }

    /// Frame-like containers whose style references become tokens.
    pub fn is_frame(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::ComponentSet
                | NodeKind::Component
                | NodeKind::Instance
                | NodeKind::Frame
                | NodeKind::Group
                | NodeKind::Section
        )
    }

    /// Variant property definitions, ordered by property name.
    pub fn variant_definitions(
        &self,
    ) -> impl Iterator<Item = (&String, &ComponentPropertyDefinition)> {
        self.component_property_definitions
            .iter()
            .filter(|(_, def)| def.kind == ComponentPropertyType::Variant)
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StrokeWeights {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl StrokeWeights {
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

// ---------------------------------------------------------------------------
// Layout enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutSizing {
    Fixed,
    Hug,
    Fill,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    #[default]
    NoWrap,
    Wrap,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlign {
    #[default]
    Inherit,
    Stretch,
    Min,
    Center,
    Max,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlignItems {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
    Baseline,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlignContent {
    #[default]
    Auto,
    SpaceBetween,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Paint and effects
// ---------------------------------------------------------------------------

/// An RGBA colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: default_one(),
        }
    }
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    #[default]
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
    Video,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintType,
    pub visible: bool,
    pub opacity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub color: Color,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            kind: PaintType::default(),
            visible: default_true(),
            opacity: default_one(),
            color: Color::default(),
        }
    }
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    InnerShadow,
    #[default]
    DropShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectType,
    pub visible: bool,
    pub radius: f64,
    pub spread: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: Vector,
    #[serde(deserialize_with = "null_as_default")]
    pub color: Color,
}

impl Default for Effect {
    fn default() -> Self {
        Self {
            kind: EffectType::default(),
            visible: default_true(),
            radius: 0.0,
            spread: 0.0,
            offset: Vector::default(),
            color: Color::default(),
        }
    }
}

impl Effect {
    pub fn is_shadow(&self) -> bool {
        matches!(self.kind, EffectType::DropShadow | EffectType::InnerShadow)
    }
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeStyle {
    pub font_family: String,
    pub font_weight: f64,
    pub font_size: f64,
    pub line_height_px: f64,
    pub letter_spacing: f64,
    pub italic: bool,
    pub text_case: Option<TextCase>,
    pub text_decoration: Option<TextDecoration>,
    pub text_truncation: Option<TextTruncation>,
    pub max_lines: f64,
    pub text_align_horizontal: Option<TextAlign>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Original,
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    None,
    Strikethrough,
    Underline,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextTruncation {
    Disabled,
    Ending,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justified,
    Top,
    Bottom,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Component properties
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentPropertyType {
    Boolean,
    InstanceSwap,
    #[default]
    Text,
    Variant,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentPropertyDefinition {
    #[serde(rename = "type")]
    pub kind: ComponentPropertyType,
    /// Booleans arrive as JSON `true`/`false`; kept as their text form.
    #[serde(deserialize_with = "default_value_as_string")]
    pub default_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub variant_options: Vec<String>,
}

fn default_value_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
