//! Spec node model for wireframe documents
//!
//! A document node is a YAML mapping whose first recognized key names the
//! node kind. Primitive tags are lowercase (`frame`, `box`, `text`, ...);
//! any other key starting with an uppercase letter is a component reference.
//! Decoding happens once, up front, into an explicit tagged union with an
//! `Unknown` fallback so resolution degrades instead of aborting.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::generate::chart::WaveFn;
use crate::generate::cloud::Spread;
use crate::generate::globe::{LatLon, Route};
use crate::generate::path2d::PathShape;

/// Primitive node tags, in the order they are probed during decoding.
pub const PRIMITIVE_TAGS: [&str; 9] = [
    "frame", "box", "text", "icon", "cursor", "map", "chart", "globe", "cloud",
];

/// Layout flow direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Row,
    #[default]
    Column,
}

impl Flow {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("row") => Flow::Row,
            _ => Flow::Column,
        }
    }

    /// Leading and trailing edges along the flow direction.
    pub fn main_edges(self) -> (Edge, Edge) {
        match self {
            Flow::Column => (Edge::Top, Edge::Bottom),
            Flow::Row => (Edge::Left, Edge::Right),
        }
    }

    /// Edge pair perpendicular to the flow direction.
    pub fn cross_edges(self) -> (Edge, Edge) {
        match self {
            Flow::Column => (Edge::Left, Edge::Right),
            Flow::Row => (Edge::Top, Edge::Bottom),
        }
    }
}

/// One edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Per-edge padding amounts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeInsets {
    pub fn uniform(amount: f64) -> Self {
        Self {
            top: amount,
            right: amount,
            bottom: amount,
            left: amount,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// True when the given edge carries no padding.
    pub fn is_open(&self, edge: Edge) -> bool {
        self.get(edge) <= 0.0
    }

    /// Decode from a scalar (uniform) or a per-edge mapping.
    fn from_value(value: Option<&Value>, default: f64) -> Self {
        match value {
            Some(v) => {
                if let Some(n) = v.as_f64() {
                    Self::uniform(n)
                } else if let Some(map) = v.as_mapping() {
                    Self {
                        top: get_f64(map, "top").unwrap_or(0.0),
                        right: get_f64(map, "right").unwrap_or(0.0),
                        bottom: get_f64(map, "bottom").unwrap_or(0.0),
                        left: get_f64(map, "left").unwrap_or(0.0),
                    }
                } else {
                    Self::uniform(default)
                }
            }
            None => Self::uniform(default),
        }
    }
}

/// Border treatment of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outline {
    #[default]
    None,
    Thin,
    Thick,
    Dashed,
}

impl Outline {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("thin") => Outline::Thin,
            Some("thick") => Outline::Thick,
            Some("dashed") => Outline::Dashed,
            _ => Outline::None,
        }
    }

    /// True when the box draws a visible border.
    pub fn is_visible(self) -> bool {
        !matches!(self, Outline::None)
    }
}

/// Pointer glyph drawn by a cursor node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorKind {
    #[default]
    Arrow,
    Pointer,
    Grab,
}

impl CursorKind {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("pointer") => CursorKind::Pointer,
            Some("grab") => CursorKind::Grab,
            _ => CursorKind::Arrow,
        }
    }
}

/// The forms a `children` field can take.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildrenSpec {
    /// No children declared
    None,
    /// An ordered list of child node values
    Nodes(Vec<Value>),
    /// Repeat a template per item of a scope array (`$each`)
    Each {
        source: String,
        template: Option<Value>,
    },
    /// Project the instantiating caller's own children (`$children`)
    Slot,
}

impl ChildrenSpec {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => ChildrenSpec::None,
            Some(Value::String(s)) if s == "$children" => ChildrenSpec::Slot,
            Some(Value::Sequence(seq)) => ChildrenSpec::Nodes(seq.clone()),
            Some(Value::Mapping(map)) => {
                if let Some(source) = map.get("$each") {
                    ChildrenSpec::Each {
                        source: source.as_str().unwrap_or_default().trim().to_string(),
                        template: map.get("template").cloned(),
                    }
                } else {
                    // A single bare node is accepted where a list is expected
                    ChildrenSpec::Nodes(vec![Value::Mapping(map.clone())])
                }
            }
            Some(_) => ChildrenSpec::None,
        }
    }
}

/// A decoded document node.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecNode {
    Frame(FrameSpec),
    Box(BoxSpec),
    Text(TextSpec),
    Icon(IconSpec),
    Cursor(CursorSpec),
    Map(MapSpec),
    Chart(ChartSpec),
    Globe(GlobeSpec),
    Cloud(CloudSpec),
    Component(ComponentRef),
    /// Unrecognized node shape; resolution emits an empty fallback box
    Unknown,
}

/// Top-level device/artboard wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSpec {
    pub title: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub direction: Flow,
    pub padding: EdgeInsets,
    pub gap: f64,
    pub background: Option<String>,
    pub children: ChildrenSpec,
}

/// General-purpose layout box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpec {
    pub outline: Outline,
    pub padding: EdgeInsets,
    pub gap: f64,
    pub direction: Flow,
    pub grow: bool,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fill: Option<String>,
    pub link: Option<String>,
    pub children: ChildrenSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub content: String,
    pub size: Option<f64>,
    pub weight: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub name: String,
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorSpec {
    pub kind: CursorKind,
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
}

/// A 2D trajectory sketch inside a width/height box.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSpec {
    pub path: PathShape,
    pub width: f64,
    pub height: f64,
}

/// A sampled chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub func: WaveFn,
    pub style: Option<String>,
    pub from: f64,
    pub to: f64,
    pub samples: usize,
    pub noise: f64,
}

/// A great-circle trajectory on the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeSpec {
    pub route: Route,
    pub waypoints: Vec<LatLon>,
    pub altitude: f64,
    pub detail: usize,
}

/// A 3D point-cloud scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudSpec {
    pub spread: Spread,
    pub count: usize,
    pub noise: f64,
}

/// A reference to a component in the library.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRef {
    pub name: String,
    /// Instance properties: `variant`, `link`, `children`, and the flat
    /// scope used for template substitution
    pub props: Mapping,
}

impl SpecNode {
    /// Decode one node value. Never fails; unrecognized shapes become
    /// [`SpecNode::Unknown`].
    pub fn from_value(value: &Value) -> SpecNode {
        let Some(map) = value.as_mapping() else {
            return SpecNode::Unknown;
        };

        for tag in PRIMITIVE_TAGS {
            if let Some(body) = map.get(tag) {
                return decode_primitive(tag, body);
            }
        }

        // First capitalized key wins as a component reference
        for (key, props) in map {
            if let Some(name) = key.as_str() {
                if is_reference_name(name) {
                    return SpecNode::Component(ComponentRef {
                        name: name.to_string(),
                        props: props.as_mapping().cloned().unwrap_or_default(),
                    });
                }
            }
        }

        SpecNode::Unknown
    }
}

/// True when a node key names a component rather than a primitive.
pub fn is_reference_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

fn decode_primitive(tag: &str, body: &Value) -> SpecNode {
    let empty = Mapping::new();
    let map = body.as_mapping().unwrap_or(&empty);

    match tag {
        "frame" => SpecNode::Frame(FrameSpec {
            title: get_str(map, "title"),
            width: get_f64(map, "width"),
            height: get_f64(map, "height"),
            direction: Flow::from_value(map.get("direction")),
            padding: EdgeInsets::from_value(map.get("padding"), 16.0),
            gap: get_f64(map, "gap").unwrap_or(0.0),
            background: get_str(map, "background"),
            children: ChildrenSpec::from_value(map.get("children")),
        }),
        "box" => SpecNode::Box(BoxSpec {
            outline: Outline::from_value(map.get("outline")),
            padding: EdgeInsets::from_value(map.get("padding"), 0.0),
            gap: get_f64(map, "gap").unwrap_or(0.0),
            direction: Flow::from_value(map.get("direction")),
            grow: get_bool(map, "grow").unwrap_or(false),
            width: get_f64(map, "width"),
            height: get_f64(map, "height"),
            fill: get_str(map, "fill"),
            link: get_str(map, "link"),
            children: ChildrenSpec::from_value(map.get("children")),
        }),
        "text" => {
            // Scalar shorthand: `text: "Save"`
            if let Some(content) = body.as_str() {
                return SpecNode::Text(TextSpec {
                    content: content.to_string(),
                    size: None,
                    weight: None,
                    color: None,
                });
            }
            SpecNode::Text(TextSpec {
                content: get_str(map, "content").unwrap_or_default(),
                size: get_f64(map, "size"),
                weight: get_str(map, "weight"),
                color: get_str(map, "color"),
            })
        }
        "icon" => {
            if let Some(name) = body.as_str() {
                return SpecNode::Icon(IconSpec {
                    name: name.to_string(),
                    size: None,
                });
            }
            SpecNode::Icon(IconSpec {
                name: get_str(map, "name").unwrap_or_default(),
                size: get_f64(map, "size"),
            })
        }
        "cursor" => SpecNode::Cursor(CursorSpec {
            kind: CursorKind::from_value(map.get("kind")),
            x: get_f64(map, "x").unwrap_or(0.0),
            y: get_f64(map, "y").unwrap_or(0.0),
            label: get_str(map, "label"),
        }),
        "map" => SpecNode::Map(MapSpec {
            path: get_str(map, "path")
                .as_deref()
                .and_then(PathShape::from_name)
                .unwrap_or(PathShape::Wander),
            width: get_f64(map, "width").unwrap_or(320.0),
            height: get_f64(map, "height").unwrap_or(200.0),
        }),
        "chart" => SpecNode::Chart(ChartSpec {
            func: get_str(map, "func")
                .as_deref()
                .and_then(WaveFn::from_name)
                .unwrap_or(WaveFn::Linear),
            style: get_str(map, "style"),
            from: get_f64(map, "from").unwrap_or(0.0),
            to: get_f64(map, "to").unwrap_or(10.0),
            samples: get_usize(map, "samples").unwrap_or(40),
            noise: get_f64(map, "noise").unwrap_or(0.0),
        }),
        "globe" => SpecNode::Globe(GlobeSpec {
            route: get_str(map, "route")
                .as_deref()
                .and_then(Route::from_name)
                .unwrap_or(Route::Arc),
            waypoints: decode_waypoints(map.get("waypoints")),
            altitude: get_f64(map, "altitude").unwrap_or(0.4),
            detail: get_usize(map, "detail").unwrap_or(24),
        }),
        "cloud" => SpecNode::Cloud(CloudSpec {
            spread: get_str(map, "spread")
                .as_deref()
                .and_then(Spread::from_name)
                .unwrap_or(Spread::Random),
            count: get_usize(map, "count").unwrap_or(200),
            noise: get_f64(map, "noise").unwrap_or(0.0),
        }),
        _ => SpecNode::Unknown,
    }
}

/// Decode `[[lat, lon], ...]` waypoint pairs, skipping malformed entries.
fn decode_waypoints(value: Option<&Value>) -> Vec<LatLon> {
    let Some(seq) = value.and_then(Value::as_sequence) else {
        return Vec::new();
    };
    seq.iter()
        .filter_map(|pair| {
            let pair = pair.as_sequence()?;
            let lat = pair.first()?.as_f64()?;
            let lon = pair.get(1)?.as_f64()?;
            Some(LatLon::new(lat, lon))
        })
        .collect()
}

pub(crate) fn get_str(map: &Mapping, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn get_f64(map: &Mapping, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

pub(crate) fn get_bool(map: &Mapping, key: &str) -> Option<bool> {
    map.get(key).and_then(Value::as_bool)
}

pub(crate) fn get_usize(map: &Mapping, key: &str) -> Option<usize> {
    map.get(key).and_then(Value::as_u64).map(|n| n as usize)
}
