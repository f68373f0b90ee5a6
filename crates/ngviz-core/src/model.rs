//! Core data structures for the dependency graph

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UnknownDiscriminant;

/// Discriminates what kind of Angular entity a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolKind {
    // ── Dependency injection ────────────────────────────────
    Provider,

    // ── Template entities ───────────────────────────────────
    HtmlElement,
    HtmlElementWithDirective,
    ComponentWithDirective,
    Component,
    ComponentOrDirective,
    Pipe,

    // ── Module structure ────────────────────────────────────
    Module,
    LazyModule,
    Meta,

    // ── Fallback ────────────────────────────────────────────
    Unknown,
}

impl SymbolKind {
    /// The wire name, e.g. `"lazy-module"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Provider => "provider",
            SymbolKind::HtmlElement => "html-element",
            SymbolKind::HtmlElementWithDirective => "html-element-with-directive",
            SymbolKind::ComponentWithDirective => "component-with-directive",
            SymbolKind::Component => "component",
            SymbolKind::ComponentOrDirective => "component-or-directive",
            SymbolKind::Pipe => "pipe",
            SymbolKind::Module => "module",
            SymbolKind::LazyModule => "lazy-module",
            SymbolKind::Meta => "meta",
            SymbolKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node tag consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolType {
    /// True when the symbol comes from the framework itself.
    pub angular: bool,
    #[serde(rename = "type")]
    pub kind: SymbolKind,
}

impl SymbolType {
    pub fn new(angular: bool, kind: SymbolKind) -> Self {
        SymbolType { angular, kind }
    }
}

/// A single node in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<T> {
    /// Symbol id (`<filePath>#<name>`) or a literal token value.
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub symbol_type: Option<SymbolType>,
}

impl<T> Node<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
            data: None,
            symbol_type: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_type(mut self, symbol_type: SymbolType) -> Self {
        self.symbol_type = Some(symbol_type);
        self
    }
}

/// Arrow direction hint. Serialized as its numeric discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Direction {
    From = 0,
    To = 1,
    Both = 2,
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = UnknownDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::From),
            1 => Ok(Direction::To),
            2 => Ok(Direction::Both),
            _ => Err(UnknownDiscriminant { kind: "Direction", value }),
        }
    }
}

/// An edge between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashes: Option<bool>,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            direction: None,
            data: None,
            dashes: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashes = Some(true);
        self
    }
}

/// Graph layout requested from the renderer. Serialized as its numeric discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Layout {
    HierarchicalLRDirected = 0,
    HierarchicalUDDirected = 1,
    Regular = 2,
}

impl From<Layout> for u8 {
    fn from(layout: Layout) -> u8 {
        layout as u8
    }
}

impl TryFrom<u8> for Layout {
    type Error = UnknownDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Layout::HierarchicalLRDirected),
            1 => Ok(Layout::HierarchicalUDDirected),
            2 => Ok(Layout::Regular),
            _ => Err(UnknownDiscriminant { kind: "Layout", value }),
        }
    }
}

/// The nodes and edges of one visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph<T> {
    pub nodes: Vec<Node<T>>,
    pub edges: Vec<Edge>,
}

/// Everything the renderer needs to draw one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationConfig<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    pub title: String,
    pub graph: Graph<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPair {
    pub key: String,
    pub value: Option<String>,
}

/// Key/value details shown for a selected node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub properties: BTreeMap<u32, StringPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl Metadata {
    /// Append a property after the highest index, or at the lowest free
    /// index once `u32::MAX` is taken.
    pub fn push(&mut self, key: impl Into<String>, value: Option<String>) {
        let next = match self.properties.keys().next_back() {
            None => Some(0),
            Some(last) => last
                .checked_add(1)
                .or_else(|| (0..u32::MAX).find(|i| !self.properties.contains_key(i))),
        };
        let Some(index) = next else {
            tracing::warn!("metadata property table is full, dropping property");
            return;
        };
        self.properties.insert(
            index,
            StringPair {
                key: key.into(),
                value,
            },
        );
    }
}

/// Opaque theme definition; interpreted only by the renderer.
pub type Theme = serde_json::Map<String, serde_json::Value>;

/// Named themes, keyed by theme name.
pub type Themes = HashMap<String, Theme>;
