use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry as delivered by the remote source.
///
/// Only `title` is examined (search matches against it). Every other field is
/// carried through verbatim so renderers can show whatever the source sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Map::new(),
        }
    }

    /// Attach a pass-through field (builder style, mostly for fixtures).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Stable render key: the source `id` when present, else the catalog position.
    pub fn key(&self, position: usize) -> ProductKey {
        match self.fields.get("id") {
            Some(Value::String(id)) => ProductKey::Id(id.clone()),
            Some(Value::Number(id)) => ProductKey::Id(id.to_string()),
            _ => ProductKey::Position(position),
        }
    }
}

/// Key identifying a product across re-renders of the same catalog.
///
/// Rendered as `id:<source id>` or `pos:<position>`; the prefixes keep the two
/// kinds from colliding whatever the source sends as an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductKey {
    Id(String),
    Position(usize),
}

impl core::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductKey::Id(id) => write!(f, "id:{id}"),
            ProductKey::Position(pos) => write!(f, "pos:{pos}"),
        }
    }
}
