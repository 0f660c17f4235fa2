//! Per-class schema registry
//!
//! A class schema describes the `init` parameters and `properties` a driver
//! class accepts. Classes without a registered schema are opaque: their
//! payloads are accepted as-is.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::value::{MapAccessDeserializer, StrDeserializer};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::models::ParamValue;

/// Expected shape of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    #[default]
    Any,
    Bool,
    Int,
    Float,
    /// Int or float
    Number,
    String,
    List,
    Map,
}

impl ParamKind {
    pub fn accepts(&self, value: &ParamValue) -> bool {
        match (self, value) {
            (ParamKind::Any, _) => true,
            (ParamKind::Bool, ParamValue::Bool(_)) => true,
            (ParamKind::Int, ParamValue::Int(_)) => true,
            (ParamKind::Float, ParamValue::Float(_)) => true,
            (ParamKind::Number, ParamValue::Int(_) | ParamValue::Float(_)) => true,
            (ParamKind::String, ParamValue::Str(_)) => true,
            (ParamKind::List, ParamValue::List(_)) => true,
            (ParamKind::Map, ParamValue::Map(_)) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Any => "any",
            ParamKind::Bool => "bool",
            ParamKind::Int => "int",
            ParamKind::Float => "float",
            ParamKind::Number => "number",
            ParamKind::String => "string",
            ParamKind::List => "list",
            ParamKind::Map => "map",
        }
    }
}

/// One parameter of a class schema.
///
/// Accepts either the short form `exposure = "float"` or the table form
/// `exposure = { kind = "float", required = true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct ParamSpec {
    pub kind: ParamKind,
    pub required: bool,
}

#[derive(Deserialize)]
struct ParamSpecTable {
    #[serde(default)]
    kind: ParamKind,
    #[serde(default)]
    required: bool,
}

struct ParamSpecVisitor;

impl<'de> Visitor<'de> for ParamSpecVisitor {
    type Value = ParamSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a parameter kind or a { kind, required } table")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<ParamSpec, E> {
        let kind = ParamKind::deserialize(StrDeserializer::<E>::new(value))?;
        Ok(ParamSpec {
            kind,
            required: false,
        })
    }

    // Fields go through the caller's `MapAccess`, so unknown keys stay
    // visible to `serde_ignored`.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<ParamSpec, A::Error> {
        let table = ParamSpecTable::deserialize(MapAccessDeserializer::new(map))?;
        Ok(ParamSpec {
            kind: table.kind,
            required: table.required,
        })
    }
}

impl<'de> Deserialize<'de> for ParamSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ParamSpecVisitor)
    }
}

/// Schema of one driver class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClassSchema {
    #[serde(default)]
    pub init: BTreeMap<String, ParamSpec>,

    #[serde(default)]
    pub properties: BTreeMap<String, ParamSpec>,

    /// Reject `init` parameters the schema does not list
    #[serde(default)]
    pub strict: bool,
}

impl ClassSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_init(mut self, name: impl Into<String>, kind: ParamKind, required: bool) -> Self {
        self.init.insert(name.into(), ParamSpec { kind, required });
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, kind: ParamKind) -> Self {
        self.properties.insert(
            name.into(),
            ParamSpec {
                kind,
                required: false,
            },
        );
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Required `init` parameters missing from `init`.
    pub fn missing_init<'a>(
        &'a self,
        init: &'a BTreeMap<String, ParamValue>,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.init
            .iter()
            .filter(move |(name, spec)| spec.required && !init.contains_key(*name))
            .map(|(name, _)| name.as_str())
    }
}

/// Lookup of class schemas by class name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassRegistry {
    schemas: BTreeMap<String, ClassSchema>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_schemas(schemas: BTreeMap<String, ClassSchema>) -> Self {
        Self { schemas }
    }

    pub fn register(&mut self, class: impl Into<String>, schema: ClassSchema) {
        self.schemas.insert(class.into(), schema);
    }

    pub fn get(&self, class: &str) -> Option<&ClassSchema> {
        self.schemas.get(class)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.schemas.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
