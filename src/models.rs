//! Core data models for microtopo
//!
//! Defines the structures produced by the parser and consumed by the
//! validator, resolver and analyses:
//! - `Component`: one named node of the topology
//! - `Topology`: all components of a document, in document order
//! - Supporting types: `ParamValue`, `ChildRef`, `Dependency`, `Relation`

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

/// A typed initialization parameter or property value.
///
/// `init`, `properties` and `metadata` payloads are class-specific; they keep
/// their YAML shape here and are checked against a
/// [`ClassSchema`](crate::registry::ClassSchema) when one is registered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Human-readable name of the value's shape, used in violation messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "bool",
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Str(_) => "string",
            ParamValue::List(_) => "list",
            ParamValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => write!(f, "null"),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Str(s) => write!(f, "{:?}", s),
            ParamValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ParamValue::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// The three ways a component can name another component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Ownership: the child is created as part of the parent
    Children,
    /// Uses-relationship: the target must exist before the dependent
    Dependencies,
    /// Directed signal influence, not a construction edge
    Affects,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Children => "children",
            Relation::Dependencies => "dependencies",
            Relation::Affects => "affects",
        }
    }

    /// Whether the relation constrains instantiation order.
    pub fn is_construction_edge(&self) -> bool {
        !matches!(self, Relation::Affects)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a component's `children`.
///
/// `slot` is the sub-role when `children` is written as a mapping, and
/// `None` when it is written as a plain sequence of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildRef {
    pub slot: Option<String>,
    pub target: String,
}

/// One entry of a component's `dependencies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Logical axis or function name (e.g. `x`, `focus`)
    pub function: String,
    pub target: String,
}

/// A named node of the topology: one hardware or virtual device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,

    /// Implementing driver, absent for components created by their parent
    pub class: Option<String>,

    pub role: Option<String>,

    /// Immutable construction parameters
    pub init: BTreeMap<String, ParamValue>,

    pub children: Vec<ChildRef>,

    pub dependencies: Vec<Dependency>,

    pub affects: Vec<String>,

    /// Mutable runtime properties and their initial values
    pub properties: BTreeMap<String, ParamValue>,

    /// Descriptive annotations, never interpreted
    pub metadata: BTreeMap<String, ParamValue>,
}

impl Component {
    /// Create a component with only a name; every other field is empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: None,
            role: None,
            init: BTreeMap::new(),
            children: Vec::new(),
            dependencies: Vec::new(),
            affects: Vec::new(),
            properties: BTreeMap::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_child(mut self, slot: impl Into<String>, target: impl Into<String>) -> Self {
        self.children.push(ChildRef {
            slot: Some(slot.into()),
            target: target.into(),
        });
        self
    }

    pub fn with_dependency(
        mut self,
        function: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.dependencies.push(Dependency {
            function: function.into(),
            target: target.into(),
        });
        self
    }

    pub fn with_affects(mut self, target: impl Into<String>) -> Self {
        self.affects.push(target.into());
        self
    }

    pub fn with_init(mut self, key: impl Into<String>, value: ParamValue) -> Self {
        self.init.insert(key.into(), value);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: ParamValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn is_classed(&self) -> bool {
        self.class.is_some()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }

    /// Every name this component refers to, with the relation it uses.
    ///
    /// Order: children, then dependencies, then affects, each in document order.
    pub fn references(&self) -> impl Iterator<Item = (Relation, &str)> {
        let children = self
            .children
            .iter()
            .map(|c| (Relation::Children, c.target.as_str()));
        let deps = self
            .dependencies
            .iter()
            .map(|d| (Relation::Dependencies, d.target.as_str()));
        let affects = self
            .affects
            .iter()
            .map(|a| (Relation::Affects, a.as_str()));
        children.chain(deps).chain(affects)
    }
}

/// All components of one document, in document order.
///
/// Name lookups resolve to the first component carrying the name; a
/// topology assembled by hand may contain duplicates, which the validator
/// reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    components: Vec<Component>,
    index: HashMap<String, usize>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(components: Vec<Component>) -> Self {
        let mut topology = Self::new();
        for component in components {
            topology.push(component);
        }
        topology
    }

    pub fn push(&mut self, component: Component) {
        let position = self.components.len();
        self.index
            .entry(component.name.clone())
            .or_insert(position);
        self.components.push(component);
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.position(name).map(|i| &self.components[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Document position of the first component named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Names that occur more than once, each reported once, in order of
    /// their second occurrence.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for component in &self.components {
            let count = counts.entry(component.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(component.name.clone());
            }
        }
        duplicates
    }

    pub fn find_by_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a Component> + 'a {
        self.components.iter().filter(move |c| c.has_role(role))
    }

    /// Components listing `name` among their `children`.
    pub fn owners_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Component> + 'a {
        self.components
            .iter()
            .filter(move |c| c.children.iter().any(|child| child.target == name))
    }

    /// Components whose `affects` list names `name`.
    pub fn affected_by<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Component> + 'a {
        self.components
            .iter()
            .filter(move |c| c.affects.iter().any(|a| a == name))
    }
}

impl<'a> IntoIterator for &'a Topology {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
