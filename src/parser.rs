//! Topology document parser
//!
//! Turns a YAML mapping of `component name -> descriptor` into a
//! [`Topology`]. Structural problems abort the parse: malformed YAML is a
//! syntax error, a field of the wrong shape is a schema error, and repeated
//! component names are a duplicate-name error. Unknown descriptor fields only
//! produce warnings.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_yaml_ng::Value;

use crate::config::levenshtein;
use crate::error::{TopologyError, TopologyResult};
use crate::models::{ChildRef, Component, Dependency, ParamValue, Topology};

/// Fields a component descriptor may carry.
pub const KNOWN_FIELDS: &[&str] = &[
    "class",
    "role",
    "init",
    "children",
    "dependencies",
    "affects",
    "properties",
    "metadata",
];

/// Non-fatal problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub component: String,
    pub field: String,
    pub suggestion: Option<String>,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown field '{}' in component '{}'",
            self.field, self.component
        )?;
        if let Some(s) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", s)?;
        }
        Ok(())
    }
}

/// Result of a successful parse
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub topology: Topology,
    pub warnings: Vec<ParseWarning>,
}

/// Top level of the document, read without collapsing duplicate keys.
///
/// `serde_yaml_ng::Mapping` rejects a repeated key with a generic message,
/// so entries are collected in a plain list and duplicates are reported
/// as a dedicated error afterwards.
enum RawRoot {
    Empty,
    Entries(Vec<(Value, Value)>),
    NotAMapping(&'static str),
}

impl<'de> Deserialize<'de> for RawRoot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RootVisitor)
    }
}

struct RootVisitor;

impl<'de> Visitor<'de> for RootVisitor {
    type Value = RawRoot;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of component names to descriptors")
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawRoot, E> {
        Ok(RawRoot::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawRoot, E> {
        Ok(RawRoot::Empty)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawRoot, E> {
        Ok(RawRoot::NotAMapping("a boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<RawRoot, E> {
        Ok(RawRoot::NotAMapping("a number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<RawRoot, E> {
        Ok(RawRoot::NotAMapping("a number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<RawRoot, E> {
        Ok(RawRoot::NotAMapping("a number"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<RawRoot, E> {
        Ok(RawRoot::NotAMapping("a string"))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RawRoot, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawRoot::NotAMapping("a sequence"))
    }

    fn visit_map<A>(self, mut map: A) -> Result<RawRoot, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some((key, value)) = map.next_entry::<Value, Value>()? {
            entries.push((key, value));
        }
        Ok(RawRoot::Entries(entries))
    }
}

/// Parse a topology document held in memory.
///
/// `file` is only used for error reporting.
pub fn parse_str(content: &str, file: &Path) -> TopologyResult<ParsedDocument> {
    let root: RawRoot =
        serde_yaml_ng::from_str(content).map_err(|e| TopologyError::Syntax {
            file: file.to_path_buf(),
            line: e.location().map(|l| l.line()),
            column: e.location().map(|l| l.column()),
            message: format_yaml_error(content, &e),
        })?;

    let entries = match root {
        RawRoot::Empty => Vec::new(),
        RawRoot::Entries(entries) => entries,
        RawRoot::NotAMapping(found) => {
            return Err(schema_error(
                file,
                "<document>",
                "<root>",
                format!(
                    "expected a mapping of component names to descriptors, found {}",
                    found
                ),
            ))
        }
    };

    let mut named = Vec::with_capacity(entries.len());
    for (key, body) in entries {
        let name = match untag(&key) {
            Value::String(s) => s.clone(),
            other => {
                return Err(schema_error(
                    file,
                    &render_scalar(other),
                    "<name>",
                    "component names must be strings".to_string(),
                ))
            }
        };
        named.push((name, body));
    }

    ensure_unique_names(file, &named)?;

    let mut document = ParsedDocument::default();
    for (name, body) in named {
        let component = parse_component(file, name, &body, &mut document.warnings)?;
        document.topology.push(component);
    }

    tracing::debug!(
        file = %file.display(),
        components = document.topology.len(),
        warnings = document.warnings.len(),
        "parsed topology"
    );
    Ok(document)
}

/// Parse a topology file from disk.
pub fn parse_file(path: &Path) -> TopologyResult<ParsedDocument> {
    if !path.is_file() {
        return Err(TopologyError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_str(&content, path)
}

fn ensure_unique_names(file: &Path, named: &[(String, Value)]) -> TopologyResult<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for (name, _) in named {
        if !seen.insert(name.as_str()) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(TopologyError::DuplicateName {
            file: file.to_path_buf(),
            names: duplicates,
        })
    }
}

fn parse_component(
    file: &Path,
    name: String,
    body: &Value,
    warnings: &mut Vec<ParseWarning>,
) -> TopologyResult<Component> {
    let mut component = Component::new(name);

    let fields = match untag(body) {
        // `Name:` with nothing under it
        Value::Null => return Ok(component),
        Value::Mapping(m) => m,
        other => {
            return Err(schema_error(
                file,
                &component.name,
                "<descriptor>",
                format!("expected a mapping, found {}", describe(other)),
            ))
        }
    };

    for (key, value) in fields {
        let field = match untag(key) {
            Value::String(s) => s.as_str(),
            other => {
                return Err(schema_error(
                    file,
                    &component.name,
                    &render_scalar(other),
                    "field names must be strings".to_string(),
                ))
            }
        };
        let value = untag(value);
        let fail = |message: String| schema_error(file, &component.name, field, message);

        match field {
            "class" => component.class = optional_string(value).map_err(fail)?,
            "role" => component.role = optional_string(value).map_err(fail)?,
            "init" => component.init = param_map(value).map_err(fail)?,
            "properties" => component.properties = param_map(value).map_err(fail)?,
            "metadata" => component.metadata = param_map(value).map_err(fail)?,
            "children" => component.children = children(value).map_err(fail)?,
            "dependencies" => component.dependencies = dependencies(value).map_err(fail)?,
            "affects" => component.affects = affects(value).map_err(fail)?,
            unknown => warnings.push(ParseWarning {
                component: component.name.clone(),
                field: unknown.to_string(),
                suggestion: suggest_field(unknown),
            }),
        }
    }

    Ok(component)
}

fn optional_string(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(format!("expected a string or null, found {}", describe(other))),
    }
}

fn param_map(value: &Value) -> Result<BTreeMap<String, ParamValue>, String> {
    match value {
        Value::Null => Ok(BTreeMap::new()),
        Value::Mapping(m) => {
            let mut out = BTreeMap::new();
            for (k, v) in m {
                let key = param_key(k)?;
                let converted = to_param(v).map_err(|e| format!("{}: {}", key, e))?;
                insert_unique(&mut out, key, converted)?;
            }
            Ok(out)
        }
        other => Err(format!("expected a mapping, found {}", describe(other))),
    }
}

fn children(value: &Value) -> Result<Vec<ChildRef>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Mapping(m) => {
            let mut seen = HashSet::new();
            m.iter()
                .map(|(slot, target)| {
                    let slot = unique_key(&mut seen, slot)?;
                    let target = component_name(target)
                        .map_err(|e| format!("child '{}': {}", slot, e))?;
                    Ok(ChildRef {
                        slot: Some(slot),
                        target,
                    })
                })
                .collect()
        }
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                Ok(ChildRef {
                    slot: None,
                    target: component_name(item)?,
                })
            })
            .collect(),
        other => Err(format!(
            "expected a mapping or sequence of component names, found {}",
            describe(other)
        )),
    }
}

fn dependencies(value: &Value) -> Result<Vec<Dependency>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Mapping(m) => {
            let mut seen = HashSet::new();
            m.iter()
                .map(|(function, target)| {
                    let function = unique_key(&mut seen, function)?;
                    let target = component_name(target)
                        .map_err(|e| format!("dependency '{}': {}", function, e))?;
                    Ok(Dependency { function, target })
                })
                .collect()
        }
        other => Err(format!(
            "expected a mapping of function names to component names, found {}",
            describe(other)
        )),
    }
}

fn affects(value: &Value) -> Result<Vec<String>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items.iter().map(component_name).collect(),
        other => Err(format!(
            "expected a sequence of component names, found {}",
            describe(other)
        )),
    }
}

fn component_name(value: &Value) -> Result<String, String> {
    match untag(value) {
        Value::String(s) => Ok(s.clone()),
        other => Err(format!(
            "expected a component name (string), found {}",
            describe(other)
        )),
    }
}

fn param_key(key: &Value) -> Result<String, String> {
    match untag(key) {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("keys must be scalars, found {}", describe(other))),
    }
}

/// Keys are compared after conversion to text, so `1` and `"1"` collide.
fn unique_key(seen: &mut HashSet<String>, key: &Value) -> Result<String, String> {
    let key = param_key(key)?;
    if !seen.insert(key.clone()) {
        return Err(duplicate_key(&key));
    }
    Ok(key)
}

fn insert_unique(
    map: &mut BTreeMap<String, ParamValue>,
    key: String,
    value: ParamValue,
) -> Result<(), String> {
    match map.entry(key) {
        Entry::Occupied(entry) => Err(duplicate_key(entry.key())),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

fn duplicate_key(key: &str) -> String {
    format!("key '{}' appears more than once", key)
}

/// Convert a YAML value into the typed parameter union.
pub fn to_param(value: &Value) -> Result<ParamValue, String> {
    Ok(match untag(value) {
        Value::Null => ParamValue::Null,
        Value::Bool(b) => ParamValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => ParamValue::Int(i),
            None if n.is_u64() => {
                return Err(format!("integer {} does not fit in 64 signed bits", n))
            }
            None => ParamValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => ParamValue::Str(s.clone()),
        Value::Sequence(items) => {
            ParamValue::List(items.iter().map(to_param).collect::<Result<_, _>>()?)
        }
        Value::Mapping(m) => {
            let mut out = BTreeMap::new();
            for (k, v) in m {
                insert_unique(&mut out, param_key(k)?, to_param(v)?)?;
            }
            ParamValue::Map(out)
        }
        Value::Tagged(_) => return Err("unsupported nested tag".to_string()),
    })
}

fn untag(value: &Value) -> &Value {
    let mut current = value;
    while let Value::Tagged(tagged) = current {
        current = &tagged.value;
    }
    current
}

fn describe(value: &Value) -> &'static str {
    match untag(value) {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => format!("<{}>", describe(other)),
    }
}

fn schema_error(file: &Path, component: &str, field: &str, message: String) -> TopologyError {
    TopologyError::Schema {
        file: file.to_path_buf(),
        component: component.to_string(),
        field: field.to_string(),
        message,
    }
}

/// Suggest a known field for a misspelled one (at most two edits away).
fn suggest_field(field: &str) -> Option<String> {
    let lowered = field.to_lowercase();
    KNOWN_FIELDS
        .iter()
        .map(|known| (*known, levenshtein(&lowered, known)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(known, _)| known.to_string())
}

fn format_yaml_error(yaml: &str, err: &serde_yaml_ng::Error) -> String {
    let mut message = String::new();

    let err_str = err.to_string();
    match err.location() {
        Some(loc) => message.push_str(&format!("Line {}: Invalid YAML - {}", loc.line(), err_str)),
        None => message.push_str(&format!("Invalid YAML - {}", err_str)),
    }

    if should_hint_colon_quotes(&err_str) {
        message.push_str("\nHint: Strings with colons need quotes: role: \"light: blue\"");
    }
    if yaml.lines().any(|l| l.starts_with('\t')) {
        message.push_str("\nHint: YAML indentation must use spaces, not tabs");
    }

    message
}

fn should_hint_colon_quotes(err_str: &str) -> bool {
    err_str.contains("mapping values are not allowed") || err_str.contains("unexpected ':'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Relation;
    use std::fs;
    use tempfile::tempdir;

    const SECOM: &str = r#"
SimSECOM:
    class: Microscope
    role: secom
    children: [Light, "Optical Objective", Camera, "Sample Stage", "Optical Focus"]

Light:
    class: simulated.Light
    role: light
    affects: [Camera]
    properties:
        power: 0.1

"Optical Objective":
    class: static.OpticalLens
    role: lens
    init:
        mag: 10.0
        na: 0.95
    affects: [Camera]

Camera:
    class: andorcam2.FakeAndorCam2
    role: ccd
    init:
        device: 0
        image: "andorcam2-fake-clara.tiff"
    properties:
        exposureTime: 0.3

"Sample Stage":
    class: simulated.Stage
    role: stage
    init:
        axes: ["x", "y"]
        ranges: {"x": [-0.05, 0.05], "y": [-0.05, 0.05]}
    affects: [Camera]

"Optical Focus":
    class: simulated.Stage
    role: focus
    init: {axes: ["z"]}
    affects: [Camera]
"#;

    fn parse(content: &str) -> TopologyResult<ParsedDocument> {
        parse_str(content, Path::new("test.odm.yaml"))
    }

    #[test]
    fn test_parse_full_document() {
        let doc = parse(SECOM).unwrap();
        let topo = &doc.topology;

        assert_eq!(topo.len(), 6);
        assert!(doc.warnings.is_empty());

        let names: Vec<_> = topo.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "SimSECOM",
                "Light",
                "Optical Objective",
                "Camera",
                "Sample Stage",
                "Optical Focus"
            ]
        );

        let scope = topo.component("SimSECOM").unwrap();
        assert_eq!(scope.class.as_deref(), Some("Microscope"));
        assert_eq!(scope.children.len(), 5);
        assert!(scope.children.iter().all(|c| c.slot.is_none()));

        let lens = topo.component("Optical Objective").unwrap();
        assert_eq!(lens.init.get("mag"), Some(&ParamValue::Float(10.0)));

        let cam = topo.component("Camera").unwrap();
        assert_eq!(cam.init.get("device"), Some(&ParamValue::Int(0)));
        assert_eq!(
            cam.init.get("image").and_then(|v| v.as_str()),
            Some("andorcam2-fake-clara.tiff")
        );

        let stage = topo.component("Sample Stage").unwrap();
        match stage.init.get("ranges") {
            Some(ParamValue::Map(ranges)) => assert_eq!(ranges.len(), 2),
            other => panic!("expected ranges map, got {:?}", other),
        }
        assert_eq!(stage.affects, vec!["Camera".to_string()]);
    }

    #[test]
    fn test_parse_children_mapping_and_dependencies() {
        let doc = parse(
            r#"
"Stage Controller":
    class: tmcm.TMCLController
    role: null
    children: {"x": "Stage X", "y": "Stage Y"}
"Stage X":
    role: stage-x
"Stage Y":
    role: stage-y
"Sample Stage":
    class: actuator.MultiplexActuator
    role: stage
    dependencies: {"x": "Stage X", "y": "Stage Y"}
"#,
        )
        .unwrap();
        let topo = &doc.topology;

        let ctrl = topo.component("Stage Controller").unwrap();
        assert_eq!(ctrl.role, None);
        assert_eq!(
            ctrl.children,
            vec![
                ChildRef {
                    slot: Some("x".to_string()),
                    target: "Stage X".to_string()
                },
                ChildRef {
                    slot: Some("y".to_string()),
                    target: "Stage Y".to_string()
                },
            ]
        );

        let stage = topo.component("Sample Stage").unwrap();
        let refs: Vec<_> = stage.references().collect();
        assert_eq!(
            refs,
            vec![
                (Relation::Dependencies, "Stage X"),
                (Relation::Dependencies, "Stage Y")
            ]
        );
    }

    #[test]
    fn test_parse_empty_document() {
        let doc = parse("").unwrap();
        assert!(doc.topology.is_empty());

        let doc = parse("# only a comment\n").unwrap();
        assert!(doc.topology.is_empty());
    }

    #[test]
    fn test_parse_malformed_yaml_is_syntax_error() {
        let err = parse("Light:\n  class: [unclosed\n").unwrap_err();
        assert!(matches!(err, TopologyError::Syntax { .. }), "got {:?}", err);
    }

    #[test]
    fn test_parse_colon_hint() {
        let err = parse("Light:\n  role: light: blue\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Line"), "should include line number: {}", msg);
        assert!(msg.contains("Hint"), "should include hint: {}", msg);
    }

    #[test]
    fn test_parse_root_must_be_mapping() {
        let err = parse("- Light\n- Camera\n").unwrap_err();
        match err {
            TopologyError::Schema { field, .. } => assert_eq!(field, "<root>"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_affects_must_be_sequence() {
        let err = parse("Light:\n  class: simulated.Light\n  affects: Camera\n").unwrap_err();
        match err {
            TopologyError::Schema {
                component, field, ..
            } => {
                assert_eq!(component, "Light");
                assert_eq!(field, "affects");
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_affects_items_must_be_strings() {
        let err = parse("Light:\n  affects: [Camera, 3]\n").unwrap_err();
        assert!(matches!(err, TopologyError::Schema { ref field, .. } if field == "affects"));
    }

    #[test]
    fn test_parse_init_keys_colliding_as_text() {
        let err = parse("Camera:\n  class: simcam.Camera\n  init: {1: a, \"1\": b}\n").unwrap_err();
        match err {
            TopologyError::Schema { field, message, .. } => {
                assert_eq!(field, "init");
                assert_eq!(message, "key '1' appears more than once");
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_nested_map_keys_colliding_as_text() {
        let err = parse("Stage:\n  init: {ranges: {true: 1, \"true\": 2}}\n").unwrap_err();
        assert!(matches!(err, TopologyError::Schema { ref field, .. } if field == "init"));
    }

    #[test]
    fn test_parse_children_slots_colliding_as_text() {
        let err = parse("Rack:\n  class: R\n  children: {1: B, \"1\": C}\nB: {}\nC: {}\n")
            .unwrap_err();
        match err {
            TopologyError::Schema { field, message, .. } => {
                assert_eq!(field, "children");
                assert!(message.contains("appears more than once"), "{}", message);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_integer_beyond_i64_is_rejected() {
        let err = parse("Camera:\n  init: {serial: 18446744073709551615}\n").unwrap_err();
        match err {
            TopologyError::Schema { field, message, .. } => {
                assert_eq!(field, "init");
                assert!(message.contains("does not fit"), "{}", message);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_large_float_still_a_float() {
        let doc = parse("Camera:\n  init: {gain: 1.0e30}\n").unwrap();
        let camera = doc.topology.component("Camera").unwrap();
        assert_eq!(camera.init.get("gain"), Some(&ParamValue::Float(1.0e30)));
    }

    #[test]
    fn test_parse_class_must_be_string() {
        let err = parse("Light:\n  class: {name: x}\n").unwrap_err();
        assert!(matches!(err, TopologyError::Schema { ref field, .. } if field == "class"));
    }

    #[test]
    fn test_parse_component_body_must_be_mapping() {
        let err = parse("Light: simulated.Light\n").unwrap_err();
        assert!(matches!(err, TopologyError::Schema { ref component, .. } if component == "Light"));
    }

    #[test]
    fn test_parse_duplicate_names() {
        let err = parse(
            "Light:\n  class: a\nCamera:\n  class: b\nLight:\n  affects: 12\n",
        )
        .unwrap_err();
        match err {
            TopologyError::DuplicateName { names, .. } => {
                assert_eq!(names, vec!["Light".to_string()])
            }
            other => panic!("expected duplicate name error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_field_warns_with_suggestion() {
        let doc = parse("Light:\n  class: simulated.Light\n  afects: [Camera]\n  creator: x\n")
            .unwrap();
        assert_eq!(doc.warnings.len(), 2);
        assert_eq!(doc.warnings[0].field, "afects");
        assert_eq!(doc.warnings[0].suggestion.as_deref(), Some("affects"));
        assert_eq!(doc.warnings[1].suggestion, None);
        assert_eq!(
            doc.warnings[0].to_string(),
            "unknown field 'afects' in component 'Light' (did you mean 'affects'?)"
        );
    }

    #[test]
    fn test_parse_null_body_is_empty_component() {
        let doc = parse("Light:\n").unwrap();
        let c = doc.topology.component("Light").unwrap();
        assert_eq!(c, &Component::new("Light"));
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempdir().unwrap();
        let err = parse_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, TopologyError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.odm.yaml");
        fs::write(&path, "Light:\n  affects: Camera\n").unwrap();

        let err = parse_file(&path).unwrap_err();
        assert!(err.to_string().contains("bad.odm.yaml"));
    }
}
