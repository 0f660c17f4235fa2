use std::io::{self, Write};

use serde_json::{Map, Value};

/// Build `{"event": kind, "command": command, ..fields}`.
///
/// `fields` must be an object; anything else is dropped.
pub fn event(kind: &str, command: &str, fields: Value) -> Value {
    let mut map = Map::new();
    map.insert("event".to_string(), Value::from(kind));
    map.insert("command".to_string(), Value::from(command));
    if let Value::Object(extra) = fields {
        map.extend(extra);
    }
    Value::Object(map)
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    writeln!(out, "{}", line)
}

/// Build an event and write it to stdout.
pub fn emit(kind: &str, command: &str, fields: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event(kind, command, fields))
}
