use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

pub mod prefs;
pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    prefs::current()
}

/// Arrays become one row per item. Objects whose values are arrays of
/// records (snapshot groups, rule lists) are rendered section by section;
/// other objects become key/value tables.
fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_records(items),
        Value::Object(map) if has_record_lists(map) => render_sections(map),
        Value::Object(map) => render_key_values(map),
        scalar => table::render_rows(&["value"], &[vec![cell(scalar)]], options()),
    }
}

fn has_record_lists(map: &Map<String, Value>) -> bool {
    map.values().any(|v| {
        v.is_array() || v.as_object().is_some_and(|inner| inner.values().any(Value::is_array))
    })
}

fn render_sections(map: &Map<String, Value>) -> String {
    let mut scalars = Map::new();
    let mut sections = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) => sections.push(format!("[{key}]\n{}", render_records(items))),
            Value::Object(inner) if inner.values().any(Value::is_array) => {
                for (name, items) in inner {
                    if let Value::Array(items) = items {
                        sections.push(format!("[{key}.{name}]\n{}", render_records(items)));
                    }
                }
            }
            Value::Object(inner) => flatten_into(&mut scalars, key, inner),
            other => {
                scalars.insert(key.clone(), other.clone());
            }
        }
    }

    let mut out = Vec::with_capacity(sections.len() + 1);
    if !scalars.is_empty() {
        out.push(render_key_values(&scalars));
    }
    out.extend(sections);
    out.join("\n\n")
}

fn flatten_into(target: &mut Map<String, Value>, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let name = format!("{prefix}.{key}");
        match value {
            Value::Object(inner) => flatten_into(target, &name, inner),
            other => {
                target.insert(name, other.clone());
            }
        }
    }
}

fn render_key_values(map: &Map<String, Value>) -> String {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let rows: Vec<Vec<String>> = entries
        .into_iter()
        .map(|(key, value)| vec![key.clone(), cell(value)])
        .collect();
    table::render_rows(&["key", "value"], &rows, options())
}

fn render_records(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![cell(item)]).collect();
        return table::render_rows(&["value"], &rows, options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect();
    table::render_rows(&header_refs, &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
