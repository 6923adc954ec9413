use serde_json::Value;
use std::collections::BTreeMap;

/// Flattens a JSON tree into dotted paths of its non-null leaves, which for a
/// vehicle message is exactly the set of fields that are present.
pub fn present_fields(value: &Value) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    collect(value, &mut String::new(), &mut out);
    out
}

fn collect(value: &Value, path: &mut String, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                let len = path.len();
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(key);
                collect(child, path, out);
                path.truncate(len);
            }
        }
        leaf => {
            out.insert(path.clone(), leaf.clone());
        }
    }
}
