use serde_json::{Map, Value, json};
use vdiskinfo::vim::{PropValue, PropsMap};

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encoding failed: {err}"),
	}
}

/// Project a props map into a JSON object, recursing into parent chains.
pub(crate) fn props_json(props: &PropsMap) -> Value {
	let mut out = Map::new();
	for (name, value) in props {
		out.insert(name.clone(), prop_json(value));
	}
	Value::Object(out)
}

fn prop_json(value: &PropValue) -> Value {
	match value {
		PropValue::Null => Value::Null,
		PropValue::Bool(item) => Value::Bool(*item),
		PropValue::I32(item) => Value::from(*item),
		PropValue::I64(item) => Value::from(*item),
		PropValue::Str(item) => Value::from(item.as_str()),
		PropValue::Ref(item) => json!({ "type": item.kind, "value": item.value }),
		PropValue::CryptoKey(item) => json!({ "keyId": item.key_id, "providerId": item.provider_id }),
		PropValue::Backing(item) => json!({ "kind": item.kind().as_str(), "props": props_json(&item.to_props()) }),
		PropValue::I32List(items) => Value::from(items.clone()),
	}
}

/// Render one property value as a single text fragment.
pub(crate) fn render_prop(value: &PropValue) -> String {
	match value {
		PropValue::Null => "-".to_owned(),
		PropValue::Bool(item) => item.to_string(),
		PropValue::I32(item) => item.to_string(),
		PropValue::I64(item) => item.to_string(),
		PropValue::Str(item) => item.clone(),
		PropValue::Ref(item) => item.as_label(),
		PropValue::CryptoKey(item) => item.as_label(),
		PropValue::Backing(item) => format!("backing[{}]", item.kind().as_str()),
		PropValue::I32List(items) => items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(","),
	}
}
