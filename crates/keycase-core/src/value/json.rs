// Conversions between the value model and serde_json

use serde_json::Value as Json;

use super::{Key, Mapping, Scalar, Value};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Scalar(Scalar::Null),
            Json::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            Json::Number(n) => Value::Scalar(Scalar::Number(n)),
            Json::String(s) => Value::Scalar(Scalar::String(s)),
            Json::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Json::Object(object) => Value::Mapping(
                object
                    .into_iter()
                    .map(|(key, value)| (Key::String(key), Value::from(value)))
                    .collect::<Mapping>(),
            ),
        }
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(Scalar::Null) => Json::Null,
            Value::Scalar(Scalar::Bool(b)) => Json::Bool(b),
            Value::Scalar(Scalar::Number(n)) => Json::Number(n),
            Value::Scalar(Scalar::String(s)) => Json::String(s),
            Value::Sequence(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Mapping(map) => Json::Object(
                map.into_iter()
                    .map(|(key, value)| (key_text(key), Json::from(value)))
                    .collect(),
            ),
        }
    }
}

// JSON object keys are always strings
fn key_text(key: Key) -> String {
    match key {
        Key::String(s) => s,
        Key::Symbol(sym) => sym.as_str().to_string(),
        Key::Index(i) => i.to_string(),
    }
}
