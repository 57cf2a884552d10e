// Keycase Value Model
// Nested mappings, sequences and scalars whose keys can be transformed

mod json;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Ordered mapping of keys to nested values
pub type Mapping = IndexMap<Key, Value>;

/// Interned, symbol-like key
///
/// Cloning a symbol only bumps a reference count, so payloads that reuse
/// the same field names across many records share one allocation per name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Arc<str>> for Symbol {
    fn from(name: Arc<str>) -> Self {
        Self(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single mapping key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Owned string key
    String(String),
    /// Interned symbol key
    Symbol(Symbol),
    /// Integer key; not an identifier, never renamed
    Index(i64),
}

impl Key {
    /// Text of the key if it is an identifier (string or symbol)
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            Key::Symbol(sym) => Some(sym.as_str()),
            Key::Index(_) => None,
        }
    }

    pub fn symbol(name: &str) -> Self {
        Key::Symbol(Symbol::new(name))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<Symbol> for Key {
    fn from(sym: Symbol) -> Self {
        Key::Symbol(sym)
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(s) => f.write_str(s),
            Key::Symbol(sym) => write!(f, ":{}", sym),
            Key::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Leaf value, never inspected by a key transform
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// Nested structure: a mapping, a sequence, or a scalar leaf
///
/// Values are owned trees, so a structure can never contain itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Mapping(Mapping),
    Sequence(Vec<Value>),
    Scalar(Scalar),
}

impl Value {
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Look up a string-keyed entry of a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?.get(&Key::from(key))
    }

    /// Type name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Scalar(_) => "scalar",
        }
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_identifier() {
        assert_eq!(Key::from("user_name").identifier(), Some("user_name"));
        assert_eq!(Key::symbol("user_name").identifier(), Some("user_name"));
        assert_eq!(Key::from(3i64).identifier(), None);
    }

    #[test]
    fn test_string_and_symbol_keys_are_distinct() {
        let mut map = Mapping::new();
        map.insert(Key::from("id"), Value::from(1i64));
        map.insert(Key::symbol("id"), Value::from(2i64));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_symbol_clone_shares_allocation() {
        let sym = Symbol::new("first_name");
        let copy = sym.clone();
        assert!(Arc::ptr_eq(&sym.0, &copy.0));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::from("a").to_string(), "a");
        assert_eq!(Key::symbol("a").to_string(), ":a");
        assert_eq!(Key::from(7i64).to_string(), "7");
    }

    #[test]
    fn test_value_accessors() {
        let mut map = Mapping::new();
        map.insert(Key::from("name"), Value::from("x"));
        let value = Value::from(map);

        assert_eq!(value.kind(), "mapping");
        assert_eq!(value.get("name"), Some(&Value::from("x")));
        assert!(value.get("missing").is_none());
        assert!(value.as_sequence().is_none());
        assert_eq!(Value::null().as_scalar(), Some(&Scalar::Null));
    }
}
