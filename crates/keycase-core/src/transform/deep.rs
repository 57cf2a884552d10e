// Keycase Deep Transform
// Recursive key rewrite over nested mappings and sequences
//
// The walk consumes its input and rebuilds the structure bottom-up. Shape
// is preserved: mappings stay mappings, sequences keep their order and
// length, scalars are returned as they were. Only keys change.

use indexmap::map::Entry;

use super::KeyTransform;
use crate::inflection;
use crate::value::{Key, Mapping, Symbol, Value};
use crate::Convention;

impl KeyTransform {
    /// Rename every key at every depth of `value`
    ///
    /// `Convention::Unaltered` returns the input without walking it.
    ///
    /// # Examples
    /// ```
    /// use keycase_core::{Convention, KeyTransform, Value};
    /// use serde_json::json;
    ///
    /// let transform = KeyTransform::new();
    /// let input = Value::from(json!({ "user_name": "a", "nested_obj": { "first_name": "b" } }));
    /// let output = serde_json::Value::from(transform.apply_convention(input, Convention::Camel));
    /// assert_eq!(output, json!({ "UserName": "a", "NestedObj": { "FirstName": "b" } }));
    /// ```
    pub fn apply_convention(&self, value: Value, convention: Convention) -> Value {
        if convention.is_unaltered() {
            return value;
        }
        walk(value, &|key| self.transform_key(key, convention))
    }
}

/// Underscore every key by calling the inflector directly
///
/// Never reads or fills a cache. Output is identical to
/// `apply_convention(value, Convention::Underscore)`.
#[deprecated(note = "use KeyTransform::apply_convention with Convention::Underscore")]
pub fn legacy_underscore(value: Value) -> Value {
    walk(value, &|key| match key {
        Key::String(s) => Key::String(inflection::underscore(&s)),
        Key::Symbol(sym) => Key::Symbol(Symbol::new(&inflection::underscore(sym.as_str()))),
        index @ Key::Index(_) => index,
    })
}

fn walk<F>(value: Value, rename: &F) -> Value
where
    F: Fn(Key) -> Key,
{
    match value {
        Value::Mapping(map) => Value::Mapping(walk_mapping(map, rename)),
        Value::Sequence(items) => {
            Value::Sequence(items.into_iter().map(|item| walk(item, rename)).collect())
        }
        scalar @ Value::Scalar(_) => scalar,
    }
}

fn walk_mapping<F>(map: Mapping, rename: &F) -> Mapping
where
    F: Fn(Key) -> Key,
{
    let mut out = Mapping::with_capacity(map.len());
    for (key, child) in map {
        let child = walk(child, rename);
        // Two keys can converge (`someKey` and `some_key`); the later wins
        match out.entry(rename(key)) {
            Entry::Occupied(mut slot) => {
                log::debug!("key collision on {}, keeping the later value", slot.key());
                slot.insert(child);
            }
            Entry::Vacant(slot) => {
                slot.insert(child);
            }
        }
    }
    out
}
