//! Composite keys.
//!
//! Layout: `U+0000` + object type + `U+0000`, then every attribute followed
//! by `U+0000`:
//!
//! ```text
//! create_composite_key("contract", &["C1"])  →  "\0contract\0C1\0"
//! create_composite_key("contract", &[])      →  "\0contract\0"
//! ```
//!
//! Components may not contain the separator, and every attribute is
//! terminated, so the encoding is injective: distinct (type, attributes)
//! never share a key. The attribute-less key of a type is a prefix of every
//! key of that type and can be handed to `KVStore::scan`.

use crate::error::KVError;

/// Separator, and first character of every composite key.
pub const COMPOSITE_KEY_NAMESPACE: char = '\u{0}';

/// Reserved as an upper bound for range queries; not allowed in components.
const MAX_UNICODE_RUNE: char = '\u{10FFFF}';

/// Build a composite key from an object type and its attributes.
pub fn create_composite_key(object_type: &str, attributes: &[&str]) -> Result<String, KVError> {
    validate_component(object_type)?;

    let len = object_type.len() + attributes.iter().map(|a| a.len() + 1).sum::<usize>() + 2;
    let mut key = String::with_capacity(len);
    key.push(COMPOSITE_KEY_NAMESPACE);
    key.push_str(object_type);
    key.push(COMPOSITE_KEY_NAMESPACE);

    for attribute in attributes {
        validate_component(attribute)?;
        key.push_str(attribute);
        key.push(COMPOSITE_KEY_NAMESPACE);
    }

    Ok(key)
}

/// Split a composite key back into its object type and attributes.
pub fn split_composite_key(key: &str) -> Result<(String, Vec<String>), KVError> {
    let body = key
        .strip_prefix(COMPOSITE_KEY_NAMESPACE)
        .and_then(|rest| rest.strip_suffix(COMPOSITE_KEY_NAMESPACE))
        .ok_or_else(|| KVError::InvalidKey(format!("{:?} is not a composite key", key)))?;

    let mut parts = body.split(COMPOSITE_KEY_NAMESPACE).map(str::to_string);
    // split always yields at least one item.
    let object_type = parts.next().unwrap_or_default();
    Ok((object_type, parts.collect()))
}

fn validate_component(component: &str) -> Result<(), KVError> {
    for ch in [COMPOSITE_KEY_NAMESPACE, MAX_UNICODE_RUNE] {
        if component.contains(ch) {
            return Err(KVError::InvalidKey(format!(
                "{:?} contains reserved character U+{:04X}",
                component, ch as u32
            )));
        }
    }
    Ok(())
}
