//! Layering of configuration files.
//!
//! The local override file is applied over the project file before the
//! result is deserialized:
//!
//! - `sources` in an override replaces the whole chain
//! - `default_locale` (or any other scalar) replaces the project value
//! - `~` clears a key, e.g. `default_locale: ~` drops the fallback locale
//! - nested mappings are layered key by key

use serde_yaml::{Mapping, Value};

/// Key holding the resolver chain.
pub const SOURCES_KEY: &str = "sources";

/// Apply one override layer on top of a base config value.
///
/// A chain is never concatenated across layers: attaching the project's
/// sources and then the override's would register the same kind of source
/// twice at different priorities.
pub fn apply_override(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut layered = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            if layered.remove(key).is_some() {
                tracing::debug!("Override clears '{}'", key_label(key));
            }
            continue;
        }

        let next = match layered.get(key) {
            Some(existing) if key.as_str() != Some(SOURCES_KEY) => apply_override(existing, value),
            Some(_) => {
                tracing::debug!(
                    "Override replaces the source chain ({} entries)",
                    value.as_sequence().map_or(0, Vec::len)
                );
                value.clone()
            }
            None => value.clone(),
        };
        layered.insert(key.clone(), next);
    }

    Value::Mapping(layered)
}

/// Layer config values from lowest to highest precedence.
pub fn layer_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            apply_override(&acc, layer)
        })
}

fn key_label(key: &Value) -> String {
    key.as_str()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{:?}", key))
}
