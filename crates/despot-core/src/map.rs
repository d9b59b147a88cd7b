mod options;
pub use options::MapOptions;

use crate::{attr::Attributes, schema::Schema};

use indexmap::IndexMap;

/// Filters and remaps `incoming` against `schema`.
///
/// Only declared properties whose value matches the declared type are
/// carried into the output; everything else is silently dropped. When
/// foreign-key resolution is active (see [`MapOptions::foreign_keys_active`]),
/// a property whose own key is absent from `incoming`, or carries the
/// configured default, is populated from its foreign key instead.
///
/// The inputs are never mutated and the call never fails; unknown keys,
/// type mismatches and missing foreign keys all resolve as omission from
/// the output.
pub fn map_attributes(
    incoming: &Attributes,
    schema: &Schema,
    defaults: Option<&Attributes>,
    options: &MapOptions,
) -> Attributes {
    let claims = foreign_key_claims(incoming, schema, defaults, options);

    let mut output = Attributes::with_capacity(schema.len());

    for (key, prop) in schema.props() {
        let mut source = claims.get(key).copied().unwrap_or(key);

        // A raw key claimed as another property's foreign source loses to
        // the property that owns the key outright: that property keeps its
        // own value and the claim falls back to its own key.
        if source != key
            && schema.contains(source)
            && incoming.contains(source)
            && !claims.contains_key(source)
        {
            source = key;
        }

        match incoming.get(source) {
            Some(value) if value.is_a(&prop.ty) => {
                output.insert(key, value.clone());
            }
            _ => {}
        }
    }

    output
}

/// Properties whose foreign key stands in for the property's own key on
/// this call.
///
/// A foreign key is a candidate only while resolution is active, and only
/// when the property's own key is absent from `incoming` or carries the
/// configured default while the foreign key is present.
fn foreign_key_claims<'a>(
    incoming: &Attributes,
    schema: &'a Schema,
    defaults: Option<&Attributes>,
    options: &MapOptions,
) -> IndexMap<&'a str, &'a str> {
    let mut claims = IndexMap::new();

    if !options.foreign_keys_active() {
        return claims;
    }

    for (key, prop) in schema.props() {
        let Some(foreign_key) = prop.foreign_key.as_deref() else {
            continue;
        };

        let has_own = incoming.contains(key);
        let has_default = defaults
            .and_then(|defaults| defaults.get(key))
            .is_some_and(|default| incoming.get(key) == Some(default));

        if !has_own || (has_default && incoming.contains(foreign_key)) {
            claims.insert(key, foreign_key);
        }
    }

    claims
}
