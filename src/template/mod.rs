//! Template substitution over arbitrary YAML values
//!
//! Replaces `{{name}}` and `{{name.field}}` placeholders inside strings,
//! rebuilding sequences and mappings structurally. The input is never
//! mutated; substitution always returns a new value. Unresolved
//! placeholders pass through verbatim, which allows staged substitution
//! across nested component instantiations.

pub mod placeholder;

use serde_yaml::{Mapping, Value};

use placeholder::{has_placeholder, pieces, Piece};

/// Substitute placeholders throughout a value against a flat property scope.
///
/// Mapping keys are structural (node tags, prop names) and are left
/// untouched; only values are rewritten.
pub fn substitute_value(value: &Value, scope: &Mapping) -> Value {
    match value {
        Value::String(s) => Value::String(substitute_str(s, scope)),
        Value::Sequence(seq) => {
            Value::Sequence(seq.iter().map(|v| substitute_value(v, scope)).collect())
        }
        Value::Mapping(map) => {
            let mut out = Mapping::new();
            for (key, v) in map {
                out.insert(key.clone(), substitute_value(v, scope));
            }
            Value::Mapping(out)
        }
        other => other.clone(),
    }
}

/// Substitute placeholders in a single string.
pub fn substitute_str(input: &str, scope: &Mapping) -> String {
    if !has_placeholder(input) {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    for piece in pieces(input) {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Placeholder { raw, ident, field } => match scope.get(ident) {
                Some(value) => match field {
                    Some(field) => {
                        // Dotted access only reaches into mappings
                        let resolved = value
                            .as_mapping()
                            .and_then(|m| m.get(field))
                            .map(stringify)
                            .unwrap_or_default();
                        out.push_str(&resolved);
                    }
                    None => out.push_str(&stringify(value)),
                },
                // Absent identifiers stay literal for later passes
                None => out.push_str(raw),
            },
        }
    }
    out
}

/// Render a scope value into placeholder output.
///
/// Scalars print naturally; null and structured values print as nothing,
/// since there is no meaningful inline rendering for them.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
