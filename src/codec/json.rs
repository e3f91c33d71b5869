//! JSON response decoding

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Decode a response body into `T`
///
/// Unknown fields are ignored by the model types; a missing required
/// field or a type mismatch becomes `Error::Decode`, whose message names
/// the offending field.
pub fn decode_json<T: DeserializeOwned>(operation: &str, body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| Error::decode(operation, entity_name::<T>(), e.to_string(), body))
}

/// Short, module-free name of a type, e.g. `Page<Color>`
pub fn entity_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut ident = String::new();

    for ch in full.chars() {
        match ch {
            ':' => ident.clear(),
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                out.push_str(&ident);
                ident.clear();
                out.push(ch);
            }
            _ => ident.push(ch),
        }
    }
    out.push_str(&ident);
    out
}
