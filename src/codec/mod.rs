//! Model codec module
//!
//! Converts between wire data and typed values.
//!
//! # Overview
//!
//! - `decode_json` turns a response body into the statically expected
//!   entity type, reporting the operation and entity name on mismatch.
//! - `encode_pairs` flattens a parameter struct into the `(name, value)`
//!   pairs used for query strings and form bodies, in the API's canonical
//!   textual form (`None` omitted, booleans as `1`/`0`).

mod json;
mod params;

pub use json::{decode_json, entity_name};
pub use params::{encode_pairs, form_body, render_scalar};

#[cfg(test)]
mod tests;
