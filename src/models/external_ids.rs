//! Vendor external identifier groups
//!
//! Each vendor block is optional: a missing block means the service has no
//! mapping for that vendor, never "an empty mapping".

use serde::{Deserialize, Serialize};

/// Alternate ids and descriptions one vendor uses for a color
///
/// `ext_ids[i]` pairs with `ext_descrs[i]`. Some vendors publish
/// descriptions without a numeric id, hence `Option<i64>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdGroup {
    pub ext_ids: Vec<Option<i64>>,
    pub ext_descrs: Vec<Vec<String>>,
}

impl ExternalIdGroup {
    /// Check whether the vendor uses this numeric id
    pub fn contains_id(&self, id: i64) -> bool {
        self.ext_ids.contains(&Some(id))
    }

    /// Check whether any description group mentions `text`
    pub fn describes(&self, text: &str) -> bool {
        self.ext_descrs
            .iter()
            .any(|group| group.iter().any(|d| d.contains(text)))
    }
}

/// Per-vendor color mappings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorExternalIds {
    #[serde(rename = "BrickLink", skip_serializing_if = "Option::is_none")]
    pub brick_link: Option<ExternalIdGroup>,
    #[serde(rename = "BrickOwl", skip_serializing_if = "Option::is_none")]
    pub brick_owl: Option<ExternalIdGroup>,
    #[serde(rename = "LEGO", skip_serializing_if = "Option::is_none")]
    pub lego: Option<ExternalIdGroup>,
    #[serde(rename = "Peeron", skip_serializing_if = "Option::is_none")]
    pub peeron: Option<ExternalIdGroup>,
    #[serde(rename = "LDraw", skip_serializing_if = "Option::is_none")]
    pub ldraw: Option<ExternalIdGroup>,
}

/// Per-vendor part numbers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartExternalIds {
    #[serde(rename = "BrickLink", skip_serializing_if = "Option::is_none")]
    pub brick_link: Option<Vec<String>>,
    #[serde(rename = "BrickOwl", skip_serializing_if = "Option::is_none")]
    pub brick_owl: Option<Vec<String>>,
    #[serde(rename = "LEGO", skip_serializing_if = "Option::is_none")]
    pub lego: Option<Vec<String>>,
    #[serde(rename = "LDraw", skip_serializing_if = "Option::is_none")]
    pub ldraw: Option<Vec<String>>,
    #[serde(rename = "Peeron", skip_serializing_if = "Option::is_none")]
    pub peeron: Option<Vec<String>>,
}
