//! User-scoped entities: lists, list items, lost parts, build results

use super::catalog::{Color, InventoryPart, LegoSet, Part};
use serde::{Deserialize, Serialize};

/// Response of the username/password exchange
#[derive(Debug, Clone, Deserialize)]
pub struct UserTokenResponse {
    pub user_token: String,
}

/// A user's part list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartList {
    pub id: i64,
    pub is_buildable: bool,
    pub name: String,
    pub num_parts: u32,
}

/// A user's set list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetList {
    pub id: i64,
    pub is_buildable: bool,
    pub name: String,
    pub num_sets: u32,
}

/// One part/color line of a part list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartListPart {
    pub list_id: i64,
    pub quantity: u32,
    pub part: Part,
    pub color: Color,
}

/// One set line of a set list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetListSet {
    pub list_id: i64,
    pub quantity: u32,
    pub include_spares: bool,
    pub set: LegoSet,
}

/// A part/color the user owns, aggregated over lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPart {
    pub quantity: u32,
    pub part: Part,
    pub color: Color,
}

/// An inventory line the user marked as lost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LostPart {
    pub lost_part_id: i64,
    pub lost_quantity: u32,
    pub inv_part: InventoryPart,
}

/// Server-side estimate of how much of a set the user can build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Parts the set needs, spares excluded
    pub total_parts: u32,
    /// Needed parts the user's inventory cannot cover
    pub num_missing: u32,
    pub pct_owned: Option<f64>,
}

impl BuildResult {
    /// Needed parts the user already has
    pub fn num_owned(&self) -> u32 {
        self.total_parts.saturating_sub(self.num_missing)
    }

    /// Whether nothing is missing
    pub fn is_complete(&self) -> bool {
        self.num_missing == 0
    }
}
