//! Catalog entities: colors, parts, elements, sets, minifigs, themes

use super::external_ids::{ColorExternalIds, PartExternalIds};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Set numbers of minifigs start with this prefix
const MINIFIG_PREFIX: &str = "fig-";

/// A catalog color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Color id; `-1` is "[Unknown]"
    pub id: i64,
    pub name: String,
    /// Hex RGB without the leading `#`
    pub rgb: String,
    pub is_trans: bool,
    /// Absent when the response was requested without color details
    pub external_ids: Option<ColorExternalIds>,
}

/// A catalog part
///
/// Detail endpoints fill `year_from`, `prints`, `molds` and `alternates`;
/// parts embedded in inventories usually leave them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Part number, e.g. `3065pr0006`; opaque, never numeric
    pub part_num: String,
    pub name: String,
    pub part_cat_id: i64,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub part_url: String,
    pub part_img_url: Option<String>,
    pub prints: Option<Vec<String>>,
    pub molds: Option<Vec<String>>,
    pub alternates: Option<Vec<String>>,
    pub external_ids: Option<PartExternalIds>,
    /// Base part this one is a print of
    pub print_of: Option<String>,
}

/// A specific part in a specific color, as sold by LEGO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub element_id: String,
    pub design_id: Option<String>,
    pub part: Part,
    pub color: Color,
    pub element_img_url: Option<String>,
    pub part_img_url: Option<String>,
}

/// One color a part is available in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartColor {
    pub color_id: i64,
    pub color_name: String,
    pub num_sets: u32,
    pub num_set_parts: u32,
    pub part_img_url: Option<String>,
    pub elements: Vec<String>,
}

/// Details of one part/color combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartColorDetail {
    pub part_img_url: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub num_sets: u32,
    pub num_set_parts: u32,
    pub elements: Vec<String>,
}

/// A catalog set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegoSet {
    /// Set number including the version suffix, e.g. `31124-1`
    pub set_num: String,
    pub name: String,
    pub year: i32,
    pub theme_id: i64,
    pub num_parts: u32,
    pub set_img_url: Option<String>,
    pub set_url: String,
    pub last_modified_dt: DateTime<Utc>,
}

/// An alternate build (MOC) that can be made from a set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAlternate {
    pub set_num: String,
    pub name: String,
    pub year: i32,
    pub theme_id: i64,
    pub num_parts: u32,
    pub moc_img_url: Option<String>,
    pub moc_url: String,
    pub designer_name: String,
    pub designer_url: String,
}

/// One line of a set or minifig inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryPart {
    pub id: i64,
    pub inv_part_id: i64,
    pub part: Part,
    pub color: Color,
    /// Owning inventory; a `fig-` number when the part comes from a minifig
    pub set_num: String,
    pub quantity: u32,
    pub is_spare: bool,
    pub element_id: Option<String>,
    pub num_sets: u32,
}

impl InventoryPart {
    /// Whether this line was contributed by a minifig in the set
    pub fn is_minifig_part(&self) -> bool {
        self.set_num.starts_with(MINIFIG_PREFIX)
    }
}

/// A minifig included in a set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMinifig {
    pub id: i64,
    pub set_num: String,
    pub set_name: String,
    pub quantity: u32,
    pub set_img_url: Option<String>,
}

/// A catalog minifig
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minifig {
    pub set_num: String,
    pub name: String,
    pub num_parts: u32,
    pub set_img_url: Option<String>,
    pub set_url: String,
    pub last_modified_dt: Option<DateTime<Utc>>,
}

/// A set a minifig appears in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifigSet {
    pub set_num: String,
    pub name: String,
    pub num_parts: u32,
    pub set_img_url: Option<String>,
    pub set_url: String,
}

/// A set theme; themes nest through `parent_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
}

/// A part category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartCategory {
    pub id: i64,
    pub name: String,
    pub part_count: u32,
}
