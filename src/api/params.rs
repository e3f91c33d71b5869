//! Query filters and request bodies
//!
//! Every field is optional unless the endpoint requires it; unset fields
//! are left out of the request entirely. Flags go out as `1`/`0`.

use serde::Serialize;

/// Page selection shared by every list operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    /// 1-based page number to start from
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Field to order by; prefix with `-` for descending
    pub ordering: Option<String>,
}

impl PageQuery {
    /// Request pages of `page_size` items
    pub fn size(page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Order results by `field`
    #[must_use]
    pub fn ordering(mut self, field: impl Into<String>) -> Self {
        self.ordering = Some(field.into());
        self
    }
}

/// Filters for the part catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartsQuery {
    pub search: Option<String>,
    pub part_num: Option<String>,
    /// Sent comma-separated
    pub part_nums: Option<Vec<String>>,
    pub part_cat_id: Option<i64>,
    pub color_id: Option<i64>,
    pub bricklink_id: Option<String>,
    pub brickowl_id: Option<String>,
    pub lego_id: Option<String>,
    pub ldraw_id: Option<String>,
    pub inc_part_details: Option<bool>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl PartsQuery {
    /// Full-text search
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Filters for the set catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetsQuery {
    pub search: Option<String>,
    pub theme_id: Option<i64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_parts: Option<u32>,
    pub max_parts: Option<u32>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl SetsQuery {
    /// Full-text search
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Options for a set inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetPartsQuery {
    pub inc_part_details: Option<bool>,
    pub inc_color_details: Option<bool>,
    /// Also list the parts of the set's minifigs; their lines carry the
    /// minifig's `fig-` number
    pub inc_minifig_parts: Option<bool>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl SetPartsQuery {
    /// Include or leave out minifig parts
    pub fn minifig_parts(include: bool) -> Self {
        Self {
            inc_minifig_parts: Some(include),
            ..Self::default()
        }
    }
}

/// Detail flags for part-line listings (minifig parts, list items)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailsQuery {
    pub inc_part_details: Option<bool>,
    pub inc_color_details: Option<bool>,
    #[serde(flatten)]
    pub page: PageQuery,
}

/// Filters for the minifig catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MinifigsQuery {
    pub search: Option<String>,
    pub min_parts: Option<u32>,
    pub max_parts: Option<u32>,
    pub in_set_num: Option<String>,
    pub in_theme_id: Option<i64>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl MinifigsQuery {
    /// Minifigs contained in `set_num`
    pub fn in_set(set_num: impl Into<String>) -> Self {
        Self {
            in_set_num: Some(set_num.into()),
            ..Self::default()
        }
    }
}

/// Filters for a user's owned parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPartsQuery {
    pub part_num: Option<String>,
    pub part_cat_id: Option<i64>,
    pub color_id: Option<i64>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl UserPartsQuery {
    /// Only parts in `color_id`
    pub fn color(color_id: i64) -> Self {
        Self {
            color_id: Some(color_id),
            ..Self::default()
        }
    }
}

/// Credentials for the user token exchange
#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// A new part list or set list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewList {
    pub name: String,
    /// Whether the list counts towards "can I build it" calculations
    pub is_buildable: bool,
}

impl NewList {
    /// A buildable list called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_buildable: true,
        }
    }
}

/// Partial update of a part list or set list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListUpdate {
    pub name: Option<String>,
    pub is_buildable: Option<bool>,
}

/// A part/color line to add to a part list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPartListPart {
    pub part_num: String,
    pub color_id: i64,
    pub quantity: u32,
}

/// Quantity change for an existing part-list line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct QuantityUpdate {
    pub quantity: u32,
}

/// A set to add to a set list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSetListSet {
    pub set_num: String,
    pub quantity: Option<u32>,
    pub include_spares: Option<bool>,
}

impl NewSetListSet {
    /// One copy of `set_num`, server defaults for the rest
    pub fn new(set_num: impl Into<String>) -> Self {
        Self {
            set_num: set_num.into(),
            quantity: None,
            include_spares: None,
        }
    }
}

/// Partial update of a set-list line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetListSetUpdate {
    pub quantity: Option<u32>,
    pub include_spares: Option<bool>,
}

/// An inventory line to mark as lost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLostPart {
    /// `inv_part_id` of an [`InventoryPart`](crate::models::InventoryPart)
    pub inv_part_id: i64,
    pub lost_quantity: Option<u32>,
}

impl NewLostPart {
    /// Mark one piece of `inv_part_id` as lost
    pub fn new(inv_part_id: i64) -> Self {
        Self {
            inv_part_id,
            lost_quantity: None,
        }
    }
}
