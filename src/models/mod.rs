//! Typed entities
//!
//! Every entity is an immutable snapshot of remote state at fetch time.
//! Related entities are embedded by value (an `Element` owns its `Part`
//! and `Color`); nothing points back.
//!
//! Fields the service may omit are `Option` and stay `None` unless the
//! response carried them. Unknown fields are ignored.

mod catalog;
mod external_ids;
mod users;

pub use catalog::{
    Color, Element, InventoryPart, LegoSet, Minifig, MinifigSet, Part, PartCategory, PartColor,
    PartColorDetail, SetAlternate, SetMinifig, Theme,
};
pub use external_ids::{ColorExternalIds, ExternalIdGroup, PartExternalIds};
pub use users::{
    BuildResult, LostPart, PartList, PartListPart, SetList, SetListSet, UserPart, UserTokenResponse,
};
