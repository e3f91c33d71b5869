//! Resource proxies
//!
//! One method per remote operation. Single-entity reads and writes are
//! `async fn`s returning the typed entity; list operations return a
//! [`Pager`](crate::pagination::Pager) so the caller picks between the
//! first page, a lazy item stream, or everything at once.

mod lego;
mod params;
mod users;

pub use lego::LegoApi;
pub use params::{
    DetailsQuery, ListUpdate, MinifigsQuery, NewList, NewLostPart, NewPartListPart, NewSetListSet,
    PageQuery, PartsQuery, SetListSetUpdate, SetPartsQuery, SetsQuery, UserPartsQuery,
};
pub use users::UsersApi;
