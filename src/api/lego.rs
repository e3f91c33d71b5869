//! Catalog operations (`/lego/...`)
//!
//! Read-only; the API key is the only credential needed.

use super::params::{DetailsQuery, MinifigsQuery, PageQuery, PartsQuery, SetPartsQuery, SetsQuery};
use crate::error::Result;
use crate::http::{ApiRequest, HttpClient};
use crate::models::{
    Color, Element, InventoryPart, LegoSet, Minifig, MinifigSet, Part, PartCategory, PartColor,
    PartColorDetail, SetAlternate, SetMinifig, Theme,
};
use crate::pagination::Pager;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Catalog resource proxy
#[derive(Debug, Clone)]
pub struct LegoApi {
    http: HttpClient,
    timeout: Option<Duration>,
}

impl LegoApi {
    /// Create a proxy over a shared transport
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            timeout: None,
        }
    }

    /// A copy of this proxy whose calls use `timeout` as their deadline
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            http: self.http.clone(),
            timeout: Some(timeout),
        }
    }

    fn request(&self, operation: &'static str, path: &'static str) -> ApiRequest {
        ApiRequest::get(operation, path).timeout(self.timeout)
    }

    fn pager<T>(&self, request: ApiRequest) -> Pager<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        Pager::new(self.http.clone(), request)
    }

    // ------------------------------------------------------------------
    // Colors
    // ------------------------------------------------------------------

    /// List all colors
    pub fn list_colors(&self, query: &PageQuery) -> Pager<Color> {
        self.pager(self.request("list_colors", "/lego/colors/").query(query))
    }

    /// Get a color by id
    pub async fn get_color(&self, id: i64) -> Result<Color> {
        self.http
            .execute(self.request("get_color", "/lego/colors/{id}/").path_param("id", id))
            .await
    }

    // ------------------------------------------------------------------
    // Elements and parts
    // ------------------------------------------------------------------

    /// Get an element by its LEGO element id
    pub async fn get_element(&self, element_id: &str) -> Result<Element> {
        self.http
            .execute(
                self.request("get_element", "/lego/elements/{element_id}/")
                    .path_param("element_id", element_id),
            )
            .await
    }

    /// Search the part catalog
    pub fn list_parts(&self, query: &PartsQuery) -> Pager<Part> {
        self.pager(self.request("list_parts", "/lego/parts/").query(query))
    }

    /// Get a part by part number
    pub async fn get_part(&self, part_num: &str) -> Result<Part> {
        self.http
            .execute(
                self.request("get_part", "/lego/parts/{part_num}/")
                    .path_param("part_num", part_num),
            )
            .await
    }

    /// List the colors a part has appeared in
    pub fn list_part_colors(&self, part_num: &str, query: &PageQuery) -> Pager<PartColor> {
        self.pager(
            self.request("list_part_colors", "/lego/parts/{part_num}/colors/")
                .path_param("part_num", part_num)
                .query(query),
        )
    }

    /// Get details about one part/color combination
    pub async fn get_part_color(&self, part_num: &str, color_id: i64) -> Result<PartColorDetail> {
        self.http
            .execute(
                self.request("get_part_color", "/lego/parts/{part_num}/colors/{color_id}/")
                    .path_param("part_num", part_num)
                    .path_param("color_id", color_id),
            )
            .await
    }

    /// List the sets a part/color combination appears in
    pub fn list_part_color_sets(
        &self,
        part_num: &str,
        color_id: i64,
        query: &PageQuery,
    ) -> Pager<LegoSet> {
        self.pager(
            self.request(
                "list_part_color_sets",
                "/lego/parts/{part_num}/colors/{color_id}/sets/",
            )
            .path_param("part_num", part_num)
            .path_param("color_id", color_id)
            .query(query),
        )
    }

    // ------------------------------------------------------------------
    // Sets
    // ------------------------------------------------------------------

    /// Search the set catalog
    pub fn list_sets(&self, query: &SetsQuery) -> Pager<LegoSet> {
        self.pager(self.request("list_sets", "/lego/sets/").query(query))
    }

    /// Get a set by set number (e.g. `31124-1`)
    pub async fn get_set(&self, set_num: &str) -> Result<LegoSet> {
        self.http
            .execute(
                self.request("get_set", "/lego/sets/{set_num}/")
                    .path_param("set_num", set_num),
            )
            .await
    }

    /// List alternate builds (MOCs) of a set
    pub fn list_set_alternates(&self, set_num: &str, query: &PageQuery) -> Pager<SetAlternate> {
        self.pager(
            self.request("list_set_alternates", "/lego/sets/{set_num}/alternates/")
                .path_param("set_num", set_num)
                .query(query),
        )
    }

    /// List a set's inventory
    pub fn list_set_parts(&self, set_num: &str, query: &SetPartsQuery) -> Pager<InventoryPart> {
        self.pager(
            self.request("list_set_parts", "/lego/sets/{set_num}/parts/")
                .path_param("set_num", set_num)
                .query(query),
        )
    }

    /// List the minifigs in a set
    pub fn list_set_minifigs(&self, set_num: &str, query: &PageQuery) -> Pager<SetMinifig> {
        self.pager(
            self.request("list_set_minifigs", "/lego/sets/{set_num}/minifigs/")
                .path_param("set_num", set_num)
                .query(query),
        )
    }

    // ------------------------------------------------------------------
    // Minifigs
    // ------------------------------------------------------------------

    /// Search the minifig catalog
    pub fn list_minifigs(&self, query: &MinifigsQuery) -> Pager<Minifig> {
        self.pager(self.request("list_minifigs", "/lego/minifigs/").query(query))
    }

    /// Get a minifig by its `fig-` number
    pub async fn get_minifig(&self, set_num: &str) -> Result<Minifig> {
        self.http
            .execute(
                self.request("get_minifig", "/lego/minifigs/{set_num}/")
                    .path_param("set_num", set_num),
            )
            .await
    }

    /// List a minifig's inventory
    pub fn list_minifig_parts(&self, set_num: &str, query: &DetailsQuery) -> Pager<InventoryPart> {
        self.pager(
            self.request("list_minifig_parts", "/lego/minifigs/{set_num}/parts/")
                .path_param("set_num", set_num)
                .query(query),
        )
    }

    /// List the sets a minifig appears in
    pub fn list_minifig_sets(&self, set_num: &str, query: &PageQuery) -> Pager<MinifigSet> {
        self.pager(
            self.request("list_minifig_sets", "/lego/minifigs/{set_num}/sets/")
                .path_param("set_num", set_num)
                .query(query),
        )
    }

    // ------------------------------------------------------------------
    // Themes and categories
    // ------------------------------------------------------------------

    /// List all themes
    pub fn list_themes(&self, query: &PageQuery) -> Pager<Theme> {
        self.pager(self.request("list_themes", "/lego/themes/").query(query))
    }

    /// Get a theme by id
    pub async fn get_theme(&self, id: i64) -> Result<Theme> {
        self.http
            .execute(self.request("get_theme", "/lego/themes/{id}/").path_param("id", id))
            .await
    }

    /// List all part categories
    pub fn list_part_categories(&self, query: &PageQuery) -> Pager<PartCategory> {
        self.pager(
            self.request("list_part_categories", "/lego/part_categories/")
                .query(query),
        )
    }

    /// Get a part category by id
    pub async fn get_part_category(&self, id: i64) -> Result<PartCategory> {
        self.http
            .execute(
                self.request("get_part_category", "/lego/part_categories/{id}/")
                    .path_param("id", id),
            )
            .await
    }
}
