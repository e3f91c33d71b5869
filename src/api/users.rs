//! User-scoped operations (`/users/{user_token}/...`)
//!
//! Everything except the token exchange needs a [`UserToken`] in addition
//! to the API key. Writes are sent as form bodies.

use super::params::{
    Credentials, DetailsQuery, ListUpdate, NewList, NewLostPart, NewPartListPart, NewSetListSet,
    PageQuery, QuantityUpdate, SetListSetUpdate, SetsQuery, UserPartsQuery,
};
use crate::auth::UserToken;
use crate::error::{Error, Result};
use crate::http::{ApiRequest, HttpClient};
use crate::models::{
    BuildResult, LostPart, PartList, PartListPart, SetList, SetListSet, UserPart,
    UserTokenResponse,
};
use crate::pagination::Pager;
use crate::types::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const PARTLISTS: &str = "/users/{user_token}/partlists/";
const PARTLIST: &str = "/users/{user_token}/partlists/{list_id}/";
const PARTLIST_PARTS: &str = "/users/{user_token}/partlists/{list_id}/parts/";
const PARTLIST_PART: &str = "/users/{user_token}/partlists/{list_id}/parts/{part_num}/{color_id}/";
const SETLISTS: &str = "/users/{user_token}/setlists/";
const SETLIST: &str = "/users/{user_token}/setlists/{list_id}/";
const SETLIST_SETS: &str = "/users/{user_token}/setlists/{list_id}/sets/";
const SETLIST_SET: &str = "/users/{user_token}/setlists/{list_id}/sets/{set_num}/";
const LOST_PARTS: &str = "/users/{user_token}/lost_parts/";

/// User resource proxy
#[derive(Debug, Clone)]
pub struct UsersApi {
    http: HttpClient,
    timeout: Option<Duration>,
}

impl UsersApi {
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

    fn request(
        &self,
        operation: &'static str,
        method: Method,
        path: &'static str,
        token: &UserToken,
    ) -> ApiRequest {
        ApiRequest::new(operation, method, path)
            .path_param("user_token", token.as_str())
            .timeout(self.timeout)
    }

    fn pager<T>(&self, request: ApiRequest) -> Pager<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        Pager::new(self.http.clone(), request)
    }

    // ------------------------------------------------------------------
    // Token exchange
    // ------------------------------------------------------------------

    /// Exchange a username (or email) and password for a user token
    ///
    /// Rejected credentials come back as `Error::Auth`. The token does not
    /// expire on its own and is never refreshed by the client.
    pub async fn create_user_token(&self, username: &str, password: &str) -> Result<UserToken> {
        const OPERATION: &str = "create_user_token";

        if username.trim().is_empty() {
            return Err(Error::validation(OPERATION, "username", "must not be empty"));
        }
        if password.is_empty() {
            return Err(Error::validation(OPERATION, "password", "must not be empty"));
        }

        let request = ApiRequest::post(OPERATION, "/users/_token/")
            .form(&Credentials { username, password })
            .timeout(self.timeout);

        let response: UserTokenResponse = self
            .http
            .execute(request)
            .await
            .map_err(Error::into_auth_failure)?;

        debug!("Obtained user token");
        Ok(UserToken::new(response.user_token))
    }

    // ------------------------------------------------------------------
    // Part lists
    // ------------------------------------------------------------------

    /// List the user's part lists
    pub fn list_partlists(&self, token: &UserToken, query: &PageQuery) -> Pager<PartList> {
        self.pager(
            self.request("list_partlists", Method::GET, PARTLISTS, token)
                .query(query),
        )
    }

    /// Create a part list
    pub async fn create_partlist(&self, token: &UserToken, list: &NewList) -> Result<PartList> {
        check_name("create_partlist", &list.name)?;
        self.http
            .execute(
                self.request("create_partlist", Method::POST, PARTLISTS, token)
                    .form(list),
            )
            .await
    }

    /// Get a part list
    pub async fn get_partlist(&self, token: &UserToken, list_id: i64) -> Result<PartList> {
        self.http
            .execute(
                self.request("get_partlist", Method::GET, PARTLIST, token)
                    .path_param("list_id", list_id),
            )
            .await
    }

    /// Update a part list's name or buildability
    pub async fn update_partlist(
        &self,
        token: &UserToken,
        list_id: i64,
        update: &ListUpdate,
    ) -> Result<PartList> {
        if let Some(name) = &update.name {
            check_name("update_partlist", name)?;
        }
        self.http
            .execute(
                self.request("update_partlist", Method::PATCH, PARTLIST, token)
                    .path_param("list_id", list_id)
                    .form(update),
            )
            .await
    }

    /// Delete a part list
    pub async fn delete_partlist(&self, token: &UserToken, list_id: i64) -> Result<()> {
        self.http
            .execute_unit(
                self.request("delete_partlist", Method::DELETE, PARTLIST, token)
                    .path_param("list_id", list_id),
            )
            .await
    }

    // ------------------------------------------------------------------
    // Part-list items
    // ------------------------------------------------------------------

    /// List the part/color lines of a part list
    pub fn list_partlist_parts(
        &self,
        token: &UserToken,
        list_id: i64,
        query: &DetailsQuery,
    ) -> Pager<PartListPart> {
        self.pager(
            self.request("list_partlist_parts", Method::GET, PARTLIST_PARTS, token)
                .path_param("list_id", list_id)
                .query(query),
        )
    }

    /// Add a part/color line to a part list
    pub async fn create_partlist_part(
        &self,
        token: &UserToken,
        list_id: i64,
        part: &NewPartListPart,
    ) -> Result<PartListPart> {
        self.http
            .execute(
                self.request("create_partlist_part", Method::POST, PARTLIST_PARTS, token)
                    .path_param("list_id", list_id)
                    .form(part),
            )
            .await
    }

    /// Get one part/color line of a part list
    pub async fn get_partlist_part(
        &self,
        token: &UserToken,
        list_id: i64,
        part_num: &str,
        color_id: i64,
    ) -> Result<PartListPart> {
        self.http
            .execute(
                self.request("get_partlist_part", Method::GET, PARTLIST_PART, token)
                    .path_param("list_id", list_id)
                    .path_param("part_num", part_num)
                    .path_param("color_id", color_id),
            )
            .await
    }

    /// Change the quantity of a part/color line
    pub async fn update_partlist_part(
        &self,
        token: &UserToken,
        list_id: i64,
        part_num: &str,
        color_id: i64,
        quantity: u32,
    ) -> Result<PartListPart> {
        self.http
            .execute(
                self.request("update_partlist_part", Method::PUT, PARTLIST_PART, token)
                    .path_param("list_id", list_id)
                    .path_param("part_num", part_num)
                    .path_param("color_id", color_id)
                    .form(&QuantityUpdate { quantity }),
            )
            .await
    }

    /// Remove a part/color line from a part list
    pub async fn delete_partlist_part(
        &self,
        token: &UserToken,
        list_id: i64,
        part_num: &str,
        color_id: i64,
    ) -> Result<()> {
        self.http
            .execute_unit(
                self.request("delete_partlist_part", Method::DELETE, PARTLIST_PART, token)
                    .path_param("list_id", list_id)
                    .path_param("part_num", part_num)
                    .path_param("color_id", color_id),
            )
            .await
    }

    // ------------------------------------------------------------------
    // Set lists
    // ------------------------------------------------------------------

    /// List the user's set lists
    pub fn list_setlists(&self, token: &UserToken, query: &PageQuery) -> Pager<SetList> {
        self.pager(
            self.request("list_setlists", Method::GET, SETLISTS, token)
                .query(query),
        )
    }

    /// Create a set list
    pub async fn create_setlist(&self, token: &UserToken, list: &NewList) -> Result<SetList> {
        check_name("create_setlist", &list.name)?;
        self.http
            .execute(
                self.request("create_setlist", Method::POST, SETLISTS, token)
                    .form(list),
            )
            .await
    }

    /// Get a set list
    pub async fn get_setlist(&self, token: &UserToken, list_id: i64) -> Result<SetList> {
        self.http
            .execute(
                self.request("get_setlist", Method::GET, SETLIST, token)
                    .path_param("list_id", list_id),
            )
            .await
    }

    /// Update a set list's name or buildability
    pub async fn update_setlist(
        &self,
        token: &UserToken,
        list_id: i64,
        update: &ListUpdate,
    ) -> Result<SetList> {
        if let Some(name) = &update.name {
            check_name("update_setlist", name)?;
        }
        self.http
            .execute(
                self.request("update_setlist", Method::PATCH, SETLIST, token)
                    .path_param("list_id", list_id)
                    .form(update),
            )
            .await
    }

    /// Delete a set list
    pub async fn delete_setlist(&self, token: &UserToken, list_id: i64) -> Result<()> {
        self.http
            .execute_unit(
                self.request("delete_setlist", Method::DELETE, SETLIST, token)
                    .path_param("list_id", list_id),
            )
            .await
    }

    // ------------------------------------------------------------------
    // Set-list items
    // ------------------------------------------------------------------

    /// List the sets in a set list
    pub fn list_setlist_sets(
        &self,
        token: &UserToken,
        list_id: i64,
        query: &PageQuery,
    ) -> Pager<SetListSet> {
        self.pager(
            self.request("list_setlist_sets", Method::GET, SETLIST_SETS, token)
                .path_param("list_id", list_id)
                .query(query),
        )
    }

    /// Add a set to a set list
    pub async fn create_setlist_set(
        &self,
        token: &UserToken,
        list_id: i64,
        set: &NewSetListSet,
    ) -> Result<SetListSet> {
        self.http
            .execute(
                self.request("create_setlist_set", Method::POST, SETLIST_SETS, token)
                    .path_param("list_id", list_id)
                    .form(set),
            )
            .await
    }

    /// Get one set of a set list
    pub async fn get_setlist_set(
        &self,
        token: &UserToken,
        list_id: i64,
        set_num: &str,
    ) -> Result<SetListSet> {
        self.http
            .execute(
                self.request("get_setlist_set", Method::GET, SETLIST_SET, token)
                    .path_param("list_id", list_id)
                    .path_param("set_num", set_num),
            )
            .await
    }

    /// Change the quantity or spares flag of a set-list line
    pub async fn update_setlist_set(
        &self,
        token: &UserToken,
        list_id: i64,
        set_num: &str,
        update: &SetListSetUpdate,
    ) -> Result<SetListSet> {
        self.http
            .execute(
                self.request("update_setlist_set", Method::PATCH, SETLIST_SET, token)
                    .path_param("list_id", list_id)
                    .path_param("set_num", set_num)
                    .form(update),
            )
            .await
    }

    /// Remove a set from a set list
    pub async fn delete_setlist_set(
        &self,
        token: &UserToken,
        list_id: i64,
        set_num: &str,
    ) -> Result<()> {
        self.http
            .execute_unit(
                self.request("delete_setlist_set", Method::DELETE, SETLIST_SET, token)
                    .path_param("list_id", list_id)
                    .path_param("set_num", set_num),
            )
            .await
    }

    // ------------------------------------------------------------------
    // Aggregates
    // ------------------------------------------------------------------

    /// List every set across the user's set lists
    pub fn list_sets(&self, token: &UserToken, query: &SetsQuery) -> Pager<SetListSet> {
        self.pager(
            self.request("list_sets", Method::GET, "/users/{user_token}/sets/", token)
                .query(query),
        )
    }

    /// List every part across the user's part lists
    pub fn list_parts(&self, token: &UserToken, query: &UserPartsQuery) -> Pager<UserPart> {
        self.pager(
            self.request("list_parts", Method::GET, "/users/{user_token}/parts/", token)
                .query(query),
        )
    }

    /// List every part the user owns, from part lists and buildable sets
    pub fn list_all_parts(&self, token: &UserToken, query: &UserPartsQuery) -> Pager<UserPart> {
        self.pager(
            self.request(
                "list_all_parts",
                Method::GET,
                "/users/{user_token}/allparts/",
                token,
            )
            .query(query),
        )
    }

    // ------------------------------------------------------------------
    // Lost parts
    // ------------------------------------------------------------------

    /// List the inventory lines the user marked as lost
    pub fn list_lost_parts(&self, token: &UserToken, query: &PageQuery) -> Pager<LostPart> {
        self.pager(
            self.request("list_lost_parts", Method::GET, LOST_PARTS, token)
                .query(query),
        )
    }

    /// Mark an inventory line as lost
    pub async fn create_lost_part(
        &self,
        token: &UserToken,
        lost: &NewLostPart,
    ) -> Result<LostPart> {
        self.http
            .execute(
                self.request("create_lost_part", Method::POST, LOST_PARTS, token)
                    .form(lost),
            )
            .await
    }

    /// Un-mark a lost part
    pub async fn delete_lost_part(&self, token: &UserToken, lost_part_id: i64) -> Result<()> {
        self.http
            .execute_unit(
                self.request(
                    "delete_lost_part",
                    Method::DELETE,
                    "/users/{user_token}/lost_parts/{id}/",
                    token,
                )
                .path_param("id", lost_part_id),
            )
            .await
    }

    // ------------------------------------------------------------------
    // Build
    // ------------------------------------------------------------------

    /// Ask the server how much of a set the user can build
    pub async fn build_set(&self, token: &UserToken, set_num: &str) -> Result<BuildResult> {
        self.http
            .execute(
                self.request(
                    "build_set",
                    Method::GET,
                    "/users/{user_token}/build/{set_num}/",
                    token,
                )
                .path_param("set_num", set_num),
            )
            .await
    }
}

fn check_name(operation: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation(operation, "name", "must not be empty"));
    }
    Ok(())
}
