//! CLI runner - executes commands

use crate::api::{LegoApi, PageQuery, SetPartsQuery, SetsQuery, UsersApi};
use crate::auth::UserToken;
use crate::cli::commands::{Cli, Commands, OutputFormat, UserArgs};
use crate::client::ApiClient;
use crate::config::Configuration;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::ItemStream;
use futures::StreamExt;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        let lego = client.lego();
        let users = client.users();

        match &self.cli.command {
            Commands::Check => self.check(&lego).await,
            Commands::Color { id } => self.output(&lego.get_color(*id).await?),
            Commands::Part { part_num } => self.output(&lego.get_part(part_num).await?),
            Commands::PartColors { part_num } => {
                self.output_stream(
                    lego.list_part_colors(part_num, &PageQuery::default())
                        .into_stream(),
                    None,
                )
                .await
            }
            Commands::Set { set_num } => self.output(&lego.get_set(set_num).await?),
            Commands::Sets {
                search,
                theme_id,
                min_year,
                max_year,
                max_records,
            } => {
                let query = SetsQuery {
                    search: search.clone(),
                    theme_id: *theme_id,
                    min_year: *min_year,
                    max_year: *max_year,
                    ..SetsQuery::default()
                };
                self.output_stream(lego.list_sets(&query).into_stream(), *max_records)
                    .await
            }
            Commands::SetParts {
                set_num,
                minifig_parts,
                max_records,
            } => {
                let query = SetPartsQuery::minifig_parts(*minifig_parts);
                self.output_stream(lego.list_set_parts(set_num, &query).into_stream(), *max_records)
                    .await
            }
            Commands::SetMinifigs { set_num } => {
                self.output_stream(
                    lego.list_set_minifigs(set_num, &PageQuery::default()).into_stream(),
                    None,
                )
                .await
            }
            Commands::Themes => {
                self.output_stream(lego.list_themes(&PageQuery::default()).into_stream(), None)
                    .await
            }
            Commands::Token { user } => {
                let token = resolve_token(&users, user).await?;
                self.output(&json!({ "user_token": token.as_str() }))
            }
            Commands::MySets { user } => {
                let token = resolve_token(&users, user).await?;
                self.output_stream(
                    users.list_sets(&token, &SetsQuery::default()).into_stream(),
                    None,
                )
                .await
            }
            Commands::PartLists { user } => {
                let token = resolve_token(&users, user).await?;
                self.output_stream(
                    users.list_partlists(&token, &PageQuery::default()).into_stream(),
                    None,
                )
                .await
            }
            Commands::SetLists { user } => {
                let token = resolve_token(&users, user).await?;
                self.output_stream(
                    users.list_setlists(&token, &PageQuery::default()).into_stream(),
                    None,
                )
                .await
            }
            Commands::Build { set_num, user } => {
                let token = resolve_token(&users, user).await?;
                let result = users.build_set(&token, set_num).await?;
                self.output(&json!({
                    "set_num": set_num,
                    "total_parts": result.total_parts,
                    "num_missing": result.num_missing,
                    "num_owned": result.num_owned(),
                    "pct_owned": result.pct_owned,
                }))
            }
        }
    }

    /// Build the client from flags and environment
    fn client(&self) -> Result<ApiClient> {
        let api_key = self
            .cli
            .api_key
            .clone()
            .ok_or_else(|| Error::missing_field(crate::config::ENV_API_KEY))?;

        let mut builder = Configuration::builder(api_key);
        if let Some(base_url) = &self.cli.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(secs) = self.cli.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let config = builder.build().context("invalid client configuration")?;
        ApiClient::new(config)
    }

    /// Fetch one small page of colors to prove the key works
    async fn check(&self, lego: &LegoApi) -> Result<()> {
        let page = lego.list_colors(&PageQuery::size(1)).send().await?;
        info!(colors = page.count, "API key accepted");
        self.output(&json!({ "status": "SUCCEEDED", "colors": page.count }))
    }

    /// Print items as they arrive
    async fn output_stream<T: Serialize>(
        &self,
        stream: ItemStream<T>,
        max_records: Option<usize>,
    ) -> Result<()> {
        let mut stream = stream.take(max_records.unwrap_or(usize::MAX));
        let mut printed = 0usize;
        while let Some(item) = stream.next().await {
            self.output(&item?)?;
            printed += 1;
        }
        info!(records = printed, "Done");
        Ok(())
    }

    /// Output a value in the configured format
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        }
        .map_err(|e| Error::Other(format!("failed to render output: {e}")))?;
        println!("{text}");
        Ok(())
    }
}

/// Use the given token, or exchange username/password for one
async fn resolve_token(users: &UsersApi, args: &UserArgs) -> Result<UserToken> {
    if let Some(token) = &args.user_token {
        return Ok(UserToken::new(token.clone()));
    }
    match (&args.username, &args.password) {
        (Some(username), Some(password)) => users.create_user_token(username, password).await,
        _ => Err(Error::config(
            "user commands need --user-token or --username and --password",
        )),
    }
}
