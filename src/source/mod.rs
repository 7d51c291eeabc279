//! Remote user source: the random-user REST API.
//!
//! The upstream is a randomized generator. Page numbers do not address a
//! stable dataset, so asking for the same page twice yields two different
//! batches. Nothing here tries to hide that.
//!
pub mod record;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::error::FetchError;
pub use record::{Gender, Login, Name, Registered, UserRecord, UsersResponse};

/// Public instance of the random-user API.
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";
/// Records per page and per gender-filtered batch.
pub const PAGE_SIZE: u32 = 10;
/// Size of the pool fetched to emulate "the whole dataset" for searches.
pub const SEARCH_POOL_SIZE: u32 = 500;

/// Contract for anything that can hand out batches of user records.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// One page of [`PAGE_SIZE`] records. Pages start at 1.
    async fn fetch_page(&self, page: u32) -> Result<Vec<UserRecord>, FetchError>;

    /// A large pool of [`SEARCH_POOL_SIZE`] records for client-side search.
    async fn fetch_search_pool(&self) -> Result<Vec<UserRecord>, FetchError>;

    /// A batch of [`PAGE_SIZE`] records filtered upstream by gender.
    async fn fetch_by_gender(&self, gender: Gender) -> Result<Vec<UserRecord>, FetchError>;
}

/// HTTP implementation of [`UserSource`] backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct RandomUserClient {
    http: Client,
    base_url: Url,
}

impl RandomUserClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("invalid base url '{base_url}': {e}"))?;
        Ok(Self::with_client(Client::new(), base_url))
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_users(&self, query: &[(&str, String)]) -> Result<Vec<UserRecord>, FetchError> {
        debug!(url = %self.base_url, ?query, "source: request");
        let response = self
            .http
            .get(self.base_url.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let bytes = response.bytes().await?;
        let parsed: UsersResponse = serde_json::from_slice(&bytes)?;
        info!(count = parsed.results.len(), "source: records received");
        Ok(parsed.results)
    }
}

#[async_trait]
impl UserSource for RandomUserClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<UserRecord>, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage(page));
        }
        self.get_users(&[
            ("page", page.to_string()),
            ("pageSize", PAGE_SIZE.to_string()),
            ("results", PAGE_SIZE.to_string()),
        ])
        .await
    }

    async fn fetch_search_pool(&self) -> Result<Vec<UserRecord>, FetchError> {
        self.get_users(&[("results", SEARCH_POOL_SIZE.to_string())])
            .await
    }

    async fn fetch_by_gender(&self, gender: Gender) -> Result<Vec<UserRecord>, FetchError> {
        self.get_users(&[
            ("gender", gender.as_str().to_string()),
            ("results", PAGE_SIZE.to_string()),
        ])
        .await
    }
}
