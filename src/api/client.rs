use crate::api::models::*;
use crate::config::CONFIG;
use crate::diagnostics::PerfTimer;
use crate::error::ApiError;
use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Desc,
}

impl SortOrder {
    fn as_query_value(self) -> &'static str {
        match self {
            Self::Desc => "desc",
        }
    }
}

/// Pagination and sorting for the episode listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeQuery {
    pub limit: usize,
    pub sort: &'static str,
    pub order: SortOrder,
}

impl EpisodeQuery {
    /// The configured page of most recent episodes, newest first.
    pub fn latest() -> Self {
        Self {
            limit: CONFIG.page_size,
            sort: "published_at",
            order: SortOrder::Desc,
        }
    }

    fn to_query_string(&self) -> String {
        format!(
            "_limit={}&_sort={}&_order={}",
            self.limit,
            urlencoding::encode(self.sort),
            self.order.as_query_value()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PodcastClient {
    base_url: String,
}

impl PodcastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client for the configured API.
    pub fn from_config() -> Self {
        Self::new(CONFIG.api_base_url.clone())
    }

    pub fn episodes_url(&self, query: &EpisodeQuery) -> String {
        format!("{}/episodes?{}", self.base_url, query.to_query_string())
    }

    pub fn episode_url(&self, slug: &str) -> String {
        format!("{}/episodes/{}", self.base_url, urlencoding::encode(slug))
    }

    pub async fn list_episodes(&self, query: &EpisodeQuery) -> Result<Vec<Episode>, ApiError> {
        let url = self.episodes_url(query);
        let raw: Vec<RawEpisode> = self.get_json(&url).await?;
        Ok(raw.into_iter().map(Episode::from_raw).collect())
    }

    pub async fn get_episode(&self, slug: &str) -> Result<Episode, ApiError> {
        let url = self.episode_url(slug);
        let raw: RawEpisode = self.get_json(&url).await?;
        Ok(Episode::from_raw(raw))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let timer = PerfTimer::start("api.get");
        let result = fetch_json(url).await;
        match &result {
            Ok(_) => timer.finish(url),
            Err(err) => warn!("GET {url} failed: {err}"),
        }
        result
    }
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = HTTP_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_query_sorts_by_publish_date_descending() {
        let client = PodcastClient::new("http://localhost:3333/");
        assert_eq!(
            client.episodes_url(&EpisodeQuery::latest()),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn query_fields_are_encoded() {
        let client = PodcastClient::new("http://api");
        let query = EpisodeQuery {
            limit: 5,
            sort: "file.duration asc",
            order: SortOrder::Desc,
        };
        assert_eq!(
            client.episodes_url(&query),
            "http://api/episodes?_limit=5&_sort=file.duration%20asc&_order=desc"
        );
    }

    #[test]
    fn episode_slug_is_percent_encoded() {
        let client = PodcastClient::new("http://api");
        assert_eq!(
            client.episode_url("como-virar-lider"),
            "http://api/episodes/como-virar-lider"
        );
        assert_eq!(client.episode_url("a b/c"), "http://api/episodes/a%20b%2Fc");
    }
}
