use log::debug;
use url::Url;

use crate::{
    config::Config,
    errors::FeedResult,
    types::{NewsRecord, NewsResponse},
};

/// Pulls one page of news records from the open-data API.
pub struct NewsFetcher {
    client: reqwest::Client,
    dataset_url: Url,
    page_limit: u32,
}

impl NewsFetcher {
    pub fn new(config: &Config) -> FeedResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()?;

        Ok(Self {
            client,
            dataset_url: config.dataset_url.clone(),
            page_limit: config.page_limit,
        })
    }

    pub fn request_url(&self) -> Url {
        let mut url = self.dataset_url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.page_limit.to_string());
        url
    }

    pub async fn fetch(&self) -> FeedResult<Vec<NewsRecord>> {
        let url = self.request_url();
        debug!("[Fetch News] GET {}", url);

        let res = self.client.get(url).send().await?.error_for_status()?;
        let body = res.bytes().await?;
        let response: NewsResponse = serde_json::from_slice(&body)?;

        if response.total_count > response.results.len() as u64 {
            debug!(
                "[Fetch News] Upstream has {} records, using the first {}",
                response.total_count,
                response.results.len()
            );
        }

        Ok(response.results)
    }
}
