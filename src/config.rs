use std::{path::PathBuf, time::Duration};

use url::Url;

use crate::types::ChannelMeta;

pub const DATASET_URL: &str = "https://data.stad.gent/api/explore/v2.1/catalog/datasets/recente-nieuwsberichten-van-stadgent/records";
pub const PAGE_LIMIT: u32 = 100;
pub const FETCH_TIMEOUT_SECS: u64 = 5;
pub const REFRESH_INTERVAL_SECS: u64 = 60 * 60;
pub const FEED_PATH: &str = "feed.xml";
pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 8080;

/// Everything the pipeline and the server need, passed in at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_url: Url,
    pub page_limit: u32,
    pub fetch_timeout: Duration,
    pub refresh_interval: Duration,
    pub feed_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub channel: ChannelMeta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_url: Url::parse(DATASET_URL).expect("DATASET_URL is a valid url"),
            page_limit: PAGE_LIMIT,
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            refresh_interval: Duration::from_secs(REFRESH_INTERVAL_SECS),
            feed_path: PathBuf::from(FEED_PATH),
            host: HOST.into(),
            port: PORT,
            channel: ChannelMeta::default(),
        }
    }
}
