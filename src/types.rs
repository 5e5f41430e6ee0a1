use std::str::FromStr;

use serde::Deserialize;
use serde_with::{DefaultOnNull, DeserializeFromStr, serde_as};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::store::FeedStore;

const PUBLICATION_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

// Upstream Types

/// Envelope returned by the open-data records endpoint.
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    pub total_count: u64,
    pub results: Vec<NewsRecord>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsRecord {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "nieuwsbericht", default)]
    pub link: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "subjectpage", default)]
    pub subject_page: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "titel", default)]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "inhoud", default)]
    pub content: String,
    #[serde(rename = "publicatiedatum")]
    pub published: PublicationDate,
}

/// Calendar date as published upstream (`YYYY-MM-DD`, no time of day).
///
/// Feeds need a timestamp with a zone, so the date is pinned to midnight UTC
/// by [`PublicationDate::to_timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeserializeFromStr)]
pub struct PublicationDate(pub Date);

impl PublicationDate {
    pub fn to_timestamp(self) -> OffsetDateTime {
        self.0.midnight().assume_utc()
    }
}

impl FromStr for PublicationDate {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s.trim(), PUBLICATION_DATE_FORMAT).map(PublicationDate)
    }
}

// Feed Types

/// Static channel metadata written into every generated feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMeta {
    pub title: String,
    pub link: String,
    pub description: String,
    pub web_master: String,
}

impl Default for ChannelMeta {
    fn default() -> Self {
        Self {
            title: "Nieuwsberichten Gent".into(),
            link: "https://data.stad.gent/explore/dataset/recente-nieuwsberichten-van-stadgent/api/"
                .into(),
            description: "Recente nieuwsberichten van stad.gent".into(),
            web_master: "kayasem.vancauwenberghe@ugent.be".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub link: String,
    pub guid: String,
    pub title: String,
    pub description: String,
    pub pub_date: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEnvelope {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: OffsetDateTime,
    pub web_master: String,
    pub items: Vec<FeedItem>,
}

// Server Types

pub struct AppState {
    pub store: FeedStore,
}
