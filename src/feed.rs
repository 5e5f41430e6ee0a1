use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use time::{
    OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{
    errors::FeedResult,
    types::{ChannelMeta, FeedEnvelope, FeedItem, NewsRecord},
};

const INDENT_SIZE: usize = 4;

// RFC 1123 with a numeric zone. Unlike `Rfc2822` this accepts any year.
const RSS_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
);

impl From<&NewsRecord> for FeedItem {
    fn from(record: &NewsRecord) -> Self {
        Self {
            link: record.link.clone(),
            guid: record.subject_page.clone(),
            title: record.title.clone(),
            description: record.content.clone(),
            pub_date: record.published.to_timestamp(),
        }
    }
}

/// Wraps the records, in upstream order, in a channel stamped with `generated_at`.
pub fn build_envelope(
    meta: &ChannelMeta,
    records: &[NewsRecord],
    generated_at: OffsetDateTime,
) -> FeedEnvelope {
    FeedEnvelope {
        title: meta.title.clone(),
        link: meta.link.clone(),
        description: meta.description.clone(),
        pub_date: generated_at,
        web_master: meta.web_master.clone(),
        items: records.iter().map(FeedItem::from).collect(),
    }
}

/// RSS dates, e.g. `Mon, 15 Jan 2024 00:00:00 +0000`.
pub fn format_rss_date(date: OffsetDateTime) -> FeedResult<String> {
    Ok(date.format(RSS_DATE_FORMAT)?)
}

fn to_rss_item(item: &FeedItem) -> FeedResult<Item> {
    let guid = GuidBuilder::default()
        .value(item.guid.clone())
        .permalink(true)
        .build();

    Ok(ItemBuilder::default()
        .link(Some(item.link.clone()))
        .guid(Some(guid))
        .title(Some(item.title.clone()))
        .description(Some(item.description.clone()))
        .pub_date(Some(format_rss_date(item.pub_date)?))
        .build())
}

fn to_rss_channel(envelope: &FeedEnvelope) -> FeedResult<Channel> {
    let items = envelope
        .items
        .iter()
        .map(to_rss_item)
        .collect::<FeedResult<Vec<_>>>()?;

    Ok(ChannelBuilder::default()
        .title(envelope.title.clone())
        .link(envelope.link.clone())
        .description(envelope.description.clone())
        .pub_date(Some(format_rss_date(envelope.pub_date)?))
        .webmaster(Some(envelope.web_master.clone()))
        .items(items)
        .build())
}

/// Renders the envelope as an indented RSS 2.0 document with XML declaration.
pub fn serialize(envelope: &FeedEnvelope) -> FeedResult<Vec<u8>> {
    let channel = to_rss_channel(envelope)?;
    Ok(channel.pretty_write_to(Vec::new(), b' ', INDENT_SIZE)?)
}
