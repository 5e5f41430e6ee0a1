use log::{error, info, warn};
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    errors::FeedResult,
    feed::{build_envelope, serialize},
    fetch::NewsFetcher,
    store::FeedStore,
    types::ChannelMeta,
};

/// Owns the fetch -> build -> serialize -> store pipeline.
pub struct FeedRefresher {
    fetcher: NewsFetcher,
    store: FeedStore,
    channel: ChannelMeta,
    // Held for a whole run so refreshes never interleave
    running: Mutex<()>,
}

impl FeedRefresher {
    pub fn new(config: &Config) -> FeedResult<Self> {
        Ok(Self {
            fetcher: NewsFetcher::new(config)?,
            store: FeedStore::new(config.feed_path.clone()),
            channel: config.channel.clone(),
            running: Mutex::new(()),
        })
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    pub fn is_refreshing(&self) -> bool {
        self.running.try_lock().is_err()
    }

    /// Regenerates the stored feed and returns how many items it holds.
    /// Nothing is written unless every earlier step succeeded.
    pub async fn refresh(&self) -> FeedResult<usize> {
        let _guard = self.running.lock().await;

        let records = self.fetcher.fetch().await?;
        let envelope = build_envelope(&self.channel, &records, OffsetDateTime::now_utc());
        let document = serialize(&envelope)?;
        self.store.write(&document).await?;

        Ok(envelope.items.len())
    }
}

/// The run before the listener starts. Unlike scheduled runs, a failure is
/// logged and handed back so startup can abort.
pub async fn startup_refresh(refresher: &FeedRefresher) -> FeedResult<usize> {
    info!("[Startup] Initial feed generation");
    match refresher.refresh().await {
        Ok(count) => {
            info!(
                "[Startup] Wrote {} items to {}",
                count,
                refresher.store().path().display()
            );
            Ok(count)
        }
        Err(err) => {
            error!("[Startup] Initial feed generation failed with err: {}", err);
            Err(err)
        }
    }
}

/// One scheduled run. Errors are logged and swallowed; the next tick retries.
pub async fn refresh_feed(refresher: &FeedRefresher) {
    let start_time = OffsetDateTime::now_utc();
    info!("[Refresh Feed] Starting refresh at {}", start_time);
    if refresher.is_refreshing() {
        warn!("[Refresh Feed] Previous refresh still running, waiting for it to finish");
    }

    match refresher.refresh().await {
        Ok(count) => {
            let now = OffsetDateTime::now_utc();
            info!(
                "[Refresh Feed] Wrote {} items to {} in {}",
                count,
                refresher.store().path().display(),
                now - start_time
            );
        }
        Err(err) => {
            error!("[Refresh Feed] Refresh failed with err: {}", err);
        }
    }
}
