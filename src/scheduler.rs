use std::{sync::Arc, time::Duration};

use log::info;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::tasks::refresh_feed::{FeedRefresher, refresh_feed};

/// Starts the repeated refresh job. The first tick fires one `interval` after
/// start, the startup refresh is the caller's job.
pub async fn start_scheduler(
    refresher: Arc<FeedRefresher>,
    interval: Duration,
) -> anyhow::Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;
    scheduler
        .add(Job::new_repeated_async(interval, move |_uuid, _l| {
            let sched_refresher = Arc::clone(&refresher);
            Box::pin(async move {
                refresh_feed(&sched_refresher).await;
            })
        })?)
        .await?;
    info!("[Scheduler] Initialized refresh every {:?}", interval);
    scheduler.start().await?;
    info!("[Scheduler] Started");

    Ok(scheduler)
}
