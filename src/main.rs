use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use gent_feed::{
    config::Config,
    routes::gets::get_feed,
    scheduler::start_scheduler,
    tasks::refresh_feed::{FeedRefresher, startup_refresh},
    types::AppState,
};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = Config::default();

    let refresher = Arc::new(FeedRefresher::new(&config)?);

    startup_refresh(&refresher)
        .await
        .context("Initial feed generation failed")?;

    let _scheduler = start_scheduler(Arc::clone(&refresher), config.refresh_interval).await?;

    let app_data = web::Data::new(AppState {
        store: refresher.store().clone(),
    });

    info!("[Startup] Serving feed on {}:{}/feed", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_data.clone())
            .service(get_feed)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
