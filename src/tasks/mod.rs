pub mod refresh_feed;
