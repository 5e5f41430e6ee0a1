use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::types::AppState;

#[get("/feed")]
pub async fn get_feed(data: web::Data<AppState>) -> impl Responder {
    match data.store.read().await {
        Ok(document) => HttpResponse::Ok()
            .content_type("application/xml")
            .body(document),
        Err(err) => {
            error!(
                "[Get Feed] Reading {} failed with err: {}",
                data.store.path().display(),
                err
            );
            HttpResponse::InternalServerError()
                .content_type("text/plain")
                .body("Error reading feed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FeedStore;
    use actix_web::{App, http::StatusCode, test};
    use tempfile::TempDir;

    #[actix_web::test]
    async fn test_get_feed_serves_stored_document() {
        let dir = TempDir::new().unwrap();
        let store = FeedStore::new(dir.path().join("feed.xml"));
        store.write(b"<rss version=\"2.0\"/>").await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { store }))
                .service(get_feed),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/feed").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get("content-type").unwrap(),
            "application/xml"
        );
        let body = test::read_body(res).await;
        assert_eq!(&body[..], b"<rss version=\"2.0\"/>");
    }

    #[actix_web::test]
    async fn test_get_feed_missing_file_is_server_error() {
        let dir = TempDir::new().unwrap();
        let store = FeedStore::new(dir.path().join("feed.xml"));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { store }))
                .service(get_feed),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/feed").to_request()).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(res).await;
        assert_eq!(&body[..], b"Error reading feed");
    }

    #[actix_web::test]
    async fn test_other_paths_are_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FeedStore::new(dir.path().join("feed.xml"));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { store }))
                .service(get_feed),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/other").to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
