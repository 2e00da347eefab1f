use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::App;

/// Operational summary consumed by the dashboard's stats widget.
#[tracing::instrument(skip_all)]
pub async fn summary(app: web::Data<App>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "total_users": app.store.count(),
        "request_count": app.request_count(),
        "started_at": app.started_at,
        "uptime_secs": app.uptime_secs(),
        "environment": &app.config.environment,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use serde_json::json;

    use crate::http::server::scaffold;
    use crate::App;

    #[actix_web::test]
    async fn total_users_tracks_the_store() {
        let app = App::for_tests();
        let srv = test::init_service(scaffold(web::Data::new(app.clone()))).await;

        for n in 0..3 {
            let req = test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({
                    "name": format!("User {n}"),
                    "email": format!("user-{n}@example.com"),
                }))
                .to_request();
            let res = test::call_service(&srv, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let res = test::call_service(&srv, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["total_users"], 3);
        assert_eq!(body["total_users"].as_u64().unwrap() as usize, app.store.count());
        assert_eq!(body["environment"], "test");
        assert!(body["started_at"].is_string());
        assert!(body["uptime_secs"].as_i64().unwrap() >= 0);
        // the stats request itself is already counted
        assert!(body["request_count"].as_u64().unwrap() >= 4);
    }
}
