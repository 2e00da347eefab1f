use actix_web::web::{self, Json};
use actix_web::HttpResponse;
use validator::Validate;

use crate::http::Error;
use crate::store::NewUser;
use crate::types::form::users::create;
use crate::App;

#[tracing::instrument(skip_all)]
pub async fn create(
    app: web::Data<App>,
    form: Json<create::Request>,
) -> Result<HttpResponse, Error> {
    form.validate()?;

    let form = form.into_inner();
    let user = app.store.create(NewUser {
        name: form.name,
        email: form.email,
        role: form.role,
    });

    tracing::info!(%user.id, "created user");
    Ok(HttpResponse::Created().json(user))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use serde_json::json;

    use crate::http::server::scaffold;
    use crate::App;

    #[actix_web::test]
    async fn assigns_an_id_and_echoes_the_record() {
        let app = App::for_tests();
        let srv = test::init_service(scaffold(web::Data::new(app))).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({
                "name": "Test User",
                "email": "test@example.com",
                "role": "user",
            }))
            .to_request();
        let res = test::call_service(&srv, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["id"].as_u64().unwrap() >= 1);
        assert_eq!(body["name"], "Test User");
        assert_eq!(body["email"], "test@example.com");
        assert_eq!(body["role"], "user");
        assert!(body["created_at"].is_string());

        // a fresh fetch returns the identical object
        let uri = format!("/api/users/{}", body["id"]);
        let req = test::TestRequest::get().uri(&uri).to_request();
        let res = test::call_service(&srv, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let fetched: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(fetched, body);
    }

    #[actix_web::test]
    async fn fills_in_the_default_role() {
        let app = App::for_tests();
        let srv = test::init_service(scaffold(web::Data::new(app))).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({
                "name": "Test User",
                "email": "test@example.com",
            }))
            .to_request();
        let res = test::call_service(&srv, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["role"], "user");
    }

    #[actix_web::test]
    async fn rejects_missing_or_empty_required_fields() {
        let app = App::for_tests();
        let srv = test::init_service(scaffold(web::Data::new(app.clone()))).await;

        for body in [
            json!({"email": "test@example.com"}),
            json!({"name": "Test User"}),
            json!({"name": "", "email": "test@example.com"}),
            json!({"name": "Test User", "email": ""}),
            json!({}),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/users")
                .set_json(body)
                .to_request();
            let res = test::call_service(&srv, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);

            let error: serde_json::Value = test::read_body_json(res).await;
            assert_eq!(error["type"], "invalid_form_body");
        }

        // nothing reached the store
        assert_eq!(app.store.count(), 0);
    }
}
