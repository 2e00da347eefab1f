use actix_web::web::{self, Json};
use actix_web::HttpResponse;
use thiserror::Error;
use validator::Validate;

use crate::http::Error;
use crate::store::UserChanges;
use crate::types;
use crate::types::form::users::update;
use crate::types::id::{marker::UserMarker, Id};
use crate::App;

#[derive(Debug, Error)]
#[error("User not found")]
struct ResourceError;

#[tracing::instrument(skip(app, form))]
pub async fn update(
    app: web::Data<App>,
    path: web::Path<Id<UserMarker>>,
    form: Json<update::Request>,
) -> Result<HttpResponse, Error> {
    form.validate()?;

    let id = path.into_inner();
    let changes = UserChanges::from(form.into_inner());
    match app.store.update(id, changes) {
        Some(user) => {
            tracing::info!(%user.id, "updated user");
            Ok(HttpResponse::Ok().json(user))
        }
        None => Err(Error::from_context(types::Error::NotFound, ResourceError)),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use serde_json::json;

    use crate::http::server::scaffold;
    use crate::App;

    fn create_request() -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"name": "Before", "email": "before@example.com"}))
    }

    #[actix_web::test]
    async fn changes_only_the_supplied_fields() {
        let app = App::for_tests();
        let srv = test::init_service(scaffold(web::Data::new(app))).await;
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&srv, create_request().to_request()).await)
                .await;

        let uri = format!("/api/users/{}", created["id"]);
        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({"name": "After"}))
            .to_request();
        let res = test::call_service(&srv, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["name"], "After");
        assert_eq!(body["email"], created["email"]);
        assert_eq!(body["role"], created["role"]);
        assert_eq!(body["id"], created["id"]);
        assert_eq!(body["created_at"], created["created_at"]);
        assert!(body["updated_at"].is_string());
    }

    #[actix_web::test]
    async fn empty_body_is_a_noop_success() {
        let app = App::for_tests();
        let srv = test::init_service(scaffold(web::Data::new(app))).await;
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&srv, create_request().to_request()).await)
                .await;

        let uri = format!("/api/users/{}", created["id"]);
        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&srv, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body, created);
    }

    #[actix_web::test]
    async fn unknown_ids_are_not_found() {
        let app = App::for_tests();
        let srv = test::init_service(scaffold(web::Data::new(app))).await;

        let req = test::TestRequest::put()
            .uri("/api/users/99999")
            .set_json(json!({"name": "After"}))
            .to_request();
        let res = test::call_service(&srv, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn rejects_blanking_out_required_fields() {
        let app = App::for_tests();
        let srv = test::init_service(scaffold(web::Data::new(app))).await;
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&srv, create_request().to_request()).await)
                .await;

        let uri = format!("/api/users/{}", created["id"]);
        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({"name": ""}))
            .to_request();
        let res = test::call_service(&srv, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
