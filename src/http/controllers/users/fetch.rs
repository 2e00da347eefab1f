use actix_web::{web, HttpResponse};
use thiserror::Error;

use crate::http::Error;
use crate::types;
use crate::types::id::{marker::UserMarker, Id};
use crate::App;

#[derive(Debug, Error)]
#[error("User not found")]
struct ResourceError;

pub async fn list(app: web::Data<App>) -> HttpResponse {
    HttpResponse::Ok().json(app.store.list())
}

#[tracing::instrument(skip(app))]
pub async fn get(
    app: web::Data<App>,
    path: web::Path<Id<UserMarker>>,
) -> Result<HttpResponse, Error> {
    let id = path.into_inner();
    if let Some(user) = app.store.get(id) {
        Ok(HttpResponse::Ok().json(user))
    } else {
        Err(Error::from_context(types::Error::NotFound, ResourceError))
    }
}
