use actix_web::{web, HttpResponse};
use thiserror::Error;

use crate::http::Error;
use crate::types;
use crate::types::id::{marker::UserMarker, Id};
use crate::App;

#[derive(Debug, Error)]
#[error("User not found")]
struct ResourceError;

#[tracing::instrument(skip(app))]
pub async fn delete(
    app: web::Data<App>,
    path: web::Path<Id<UserMarker>>,
) -> Result<HttpResponse, Error> {
    let id = path.into_inner();
    if app.store.delete(id) {
        tracing::info!(%id, "deleted user");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::from_context(types::Error::NotFound, ResourceError))
    }
}
