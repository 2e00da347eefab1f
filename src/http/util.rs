use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::HttpResponse;
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};
use validator::ValidateError;

use crate::types;

/// Root span builder that keeps liveness probes out of the log:
/// `GET /health` gets no span at all, everything else gets the
/// default one.
pub struct QuieterRootSpanBuilder;

impl RootSpanBuilder for QuieterRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        if request.path() == "/health" {
            Span::none()
        } else {
            DefaultRootSpanBuilder::on_request_start(request)
        }
    }

    fn on_request_end<B: MessageBody>(
        span: Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

/// Default error handler for responses the route handlers never saw:
/// unmatched paths, rejected payloads, refused methods. Anything that
/// left with an error status but without our JSON error shape is
/// rewritten into one, keeping the status code.
pub fn handle_actix_web_error<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let already_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.as_bytes().starts_with(b"application/json"))
        .unwrap_or(false);

    if already_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    let error_type = if status == StatusCode::NOT_FOUND {
        types::Error::NotFound
    } else if status.is_client_error() {
        types::Error::InvalidFormBody(ValidateError::message(
            status.canonical_reason().unwrap_or("Bad request"),
        ))
    } else {
        types::Error::Internal
    };

    let (req, _) = res.into_parts();
    let res = HttpResponse::build(status).json(&error_type);
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
