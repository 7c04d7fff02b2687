use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::Upstream(e) => {
            tracing::warn!(error = %e, "upstream dataset unavailable");
            "The flat listings dataset is unavailable right now. Please retry in a moment."
                .to_string()
        }
        ServerError::InternalError => {
            tracing::error!("internal error while handling request");
            err.to_string()
        }
        _ => err.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.to_string())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
