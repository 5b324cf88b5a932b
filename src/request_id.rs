use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::{Instrument, info_span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

impl RequestId {
    fn from_request(req: &Request) -> Self {
        let id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Self(id)
    }
}

/// Tags each inbound request with an id, runs the handler inside a span
/// carrying it, and echoes it on the response.
pub async fn inject_request_id(mut req: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&req);
    let span = info_span!(
        "http_request",
        request_id = %request_id.0,
        method = %req.method(),
        path = %req.uri().path()
    );
    let header = HeaderValue::from_str(&request_id.0).ok();
    req.extensions_mut().insert(request_id);

    let mut resp = next.run(req).instrument(span).await;
    if let Some(val) = header {
        resp.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    resp
}
