use crate::presentation::http::extractors::Flash;
use axum::{extract::Request, http::header::SET_COOKIE, middleware::Next, response::Response};

/// Expire the flash cookie on the first response after the request that
/// delivered it, unless that response leaves a new message.
pub async fn expire_flash(req: Request, next: Next) -> Response {
    let delivered = Flash::from_headers(req.headers()).0.is_some();

    let mut response = next.run(req).await;

    if delivered && !Flash::is_set_by(response.headers()) {
        response
            .headers_mut()
            .append(SET_COOKIE, Flash::clear_cookie());
    }

    response
}
