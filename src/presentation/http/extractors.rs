// src/presentation/http/extractors.rs
use axum::{
    extract::FromRequestParts,
    http::{
        HeaderMap, HeaderValue,
        header::{InvalidHeaderValue, SET_COOKIE},
        request::Parts,
    },
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use headers::{Cookie, HeaderMapExt};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "flash_msg";

const CLEAR_FLASH_COOKIE: &str = "flash_msg=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

/// One-time message left by the previous request, read from the flash cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash(pub Option<String>);

impl Flash {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let message = headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(FLASH_COOKIE).map(str::to_owned))
            .and_then(|raw| decode_message(&raw));
        Self(message)
    }

    /// `Set-Cookie` value carrying `message` to the next request.
    pub fn set_cookie(message: &str) -> Result<HeaderValue, InvalidHeaderValue> {
        let encoded = URL_SAFE_NO_PAD.encode(message.as_bytes());
        HeaderValue::from_str(&format!(
            "{FLASH_COOKIE}={encoded}; Path=/; HttpOnly; SameSite=Lax"
        ))
    }

    pub fn clear_cookie() -> HeaderValue {
        HeaderValue::from_static(CLEAR_FLASH_COOKIE)
    }

    /// Whether the response already writes the flash cookie.
    pub fn is_set_by(headers: &HeaderMap) -> bool {
        let prefix = format!("{FLASH_COOKIE}=");
        headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|value| value.starts_with(&prefix))
    }
}

fn decode_message(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(raw).ok()?;
    String::from_utf8(bytes).ok()
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    fn cookie_pair(set_cookie: &HeaderValue) -> HeaderValue {
        let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().to_string();
        HeaderValue::from_str(&pair).unwrap()
    }

    #[test]
    fn korean_message_survives_cookie_round_trip() {
        let set_cookie = Flash::set_cookie("3번 자료가 삭제되었습니다").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie_pair(&set_cookie));
        assert_eq!(
            Flash::from_headers(&headers).0.as_deref(),
            Some("3번 자료가 삭제되었습니다")
        );
    }

    #[test]
    fn missing_or_cleared_cookie_is_empty() {
        let mut headers = HeaderMap::new();
        assert_eq!(Flash::from_headers(&headers), Flash(None));
        headers.insert(COOKIE, HeaderValue::from_static("flash_msg="));
        assert_eq!(Flash::from_headers(&headers), Flash(None));
    }

    #[test]
    fn detects_flash_in_set_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("other=1"));
        assert!(!Flash::is_set_by(&headers));
        headers.append(SET_COOKIE, Flash::clear_cookie());
        assert!(Flash::is_set_by(&headers));
    }
}
