//! API utilities for frontend-backend communication
//!
//! Every wrapper in the app goes through these helpers: they attach the
//! bearer token of the current [`Session`], accept both bare and
//! `{ "data": ... }` bodies and turn failures into [`ApiError`].

use contracts::shared::envelope::{ApiEnvelope, ErrorBody};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::config;
use crate::system::auth::session::Session;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Không thể kết nối tới máy chủ: {0}")]
    Network(String),
    #[error("Lỗi máy chủ ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Phiên đăng nhập đã hết hạn, vui lòng đăng nhập lại")]
    Unauthorized,
    #[error("Bạn không có quyền thực hiện thao tác này, vui lòng đăng nhập lại bằng tài khoản phù hợp")]
    Forbidden,
    #[error("Dữ liệu trả về không hợp lệ: {0}")]
    Parse(String),
    #[error("Bạn chưa đăng nhập")]
    NotAuthenticated,
}

impl ApiError {
    /// Maps a non-2xx status and its raw body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            _ => {
                let message = serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .and_then(ErrorBody::into_message)
                    .unwrap_or_else(|| format!("HTTP {}", status));
                ApiError::Http { status, message }
            }
        }
    }

    /// Whether the session should be dropped because of this error.
    pub fn expires_session(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Authorization failures; the UI offers to sign in again.
    pub fn needs_reauth(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized | ApiError::Forbidden | ApiError::NotAuthenticated
        )
    }
}

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set. Otherwise the URL is
/// built from the current window location with the configured backend port,
/// e.g. "http://localhost:3000".
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.trim().is_empty() {
        return api.base_url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends `query` to `path` as a query string.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Parse(format!("Failed to encode query: {}", e)))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

/// Decodes a success body, bare or wrapped in `{ "data": ... }`.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<ApiEnvelope<T>>(body)
        .map(ApiEnvelope::into_inner)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn authorized(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    builder.header("Authorization", &session.bearer())
}

/// Any 2xx passes the body through untouched, empty or not.
pub fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::from_status(status, &body))
    }
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
    if !(200..300).contains(&status) {
        log::warn!("Request to {} failed with status {}", response.url(), status);
    }
    check_status(status, body)
}

fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))
}

async fn send(request: Request) -> Result<String, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

/// Authenticated GET returning a decoded body.
pub async fn get_json<T: DeserializeOwned>(session: &Session, path: &str) -> Result<T, ApiError> {
    let request = authorized(Request::get(&api_url(path)), session)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = send(request).await?;
    decode_body(&body)
}

/// Authenticated GET with query parameters.
pub async fn get_json_with_query<T, Q>(
    session: &Session,
    path: &str,
    query: &Q,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    get_json(session, &with_query(path, query)?).await
}

/// Authenticated POST of a JSON body.
pub async fn post_json<T, B>(session: &Session, path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = with_json(authorized(Request::post(&api_url(path)), session), body)?;
    let body = send(request).await?;
    decode_body(&body)
}

/// Authenticated POST; any 2xx counts as success and the reply (often an
/// empty 201/204) is not decoded.
pub async fn post_json_no_content<B: Serialize>(
    session: &Session,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let request = with_json(authorized(Request::post(&api_url(path)), session), body)?;
    send(request).await.map(|_| ())
}

/// Authenticated PUT; the response body is ignored.
pub async fn put_json_no_content<B: Serialize>(
    session: &Session,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let request = with_json(authorized(Request::put(&api_url(path)), session), body)?;
    send(request).await.map(|_| ())
}

/// Authenticated PATCH; the response body is ignored.
pub async fn patch_json<B: Serialize>(
    session: &Session,
    path: &str,
    body: Option<&B>,
) -> Result<(), ApiError> {
    let builder = authorized(Request::patch(&api_url(path)), session);
    let request = match body {
        Some(body) => with_json(builder, body)?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };
    send(request).await.map(|_| ())
}

/// Unauthenticated POST of a JSON body (login).
pub async fn post_json_anonymous<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = with_json(Request::post(&api_url(path)), body)?;
    let body = send(request).await?;
    decode_body(&body)
}

/// POST to an absolute URL outside the API (the media host).
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let request = Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = send(request).await?;
    decode_body(&body)
}

/// Escapes a value for use as a single path segment.
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::reports::DateRangeQuery;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, "{}"), ApiError::Forbidden);
        assert!(ApiError::Unauthorized.expires_session());
        assert!(!ApiError::Forbidden.expires_session());
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            ApiError::from_status(400, r#"{"message":"Khoảng thời gian không hợp lệ"}"#),
            ApiError::Http {
                status: 400,
                message: "Khoảng thời gian không hợp lệ".to_string()
            }
        );
        assert_eq!(
            ApiError::from_status(500, r#"{"error":"boom"}"#),
            ApiError::Http {
                status: 500,
                message: "boom".to_string()
            }
        );
        assert_eq!(
            ApiError::from_status(502, "<html>Bad gateway</html>"),
            ApiError::Http {
                status: 502,
                message: "HTTP 502".to_string()
            }
        );
    }

    #[test]
    fn test_decode_body_accepts_both_shapes() {
        let bare: Vec<u32> = decode_body("[1,2,3]").unwrap();
        let wrapped: Vec<u32> = decode_body(r#"{"data":[4]}"#).unwrap();
        assert_eq!(bare, vec![1, 2, 3]);
        assert_eq!(wrapped, vec![4]);

        let err = decode_body::<Vec<u32>>("not json").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_empty_success_body_is_accepted() {
        assert_eq!(check_status(201, String::new()), Ok(String::new()));
        assert_eq!(check_status(204, String::new()).map(|_| ()), Ok(()));
        assert_eq!(check_status(200, "{}".to_string()), Ok("{}".to_string()));
        // the same empty body cannot be decoded, so no-content calls must not try
        assert!(matches!(
            decode_body::<serde_json::Value>(""),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn test_error_status_still_fails_without_body() {
        assert_eq!(check_status(401, String::new()), Err(ApiError::Unauthorized));
        assert_eq!(
            check_status(500, String::new()),
            Err(ApiError::Http {
                status: 500,
                message: "HTTP 500".to_string()
            })
        );
    }

    #[test]
    fn test_auth_failures_prompt_sign_in() {
        assert!(ApiError::Unauthorized.needs_reauth());
        assert!(ApiError::Forbidden.needs_reauth());
        assert!(ApiError::NotAuthenticated.needs_reauth());
        assert!(!ApiError::Network("offline".into()).needs_reauth());
        assert!(ApiError::Forbidden.to_string().contains("đăng nhập lại"));
    }

    #[test]
    fn test_query_string() {
        let query = DateRangeQuery {
            from: "2024-05-16".to_string(),
            to: "2024-06-15".to_string(),
        };
        assert_eq!(
            with_query("/api/admin/statistics/revenue", &query).unwrap(),
            "/api/admin/statistics/revenue?from=2024-05-16&to=2024-06-15"
        );
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
    }
}
