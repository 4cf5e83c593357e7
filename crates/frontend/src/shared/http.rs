//! Thin layer over `gloo_net` shared by every API module.
//!
//! All requests carry the session cookie (`credentials: include`) and the
//! bearer token when one is stored. Mutating requests add the CSRF header.

use contracts::shared::api_error::ApiError;
use contracts::shared::list_response::{parse_list, ListPage};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlDocument, RequestCredentials};

use super::api_utils::{api_url, with_query};
use super::config::{CSRF_COOKIE, CSRF_HEADER};
use crate::system::auth::storage;

/// Value of cookie `name` from a `document.cookie` string, percent-decoded.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        urlencoding::decode(value).ok().map(|v| v.into_owned())
    })
}

fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

fn prepare(builder: RequestBuilder, mutating: bool) -> RequestBuilder {
    let mut builder = builder.credentials(RequestCredentials::Include);
    if let Some(token) = storage::get_access_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    if mutating {
        if let Some(csrf) = csrf_token() {
            builder = builder.header(CSRF_HEADER, &csrf);
        }
    }
    builder
}

fn network_error(e: gloo_net::Error) -> ApiError {
    log::error!("network error: {}", e);
    ApiError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &body);
    log::warn!("{} {} -> {}", status, response.url(), error);
    Err(error)
}

/// Body as JSON. An empty body (204) reads as `null`.
async fn read_json(response: Response) -> Result<Value, ApiError> {
    let text = response.text().await.map_err(network_error)?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = prepare(Request::get(&api_url(path)), false)
        .send()
        .await
        .map_err(network_error)?;
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// `path?query` with the query string built by `serde_qs`.
pub fn query_path<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let query = serde_qs::to_string(query).map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(with_query(path, &query))
}

/// GET with a query string built by `serde_qs`.
pub async fn get_with_query<T, Q>(path: &str, query: &Q) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    get_json(&query_path(path, query)?).await
}

/// GET a list endpoint and fold whichever envelope it uses into a [`ListPage`].
pub async fn get_list<T, Q>(path: &str, query: &Q, items_key: &str) -> Result<ListPage<T>, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let value: Value = get_with_query(path, query).await?;
    parse_list(value, items_key)
}

/// GET an unpaged list endpoint; only the rows are kept.
pub async fn get_items<T: DeserializeOwned>(path: &str, items_key: &str) -> Result<Vec<T>, ApiError> {
    let value: Value = get_json(path).await?;
    Ok(parse_list(value, items_key)?.items)
}

async fn send_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> Result<Value, ApiError> {
    let request = prepare(builder, true)
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    let response = request.send().await.map_err(network_error)?;
    read_json(check(response).await?).await
}

pub async fn post_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, ApiError> {
    send_json(Request::post(&api_url(path)), body).await
}

pub async fn put_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, ApiError> {
    send_json(Request::put(&api_url(path)), body).await
}

pub async fn patch_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, ApiError> {
    send_json(Request::patch(&api_url(path)), body).await
}

async fn send_form(builder: RequestBuilder, form: FormData) -> Result<Value, ApiError> {
    // The browser sets the multipart boundary itself; no Content-Type here.
    let request = prepare(builder, true)
        .body(form)
        .map_err(network_error)?;
    let response = request.send().await.map_err(network_error)?;
    read_json(check(response).await?).await
}

pub async fn post_form(path: &str, form: FormData) -> Result<Value, ApiError> {
    send_form(Request::post(&api_url(path)), form).await
}

pub async fn put_form(path: &str, form: FormData) -> Result<Value, ApiError> {
    send_form(Request::put(&api_url(path)), form).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = prepare(Request::delete(&api_url(path)), true)
        .send()
        .await
        .map_err(network_error)?;
    check(response).await?;
    Ok(())
}

/// A downloaded file body.
pub struct Download {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

pub async fn download(path: &str) -> Result<Download, ApiError> {
    let response = prepare(Request::get(&api_url(path)), false)
        .send()
        .await
        .map_err(network_error)?;
    let response = check(response).await?;
    let headers = response.headers();
    let content_type = headers.get("content-type");
    let content_disposition = headers.get("content-disposition");
    let bytes = response.binary().await.map_err(network_error)?;
    Ok(Download {
        bytes,
        content_type,
        content_disposition,
    })
}

/// Build a `FormData`, mapping JS exceptions into [`ApiError`].
pub fn form_data() -> Result<FormData, ApiError> {
    FormData::new().map_err(|e| ApiError::Validation(format!("{:?}", e)))
}

pub fn append_text(form: &FormData, name: &str, value: &str) -> Result<(), ApiError> {
    form.append_with_str(name, value)
        .map_err(|e| ApiError::Validation(format!("{:?}", e)))
}

pub fn append_file(form: &FormData, name: &str, file: &web_sys::File) -> Result<(), ApiError> {
    form.append_with_blob_and_filename(name, file, &file.name())
        .map_err(|e| ApiError::Validation(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=Tk%3D1; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("Tk=1".to_string()));
        assert_eq!(cookie_value(cookies, "theme"), Some("dark".to_string()));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn test_query_path_from_search_map() {
        let mut query = std::collections::BTreeMap::new();
        query.insert("branch".to_string(), "1".to_string());
        query.insert("field_Vendor".to_string(), "ACME".to_string());
        query.insert("page".to_string(), "2".to_string());
        assert_eq!(
            query_path("/api/data-entry/search/", &query).unwrap(),
            "/api/data-entry/search/?branch=1&field_Vendor=ACME&page=2"
        );
        let empty = std::collections::BTreeMap::<String, String>::new();
        assert_eq!(query_path("/api/logos/", &empty).unwrap(), "/api/logos/");
    }
}
