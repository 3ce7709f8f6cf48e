use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use shared::constants::{HEADER_CONTENT_TYPE, MIME_JSON};
use shared::error::ApiError;
use shared::types::ResponseKind;
use shared::utils::response_kind;

use crate::utils::{js_error_text, obj_to_string};

pub const METHOD_GET: &str = "GET";
pub const METHOD_POST: &str = "POST";
pub const METHOD_PUT: &str = "PUT";
pub const METHOD_DELETE: &str = "DELETE";

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub method: &'static str,
    pub body: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { method: METHOD_GET, body: None }
    }
}

impl FetchOptions {
    pub fn method(method: &'static str) -> Self {
        Self { method, body: None }
    }

    pub fn json<T: serde::Serialize>(method: &'static str, data: &T) -> Result<Self, ApiError> {
        let body = obj_to_string(data).ok_or_else(|| ApiError::other("request body is not serializable"))?;
        Ok(Self { method, body: Some(body) })
    }
}

/// One request, no retry. `Ok(None)` for 204, parsed JSON otherwise.
pub async fn fetch_json<R>(url: &str, options: FetchOptions) -> Result<Option<R>, ApiError>
    where R: DeserializeOwned
{
    let resp = send(url, options).await.map_err(|err| ApiError::other(js_error_text(&err)))?;
    let status = resp.status();
    match response_kind(status) {
        ResponseKind::Failure => Err(failure(&resp).await),
        ResponseKind::NoContent => Ok(None),
        ResponseKind::Json => {
            let json = read(resp.json()).await?;
            serde_wasm_bindgen::from_value::<R>(json)
                .map(Some)
                .map_err(|err| {
                    log::error!("fetch_json {url}: {err}");
                    ApiError::other(err.to_string())
                })
        }
    }
}

/// Like [`fetch_json`] for endpoints whose body is of no interest.
pub async fn fetch_empty(url: &str, options: FetchOptions) -> Result<(), ApiError> {
    let resp = send(url, options).await.map_err(|err| ApiError::other(js_error_text(&err)))?;
    match response_kind(resp.status()) {
        ResponseKind::Failure => Err(failure(&resp).await),
        _ => Ok(()),
    }
}

async fn failure(resp: &Response) -> ApiError {
    let status = resp.status();
    let text = match read(resp.text()).await {
        Ok(text) => text.as_string().unwrap_or_default(),
        Err(err) => err.text,
    };
    log::warn!("{} {}: {}", status, resp.url(), text);
    ApiError::status(status, text)
}

async fn read(promise: Result<js_sys::Promise, JsValue>) -> Result<JsValue, ApiError> {
    let promise = promise.map_err(|err| ApiError::other(js_error_text(&err)))?;
    JsFuture::from(promise).await.map_err(|err| ApiError::other(js_error_text(&err)))
}

async fn send(url: &str, options: FetchOptions) -> Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(options.method);
    if let Some(body) = &options.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if options.body.is_some() {
        request.headers().set(HEADER_CONTENT_TYPE, MIME_JSON)?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    log::debug!("{} {}", options.method, url);
    resp_value.dyn_into::<Response>()
}
