//! TMDB Request Layer
//!
//! Frontend bindings to the TMDB REST API over browser fetch.
//! Every call returns `Result<T, String>`; there is no retry or backoff.

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::MovieDto;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const TMDB_API_KEY: Option<&str> = option_env!("TMDB_API_KEY");

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn build_url(path: &str) -> String {
    match TMDB_API_KEY {
        Some(key) => format!("{}{}?api_key={}", TMDB_BASE_URL, path, key),
        None => format!("{}{}", TMDB_BASE_URL, path),
    }
}

/// GET `path` and deserialize the JSON response
pub async fn request<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let resp_value = JsFuture::from(window.fetch_with_str(&build_url(path)))
        .await
        .map_err(js_err)?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("request {} failed: HTTP {}", path, resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|err| err.to_string())
}

/// Fetch one movie detail record
pub async fn fetch_movie(id: u32) -> Result<MovieDto, String> {
    request(&format!("/movie/{}", id)).await
}

/// Fetch a page worth of details, one request per id, all in flight at
/// once. Any failed lookup fails the whole page.
pub async fn fetch_movie_page(ids: &[u32]) -> Result<Vec<MovieDto>, String> {
    try_join_all(ids.iter().map(|id| fetch_movie(*id))).await
}
