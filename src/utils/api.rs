//! プロジェクトAPI連携
//!
//! 取得先エンドポイントの解決と一覧取得。エンドポイントは
//! URLパラメータ (?api=xxx) → LocalStorage → 同梱サンプル の順で決まる

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::Project;
use crate::utils::log_trace::log_info;

const API_URL_KEY: &str = "project_dashboard_api_url";

/// エンドポイント未設定時は同梱サンプルを読む
const DEFAULT_API_URL: &str = "data/sample_projects.json";

/// サンプルデータの更新日時を取得（ビルド時に埋め込み）
pub fn format_data_modified_time() -> String {
    let timestamp_str = option_env!("SAMPLE_DATA_MODIFIED").unwrap_or("0");
    let timestamp: i64 = timestamp_str.parse().unwrap_or(0);
    if timestamp == 0 {
        return "データ更新: 不明".to_string();
    }
    // JST (UTC+9) に変換して表示
    let secs = timestamp + 9 * 3600;
    let days = secs / 86400;
    let remaining = secs % 86400;
    let hours = remaining / 3600;
    let minutes = (remaining % 3600) / 60;
    let (year, month, day) = days_to_ymd(days);
    format!("データ更新: {}-{:02}-{:02} {:02}:{:02}", year, month, day, hours, minutes)
}

fn days_to_ymd(days: i64) -> (i64, i64, i64) {
    // 簡易的なグレゴリオ暦変換
    let mut remaining = days;
    let mut year = 1970;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining < days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }
    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };
    let mut month = 1;
    for &d in &days_in_months {
        if remaining < d {
            break;
        }
        remaining -= d;
        month += 1;
    }
    (year, month, remaining + 1)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// APIエンドポイントURLを保存
pub fn save_api_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// APIエンドポイントURLを取得
pub fn get_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let url = storage.get_item(API_URL_KEY).ok()??;
    if url.is_empty() { None } else { Some(url) }
}

/// URLパラメータからAPIエンドポイントを取り込む (?api=xxx)
pub fn init_api_from_url_params() {
    if let Some(url) = take_api_url_from_search() {
        log_info("config", &format!("APIエンドポイントを設定: {}", url));
    }
}

fn take_api_url_from_search() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if !search.starts_with("?api=") {
        return None;
    }
    let encoded = &search[5..];
    let decoded = js_sys::decode_uri_component(encoded).ok()?.as_string()?;
    save_api_url(&decoded);
    // URLからパラメータを削除
    let pathname = window.location().pathname().ok()?;
    let hash = window.location().hash().ok().unwrap_or_default();
    let history = window.history().ok()?;
    let _ = history.replace_state_with_url(
        &JsValue::NULL,
        "",
        Some(&format!("{}{}", pathname, hash)),
    );
    Some(decoded)
}

/// 取得先URLを解決
fn resolve_api_url() -> String {
    get_api_url().unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

// APIレスポンス型
#[derive(Deserialize)]
struct ApiResponse {
    projects: Option<Vec<Project>>,
    #[allow(dead_code)]
    timestamp: Option<String>,
    #[allow(dead_code)]
    error: Option<String>,
}

/// APIからプロジェクト一覧を取得
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    let url = resolve_api_url();

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| format!("Request作成失敗: {:?}", e))?;

    let window = web_sys::window().ok_or("windowがありません")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch失敗: {:?}", e))?;

    let resp: Response = resp_value.dyn_into()
        .map_err(|_| "Responseへの変換失敗")?;

    if !resp.ok() {
        return Err(format!("APIエラー: {}", resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("json()失敗: {:?}", e))?)
        .await
        .map_err(|e| format!("JSON取得失敗: {:?}", e))?;

    let response: ApiResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| format!("JSONパース失敗: {:?}", e))?;

    response.projects.ok_or("プロジェクトデータが空です".to_string())
}
