//! Common test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the geolocation mock answers on, mirroring `https://ipapi.co/json/`.
pub const GEOIP_PATH: &str = "/json/";

/// Create an empty working directory that also serves as `XDG_CONFIG_HOME`.
pub fn temp_home() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().to_path_buf();
    (temp_dir, path)
}

/// Write a user config file under `home/stackgen/config.yaml`.
pub fn write_user_config(home: &std::path::Path, contents: &str) -> PathBuf {
    let dir = home.join("stackgen");
    std::fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path = dir.join("config.yaml");
    std::fs::write(&path, contents).expect("Failed to write config");
    path
}

/// Start a geolocation endpoint that expects exactly one `GET` and answers it
/// with `response`.
///
/// Returns the server (keep it alive for the duration of the test; the
/// expectation is verified on drop) and the URL to query.
pub async fn geoip_server(response: ResponseTemplate) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOIP_PATH))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    let url = format!("{}{GEOIP_PATH}", server.uri());
    (server, url)
}

/// A successful ipapi.co-style answer for `code`.
pub fn country(code: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ip": "203.0.113.7",
        "city": "Somewhere",
        "country_code": code,
    }))
}
