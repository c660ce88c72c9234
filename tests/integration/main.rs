//! Integration tests for stackgen.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use std::path::Path;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::ResponseTemplate;

/// Helper to create a command for the stackgen binary, isolated from the
/// caller's configuration.
fn stackgen_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stackgen"));
    cmd.current_dir(home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("STACKGEN_LOCALE")
        .env_remove("STACKGEN_DETECT")
        .env_remove("STACKGEN_GEOIP_URL")
        .env_remove("STACKGEN_GEOIP_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tech Stack Generator"));
}

#[test]
fn test_version() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home).arg("unknown-command").assert().failure();
}

#[test]
fn test_translate_default_locale_is_chinese() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .args(["translate", "title"])
        .assert()
        .success()
        .stdout("技术栈生成器\n");
}

#[test]
fn test_translate_with_locale_flag() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .args(["translate", "result.title", "--locale", "ja-JP"])
        .assert()
        .success()
        .stdout("パーフェクトな技術スタック！\n");
}

#[test]
fn test_translate_missing_key_prints_key() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .args(["translate", "result.nonexistent", "--locale", "en"])
        .assert()
        .success()
        .stdout("result.nonexistent\n");
}

#[test]
fn test_unsupported_locale_flag() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .args(["translate", "title", "--locale", "fr"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported locale 'fr'"));
}

#[test]
fn test_catalog_json() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .args(["catalog", "--locale", "en", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"result.footer\""))
        .stdout(predicate::str::contains("Time to start coding!"));
}

#[test]
fn test_locales_table() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("CODE"))
        .stdout(predicate::str::contains("日本語"))
        .stdout(predicate::str::contains("initial"))
        .stdout(predicate::str::contains("fallback"));
}

#[test]
fn test_check_catalog() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Catalog OK: 14 keys in 3 locales"));
}

#[test]
fn test_user_config_sets_initial_locale() {
    let (_dir, home) = common::temp_home();
    common::write_user_config(&home, "locale: en\ndetect: false\n");
    stackgen_cmd(&home).args(["translate", "start"]).assert().success().stdout("Start\n");
}

#[test]
fn test_env_overrides_user_config() {
    let (_dir, home) = common::temp_home();
    common::write_user_config(&home, "locale: en\n");
    stackgen_cmd(&home)
        .env("STACKGEN_LOCALE", "ja")
        .args(["translate", "start"])
        .assert()
        .success()
        .stdout("開始\n");
}

#[test]
fn test_render_without_detection() {
    let (_dir, home) = common::temp_home();
    stackgen_cmd(&home)
        .args(["render", "--no-detect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("技术栈生成器"))
        .stdout(predicate::str::contains("[ 开始选择 ]"))
        .stdout(predicate::str::contains("Tech Stack Generator").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_render_switches_to_detected_locale() {
    let (_dir, home) = common::temp_home();
    let (_server, url) = common::geoip_server(common::country("JP")).await;

    let output = stackgen_cmd(&home)
        .env("STACKGEN_GEOIP_URL", url)
        .args(["render", "--wait", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Language: 日本語 (ja)"))
        .get_output()
        .stdout
        .clone();

    // The first frame is drawn in Chinese before the Japanese re-render
    let stdout = String::from_utf8(output).unwrap();
    let zh = stdout.find("技术栈生成器").unwrap();
    let ja = stdout.find("技術スタックジェネレーター").unwrap();
    assert!(zh < ja, "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_render_first_frame_is_chinese_even_with_fast_detection() {
    for _ in 0..5 {
        let (_dir, home) = common::temp_home();
        let (_server, url) = common::geoip_server(common::country("us")).await;

        let output = stackgen_cmd(&home)
            .env("STACKGEN_GEOIP_URL", url)
            .args(["render", "--wait", "10"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = String::from_utf8(output).unwrap();
        assert!(stdout.starts_with("技术栈生成器\n"), "{stdout}");
        assert!(stdout.contains("Tech Stack Generator"), "{stdout}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_render_keeps_locale_on_server_error() {
    let (_dir, home) = common::temp_home();
    let (_server, url) = common::geoip_server(ResponseTemplate::new(500)).await;
    stackgen_cmd(&home)
        .env("STACKGEN_GEOIP_URL", url)
        .args(["render", "--wait", "10", "--stack", "Vue,Axum,PostgreSQL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("你的完美技术栈！"))
        .stdout(predicate::str::contains("PostgreSQL"))
        .stderr(predicate::str::contains("Language:").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_render_keeps_locale_on_timeout() {
    let (_dir, home) = common::temp_home();
    let slow = common::country("JP").set_delay(Duration::from_secs(5));
    let (_server, url) = common::geoip_server(slow).await;
    stackgen_cmd(&home)
        .env("STACKGEN_GEOIP_URL", url)
        .env("STACKGEN_GEOIP_TIMEOUT_SECS", "1")
        .args(["render", "--wait", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("技术栈生成器"))
        .stdout(predicate::str::contains("技術スタックジェネレーター").not())
        .stderr(predicate::str::contains("Language:").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_detect_command() {
    let (_dir, home) = common::temp_home();
    let (_server, url) = common::geoip_server(common::country("hk")).await;
    stackgen_cmd(&home)
        .env("STACKGEN_GEOIP_URL", url)
        .arg("detect")
        .assert()
        .success()
        .stdout("zh\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_detect_command_reports_failure() {
    let (_dir, home) = common::temp_home();
    let rate_limited = ResponseTemplate::new(429).set_body_json(json!({"error": true}));
    let (_server, url) = common::geoip_server(rate_limited).await;
    stackgen_cmd(&home)
        .env("STACKGEN_GEOIP_URL", url)
        .arg("detect")
        .assert()
        .code(10)
        .stderr(predicate::str::contains("unexpected status 429"));
}

mod resolver_tests {
    use super::*;
    use stackgen::detect::{GeoLocator, IpApiLocator, detect_and_update_locale, spawn_detection};
    use stackgen::i18n::{Locale, LocaleState};
    use url::Url;

    fn locator(url: &str, timeout: Duration) -> IpApiLocator {
        IpApiLocator::new(Url::parse(url).unwrap(), timeout)
    }

    async fn resolve(response: ResponseTemplate) -> (Locale, bool) {
        let (_server, url) = common::geoip_server(response).await;
        let state = LocaleState::new(Locale::Zh);
        let rx = state.subscribe();
        detect_and_update_locale(&state, &locator(&url, Duration::from_secs(5))).await;
        (state.get(), rx.has_changed().unwrap())
    }

    #[tokio::test]
    async fn test_japan_switches_to_japanese() {
        assert_eq!(resolve(common::country("JP")).await, (Locale::Ja, true));
    }

    #[tokio::test]
    async fn test_other_country_switches_to_english() {
        assert_eq!(resolve(common::country("us")).await, (Locale::En, true));
    }

    #[tokio::test]
    async fn test_hong_kong_keeps_chinese_without_notification() {
        assert_eq!(resolve(common::country("hk")).await, (Locale::Zh, false));
    }

    #[tokio::test]
    async fn test_padded_country_code_is_unrecognized() {
        assert_eq!(resolve(common::country(" jp")).await, (Locale::En, true));
    }

    #[tokio::test]
    async fn test_missing_country_code_keeps_locale() {
        let body = json!({"error": true, "reason": "RateLimited"});
        let response = ResponseTemplate::new(200).set_body_json(body);
        assert_eq!(resolve(response).await, (Locale::Zh, false));
    }

    #[tokio::test]
    async fn test_non_json_body_keeps_locale() {
        let response = ResponseTemplate::new(200).set_body_string("<html>oops</html>");
        assert_eq!(resolve(response).await, (Locale::Zh, false));
    }

    #[tokio::test]
    async fn test_server_error_is_reported_by_locator() {
        let (_server, url) = common::geoip_server(ResponseTemplate::new(503)).await;
        let err = locator(&url, Duration::from_secs(5)).country_code().await.unwrap_err();
        assert!(matches!(err, stackgen::DetectionError::Status(s) if s.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_timeout_keeps_locale() {
        let slow = common::country("JP").set_delay(Duration::from_secs(5));
        let (_server, url) = common::geoip_server(slow).await;
        let state = LocaleState::new(Locale::Zh);

        let handle = spawn_detection(state.clone(), locator(&url, Duration::from_millis(300)));
        tokio::time::timeout(Duration::from_secs(4), handle).await.unwrap().unwrap();
        assert_eq!(state.get(), Locale::Zh);
    }
}
