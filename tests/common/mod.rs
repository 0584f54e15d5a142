#![allow(dead_code)]

pub mod validate_server;

use docval::config::Config;
use docval::core::client::ValidationClient;
use url::Url;

pub const SAMPLE_RESPONSE: &str =
    r#"{"validationResult":{"ok":true},"summary":"Looks valid","key_info":{"name":"Jane","dob":null}}"#;

pub fn client_for(base_url: &str) -> ValidationClient {
    let config = Config {
        base_url: Url::parse(base_url).expect("test base URL"),
        ..Config::default()
    };
    ValidationClient::new(&config).expect("client")
}
