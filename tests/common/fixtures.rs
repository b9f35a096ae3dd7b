//! Test fixtures

use move_runner::config::EngineConfig;
use serde_json::{Value, json};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_USER_AGENT: &str = "move-runner-tests";

/// Client with a fixed user agent and a short timeout
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(TEST_USER_AGENT)
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("test client")
}

/// Engine settings pointing at mock servers
pub fn engine_for(config_base: &str, api_url: &str) -> EngineConfig {
    EngineConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        config_base: Some(config_base.to_string()),
        default_api_url: Some(api_url.to_string()),
    }
}

pub fn move_entry(from: (i64, i64, i64), to: (i64, i64, i64)) -> Value {
    json!({
        "from": {"x": from.0, "y": from.1, "z": from.2},
        "to": {"x": to.0, "y": to.1, "z": to.2},
    })
}

/// Document with `n` independent moves along the x axis
pub fn moves_document(n: i64) -> Value {
    let moves: Vec<Value> = (0..n).map(|i| move_entry((i, 64, 0), (i, 70, 0))).collect();
    json!({ "moves": moves })
}
