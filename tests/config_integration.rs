use npc_chat_web::config::AppConfig;
use serial_test::serial;
use std::env;
use std::io::Write;

const BIN: &str = "npc-chat-web";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("NPC_SERVER__PORT");
        env::remove_var("NPC_BACKEND__BASE_URL");
        env::remove_var("NPC_UI__TEXT__SEND");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("BACKEND_URL");
        env::remove_var("LOG_JSON");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.backend.timeout_secs, None);
    assert!(!config.log.json);
    assert_eq!(config.ui.default_avatar, "/static/avatar/default.jpg");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("NPC_SERVER__PORT", "9090");
        env::set_var("NPC_BACKEND__BASE_URL", "http://backend:5000");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.backend.base_url, "http://backend:5000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    write!(
        file,
        r#"
server:
  port: 7070
backend:
  timeout_secs: 15
ui:
  text:
    send: "Send"
"#
    )
    .expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.backend.timeout_secs, Some(15));
    assert_eq!(config.ui.text.send, "Send");
    // Untouched strings keep their defaults.
    assert!(!config.ui.text.chat_fallback.is_empty());

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env_and_file() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    write!(file, "server:\n  port: 7070\n").expect("Failed to write temp config");

    unsafe {
        env::set_var("NPC_SERVER__PORT", "9090");
    }

    let path = file.path().to_string_lossy().into_owned();
    let config = AppConfig::load_from_args([
        BIN,
        "--config",
        path.as_str(),
        "--port",
        "4040",
        "--backend-url",
        "http://cli:5000",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 4040);
    assert_eq!(config.backend.base_url, "http://cli:5000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_config_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/nonexistent/npc-chat.yaml"]);
    assert!(result.is_err());
}
