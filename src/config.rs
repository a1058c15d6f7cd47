use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Config file picked up from the working directory when no path is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the NPC backend (e.g. http://127.0.0.1:5000)
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub ui: UiSettings,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static` (avatars, vendored htmx, css).
    pub static_dir: String,
    /// Upper bound for a single front-end request, backend call included.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// How long a chat send waits for its reply: four fifths of the request
    /// timeout, leaving room to render the fallback bubble in time.
    pub fn reply_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_secs.saturating_mul(800))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    /// Optional per-request timeout for backend calls. `None` keeps the
    /// network stack's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub json: bool,
}

/// Display settings for the rendered pages.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UiSettings {
    /// Avatar used when the backend sends none.
    pub default_avatar: String,
    /// `chrono` format string for memory timestamps (local time).
    pub timestamp_format: String,
    pub text: UiText,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_avatar: "/static/avatar/default.jpg".to_string(),
            timestamp_format: "%Y/%m/%d %H:%M:%S".to_string(),
            text: UiText::default(),
        }
    }
}

/// Localized strings shown to the user.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UiText {
    pub site_title: String,
    pub listing_title: String,
    pub listing_empty: String,
    pub listing_failed: String,
    pub description_fallback: String,
    pub start_chat: String,
    pub back_to_list: String,
    pub input_placeholder: String,
    pub send: String,
    pub chat_fallback: String,
    pub view_memories: String,
    pub clear_memories: String,
    pub memories_title: String,
    pub memories_empty: String,
    pub memories_failed: String,
    pub clear_confirm: String,
    pub clear_succeeded: String,
    pub clear_failed: String,
    pub close: String,
    pub user_label: String,
    pub not_found: String,
}

impl Default for UiText {
    fn default() -> Self {
        Self {
            site_title: "角色对话".to_string(),
            listing_title: "选择一个角色开始对话".to_string(),
            listing_empty: "暂无可用角色".to_string(),
            listing_failed: "加载角色列表失败，请稍后重试".to_string(),
            description_fallback: "暂无简介".to_string(),
            start_chat: "开始对话".to_string(),
            back_to_list: "返回列表".to_string(),
            input_placeholder: "输入消息，按回车发送…".to_string(),
            send: "发送".to_string(),
            chat_fallback: "抱歉，我现在无法回应，请稍后再试。".to_string(),
            view_memories: "查看记忆".to_string(),
            clear_memories: "清空记忆".to_string(),
            memories_title: "对话记忆".to_string(),
            memories_empty: "暂无记忆".to_string(),
            memories_failed: "加载记忆失败".to_string(),
            clear_confirm: "确定要清空与该角色的全部记忆吗？".to_string(),
            clear_succeeded: "记忆已清空".to_string(),
            clear_failed: "清空记忆失败".to_string(),
            close: "关闭".to_string(),
            user_label: "你".to_string(),
            not_found: "页面不存在".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Priority: CLI flag (or its env var) > `NPC_*` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("server.request_timeout_secs", 60)?
            .set_default("backend.base_url", "http://127.0.0.1:5000")?
            .set_default("log.json", false)?;

        match &cli.config {
            Some(path) => {
                builder = builder.add_source(File::new(path, FileFormat::Yaml));
            }
            None if Path::new(CWD_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::new(CWD_CONFIG_FILE, FileFormat::Yaml));
            }
            None => {}
        }

        // E.g. NPC_SERVER__PORT=8000, NPC_BACKEND__BASE_URL=http://...
        builder = builder.add_source(
            Environment::with_prefix("NPC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.backend_url {
            builder = builder.set_override("backend.base_url", url)?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("log.json", json)?;
        }

        builder.build()?.try_deserialize()
    }
}
