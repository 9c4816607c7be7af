use serde::{Deserialize, Serialize};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，分隔符为 `__`
pub const ENV_PREFIX: &str = "SCISSORS";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - shortener: 短链接 API（TinyURL）
/// - auth: 身份认证服务（Firebase Auth）
/// - logging: 日志配置
/// - ui: 终端界面行为
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：SCISSORS，分隔符：__
    /// 示例：SCISSORS__SHORTENER__API_TOKEN=xxxx
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        match Self::try_load(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// Strict variant of [`StaticConfig::load`] that reports errors instead of
    /// falling back to defaults.
    pub fn try_load(path: &str) -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File};

        Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<StaticConfig>()
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), crate::errors::ScissorsError> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 短链接 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    #[serde(default = "default_shortener_api_url")]
    pub api_url: String,
    /// Bearer token；为空时请求会被服务端拒绝
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_shortener_domain")]
    pub domain: String,
    #[serde(default = "default_shortener_description")]
    pub description: String,
    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

/// 身份认证配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Firebase Web API key
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_auth_base_url")]
    pub base_url: String,
    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 终端界面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// "Copied!" 提示的显示时长
    #[serde(default = "default_copied_indicator_ms")]
    pub copied_indicator_ms: u64,
    /// 事件循环轮询间隔
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_show_qr")]
    pub show_qr: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_shortener_api_url() -> String {
    "https://api.tinyurl.com/create".to_string()
}

fn default_shortener_domain() -> String {
    "tinyurl.com".to_string()
}

fn default_shortener_description() -> String {
    "string".to_string()
}

fn default_http_timeout() -> u64 {
    10
}

fn default_auth_base_url() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

fn default_copied_indicator_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_show_qr() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            api_url: default_shortener_api_url(),
            api_token: String::new(),
            domain: default_shortener_domain(),
            description: default_shortener_description(),
            timeout_secs: default_http_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_auth_base_url(),
            timeout_secs: default_http_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copied_indicator_ms: default_copied_indicator_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            show_qr: default_show_qr(),
        }
    }
}
