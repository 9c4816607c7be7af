use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScissorsError {
    CreateFailed(String),
    Validation(String),
    Auth(String),
    Config(String),
    Clipboard(String),
    QrCode(String),
    FileOperation(String),
    Serialization(String),
    Terminal(String),
}

impl ScissorsError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ScissorsError::CreateFailed(_) => "E001",
            ScissorsError::Validation(_) => "E002",
            ScissorsError::Auth(_) => "E003",
            ScissorsError::Config(_) => "E004",
            ScissorsError::Clipboard(_) => "E005",
            ScissorsError::QrCode(_) => "E006",
            ScissorsError::FileOperation(_) => "E007",
            ScissorsError::Serialization(_) => "E008",
            ScissorsError::Terminal(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ScissorsError::CreateFailed(_) => "Create Failed",
            ScissorsError::Validation(_) => "Validation Error",
            ScissorsError::Auth(_) => "Authentication Error",
            ScissorsError::Config(_) => "Configuration Error",
            ScissorsError::Clipboard(_) => "Clipboard Error",
            ScissorsError::QrCode(_) => "QR Code Error",
            ScissorsError::FileOperation(_) => "File Operation Error",
            ScissorsError::Serialization(_) => "Serialization Error",
            ScissorsError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ScissorsError::CreateFailed(msg)
            | ScissorsError::Validation(msg)
            | ScissorsError::Auth(msg)
            | ScissorsError::Config(msg)
            | ScissorsError::Clipboard(msg)
            | ScissorsError::QrCode(msg)
            | ScissorsError::FileOperation(msg)
            | ScissorsError::Serialization(msg)
            | ScissorsError::Terminal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ScissorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ScissorsError {}

// 便捷的构造函数
impl ScissorsError {
    pub fn create_failed<T: Into<String>>(msg: T) -> Self {
        ScissorsError::CreateFailed(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ScissorsError::Validation(msg.into())
    }

    pub fn auth<T: Into<String>>(msg: T) -> Self {
        ScissorsError::Auth(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ScissorsError::Config(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ScissorsError::Clipboard(msg.into())
    }

    pub fn qr_code<T: Into<String>>(msg: T) -> Self {
        ScissorsError::QrCode(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ScissorsError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ScissorsError::Serialization(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        ScissorsError::Terminal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for ScissorsError {
    fn from(err: std::io::Error) -> Self {
        ScissorsError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ScissorsError {
    fn from(err: serde_json::Error) -> Self {
        ScissorsError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ScissorsError {
    fn from(err: toml::ser::Error) -> Self {
        ScissorsError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ScissorsError {
    fn from(err: config::ConfigError) -> Self {
        ScissorsError::Config(err.to_string())
    }
}

impl From<arboard::Error> for ScissorsError {
    fn from(err: arboard::Error) -> Self {
        ScissorsError::Clipboard(err.to_string())
    }
}

impl From<qrcode::types::QrError> for ScissorsError {
    fn from(err: qrcode::types::QrError) -> Self {
        ScissorsError::qr_code(err.to_string())
    }
}

impl From<crate::utils::UrlValidationError> for ScissorsError {
    fn from(err: crate::utils::UrlValidationError) -> Self {
        ScissorsError::validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScissorsError>;
