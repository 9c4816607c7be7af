//! 长链接输入检查
//!
//! 只作为输入提示使用：控制器本身只检查是否为空。

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "Please enter a URL to shorten"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Unsupported protocol {}. Only http:// and https:// links can be shortened",
                proto
            ),
            Self::DangerousProtocol(proto) => write!(f, "Protocol {} is not allowed", proto),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// 没有 `//` 但正文里常带 `@` 的协议
const OPAQUE_SCHEMES: &[&str] = &["mailto", "tel", "sms", "news", "urn", "magnet", "xmpp"];

/// 取出 `scheme:` 前缀
///
/// `localhost:8080` 这类 host:port 和 `user:pass@example.com` 这类
/// 带凭据的主机都不算协议。
fn scheme_prefix(input: &str) -> Option<&str> {
    let (scheme, rest) = input.split_once(':')?;
    let looks_like_scheme = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic());
    let is_port = rest.starts_with(|c: char| c.is_ascii_digit());
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let is_userinfo = !rest.starts_with("//")
        && authority.contains('@')
        && !OPAQUE_SCHEMES.contains(&scheme);
    (looks_like_scheme && !is_port && !is_userinfo).then_some(scheme)
}

/// 规范化用户输入的长链接
///
/// 去掉首尾空白；没有协议时补上 `https://`；拒绝危险协议和非 http(s) 协议。
pub fn normalize_long_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let lower = trimmed.to_lowercase();
    if let Some(proto) = DANGEROUS_PROTOCOLS.iter().find(|p| lower.starts_with(*p)) {
        return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
    }

    let candidate = match scheme_prefix(&lower) {
        Some("http") | Some("https") => trimmed.to_string(),
        Some(other) => return Err(UrlValidationError::InvalidProtocol(format!("{}:", other))),
        None => format!("https://{}", trimmed),
    };

    let parsed =
        Url::parse(&candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat("missing host".to_string()));
    }

    Ok(candidate)
}
