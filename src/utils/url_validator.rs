//! URL 验证模块
//!
//! 链接按原样存储，这里只做校验，不做任何规范化

use url::Url;

/// URL 验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    SurroundingWhitespace,
    TooLong { length: usize, max: usize },
    InvalidFormat(String),
    DisallowedScheme(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "URL must not start or end with whitespace")
            }
            Self::TooLong { length, max } => {
                write!(f, "URL is too long ({} characters, max {})", length, max)
            }
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::DisallowedScheme(scheme) => write!(f, "URL scheme not allowed: {}", scheme),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// URL 校验规则
#[derive(Debug, Clone)]
pub struct UrlRules {
    pub max_length: usize,
    /// 小写 scheme 列表，为空表示不限制
    pub allowed_schemes: Vec<String>,
}

impl Default for UrlRules {
    fn default() -> Self {
        Self {
            max_length: schema::URL_MAX_LENGTH as usize,
            allowed_schemes: Vec::new(),
        }
    }
}

impl UrlRules {
    pub fn new(max_length: usize, allowed_schemes: &[String]) -> Self {
        Self {
            max_length,
            allowed_schemes: allowed_schemes
                .iter()
                .map(|s| s.trim().trim_end_matches(':').to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// 验证 URL
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 首尾无空白（不会被静默修剪）
/// 3. 长度不超过上限
/// 4. 可以解析为绝对 URL
/// 5. scheme 在允许列表中（如果配置了）
pub fn validate_url(url: &str, rules: &UrlRules) -> Result<(), UrlValidationError> {
    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if url.trim() != url {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    let length = url.chars().count();
    if length > rules.max_length {
        return Err(UrlValidationError::TooLong {
            length,
            max: rules.max_length,
        });
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    // Url::parse 已将 scheme 转为小写
    if !rules.allowed_schemes.is_empty()
        && !rules.allowed_schemes.iter().any(|s| s == parsed.scheme())
    {
        return Err(UrlValidationError::DisallowedScheme(
            parsed.scheme().to_string(),
        ));
    }

    Ok(())
}
