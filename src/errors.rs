use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum LinkError {
    Validation(String),
    Duplicate(String),
    NotFound(String),
    StorageUnavailable(String),
    DatabaseConfig(String),
    Serialization(String),
}

impl LinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkError::Validation(_) => "E001",
            LinkError::Duplicate(_) => "E002",
            LinkError::NotFound(_) => "E003",
            LinkError::StorageUnavailable(_) => "E004",
            LinkError::DatabaseConfig(_) => "E005",
            LinkError::Serialization(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkError::Validation(_) => "Validation Error",
            LinkError::Duplicate(_) => "Duplicate Link",
            LinkError::NotFound(_) => "Resource Not Found",
            LinkError::StorageUnavailable(_) => "Storage Unavailable",
            LinkError::DatabaseConfig(_) => "Database Configuration Error",
            LinkError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkError::Validation(msg)
            | LinkError::Duplicate(msg)
            | LinkError::NotFound(msg)
            | LinkError::StorageUnavailable(msg)
            | LinkError::DatabaseConfig(msg)
            | LinkError::Serialization(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    pub fn http_status(&self) -> StatusCode {
        match self {
            LinkError::Validation(_) => StatusCode::BAD_REQUEST,
            LinkError::Duplicate(_) => StatusCode::CONFLICT,
            LinkError::NotFound(_) => StatusCode::NOT_FOUND,
            LinkError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            LinkError::DatabaseConfig(_) | LinkError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkError {}

// 便捷的构造函数
impl LinkError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkError::Validation(msg.into())
    }

    pub fn duplicate<T: Into<String>>(msg: T) -> Self {
        LinkError::Duplicate(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkError::NotFound(msg.into())
    }

    pub fn storage_unavailable<T: Into<String>>(msg: T) -> Self {
        LinkError::StorageUnavailable(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinkError::DatabaseConfig(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkError::Serialization(msg.into())
    }
}

/// 唯一约束冲突映射为 Duplicate，其余数据库错误统一视为存储不可用
impl From<sea_orm::DbErr> for LinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                LinkError::Duplicate(format!("This link already exists ({})", detail))
            }
            _ => LinkError::StorageUnavailable(err.to_string()),
        }
    }
}

#[cfg(feature = "sled")]
impl From<sled::Error> for LinkError {
    fn from(err: sled::Error) -> Self {
        LinkError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        LinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
