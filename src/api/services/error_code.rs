//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::LinkError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 1000-1099: 通用错误
/// - 3000-3099: 链接错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // 链接错误 3000-3099
    LinkNotFound = 3000,
    LinkAlreadyExists = 3001,
    LinkValidationFailed = 3002,
}

impl From<&LinkError> for ErrorCode {
    fn from(err: &LinkError) -> Self {
        match err {
            LinkError::Validation(_) => ErrorCode::LinkValidationFailed,
            LinkError::Duplicate(_) => ErrorCode::LinkAlreadyExists,
            LinkError::NotFound(_) => ErrorCode::LinkNotFound,
            LinkError::StorageUnavailable(_) => ErrorCode::ServiceUnavailable,
            LinkError::DatabaseConfig(_) | LinkError::Serialization(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}
