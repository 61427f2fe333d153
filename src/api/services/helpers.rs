//! API 帮助函数

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error, web};
use serde::Serialize;
use tracing::{debug, error};

use super::error_code::ErrorCode;
use super::types::ErrorBody;
use crate::errors::LinkError;

/// 请求体上限
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

/// 构建 200 JSON 响应
pub fn ok_json<T: Serialize>(body: T) -> HttpResponse {
    HttpResponse::Ok().json(body)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        success: false,
        code,
        error: message.into(),
    })
}

pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, message)
}

/// 从 LinkError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_link(err: &LinkError) -> HttpResponse {
    match err {
        LinkError::StorageUnavailable(_)
        | LinkError::DatabaseConfig(_)
        | LinkError::Serialization(_) => error!("Request failed: {}", err),
        _ => debug!("Request rejected: {}", err),
    }
    error_response(err.http_status(), ErrorCode::from(err), err.message())
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T: Serialize>(result: Result<T, LinkError>) -> HttpResponse {
    match result {
        Ok(body) => ok_json(body),
        Err(e) => error_from_link(&e),
    }
}

/// 畸形 JSON 请求体返回统一的 400 结构
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req: &HttpRequest| {
            let response = bad_request(format!("Invalid JSON body: {}", err));
            error::InternalError::from_response(err, response).into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        let response = bad_request(format!("Invalid query string: {}", err));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        let response = bad_request(format!("Invalid path parameter: {}", err));
        error::InternalError::from_response(err, response).into()
    })
}

/// 未匹配路由
pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, "Not found")
}
