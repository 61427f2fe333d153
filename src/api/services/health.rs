use std::time::{Duration, Instant};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, error, trace};

use super::types::HealthResponse;
use crate::services::LinkStore;

const STORAGE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

/// GET /health
///
/// 只查 count，不加载数据；存储不可达或超时返回 503
pub async fn health_check(
    store: web::Data<LinkStore>,
    app_start_time: web::Data<AppStartTime>,
) -> impl Responder {
    let started = Instant::now();
    trace!("Received health check request");

    let (total_links, storage_error) =
        match tokio::time::timeout(STORAGE_CHECK_TIMEOUT, store.count()).await {
            Ok(Ok(count)) => (Some(count), None),
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                (None, Some(e.message().to_string()))
            }
            Err(_) => {
                error!("Storage health check timed out");
                (None, Some("timeout".to_string()))
            }
        };

    let healthy = storage_error.is_none();
    let now = chrono::Utc::now();
    let body = HealthResponse {
        success: healthy,
        status: if healthy { "healthy" } else { "unhealthy" },
        backend: store.backend_name().to_string(),
        total_links,
        error: storage_error,
        started_at: app_start_time.start_datetime,
        uptime_secs: (now - app_start_time.start_datetime).num_seconds().max(0),
    };

    debug!(
        "Health check completed in {:?}, healthy: {}",
        started.elapsed(),
        healthy
    );

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    HttpResponse::build(status).json(body)
}
