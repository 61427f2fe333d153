//! Server mode
//!
//! This module contains the HTTP server startup logic.

use std::time::Duration;

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, Condition, DefaultHeaders},
    web,
};
use anyhow::Result;
use tracing::warn;

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{AppStartTime, configure};
use crate::config::{ServerConfig, StaticConfig};
use crate::runtime::lifetime;

/// Build CORS middleware from `server.cors_allowed_origins`
///
/// 包含 `*`：任意来源。空列表时不挂载（见 `run_server`），浏览器按同源策略处理
pub fn build_cors_middleware(server: &ServerConfig) -> Cors {
    let origins = &server.cors_allowed_origins;
    if origins.is_empty() {
        return Cors::default();
    }

    let mut cors = if origins.iter().any(|o| o == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors = cors
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .allowed_header(actix_web::http::header::ACCEPT)
        .max_age(3600);
    cors
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let store = lifetime::startup::prepare_store(config)
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {:#}", e);
            e
        })?;

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    if config.server.cors_allowed_origins.iter().any(|o| o == "*") {
        warn!("CORS allows any origin");
    }

    let server_config = config.server.clone();
    let store_for_app = store.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(Condition::new(
                !server_config.cors_allowed_origins.is_empty(),
                build_cors_middleware(&server_config),
            ))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::Data::from(store_for_app.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(configure)
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .workers(cpu_count)
    .disable_signals();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();
    let handle = server.handle();

    tokio::select! {
        res = server => {
            res?;
            lifetime::shutdown::close_store(&store).await;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            // 先等在途请求完成，再关闭连接池
            handle.stop(true).await;
            lifetime::shutdown::close_store(&store).await;
            warn!("Graceful shutdown completed");
        }
    }

    Ok(())
}
