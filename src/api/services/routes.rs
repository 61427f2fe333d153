//! API 路由配置

use actix_web::web;

use super::categories::{category_suggestions, list_categories};
use super::health::health_check;
use super::helpers::{json_config, path_config, query_config};
use super::links::{add_link, delete_link, get_link, list_links};
use super::stats::get_stats;

/// 链接路由 `/links`
pub fn links_routes() -> actix_web::Scope {
    web::scope("/links")
        .route("", web::get().to(list_links))
        .route("", web::post().to(add_link))
        .route("/{id}", web::get().to(get_link))
        .route("/{id}", web::delete().to(delete_link))
}

/// 分类路由 `/categories`（suggestions 需在前）
pub fn categories_routes() -> actix_web::Scope {
    web::scope("/categories")
        .route("", web::get().to(list_categories))
        .route("/suggestions", web::get().to(category_suggestions))
}

/// 统计路由 `/stats`
pub fn stats_routes() -> actix_web::Scope {
    web::scope("/stats").route("", web::get().to(get_stats))
}

/// `/api` 下的全部路由
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(links_routes())
        .service(categories_routes())
        .service(stats_routes())
}

/// 把 `/api` 与 `/health` 挂到 App 上，服务器与测试共用
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_routes())
        .route("/health", web::get().to(health_check))
        .default_service(web::to(super::helpers::not_found));
}
