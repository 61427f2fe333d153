use actix_web::{Responder, web};

use super::helpers::api_result;
use super::types::StatsResponse;
use crate::services::LinkStore;

/// GET /api/stats
pub async fn get_stats(store: web::Data<LinkStore>) -> impl Responder {
    api_result(store.stats().await.map(|stats| StatsResponse {
        success: true,
        stats,
    }))
}
