//! /api/categories handlers

use actix_web::{Responder, web};

use super::helpers::{api_result, bad_request, ok_json};
use super::types::{CategoriesQuery, CategoriesResponse, SuggestionsResponse};
use crate::services::{CategoryOrder, LinkStore};

/// GET /api/categories?order=name|count
pub async fn list_categories(
    store: web::Data<LinkStore>,
    query: web::Query<CategoriesQuery>,
) -> impl Responder {
    let order = match query.order.as_deref() {
        None | Some("") => CategoryOrder::default(),
        Some(raw) => match raw.parse::<CategoryOrder>() {
            Ok(order) => order,
            Err(e) => return bad_request(e),
        },
    };

    api_result(
        store
            .list_categories(order)
            .await
            .map(|categories| CategoriesResponse {
                success: true,
                categories,
            }),
    )
}

/// GET /api/categories/suggestions
pub async fn category_suggestions(store: web::Data<LinkStore>) -> impl Responder {
    let policy = store.category_policy();
    ok_json(SuggestionsResponse {
        success: true,
        mode: policy.mode(),
        categories: policy.suggestions().to_vec(),
    })
}
