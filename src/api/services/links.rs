//! /api/links handlers

use actix_web::{HttpResponse, Responder, web};
use tracing::info;

use super::helpers::{api_result, bad_request, error_from_link, ok_json};
use super::types::{
    AddLinkRequest, AddLinkResponse, CategoryNamesResponse, LinkResponse, LinksResponse,
    ListLinksQuery, MessageResponse,
};
use crate::errors::LinkError;
use crate::services::{CategoryOrder, LinkStore};
use crate::storage::LinkId;

const ACTION_CATEGORIES: &str = "categories";

/// GET /api/links?category=C | ?action=categories
pub async fn list_links(
    store: web::Data<LinkStore>,
    query: web::Query<ListLinksQuery>,
) -> impl Responder {
    let query = query.into_inner();

    match query.action.as_deref() {
        None | Some("") => {}
        Some(ACTION_CATEGORIES) => {
            let result = store
                .list_categories(CategoryOrder::Name)
                .await
                .map(|counts| CategoryNamesResponse {
                    success: true,
                    categories: counts.into_iter().map(|c| c.category).collect(),
                });
            return api_result(result);
        }
        Some(other) => return bad_request(format!("Unknown action: {}", other)),
    }

    api_result(
        store
            .list(query.category.as_deref())
            .await
            .map(|links| LinksResponse {
                success: true,
                count: links.len(),
                links,
            }),
    )
}

/// POST /api/links
pub async fn add_link(
    store: web::Data<LinkStore>,
    body: web::Json<AddLinkRequest>,
) -> impl Responder {
    let AddLinkRequest { url, category } = body.into_inner();
    let (Some(url), Some(category)) = (url, category) else {
        return bad_request("URL and category are required");
    };

    match store.add(&url, &category).await {
        Ok(link) => {
            info!("API: link #{} added", link.id);
            ok_json(AddLinkResponse {
                success: true,
                message: "Link added successfully".to_string(),
                link,
            })
        }
        Err(e) => error_from_link(&e),
    }
}

/// GET /api/links/{id}
pub async fn get_link(store: web::Data<LinkStore>, path: web::Path<LinkId>) -> impl Responder {
    let id = path.into_inner();

    match store.get(id).await {
        Ok(Some(link)) => ok_json(LinkResponse {
            success: true,
            link,
        }),
        Ok(None) => error_from_link(&LinkError::not_found(format!("Link not found: {}", id))),
        Err(e) => error_from_link(&e),
    }
}

/// DELETE /api/links/{id}
pub async fn delete_link(store: web::Data<LinkStore>, path: web::Path<LinkId>) -> HttpResponse {
    let id = path.into_inner();

    api_result(store.remove(id).await.map(|()| {
        info!("API: link #{} deleted", id);
        MessageResponse {
            success: true,
            message: "Link deleted successfully".to_string(),
        }
    }))
}
