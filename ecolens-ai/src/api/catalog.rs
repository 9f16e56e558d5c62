//! Knowledge base browsing endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::knowledge::CategoryRecord;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub count: usize,
    pub categories: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CategoryDetail {
    pub key: &'static str,
    #[serde(flatten)]
    pub record: &'static CategoryRecord,
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoryList> {
    let categories: Vec<&'static str> = state.engine.knowledge_base().keys().collect();
    Json(CategoryList {
        count: categories.len(),
        categories,
    })
}

/// GET /categories/:key
pub async fn get_category(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<CategoryDetail>> {
    let kb = state.engine.knowledge_base();
    let lowered = key.trim().to_lowercase();

    let canonical = kb
        .canonical_key(key.trim())
        .or_else(|| kb.canonical_key(&lowered))
        .ok_or_else(|| ApiError::NotFound(format!("category '{}'", key)))?;
    let record = kb
        .get(canonical)
        .ok_or_else(|| ApiError::NotFound(format!("category '{}'", key)))?;

    Ok(Json(CategoryDetail {
        key: canonical,
        record,
    }))
}

/// Build catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:key", get(get_category))
}
