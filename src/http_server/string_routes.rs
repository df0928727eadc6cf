//! String HTTP Routes
//!
//! Endpoints for creating, fetching, filtering, and deleting analyzed
//! strings. Validation order is fixed so status codes stay deterministic:
//! field presence, then type, then emptiness, then duplicate check.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::analyzer;
use crate::query::{QueryTranslator, StringFilters};
use crate::store::{StringRecord, StringStore};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across string handlers.
///
/// Owned by the server entry point and injected into handlers; there is no
/// hidden global.
pub struct AppState {
    pub store: StringStore,
    pub translator: QueryTranslator,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: StringStore::new(),
            translator: QueryTranslator::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Response Types
// ==================

/// Listing response for structured filter queries
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: StringFilters,
}

/// Listing response for natural-language queries
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Echo of how a free-text query was understood
#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: StringFilters,
}

// ==================
// String Routes
// ==================

/// Create string routes
pub fn string_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/strings", post(create_string_handler))
        .route("/strings", get(list_strings_handler))
        // Static segment wins over the {string_value} capture below
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_handler),
        )
        .route("/strings/{string_value}", get(get_string_handler))
        .route("/strings/{string_value}", delete(delete_string_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// POST /strings - analyze and store a new string
async fn create_string_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    let value = match body.get("value") {
        None => return Err(ApiError::MissingField("value")),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ApiError::InvalidFieldType("value")),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::EmptyValue);
    }

    let properties = analyzer::analyze(trimmed);
    let record = state.store.create(trimmed, properties)?;

    tracing::info!(id = %record.id, length = record.properties.length, "string stored");

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/{string_value} - fetch by percent-decoded value
async fn get_string_handler(
    State(state): State<Arc<AppState>>,
    Path(string_value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    let record = state
        .store
        .find_by_value(&string_value)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(record))
}

/// GET /strings - list with optional structured filters
async fn list_strings_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListResponse>> {
    let filters = parse_list_filters(&params)?;
    let data = state.store.find_all(&filters)?;

    Ok(Json(ListResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// GET /strings/filter-by-natural-language - translate free text, then filter
async fn natural_language_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    let query = params
        .get("query")
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingParam("query"))?;

    let filters = state.translator.translate(query)?;
    let data = state.store.find_all(&filters)?;

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query.clone(),
            parsed_filters: filters,
        },
    }))
}

/// DELETE /strings/{string_value} - remove by percent-decoded value
async fn delete_string_handler(
    State(state): State<Arc<AppState>>,
    Path(string_value): Path<String>,
) -> ApiResult<StatusCode> {
    let record = state
        .store
        .find_by_value(&string_value)?
        .ok_or(ApiError::NotFound)?;

    state.store.delete_by_id(&record.id)?;
    tracing::info!(id = %record.id, "string deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ==================
// Helper Functions
// ==================

/// Parse structured filter query parameters.
///
/// Numeric parameters must be non-negative integers; `contains_character`
/// must be exactly one character and is case-folded. `is_palindrome`
/// compares against the literal "true": anything else means false.
fn parse_list_filters(params: &HashMap<String, String>) -> ApiResult<StringFilters> {
    let mut filters = StringFilters::default();

    if let Some(raw) = params.get("is_palindrome") {
        filters.is_palindrome = Some(raw == "true");
    }

    if let Some(raw) = params.get("min_length") {
        filters.min_length = Some(parse_non_negative(raw, "min_length")?);
    }

    if let Some(raw) = params.get("max_length") {
        filters.max_length = Some(parse_non_negative(raw, "max_length")?);
    }

    if let Some(raw) = params.get("word_count") {
        filters.word_count = Some(parse_non_negative(raw, "word_count")?);
    }

    if let Some(raw) = params.get("contains_character") {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                filters.contains_character = Some(fold_char(c));
            }
            _ => {
                return Err(ApiError::InvalidQueryParam(
                    "contains_character",
                    "must be a single character",
                ))
            }
        }
    }

    Ok(filters)
}

fn parse_non_negative(raw: &str, name: &'static str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(ApiError::InvalidQueryParam(
            name,
            "must be non-negative integer",
        )),
    }
}

/// Case-fold a single character; folds that expand keep the original.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
