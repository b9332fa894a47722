// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use katalog_api::params::{parse_animal_list_params, parse_plant_list_params};
use katalog_api::{map_status, page_dto, ApiError, ApiErrorCode, DetailDto, SummaryDto};
use katalog_model::{AnimalId, PlantId};
use katalog_query::{
    animal_sort_text, compose_animal_criteria, compose_plant_criteria, paginate, plant_sort_text,
    sort_rows, ComposeError,
};
use katalog_store::{AnimalSource, FeedPhase, ListFeed, PlantSource};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info, warn};

fn api_error_response(err: ApiError) -> Response {
    let status =
        StatusCode::from_u16(map_status(&err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": err}))).into_response()
}

fn compose_error(err: &ComposeError) -> ApiError {
    ApiError::invalid_param(err.field, &err.value)
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn summary_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (animals, plants) = tokio::join!(state.store.list_animals(), state.store.list_plants());
    let animal_count = animals
        .map(|rows| rows.len())
        .inspect_err(|e| warn!("animal count unavailable: {e}"))
        .ok();
    let plant_count = plants
        .map(|rows| rows.len())
        .inspect_err(|e| warn!("plant count unavailable: {e}"))
        .ok();
    Json(SummaryDto {
        animal_count,
        plant_count,
    })
}

pub(crate) async fn animal_list_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let params = match parse_animal_list_params(&query) {
        Ok(params) => params,
        Err(err) => return api_error_response(err),
    };
    let criteria = match compose_animal_criteria(&params.selection, &params.term) {
        Ok(criteria) => criteria,
        Err(err) => return api_error_response(compose_error(&err)),
    };
    info!(route = "/hewan", page = params.request.page, "list request");
    let feed = ListFeed::spawn(
        Arc::new(AnimalSource::new(Arc::clone(&state.store))),
        criteria,
    );
    match feed.settled().await {
        FeedPhase::Ready(mut rows) => {
            sort_rows(&mut rows, &params.order, animal_sort_text);
            let view = paginate(&rows, &params.request);
            Json(page_dto(&view, &params.request)).into_response()
        }
        FeedPhase::Failed(message) => {
            error!(route = "/hewan", "list fetch failed: {message}");
            api_error_response(ApiError::store_unavailable(message))
        }
        _ => api_error_response(ApiError::new(
            ApiErrorCode::Internal,
            "list fetch did not settle",
            json!({}),
        )),
    }
}

pub(crate) async fn plant_list_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let params = match parse_plant_list_params(&query) {
        Ok(params) => params,
        Err(err) => return api_error_response(err),
    };
    let criteria = match compose_plant_criteria(&params.selection, &params.term) {
        Ok(criteria) => criteria,
        Err(err) => return api_error_response(compose_error(&err)),
    };
    info!(route = "/tanaman", page = params.request.page, "list request");
    let feed = ListFeed::spawn(
        Arc::new(PlantSource::new(Arc::clone(&state.store))),
        criteria,
    );
    match feed.settled().await {
        FeedPhase::Ready(mut rows) => {
            sort_rows(&mut rows, &params.order, plant_sort_text);
            let view = paginate(&rows, &params.request);
            Json(page_dto(&view, &params.request)).into_response()
        }
        FeedPhase::Failed(message) => {
            error!(route = "/tanaman", "list fetch failed: {message}");
            api_error_response(ApiError::store_unavailable(message))
        }
        _ => api_error_response(ApiError::new(
            ApiErrorCode::Internal,
            "list fetch did not settle",
            json!({}),
        )),
    }
}

pub(crate) async fn animal_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    info!(route = "/hewan/detail", id, "detail request");
    match state.store.animal_by_id(AnimalId::new(id)).await {
        Ok(Some(record)) => Json(DetailDto { record }).into_response(),
        Ok(None) => api_error_response(ApiError::record_not_found("hewan", &id.to_string())),
        Err(err) => {
            error!(route = "/hewan/detail", id, "detail fetch failed: {err}");
            api_error_response(ApiError::store_unavailable(err.to_string()))
        }
    }
}

pub(crate) async fn plant_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let plant_id = match PlantId::parse(&id) {
        Ok(plant_id) => plant_id,
        Err(_) => return api_error_response(ApiError::invalid_param("id", &id)),
    };
    info!(route = "/tanaman/detail", id = %plant_id, "detail request");
    match state.store.plant_by_id(&plant_id).await {
        Ok(Some(record)) => Json(DetailDto { record }).into_response(),
        Ok(None) => api_error_response(ApiError::record_not_found("tanaman", plant_id.as_str())),
        Err(err) => {
            error!(route = "/tanaman/detail", id = %plant_id, "detail fetch failed: {err}");
            api_error_response(ApiError::store_unavailable(err.to_string()))
        }
    }
}
