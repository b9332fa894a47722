// SPDX-License-Identifier: Apache-2.0

//! List-page query parameters.
//!
//! Filter selections are passed through raw (the composer owns their
//! validation); sort, direction, page and page size are parsed here.
//! Absent parameters take the page defaults: no sort field, ascending,
//! page 1, 25 rows.

use crate::ApiError;
use katalog_query::{
    AnimalSelection, AnimalSortField, PageRequest, PageSize, PlantSelection, PlantSortField,
    SortDirection, SortOrder,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalListParams {
    pub selection: AnimalSelection,
    pub term: String,
    pub order: SortOrder<AnimalSortField>,
    pub request: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantListParams {
    pub selection: PlantSelection,
    pub term: String,
    pub order: SortOrder<PlantSortField>,
    pub request: PageRequest,
}

pub fn parse_animal_list_params(
    query: &BTreeMap<String, String>,
) -> Result<AnimalListParams, ApiError> {
    Ok(AnimalListParams {
        selection: AnimalSelection {
            sex: raw(query, "jenis_kelamin"),
            age_class: raw(query, "rentang_usia"),
            zone: raw(query, "lokasi"),
        },
        term: raw(query, "q"),
        order: parse_order(query, |name| {
            AnimalSortField::parse(name).ok_or_else(|| ApiError::invalid_param("sort", name))
        })?,
        request: parse_request(query)?,
    })
}

pub fn parse_plant_list_params(
    query: &BTreeMap<String, String>,
) -> Result<PlantListParams, ApiError> {
    Ok(PlantListParams {
        selection: PlantSelection {
            category: raw(query, "jenis_tanaman"),
        },
        term: raw(query, "q"),
        order: parse_order(query, |name| {
            PlantSortField::parse(name).ok_or_else(|| ApiError::invalid_param("sort", name))
        })?,
        request: parse_request(query)?,
    })
}

fn raw(query: &BTreeMap<String, String>, key: &str) -> String {
    query.get(key).cloned().unwrap_or_default()
}

fn parse_order<F>(
    query: &BTreeMap<String, String>,
    parse_field: impl FnOnce(&str) -> Result<F, ApiError>,
) -> Result<SortOrder<F>, ApiError> {
    let field = match query.get("sort").map(String::as_str) {
        None | Some("") => None,
        Some(name) => Some(parse_field(name)?),
    };
    let direction = match query.get("direction").map(String::as_str) {
        None | Some("") => SortDirection::Ascending,
        Some(raw) => SortDirection::parse(raw)
            .ok_or_else(|| ApiError::invalid_param("direction", raw))?,
    };
    Ok(SortOrder { field, direction })
}

fn parse_request(query: &BTreeMap<String, String>) -> Result<PageRequest, ApiError> {
    let size = match query.get("page_size").map(String::as_str) {
        None | Some("") => PageSize::default(),
        Some(raw) => {
            PageSize::parse(raw).ok_or_else(|| ApiError::invalid_param("page_size", raw))?
        }
    };
    let page = match query.get("page").map(String::as_str) {
        None | Some("") => 1,
        Some(raw) => {
            let value = raw
                .parse::<usize>()
                .map_err(|_| ApiError::invalid_param("page", raw))?;
            if value == 0 {
                return Err(ApiError::invalid_param("page", raw));
            }
            value
        }
    };
    Ok(PageRequest::first(size).with_page(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiErrorCode;

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let params = parse_animal_list_params(&query(&[])).expect("parse");
        assert_eq!(params.selection, AnimalSelection::default());
        assert_eq!(params.term, "");
        assert_eq!(params.order.field, None);
        assert_eq!(params.request.page, 1);
        assert_eq!(params.request.size, PageSize::Rows25);
    }

    #[test]
    fn full_parameter_set_parses() {
        let params = parse_animal_list_params(&query(&[
            ("jenis_kelamin", "Betina"),
            ("rentang_usia", "Anakan"),
            ("lokasi", "RW 3"),
            ("q", "sapi"),
            ("sort", "nama_pemilik"),
            ("direction", "desc"),
            ("page", "2"),
            ("page_size", "50"),
        ]))
        .expect("parse");
        assert_eq!(params.selection.zone, "RW 3");
        assert_eq!(params.term, "sapi");
        assert_eq!(params.order.field, Some(AnimalSortField::OwnerName));
        assert_eq!(params.order.direction, SortDirection::Descending);
        assert_eq!(params.request.page, 2);
        assert_eq!(params.request.size, PageSize::Rows50);
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = parse_animal_list_params(&query(&[("sort", "warna")])).expect_err("parse");
        assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
    }

    #[test]
    fn zero_page_and_odd_page_sizes_are_rejected() {
        let err = parse_plant_list_params(&query(&[("page", "0")])).expect_err("parse");
        assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
        let err = parse_plant_list_params(&query(&[("page_size", "30")])).expect_err("parse");
        assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
    }

    #[test]
    fn show_all_page_size_parses() {
        let params = parse_plant_list_params(&query(&[("page_size", "all")])).expect("parse");
        assert_eq!(params.request.size, PageSize::All);
    }
}
