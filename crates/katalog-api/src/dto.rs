// SPDX-License-Identifier: Apache-2.0

use katalog_query::{PageRequest, PageView};
use serde::{Deserialize, Serialize};

/// One rendered list page. Carries everything a client needs for the
/// pagination controls; nothing has to be re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListPageDto<T> {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
    pub page_size: String,
    pub rows: Vec<T>,
}

#[must_use]
pub fn page_dto<T: Clone>(view: &PageView<'_, T>, request: &PageRequest) -> ListPageDto<T> {
    ListPageDto {
        total: view.total,
        page: request.page,
        total_pages: view.total_pages,
        page_numbers: view.numbers.clone(),
        page_size: request.size.as_param().to_string(),
        rows: view.rows.to_vec(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailDto<T> {
    pub record: T,
}

/// Landing-page counts. Best effort: a count whose fetch failed is null
/// rather than failing the whole summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryDto {
    pub animal_count: Option<usize>,
    pub plant_count: Option<usize>,
}
