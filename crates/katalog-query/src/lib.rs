#![forbid(unsafe_code)]
//! List-presentation engine.
//!
//! Pure synchronous computation over an already-fetched record
//! collection: sort-order selection, pagination-window math, page-number
//! controls, and the composer that turns raw filter selections plus a
//! search term into store criteria. Total over any well-typed input;
//! there are no error states beyond criteria composition.

mod compose;
mod fields;
mod page;
mod sort;

pub use compose::{
    compose_animal_criteria, compose_plant_criteria, AnimalSelection, ComposeError, PlantSelection,
};
pub use fields::{animal_sort_text, plant_sort_text, AnimalSortField, PlantSortField};
pub use page::{
    page_numbers, paginate, total_pages, PageRequest, PageSize, PageView, PAGE_WINDOW,
};
pub use sort::{collation_key, sort_rows, SortDirection, SortOrder};

pub const CRATE_NAME: &str = "katalog-query";
