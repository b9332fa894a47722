#![forbid(unsafe_code)]
//! Catalog record model SSOT.
//!
//! Two record kinds, both read-only from the application's point of view:
//! animal-health records (`hewan`) and plant pest/disease records
//! (`tanaman`). Wire field names are the store's Indonesian column names.

mod animal;
mod criteria;
mod plant;

pub use animal::{AgeClass, AnimalId, AnimalRecord, HistoryFlag, ParseError, Sex, Zone};
pub use criteria::{AnimalCriteria, PlantCriteria};
pub use plant::{PestEntry, PlantCategory, PlantId, PlantRecord, PLANT_ID_MAX_LEN};

pub const CRATE_NAME: &str = "katalog-model";
