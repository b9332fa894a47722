// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[must_use]
pub fn map_status(error: &ApiError) -> u16 {
    match error.code {
        ApiErrorCode::InvalidQueryParameter => 400,
        ApiErrorCode::RecordNotFound => 404,
        ApiErrorCode::StoreUnavailable => 503,
        _ => 500,
    }
}
