//! Handlers for the read-only persona catalog.

use axum::extract::Path;
use axum::Json;
use jokester_core::error::CoreError;
use jokester_core::persona::{self, Persona};

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /api/v1/personas
pub async fn list_personas() -> Json<DataResponse<&'static [Persona]>> {
    Json(DataResponse {
        data: persona::catalog(),
    })
}

/// GET /api/v1/personas/{id}
pub async fn get_persona(Path(id): Path<String>) -> AppResult<Json<DataResponse<&'static Persona>>> {
    let found = find_persona(&id)?;
    Ok(Json(DataResponse { data: found }))
}

/// GET /api/v1/personas/{id}/counter
///
/// The persona designed to counter `id`, or `null` when it has none.
pub async fn get_counter_persona(
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Option<&'static Persona>>>> {
    find_persona(&id)?;
    Ok(Json(DataResponse {
        data: persona::counter_of(&id),
    }))
}

fn find_persona(id: &str) -> Result<&'static Persona, CoreError> {
    persona::find(id).ok_or_else(|| CoreError::NotFound {
        entity: "Persona",
        id: id.to_string(),
    })
}
