//! Partido judicial (jurisdiction) entity model and DTOs.

use oficio_core::roster::TipoTurno;
use oficio_core::types::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartidoJudicial {
    pub id: EntityId,
    pub nombre: String,
    pub provincia: String,
    /// Duty types served in this jurisdiction.
    pub tipos_turno: Vec<TipoTurno>,
}

/// DTO for registering a jurisdiction. Used by the demo seed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartidoJudicial {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub nombre: String,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub provincia: String,
    pub tipos_turno: Vec<TipoTurno>,
}
