//! Turno (duty assignment) entity model and DTOs.

use oficio_core::error::CoreError;
use oficio_core::roster::{range_contains, validate_date_range, EstadoTurno, TipoTurno};
use oficio_core::types::{EntityId, Fecha};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A multi-day on-call assignment of one lawyer in one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turno {
    pub id: EntityId,
    pub tipo: TipoTurno,
    pub partido_judicial: String,
    pub fecha_inicio: Fecha,
    pub fecha_fin: Fecha,
    pub abogado_id: EntityId,
    pub abogado_nombre: String,
    pub estado: EstadoTurno,
    pub observaciones: Option<String>,
}

impl Turno {
    /// Whether `fecha` falls within this turno's inclusive date range.
    pub fn covers(&self, fecha: Fecha) -> bool {
        range_contains(self.fecha_inicio, self.fecha_fin, fecha)
    }
}

/// DTO for creating a new turno. Status is always `asignado` on creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTurno {
    pub tipo: TipoTurno,
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub partido_judicial: String,
    pub fecha_inicio: Fecha,
    pub fecha_fin: Fecha,
    #[validate(length(min = 1, max = 64, message = "must not be empty"))]
    pub abogado_id: EntityId,
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub abogado_nombre: String,
    #[validate(length(max = 2000))]
    pub observaciones: Option<String>,
}

impl CreateTurno {
    /// Field rules plus the cross-field date order.
    pub fn validate_input(&self) -> Result<(), CoreError> {
        self.validate()?;
        validate_date_range(self.fecha_inicio, self.fecha_fin)
    }
}

/// DTO for `PATCH /turnos/{id}/estado`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEstadoTurno {
    pub estado: EstadoTurno,
}

/// DTO for `PATCH /turnos/{id}/abogado`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AsignarAbogado {
    #[validate(length(min = 1, max = 64, message = "must not be empty"))]
    pub abogado_id: EntityId,
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub abogado_nombre: String,
}

/// DTO for exchanging the lawyers of two turnos.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SwapTurnos {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub turno_a: EntityId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub turno_b: EntityId,
}

/// Both turnos after a swap, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwappedTurnos {
    pub turno_a: Turno,
    pub turno_b: Turno,
}

/// DTO for planning an automatic rotation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRotacion {
    pub tipo: TipoTurno,
    pub fecha_inicio: Fecha,
    #[validate(range(min = 1, max = 52))]
    pub periodos: u32,
}

/// List filters; all present fields must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TurnoFilter {
    pub abogado_id: Option<EntityId>,
    /// Turnos whose date range contains this day.
    pub fecha: Option<Fecha>,
    pub tipo: Option<TipoTurno>,
    pub estado: Option<EstadoTurno>,
}

impl TurnoFilter {
    pub fn matches(&self, turno: &Turno) -> bool {
        self.abogado_id
            .as_deref()
            .is_none_or(|id| turno.abogado_id == id)
            && self.fecha.is_none_or(|f| turno.covers(f))
            && self.tipo.is_none_or(|t| turno.tipo == t)
            && self.estado.is_none_or(|e| turno.estado == e)
    }
}
