//! Guardia (concrete duty shift) entity model and DTOs.

use oficio_core::roster::ModalidadGuardia;
use oficio_core::time_span::{HoraDia, TimeSpan};
use oficio_core::types::{EntityId, Fecha};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One shift belonging to a turno.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guardia {
    pub id: EntityId,
    pub turno_id: EntityId,
    pub fecha: Fecha,
    pub hora_inicio: HoraDia,
    pub hora_fin: HoraDia,
    pub modalidad: ModalidadGuardia,
    pub confirmada: bool,
}

impl Guardia {
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.hora_inicio, self.hora_fin)
    }
}

/// DTO for creating a guardia. New guardias are unconfirmed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuardia {
    #[validate(length(min = 1, max = 64, message = "must not be empty"))]
    pub turno_id: EntityId,
    pub fecha: Fecha,
    pub hora_inicio: HoraDia,
    pub hora_fin: HoraDia,
    pub modalidad: ModalidadGuardia,
}

/// List filters; all present fields must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuardiaFilter {
    pub turno_id: Option<EntityId>,
    pub fecha: Option<Fecha>,
    pub confirmada: Option<bool>,
}

impl GuardiaFilter {
    pub fn matches(&self, guardia: &Guardia) -> bool {
        self.turno_id
            .as_deref()
            .is_none_or(|id| guardia.turno_id == id)
            && self.fecha.is_none_or(|f| guardia.fecha == f)
            && self.confirmada.is_none_or(|c| guardia.confirmada == c)
    }
}
