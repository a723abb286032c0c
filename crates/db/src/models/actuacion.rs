//! Actuación de oficio (billable service event) entity model and DTOs.
//!
//! Actuaciones are append-only: there is no update DTO.

use oficio_core::error::CoreError;
use oficio_core::roster::{validate_importe, TipoActuacion};
use oficio_core::time_span::{HoraDia, TimeSpan};
use oficio_core::types::{EntityId, Fecha};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuacionOficio {
    pub id: EntityId,
    pub turno_id: EntityId,
    pub tipo: TipoActuacion,
    pub juzgado: String,
    pub numero_procedimiento: String,
    pub fecha: Fecha,
    pub hora_inicio: HoraDia,
    pub hora_fin: HoraDia,
    pub detenido_nombre: Option<String>,
    pub delito: Option<String>,
    pub resultado: String,
    /// Fee in euros.
    pub importe: Option<f64>,
    pub facturada: bool,
}

impl ActuacionOficio {
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.hora_inicio, self.hora_fin)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActuacion {
    #[validate(length(min = 1, max = 64, message = "must not be empty"))]
    pub turno_id: EntityId,
    pub tipo: TipoActuacion,
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub juzgado: String,
    #[validate(length(min = 1, max = 64, message = "must not be empty"))]
    pub numero_procedimiento: String,
    pub fecha: Fecha,
    pub hora_inicio: HoraDia,
    pub hora_fin: HoraDia,
    #[validate(length(max = 200))]
    pub detenido_nombre: Option<String>,
    #[validate(length(max = 200))]
    pub delito: Option<String>,
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub resultado: String,
    /// Euros with at most two decimals.
    pub importe: Option<f64>,
    #[serde(default)]
    pub facturada: bool,
}

impl CreateActuacion {
    /// Field rules plus the fee bounds and cent precision.
    pub fn validate_input(&self) -> Result<(), CoreError> {
        self.validate()?;
        match self.importe {
            Some(importe) => validate_importe(importe),
            None => Ok(()),
        }
    }
}

/// List filters; all present fields must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActuacionFilter {
    pub turno_id: Option<EntityId>,
    pub tipo: Option<TipoActuacion>,
}

impl ActuacionFilter {
    pub fn matches(&self, actuacion: &ActuacionOficio) -> bool {
        self.turno_id
            .as_deref()
            .is_none_or(|id| actuacion.turno_id == id)
            && self.tipo.is_none_or(|t| actuacion.tipo == t)
    }
}
