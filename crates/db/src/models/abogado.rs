//! Abogado de oficio (lawyer roster) entity model and DTOs.

use oficio_core::roster::TipoTurno;
use oficio_core::types::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbogadoOficio {
    pub id: EntityId,
    pub nombre: String,
    pub numero_colegiado: String,
    /// Duty types the lawyer is registered for.
    pub tipos_turno: Vec<TipoTurno>,
    pub disponible: bool,
}

impl AbogadoOficio {
    pub fn registered_for(&self, tipo: TipoTurno) -> bool {
        self.tipos_turno.contains(&tipo)
    }
}

/// DTO for registering a lawyer. Used by the demo seed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAbogado {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub nombre: String,
    #[validate(length(min = 1, max = 32, message = "must not be empty"))]
    pub numero_colegiado: String,
    pub tipos_turno: Vec<TipoTurno>,
    /// Defaults to `true` if omitted.
    pub disponible: Option<bool>,
}

/// List filters; all present fields must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbogadoFilter {
    /// Lawyers registered for this duty type.
    pub tipo: Option<TipoTurno>,
    pub disponible: Option<bool>,
}

impl AbogadoFilter {
    pub fn matches(&self, abogado: &AbogadoOficio) -> bool {
        self.tipo.is_none_or(|t| abogado.registered_for(t))
            && self.disponible.is_none_or(|d| abogado.disponible == d)
    }
}
