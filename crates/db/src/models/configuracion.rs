//! Singleton roster configuration and its partial-update DTO.

use oficio_core::error::CoreError;
use oficio_core::roster::{validate_horas_alerta, FrecuenciaRotacion};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguracionTurnos {
    /// Jurisdiction used for automatically generated turnos.
    pub partido_judicial: String,
    pub rotacion_automatica: bool,
    pub frecuencia_rotacion: FrecuenciaRotacion,
    /// Forbid the same lawyer in two adjacent rotation periods.
    pub no_consecutivos: bool,
    /// Lead time for upcoming-guardia alerts.
    pub horas_alerta: u32,
}

impl Default for ConfiguracionTurnos {
    fn default() -> Self {
        Self {
            partido_judicial: "Madrid".to_string(),
            rotacion_automatica: true,
            frecuencia_rotacion: FrecuenciaRotacion::Semanal,
            no_consecutivos: true,
            horas_alerta: 24,
        }
    }
}

/// DTO for `PATCH /oficio/configuracion`. Only present fields are merged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateConfiguracion {
    #[validate(length(min = 1, max = 200, message = "must not be empty"))]
    pub partido_judicial: Option<String>,
    pub rotacion_automatica: Option<bool>,
    pub frecuencia_rotacion: Option<FrecuenciaRotacion>,
    pub no_consecutivos: Option<bool>,
    pub horas_alerta: Option<u32>,
}

impl UpdateConfiguracion {
    pub fn validate_input(&self) -> Result<(), CoreError> {
        self.validate()?;
        if let Some(horas) = self.horas_alerta {
            validate_horas_alerta(horas)?;
        }
        Ok(())
    }

    /// Shallow-merge the present fields into `config`.
    pub fn apply_to(&self, config: &mut ConfiguracionTurnos) {
        if let Some(partido) = &self.partido_judicial {
            config.partido_judicial = partido.clone();
        }
        if let Some(rotacion) = self.rotacion_automatica {
            config.rotacion_automatica = rotacion;
        }
        if let Some(frecuencia) = self.frecuencia_rotacion {
            config.frecuencia_rotacion = frecuencia;
        }
        if let Some(no_consecutivos) = self.no_consecutivos {
            config.no_consecutivos = no_consecutivos;
        }
        if let Some(horas) = self.horas_alerta {
            config.horas_alerta = horas;
        }
    }
}
