//! Round-robin planner for automatic turno rotation.
//!
//! Given the lawyers eligible for a duty type, produces consecutive duty
//! periods of the configured frequency. The planner is pure; the caller
//! persists the resulting turnos.

use chrono::Days;

use crate::error::CoreError;
use crate::roster::{FrecuenciaRotacion, MAX_PERIODOS_ROTACION};
use crate::types::{EntityId, Fecha};

/// A lawyer who may receive a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidato {
    pub id: EntityId,
    pub nombre: String,
}

/// One planned duty period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodoRotacion {
    pub abogado_id: EntityId,
    pub abogado_nombre: String,
    pub fecha_inicio: Fecha,
    pub fecha_fin: Fecha,
}

#[derive(Debug, Clone)]
pub struct RotationRequest<'a> {
    /// Eligible lawyers in rotation order.
    pub candidatos: &'a [Candidato],
    /// Lawyer who held the most recent period of this type, if any.
    pub ultimo_asignado: Option<&'a str>,
    pub fecha_inicio: Fecha,
    pub periodos: u32,
    pub frecuencia: FrecuenciaRotacion,
    pub no_consecutivos: bool,
}

/// Plan `periodos` consecutive periods, cycling through the candidates.
///
/// Rotation resumes with the candidate after `ultimo_asignado`. With
/// `no_consecutivos`, a lawyer never receives two adjacent periods, which
/// includes the period preceding the plan.
pub fn plan(request: &RotationRequest<'_>) -> Result<Vec<PeriodoRotacion>, CoreError> {
    if request.periodos == 0 || request.periodos > MAX_PERIODOS_ROTACION {
        return Err(CoreError::Validation(format!(
            "periodos must be between 1 and {MAX_PERIODOS_ROTACION}, got {}",
            request.periodos
        )));
    }

    let candidatos = request.candidatos;
    if candidatos.is_empty() {
        return Err(CoreError::Validation(
            "No available lawyers are registered for this duty type".to_string(),
        ));
    }

    let previous = request
        .ultimo_asignado
        .and_then(|id| candidatos.iter().position(|c| c.id == id));
    let start = previous.map_or(0, |i| (i + 1) % candidatos.len());

    if request.no_consecutivos && candidatos.len() == 1 {
        let only = &candidatos[0];
        if request.periodos > 1 || previous.is_some() {
            return Err(CoreError::Validation(format!(
                "Cannot avoid consecutive periods with a single available lawyer ({})",
                only.nombre
            )));
        }
    }

    let frecuencia = request.frecuencia;
    let origen = request.fecha_inicio;
    let out_of_range = || CoreError::Validation("Rotation exceeds supported date range".into());

    let mut periods = Vec::with_capacity(request.periodos as usize);
    for k in 0..request.periodos {
        let fecha_inicio = frecuencia.period_start(origen, k).ok_or_else(out_of_range)?;
        let fecha_fin = frecuencia
            .period_start(origen, k + 1)
            .and_then(|next| next.checked_sub_days(Days::new(1)))
            .ok_or_else(out_of_range)?;
        let candidato = &candidatos[(start + k as usize) % candidatos.len()];
        periods.push(PeriodoRotacion {
            abogado_id: candidato.id.clone(),
            abogado_nombre: candidato.nombre.clone(),
            fecha_inicio,
            fecha_fin,
        });
    }
    Ok(periods)
}
