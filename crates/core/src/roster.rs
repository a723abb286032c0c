//! Turno de oficio vocabulary: duty types, statuses, shift modes and the
//! small set of rules shared by the store and the HTTP layer.

use chrono::{Datelike, Days, Months};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Fecha;

// ---------------------------------------------------------------------------
// Id prefixes
// ---------------------------------------------------------------------------

pub const TURNO_ID_PREFIX: &str = "TURNO";
pub const GUARDIA_ID_PREFIX: &str = "GUARDIA";
pub const ACTUACION_ID_PREFIX: &str = "ACT-OF";
pub const ABOGADO_ID_PREFIX: &str = "ABG";
pub const PARTIDO_ID_PREFIX: &str = "PJ";

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Lower bound for the alert lead time, in hours.
pub const MIN_HORAS_ALERTA: u32 = 1;

/// Upper bound for the alert lead time (30 days).
pub const MAX_HORAS_ALERTA: u32 = 720;

/// Maximum number of periods a single rotation request may plan.
pub const MAX_PERIODOS_ROTACION: u32 = 52;

/// Upper bound for a single actuación fee, in euros.
pub const MAX_IMPORTE: f64 = 1_000_000.0;

/// Slack when checking that a fee has at most two decimals; absorbs binary
/// representation error (`150.55 * 100 = 15054.999...`).
const CENT_TOLERANCE: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Duty type a turno covers and a lawyer can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoTurno {
    Penal,
    Civil,
    Extranjeria,
    ViolenciaGenero,
    Menores,
}

impl TipoTurno {
    pub const ALL: [TipoTurno; 5] = [
        TipoTurno::Penal,
        TipoTurno::Civil,
        TipoTurno::Extranjeria,
        TipoTurno::ViolenciaGenero,
        TipoTurno::Menores,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TipoTurno::Penal => "penal",
            TipoTurno::Civil => "civil",
            TipoTurno::Extranjeria => "extranjeria",
            TipoTurno::ViolenciaGenero => "violencia_genero",
            TipoTurno::Menores => "menores",
        }
    }
}

/// Turno status. Transitions are free-form: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoTurno {
    Asignado,
    Confirmado,
    Completado,
    Cancelado,
}

impl EstadoTurno {
    pub fn as_str(self) -> &'static str {
        match self {
            EstadoTurno::Asignado => "asignado",
            EstadoTurno::Confirmado => "confirmado",
            EstadoTurno::Completado => "completado",
            EstadoTurno::Cancelado => "cancelado",
        }
    }
}

/// Whether the lawyer must be physically present or only reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalidadGuardia {
    Presencial,
    Localizable,
}

/// Kind of billable service performed during a guardia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoActuacion {
    Detenido,
    Declaracion,
    JuicioRapido,
    OrdenProteccion,
    AsistenciaVictima,
    Otro,
}

impl TipoActuacion {
    pub fn as_str(self) -> &'static str {
        match self {
            TipoActuacion::Detenido => "detenido",
            TipoActuacion::Declaracion => "declaracion",
            TipoActuacion::JuicioRapido => "juicio_rapido",
            TipoActuacion::OrdenProteccion => "orden_proteccion",
            TipoActuacion::AsistenciaVictima => "asistencia_victima",
            TipoActuacion::Otro => "otro",
        }
    }
}

/// Length of one period in an automatic rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrecuenciaRotacion {
    Semanal,
    Quincenal,
    Mensual,
}

impl FrecuenciaRotacion {
    /// First day of period `k` (zero-based) of a rotation anchored at `origen`.
    ///
    /// Each start is computed from the anchor rather than from the previous
    /// period, so monthly rotations clamp to short months (`Jan 31 -> Feb 28`)
    /// and then return to the anchor day (`Mar 31`). Returns `None` only past
    /// the end of chrono's date range.
    pub fn period_start(self, origen: Fecha, k: u32) -> Option<Fecha> {
        match self {
            FrecuenciaRotacion::Semanal => origen.checked_add_days(Days::new(7 * u64::from(k))),
            FrecuenciaRotacion::Quincenal => origen.checked_add_days(Days::new(14 * u64::from(k))),
            FrecuenciaRotacion::Mensual => origen.checked_add_months(Months::new(k)),
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Reject a turno whose end date precedes its start date.
pub fn validate_date_range(fecha_inicio: Fecha, fecha_fin: Fecha) -> Result<(), CoreError> {
    if fecha_fin < fecha_inicio {
        return Err(CoreError::Validation(format!(
            "fecha_fin ({fecha_fin}) must not precede fecha_inicio ({fecha_inicio})"
        )));
    }
    Ok(())
}

/// Validate the alert lead time against [`MIN_HORAS_ALERTA`]..=[`MAX_HORAS_ALERTA`].
pub fn validate_horas_alerta(horas: u32) -> Result<(), CoreError> {
    if !(MIN_HORAS_ALERTA..=MAX_HORAS_ALERTA).contains(&horas) {
        return Err(CoreError::Validation(format!(
            "horas_alerta must be between {MIN_HORAS_ALERTA} and {MAX_HORAS_ALERTA}, got {horas}"
        )));
    }
    Ok(())
}

/// Reject fees that are negative, above [`MAX_IMPORTE`] or carry fractions of a cent.
pub fn validate_importe(importe: f64) -> Result<(), CoreError> {
    if !importe.is_finite() || !(0.0..=MAX_IMPORTE).contains(&importe) {
        return Err(CoreError::Validation(format!(
            "importe must be between 0 and {MAX_IMPORTE}, got {importe}"
        )));
    }
    let cents = importe * 100.0;
    if (cents - cents.round()).abs() > CENT_TOLERANCE {
        return Err(CoreError::Validation(format!(
            "importe must have at most two decimals, got {importe}"
        )));
    }
    Ok(())
}

/// Whether `fecha` lies within the inclusive range `[inicio, fin]`.
pub fn range_contains(inicio: Fecha, fin: Fecha, fecha: Fecha) -> bool {
    inicio <= fecha && fecha <= fin
}

/// Whether `fecha` falls in the same calendar month and year as `today`.
pub fn same_calendar_month(fecha: Fecha, today: Fecha) -> bool {
    fecha.year() == today.year() && fecha.month() == today.month()
}
