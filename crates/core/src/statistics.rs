//! Turno de oficio statistics (counts, revenue, hours, rankings).
//!
//! Everything is recomputed from scratch on every call: a single pass over
//! the actuaciones plus two small sorts for the rankings. Money is summed in
//! integer cents and hours in whole minutes so totals never drift.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::Serialize;

use crate::roster::{same_calendar_month, TipoActuacion};
use crate::time_span::TimeSpan;
use crate::types::Fecha;

/// Month abbreviations used as bucket labels, January first.
pub const MESES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Length of the offense and court rankings.
pub const TOP_N: usize = 5;

/// Placeholder ratio between private-practice and oficio revenue for the
/// comparison widget. Not derived from data.
pub const PRIVATE_RATE_MULTIPLIER: f64 = 2.3;

/// Label used when an actuación's turno cannot be resolved to a lawyer.
pub const ABOGADO_DESCONOCIDO: &str = "Sin asignar";

/// The fields of one actuación the aggregator needs.
#[derive(Debug, Clone)]
pub struct ActuacionSample<'a> {
    pub tipo: TipoActuacion,
    pub fecha: Fecha,
    pub span: TimeSpan,
    pub importe: Option<f64>,
    pub abogado: &'a str,
    pub delito: Option<&'a str>,
    pub juzgado: &'a str,
}

/// One month bucket of the yearly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumenMensual {
    pub mes: &'static str,
    pub actuaciones: u64,
    pub importe: f64,
    pub horas: f64,
}

/// A ranked label with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frecuencia {
    pub nombre: String,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativaIngresos {
    pub ingresos_oficio: f64,
    pub ingresos_privado_estimado: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstadisticasOficio {
    pub total_actuaciones: u64,
    pub actuaciones_mes: u64,
    pub importe_total: f64,
    pub horas_totales: f64,
    pub por_tipo: BTreeMap<TipoActuacion, u64>,
    pub por_abogado: BTreeMap<String, u64>,
    pub mensual: Vec<ResumenMensual>,
    pub top_delitos: Vec<Frecuencia>,
    pub top_juzgados: Vec<Frecuencia>,
    pub comparativa: ComparativaIngresos,
}

#[derive(Default, Clone, Copy)]
struct Bucket {
    count: u64,
    cents: i64,
    minutes: u64,
}

impl Bucket {
    /// Saturates instead of overflowing; stored fees are bounded well below that.
    fn add(&mut self, cents: i64, minutes: u64) {
        self.count += 1;
        self.cents = self.cents.saturating_add(cents);
        self.minutes = self.minutes.saturating_add(minutes);
    }
}

/// Convert euros to whole cents, rounding half away from zero.
pub fn to_cents(importe: f64) -> i64 {
    (importe * 100.0).round() as i64
}

fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

fn minutes_to_hours(minutes: u64) -> f64 {
    minutes as f64 / 60.0
}

/// Aggregate `samples` relative to `today` (used for the current-month count).
pub fn compute<'a, I>(samples: I, today: Fecha) -> EstadisticasOficio
where
    I: IntoIterator<Item = ActuacionSample<'a>>,
{
    let mut total = Bucket::default();
    let mut actuaciones_mes = 0u64;
    let mut months = [Bucket::default(); 12];
    let mut por_tipo: BTreeMap<TipoActuacion, u64> = BTreeMap::new();
    let mut por_abogado: BTreeMap<String, u64> = BTreeMap::new();
    let mut delitos: HashMap<&'a str, u64> = HashMap::new();
    let mut juzgados: HashMap<&'a str, u64> = HashMap::new();

    for sample in samples {
        let cents = sample.importe.map(to_cents).unwrap_or(0);
        let minutes = u64::from(sample.span.duration_minutes());

        total.add(cents, minutes);
        months[sample.fecha.month0() as usize].add(cents, minutes);

        if same_calendar_month(sample.fecha, today) {
            actuaciones_mes += 1;
        }

        *por_tipo.entry(sample.tipo).or_default() += 1;
        *por_abogado.entry(sample.abogado.to_string()).or_default() += 1;

        if let Some(delito) = sample.delito.map(str::trim).filter(|d| !d.is_empty()) {
            *delitos.entry(delito).or_default() += 1;
        }
        let juzgado = sample.juzgado.trim();
        if !juzgado.is_empty() {
            *juzgados.entry(juzgado).or_default() += 1;
        }
    }

    let mensual = MESES
        .iter()
        .copied()
        .zip(months.iter())
        .map(|(mes, bucket)| ResumenMensual {
            mes,
            actuaciones: bucket.count,
            importe: from_cents(bucket.cents),
            horas: minutes_to_hours(bucket.minutes),
        })
        .collect();

    let privado_cents = (total.cents as f64 * PRIVATE_RATE_MULTIPLIER).round() as i64;

    EstadisticasOficio {
        total_actuaciones: total.count,
        actuaciones_mes,
        importe_total: from_cents(total.cents),
        horas_totales: minutes_to_hours(total.minutes),
        por_tipo,
        por_abogado,
        mensual,
        top_delitos: top_n(delitos),
        top_juzgados: top_n(juzgados),
        comparativa: ComparativaIngresos {
            ingresos_oficio: from_cents(total.cents),
            ingresos_privado_estimado: from_cents(privado_cents),
        },
    }
}

/// Most frequent labels first; ties broken alphabetically so output is stable.
fn top_n(counts: HashMap<&str, u64>) -> Vec<Frecuencia> {
    let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_N)
        .map(|(nombre, total)| Frecuencia {
            nombre: nombre.to_string(),
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_span::HoraDia;

    fn d(y: i32, m: u32, day: u32) -> Fecha {
        Fecha::from_ymd_opt(y, m, day).unwrap()
    }

    fn span(a: &str, b: &str) -> TimeSpan {
        TimeSpan::new(a.parse::<HoraDia>().unwrap(), b.parse::<HoraDia>().unwrap())
    }

    fn sample<'a>(
        fecha: Fecha,
        importe: Option<f64>,
        delito: Option<&'a str>,
        juzgado: &'a str,
    ) -> ActuacionSample<'a> {
        ActuacionSample {
            tipo: TipoActuacion::Detenido,
            fecha,
            span: span("10:00", "11:00"),
            importe,
            abogado: "María González",
            delito,
            juzgado,
        }
    }

    #[test]
    fn empty_input_yields_twelve_zero_buckets() {
        let stats = compute(Vec::new(), d(2026, 2, 1));
        assert_eq!(stats.total_actuaciones, 0);
        assert_eq!(stats.importe_total, 0.0);
        assert_eq!(stats.mensual.len(), 12);
        assert!(stats.mensual.iter().all(|m| m.actuaciones == 0));
        assert!(stats.top_delitos.is_empty());
    }

    #[test]
    fn revenue_sums_without_float_drift() {
        let samples: Vec<_> = (0..10)
            .map(|_| sample(d(2026, 1, 5), Some(0.1), None, "Juzgado 1"))
            .collect();
        let stats = compute(samples, d(2026, 1, 31));
        assert_eq!(stats.importe_total, 1.0);
        assert_eq!(stats.comparativa.ingresos_privado_estimado, 2.3);
    }

    #[test]
    fn maximum_fees_sum_exactly() {
        let samples: Vec<_> = (0..1000)
            .map(|_| sample(d(2026, 1, 5), Some(crate::roster::MAX_IMPORTE), None, "J"))
            .collect();
        let stats = compute(samples, d(2026, 1, 31));
        assert_eq!(stats.importe_total, 1_000_000_000.0);
    }

    #[test]
    fn oversized_fees_saturate_instead_of_overflowing() {
        let samples = vec![
            sample(d(2026, 1, 5), Some(1e17), None, "J"),
            sample(d(2026, 1, 6), Some(1e17), None, "J"),
        ];
        let stats = compute(samples, d(2026, 1, 31));
        assert_eq!(stats.total_actuaciones, 2);
        assert_eq!(stats.importe_total, i64::MAX as f64 / 100.0);
    }

    #[test]
    fn missing_importe_counts_as_zero() {
        let samples = vec![
            sample(d(2026, 1, 5), Some(150.25), None, "J1"),
            sample(d(2026, 1, 6), None, None, "J1"),
        ];
        let stats = compute(samples, d(2026, 1, 31));
        assert_eq!(stats.total_actuaciones, 2);
        assert_eq!(stats.importe_total, 150.25);
    }

    #[test]
    fn monthly_buckets_partition_all_years() {
        let samples = vec![
            sample(d(2025, 3, 1), Some(10.0), None, "J"),
            sample(d(2026, 3, 9), Some(20.0), None, "J"),
            sample(d(2026, 12, 31), Some(5.0), None, "J"),
        ];
        let stats = compute(samples, d(2026, 3, 15));
        let sum: u64 = stats.mensual.iter().map(|m| m.actuaciones).sum();
        assert_eq!(sum, stats.total_actuaciones);
        assert_eq!(stats.mensual[2].mes, "Mar");
        assert_eq!(stats.mensual[2].actuaciones, 2);
        assert_eq!(stats.mensual[2].importe, 30.0);
        assert_eq!(stats.mensual[11].actuaciones, 1);
        // Only the 2026 March entry is in the current month.
        assert_eq!(stats.actuaciones_mes, 1);
    }

    #[test]
    fn hours_include_overnight_spans() {
        let mut late = sample(d(2026, 2, 2), None, None, "J");
        late.span = span("22:00", "02:00");
        let mut morning = sample(d(2026, 2, 3), None, None, "J");
        morning.span = span("10:30", "12:45");
        let stats = compute(vec![late, morning], d(2026, 2, 3));
        assert_eq!(stats.horas_totales, 6.25);
        assert_eq!(stats.mensual[1].horas, 6.25);
    }

    #[test]
    fn rankings_are_capped_and_tie_broken_by_name() {
        let delitos = ["Robo", "Hurto", "Lesiones", "Amenazas", "Estafa", "Daños", "Robo"];
        let samples: Vec<_> = delitos
            .iter()
            .map(|delito| sample(d(2026, 1, 1), None, Some(*delito), "Juzgado de Guardia"))
            .collect();
        let stats = compute(samples, d(2026, 1, 1));
        assert_eq!(stats.top_delitos.len(), TOP_N);
        assert_eq!(stats.top_delitos[0], Frecuencia { nombre: "Robo".into(), total: 2 });
        let rest: Vec<_> = stats.top_delitos[1..].iter().map(|f| f.nombre.as_str()).collect();
        assert_eq!(rest, ["Amenazas", "Daños", "Estafa", "Hurto"]);
        assert_eq!(stats.top_juzgados.len(), 1);
        assert_eq!(stats.top_juzgados[0].total, 7);
    }

    #[test]
    fn blank_offenses_are_skipped() {
        let samples = vec![
            sample(d(2026, 1, 1), None, Some("  "), "J"),
            sample(d(2026, 1, 1), None, None, "J"),
        ];
        let stats = compute(samples, d(2026, 1, 1));
        assert!(stats.top_delitos.is_empty());
    }

    #[test]
    fn groups_by_type_and_lawyer() {
        let mut a = sample(d(2026, 1, 1), None, None, "J");
        a.tipo = TipoActuacion::JuicioRapido;
        let mut b = sample(d(2026, 1, 2), None, None, "J");
        b.abogado = "Carlos Ruiz";
        let stats = compute(vec![a, b], d(2026, 1, 2));
        assert_eq!(stats.por_tipo[&TipoActuacion::JuicioRapido], 1);
        assert_eq!(stats.por_tipo[&TipoActuacion::Detenido], 1);
        assert_eq!(stats.por_abogado["Carlos Ruiz"], 1);
        assert_eq!(stats.por_abogado["María González"], 1);
    }
}
