//! Statistics over the actuación collection.

use std::collections::HashMap;

use oficio_core::statistics::{self, ActuacionSample, EstadisticasOficio, ABOGADO_DESCONOCIDO};
use oficio_core::types::Fecha;

use crate::store::RosterStore;

pub struct EstadisticasRepo;

impl EstadisticasRepo {
    /// Recompute all statistics from scratch, joining each actuación to its
    /// turno's lawyer name. `today` anchors the current-month count.
    pub async fn compute(store: &RosterStore, today: Fecha) -> EstadisticasOficio {
        let data = store.read().await;
        let lawyers: HashMap<&str, &str> = data
            .turnos
            .iter()
            .map(|t| (t.id.as_str(), t.abogado_nombre.as_str()))
            .collect();

        let samples = data.actuaciones.iter().map(|a| ActuacionSample {
            tipo: a.tipo,
            fecha: a.fecha,
            span: a.span(),
            importe: a.importe,
            abogado: lawyers
                .get(a.turno_id.as_str())
                .copied()
                .unwrap_or(ABOGADO_DESCONOCIDO),
            delito: a.delito.as_deref(),
            juzgado: a.juzgado.as_str(),
        });
        statistics::compute(samples, today)
    }
}
