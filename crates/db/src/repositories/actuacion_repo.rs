//! Repository for actuaciones de oficio (append-only).

use oficio_core::time_span::TimeSpan;

use crate::models::actuacion::{ActuacionFilter, ActuacionOficio, CreateActuacion};
use crate::store::RosterStore;

/// Provides query and append operations for actuaciones.
pub struct ActuacionRepo;

impl ActuacionRepo {
    /// Record a new actuación at the front of the list (most recent first).
    ///
    /// Returns `None` if the referenced turno does not exist.
    pub async fn create(store: &RosterStore, input: &CreateActuacion) -> Option<ActuacionOficio> {
        let mut data = store.write().await;
        data.turno(&input.turno_id)?;

        let span = TimeSpan::new(input.hora_inicio, input.hora_fin);
        if span.crosses_midnight() {
            tracing::debug!(turno_id = %input.turno_id, "Actuación spans midnight");
        }

        let actuacion = ActuacionOficio {
            id: data.actuacion_ids.next_id(),
            turno_id: input.turno_id.clone(),
            tipo: input.tipo,
            juzgado: input.juzgado.clone(),
            numero_procedimiento: input.numero_procedimiento.clone(),
            fecha: input.fecha,
            hora_inicio: input.hora_inicio,
            hora_fin: input.hora_fin,
            detenido_nombre: input.detenido_nombre.clone(),
            delito: input.delito.clone(),
            resultado: input.resultado.clone(),
            importe: input.importe,
            facturada: input.facturada,
        };
        data.actuaciones.insert(0, actuacion.clone());
        tracing::info!(
            actuacion_id = %actuacion.id,
            turno_id = %actuacion.turno_id,
            tipo = actuacion.tipo.as_str(),
            "Actuación recorded"
        );
        Some(actuacion)
    }

    pub async fn find_by_id(store: &RosterStore, id: &str) -> Option<ActuacionOficio> {
        store
            .read()
            .await
            .actuaciones
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// List actuaciones, most recent first, keeping those that match `filter`.
    pub async fn list(store: &RosterStore, filter: &ActuacionFilter) -> Vec<ActuacionOficio> {
        store
            .read()
            .await
            .actuaciones
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    pub async fn list_by_turno(store: &RosterStore, turno_id: &str) -> Vec<ActuacionOficio> {
        let filter = ActuacionFilter {
            turno_id: Some(turno_id.to_string()),
            ..ActuacionFilter::default()
        };
        Self::list(store, &filter).await
    }
}
