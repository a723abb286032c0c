//! Repository for guardias.

use chrono::{NaiveDateTime, TimeDelta};
use oficio_core::types::Fecha;

use crate::models::guardia::{CreateGuardia, Guardia, GuardiaFilter};
use crate::store::RosterStore;

/// Provides query and mutation operations for guardias.
pub struct GuardiaRepo;

impl GuardiaRepo {
    /// Insert a new, unconfirmed guardia.
    ///
    /// Returns `None` if the parent turno does not exist. A date outside the
    /// turno's range is accepted and logged.
    pub async fn create(store: &RosterStore, input: &CreateGuardia) -> Option<Guardia> {
        let mut data = store.write().await;
        let turno = data.turno(&input.turno_id)?;
        if !turno.covers(input.fecha) {
            tracing::warn!(
                turno_id = %turno.id,
                fecha = %input.fecha,
                fecha_inicio = %turno.fecha_inicio,
                fecha_fin = %turno.fecha_fin,
                "Guardia date falls outside its turno range"
            );
        }

        let guardia = Guardia {
            id: data.guardia_ids.next_id(),
            turno_id: input.turno_id.clone(),
            fecha: input.fecha,
            hora_inicio: input.hora_inicio,
            hora_fin: input.hora_fin,
            modalidad: input.modalidad,
            confirmada: false,
        };
        data.guardias.push(guardia.clone());
        tracing::info!(guardia_id = %guardia.id, turno_id = %guardia.turno_id, "Guardia created");
        Some(guardia)
    }

    pub async fn find_by_id(store: &RosterStore, id: &str) -> Option<Guardia> {
        store
            .read()
            .await
            .guardias
            .iter()
            .find(|g| g.id == id)
            .cloned()
    }

    pub async fn list(store: &RosterStore, filter: &GuardiaFilter) -> Vec<Guardia> {
        store
            .read()
            .await
            .guardias
            .iter()
            .filter(|g| filter.matches(g))
            .cloned()
            .collect()
    }

    pub async fn list_by_turno(store: &RosterStore, turno_id: &str) -> Vec<Guardia> {
        let filter = GuardiaFilter {
            turno_id: Some(turno_id.to_string()),
            ..GuardiaFilter::default()
        };
        Self::list(store, &filter).await
    }

    pub async fn list_by_date(store: &RosterStore, fecha: Fecha) -> Vec<Guardia> {
        let filter = GuardiaFilter {
            fecha: Some(fecha),
            ..GuardiaFilter::default()
        };
        Self::list(store, &filter).await
    }

    /// Unconfirmed guardias starting within `[now, now + horas]`, soonest first.
    ///
    /// Returns `None` if the window ends past chrono's date range.
    pub async fn list_upcoming(
        store: &RosterStore,
        now: NaiveDateTime,
        horas: u32,
    ) -> Option<Vec<Guardia>> {
        let horizon = now.checked_add_signed(TimeDelta::hours(i64::from(horas)))?;
        let mut upcoming: Vec<Guardia> = store
            .read()
            .await
            .guardias
            .iter()
            .filter(|g| !g.confirmada)
            .filter(|g| {
                let start = g.span().start_on(g.fecha);
                now <= start && start <= horizon
            })
            .cloned()
            .collect();
        upcoming.sort_by_key(|g| g.span().start_on(g.fecha));
        Some(upcoming)
    }

    /// Mark a guardia as confirmed. Idempotent; there is no way to unconfirm.
    ///
    /// Returns `None` if no guardia with the given `id` exists.
    pub async fn confirm(store: &RosterStore, id: &str) -> Option<Guardia> {
        let mut data = store.write().await;
        let guardia = data.guardias.iter_mut().find(|g| g.id == id)?;
        if !guardia.confirmada {
            guardia.confirmada = true;
            tracing::info!(guardia_id = %id, "Guardia confirmed");
        }
        Some(guardia.clone())
    }
}
