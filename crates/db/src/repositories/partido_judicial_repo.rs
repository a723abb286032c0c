//! Repository for partidos judiciales.

use crate::models::partido_judicial::{CreatePartidoJudicial, PartidoJudicial};
use crate::store::RosterStore;

pub struct PartidoJudicialRepo;

impl PartidoJudicialRepo {
    pub async fn create(store: &RosterStore, input: &CreatePartidoJudicial) -> PartidoJudicial {
        let mut data = store.write().await;
        let partido = PartidoJudicial {
            id: data.partido_ids.next_id(),
            nombre: input.nombre.clone(),
            provincia: input.provincia.clone(),
            tipos_turno: input.tipos_turno.clone(),
        };
        data.partidos.push(partido.clone());
        tracing::debug!(partido_id = %partido.id, "Partido judicial registered");
        partido
    }

    pub async fn find_by_id(store: &RosterStore, id: &str) -> Option<PartidoJudicial> {
        store
            .read()
            .await
            .partidos
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn list(store: &RosterStore) -> Vec<PartidoJudicial> {
        store.read().await.partidos.clone()
    }
}
