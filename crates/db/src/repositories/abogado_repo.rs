//! Repository for the lawyer roster.

use oficio_core::roster::TipoTurno;
use oficio_core::rotation::Candidato;

use crate::models::abogado::{AbogadoFilter, AbogadoOficio, CreateAbogado};
use crate::store::RosterStore;

pub struct AbogadoRepo;

impl AbogadoRepo {
    /// Register a lawyer. `disponible` defaults to `true`.
    pub async fn create(store: &RosterStore, input: &CreateAbogado) -> AbogadoOficio {
        let mut data = store.write().await;
        let abogado = AbogadoOficio {
            id: data.abogado_ids.next_id(),
            nombre: input.nombre.clone(),
            numero_colegiado: input.numero_colegiado.clone(),
            tipos_turno: input.tipos_turno.clone(),
            disponible: input.disponible.unwrap_or(true),
        };
        data.abogados.push(abogado.clone());
        tracing::debug!(abogado_id = %abogado.id, "Abogado registered");
        abogado
    }

    pub async fn find_by_id(store: &RosterStore, id: &str) -> Option<AbogadoOficio> {
        store
            .read()
            .await
            .abogados
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub async fn list(store: &RosterStore, filter: &AbogadoFilter) -> Vec<AbogadoOficio> {
        store
            .read()
            .await
            .abogados
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    /// Available lawyers registered for `tipo`, as rotation candidates in
    /// roster order.
    pub async fn list_available_for(store: &RosterStore, tipo: TipoTurno) -> Vec<Candidato> {
        store.read().await.candidates_for(tipo)
    }
}
