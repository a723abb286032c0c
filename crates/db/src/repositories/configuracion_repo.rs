//! Repository for the singleton roster configuration.

use crate::models::configuracion::{ConfiguracionTurnos, UpdateConfiguracion};
use crate::store::RosterStore;

pub struct ConfiguracionRepo;

impl ConfiguracionRepo {
    pub async fn get(store: &RosterStore) -> ConfiguracionTurnos {
        store.read().await.configuracion.clone()
    }

    /// Shallow-merge the present fields of `input`, returning the result.
    pub async fn update(store: &RosterStore, input: &UpdateConfiguracion) -> ConfiguracionTurnos {
        let mut data = store.write().await;
        input.apply_to(&mut data.configuracion);
        tracing::info!(config = ?data.configuracion, "Roster configuration updated");
        data.configuracion.clone()
    }
}
