//! In-memory persistence for the turno de oficio roster.
//!
//! The [`RosterStore`] owns every collection; repositories in
//! [`repositories`] are zero-sized structs whose async methods take
//! `&RosterStore` as the first argument.

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::{RosterStore, StoreCounts};

use models::configuracion::ConfiguracionTurnos;

/// Create a store, optionally loaded with demo lawyers and jurisdictions.
pub async fn create_store(configuracion: ConfiguracionTurnos, seed_demo_data: bool) -> RosterStore {
    let store = RosterStore::new(configuracion);
    if seed_demo_data {
        seed::seed_demo_data(&store).await;
    }
    store
}
