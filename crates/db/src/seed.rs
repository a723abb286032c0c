//! Demo roster loaded at startup when `SEED_DEMO_DATA` is enabled.

use oficio_core::roster::TipoTurno;

use crate::models::abogado::CreateAbogado;
use crate::models::partido_judicial::CreatePartidoJudicial;
use crate::repositories::{AbogadoRepo, PartidoJudicialRepo};
use crate::store::RosterStore;

const DEMO_ABOGADOS: &[(&str, &str, &[TipoTurno], bool)] = &[
    (
        "María González",
        "28.451",
        &[TipoTurno::Penal, TipoTurno::ViolenciaGenero],
        true,
    ),
    (
        "Carlos Ruiz",
        "28.703",
        &[TipoTurno::Penal, TipoTurno::Extranjeria],
        true,
    ),
    (
        "Ana Martínez",
        "28.912",
        &[TipoTurno::Civil, TipoTurno::Menores],
        true,
    ),
    (
        "Javier López",
        "29.044",
        &[TipoTurno::Penal, TipoTurno::Menores],
        true,
    ),
    (
        "Laura Sánchez",
        "29.318",
        &[TipoTurno::ViolenciaGenero, TipoTurno::Civil],
        false,
    ),
];

const DEMO_PARTIDOS: &[(&str, &str, &[TipoTurno])] = &[
    ("Madrid", "Madrid", &TipoTurno::ALL),
    (
        "Alcalá de Henares",
        "Madrid",
        &[TipoTurno::Penal, TipoTurno::Civil, TipoTurno::ViolenciaGenero],
    ),
    ("Getafe", "Madrid", &[TipoTurno::Penal, TipoTurno::Menores]),
    (
        "Móstoles",
        "Madrid",
        &[TipoTurno::Penal, TipoTurno::Civil, TipoTurno::Extranjeria],
    ),
];

/// Register the demo lawyers and jurisdictions.
pub async fn seed_demo_data(store: &RosterStore) {
    for (nombre, numero_colegiado, tipos, disponible) in DEMO_ABOGADOS {
        let input = CreateAbogado {
            nombre: nombre.to_string(),
            numero_colegiado: numero_colegiado.to_string(),
            tipos_turno: tipos.to_vec(),
            disponible: Some(*disponible),
        };
        AbogadoRepo::create(store, &input).await;
    }
    for (nombre, provincia, tipos) in DEMO_PARTIDOS {
        let input = CreatePartidoJudicial {
            nombre: nombre.to_string(),
            provincia: provincia.to_string(),
            tipos_turno: tipos.to_vec(),
        };
        PartidoJudicialRepo::create(store, &input).await;
    }
    tracing::info!(
        abogados = DEMO_ABOGADOS.len(),
        partidos = DEMO_PARTIDOS.len(),
        "Demo roster seeded"
    );
}
