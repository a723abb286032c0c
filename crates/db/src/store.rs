//! In-memory roster store.
//!
//! Holds the canonical collections behind a single `tokio::sync::RwLock`.
//! Every repository call takes the lock exactly once, so id allocation and
//! insertion are atomic with respect to other calls.

use oficio_core::roster::{
    EstadoTurno, TipoTurno, ABOGADO_ID_PREFIX, ACTUACION_ID_PREFIX, GUARDIA_ID_PREFIX,
    PARTIDO_ID_PREFIX, TURNO_ID_PREFIX,
};
use oficio_core::rotation::Candidato;
use oficio_core::types::{format_entity_id, EntityId};
use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::abogado::AbogadoOficio;
use crate::models::actuacion::ActuacionOficio;
use crate::models::configuracion::ConfiguracionTurnos;
use crate::models::guardia::Guardia;
use crate::models::partido_judicial::PartidoJudicial;
use crate::models::turno::Turno;

/// Monotonic id counter. Values are never reused.
#[derive(Debug)]
pub(crate) struct IdSequence {
    prefix: &'static str,
    last: u64,
}

impl IdSequence {
    fn new(prefix: &'static str) -> Self {
        Self { prefix, last: 0 }
    }

    pub(crate) fn next_id(&mut self) -> EntityId {
        self.last += 1;
        format_entity_id(self.prefix, self.last)
    }
}

/// The collections guarded by the store lock.
#[derive(Debug)]
pub(crate) struct RosterData {
    pub turnos: Vec<Turno>,
    pub guardias: Vec<Guardia>,
    /// Most recent first.
    pub actuaciones: Vec<ActuacionOficio>,
    pub abogados: Vec<AbogadoOficio>,
    pub partidos: Vec<PartidoJudicial>,
    pub configuracion: ConfiguracionTurnos,
    pub turno_ids: IdSequence,
    pub guardia_ids: IdSequence,
    pub actuacion_ids: IdSequence,
    pub abogado_ids: IdSequence,
    pub partido_ids: IdSequence,
}

impl RosterData {
    pub(crate) fn turno(&self, id: &str) -> Option<&Turno> {
        self.turnos.iter().find(|t| t.id == id)
    }

    pub(crate) fn turno_mut(&mut self, id: &str) -> Option<&mut Turno> {
        self.turnos.iter_mut().find(|t| t.id == id)
    }

    /// Available lawyers registered for `tipo`, in roster order.
    pub(crate) fn candidates_for(&self, tipo: TipoTurno) -> Vec<Candidato> {
        self.abogados
            .iter()
            .filter(|a| a.disponible && a.registered_for(tipo))
            .map(|a| Candidato {
                id: a.id.clone(),
                nombre: a.nombre.clone(),
            })
            .collect()
    }

    /// Lawyer of the latest-ending non-cancelled turno of `tipo`.
    pub(crate) fn last_assigned_for(&self, tipo: TipoTurno) -> Option<&str> {
        self.turnos
            .iter()
            .filter(|t| t.tipo == tipo && t.estado != EstadoTurno::Cancelado)
            .max_by_key(|t| t.fecha_fin)
            .map(|t| t.abogado_id.as_str())
    }
}

/// Collection sizes, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub turnos: usize,
    pub guardias: usize,
    pub actuaciones: usize,
    pub abogados: usize,
    pub partidos_judiciales: usize,
}

/// The roster store. Construct once at startup and share behind an `Arc`.
#[derive(Debug)]
pub struct RosterStore {
    data: RwLock<RosterData>,
}

impl RosterStore {
    /// Create an empty store with the given configuration.
    pub fn new(configuracion: ConfiguracionTurnos) -> Self {
        Self {
            data: RwLock::new(RosterData {
                turnos: Vec::new(),
                guardias: Vec::new(),
                actuaciones: Vec::new(),
                abogados: Vec::new(),
                partidos: Vec::new(),
                configuracion,
                turno_ids: IdSequence::new(TURNO_ID_PREFIX),
                guardia_ids: IdSequence::new(GUARDIA_ID_PREFIX),
                actuacion_ids: IdSequence::new(ACTUACION_ID_PREFIX),
                abogado_ids: IdSequence::new(ABOGADO_ID_PREFIX),
                partido_ids: IdSequence::new(PARTIDO_ID_PREFIX),
            }),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, RosterData> {
        self.data.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, RosterData> {
        self.data.write().await
    }

    pub async fn counts(&self) -> StoreCounts {
        let data = self.read().await;
        StoreCounts {
            turnos: data.turnos.len(),
            guardias: data.guardias.len(),
            actuaciones: data.actuaciones.len(),
            abogados: data.abogados.len(),
            partidos_judiciales: data.partidos.len(),
        }
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new(ConfiguracionTurnos::default())
    }
}
