//! Repository for turnos.

use oficio_core::error::CoreError;
use oficio_core::roster::{EstadoTurno, TipoTurno};
use oficio_core::rotation::{self, RotationRequest};
use oficio_core::types::Fecha;

use crate::models::turno::{
    AsignarAbogado, CreateRotacion, CreateTurno, SwappedTurnos, Turno, TurnoFilter,
};
use crate::store::RosterStore;

/// Provides query and mutation operations for turnos.
pub struct TurnoRepo;

impl TurnoRepo {
    /// Insert a new turno in `asignado` status, returning the created record.
    pub async fn create(store: &RosterStore, input: &CreateTurno) -> Turno {
        let mut data = store.write().await;
        let turno = Turno {
            id: data.turno_ids.next_id(),
            tipo: input.tipo,
            partido_judicial: input.partido_judicial.clone(),
            fecha_inicio: input.fecha_inicio,
            fecha_fin: input.fecha_fin,
            abogado_id: input.abogado_id.clone(),
            abogado_nombre: input.abogado_nombre.clone(),
            estado: EstadoTurno::Asignado,
            observaciones: input.observaciones.clone(),
        };
        data.turnos.push(turno.clone());
        tracing::info!(
            turno_id = %turno.id,
            tipo = turno.tipo.as_str(),
            abogado_id = %turno.abogado_id,
            "Turno created"
        );
        turno
    }

    /// Plan an automatic rotation and insert one turno per period.
    ///
    /// Reading the configuration, the candidates and the previous holder,
    /// planning and inserting all happen under one write guard, so
    /// concurrent rotations for the same type continue from each other.
    /// Fails with `Conflict` when automatic rotation is disabled and with
    /// `Validation` when no valid plan exists.
    pub async fn plan_and_create_rotation(
        store: &RosterStore,
        input: &CreateRotacion,
    ) -> Result<Vec<Turno>, CoreError> {
        let mut data = store.write().await;
        let config = data.configuracion.clone();
        if !config.rotacion_automatica {
            return Err(CoreError::Conflict(
                "Automatic rotation is disabled in the roster configuration".to_string(),
            ));
        }

        let candidatos = data.candidates_for(input.tipo);
        let ultimo = data.last_assigned_for(input.tipo).map(str::to_owned);
        let periods = rotation::plan(&RotationRequest {
            candidatos: &candidatos,
            ultimo_asignado: ultimo.as_deref(),
            fecha_inicio: input.fecha_inicio,
            periodos: input.periodos,
            frecuencia: config.frecuencia_rotacion,
            no_consecutivos: config.no_consecutivos,
        })?;

        let mut created = Vec::with_capacity(periods.len());
        for period in periods {
            let turno = Turno {
                id: data.turno_ids.next_id(),
                tipo: input.tipo,
                partido_judicial: config.partido_judicial.clone(),
                fecha_inicio: period.fecha_inicio,
                fecha_fin: period.fecha_fin,
                abogado_id: period.abogado_id,
                abogado_nombre: period.abogado_nombre,
                estado: EstadoTurno::Asignado,
                observaciones: Some("Rotación automática".to_string()),
            };
            data.turnos.push(turno.clone());
            created.push(turno);
        }
        tracing::info!(
            tipo = input.tipo.as_str(),
            count = created.len(),
            "Rotation turnos created"
        );
        Ok(created)
    }

    pub async fn find_by_id(store: &RosterStore, id: &str) -> Option<Turno> {
        store.read().await.turno(id).cloned()
    }

    /// List turnos in creation order, keeping those that match `filter`.
    pub async fn list(store: &RosterStore, filter: &TurnoFilter) -> Vec<Turno> {
        store
            .read()
            .await
            .turnos
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    pub async fn list_by_lawyer(store: &RosterStore, abogado_id: &str) -> Vec<Turno> {
        let filter = TurnoFilter {
            abogado_id: Some(abogado_id.to_string()),
            ..TurnoFilter::default()
        };
        Self::list(store, &filter).await
    }

    /// Turnos whose date range contains `fecha`.
    pub async fn list_by_date(store: &RosterStore, fecha: Fecha) -> Vec<Turno> {
        let filter = TurnoFilter {
            fecha: Some(fecha),
            ..TurnoFilter::default()
        };
        Self::list(store, &filter).await
    }

    pub async fn list_by_type(store: &RosterStore, tipo: TipoTurno) -> Vec<Turno> {
        let filter = TurnoFilter {
            tipo: Some(tipo),
            ..TurnoFilter::default()
        };
        Self::list(store, &filter).await
    }

    /// Overwrite a turno's status. Any status may follow any other.
    ///
    /// Returns `None` if no turno with the given `id` exists.
    pub async fn update_estado(
        store: &RosterStore,
        id: &str,
        estado: EstadoTurno,
    ) -> Option<Turno> {
        let mut data = store.write().await;
        let turno = data.turno_mut(id)?;
        let previous = turno.estado;
        turno.estado = estado;
        tracing::info!(
            turno_id = %id,
            from = previous.as_str(),
            to = estado.as_str(),
            "Turno status changed"
        );
        Some(turno.clone())
    }

    /// Reassign a turno to another lawyer at any status.
    ///
    /// Returns `None` if no turno with the given `id` exists.
    pub async fn assign_lawyer(
        store: &RosterStore,
        id: &str,
        input: &AsignarAbogado,
    ) -> Option<Turno> {
        let mut data = store.write().await;
        let turno = data.turno_mut(id)?;
        turno.abogado_id = input.abogado_id.clone();
        turno.abogado_nombre = input.abogado_nombre.clone();
        tracing::info!(turno_id = %id, abogado_id = %input.abogado_id, "Turno reassigned");
        Some(turno.clone())
    }

    /// Exchange the assigned lawyer between two turnos, leaving every other
    /// field untouched. Applying the same swap twice restores the original.
    ///
    /// Returns `None` if either id is missing; nothing is changed in that case.
    pub async fn swap_lawyers(store: &RosterStore, id_a: &str, id_b: &str) -> Option<SwappedTurnos> {
        let mut data = store.write().await;
        let idx_a = data.turnos.iter().position(|t| t.id == id_a)?;
        let idx_b = data.turnos.iter().position(|t| t.id == id_b)?;

        if idx_a != idx_b {
            let (first, second) = (idx_a.min(idx_b), idx_a.max(idx_b));
            let (head, tail) = data.turnos.split_at_mut(second);
            let (x, y) = (&mut head[first], &mut tail[0]);
            std::mem::swap(&mut x.abogado_id, &mut y.abogado_id);
            std::mem::swap(&mut x.abogado_nombre, &mut y.abogado_nombre);
        }

        tracing::info!(turno_a = %id_a, turno_b = %id_b, "Turno lawyers swapped");
        Some(SwappedTurnos {
            turno_a: data.turnos[idx_a].clone(),
            turno_b: data.turnos[idx_b].clone(),
        })
    }
}
