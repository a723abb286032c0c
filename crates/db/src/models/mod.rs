//! Roster entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as held in the store
//! - A `Deserialize` + `Validate` create DTO
//! - Update DTOs (all `Option` fields for partial merges) where the entity
//!   is mutable, and filter structs for list queries

pub mod abogado;
pub mod actuacion;
pub mod configuracion;
pub mod guardia;
pub mod partido_judicial;
pub mod turno;
