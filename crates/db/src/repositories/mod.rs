//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&RosterStore` as the first argument. Reads return owned clones;
//! id-targeted operations return `Option`, with `None` meaning the id was
//! not found.

pub mod abogado_repo;
pub mod actuacion_repo;
pub mod configuracion_repo;
pub mod estadisticas_repo;
pub mod guardia_repo;
pub mod partido_judicial_repo;
pub mod turno_repo;

pub use abogado_repo::AbogadoRepo;
pub use actuacion_repo::ActuacionRepo;
pub use configuracion_repo::ConfiguracionRepo;
pub use estadisticas_repo::EstadisticasRepo;
pub use guardia_repo::GuardiaRepo;
pub use partido_judicial_repo::PartidoJudicialRepo;
pub use turno_repo::TurnoRepo;
