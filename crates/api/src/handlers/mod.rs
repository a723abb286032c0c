pub mod abogado;
pub mod actuacion;
pub mod guardia;
pub mod oficio;
pub mod partido_judicial;
pub mod turno;
