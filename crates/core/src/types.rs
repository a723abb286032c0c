/// Roster entity identifiers are human-readable strings such as `TURNO-007`.
pub type EntityId = String;

/// Calendar dates carry no time zone; the roster works in local court days.
pub type Fecha = chrono::NaiveDate;

/// Format a sequential identifier as `{prefix}-{seq}` with at least three digits.
///
/// Sequences past 999 simply widen (`TURNO-1000`).
pub fn format_entity_id(prefix: &str, seq: u64) -> EntityId {
    format!("{prefix}-{seq:03}")
}
