//! Column-level anonymization: policies, per-column transformations, and
//! the in-place pass engine.

pub mod categorical;
pub mod dates;
pub mod engine;
pub mod hashing;
pub mod jitter;
pub mod numeric;
pub mod policy;
pub mod pseudonym;
pub mod semester;

pub use categorical::CategoryMap;
pub use dates::shift_date;
pub use engine::{PassOutcome, apply_passes};
pub use hashing::hash_identifier;
pub use jitter::{shift_float, shift_integer};
pub use numeric::{parse_f64, parse_i64};
pub use policy::{ColumnPass, ColumnPolicy, build_passes};
pub use pseudonym::{Persona, PersonaLedger, fresh_email, fresh_phone};
pub use semester::shift_semester;
