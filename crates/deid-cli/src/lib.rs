//! Library surface of the `deid` binary.
//!
//! The pipeline stages, run report, scaffolding, and logging setup live here
//! so integration tests can drive them without spawning the binary. The
//! argument parsing and terminal output stay in the binary modules.

pub mod logging;
pub mod pipeline;
pub mod report;
pub mod scaffold;
