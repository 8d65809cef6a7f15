//! System orchestration, startup, and shutdown logic.

pub mod profile_system;
pub mod logging;

pub use profile_system::*;
pub use logging::*;
