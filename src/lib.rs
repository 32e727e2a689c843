//! idfcheck: gate an ESP32 build on the installed ESP-IDF toolchain version.

pub mod app;
pub mod domain;

use app::commands::gate;

pub use app::commands::gate::GateOutcome;
pub use domain::{Compatibility, GateError, Version};

/// Compare the installed ESP-IDF version against the version the build
/// expects, reporting advisory or blocking drift on standard output.
///
/// Returns a `GateOutcome` carrying the exit code for the run.
pub fn check(expected: &str, given: &str) -> GateOutcome {
    gate::execute(expected, given)
}
