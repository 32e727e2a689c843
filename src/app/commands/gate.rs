use crate::domain::{Compatibility, Version};

// The misspelling is load-bearing: build scripts grep for this exact line.
const UPDATE_INSTRUCTIONS: &str = "  See update instrucitons at: https://github.com/Moddable-OpenSource/moddable/blob/public/documentation/devices/esp32.md";

/// Result of one gate run.
#[derive(Debug, Clone, Copy)]
pub struct GateOutcome {
    pub compatibility: Compatibility,
    pub exit_code: i32,
}

/// Compare the given (installed) version against the expected one and report
/// drift on standard output.
///
/// Major or minor drift prints an update demand and carries exit code 1;
/// patch drift prints a recommendation and carries exit code 0; a full match
/// prints nothing.
pub fn execute(expected_raw: &str, given_raw: &str) -> GateOutcome {
    let expected = Version::parse(expected_raw);
    let given = Version::parse(given_raw);

    let compatibility = given.compatibility_with(&expected);
    let exit_code = match compatibility {
        Compatibility::Match => 0,
        Compatibility::Advisory => {
            println!("Recommend using ESP-IDF {} (found {})", expected, given);
            println!("{}", UPDATE_INSTRUCTIONS);
            0
        }
        Compatibility::Blocking => {
            println!("*** Update required to ESP-IDF {}", expected);
            println!("{}", UPDATE_INSTRUCTIONS);
            1
        }
    };

    GateOutcome { compatibility, exit_code }
}
