use std::array;
use std::fmt;

/// How an installed toolchain version relates to the version a build expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// All three segments match; the build proceeds silently.
    Match,
    /// Only the patch segment differs; the build proceeds with a recommendation.
    Advisory,
    /// The major or minor segment differs; the build must stop.
    Blocking,
}

/// A dotted toolchain version split into major, minor, and patch segments
/// (e.g. "4.4.2").
///
/// Segments stay strings: the gate only ever tests them for equality, and
/// numeric parsing would reject segments the build system tolerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    raw: String,
    segments: [String; 3],
}

impl Version {
    /// Split a version string on `.` into exactly three segments.
    ///
    /// Missing trailing segments are filled with `"0"`; segments beyond the
    /// third are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split('.');
        let segments =
            array::from_fn(|_| parts.next().map(str::to_owned).unwrap_or_else(|| "0".to_owned()));
        Self { raw: raw.to_owned(), segments }
    }

    pub fn major(&self) -> &str {
        &self.segments[0]
    }

    pub fn minor(&self) -> &str {
        &self.segments[1]
    }

    pub fn patch(&self) -> &str {
        &self.segments[2]
    }

    /// Classify this (installed) version against the version a build expects.
    ///
    /// Major and minor drift block the build; patch drift is advisory only.
    pub fn compatibility_with(&self, expected: &Version) -> Compatibility {
        if self.major() != expected.major() || self.minor() != expected.minor() {
            Compatibility::Blocking
        } else if self.patch() != expected.patch() {
            Compatibility::Advisory
        } else {
            Compatibility::Match
        }
    }
}

impl fmt::Display for Version {
    /// Render the version exactly as the user supplied it, padding excluded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
