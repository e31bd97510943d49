//! Input warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal problem found while loading the inputs file.
///
/// Unknown keys are ignored rather than rejected; each one produces a
/// warning, with a suggested key when one is close enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputWarning {
    /// The unknown key
    pub key: String,
    /// The file the key appeared in
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
