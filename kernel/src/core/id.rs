/*!
 * Process Identifiers
 * Opaque, stable identifiers for simulated processes
 */

use super::data_structures::InlineString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process identifier
///
/// Instance files name processes freely ("1", "P4", "compiler"), so the id is
/// an opaque label rather than a numeric counter. It never changes for the
/// lifetime of a process, including across resets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(InlineString);

impl Pid {
    #[inline]
    pub fn new(label: impl Into<InlineString>) -> Self {
        Self(label.into())
    }

    #[inline(always)]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Pid {
    #[inline]
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Pid {
    #[inline]
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<u32> for Pid {
    #[inline]
    fn from(n: u32) -> Self {
        Self::new(n.to_string())
    }
}
