use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please provide a valid PDB identifier, got '{0}'")]
pub struct InvalidPdbId(pub String);

/// A four character PDB identifier: a digit 1-9 followed by three alphanumerics.
///
/// Stored lower case, as used in file names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PdbId(String);

impl PdbId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The middle two characters, used to shard mirror directories.
    pub fn shard(&self) -> &str {
        &self.0[1..3]
    }
}

impl FromStr for PdbId {
    type Err = InvalidPdbId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        let mut chars = id.chars();
        let valid = id.len() == 4
            && chars.next().is_some_and(|c| matches!(c, '1'..='9'))
            && chars.all(|c| c.is_ascii_alphanumeric());
        if valid {
            Ok(PdbId(id.to_ascii_lowercase()))
        } else {
            Err(InvalidPdbId(s.to_string()))
        }
    }
}

impl fmt::Display for PdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PdbId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
