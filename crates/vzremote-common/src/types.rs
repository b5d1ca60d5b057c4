//! Domain primitive types used across the vzremote workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a container: either its numeric CTID or its name.
///
/// The value is opaque and passed through to `vzctl` unvalidated; `Display`
/// renders exactly the token that lands on the remote command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CtRef {
    /// Numeric container identifier.
    Ctid(u32),
    /// Container name.
    Name(String),
}

impl CtRef {
    /// Parses a CLI-style token: all-digit input becomes a CTID, anything
    /// else a name.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        token
            .parse::<u32>()
            .map_or_else(|_| Self::Name(token.to_string()), Self::Ctid)
    }
}

impl From<u32> for CtRef {
    fn from(ctid: u32) -> Self {
        Self::Ctid(ctid)
    }
}

impl From<&str> for CtRef {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for CtRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ctid(ctid) => write!(f, "{ctid}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Run state of a container as reported by `vzctl status`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    /// Container is actively running.
    Running,
    /// Container is stopped.
    Down,
    /// A state token this crate does not recognize (tool-version drift).
    Other(String),
}

impl RunState {
    /// Maps a raw status token to a run state.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "running" => Self::Running,
            "down" => Self::Down,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Down => write!(f, "down"),
            Self::Other(token) => write!(f, "{token}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctref_parse_digits_is_ctid() {
        assert_eq!(CtRef::parse("101"), CtRef::Ctid(101));
    }

    #[test]
    fn ctref_parse_name_is_name() {
        assert_eq!(CtRef::parse("web01"), CtRef::Name("web01".into()));
    }

    #[test]
    fn ctref_display_matches_input() {
        assert_eq!(CtRef::from(101).to_string(), "101");
        assert_eq!(CtRef::parse("web01").to_string(), "web01");
    }

    #[test]
    fn run_state_from_known_tokens() {
        assert_eq!(RunState::from_token("running"), RunState::Running);
        assert_eq!(RunState::from_token("down"), RunState::Down);
    }

    #[test]
    fn run_state_preserves_unknown_token() {
        assert_eq!(
            RunState::from_token("suspended"),
            RunState::Other("suspended".into())
        );
        assert_eq!(RunState::from_token("suspended").to_string(), "suspended");
    }
}
