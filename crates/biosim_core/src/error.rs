//! Setup errors raised while building a world.
//!
//! All of these abort the current run only. Once a `World` is built the
//! yearly step cannot fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A species record failed validation; every problem is listed.
    #[error("species '{name}' is not fully defined: {}", problems.join("; "))]
    InvalidSpecies { name: String, problems: Vec<String> },

    #[error("terrain '{letter}' is invalid: {problem}")]
    InvalidTerrain { letter: char, problem: String },

    #[error("undefined terrain type '{letter}' at ({x}, {y})")]
    UnknownTerrain { letter: char, x: usize, y: usize },

    #[error("malformed geography: {0}")]
    MalformedGeography(String),

    #[error("unknown species '{0}'")]
    UnknownSpecies(String),

    #[error("species '{0}' is defined twice")]
    DuplicateSpecies(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
