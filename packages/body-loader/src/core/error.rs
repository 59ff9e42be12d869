//! Error taxonomy for loading and querying body definitions.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while constructing a loader. Fatal for that loader instance.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read body document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("body document is empty")]
    Empty,
    #[error("body document is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Which rigid body a format failure belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyRef {
    pub index: usize,
    /// Known once the body's `name` field decoded.
    pub name: Option<String>,
}

impl fmt::Display for BodyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "rigid body #{} ('{}')", self.index, name),
            None => write!(f, "rigid body #{}", self.index),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatProblem {
    Missing,
    Invalid(String),
}

/// Well-formed JSON that does not match the body document schema.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct FormatError {
    pub field: &'static str,
    pub body: Option<BodyRef>,
    pub problem: FormatProblem,
}

impl FormatError {
    pub fn missing(field: &'static str, body: Option<BodyRef>) -> Self {
        Self { field, body, problem: FormatProblem::Missing }
    }

    pub fn invalid(field: &'static str, body: Option<BodyRef>, reason: impl Into<String>) -> Self {
        Self { field, body, problem: FormatProblem::Invalid(reason.into()) }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FormatProblem::Missing => write!(f, "missing {}", self.field)?,
            FormatProblem::Invalid(reason) => write!(f, "invalid {}: {}", self.field, reason)?,
        }
        if let Some(body) = &self.body {
            write!(f, " in {}", body)?;
        }
        Ok(())
    }
}

/// Requested body name is not part of the loaded model.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Name '{name}' was not found.")]
pub struct NotFoundError {
    pub name: String,
}

impl NotFoundError {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}
