//! Validated URL path used as a route pattern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An absolute URL path such as `/` or `/app`.
///
/// Only RFC 3986 path characters are accepted: unreserved characters,
/// sub-delimiters, `:`, `@`, `/` and well-formed `%XX` escapes. Query and
/// fragment delimiters are rejected, so a `RoutePath` never carries either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// The root path `/`.
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Wrap a path literal known to be valid.
    pub(crate) fn from_static(path: &'static str) -> Self {
        debug_assert!(validate(path).is_ok(), "invalid static path {path}");
        Self(path.to_string())
    }

    /// Validate and wrap `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `path` is empty, relative, contains
    /// a character outside the path grammar, or has a broken `%` escape.
    pub fn parse(path: impl Into<String>) -> Result<Self, ValidationError> {
        let path = path.into();
        validate(&path)?;
        Ok(Self(path))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    if !path.starts_with('/') {
        return Err(ValidationError::NotAbsolute);
    }

    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            let hi = chars.next();
            let lo = chars.next();
            match (hi, lo) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {}
                _ => return Err(ValidationError::MalformedPercentEncoding),
            }
        } else if !is_path_char(c) {
            return Err(ValidationError::ForbiddenCharacter(c));
        }
    }
    Ok(())
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.'
                | '_'
                | '~'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | ':'
                | '@'
                | '/'
        )
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoutePath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RoutePath> for String {
    fn from(value: RoutePath) -> Self {
        value.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
