//! Dotted field paths into the output tree.

use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// A parsed dotted path naming one leaf field in the output tree.
///
/// The final segment is the terminal field name; the preceding segments name
/// the chain of nested objects that must materialise for the field to be set.
///
/// # Examples
///
/// ```rust
/// use leafbind::FieldPath;
///
/// let path = FieldPath::parse("FailoverConfig.SourcePriority.PrimarySource")?;
/// assert_eq!(path.terminal(), "PrimarySource");
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.to_string(), "FailoverConfig.SourcePriority.PrimarySource");
/// # Ok::<_, leafbind::SchemaError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldPath {
    parents: Vec<String>,
    terminal: String,
}

impl FieldPath {
    /// Parses dotted notation such as `A.B.C`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedPath`] when the input is empty or any
    /// segment between dots is empty.
    pub fn parse(dotted: &str) -> Result<Self, SchemaError> {
        if dotted.is_empty() {
            return Err(malformed(dotted, "path is empty"));
        }
        let mut segments = Vec::new();
        for segment in dotted.split('.') {
            if segment.is_empty() {
                return Err(malformed(dotted, "empty path segment"));
            }
            segments.push(segment.to_owned());
        }
        segments.pop().map_or_else(
            || Err(malformed(dotted, "path is empty")),
            |terminal| {
                Ok(Self {
                    parents: segments,
                    terminal,
                })
            },
        )
    }

    /// Segments naming the nested objects above the terminal field.
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.parents.iter().map(String::as_str)
    }

    /// The terminal field name.
    #[must_use]
    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    /// All segments in order, terminal included.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.parents().chain(std::iter::once(self.terminal()))
    }

    /// Number of segments, terminal included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parents.len() + 1
    }

    /// Whether every segment of `self` starts `other`, with `other` strictly
    /// longer. Such a pair cannot coexist in one schema: the shorter path's
    /// terminal field would also have to be a nested object.
    #[must_use]
    pub fn is_strict_prefix_of(&self, other: &Self) -> bool {
        if self.depth() >= other.depth() {
            return false;
        }
        self.segments()
            .zip(other.segments())
            .all(|(mine, theirs)| mine == theirs)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for parent in &self.parents {
            f.write_str(parent)?;
            f.write_str(".")?;
        }
        f.write_str(&self.terminal)
    }
}

impl FromStr for FieldPath {
    type Err = SchemaError;

    fn from_str(dotted: &str) -> Result<Self, Self::Err> {
        Self::parse(dotted)
    }
}

fn malformed(path: &str, message: &str) -> SchemaError {
    SchemaError::MalformedPath {
        path: path.to_owned(),
        message: message.to_owned(),
    }
}
