//! Hierarchical service names.
//!
//! A [`ServiceName`] is an ordered, non-empty sequence of segments such as
//! `app1` / `immutant` / `housekeeper`. Names are values: composing one always
//! yields a new name and the original stays untouched, so they can be shared
//! freely between threads.
//!
//! ## Composition
//!
//! Names are only ever built segment by segment through [`ServiceName::of`] and
//! the `append*` family. The dotted form produced by `Display` is meant for logs
//! and diagnostics and is never parsed back: a segment may not contain the
//! [`SEPARATOR`], which rules out two different names rendering or comparing
//! the same way.
//!
//! ## Well-known names
//!
//! The [`well_known`] submodule holds the container's fixed infrastructure names
//! and the per-deployment roles derived from a scope root.

use std::{
    fmt::{Display, Formatter},
    sync::Arc,
};

use crate::services::error::RegistryError;

pub mod well_known;

pub use well_known::WellKnownService;

/// Separator used when rendering a name, and therefore forbidden inside segments.
pub const SEPARATOR: char = '.';

fn validate_segment(segment: String) -> Result<String, RegistryError> {
    if segment.is_empty() || segment.contains(SEPARATOR) {
        Err(RegistryError::InvalidSegment(segment))
    } else {
        Ok(segment)
    }
}

/// Immutable hierarchical service identifier.
///
/// Equality, hashing and ordering are structural over the segment sequence,
/// which makes `ServiceName` the key type of the registry.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ServiceName {
    segments: Arc<[String]>,
}

impl ServiceName {
    /// Creates a single-segment name.
    ///
    /// Fails with [`RegistryError::InvalidSegment`] if the segment is empty or
    /// contains the [`SEPARATOR`].
    pub fn of(segment: impl Into<String>) -> Result<Self, RegistryError> {
        Ok(Self { segments: vec![validate_segment(segment.into())?].into() })
    }

    /// Creates a name from a sequence of segments.
    ///
    /// An empty sequence is rejected as an invalid (empty) segment.
    pub fn of_all<I, S>(segments: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(|segment| validate_segment(segment.into()))
            .collect::<Result<Vec<_>, _>>()?;
        if segments.is_empty() {
            return Err(RegistryError::InvalidSegment(String::new()));
        }
        Ok(Self { segments: segments.into() })
    }

    /// Names built from compile-time constants known to be valid.
    pub(crate) fn from_static(segments: &[&'static str]) -> Self {
        debug_assert!(!segments.is_empty());
        debug_assert!(segments.iter().all(|s| !s.is_empty() && !s.contains(SEPARATOR)));
        Self { segments: segments.iter().map(|s| (*s).to_owned()).collect() }
    }

    /// Returns a new name with `segment` appended.
    pub fn append(&self, segment: impl Into<String>) -> Result<Self, RegistryError> {
        self.append_all([segment])
    }

    /// Returns a new name with every given segment appended, in order.
    ///
    /// Validation is all-or-nothing: one bad segment fails the whole call.
    pub fn append_all<I, S>(&self, segments: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut joined = self.segments.to_vec();
        for segment in segments {
            joined.push(validate_segment(segment.into())?);
        }
        Ok(Self { segments: joined.into() })
    }

    /// Returns a new name made of this name's segments followed by `other`'s.
    ///
    /// Infallible since both operands are already valid names.
    pub fn append_name(&self, other: &ServiceName) -> Self {
        Self { segments: self.segments.iter().chain(other.segments.iter()).cloned().collect() }
    }

    /// Segments in order, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments, always at least one.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Last segment of the name.
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Name without its last segment, or `None` for a single-segment name.
    pub fn parent(&self) -> Option<ServiceName> {
        match self.segments.len() {
            0 | 1 => None,
            n => Some(Self { segments: self.segments[..n - 1].into() }),
        }
    }

    /// Whether `root` is this name or one of its ancestors.
    pub fn is_within(&self, root: &ServiceName) -> bool {
        self.segments.starts_with(&root.segments)
    }

    /// Whether this name is a proper prefix of `other`.
    pub fn is_parent_of(&self, other: &ServiceName) -> bool {
        other.depth() > self.depth() && other.is_within(self)
    }
}

impl Display for ServiceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            f.write_str(first)?;
        }
        for segment in segments {
            write!(f, "{SEPARATOR}{segment}")?;
        }
        Ok(())
    }
}
