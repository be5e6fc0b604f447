use std::fmt;

use crate::provider::MapError;

/// Errors returned by the allocation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
  /// Requested size is zero or not a multiple of the configured granularity.
  InvalidSize,
  /// No existing or newly creatable region can satisfy the request.
  OutOfMemory,
  /// The page provider could not supply a new region.
  MappingFailure,
  /// The freed address is not tracked as taken in any region.
  InvalidFree,
}

impl fmt::Display for AllocError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      Self::InvalidSize => write!(f, "size is zero or not a multiple of the allocation granularity"),
      Self::OutOfMemory => write!(f, "no region can satisfy the request"),
      Self::MappingFailure => write!(f, "page provider failed to map a new region"),
      Self::InvalidFree => write!(f, "address is not currently allocated"),
    }
  }
}

impl std::error::Error for AllocError {}

impl From<MapError> for AllocError {
  fn from(_: MapError) -> Self {
    AllocError::MappingFailure
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn map_error_converts_to_mapping_failure() {
    assert_eq!(AllocError::MappingFailure, From::from(MapError));
  }

  #[test]
  fn display_messages_are_distinct() {
    let errors = [
      AllocError::InvalidSize,
      AllocError::OutOfMemory,
      AllocError::MappingFailure,
      AllocError::InvalidFree,
    ];

    for (i, a) in errors.iter().enumerate() {
      for b in errors.iter().skip(i + 1) {
        assert_ne!(a.to_string(), b.to_string());
      }
    }
  }
}
