//! Core identifier types for the statefold container.
//!
//! This module defines the two identifiers the rest of the crate is built
//! around: [`ActionTag`], which names a kind of action, and [`SliceKey`],
//! which names a slice of the aggregate state record. Both are thin wrappers
//! over `&'static str` so they can appear in `const` tables and be compared
//! and hashed without allocation.
//!
//! # Examples
//!
//! ```rust
//! use statefold::types::{ActionTag, SliceKey};
//!
//! const SET_VOLUME: ActionTag = ActionTag::new("audio/set_volume");
//! const AUDIO: SliceKey = SliceKey::new("audio");
//!
//! assert_eq!(SET_VOLUME.as_str(), "audio/set_volume");
//! assert_eq!(AUDIO.to_string(), "audio");
//! ```

use std::fmt;

/// Stable identifier for one kind of action.
///
/// Tags follow the `"<slice>/<operation>"` convention and must be unique
/// across the whole application: two slices claiming the same tag would both
/// react to a single dispatch, which the composer rejects at build time.
///
/// # Examples
///
/// ```rust
/// use statefold::types::ActionTag;
///
/// const SET_VALUE: ActionTag = ActionTag::new("age/set_value");
/// assert_eq!(format!("{SET_VALUE}"), "age/set_value");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActionTag(&'static str);

impl ActionTag {
    /// Creates a tag from a string constant.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// The underlying string form of the tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of one slice within the aggregate state record.
///
/// Each reducer registration owns exactly one key, and the keys of a composed
/// mapping correspond one-to-one with the fields of the aggregate record.
///
/// # Examples
///
/// ```rust
/// use statefold::types::SliceKey;
///
/// const NAME: SliceKey = SliceKey::new("name");
/// assert_eq!(NAME.as_str(), "name");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SliceKey(&'static str);

impl SliceKey {
    /// Creates a key from a string constant.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// The underlying string form of the key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
