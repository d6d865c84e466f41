//! Naming conventions for component tags and attributes.
//!
//! This module provides centralized utilities for:
//! - Converting between markup (dash) names and script identifiers
//! - Normalizing names before they are compared
//! - Re-exports from cartel_carton for convenience
//!
//! Markup and script names are never compared raw. Both sides are brought to
//! dash form first, so `user-card`, `UserCard` and `userCard` all match.

// Re-export core utilities from cartel_carton
pub use cartel_carton::{camelize, capitalize, hyphenate};

use cartel_carton::CompactString;

/// Convert an identifier (`isActive`, `UserCard`) to its dash form.
///
/// # Examples
/// ```
/// use cartel_registre::naming::to_dash;
///
/// assert_eq!(to_dash("UserCard"), "user-card");
/// assert_eq!(to_dash("isActive"), "is-active");
/// assert_eq!(to_dash("user-card"), "user-card");
/// ```
#[inline]
pub fn to_dash(name: &str) -> CompactString {
    hyphenate(name)
}

/// Convert a dash name to a camelCase identifier.
///
/// # Examples
/// ```
/// use cartel_registre::naming::to_identifier;
///
/// assert_eq!(to_identifier("user-card"), "userCard");
/// assert_eq!(to_identifier("is-active"), "isActive");
/// ```
#[inline]
pub fn to_identifier(name: &str) -> CompactString {
    camelize(name)
}

/// Convert a dash name to a PascalCase identifier, the form components take
/// when referenced as types or imports.
///
/// # Examples
/// ```
/// use cartel_registre::naming::to_pascal_identifier;
///
/// assert_eq!(to_pascal_identifier("user-card"), "UserCard");
/// assert_eq!(to_pascal_identifier("UserCard"), "UserCard");
/// ```
#[inline]
pub fn to_pascal_identifier(name: &str) -> CompactString {
    capitalize(&camelize(name))
}

/// Check if two names match when normalized to dash form.
///
/// # Examples
/// ```
/// use cartel_registre::naming::names_match;
///
/// assert!(names_match("my-prop", "myProp"));
/// assert!(names_match("MyComp", "my-comp"));
/// assert!(!names_match("myProp", "otherProp"));
/// ```
#[inline]
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || to_dash(a) == to_dash(b)
}

// =============================================================================
// Tests
// =============================================================================
