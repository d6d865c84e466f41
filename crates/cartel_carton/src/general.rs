//! General string helpers shared across Cartel crates.
//!
//! Markup uses dash-separated names (`user-card`, `is-active`) while scripts
//! declare identifiers (`UserCard`, `isActive`). The conversions here are the
//! only place where the two conventions are bridged.
//!
//! A dash is only folded into a capital when it sits between an ASCII
//! alphanumeric character and an ASCII lowercase letter, and a capital only
//! receives a dash when it follows an alphanumeric character. For names
//! made of lowercase letters, digits and dashes this makes
//! `hyphenate(camelize(name)) == name` hold.

use compact_str::CompactString;

/// Convert a dash-separated name to camelCase.
///
/// # Examples
/// ```
/// use cartel_carton::camelize;
///
/// assert_eq!(camelize("my-component"), "myComponent");
/// assert_eq!(camelize("a-b-c"), "aBC");
/// assert_eq!(camelize("item-2"), "item-2");
/// assert_eq!(camelize("-leading"), "-leading");
/// ```
pub fn camelize(s: &str) -> CompactString {
    let mut result = CompactString::with_capacity(s.len());
    let mut prev: Option<char> = None;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' && prev.is_some_and(|p| p.is_ascii_alphanumeric()) {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    chars.next();
                    result.push(next.to_ascii_uppercase());
                    prev = Some(next);
                    continue;
                }
            }
        }
        result.push(c);
        prev = Some(c);
    }

    result
}

/// Convert a camelCase or PascalCase identifier to its dash-separated form.
///
/// Every capital is lowercased, including non-ASCII ones. A dash is inserted
/// before a capital that follows a letter or digit.
///
/// # Examples
/// ```
/// use cartel_carton::hyphenate;
///
/// assert_eq!(hyphenate("MyComponent"), "my-component");
/// assert_eq!(hyphenate("isActive"), "is-active");
/// assert_eq!(hyphenate("user-card"), "user-card");
/// assert_eq!(hyphenate("My-Component"), "my-component");
/// assert_eq!(hyphenate("ÉcranCard"), "écran-card");
/// ```
pub fn hyphenate(s: &str) -> CompactString {
    let mut result = CompactString::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev.is_some_and(char::is_alphanumeric) {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        prev = Some(c);
    }

    result
}

/// Uppercase the first character of a string.
///
/// # Examples
/// ```
/// use cartel_carton::capitalize;
///
/// assert_eq!(capitalize("myComponent"), "MyComponent");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> CompactString {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = CompactString::with_capacity(s.len());
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => CompactString::default(),
    }
}
