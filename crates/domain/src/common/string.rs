//! String conversion utilities.

/// Trims `value` and converts the result to `None` if nothing is left.
///
/// Free-text inputs arrive straight from a form, so a field holding only
/// spaces or newlines counts as absent.
///
/// # Examples
///
/// ```
/// use storyteller_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("  hello "), Some("hello"));
/// assert_eq!(none_if_blank(""), None);
/// assert_eq!(none_if_blank(" \t\n"), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Extension trait for string slices providing `non_blank` as a method.
///
/// # Examples
///
/// ```
/// use storyteller_domain::common::StrExt;
///
/// assert_eq!(" Roald Dahl ".non_blank(), Some("Roald Dahl"));
/// assert_eq!("   ".non_blank(), None);
/// ```
pub trait StrExt {
    /// Trimmed view of this string, or `None` if it is blank.
    fn non_blank(&self) -> Option<&str>;

    /// Whether the string is empty after trimming.
    fn is_blank(&self) -> bool {
        self.non_blank().is_none()
    }
}

impl StrExt for str {
    fn non_blank(&self) -> Option<&str> {
        none_if_blank(self)
    }
}

impl StrExt for String {
    fn non_blank(&self) -> Option<&str> {
        none_if_blank(self)
    }
}
