//! Dotted version ordering used for sorting and deduplicating installer lists
//!
//! Segments are compared by length first and only then lexicographically, so
//! "9" sorts before "10" without parsing either side as a number. This is not
//! semver: "1.02" and "1.10" compare by content because their segments have
//! the same length.

use std::cmp::Ordering;

use crate::version::types::InstallerVersion;

/// Compare two dotted version strings.
///
/// Walks the `.`-separated segments pairwise. The first segment pair that
/// differs decides the result (shorter segment first, then byte order). If
/// every shared segment is equal, the version with fewer segments sorts first.
///
/// Leading and inner empty segments (`".1"`, `"1..2"`) compare as length 0.
/// Trailing ones are dropped, so `"1."` equals `"1"` and `".."` has no
/// segments at all. A string without any `.` is a single segment, even when
/// it is empty.
pub fn compare_version(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ord = l.len().cmp(&r.len()).then_with(|| l.cmp(r));
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len())
}

fn segments(version: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = version.split('.').collect();
    if parts.len() > 1 {
        while parts.last() == Some(&"") {
            parts.pop();
        }
    }
    parts
}

/// Descending counterpart of [`compare_version`] (newest first)
pub fn compare_desc(a: &str, b: &str) -> Ordering {
    compare_version(b, a)
}

/// Newest-first ordering of installer versions
///
/// Stateless, so the shared [`DescendingOrder::INSTANCE`] can be used from
/// any thread:
///
/// ```
/// use installer_versions::version::compare::DescendingOrder;
/// use installer_versions::version::types::InstallerVersion;
///
/// let mut versions = vec![
///     InstallerVersion::new("1.0", "1.20.1"),
///     InstallerVersion::new("2.0", "1.20.1"),
///     InstallerVersion::new("1.5", "1.20.1"),
/// ];
/// versions.sort_by(|a, b| DescendingOrder::INSTANCE.compare(a, b));
/// assert_eq!(versions[0].self_version, "2.0");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescendingOrder;

impl DescendingOrder {
    pub const INSTANCE: DescendingOrder = DescendingOrder;

    pub fn compare(&self, a: &InstallerVersion, b: &InstallerVersion) -> Ordering {
        b.cmp(a)
    }
}
