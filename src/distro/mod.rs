//! Linux distribution identity queries.
//!
//! Each query performs its own load-parse-match cycle against the
//! descriptor file; nothing is cached and no state is shared between
//! calls. On any OS family other than Linux the descriptor file is never
//! consulted and every match is false.

pub mod predicates;
mod release;

pub use release::{DistroInfo, OS_RELEASE_PATH, parse_release_lines, read_release_lines};

use crate::error::Result;
use crate::platform::OsFamily;

/// True when the current host runs the given distro, optionally pinned to
/// an exact version id.
///
/// Matching is exact and case-sensitive on both fields; `"7"` and `"7.0"`
/// are different version ids. Only a permission failure while reading the
/// descriptor file surfaces as an error.
pub fn matches_distro(distro_id: &str, version_id: Option<&str>) -> Result<bool> {
    if !OsFamily::current().is_linux() {
        return Ok(false);
    }
    let info = DistroInfo::current()?;
    Ok(info.matches(distro_id, version_id))
}

/// One-line diagnostic summary of the current distro record.
///
/// Returns the empty string on non-Linux hosts without touching the
/// filesystem.
pub fn distro_summary() -> Result<String> {
    if !OsFamily::current().is_linux() {
        return Ok(String::new());
    }
    Ok(DistroInfo::current()?.summary())
}
