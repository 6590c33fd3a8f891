//! Running-kernel version query.

use crate::error::{PlatcapError, Result};
use crate::version::Version;
use std::str::FromStr;
use sysinfo::System;

/// Return the version of the running OS kernel.
///
/// The raw release string comes from the system information API and is
/// parsed into a structured [`Version`]; distribution suffixes such as
/// `-45-generic` are preserved in the pre-release field.
pub fn kernel_version() -> Result<Version> {
    let raw = System::kernel_version().ok_or_else(|| {
        PlatcapError::SystemError("Kernel version is not available on this host".to_string())
    })?;
    Version::from_str(raw.trim())
}
