use serde::{Deserialize, Serialize};

/// Operating system family of the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
    Unknown,
}

impl OsFamily {
    /// Resolve the family from compile-time target information.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            OsFamily::Linux
        } else if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else {
            OsFamily::Unknown
        }
    }

    pub fn is_linux(self) -> bool {
        matches!(self, OsFamily::Linux)
    }

    pub fn is_macos(self) -> bool {
        matches!(self, OsFamily::MacOs)
    }

    pub fn is_windows(self) -> bool {
        matches!(self, OsFamily::Windows)
    }

    /// Short lowercase family name.
    pub fn name(self) -> &'static str {
        match self {
            OsFamily::Linux => "linux",
            OsFamily::MacOs => "macos",
            OsFamily::Windows => "windows",
            OsFamily::Unknown => "unknown",
        }
    }
}

/// True when the process is a 64-bit build.
pub fn is_64bit_process() -> bool {
    cfg!(target_pointer_width = "64")
}

pub fn is_x64_process() -> bool {
    cfg!(target_arch = "x86_64")
}

pub fn is_arm64_process() -> bool {
    cfg!(target_arch = "aarch64")
}

pub fn is_arm_process() -> bool {
    cfg!(target_arch = "arm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_matches_target_os() {
        let family = OsFamily::current();

        #[cfg(target_os = "linux")]
        assert!(family.is_linux());

        #[cfg(target_os = "macos")]
        assert!(family.is_macos());

        #[cfg(target_os = "windows")]
        assert!(family.is_windows());

        assert!(["linux", "macos", "windows", "unknown"].contains(&family.name()));
    }

    #[test]
    fn family_accessors_are_exclusive() {
        let family = OsFamily::current();
        let hits = [family.is_linux(), family.is_macos(), family.is_windows()]
            .iter()
            .filter(|hit| **hit)
            .count();
        assert!(hits <= 1);
    }

    #[test]
    fn arch_flags_are_consistent() {
        if is_x64_process() || is_arm64_process() {
            assert!(is_64bit_process());
        }
        if is_arm_process() {
            assert!(!is_arm64_process());
        }
    }
}
