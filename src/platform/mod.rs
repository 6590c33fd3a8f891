//! Host platform queries: OS family, process architecture, kernel version,
//! and superuser state.
//!
//! Everything here is a narrow, self-contained probe. The distribution
//! identity queries in [`crate::distro`] only depend on the OS family gate.

mod detection;
pub mod kernel;
pub mod user;

pub use detection::{
    OsFamily, is_64bit_process, is_arm64_process, is_arm_process, is_x64_process,
};
