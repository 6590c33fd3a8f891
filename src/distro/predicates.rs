//! Named distro predicates used to gate individual test cases.
//!
//! Thin specializations of [`matches_distro`] bound to fixed distro and
//! version pairs. All of them inherit the Linux gate: off Linux every
//! predicate is false.

use super::matches_distro;
use crate::error::Result;

pub fn is_opensuse() -> Result<bool> {
    matches_distro("opensuse", None)
}

pub fn is_ubuntu() -> Result<bool> {
    matches_distro("ubuntu", None)
}

pub fn is_ubuntu_14_04() -> Result<bool> {
    matches_distro("ubuntu", Some("14.04"))
}

pub fn is_debian() -> Result<bool> {
    matches_distro("debian", None)
}

pub fn is_debian_8() -> Result<bool> {
    matches_distro("debian", Some("8"))
}

pub fn is_centos() -> Result<bool> {
    matches_distro("centos", None)
}

pub fn is_centos_7() -> Result<bool> {
    matches_distro("centos", Some("7"))
}

pub fn is_rhel() -> Result<bool> {
    matches_distro("rhel", None)
}

pub fn is_fedora() -> Result<bool> {
    matches_distro("fedora", None)
}

pub fn is_tizen() -> Result<bool> {
    matches_distro("tizen", None)
}

/// True when the host is none of fedora, rhel, or centos.
pub fn is_not_fedora_or_red_hat_family() -> Result<bool> {
    Ok(!is_fedora()? && !is_rhel()? && !is_centos()?)
}
