// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reading and parsing of the distribution descriptor file.

use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Well-known location of the distribution descriptor file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Identity fields extracted from a distribution descriptor file.
///
/// Every field defaults to the empty string; a key missing from the source
/// file leaves its field empty rather than marking the record incomplete.
/// Stored values are de-quoted and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistroInfo {
    pub id: String,
    pub version_id: String,
    pub version: String,
    pub pretty_name: String,
}

impl DistroInfo {
    /// Load and parse the descriptor at `path`.
    ///
    /// A missing file yields the all-empty record. Any other read failure,
    /// notably a permission error, is propagated untouched.
    pub fn from_release_file(path: &Path) -> Result<Self> {
        let lines = read_release_lines(path)?;
        let info = parse_release_lines(lines.iter().map(String::as_str));
        debug!("Parsed distro record: {}", info.summary());
        Ok(info)
    }

    /// Load and parse the descriptor at the well-known path.
    pub fn current() -> Result<Self> {
        Self::from_release_file(Path::new(OS_RELEASE_PATH))
    }

    /// Exact, case-sensitive match on distro id and, when given, version id.
    pub fn matches(&self, distro_id: &str, version_id: Option<&str>) -> bool {
        self.id == distro_id && version_id.is_none_or(|requested| self.version_id == requested)
    }

    /// One-line diagnostic rendering of the record.
    pub fn summary(&self) -> String {
        format!(
            "Distro={} VersionId={} Pretty={} Version={}",
            self.id, self.version_id, self.pretty_name, self.version
        )
    }
}

/// Read the descriptor file into raw lines, in file order, with line
/// terminators stripped. An absent file is not an error and reads as no
/// lines at all.
pub fn read_release_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Reduce raw descriptor lines to a record.
///
/// Only the four tracked keys are extracted; any other line is ignored.
/// The last occurrence of a key wins.
pub fn parse_release_lines<'a, I>(lines: I) -> DistroInfo
where
    I: IntoIterator<Item = &'a str>,
{
    let mut info = DistroInfo::default();

    for line in lines {
        if let Some(rest) = line.strip_prefix("ID=") {
            info.id = unquote(rest);
        } else if let Some(rest) = line.strip_prefix("VERSION_ID=") {
            info.version_id = unquote(rest);
        } else if let Some(rest) = line.strip_prefix("VERSION=") {
            info.version = unquote(rest);
        } else if let Some(rest) = line.strip_prefix("PRETTY_NAME=") {
            info.pretty_name = unquote(rest);
        }
    }

    info
}

/// Trim surrounding whitespace, then strip exactly one layer of enclosing
/// double quotes. No escape processing, no recursive unquoting.
fn unquote(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}
