use crate::error::{PlatcapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structured version value parsed from a dotted-numeric release string.
///
/// Kernel releases such as `6.8.0-45-generic` parse with the dashed tail
/// preserved in `pre_release`; `+NN` tails are kept as numeric build
/// components when they are purely numeric.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub components: Vec<u32>,
    pub build: Option<Vec<u32>>,
    pub pre_release: Option<String>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            components: vec![major, minor, patch],
            build: None,
            pre_release: None,
        }
    }

    pub fn major(&self) -> u32 {
        self.components.first().copied().unwrap_or(0)
    }

    pub fn minor(&self) -> Option<u32> {
        self.components.get(1).copied()
    }

    pub fn patch(&self) -> Option<u32> {
        self.components.get(2).copied()
    }
}

impl FromStr for Version {
    type Err = PlatcapError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PlatcapError::InvalidVersionFormat(s.to_string()));
        }

        // Split off the first '+' or '-' tail, whichever comes first.
        // Everything before it must be dotted numeric components.
        let (numeric, build, pre_release) = match trimmed.find(['+', '-']) {
            Some(pos) => {
                let tail = &trimmed[pos + 1..];
                if tail.is_empty() {
                    return Err(PlatcapError::InvalidVersionFormat(s.to_string()));
                }
                if trimmed[pos..].starts_with('+') {
                    match parse_numeric_tail(tail) {
                        Some(parts) => (&trimmed[..pos], Some(parts), None),
                        None => (&trimmed[..pos], None, Some(tail.to_string())),
                    }
                } else {
                    (&trimmed[..pos], None, Some(tail.to_string()))
                }
            }
            None => (trimmed, None, None),
        };

        let components = numeric
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| PlatcapError::InvalidVersionFormat(s.to_string()))
            })
            .collect::<Result<Vec<u32>>>()?;

        if components.is_empty() {
            return Err(PlatcapError::InvalidVersionFormat(s.to_string()));
        }

        Ok(Version {
            components,
            build,
            pre_release,
        })
    }
}

/// Parse a '+' tail into numeric build components, or None if any part is
/// non-numeric.
fn parse_numeric_tail(tail: &str) -> Option<Vec<u32>> {
    tail.split('.')
        .map(|part| part.parse::<u32>().ok())
        .collect()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
        }

        if let Some(build) = &self.build {
            write!(f, "+")?;
            for (i, component) in build.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{component}")?;
            }
        }

        if let Some(pre) = &self.pre_release {
            write!(f, "-{pre}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dotted_version() {
        let version = Version::from_str("5.15.0").unwrap();
        assert_eq!(version, Version::new(5, 15, 0));
        assert_eq!(version.components, vec![5, 15, 0]);
        assert_eq!(version.major(), 5);
        assert_eq!(version.minor(), Some(15));
        assert_eq!(version.patch(), Some(0));
        assert!(version.build.is_none());
        assert!(version.pre_release.is_none());
    }

    #[test]
    fn parses_kernel_release_with_suffix() {
        let version = Version::from_str("6.8.0-45-generic").unwrap();
        assert_eq!(version.components, vec![6, 8, 0]);
        assert_eq!(version.pre_release.as_deref(), Some("45-generic"));
    }

    #[test]
    fn parses_numeric_build_tail() {
        let version = Version::from_str("4.18.0+80").unwrap();
        assert_eq!(version.components, vec![4, 18, 0]);
        assert_eq!(version.build, Some(vec![80]));
    }

    #[test]
    fn parses_single_component() {
        let version = Version::from_str("19045").unwrap();
        assert_eq!(version.components, vec![19045]);
        assert_eq!(version.minor(), None);
    }

    #[test]
    fn rejects_empty_and_non_numeric_input() {
        assert!(Version::from_str("").is_err());
        assert!(Version::from_str("generic").is_err());
        assert!(Version::from_str("5..0").is_err());
        assert!(Version::from_str("5.15.0-").is_err());
    }

    #[test]
    fn display_round_trips_parsed_shape() {
        for raw in ["5.15.0", "6.8.0-45-generic", "4.18.0+80"] {
            let version = Version::from_str(raw).unwrap();
            assert_eq!(version.to_string(), raw);
        }
    }

    #[test]
    fn ordering_follows_components() {
        let older = Version::from_str("5.4.0").unwrap();
        let newer = Version::from_str("6.1.0").unwrap();
        assert!(older < newer);
        assert!(Version::from_str("5.4").unwrap() < older);
    }
}
