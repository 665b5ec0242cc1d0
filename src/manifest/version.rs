use std::fmt;
use std::str::FromStr;

/// A dotted numeric version with two to four components,
/// `major.minor[.build[.revision]]`.
///
/// Whitespace around each component is ignored, so `" 2.5.20 "` parses.
/// Missing trailing components order before any present one, so `1.2 < 1.2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModVersion {
    pub major: u32,
    pub minor: u32,
    pub build: Option<u32>,
    pub revision: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a version of the form major.minor[.build[.revision]]")]
pub struct VersionParseError(pub String);

impl ModVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            build: None,
            revision: None,
        }
    }
}

impl FromStr for ModVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionParseError(s.to_string());

        let components = s
            .split('.')
            .map(|part| {
                let part = part.trim();
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                part.parse::<u32>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        match components[..] {
            [major, minor] => Ok(Self::new(major, minor)),
            [major, minor, build] => Ok(Self {
                build: Some(build),
                ..Self::new(major, minor)
            }),
            [major, minor, build, revision] => Ok(Self {
                build: Some(build),
                revision: Some(revision),
                ..Self::new(major, minor)
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ModVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
            if let Some(revision) = self.revision {
                write!(f, ".{}", revision)?;
            }
        }
        Ok(())
    }
}
