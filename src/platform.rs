use crate::error::PlatformError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The workflow-automation platforms the engine can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Zapier,
    N8n,
    Make,
}

impl Platform {
    /// Every supported platform, in the order used for multi-target conversion.
    pub const ALL: [Platform; 3] = [Platform::Zapier, Platform::N8n, Platform::Make];

    /// The lowercase tag used on the wire and in file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Zapier => "zapier",
            Platform::N8n => "n8n",
            Platform::Make => "make",
        }
    }

    /// The platform's own word for a single unit of work.
    pub fn step_noun(&self) -> &'static str {
        match self {
            Platform::Zapier => "app",
            Platform::N8n => "node",
            Platform::Make => "module",
        }
    }

    /// Platforms other than `self`, in `ALL` order.
    pub fn others(self) -> impl Iterator<Item = Platform> {
        Self::ALL.into_iter().filter(move |p| *p != self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zapier" => Ok(Platform::Zapier),
            "n8n" => Ok(Platform::N8n),
            "make" | "integromat" => Ok(Platform::Make),
            _ => Err(PlatformError::Unknown(s.to_string())),
        }
    }
}
