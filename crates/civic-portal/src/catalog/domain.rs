use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The intake-capable service families the portal exposes. Each kind maps to
/// one page of the original site and one catalog table here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Licenses,
    Tax,
    Education,
    Appointments,
    Documents,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Licenses,
        ServiceKind::Tax,
        ServiceKind::Education,
        ServiceKind::Appointments,
        ServiceKind::Documents,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ServiceKind::Licenses => "licenses",
            ServiceKind::Tax => "tax",
            ServiceKind::Education => "education",
            ServiceKind::Appointments => "appointments",
            ServiceKind::Documents => "documents",
        }
    }

    /// Human heading used by page shells and the CLI demo.
    pub const fn title(self) -> &'static str {
        match self {
            ServiceKind::Licenses => "Permits and Licenses",
            ServiceKind::Tax => "Tax Services",
            ServiceKind::Education => "Education Services",
            ServiceKind::Appointments => "Appointments",
            ServiceKind::Documents => "Document Submission",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceKind {
    type Err = UnknownServiceKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "licenses" => Ok(ServiceKind::Licenses),
            "tax" => Ok(ServiceKind::Tax),
            "education" => Ok(ServiceKind::Education),
            "appointments" => Ok(ServiceKind::Appointments),
            "documents" => Ok(ServiceKind::Documents),
            other => Err(UnknownServiceKind(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown service kind '{0}'")]
pub struct UnknownServiceKind(pub String);

/// Stable identifier for one entry within a kind's catalog. Field policies
/// key off this, never off the display name, so copy edits cannot silently
/// change which fields a service requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceId(pub u32);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable service as the selector grid renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
}

/// Failure surfaced by a catalog source. The reference site swallowed these
/// and rendered an empty grid; this implementation surfaces them instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}
