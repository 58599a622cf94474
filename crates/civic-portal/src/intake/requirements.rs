use serde::{Deserialize, Serialize};

use crate::catalog::{ServiceId, ServiceKind};

/// Reference number a service family collects alongside name and email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceField {
    TaxId,
    StudentId,
}

impl ReferenceField {
    pub const fn label(self) -> &'static str {
        match self {
            ReferenceField::TaxId => "Tax ID",
            ReferenceField::StudentId => "Student ID",
        }
    }
}

/// The optional fields one service demands beyond the universal name/email
/// pair. Derived by table lookup, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPolicy {
    pub reference: Option<ReferenceField>,
    pub requires_file: bool,
    pub requires_details: bool,
    pub requires_amount: bool,
    pub requires_schedule: bool,
}

/// Closed policy table mapping service identity to its field requirements.
/// Keyed by the stable `(kind, id)` pair rather than the display name so
/// copy changes cannot silently alter intake behavior. Ids not listed here
/// fall back to the universal fields only.
pub fn policy_for(kind: ServiceKind, id: ServiceId) -> FieldPolicy {
    let mut policy = match kind {
        ServiceKind::Tax => FieldPolicy {
            reference: Some(ReferenceField::TaxId),
            ..FieldPolicy::default()
        },
        ServiceKind::Education => FieldPolicy {
            reference: Some(ReferenceField::StudentId),
            ..FieldPolicy::default()
        },
        ServiceKind::Documents => FieldPolicy {
            requires_file: true,
            ..FieldPolicy::default()
        },
        ServiceKind::Appointments => FieldPolicy {
            requires_schedule: true,
            ..FieldPolicy::default()
        },
        ServiceKind::Licenses => FieldPolicy::default(),
    };

    match (kind, id.0) {
        // "Tax Payment"
        (ServiceKind::Tax, 2) => policy.requires_amount = true,
        // "Tax Exemption Application"
        (ServiceKind::Tax, 3) => policy.requires_details = true,
        // "Transcript Request"
        (ServiceKind::Education, 1) => policy.requires_file = true,
        // "Education Program Application"
        (ServiceKind::Education, 2) => policy.requires_details = true,
        _ => {}
    }

    policy
}
