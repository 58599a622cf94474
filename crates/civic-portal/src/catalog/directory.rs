use super::domain::{ServiceDescriptor, ServiceId, ServiceKind};

fn entry(id: u32, name: &str, description: &str) -> ServiceDescriptor {
    ServiceDescriptor {
        id: ServiceId(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// The fixed catalog tables for each service family. Ids are stable; the
/// field-requirement policy table keys off them.
pub(super) fn standard_entries(kind: ServiceKind) -> Vec<ServiceDescriptor> {
    match kind {
        ServiceKind::Licenses => vec![
            entry(
                1,
                "Driver's License",
                "Apply for or renew a state driver's license.",
            ),
            entry(
                2,
                "Business License",
                "Register or renew a business operating license.",
            ),
            entry(
                3,
                "Building Permit",
                "Apply for construction or renovation permits.",
            ),
            entry(
                4,
                "Event Permit",
                "Obtain permits for public events or gatherings.",
            ),
        ],
        ServiceKind::Tax => vec![
            entry(
                1,
                "Income Tax Filing",
                "File your state income tax return online.",
            ),
            entry(2, "Tax Payment", "Make payments for state taxes owed."),
            entry(
                3,
                "Tax Exemption Application",
                "Apply for state tax exemptions or credits.",
            ),
            entry(
                4,
                "Tax Compliance Certificate",
                "Request a certificate of tax compliance.",
            ),
        ],
        ServiceKind::Education => vec![
            entry(1, "Transcript Request", "Request official academic transcripts."),
            entry(
                2,
                "Education Program Application",
                "Apply for state education programs or grants.",
            ),
            entry(
                3,
                "Certification Verification",
                "Verify teaching or professional certifications.",
            ),
            entry(
                4,
                "Student Aid Application",
                "Apply for state-sponsored student financial aid.",
            ),
        ],
        ServiceKind::Appointments => vec![
            entry(
                1,
                "License Application",
                "Schedule an in-person or virtual license appointment.",
            ),
            entry(
                2,
                "Permit Consultation",
                "Book a consultation for permit applications.",
            ),
            entry(
                3,
                "Document Review",
                "Schedule a review of submitted documents.",
            ),
            entry(
                4,
                "General Inquiry",
                "Meet with a state representative for inquiries.",
            ),
        ],
        ServiceKind::Documents => vec![
            entry(
                1,
                "License Renewal Documents",
                "Submit documents for license renewals.",
            ),
            entry(
                2,
                "Permit Application Documents",
                "Upload supporting documents for permits.",
            ),
            entry(
                3,
                "Tax Compliance Certificates",
                "Submit tax-related documentation.",
            ),
            entry(
                4,
                "Identity Verification",
                "Provide documents for identity verification.",
            ),
        ],
    }
}
