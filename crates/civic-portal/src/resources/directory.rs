use super::domain::{FaqEntry, FormDownload, GuideLink, OfficeLocation, PageShell};

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            id: 1,
            question: "How do I apply for a state license?",
            answer: "Visit the Licenses section under Services, select the appropriate license type, and complete the online application form. Ensure you have all required documents ready for upload.",
            category: "Licenses",
        },
        FaqEntry {
            id: 2,
            question: "What are the requirements for a state permit?",
            answer: "Permit requirements vary by type. Navigate to the Permits section under Services to view specific requirements and submit your application online.",
            category: "Permits",
        },
        FaqEntry {
            id: 3,
            question: "How can I schedule an appointment?",
            answer: "Go to the Appointments section under Services, choose the appointment type, and select an available date and time slot. You'll receive a confirmation email upon booking.",
            category: "Appointments",
        },
        FaqEntry {
            id: 4,
            question: "How do I file my state taxes online?",
            answer: "Access the Tax Services section, select 'Income Tax Filing,' and follow the prompts to submit your tax information securely.",
            category: "Taxes",
        },
        FaqEntry {
            id: 5,
            question: "How do I request a health certificate?",
            answer: "Visit the Health Services section, select 'Health Certificate Application,' and complete the form with your health ID and supporting documents.",
            category: "Health",
        },
        FaqEntry {
            id: 6,
            question: "How can I apply for student financial aid?",
            answer: "Navigate to the Education Services section, select 'Student Aid Application,' and provide the required details and documentation for your application.",
            category: "Education",
        },
    ]
}

pub fn guide_links() -> Vec<GuideLink> {
    vec![
        GuideLink {
            id: 1,
            title: "How to Apply for a State License",
            description: "Step-by-step guide to applying for various state licenses online.",
            category: "Licenses",
            href: "/resources/guides/license-application",
        },
        GuideLink {
            id: 2,
            title: "Guide to Obtaining a State Permit",
            description: "Detailed instructions for securing state permits for businesses and projects.",
            category: "Permits",
            href: "/resources/guides/permit-application",
        },
        GuideLink {
            id: 3,
            title: "Filing State Taxes Online",
            description: "Learn how to file your state taxes securely through our online portal.",
            category: "Taxes",
            href: "/resources/guides/tax-filing",
        },
    ]
}

pub fn form_downloads() -> Vec<FormDownload> {
    vec![
        FormDownload {
            id: 1,
            title: "State License Application Form",
            category: "Licenses",
            description: "Apply for a state license for professional or business purposes.",
            file_url: "/forms/license-application.pdf",
        },
        FormDownload {
            id: 2,
            title: "State Permit Request Form",
            category: "Permits",
            description: "Request a permit for construction, events, or other regulated activities.",
            file_url: "/forms/permit-request.pdf",
        },
        FormDownload {
            id: 3,
            title: "Income Tax Filing Form",
            category: "Taxes",
            description: "File your state income taxes with this form.",
            file_url: "/forms/tax-filing.pdf",
        },
        FormDownload {
            id: 4,
            title: "Health Certificate Application",
            category: "Health",
            description: "Apply for a health certificate for employment or travel.",
            file_url: "/forms/health-certificate.pdf",
        },
        FormDownload {
            id: 5,
            title: "Student Financial Aid Application",
            category: "Education",
            description: "Apply for state-funded financial aid for education.",
            file_url: "/forms/student-aid.pdf",
        },
    ]
}

pub fn office_locations() -> Vec<OfficeLocation> {
    vec![
        OfficeLocation {
            name: "Main Office",
            address: "123 State Agency Rd, Capital City, ST 12345",
            phone: "+1-800-555-1234",
            email: "mainoffice@stateagency.gov",
            hours: "Monday - Friday, 8:00 AM - 5:00 PM",
        },
        OfficeLocation {
            name: "North Branch",
            address: "456 North Ave, North City, ST 67890",
            phone: "+1-800-555-5678",
            email: "northbranch@stateagency.gov",
            hours: "Monday - Friday, 9:00 AM - 4:00 PM",
        },
        OfficeLocation {
            name: "South Branch",
            address: "789 South St, South City, ST 54321",
            phone: "+1-800-555-9012",
            email: "southbranch@stateagency.gov",
            hours: "Monday - Thursday, 8:30 AM - 4:30 PM",
        },
    ]
}

/// Hero/CTA shells for the portal routes, one per slug.
pub fn page_shells() -> Vec<PageShell> {
    vec![
        PageShell {
            slug: "licenses",
            title: "Permits and Licenses",
            subtitle: "Apply for or renew state permits and licenses securely online.",
            cta_label: "Start Application",
            cta_href: "/services/licenses#apply",
        },
        PageShell {
            slug: "tax",
            title: "Tax Services",
            subtitle: "Manage your state tax obligations online with ease and security.",
            cta_label: "Start Tax Service",
            cta_href: "/services/tax#tax",
        },
        PageShell {
            slug: "education",
            title: "Education Services",
            subtitle: "Access state education services, including transcripts, certifications, and financial aid.",
            cta_label: "Start Education Service",
            cta_href: "/departments/education#services",
        },
        PageShell {
            slug: "appointments",
            title: "Appointment Scheduling",
            subtitle: "Book in-person or virtual appointments with ease for state services.",
            cta_label: "Schedule Appointment",
            cta_href: "/services/appointments#schedule",
        },
        PageShell {
            slug: "documents",
            title: "Document Submission Portal",
            subtitle: "Upload and manage documents for state services securely online.",
            cta_label: "Submit Documents",
            cta_href: "/services/documents#submit",
        },
        PageShell {
            slug: "contact",
            title: "Contact State Agency",
            subtitle: "Reach out to us for assistance with state services, applications, or general inquiries.",
            cta_label: "Get in Touch",
            cta_href: "/contact#contact-form",
        },
        PageShell {
            slug: "locations",
            title: "Find Our Offices",
            subtitle: "Visit one of our state agency offices for in-person assistance with licenses, permits, taxes, and more.",
            cta_label: "View Locations",
            cta_href: "/contact/locations#locations-content",
        },
        PageShell {
            slug: "guides",
            title: "Resource Guides",
            subtitle: "Explore step-by-step guides to help you navigate state services with ease.",
            cta_label: "Explore Guides",
            cta_href: "/resources/guides#guides",
        },
    ]
}

pub fn page_shell(slug: &str) -> Option<PageShell> {
    page_shells().into_iter().find(|shell| shell.slug == slug)
}
