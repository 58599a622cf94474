//! Static resource directories: FAQ, how-to guides, downloadable forms, and
//! the parameterized page shells that replace the per-page hero/CTA
//! scaffolding the original site duplicated across every route.

mod directory;
pub mod domain;
pub mod router;

pub use domain::{FaqEntry, FormDownload, GuideLink, OfficeLocation, PageShell};
pub use router::resources_router;

pub use directory::{
    faq_entries, form_downloads, guide_links, office_locations, page_shell, page_shells,
};
