use serde::Serialize;

/// One frequently-asked question with its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

/// Pointer to a step-by-step guide page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideLink {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub href: &'static str,
}

/// One downloadable form in the forms directory. The file itself is served
/// as-is; nothing here generates or validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDownload {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub file_url: &'static str,
}

/// One agency office in the locations directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficeLocation {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
}

/// Hero/CTA content for one portal page. The original site re-derived this
/// layout on every page; here it is a single record per slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageShell {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}
