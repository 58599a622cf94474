//! Service catalogs: the static per-kind lists of selectable services the
//! portal offers, behind an async source trait so the intake flow tolerates
//! latency the same way it would against a real directory service.

mod directory;
pub mod domain;
pub mod source;

pub use domain::{CatalogError, ServiceDescriptor, ServiceId, ServiceKind};
pub use source::{CatalogSource, DelayedCatalog, StaticCatalog};
