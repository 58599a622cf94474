//! Core library for the State Portal service: the select/fill/validate/submit
//! intake flow shared by every service page, the static catalog and resource
//! directories behind it, and the HTTP routers that expose them.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod intake;
pub mod resources;
pub mod scheduling;
pub mod telemetry;
