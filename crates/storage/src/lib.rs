#![forbid(unsafe_code)]

pub mod catalog;
pub mod manifest;

pub use catalog::{CatalogError, InMemoryCatalog, LessonCatalog};
pub use manifest::PortalManifest;
