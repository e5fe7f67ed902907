//! Core module - Catalog, selection, planned instances and totals

pub mod aggregate;
mod allocation;
mod app_state;
pub mod catalog;
pub mod error;
pub mod resource;
mod selection;
pub mod settings;
mod template;

pub use aggregate::Totals;
pub use allocation::{AllocatedInstance, AllocationList};
pub use app_state::AppState;
pub use catalog::Catalog;
pub use error::{AllocationError, CatalogError, SelectionError};
pub use resource::Resource;
pub use selection::Selection;
pub use settings::Settings;
pub use template::{ImageTemplate, ImageType};
