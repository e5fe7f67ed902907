//! Reusable UI components

mod allocation_picker;
pub mod image_card;
mod spec_row;
mod type_badge;

pub use allocation_picker::AllocationPicker;
pub use image_card::ImageCard;
