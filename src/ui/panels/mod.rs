//! Main view panels

pub mod image;
pub mod planned;
