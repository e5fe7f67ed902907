//! User interface module - egui-based planner window

mod app;
mod components;
mod panels;
mod theme;

pub use app::PlannerApp;
