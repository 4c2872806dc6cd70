// src/ui/widgets/mod.rs

pub mod chart;
pub mod dashboard;
pub mod footer;
pub mod input;
pub mod modal;
pub mod scan_view;
