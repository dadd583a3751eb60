//! Deployment plan spreadsheet: one row per project, six columns per
//! functional service grouped by package

pub mod export;
pub mod projection_builder;
pub mod service;
