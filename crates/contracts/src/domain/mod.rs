pub mod a001_project;
pub mod a002_entity;
pub mod a003_functional_service;
pub mod a004_usage_indicator;
pub mod common;
