//! BmiCalc-rs library: application logic for the BMI calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
