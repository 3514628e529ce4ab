//! # Chemical Reference Data Module
//!
//! Static, compile-time element data consumed by the seniority ranking.
//!
//! - [`elements`] - Element seniority ranks and cap-placeholder detection

pub mod elements;
