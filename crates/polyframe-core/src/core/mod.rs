//! # Core Module
//!
//! This module provides the fundamental building blocks for polymer repeat-unit
//! analysis, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and reference data required to
//! describe a molecular graph with polymer brackets, together with the parser for
//! the canonicalization oracle's textual result. Everything here is plain data:
//! the mutation and analysis logic lives in the `engine` layer.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms with per-bond adjacency
//!   records, polymer units with crossing-bond bookkeeping, ring-system tables,
//!   and per-atom seniority ranks
//! - **Chemical Reference Data** ([`chem`]) - Static element seniority ranks
//! - **Oracle I/O** ([`io`]) - Parsing of the canonical-numbering oracle's
//!   auxiliary result fields

pub mod chem;
pub mod io;
pub mod models;
