//! # Core Models Module
//!
//! This module contains the data structures used to represent molecular graphs
//! with polymer brackets, providing the foundation for all frame-shift and fold
//! operations.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with stable original numbering,
//!   stereo parity, and a bounded-degree list of per-bond adjacency records
//! - [`bond`] - Bond order, bond stereo marks, and the per-atom bond record
//! - [`graph`] - The mutable molecular graph with symmetric adjacency
//! - [`unit`] - Polymer unit bookkeeping: atom list, crossing bonds, caps and
//!   ends, backbone bonds, and renumber-sensitive stereo collections
//! - [`rings`] - Externally supplied ring-system assignment consumed read-only
//! - [`ranks`] - Per-atom seniority rank tuples derived once per analysis

pub mod atom;
pub mod bond;
pub mod graph;
pub mod ranks;
pub mod rings;
pub mod unit;
