//! # Oracle I/O Module
//!
//! Parsing of the canonicalization oracle's textual result. The oracle owns
//! canonical numbering, equivalence classes, and identifier serialization;
//! this module only extracts the three auxiliary fields the frame-shift and
//! fold engine consumes.
//!
//! - [`auxinfo`] - The `/N:`, `/E:`, and `/z` field parser

pub mod auxinfo;
