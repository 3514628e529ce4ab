//! # Polyframe Core Library
//!
//! A library for canonicalizing the bracket placement of polymer constitutional
//! repeating units (CRUs) in molecular graphs, by frame-shifting the crossing
//! bonds to a deterministic, chemistry-derived position and by folding away
//! redundantly over-expanded repeats.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`MolecularGraph`, `PolymerUnit`, ring and seniority tables), static element
//!   data, and the parser for the canonicalization oracle's textual result.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer performs the structural
//!   analysis: restricted backbone traversal, frame-shift candidate filtering,
//!   fragment signatures and repeat detection, seniority ranking, and the
//!   transactional `EditSet` planning/application pair that mutates the
//!   working graph.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together to plan and apply fold and
//!   frame-shift edits for every eligible unit of a structure, collecting
//!   per-structure warnings along the way.

pub mod core;
pub mod engine;
pub mod workflows;
