//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate polymer
//! repeat-unit canonicalization: fold planning, frame-shift planning, edit
//! application, and the end-to-end per-structure driver.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. The outer pipeline hands
//! them a disposable working copy of the molecular graph together with the
//! canonicalization oracle's textual result; they plan edit sets per eligible
//! unit, apply them against the working copy, and report warnings instead of
//! failing the structure wherever recovery is possible.
//!
//! ## Architecture
//!
//! - **Fold Planning** ([`fold`]) - Detects and removes redundantly
//!   over-expanded repeats inside one unit
//! - **Frame-Shift Planning** ([`frame_shift`]) - Moves the crossing bonds to
//!   the canonical, seniority-selected boundary
//! - **Driver** ([`canonical_frame`]) - Plans and applies both passes for a
//!   whole structure, collecting the per-structure report

pub mod canonical_frame;
pub mod fold;
pub mod frame_shift;

use crate::core::models::graph::MolecularGraph;
use crate::core::models::unit::Polymer;
use crate::engine::config::PolymerConfig;
use crate::engine::edits::{self, EditSet};
use crate::engine::error::EngineError;

/// Applies one unit's planned edit set against the shared working graph.
///
/// Thin re-export of the engine applier at the public API surface; see
/// [`edits::apply`] for the ordering and consistency contract.
///
/// # Errors
///
/// Returns an [`EngineError`] when the edit set conflicts with the current
/// graph state; the working copy must then be discarded by the caller.
pub fn apply_edits(
    graph: &mut MolecularGraph,
    polymer: &mut Polymer,
    edit_set: &EditSet,
    config: &PolymerConfig,
) -> Result<usize, EngineError> {
    edits::apply(graph, polymer, edit_set, config)
}
