//! # Engine Module
//!
//! This module implements the structural analysis and edit machinery for
//! polymer repeat-unit canonicalization: everything between the stateless
//! core models and the public workflows.
//!
//! ## Overview
//!
//! The engine discovers a unit's backbone while ignoring side chains, filters
//! the frame-shift candidate set, detects redundant repeated sub-fragments,
//! ranks atoms and candidate crossing bonds by chemical seniority, and turns
//! the resulting decisions into a transactional edit set that is applied
//! against the shared working graph in one pass.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Frame-shift scheme, fold enablement,
//!   traversal capacity
//! - **Subset Indexing** ([`subgraph`]) - orig/local index mapping with a
//!   local adjacency view
//! - **Traversal** ([`paths`]) - Restricted backbone and reachability walks
//! - **Candidate Filtering** ([`filter`]) - Ring/order/tautomer exclusion
//! - **Fragment Signatures** ([`signature`]) - Canonical fragment summaries
//!   over extended equivalence classes
//! - **Repeat Detection** ([`repeats`]) - Shortest-period and fold-factor
//!   search
//! - **Seniority Ranking** ([`seniority`]) - Atom and bond seniority order
//! - **Edits** ([`edits`]) - The `EditSet`/`RenumberMap` transaction and its
//!   applier
//! - **Reporting** ([`report`]) - Per-structure warning collection
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod edits;
pub mod error;
pub mod filter;
pub mod paths;
pub mod repeats;
pub mod report;
pub mod seniority;
pub mod signature;
pub mod subgraph;
