use crate::core::io::auxinfo::OracleResult;
use crate::core::models::atom::AtomParity;
use crate::core::models::graph::MolecularGraph;
use crate::core::models::ranks::AtomRankTable;
use crate::core::models::rings::RingSystems;
use crate::core::models::unit::Polymer;
use crate::engine::config::{FrameShiftScheme, PolymerConfig};
use crate::engine::edits::EditSet;
use crate::engine::filter::filter_frame_shiftable;
use crate::engine::report::{StructureReport, Warning};
use crate::engine::seniority::sort_backbone_bonds;
use tracing::{debug, instrument};

/// A planned frame shift for one unit: the edits that reopen the unit at its
/// senior crossing position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameShiftPlan {
    /// Index of the unit in `polymer.units`.
    pub unit_index: usize,
    /// The new crossing pair, senior atom first.
    pub new_crossing: (usize, usize),
    /// Stereocenters whose neighbor set changes; their parity must be
    /// re-validated downstream (assumed changed when in doubt).
    pub stereo_suspects: Vec<usize>,
    pub edits: EditSet,
}

fn same_pair(a: (usize, usize), b: (usize, usize)) -> bool {
    (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
}

/// Plans frame-shift edits for every eligible unit of a structure.
///
/// Candidate crossing positions come from the oracle's `/z` annotations,
/// filtered down to frame-shiftable bonds; the conceptual current boundary
/// (the end1-end2 closure) always competes as a candidate. The seniority
/// ranking picks one canonical bond; when it differs from the current
/// boundary the plan reopens there: the senior bond is cut, the old ends are
/// joined, and each cap is rewired onto its new end.
///
/// Units without a `/z` entry are left un-shifted with a warning, matching
/// the oracle-parse downgrade policy.
///
/// # Arguments
///
/// * `graph` - The working graph.
/// * `polymer` - Unit bookkeeping; backbone-bond lists are refreshed to the
///   canonical order (senior bond in slot 0, senior atom first).
/// * `rings` - Externally supplied ring-system assignment.
/// * `oracle` - Parsed oracle result providing the `/z` annotations.
/// * `config` - Engine configuration.
/// * `report` - Per-structure warning sink.
#[instrument(skip_all, name = "frame_shift_planning")]
pub fn prepare_frameshift_edits(
    graph: &MolecularGraph,
    polymer: &mut Polymer,
    rings: &RingSystems,
    oracle: &OracleResult,
    config: &PolymerConfig,
    report: &mut StructureReport,
) -> Vec<FrameShiftPlan> {
    if config.frame_shift_scheme == FrameShiftScheme::None {
        return Vec::new();
    }
    let ranks = AtomRankTable::compute(graph, rings);
    let mut plans = Vec::new();
    let mut structural_seen = 0usize;
    for (unit_index, unit) in polymer.units.iter_mut().enumerate() {
        if !unit.is_structural() {
            continue;
        }
        let annotation_index = structural_seen;
        structural_seen += 1;
        if !unit.cyclizable {
            continue;
        }
        if let Err(err) = unit.find_ends_and_caps(graph) {
            unit.cyclizable = false;
            report.warn(Warning::UnitExcluded {
                unit_id: unit.id,
                detail: err.to_string(),
            });
            continue;
        }
        let (Some(end1), Some(end2), Some(cap1), Some(cap2)) =
            (unit.end1, unit.end2, unit.cap1, unit.cap2)
        else {
            continue;
        };
        let Some(annotation) = oracle.unit_annotations.get(annotation_index) else {
            report.warn(Warning::OraclePartial {
                detail: format!("no /z entry for unit {}", unit.id),
            });
            continue;
        };
        let mut candidates =
            filter_frame_shiftable(graph, rings, &annotation.backbone_pairs());
        if candidates.is_empty() && graph.contains_bond(end1, end2) {
            // fall back to the single direct end1-end2 bond
            candidates.push((end1, end2));
        }
        // the current boundary always competes
        if !candidates.iter().any(|&c| same_pair(c, (end1, end2))) {
            candidates.push((end1, end2));
        }
        let Some(senior) = sort_backbone_bonds(&mut candidates, &ranks) else {
            continue;
        };
        unit.backbone_bonds = candidates.clone();
        if same_pair(senior, (end1, end2)) {
            // already canonical; only orient the bookkeeping senior-first
            if senior.0 != end1 {
                unit.blist = vec![senior.0, cap2, senior.1, cap1];
                unit.end1 = Some(senior.0);
                unit.cap1 = Some(cap2);
                unit.end2 = Some(senior.1);
                unit.cap2 = Some(cap1);
            }
            continue;
        }
        debug!(
            unit = unit.id,
            old = ?(end1, end2),
            new = ?senior,
            "frame shift selected a new crossing bond"
        );
        let mut edits = EditSet::new();
        edits.delete_bond(senior.0, senior.1);
        edits.add_bond(end1, end2);
        // a cap stays put when its end atom is itself the senior endpoint
        if senior.0 != end1 {
            edits.modify_bond((end1, cap1), (senior.0, cap1));
        }
        if senior.1 != end2 {
            edits.modify_bond((end2, cap2), (senior.1, cap2));
        }
        let stereo_suspects: Vec<usize> = [end1, end2, senior.0, senior.1]
            .into_iter()
            .filter(|&atom| {
                graph
                    .atom(atom)
                    .map(|a| a.parity != AtomParity::None)
                    .unwrap_or(false)
            })
            .collect();
        if !stereo_suspects.is_empty() {
            report.warn(Warning::StereoRevalidationNeeded {
                unit_id: unit.id,
                atoms: stereo_suspects.clone(),
            });
        }
        plans.push(FrameShiftPlan {
            unit_index,
            new_crossing: senior,
            stereo_suspects,
            edits,
        });
    }
    plans
}
