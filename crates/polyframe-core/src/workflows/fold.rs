use crate::core::io::auxinfo::OracleResult;
use crate::core::models::atom::AtomParity;
use crate::core::models::graph::MolecularGraph;
use crate::core::models::rings::RingSystems;
use crate::core::models::unit::Polymer;
use crate::engine::config::PolymerConfig;
use crate::engine::edits::EditSet;
use crate::engine::filter::filter_frame_shiftable;
use crate::engine::paths::collect_backbone;
use crate::engine::report::{StructureReport, Warning};
use crate::engine::repeats::{find_period, fold_factor};
use crate::engine::signature::{extended_classes, signature_classes, split_at_cuts};
use tracing::{debug, instrument};

/// A planned fold for one unit: the edit set that removes its redundant
/// repeats, plus the detected fold factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldPlan {
    /// Index of the unit in `polymer.units`.
    pub unit_index: usize,
    /// How many copies of the repeating fragment the unit drew explicitly.
    pub fold_factor: usize,
    pub edits: EditSet,
}

/// Plans fold edits for every eligible unit of a structure.
///
/// A unit is eligible when it is structural with two derived caps, has at
/// least two atoms and two backbone bonds, and its fragment sequence has a
/// period that properly divides the fragment count with more than one
/// repeat. Everything else is skipped without an error; invalid unit
/// topologies are recorded as warnings.
///
/// Planning is read-only on the graph; the caller applies each plan with
/// [`crate::workflows::apply_edits`]. Atom deletion renumbers the graph, so
/// after one fold plan is applied the remaining plans are stale: the outer
/// pipeline re-runs the oracle and plans again.
///
/// # Arguments
///
/// * `graph` - The working graph.
/// * `polymer` - Unit bookkeeping; caps/ends and backbone-bond lists are
///   refreshed as a side effect.
/// * `rings` - Externally supplied ring-system assignment.
/// * `oracle` - Parsed oracle result providing equivalence classes.
/// * `config` - Engine configuration.
/// * `report` - Per-structure warning sink.
#[instrument(skip_all, name = "fold_planning")]
pub fn prepare_fold_edits(
    graph: &MolecularGraph,
    polymer: &mut Polymer,
    rings: &RingSystems,
    oracle: &OracleResult,
    config: &PolymerConfig,
    report: &mut StructureReport,
) -> Vec<FoldPlan> {
    if !config.fold_repeats {
        return Vec::new();
    }
    let base_classes = oracle.atom_classes(graph.atom_count());
    let parities: Vec<AtomParity> = graph.atoms_iter().map(|(_, a)| a.parity).collect();
    let classes = extended_classes(&base_classes, &parities);

    let mut plans = Vec::new();
    for (unit_index, unit) in polymer.units.iter_mut().enumerate() {
        if !unit.is_structural() {
            continue;
        }
        if let Err(err) = unit.find_ends_and_caps(graph) {
            report.warn(Warning::UnitExcluded {
                unit_id: unit.id,
                detail: err.to_string(),
            });
            continue;
        }
        let (Some(end1), Some(end2), Some(cap2)) = (unit.end1, unit.end2, unit.cap2) else {
            continue;
        };
        if unit.alist.len() < 2 {
            continue;
        }
        let backbone = collect_backbone(graph, &unit.alist, end1, end2, &[]);
        if backbone.bonds.len() < 2 {
            continue;
        }
        let cuts = filter_frame_shiftable(graph, rings, &backbone.bonds);
        unit.backbone_bonds = cuts.clone();
        let fragments = split_at_cuts(&backbone.atoms, &cuts);
        if fragments.len() < 2 {
            continue;
        }
        let sequence = signature_classes(&fragments, &classes);
        let period = find_period(&sequence);
        let Some(factor) = fold_factor(sequence.len(), period) else {
            continue;
        };
        let kept = &fragments[..period];
        let dropped = &fragments[period..];
        let last_kept_end = kept.last().and_then(|f| f.last());
        let first_dropped_start = dropped.first().and_then(|f| f.first());
        let (Some(last_kept_end), Some(first_dropped_start)) = (last_kept_end, first_dropped_start)
        else {
            continue;
        };
        debug!(
            unit = unit.id,
            fragments = fragments.len(),
            period,
            factor,
            "foldable repeat found"
        );
        let mut edits = EditSet::new();
        edits.delete_bond(last_kept_end, first_dropped_start);
        edits.modify_bond((end2, cap2), (last_kept_end, cap2));
        edits.swap_coordinate(first_dropped_start, cap2);
        for fragment in dropped {
            for &atom in &fragment.atoms {
                edits.delete_atom(atom);
            }
        }
        edits.delete_side_chains = true;
        plans.push(FoldPlan {
            unit_index,
            fold_factor: factor,
            edits,
        });
    }
    plans
}
