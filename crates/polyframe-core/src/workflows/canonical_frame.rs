use super::fold::prepare_fold_edits;
use super::frame_shift::prepare_frameshift_edits;
use crate::core::io::auxinfo::OracleResult;
use crate::core::models::graph::MolecularGraph;
use crate::core::models::rings::RingSystems;
use crate::core::models::unit::Polymer;
use crate::engine::config::PolymerConfig;
use crate::engine::edits;
use crate::engine::report::{StructureReport, Warning};
use tracing::{info, instrument};

/// Runs one canonicalization pass over a structure's working copy.
///
/// The pass is fold-first: when folding removes an over-expanded repeat the
/// atom array is renumbered and every downstream analysis (canonical order,
/// equivalence classes, ring assignment) is stale, so the pass stops with
/// `needs_reanalysis` set and the caller re-runs the oracle before calling
/// again. Once nothing folds, the frame-shift plans are applied in unit
/// order.
///
/// The graph and polymer are the caller's working copy. A plan that fails
/// mid-application leaves them partially edited; the failure is recorded as
/// a [`Warning::PlanAbandoned`] and the caller is expected to discard the
/// copy and keep the original structure.
///
/// # Arguments
///
/// * `graph` - Working copy of the molecular graph.
/// * `polymer` - Working copy of the unit and collection bookkeeping.
/// * `rings` - Ring-system assignment for the current atom numbering.
/// * `oracle_text` - The oracle's textual result for the current numbering.
/// * `config` - Engine configuration.
///
/// Nothing here is a hard failure: a garbled oracle string, like a plan
/// that cannot be applied, is downgraded to a warning and the structure is
/// left in its drawn frame.
#[instrument(skip_all, name = "canonical_frame_pass")]
pub fn run(
    graph: &mut MolecularGraph,
    polymer: &mut Polymer,
    rings: &RingSystems,
    oracle_text: &str,
    config: &PolymerConfig,
) -> StructureReport {
    let mut report = StructureReport::new();
    let oracle = match OracleResult::parse(oracle_text) {
        Ok(oracle) => oracle,
        Err(err) => {
            report.warn(Warning::OraclePartial {
                detail: err.to_string(),
            });
            return report;
        }
    };

    if config.fold_repeats {
        let fold_plans = prepare_fold_edits(graph, polymer, rings, &oracle, config, &mut report);
        // folding renumbers atoms, so only the first plan is still valid;
        // the caller re-oracles and comes back for the rest
        if let Some(plan) = fold_plans.first() {
            let unit_id = polymer.units[plan.unit_index].id;
            match edits::apply(graph, polymer, &plan.edits, config) {
                Ok(n) => {
                    report.edits_applied += n;
                    report.units_folded += 1;
                    report.needs_reanalysis = true;
                    info!(
                        unit = unit_id,
                        fold_factor = plan.fold_factor,
                        "folded an over-expanded unit; structure needs re-analysis"
                    );
                }
                Err(err) => {
                    report.warn(Warning::PlanAbandoned {
                        unit_id,
                        detail: err.to_string(),
                    });
                }
            }
            return report;
        }
    }

    let shift_plans = prepare_frameshift_edits(graph, polymer, rings, &oracle, config, &mut report);
    for plan in &shift_plans {
        let unit_id = polymer.units[plan.unit_index].id;
        match edits::apply(graph, polymer, &plan.edits, config) {
            Ok(n) => {
                report.edits_applied += n;
                report.units_shifted += 1;
                // the old boundary is now closed by a real bond
                polymer.units[plan.unit_index].cyclized = true;
            }
            Err(err) => {
                report.warn(Warning::PlanAbandoned {
                    unit_id,
                    detail: err.to_string(),
                });
                return report;
            }
        }
    }
    if report.units_shifted > 0 {
        info!(units = report.units_shifted, "frame-shifted crossing bonds");
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondOrder;
    use crate::core::models::unit::PolymerUnit;
    use crate::engine::config::FrameShiftScheme;
    use nalgebra::Point3;

    fn linear(elements: &[&str]) -> MolecularGraph {
        let mut g = MolecularGraph::new();
        for (i, e) in elements.iter().enumerate() {
            g.add_atom(e, Point3::new(i as f64, 0.0, 0.0));
        }
        for i in 1..elements.len() {
            g.add_bond(i - 1, i, BondOrder::Single).unwrap();
        }
        g
    }

    fn single_unit(g: &MolecularGraph, alist: Vec<usize>) -> Polymer {
        let last = g.atom_count() - 1;
        let first = alist[0];
        let end = *alist.last().unwrap();
        let mut unit = PolymerUnit::new(1, alist, &[(first - 1, first), (end, last)]);
        unit.find_ends_and_caps(g).unwrap();
        Polymer {
            units: vec![unit],
            ..Polymer::default()
        }
    }

    #[test]
    fn garbled_oracle_text_downgrades_to_a_warning() {
        let mut g = linear(&["Zz", "C", "Zz"]);
        let mut polymer = Polymer::default();
        let rings = RingSystems::new(3);
        let report = run(&mut g, &mut polymer, &rings, "/E:(1,2)", &PolymerConfig::default());
        assert!(matches!(report.warnings[0], Warning::OraclePartial { .. }));
        assert_eq!(report.edits_applied, 0);
        assert!(!report.needs_reanalysis);
    }

    #[test]
    fn over_expanded_unit_folds_and_requests_reanalysis() {
        // cap - (C-O) x3 - cap, drawn with three explicit repeats
        let mut g = linear(&["Zz", "C", "O", "C", "O", "C", "O", "Zz"]);
        let mut polymer = single_unit(&g, vec![1, 2, 3, 4, 5, 6]);
        let rings = RingSystems::new(8);
        let report = run(
            &mut g,
            &mut polymer,
            &rings,
            "/N:1,2,3,4,5,6,7,8/E:(2,4,6)(3,5,7)",
            &PolymerConfig::default(),
        );
        assert!(report.needs_reanalysis);
        assert_eq!(report.units_folded, 1);
        assert_eq!(report.units_shifted, 0);
        assert_eq!(g.atom_count(), 4);
        assert_eq!(polymer.units[0].alist, vec![1, 2]);
    }

    #[test]
    fn second_pass_after_fold_reorients_the_folded_unit() {
        let mut g = linear(&["Zz", "C", "O", "C", "O", "C", "O", "Zz"]);
        let mut polymer = single_unit(&g, vec![1, 2, 3, 4, 5, 6]);
        let rings = RingSystems::new(8);
        let config = PolymerConfig::default();
        let first = run(
            &mut g,
            &mut polymer,
            &rings,
            "/N:1,2,3,4,5,6,7,8/E:(2,4,6)(3,5,7)",
            &config,
        );
        assert!(first.needs_reanalysis);
        // re-oracled for the folded 4-atom structure: cap-C-O-cap, with the
        // C-O bond the sole backbone candidate
        let rings = RingSystems::new(4);
        let second = run(
            &mut g,
            &mut polymer,
            &rings,
            "/N:1,2,3,4/z(1,4)(2,3)",
            &config,
        );
        assert!(!second.needs_reanalysis);
        // the senior crossing bond of a 2-atom unit coincides with its own
        // end1-end2 closure, so reopening there is a relabeling: the oxygen
        // becomes the first crossing end without touching the graph
        assert_eq!(second.units_shifted, 0);
        assert_eq!(second.edits_applied, 0);
        assert!(g.contains_bond(1, 2));
        assert_eq!(polymer.units[0].end1, Some(2));
        assert_eq!(polymer.units[0].cap1, Some(3));
        assert!(g.is_symmetric());
    }

    #[test]
    fn stable_structure_applies_no_edits() {
        // cap - N - C - cap: the nitrogen already sits at the boundary
        let mut g = linear(&["Zz", "N", "C", "Zz"]);
        let mut polymer = single_unit(&g, vec![1, 2]);
        let rings = RingSystems::new(4);
        let report = run(
            &mut g,
            &mut polymer,
            &rings,
            "/N:1,2,3,4/z(1,4)(2,3)",
            &PolymerConfig::default(),
        );
        assert_eq!(report.edits_applied, 0);
        assert!(!report.needs_reanalysis);
        assert!(report.is_clean());
    }

    #[test]
    fn disabled_fold_goes_straight_to_frame_shift() {
        let mut g = linear(&["Zz", "C", "O", "C", "O", "C", "O", "Zz"]);
        let mut polymer = single_unit(&g, vec![1, 2, 3, 4, 5, 6]);
        let rings = RingSystems::new(8);
        let config = PolymerConfig::builder()
            .fold_repeats(false)
            .frame_shift_scheme(FrameShiftScheme::None)
            .build();
        let report = run(
            &mut g,
            &mut polymer,
            &rings,
            "/N:1,2,3,4,5,6,7,8/E:(2,4,6)(3,5,7)",
            &config,
        );
        assert_eq!(report.edits_applied, 0);
        assert_eq!(g.atom_count(), 8);
    }

    #[test]
    fn source_based_units_are_ignored() {
        let mut g = linear(&["Zz", "C", "C", "Zz"]);
        let unit = PolymerUnit {
            id: 7,
            alist: vec![1, 2],
            ..PolymerUnit::default()
        };
        let mut polymer = Polymer {
            units: vec![unit],
            ..Polymer::default()
        };
        let rings = RingSystems::new(4);
        let report = run(
            &mut g,
            &mut polymer,
            &rings,
            "/N:1,2,3,4",
            &PolymerConfig::default(),
        );
        assert!(report.is_clean());
        assert_eq!(report.edits_applied, 0);
    }

    #[test]
    fn applied_shift_marks_the_unit_cyclized() {
        // cap - C - C - N - C - cap: the chain nitrogen pulls the crossing
        // bond away from the drawn boundary
        let mut g = linear(&["Zz", "C", "C", "N", "C", "Zz"]);
        let mut polymer = single_unit(&g, vec![1, 2, 3, 4]);
        assert!(!polymer.units[0].cyclized);
        let rings = RingSystems::new(6);
        let report = run(
            &mut g,
            &mut polymer,
            &rings,
            "/N:1,2,3,4,5,6/z(1,6)(2,3)(3,4)(4,5)",
            &PolymerConfig::default(),
        );
        assert_eq!(report.units_shifted, 1);
        assert!(polymer.units[0].cyclized);
        // the drawn boundary became a real internal bond
        assert!(g.contains_bond(1, 4));
        assert!(!g.contains_bond(2, 3));
    }
}
