use tracing::warn;

/// A recoverable condition met while analyzing one structure.
///
/// None of these abort the run: a unit that cannot be folded or shifted is
/// left in its drawn frame and the structure still yields an identifier,
/// annotated with the warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The oracle string lacked or garbled an expected field; the affected
    /// units are left un-folded/un-shifted.
    OraclePartial { detail: String },
    /// A unit was excluded from polymer-specific processing.
    UnitExcluded { unit_id: usize, detail: String },
    /// A planned edit set could not be applied; the working copy must be
    /// discarded by the caller.
    PlanAbandoned { unit_id: usize, detail: String },
    /// Stereocenters whose neighbor set changed during a frame shift; their
    /// 3-D parity must be re-validated downstream.
    StereoRevalidationNeeded { unit_id: usize, atoms: Vec<usize> },
}

/// Per-structure outcome of fold/frame-shift processing: counters plus the
/// collected warning list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureReport {
    pub warnings: Vec<Warning>,
    /// Total individual edits applied to the working graph.
    pub edits_applied: usize,
    /// Units whose over-expanded repeats were folded away.
    pub units_folded: usize,
    /// Units whose crossing bonds were frame-shifted.
    pub units_shifted: usize,
    /// Set when fold edits were applied: atom numbering changed, so the
    /// caller must re-run the oracle and call the engine again before the
    /// frame shift is decided.
    pub needs_reanalysis: bool,
}

impl StructureReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning, mirroring it onto the log.
    pub fn warn(&mut self, warning: Warning) {
        warn!(?warning, "polymer frame analysis warning");
        self.warnings.push(warning);
    }

    /// True if no warning was recorded.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_clean() {
        let report = StructureReport::new();
        assert!(report.is_clean());
        assert_eq!(report.edits_applied, 0);
        assert!(!report.needs_reanalysis);
    }

    #[test]
    fn warn_accumulates_in_order() {
        let mut report = StructureReport::new();
        report.warn(Warning::OraclePartial {
            detail: "missing /z".into(),
        });
        report.warn(Warning::UnitExcluded {
            unit_id: 2,
            detail: "one crossing bond".into(),
        });
        assert_eq!(report.warnings.len(), 2);
        assert!(!report.is_clean());
        assert!(matches!(report.warnings[0], Warning::OraclePartial { .. }));
    }
}
