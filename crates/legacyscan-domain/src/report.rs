use crate::model::Finding;
use crate::policy::FailOn;
use legacyscan_types::{CategoryCounts, Verdict};
use std::collections::BTreeMap;

/// Running totals over the findings of many units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanTally {
    pub units: u32,
    pub findings: u32,
    pub ambiguous: u32,
    pub by_category: CategoryCounts,
    pub by_matcher: BTreeMap<String, u32>,
}

impl ScanTally {
    /// Count one unit and its findings.
    pub fn add_unit(&mut self, findings: &[Finding]) {
        self.units += 1;
        for f in findings {
            self.findings += 1;
            if f.ambiguous {
                self.ambiguous += 1;
            }
            self.by_category.bump(f.category);
            *self.by_matcher.entry(f.matcher.to_string()).or_default() += 1;
        }
    }

    pub fn verdict(&self, fail_on: FailOn) -> Verdict {
        let failed = match fail_on {
            FailOn::Never => false,
            FailOn::Ambiguous => self.ambiguous > 0,
            FailOn::Any => self.findings > 0,
        };
        if failed {
            Verdict::Fail
        } else if self.findings > 0 {
            Verdict::Warn
        } else {
            Verdict::Pass
        }
    }
}
