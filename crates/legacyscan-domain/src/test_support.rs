use crate::engine::Detector;
use crate::model::Finding;
use crate::policy::EffectiveConfig;
use legacyscan_catalog::Catalog;
use std::sync::Arc;

pub fn detector() -> Detector {
    Detector::credit_management().expect("built-in catalog")
}

/// Built-in catalog with a tweaked default configuration.
pub fn detector_with(tweak: impl FnOnce(&mut EffectiveConfig)) -> Detector {
    let mut cfg = EffectiveConfig::default();
    tweak(&mut cfg);
    Detector::new(Arc::new(Catalog::credit_management().expect("built-in catalog")), &cfg)
}

pub fn names(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.target_name.as_str()).collect()
}
