#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableUsage {
    pub target_name: String,
    pub matcher: Option<String>,
    pub ambiguous: bool,
    pub suggestion: Option<String>,
    pub snippet: String,
    pub start_char: usize,
    pub end_char: usize,
}

/// One scanned unit that has at least one usage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableUnit {
    /// Human label, e.g. `ZPROG / ZPROG_F01`.
    pub label: String,
    pub usages: Vec<RenderableUsage>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    pub units_scanned: u32,
    pub findings_total: u32,
    pub ambiguous_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub units: Vec<RenderableUnit>,
    pub data: RenderableData,
}
