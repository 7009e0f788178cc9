use serde::{Deserialize, Serialize};

/// Key used to decide whether two market segments are "the same" when an
/// account's segment list is de-duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentDedup {
    /// Same segment object (same id).
    #[default]
    Identity,
    /// Same segment name, even across distinct segment objects.
    Name,
}

/// What `add_account_to_rep` does with the account's previous rep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepReassignment {
    /// The previous rep keeps its entry for the account.
    #[default]
    Retain,
    /// The account is removed from the previous rep's list first.
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Spaces per tree level.
    pub indent: usize,
    /// Printed in place of a rep name for unassigned accounts.
    pub unassigned_label: String,
    /// Fail with `MissingSalesRep` instead of printing the label.
    pub require_sales_rep: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            unassigned_label: "Unassigned".into(),
            require_sales_rep: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub segment_dedup: SegmentDedup,
    pub rep_reassignment: RepReassignment,
    pub report: ReportConfig,
}

impl BookConfig {
    /// Load from a JSON file. Missing keys fall back to defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: BookConfig = serde_json::from_str(content)?;
        log::debug!(
            "config: segment_dedup={:?} rep_reassignment={:?}",
            config.segment_dedup,
            config.rep_reassignment
        );
        Ok(config)
    }
}
