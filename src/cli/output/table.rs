//! Table output formatting for CLI commands
//!
//! Renders decisions and engine status as tables using comfy-table.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::domain::models::{Decision, EngineStatus};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self { max_width: None }
    }

    /// Create a table formatter with a fixed width
    pub fn with_max_width(max_width: u16) -> Self {
        Self {
            max_width: Some(max_width),
        }
    }

    /// Format a decision as a field/value table
    pub fn format_decision(&self, decision: &Decision) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec!["Decision".to_string(), decision.decision_id.clone()]);
        table.add_row(vec!["Task".to_string(), decision.task_id.clone()]);
        table.add_row(vec![
            "Recommendation".to_string(),
            decision.recommendation.clone(),
        ]);
        table.add_row(vec![
            "Confidence".to_string(),
            format!("{:.2}", decision.confidence),
        ]);
        table.add_row(vec![
            "Risk level".to_string(),
            decision.risk_level.to_string(),
        ]);
        table.add_row(vec!["Assigned to".to_string(), decision.assigned_to.clone()]);
        if let Some(rationale) = &decision.rationale {
            table.add_row(vec!["Rationale".to_string(), rationale.clone()]);
        }
        if let Some(error) = &decision.error {
            table.add_row(vec!["Error".to_string(), error.clone()]);
        }
        table.add_row(vec![
            "Engine".to_string(),
            format!("{} v{}", decision.swarm_engine, decision.engine_version),
        ]);
        table.add_row(vec![
            "People considered".to_string(),
            decision.people_considered.to_string(),
        ]);

        table.to_string()
    }

    /// Format engine status: one row per collaborator plus the coordinator
    pub fn format_status(&self, status: &EngineStatus) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Collaborator").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

        for agent in &status.agents_status {
            table.add_row(vec![
                agent.name.clone(),
                agent.version.clone(),
                agent.status.to_string(),
            ]);
        }
        table.add_row(vec![
            status.coordinator_status.name.clone(),
            status.coordinator_status.version.clone(),
            status.coordinator_status.status.to_string(),
        ]);

        format!("{} v{}\n{table}", status.name, status.version)
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if let Some(width) = self.max_width {
            table.set_width(width);
        }
        table
    }
}
