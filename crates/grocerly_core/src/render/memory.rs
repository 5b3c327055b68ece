//! In-memory render surface.
//!
//! Backs tests and wiring probes; records exactly what a real UI would
//! display.

use super::RenderSurface;
use crate::model::item::ItemId;

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: ItemId,
    pub label: String,
}

/// Surface keeping rows, input and control caption as plain values.
#[derive(Debug, Default)]
pub struct MemorySurface {
    rows: Vec<Row>,
    input: String,
    control: String,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn control(&self) -> &str {
        &self.control
    }
}

impl RenderSurface for MemorySurface {
    fn reset_list(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, id: ItemId, label: &str) {
        self.rows.push(Row {
            id,
            label: label.to_string(),
        });
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn set_control(&mut self, label: &str) {
        self.control = label.to_string();
    }
}
