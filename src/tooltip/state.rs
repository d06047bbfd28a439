use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Summary, Term};

/// Offset, in display units, between the pointer and the tooltip corner.
pub const POINTER_OFFSET: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Where a tooltip anchored to this pointer position sits: right of and
    /// below the pointer.
    pub fn tooltip_anchor(self) -> Position {
        Position {
            x: self.x + POINTER_OFFSET,
            y: self.y + POINTER_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipStatus {
    Absent,
    Visible,
}

impl Default for TooltipStatus {
    fn default() -> Self {
        TooltipStatus::Absent
    }
}

/// The single transient tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub term: Term,
    pub summary: Summary,
    pub position: Position,
    pub created_at: DateTime<Utc>,
}

impl Tooltip {
    pub fn new(term: Term, summary: Summary, position: Position) -> Self {
        Tooltip {
            term,
            summary,
            position,
            created_at: Utc::now(),
        }
    }
}
