use serde::{Deserialize, Serialize};

/// Offsets closer than this are treated as the same scroll position.
const ECHO_TOLERANCE_PX: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollPane {
    /// Event body; master for both axes.
    Body,
    /// Horizontal axis header row.
    Header,
    /// Vertical equipment side list.
    EquipmentList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Instruction for the host to move one pane to an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollDirective {
    pub pane: ScrollPane,
    pub axis: ScrollAxis,
    pub offset: f64,
}

/// Synchronizes scrolling across the header, body, and equipment-list panes.
///
/// Panes report their native scroll events through `report_scroll`; the
/// coordinator answers with directives for the other panes. Applying a
/// directive makes the target pane fire its own scroll event, so the
/// coordinator remembers each instructed offset and consumes the matching
/// echo report once instead of bouncing it back.
///
/// Pairings (two degrees of freedom):
/// - vertical: body and equipment list move together
/// - horizontal: body drives the header; a manual header drag drives the body
#[derive(Debug, Default, Clone)]
pub struct ScrollCoordinator {
    pending_echoes: Vec<ScrollDirective>,
}

impl ScrollCoordinator {
    /// Handles one native scroll event and returns what the host must apply
    /// to the other panes.
    pub fn report_scroll(
        &mut self,
        source: ScrollPane,
        axis: ScrollAxis,
        offset: f64,
    ) -> Vec<ScrollDirective> {
        if self.consume_echo(source, axis, offset) {
            return Vec::new();
        }

        let targets: &[ScrollPane] = match (axis, source) {
            (ScrollAxis::Vertical, ScrollPane::Body) => &[ScrollPane::EquipmentList],
            (ScrollAxis::Vertical, ScrollPane::EquipmentList) => &[ScrollPane::Body],
            (ScrollAxis::Horizontal, ScrollPane::Body) => &[ScrollPane::Header],
            (ScrollAxis::Horizontal, ScrollPane::Header) => &[ScrollPane::Body],
            // The header has no vertical dimension and the list no horizontal one.
            _ => &[],
        };

        let directives: Vec<ScrollDirective> = targets
            .iter()
            .map(|&pane| ScrollDirective { pane, axis, offset })
            .collect();
        self.pending_echoes.extend(directives.iter().copied());
        directives
    }

    /// Number of instructed offsets still waiting for their echo report.
    #[must_use]
    pub fn pending_echo_count(&self) -> usize {
        self.pending_echoes.len()
    }

    fn consume_echo(&mut self, source: ScrollPane, axis: ScrollAxis, offset: f64) -> bool {
        let Some(index) = self.pending_echoes.iter().position(|echo| {
            echo.pane == source
                && echo.axis == axis
                && (echo.offset - offset).abs() <= ECHO_TOLERANCE_PX
        }) else {
            return false;
        };
        self.pending_echoes.swap_remove(index);
        true
    }
}
