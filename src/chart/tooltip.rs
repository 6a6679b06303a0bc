//! Hover tooltip state machine.
//!
//! Two states, strictly event-driven:
//!
//! - `Hidden` (initial): nothing to draw
//! - `Visible`: position and content for the bar under the pointer
//!
//! `show` / `hide` are idempotent; repeated enter or leave events settle on
//! the same state. There is no timeout-based auto-hide.

use crate::chart::bars::Bar;
use crate::domain::quarter_label;
use crate::error::AppError;

/// Pointer position in logical canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Offsets from the pointer to the tooltip's top-left corner, so the popup
/// does not sit under the cursor.
const OFFSET_TOP: f64 = -30.0;
const OFFSET_LEFT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible {
        /// Screen offset from the canvas top.
        top: f64,
        /// Screen offset from the canvas left.
        left: f64,
        content: String,
    },
}

/// Owns the transient tooltip state for one chart.
#[derive(Debug, Clone)]
pub struct Tooltip {
    state: TooltipState,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            state: TooltipState::Hidden,
        }
    }

    /// Pointer-enter on a bar: position next to the pointer and fill in the
    /// quarter label and value.
    ///
    /// A bar whose date has no quarter label is an error; we refuse to render
    /// placeholder text into the tooltip.
    pub fn show(&mut self, bar: &Bar, pointer: Pointer) -> Result<(), AppError> {
        let label = quarter_label(&bar.raw_date).ok_or_else(|| {
            AppError::new(
                4,
                format!("No quarter label for observation date '{}'.", bar.raw_date),
            )
        })?;

        self.state = TooltipState::Visible {
            top: pointer.y + OFFSET_TOP,
            left: pointer.x + OFFSET_LEFT,
            content: format!("{label} <br>  ${} Billions", bar.value),
        };
        Ok(())
    }

    /// Pointer-leave: hide. Content and position are dropped with the state.
    pub fn hide(&mut self) {
        self.state = TooltipState::Hidden;
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// Content lines for render backends that cannot interpret the `<br>`
    /// separator embedded in the content string.
    pub fn lines(&self) -> Vec<&str> {
        match &self.state {
            TooltipState::Hidden => Vec::new(),
            TooltipState::Visible { content, .. } => {
                content.split("<br>").map(str::trim).collect()
            }
        }
    }
}
