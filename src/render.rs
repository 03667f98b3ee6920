//! Render sink abstraction.
//!
//! The pipeline pushes [`ViewFrame`](protocol::ViewFrame)s at a sink; the
//! terminal implementation lives in [`table_ui`], and tests substitute a
//! recording sink. The core has no dependency on any presentation
//! technology.

pub mod protocol;
pub mod table_ui;

use crate::error::Result;
use protocol::ViewFrame;

/// Core trait for pushing recomputed frames at a display surface.
pub trait RenderSink {
    /// Set up the surface (raw mode, alternate screen) before the first frame.
    fn initialize(&mut self) -> Result<()>;

    /// Display a frame: the table snapshot, the loading indicator, or the
    /// terminal error state.
    fn render(&mut self, frame: &ViewFrame) -> Result<()>;

    /// Restore the surface on shutdown.
    fn cleanup(&mut self) -> Result<()>;
}
