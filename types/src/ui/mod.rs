//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod modal;

pub use animation::{AnimPhase, EffectTimer, ease_out_cubic};
pub use modal::{ModalEffect, ModalEffectKind};

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disables modal pops, card flips, camera flights and the marching path.
    pub reduced_motion: bool,
}
