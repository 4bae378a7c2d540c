//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over borrowed app state.
//!
//! # Pane Modules
//!
//! - [`catalog`]: Algorithm list grouped by category
//! - [`inputs`]: Editable input fields of the selected algorithm
//! - [`visual`]: The current step, drawn per state family
//! - [`output`]: Output of the reference program
//! - [`status`]: Status bar with step counter, message and keybindings

pub mod catalog;
pub mod inputs;
pub mod output;
pub mod status;
pub mod visual;

pub use catalog::{catalog_order, render_catalog_pane};
pub use inputs::render_input_pane;
pub use output::render_output_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use visual::render_visual_pane;
