//! The interactive clipping tool: algorithm selection, input routing and sweep triggering.

pub use self::cursor_parameters::CursorParameters;
pub use self::input::{ButtonKind, Buttons, ContinuousInput, PointerClick, TickInput};
pub use self::listener::ToolListener;
pub use self::settings::{ToolSettings, ViewState, DEFAULT_TRANSLATION_SENSITIVITY};
pub use self::tool_controller::ToolController;

mod cursor_parameters;
mod input;
mod listener;
mod settings;
mod tool_controller;
