//! TUI rendering components.

mod dropdown;
mod render;

pub use dropdown::DropdownWindow;
pub use render::draw;
