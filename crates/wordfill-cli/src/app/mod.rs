//! Application state for the terminal host.

mod state;

pub use state::{App, HitTarget, WidgetLayout};
