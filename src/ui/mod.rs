//! UI module - menus, end screens and HUD.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
