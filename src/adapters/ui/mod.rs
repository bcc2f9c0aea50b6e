pub mod banner;
pub mod tui;

pub use tui::Tui;

/// Prints the welcome banner and applies the theme for all subsequent
/// inquire prompts. Call once at startup (after tracing init).
pub fn init_ui() {
    banner::print_welcome();
    tui::apply_theme();
}
