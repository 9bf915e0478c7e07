mod theme_toggle;
#[cfg(feature = "web")]
mod demo_page;

pub use theme_toggle::{ InitOutcome, ThemeToggleWidget, on_toggle_click };
#[cfg(feature = "web")]
pub use demo_page::DemoPage;
