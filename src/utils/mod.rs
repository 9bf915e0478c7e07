mod theme_state;
pub mod logging;
pub mod page_load;

pub use theme_state::ThemeState;
