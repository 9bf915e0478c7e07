mod widget_config;

pub use widget_config::ThemeToggleConfig;
