mod browser;

pub use browser::BrowserDocument;

use crate::error::ThemeError;

/// Boxed click handler bound to the toggle button.
pub type ClickHandler = Box<dyn FnMut()>;

/// The slice of the host document the theme toggle touches.
///
/// The "root marker" is a class on the document body that page styles key on.
pub trait DocumentPort {
    type Element: Clone;

    /// First element matching `selector`, if any.
    fn find_mount_point(&self, selector: &str) -> Option<Self::Element>;
    fn create_button(&self, id: &str, label: &str, style: &str) -> Result<Self::Element, ThemeError>;
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), ThemeError>;
    fn contains_id(&self, id: &str) -> bool;

    fn set_label(&self, element: &Self::Element, label: &str);
    fn label(&self, element: &Self::Element) -> String;

    fn has_root_marker(&self, class: &str) -> bool;
    fn set_root_marker(&self, class: &str, present: bool) -> Result<(), ThemeError>;
    /// Flips the marker and reports whether it is present afterwards.
    fn toggle_root_marker(&self, class: &str) -> Result<bool, ThemeError>;

    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), ThemeError>;
}
