use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, HtmlElement };

use super::{ ClickHandler, DocumentPort };
use crate::error::ThemeError;

/// `DocumentPort` over the live page through `web-sys`.
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        Ok(Self::new(document))
    }

    fn body(&self) -> Result<HtmlElement, ThemeError> {
        self.document.body().ok_or(ThemeError::NoBody)
    }
}

impl DocumentPort for BrowserDocument {
    type Element = Element;

    fn find_mount_point(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Invalid mount selector '{}': {:?}", selector, e);
                None
            }
        }
    }

    fn create_button(&self, id: &str, label: &str, style: &str) -> Result<Element, ThemeError> {
        let button = self.document.create_element("button")?;
        button.set_id(id);
        button.set_text_content(Some(label));
        if !style.is_empty() {
            button.set_attribute("style", style)?;
        }
        Ok(button)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), ThemeError> {
        parent.append_child(child)?;
        Ok(())
    }

    fn contains_id(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_label(&self, element: &Element, label: &str) {
        element.set_text_content(Some(label));
    }

    fn label(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn has_root_marker(&self, class: &str) -> bool {
        self.body()
            .map(|body| body.class_list().contains(class))
            .unwrap_or(false)
    }

    fn set_root_marker(&self, class: &str, present: bool) -> Result<(), ThemeError> {
        let classes = self.body()?.class_list();
        if present {
            classes.add_1(class)?;
        } else {
            classes.remove_1(class)?;
        }
        Ok(())
    }

    fn toggle_root_marker(&self, class: &str) -> Result<bool, ThemeError> {
        let present = self.body()?.class_list().toggle(class)?;
        Ok(present)
    }

    fn on_click(&self, element: &Element, handler: ClickHandler) -> Result<(), ThemeError> {
        let closure = Closure::wrap(handler);
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        // Lives as long as the button does, which is the page lifetime.
        closure.forget();
        Ok(())
    }
}
