use std::cell::{ Cell, RefCell };
use std::rc::Rc;

use crate::dom::{ ClickHandler, DocumentPort };
use crate::error::ThemeError;
use crate::storage::{ MemoryStore, PreferenceStore };

#[derive(Debug, Default)]
pub struct FakeNode {
    pub id: String,
    pub style: String,
    pub text: RefCell<String>,
    pub children: RefCell<Vec<FakeElement>>,
}

/// Shared handle to a fake node; equality is identity, like DOM nodes.
#[derive(Clone, Debug, Default)]
pub struct FakeElement(pub Rc<FakeNode>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeElement {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.children.borrow().clone()
    }

    fn find_id(&self, id: &str) -> Option<FakeElement> {
        if self.0.id == id {
            return Some(self.clone());
        }
        self.0.children
            .borrow()
            .iter()
            .find_map(|child| child.find_id(id))
    }
}

#[derive(Default)]
struct FakeDom {
    mount_points: Vec<(String, FakeElement)>,
    body_classes: RefCell<Vec<String>>,
    handlers: RefCell<Vec<(FakeElement, Rc<RefCell<ClickHandler>>)>>,
    created: Cell<usize>,
    broken_body: Cell<bool>,
    broken_click_binding: Cell<bool>,
}

/// In-memory stand-in for the host page. Clones share the same DOM.
#[derive(Clone, Default)]
pub struct FakeDocument {
    dom: Rc<FakeDom>,
}

impl FakeDocument {
    /// A page without any mount point.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A page whose `selector` matches the given mount points, in document order.
    pub fn with_mount_points(selector: &str, count: usize) -> Self {
        let mount_points = (0..count)
            .map(|i| {
                let node = FakeNode {
                    id: format!("mount-{}", i),
                    ..FakeNode::default()
                };
                node.children.borrow_mut().push(
                    FakeElement(
                        Rc::new(FakeNode {
                            id: format!("topbar-title-{}", i),
                            ..FakeNode::default()
                        })
                    )
                );
                (selector.to_string(), FakeElement(Rc::new(node)))
            })
            .collect();
        Self {
            dom: Rc::new(FakeDom {
                mount_points,
                ..FakeDom::default()
            }),
        }
    }

    pub fn swagger_ui() -> Self {
        Self::with_mount_points(".swagger-ui .topbar .wrapper", 1)
    }

    pub fn mount_point(&self, index: usize) -> FakeElement {
        self.dom.mount_points[index].1.clone()
    }

    pub fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.dom.mount_points.iter().find_map(|(_, mount)| mount.find_id(id))
    }

    pub fn body_classes(&self) -> Vec<String> {
        self.dom.body_classes.borrow().clone()
    }

    /// Makes every body class call fail, as on a page without `<body>`.
    pub fn break_body(&self) {
        self.dom.broken_body.set(true);
    }

    pub fn break_click_binding(&self, broken: bool) {
        self.dom.broken_click_binding.set(broken);
    }

    pub fn buttons_created(&self) -> usize {
        self.dom.created.get()
    }

    /// Dispatches a click to whatever handler is bound to `element`.
    pub fn click(&self, element: &FakeElement) {
        let handler = self.dom.handlers
            .borrow()
            .iter()
            .find(|(bound, _)| bound == element)
            .map(|(_, handler)| Rc::clone(handler));
        if let Some(handler) = handler {
            let mut callback = handler.borrow_mut();
            (&mut *callback)();
        }
    }

    pub fn click_id(&self, id: &str) {
        let element = self.element_by_id(id).expect("no element with that id in the document");
        self.click(&element);
    }
}

impl DocumentPort for FakeDocument {
    type Element = FakeElement;

    fn find_mount_point(&self, selector: &str) -> Option<FakeElement> {
        self.dom.mount_points
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, el)| el.clone())
    }

    fn create_button(&self, id: &str, label: &str, style: &str) -> Result<FakeElement, ThemeError> {
        self.dom.created.set(self.dom.created.get() + 1);
        Ok(
            FakeElement(
                Rc::new(FakeNode {
                    id: id.to_string(),
                    style: style.to_string(),
                    text: RefCell::new(label.to_string()),
                    children: RefCell::default(),
                })
            )
        )
    }

    fn append_child(&self, parent: &FakeElement, child: &FakeElement) -> Result<(), ThemeError> {
        parent.0.children.borrow_mut().push(child.clone());
        Ok(())
    }

    fn contains_id(&self, id: &str) -> bool {
        self.element_by_id(id).is_some()
    }

    fn set_label(&self, element: &FakeElement, label: &str) {
        *element.0.text.borrow_mut() = label.to_string();
    }

    fn label(&self, element: &FakeElement) -> String {
        element.text()
    }

    fn has_root_marker(&self, class: &str) -> bool {
        self.dom.body_classes.borrow().iter().any(|c| c == class)
    }

    fn set_root_marker(&self, class: &str, present: bool) -> Result<(), ThemeError> {
        if self.dom.broken_body.get() {
            return Err(ThemeError::NoBody);
        }
        let mut classes = self.dom.body_classes.borrow_mut();
        classes.retain(|c| c != class);
        if present {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn toggle_root_marker(&self, class: &str) -> Result<bool, ThemeError> {
        if self.dom.broken_body.get() {
            return Err(ThemeError::NoBody);
        }
        let present = !self.has_root_marker(class);
        self.set_root_marker(class, present)?;
        Ok(present)
    }

    fn on_click(&self, element: &FakeElement, handler: ClickHandler) -> Result<(), ThemeError> {
        if self.dom.broken_click_binding.get() {
            return Err(ThemeError::Dom("addEventListener failed".to_string()));
        }
        self.dom.handlers.borrow_mut().push((element.clone(), Rc::new(RefCell::new(handler))));
        Ok(())
    }
}

/// Store whose reads and/or writes throw, like disabled or full `localStorage`.
#[derive(Default)]
pub struct FailingStore {
    pub fail_get: bool,
    pub fail_set: bool,
    pub inner: MemoryStore,
    pub writes: Cell<usize>,
}

impl FailingStore {
    pub fn failing_writes() -> Self {
        Self { fail_set: true, ..Self::default() }
    }

    pub fn failing_reads() -> Self {
        Self { fail_get: true, ..Self::default() }
    }
}

impl PreferenceStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.fail_get {
            return Err(ThemeError::Storage("SecurityError: access denied".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_set {
            return Err(ThemeError::Storage("QuotaExceededError".to_string()));
        }
        self.inner.set(key, value)
    }
}
