use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::layout::NodeBox;

/// Implemented by whatever the host paints for a node; the registry reads
/// the box at snapshot time, one reconciliation pass after layout.
pub trait Measure {
    fn bounding_box(&self) -> NodeBox;
}

#[derive(Default)]
struct RegistryInner {
    elements: HashMap<String, Rc<dyn Measure>>,
    observers: HashMap<String, NodeObserver>,
}

/// Tracks the last-known rendered element per node id. Single writer: all
/// mutation goes through the [`NodeObserver`] handles it vends.
#[derive(Clone, Default)]
pub struct NodeRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

/// Long-lived setter handle for one node id. `observer(id)` returns the
/// same handle for the life of the registry; a fresh handle per render
/// would re-trigger the host's attach/detach cycle and oscillate.
#[derive(Clone)]
pub struct NodeObserver {
    id: Rc<str>,
    registry: Weak<RefCell<RegistryInner>>,
}

impl NodeObserver {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set(&self, element: Option<Rc<dyn Measure>>) {
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        match element {
            Some(element) => {
                if let Some(current) = inner.elements.get(self.id.as_ref()) {
                    if Rc::ptr_eq(current, &element) {
                        return;
                    }
                }
                inner.elements.insert(self.id.to_string(), element);
            }
            None => {
                inner.elements.remove(self.id.as_ref());
            }
        }
    }
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer(&self, id: &str) -> NodeObserver {
        let mut inner = self.inner.borrow_mut();
        if let Some(observer) = inner.observers.get(id) {
            return observer.clone();
        }
        let observer = NodeObserver {
            id: Rc::from(id),
            registry: Rc::downgrade(&self.inner),
        };
        inner.observers.insert(id.to_string(), observer.clone());
        observer
    }

    pub fn bounding_box(&self, id: &str) -> Option<NodeBox> {
        self.inner
            .borrow()
            .elements
            .get(id)
            .map(|element| element.bounding_box())
    }

    /// Reads every tracked box in one pass so routing sees a single
    /// consistent set even if elements resize between recomputations.
    pub fn snapshot(&self) -> HashMap<String, NodeBox> {
        self.inner
            .borrow()
            .elements
            .iter()
            .map(|(id, element)| (id.clone(), element.bounding_box()))
            .collect()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().elements.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().elements.is_empty()
    }
}

/// A measured element with externally updatable bounds; what the CLI and
/// tests stand in for a painted DOM node.
#[derive(Debug)]
pub struct FixedElement {
    bounds: std::cell::Cell<NodeBox>,
}

impl FixedElement {
    pub fn new(bounds: NodeBox) -> Rc<Self> {
        Rc::new(Self {
            bounds: std::cell::Cell::new(bounds),
        })
    }

    pub fn resize(&self, bounds: NodeBox) {
        self.bounds.set(bounds);
    }
}

impl Measure for FixedElement {
    fn bounding_box(&self) -> NodeBox {
        self.bounds.get()
    }
}
