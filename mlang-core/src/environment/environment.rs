use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::value::Value;

/// A single scope frame. Lookup walks the parent chain; insertion only
/// ever touches this frame. Frames are shared (`Rc<RefCell<_>>`)
/// between every closure that captured them, so a binding added here
/// is visible to all of them.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Rc<RefCell<Environment>>) -> Self {
        Self {
            store: HashMap::new(),
            parent: Some(parent),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.parent.as_ref()
                .and_then(|parent| parent.borrow().get(name))
        }
    }

    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
