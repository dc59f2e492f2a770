use std::any::Any;

use log::debug;

/// Owns everything a page view acquires on mount.
///
/// Each held resource releases itself in `Drop`; dropping the scope releases
/// them in reverse acquisition order, so a component only has to return one
/// destructor.
pub struct EffectScope {
    name: &'static str,
    resources: Vec<Box<dyn Any>>,
}

impl EffectScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            resources: Vec::new(),
        }
    }

    pub fn hold<R: 'static>(&mut self, resource: R) {
        self.resources.push(Box::new(resource));
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }
}

impl Drop for EffectScope {
    fn drop(&mut self) {
        let count = self.resources.len();
        while let Some(resource) = self.resources.pop() {
            drop(resource);
        }
        debug!("{}: released {} effect(s)", self.name, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Registration {
        name: &'static str,
        live: Rc<Cell<usize>>,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Registration {
        fn new(name: &'static str, live: &Rc<Cell<usize>>, log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
            live.set(live.get() + 1);
            Self {
                name,
                live: live.clone(),
                log: log.clone(),
            }
        }
    }

    impl Drop for Registration {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
            self.log.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn test_releases_in_reverse_order() {
        let live = Rc::new(Cell::new(0));
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut scope = EffectScope::new("test");
            scope.hold(Registration::new("scroll", &live, &log));
            scope.hold(Registration::new("cursor", &live, &log));
            scope.hold(Registration::new("rotator", &live, &log));
            assert_eq!(scope.len(), 3);
            assert_eq!(live.get(), 3);
        }
        assert_eq!(live.get(), 0);
        assert_eq!(*log.borrow(), vec!["rotator", "cursor", "scroll"]);
    }

    #[test]
    fn test_empty_scope() {
        let scope = EffectScope::new("empty");
        assert_eq!(scope.len(), 0);
    }
}
