use crate::history::{Location, Route};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct NavigateOptions {
    pub replace: bool,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        NavigateOptions { replace: true }
    }
}

/// The host router as seen by the navigation history.
#[cfg_attr(test, mockall::automock)]
pub trait RouterHandle {
    fn location(&self) -> Location;
    /// Takes the pending location-change signal, if any.
    fn poll_change(&self) -> Option<Location>;
    fn navigate(&self, route: &Route, options: NavigateOptions);
}

impl<R: RouterHandle + ?Sized> RouterHandle for Rc<R> {
    fn location(&self) -> Location {
        self.as_ref().location()
    }

    fn poll_change(&self) -> Option<Location> {
        self.as_ref().poll_change()
    }

    fn navigate(&self, route: &Route, options: NavigateOptions) {
        self.as_ref().navigate(route, options)
    }
}

struct History<P> {
    root: P,
    stack: Vec<P>,
}

impl<P> History<P> {
    pub fn new(root: P) -> Self {
        History {
            root,
            stack: vec![],
        }
    }

    pub fn push(&mut self, page: P) {
        self.stack.push(page);
    }

    pub fn replace(&mut self, page: P) {
        match self.stack.last_mut() {
            Some(last) => *last = page,
            None => self.root = page,
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn last(&self) -> &P {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        std::iter::once(&self.root).chain(self.stack.iter())
    }
}

/// In-process router with its own native session history.
pub struct MemoryRouter {
    history: RefCell<History<Location>>,
    new_location: Cell<Option<Location>>,
}

impl MemoryRouter {
    pub fn new(initial: Location) -> Self {
        MemoryRouter {
            history: RefCell::new(History::new(initial)),
            new_location: Cell::new(None),
        }
    }

    pub fn push(&self, location: Location) {
        self.history.borrow_mut().push(location.clone());
        self.new_location.replace(Some(location));
    }

    pub fn replace(&self, location: Location) {
        self.history.borrow_mut().replace(location.clone());
        self.new_location.replace(Some(location));
    }

    /// Native back, independent of the application history.
    pub fn back(&self) {
        let mut history = self.history.borrow_mut();
        if history.len() > 1 {
            history.pop();
            self.new_location.replace(Some(history.last().clone()));
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history.borrow().len() > 1
    }

    pub fn native_entries(&self) -> Vec<Route> {
        self.history.borrow().iter().map(Route::from).collect()
    }
}

impl RouterHandle for MemoryRouter {
    fn location(&self) -> Location {
        self.history.borrow().last().clone()
    }

    fn poll_change(&self) -> Option<Location> {
        self.new_location.take()
    }

    fn navigate(&self, route: &Route, options: NavigateOptions) {
        let location = Location::from(route);
        if options.replace {
            self.replace(location);
        } else {
            self.push(location);
        }
    }
}
