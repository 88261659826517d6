use crate::history::{HistoryStack, Route};
use crate::router::RouterHandle;
use log::debug;

/// Feeds router location changes into a [`HistoryStack`].
pub struct LocationObserver<R> {
    router: R,
}

impl<R: RouterHandle> LocationObserver<R> {
    pub fn new(router: R) -> Self {
        LocationObserver { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn current_route(&self) -> Route {
        self.router.location().route()
    }

    /// Pushes the current route, e.g. when the observer is first attached.
    pub fn observe_current(&self, stack: &mut HistoryStack) -> bool {
        stack.push(self.current_route())
    }

    /// Drains pending change signals and returns whether the stack changed.
    pub fn sync(&self, stack: &mut HistoryStack) -> bool {
        let mut changed = false;
        while let Some(location) = self.router.poll_change() {
            let route = location.route();
            debug!("Observed route change to '{}'", route);
            changed |= stack.push(route);
        }
        changed
    }
}
