use crate::history::{
    resolve, HistoryPersistence, HistoryStack, LocationObserver, OverrideTable, Route,
    SessionStore,
};
use crate::router::{NavigateOptions, RouterHandle};
use log::{debug, info};

/// Application-controlled navigation history, as used by the rest of the app.
pub trait NavigationHistory {
    fn is_enabled(&self) -> bool;
    /// The route the router currently reports.
    fn current(&self) -> Option<Route>;
    /// The entry below the top; a back control is enabled when this exists.
    fn previous(&self) -> Option<&Route>;
    fn entries(&self) -> &[Route];
    fn replace_top(&mut self, route: Route);
    fn pop(&mut self);
    /// Pulls pending router location changes into the stack.
    fn sync(&mut self);
    /// Resolves and performs a back action, returning where it navigated to.
    fn go_back(&mut self, overrides: &OverrideTable, fallback: &Route) -> Option<Route>;
}

pub struct HistoryProvider<R, S> {
    observer: LocationObserver<R>,
    stack: HistoryStack,
    persistence: HistoryPersistence<S>,
}

impl<R, S> HistoryProvider<R, S>
where
    R: RouterHandle,
    S: SessionStore,
{
    pub fn new(router: R, persistence: HistoryPersistence<S>, capacity: usize) -> Self {
        let stack = persistence.load_with_capacity(capacity);
        if stack.is_empty() {
            debug!("Starting with an empty navigation history");
        } else {
            debug!("Loaded navigation history with {} entries", stack.len());
        }
        let mut provider = HistoryProvider {
            observer: LocationObserver::new(router),
            stack,
            persistence,
        };
        if provider.observer.observe_current(&mut provider.stack) {
            provider.persist();
        }
        provider.sync();
        provider
    }

    fn persist(&mut self) {
        self.persistence.save(&self.stack);
    }
}

impl<R, S> NavigationHistory for HistoryProvider<R, S>
where
    R: RouterHandle,
    S: SessionStore,
{
    fn is_enabled(&self) -> bool {
        true
    }

    fn current(&self) -> Option<Route> {
        Some(self.observer.current_route())
    }

    fn previous(&self) -> Option<&Route> {
        self.stack.previous()
    }

    fn entries(&self) -> &[Route] {
        self.stack.entries()
    }

    fn replace_top(&mut self, route: Route) {
        self.stack.replace_top(route);
        self.persist();
    }

    fn pop(&mut self) {
        self.stack.pop();
        self.persist();
    }

    fn sync(&mut self) {
        if self.observer.sync(&mut self.stack) {
            self.persist();
        }
    }

    fn go_back(&mut self, overrides: &OverrideTable, fallback: &Route) -> Option<Route> {
        self.sync();
        let current = self.observer.current_route();
        let resolution = resolve(&current, &self.stack, overrides, fallback);
        info!(
            "Back from '{}' resolved to '{}' ({:?})",
            current, resolution.destination, resolution.mutation
        );
        self.stack.apply(&resolution.mutation);
        self.persist();
        self.observer
            .router()
            .navigate(&resolution.destination, NavigateOptions::replace());
        Some(resolution.destination)
    }
}

/// Stand-in used when no router is available; every operation is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledHistory;

impl NavigationHistory for DisabledHistory {
    fn is_enabled(&self) -> bool {
        false
    }

    fn current(&self) -> Option<Route> {
        None
    }

    fn previous(&self) -> Option<&Route> {
        None
    }

    fn entries(&self) -> &[Route] {
        &[]
    }

    fn replace_top(&mut self, _route: Route) {}

    fn pop(&mut self) {}

    fn sync(&mut self) {}

    fn go_back(&mut self, _overrides: &OverrideTable, _fallback: &Route) -> Option<Route> {
        None
    }
}

pub fn connect<R, S>(
    router: Option<R>,
    persistence: HistoryPersistence<S>,
    capacity: usize,
) -> Box<dyn NavigationHistory>
where
    R: RouterHandle + 'static,
    S: SessionStore + 'static,
{
    match router {
        Some(router) => Box::new(HistoryProvider::new(router, persistence, capacity)),
        None => {
            info!("No router available, navigation history is disabled");
            Box::new(DisabledHistory)
        }
    }
}
