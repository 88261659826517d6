use crate::history::{HistoryStack, Route};
use serde::Deserialize;
use std::collections::HashMap;

/// Static map from a route to the destination a back action must land on.
///
/// Both sides are stored in canonical form so they compare equal to the
/// routes the router reports.
#[derive(Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(from = "HashMap<Route, Route>")]
pub struct OverrideTable(HashMap<Route, Route>);

impl OverrideTable {
    pub fn get(&self, route: &Route) -> Option<&Route> {
        self.0.get(route)
    }

    pub fn contains(&self, route: &Route) -> bool {
        self.0.contains_key(route)
    }
}

impl From<HashMap<Route, Route>> for OverrideTable {
    fn from(table: HashMap<Route, Route>) -> Self {
        table.into_iter().collect()
    }
}

impl<K: Into<Route>, V: Into<Route>> FromIterator<(K, V)> for OverrideTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        OverrideTable(
            iter.into_iter()
                .map(|(from, to)| {
                    let (from, to): (Route, Route) = (from.into(), to.into());
                    (Route::canonical(from.as_str()), Route::canonical(to.as_str()))
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StackMutation {
    PopTop,
    ReplaceTop(Route),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BackResolution {
    pub destination: Route,
    pub mutation: StackMutation,
}

/// Computes where a back action from `current` lands.
///
/// An override for `current` always wins. Otherwise the entry below the top
/// is used when it differs from `current`, and the fallback when it does not.
pub fn resolve(
    current: &Route,
    stack: &HistoryStack,
    overrides: &OverrideTable,
    fallback: &Route,
) -> BackResolution {
    if let Some(destination) = overrides.get(current) {
        return BackResolution {
            destination: destination.clone(),
            mutation: StackMutation::ReplaceTop(destination.clone()),
        };
    }
    match stack.previous() {
        Some(previous) if previous != current => BackResolution {
            destination: previous.clone(),
            mutation: StackMutation::PopTop,
        },
        _ => BackResolution {
            destination: fallback.clone(),
            mutation: StackMutation::ReplaceTop(fallback.clone()),
        },
    }
}
