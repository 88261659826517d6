use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Canonical identity of a visited location: pathname + query + fragment.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    pub fn new<S: Into<String>>(route: S) -> Self {
        Route(route.into())
    }

    pub fn root() -> Self {
        Route("/".to_string())
    }

    /// The route a router would report after navigating to `input`.
    pub fn canonical(input: &str) -> Self {
        Location::parse(input).route()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Route {
    fn from(value: &str) -> Self {
        Route::new(value)
    }
}

impl From<String> for Route {
    fn from(value: String) -> Self {
        Route(value)
    }
}

impl From<&Location> for Route {
    fn from(location: &Location) -> Self {
        Route(format!(
            "{}{}{}",
            location.pathname, location.search, location.hash
        ))
    }
}

/// What the router reports as its current location.
///
/// `search` keeps its leading `?` and `hash` its leading `#`; both are empty
/// when absent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Location {
    pub fn parse(input: &str) -> Self {
        let (rest, hash) = match input.find('#') {
            Some(index) => input.split_at(index),
            None => (input, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };
        Location {
            pathname: if pathname.starts_with('/') {
                pathname.to_string()
            } else {
                format!("/{pathname}")
            },
            search: non_trivial(search),
            hash: non_trivial(hash),
        }
    }

    pub fn route(&self) -> Route {
        Route::from(self)
    }
}

fn non_trivial(part: &str) -> String {
    if part.len() <= 1 {
        String::new()
    } else {
        part.to_string()
    }
}

impl From<&Route> for Location {
    fn from(route: &Route) -> Self {
        Location::parse(route.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::history::{Location, Route};

    #[test]
    fn test_parse_splits_query_and_fragment() {
        let location = Location::parse("/users/42?tab=posts#latest");
        assert_eq!("/users/42", location.pathname);
        assert_eq!("?tab=posts", location.search);
        assert_eq!("#latest", location.hash);
    }

    #[test]
    fn test_question_mark_inside_fragment_is_not_a_query() {
        let location = Location::parse("/faq#what?");
        assert_eq!("/faq", location.pathname);
        assert_eq!("", location.search);
        assert_eq!("#what?", location.hash);
    }

    #[test]
    fn test_empty_parts_are_normalized() {
        let location = Location::parse("?#");
        assert_eq!("/", location.pathname);
        assert_eq!("", location.search);
        assert_eq!("", location.hash);
        assert_eq!(Route::root(), location.route());
    }

    #[test]
    fn test_relative_pathname_gets_leading_slash() {
        let location = Location::parse("login?next=%2Fa");
        assert_eq!("/login", location.pathname);
        assert_eq!(Route::from("/login?next=%2Fa"), location.route());
    }

    #[test]
    fn test_canonical_route() {
        assert_eq!(Route::from("/login"), Route::canonical("/login?#"));
        assert_eq!(Route::from("/login"), Route::canonical("login"));
        assert_eq!(Route::from("/a?x=1#top"), Route::canonical("/a?x=1#top"));
    }

    #[test]
    fn test_route_includes_query_and_fragment() {
        let location = Location::parse("/search?q=rust#results");
        assert_eq!(Route::from("/search?q=rust#results"), location.route());
        assert_ne!(Route::from("/search"), location.route());
    }

    #[test]
    fn test_route_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![Route::from("/a"), Route::from("/b?x=1")]).unwrap();
        assert_eq!("[\"/a\",\"/b?x=1\"]", json);
    }
}
