//! Callback router.
//!
//! Navigation never touches the browser location: a path like `/detail` is
//! reduced to its first segment, which selects a registered handler. Anything
//! unmatched goes to the `default` handler, if there is one.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

pub const DEFAULT_ROUTE: &str = "default";

pub type Handler = Rc<dyn Fn(&NavigationEvent)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Number(i64),
}

impl QueryValue {
    /// Query strings carry text only; integers are recovered here.
    pub fn parse(value: &str) -> Self {
        value
            .parse::<i64>()
            .map(Self::Number)
            .unwrap_or_else(|_| Self::Text(value.to_owned()))
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Number(n) => usize::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<usize> for QueryValue {
    fn from(n: usize) -> Self {
        i64::try_from(n)
            .map(Self::Number)
            .unwrap_or_else(|_| Self::Text(n.to_string()))
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(BTreeMap<String, QueryValue>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `a=1&b=two`.
    pub fn parse(query: &str) -> Self {
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), QueryValue::parse(&value)))
            .collect()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for Query {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub path: String,
    pub query: Query,
}

/// Which handler, if any, a redirect reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Matched(String),
    Fallback,
    Unhandled,
}

#[derive(Default)]
pub struct Router {
    routes: RefCell<HashMap<String, Handler>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any previous handler.
    pub fn set_router_func(
        &self,
        name: impl Into<String>,
        handler: impl Fn(&NavigationEvent) + 'static,
    ) {
        let name = name.into();
        let replaced = self
            .routes
            .borrow_mut()
            .insert(name.clone(), Rc::new(handler))
            .is_some();
        if replaced {
            log::debug!("route {name:?} replaced");
        } else {
            log::debug!("route {name:?} registered");
        }
    }

    #[cfg(test)]
    pub fn has_route(&self, name: &str) -> bool {
        self.routes.borrow().contains_key(name)
    }

    /// Runs the handler for the first segment of `path`, falling back to
    /// [`DEFAULT_ROUTE`]. The handler finishes before this returns.
    pub fn redirect(&self, path: &str, query: Query) -> Dispatch {
        let name = route_name(path);
        let (handler, dispatch) = {
            let routes = self.routes.borrow();
            match name.and_then(|name| routes.get(name).map(|h| (h, name))) {
                Some((handler, name)) => (
                    Some(Rc::clone(handler)),
                    Dispatch::Matched(name.to_owned()),
                ),
                None => match routes.get(DEFAULT_ROUTE) {
                    Some(handler) => (Some(Rc::clone(handler)), Dispatch::Fallback),
                    None => (None, Dispatch::Unhandled),
                },
            }
        };

        log::debug!("redirect {path:?} -> {dispatch:?}");

        if let Some(handler) = handler {
            handler(&NavigationEvent {
                path: path.to_owned(),
                query,
            });
        }
        dispatch
    }

    /// Like [`Self::redirect`], with the query taken from `target` itself,
    /// e.g. `/detail?index=1`.
    pub fn navigate(&self, target: &str) -> Dispatch {
        let target = target.split_once('#').map_or(target, |(before, _)| before);
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Query::parse(query)),
            None => (target, Query::new()),
        };
        self.redirect(path, query)
    }
}

/// First non-empty path segment, ignoring any query or fragment.
fn route_name(path: &str) -> Option<&str> {
    let end = path.find(&['?', '#'][..]).unwrap_or(path.len());
    path[..end]
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}
