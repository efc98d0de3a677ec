/// How a route pattern is compared against the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Path must equal the pattern.
    Exact,
    /// Path must start with the pattern; the rest is passed to the handler.
    Prefix,
}

/// Which handler family a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Root,
    Echo,
    UserAgent,
    Files,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub kind: MatchKind,
    pub pattern: &'static str,
    pub handler: HandlerKind,
}

impl RouteEntry {
    const fn exact(pattern: &'static str, handler: HandlerKind) -> Self {
        Self {
            kind: MatchKind::Exact,
            pattern,
            handler,
        }
    }

    const fn prefix(pattern: &'static str, handler: HandlerKind) -> Self {
        Self {
            kind: MatchKind::Prefix,
            pattern,
            handler,
        }
    }

    /// Returns the remainder of `path` after the pattern when it matches.
    /// Exact matches leave an empty remainder.
    pub fn matches<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self.kind {
            MatchKind::Exact => (path == self.pattern).then_some(""),
            MatchKind::Prefix => path.strip_prefix(self.pattern),
        }
    }
}

/// Route table, first match wins.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry::exact("/", HandlerKind::Root),
    RouteEntry::prefix("/echo/", HandlerKind::Echo),
    RouteEntry::exact("/user-agent", HandlerKind::UserAgent),
    RouteEntry::prefix("/files/", HandlerKind::Files),
];

/// A resolved route, borrowing its argument from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Root,
    /// Text after `/echo/`, verbatim. May be empty or contain `/`.
    Echo(&'a str),
    UserAgent,
    /// File name after `/files/`. Never empty.
    File(&'a str),
    NotFound,
}

#[derive(Debug, Clone, Copy)]
pub struct Router {
    routes: &'static [RouteEntry],
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self { routes: ROUTES }
    }

    pub fn resolve<'a>(&self, path: &'a str) -> Route<'a> {
        for entry in self.routes {
            let Some(rest) = entry.matches(path) else {
                continue;
            };

            return match entry.handler {
                HandlerKind::Root => Route::Root,
                HandlerKind::Echo => Route::Echo(rest),
                HandlerKind::UserAgent => Route::UserAgent,
                HandlerKind::Files if rest.is_empty() => Route::NotFound,
                HandlerKind::Files => Route::File(rest),
            };
        }

        Route::NotFound
    }
}
