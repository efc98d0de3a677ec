//! Request routing.
//!
//! Routes are matched on the request path only, against a fixed table that is
//! evaluated top to bottom:
//!
//! | Kind   | Pattern       | Handler    |
//! |--------|---------------|------------|
//! | exact  | `/`           | root       |
//! | prefix | `/echo/`      | echo       |
//! | exact  | `/user-agent` | user-agent |
//! | prefix | `/files/`     | files      |
//!
//! Anything else is a 404.

pub mod router;

pub use router::{HandlerKind, MatchKind, Route, RouteEntry, Router, ROUTES};
