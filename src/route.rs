//! Route object and DSL

mod descriptor;
mod group;

pub use descriptor::Route;
pub use group::{RouteBuilder, RouteGroup};
