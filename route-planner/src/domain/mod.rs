//! Domain types for the route planner.
//!
//! This module contains the core value types shared by the network model,
//! the route search and the ranking engine. All types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod city;
mod error;
mod metric;
mod route;

pub use city::CityName;
pub use error::DomainError;
pub use metric::Metric;
pub use route::Route;
