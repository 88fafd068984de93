//! Route planner.
//!
//! This module implements the core planning algorithm that answers:
//! "What are all the ways from here to there, and which are cheapest
//! (or quickest)?"
//!
//! The search enumerates every simple path with explicit-stack
//! backtracking; the results are then ordered with a heap sort.

mod config;
mod rank;
mod search;


pub use config::PlannerConfig;
pub use rank::{RankError, heap_sort_by, rank_routes, rerank};
pub use search::{
    ConnectionProvider, Planner, RouteRequest, SearchError, SearchResult, plan_routes,
};
