//! Route planner over an undirected flight network.
//!
//! Enumerates every simple route between two cities and ranks them by total
//! cost or total time. Front ends: batch and interactive console sessions,
//! a one-shot query command, and a small web server.

pub mod cache;
pub mod console;
pub mod domain;
pub mod ingest;
pub mod network;
pub mod planner;
pub mod report;
pub mod web;
