//! HTTP inbound adapter exposing REST endpoints.

pub mod health;
pub mod planned_production;
pub mod state;
