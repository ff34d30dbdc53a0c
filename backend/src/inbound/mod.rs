//! Inbound adapters that translate external requests into gateway calls
//! while keeping framework details at the edge.

pub mod http;
