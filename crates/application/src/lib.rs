//! Ferrous Responder Application Layer
//!
//! Ports implemented by the infrastructure crate and consumed by the stages
//! that make up a query pipeline.
pub mod ports;
