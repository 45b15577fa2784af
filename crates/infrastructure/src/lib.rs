//! Ferrous Responder Infrastructure Layer
pub mod dns;
