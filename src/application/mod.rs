//! Application layer: request construction, response interpretation and the
//! gateway operations built on them.
//!
//! `XenditGateway` is the entry point. Each operation is a single awaited
//! round trip through the transport port, except `verify`, which chains an
//! authorization and a void through `FirstResponse`.

pub mod builder;
pub mod gateway;
pub mod mapping;
pub mod sequence;
