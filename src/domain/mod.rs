//! Value types shared by the request builder and the executor, and the
//! transport port the executor talks through.

pub mod card;
pub mod info;
pub mod intent;
pub mod operation;
pub mod payload;
pub mod ports;
pub mod response;
