//! Functional core for the orders service.
//!
//! Pure data types and pure functions: decoding order payloads, encoding
//! response envelopes, and the storage seam the shell implements.

pub mod order;
pub mod storage;
