//! Types shared by the dashboard core and its front ends: domain records,
//! error codes, the serialized event vocabulary, and the static fixtures.

pub mod domain;
pub mod error;
pub mod fixtures;
pub mod protocol;
