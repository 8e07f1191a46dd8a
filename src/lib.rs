//! Single-Shot HTTP/1.x Server Toolkit
//!
//! One request in, one response out, then the connection closes. The wire
//! format is a deliberate HTTP/1.x dialect: verbatim request tokens, headers
//! under their exact first-seen casing, a fixed `OK` reason phrase and single
//! `\n` line terminators.
#![warn(missing_debug_implementations)]

mod log;

pub mod error;
pub mod headers;
pub mod body;
pub mod request;
pub mod response;
pub mod service;
pub mod server;
