//! Functional core of elphi-calendar.
//!
//! Everything in this crate is free of I/O: the iCalendar codec, the
//! upstream data types and their normalization, the error taxonomy and the
//! traits the server crate implements against the network.

pub mod cache;
pub mod calendar;
pub mod upstream;
