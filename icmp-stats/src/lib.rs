#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![no_std]

//! Typed ICMPv4 protocol statistics counters.
//!
//! The central entity is [`icmpv4::Icmpv4Stats`], a record of 26 wrapping
//! event counters: inbound and outbound variants of 13 ICMP message
//! categories. [`icmpv4::Icmpv4StatsRecord`] is the matching typed view over
//! a fixed 208-byte memory image of the same record.

#[macro_use]
mod macros;

mod traits;
pub use traits::{Buf, PktBufMut};

mod cursors;
pub use cursors::{Cursor, CursorMut};

mod counter;
pub use counter::Counter;

pub mod icmpv4;
