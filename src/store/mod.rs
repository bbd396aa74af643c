//! Store Module
//!
//! In-memory key-value storage shared by every request the server handles.

mod kv;


pub use kv::{SharedStore, Store};
