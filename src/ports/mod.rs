//! Ports - boundaries between the searches and their observers
//!
//! The placement search reports each step through these traits so a front
//! end can animate or record it without the search knowing how.

pub mod observer;

pub use observer::PlacementObserver;
