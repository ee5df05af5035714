//! Test-harness scaffolding: random fixture data and a logging adapter.
//!
//! External collaborators of the validators, never called by them. Host test
//! suites use [`DataGen`] for fixture values and [`logging`] to route tracing
//! records into the output captured for the running test.

pub mod datagen;
pub mod logging;

pub use datagen::DataGen;
