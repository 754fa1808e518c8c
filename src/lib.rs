//! Workflow action for mycounter.io: read or update a named counter
//! from a CI step.
//!
//! One invocation is one run — resolve the inputs, decode the requested
//! action, make a single HTTP call, publish the outputs.

pub mod action;
pub mod client;
pub mod error;
pub mod inputs;
pub mod runner;
pub mod workflow;
