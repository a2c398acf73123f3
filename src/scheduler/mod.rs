//! The head-scheduling policy engine.
//!
//! Provides the closed set of classical policies and the single entry
//! point that computes a seek path for one simulation run.
//!
//! # Usage
//!
//! ```
//! use diskviz::models::SimulationRequest;
//! use diskviz::scheduler::{schedule, Policy};
//!
//! let request = SimulationRequest::new(vec![95, 180, 34, 119], 50);
//! let path = schedule(Policy::Scan, &request);
//! assert_eq!(path.tracks, vec![50, 95, 119, 180, 199, 34]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling
//!   Policies"

mod engine;
mod policy;
mod sweep;

pub use engine::schedule;
pub use policy::{InvalidPolicy, Policy};
