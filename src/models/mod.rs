//! Disk-scheduling domain models.
//!
//! Provides the core data types for describing one simulation run: the
//! pending track requests with the head's starting position, and the
//! resulting seek path.
//!
//! A simulation run is a single deterministic batch: a request set, a head
//! position, and a policy go in; an ordered visitation path and its total
//! head movement come out. Nothing persists between runs.

mod path;
mod request;

pub use path::{SeekPath, SeekStep};
pub use request::{Direction, SimulationRequest, Track, DEFAULT_DISK_SIZE};
