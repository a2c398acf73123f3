//! Simulation input model.
//!
//! A [`SimulationRequest`] bundles everything one scheduling run needs:
//! the pending track requests, the head's starting position, the initial
//! sweep direction, and the highest addressable track.

use serde::{Deserialize, Serialize};

/// A track number on the simulated disk surface.
///
/// Tracks are conceptually non-negative and bounded by the disk size, but
/// the engine deliberately performs no bounds checking: out-of-range (even
/// negative) values are carried through the seek arithmetic unchanged.
/// The signed, wide representation keeps that arithmetic total.
pub type Track = i64;

/// Highest addressable track on the default simulated surface.
pub const DEFAULT_DISK_SIZE: Track = 199;

/// Initial head movement direction for the elevator-family policies.
///
/// FCFS and SSTF ignore the direction; SCAN, C-SCAN, LOOK, and C-LOOK
/// begin their first sweep this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Sweep toward higher track numbers first.
    #[default]
    Up,
    /// Sweep toward track 0 first.
    Down,
}

/// Input container for one scheduling run.
///
/// Duplicate requests are permitted and serviced independently; each
/// occurrence is visited and counted on its own.
///
/// # Example
///
/// ```
/// use diskviz::models::{Direction, SimulationRequest};
///
/// let request = SimulationRequest::new(vec![95, 180, 34, 119], 50)
///     .with_direction(Direction::Up)
///     .with_disk_size(199);
/// assert_eq!(request.start, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Pending track requests, in arrival order.
    pub requests: Vec<Track>,
    /// Head position before the first seek.
    pub start: Track,
    /// Initial sweep direction (elevator-family policies only).
    pub direction: Direction,
    /// Highest addressable track.
    pub disk_size: Track,
}

impl SimulationRequest {
    /// Creates a request with the default direction and disk size.
    pub fn new(requests: Vec<Track>, start: Track) -> Self {
        Self {
            requests,
            start,
            direction: Direction::default(),
            disk_size: DEFAULT_DISK_SIZE,
        }
    }

    /// Sets the initial sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the highest addressable track.
    pub fn with_disk_size(mut self, disk_size: Track) -> Self {
        self.disk_size = disk_size;
        self
    }

    /// Whether there are no pending requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Number of pending requests (duplicates counted).
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }
}
