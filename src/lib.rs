//! Disk head-scheduling engine for the DiskViz visualizer.
//!
//! Computes deterministic service orders and total head movement ("seek
//! count") for a batch of pending track requests under the six classical
//! HDD scheduling policies: FCFS, SSTF, SCAN, C-SCAN, LOOK, and C-LOOK.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Track`, `Direction`, `SimulationRequest`,
//!   `SeekPath`
//! - **`scheduler`**: The policy engine — `Policy`, `schedule`
//! - **`compare`**: Ranked side-by-side policy comparison
//! - **`input`**: Text parsing for request lists and start positions
//! - **`timing`**: Average seek/rotation/transfer time estimates
//! - **`patterns`**: Preset request-pattern generators for demos and tests
//!
//! # Design
//!
//! Every policy is a pure function from `(requests, start position)` to
//! `(service order, seek count)`. No state survives a call, so concurrent
//! invocations — for instance running all six policies for a comparison
//! view — need no coordination.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", §5.4

pub mod compare;
pub mod input;
pub mod models;
pub mod patterns;
pub mod scheduler;
pub mod timing;
