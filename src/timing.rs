//! Average disk access-time estimates.
//!
//! Pedagogical companion to the scheduling engine: where the engine
//! counts head movement in track units, this module estimates wall-clock
//! milliseconds for one average access on a parameterized drive. The two
//! are deliberately independent; no timing concept enters the engine.
//!
//! # Formulas
//!
//! | Component | Estimate |
//! |-----------|----------|
//! | Seek | one-third stroke: `total_tracks / 3 × per-track time` |
//! | Rotational latency | half a revolution |
//! | Transfer | `revolution time × bytes / track capacity` |

use serde::{Deserialize, Serialize};

/// Geometry and speed of a simulated drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskParameters {
    /// Number of addressable tracks.
    pub total_tracks: u32,
    /// Sectors on each track.
    pub sectors_per_track: u32,
    /// Bytes in each sector.
    pub bytes_per_sector: u32,
    /// Time for the head to cross one track (ms).
    pub head_movement_time_ms: f64,
    /// Spindle speed in revolutions per minute.
    pub rotation_speed_rpm: f64,
    /// Transfer size the estimate is computed for (bytes).
    pub bytes_to_transfer: u64,
}

impl Default for DiskParameters {
    fn default() -> Self {
        Self {
            total_tracks: 500,
            sectors_per_track: 100,
            bytes_per_sector: 500,
            head_movement_time_ms: 1.0,
            rotation_speed_rpm: 600.0,
            bytes_to_transfer: 250,
        }
    }
}

impl DiskParameters {
    /// Sets the number of addressable tracks.
    pub fn with_total_tracks(mut self, tracks: u32) -> Self {
        self.total_tracks = tracks;
        self
    }

    /// Sets the per-track head movement time (ms).
    pub fn with_head_movement_time_ms(mut self, ms: f64) -> Self {
        self.head_movement_time_ms = ms;
        self
    }

    /// Sets the spindle speed (RPM).
    pub fn with_rotation_speed_rpm(mut self, rpm: f64) -> Self {
        self.rotation_speed_rpm = rpm;
        self
    }

    /// Sets the transfer size the estimate is computed for (bytes).
    pub fn with_bytes_to_transfer(mut self, bytes: u64) -> Self {
        self.bytes_to_transfer = bytes;
        self
    }

    /// Bytes stored on one track.
    pub fn bytes_per_track(&self) -> u64 {
        u64::from(self.sectors_per_track) * u64::from(self.bytes_per_sector)
    }

    /// Duration of one full revolution (ms).
    pub fn ms_per_rotation(&self) -> f64 {
        60_000.0 / self.rotation_speed_rpm
    }
}

/// Average-case access timings for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskTimings {
    /// Average seek time (ms).
    pub seek_time_ms: f64,
    /// Average rotational latency (ms).
    pub rotational_latency_ms: f64,
    /// Transfer time for the configured byte count (ms).
    pub transfer_time_ms: f64,
    /// Sum of the three components (ms).
    pub total_time_ms: f64,
}

impl DiskTimings {
    /// Computes average-case timings for the given drive.
    pub fn calculate(params: &DiskParameters) -> Self {
        let seek_time_ms = f64::from(params.total_tracks) / 3.0 * params.head_movement_time_ms;
        let ms_per_rotation = params.ms_per_rotation();
        let rotational_latency_ms = ms_per_rotation / 2.0;
        let transfer_time_ms =
            ms_per_rotation * params.bytes_to_transfer as f64 / params.bytes_per_track() as f64;

        Self {
            seek_time_ms,
            rotational_latency_ms,
            transfer_time_ms,
            total_time_ms: seek_time_ms + rotational_latency_ms + transfer_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drive_timings() {
        let timings = DiskTimings::calculate(&DiskParameters::default());
        // 500 tracks / 3 × 1 ms
        assert!((timings.seek_time_ms - 166.666_666).abs() < 1e-3);
        // 600 RPM → 100 ms per revolution → 50 ms half-turn
        assert!((timings.rotational_latency_ms - 50.0).abs() < 1e-10);
        // 100 ms × 250 bytes / 50_000 bytes per track
        assert!((timings.transfer_time_ms - 0.5).abs() < 1e-10);
        assert!(
            (timings.total_time_ms
                - (timings.seek_time_ms + timings.rotational_latency_ms + timings.transfer_time_ms))
                .abs()
                < 1e-10
        );
    }

    #[test]
    fn test_faster_spindle_cuts_latency_and_transfer() {
        let slow = DiskTimings::calculate(&DiskParameters::default());
        let fast =
            DiskTimings::calculate(&DiskParameters::default().with_rotation_speed_rpm(7200.0));
        assert!(fast.rotational_latency_ms < slow.rotational_latency_ms);
        assert!(fast.transfer_time_ms < slow.transfer_time_ms);
        // Seek time is unaffected by spindle speed.
        assert!((fast.seek_time_ms - slow.seek_time_ms).abs() < 1e-10);
    }

    #[test]
    fn test_builder() {
        let params = DiskParameters::default()
            .with_total_tracks(1000)
            .with_head_movement_time_ms(0.5)
            .with_bytes_to_transfer(1000);
        assert_eq!(params.total_tracks, 1000);

        let timings = DiskTimings::calculate(&params);
        // 1000 / 3 × 0.5
        assert!((timings.seek_time_ms - 166.666_666).abs() < 1e-3);
        // 100 ms × 1000 / 50_000
        assert!((timings.transfer_time_ms - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_bytes_per_track() {
        assert_eq!(DiskParameters::default().bytes_per_track(), 50_000);
    }
}
