//! Preset request patterns for demos and tests.
//!
//! Each preset generates twenty-ish requests mimicking a recognizable
//! workload over the default 200-track surface. The random variants take
//! the RNG as a parameter so callers (and tests) control seeding.

use rand::Rng;

use crate::models::Track;

/// A canned request-pattern generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetPattern {
    /// Evenly spaced ascending tracks, like sequential file reading.
    Sequential,
    /// Uniformly random tracks across the whole surface.
    Random,
    /// Random tracks confined to a narrow band, like an index scan.
    LocalizedRandom,
    /// Requests bouncing between the low and high ends of the surface,
    /// like two interleaved file operations.
    Alternating,
    /// Three tight runs of consecutive tracks, like clustered allocation.
    Clustered,
}

impl PresetPattern {
    /// All presets, in presentation order.
    pub const ALL: [PresetPattern; 5] = [
        PresetPattern::Sequential,
        PresetPattern::Random,
        PresetPattern::LocalizedRandom,
        PresetPattern::Alternating,
        PresetPattern::Clustered,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            PresetPattern::Sequential => "Sequential Access",
            PresetPattern::Random => "Random Access",
            PresetPattern::LocalizedRandom => "Localized Random",
            PresetPattern::Alternating => "Alternating Pattern",
            PresetPattern::Clustered => "Clustered Access",
        }
    }

    /// What workload the preset imitates.
    pub fn description(&self) -> &'static str {
        match self {
            PresetPattern::Sequential => "Simulates sequential file reading and writing",
            PresetPattern::Random => "Simulates random file access",
            PresetPattern::LocalizedRandom => "Simulates database index scanning",
            PresetPattern::Alternating => "Simulates concurrent file operations",
            PresetPattern::Clustered => "Simulates file system clustering",
        }
    }

    /// Generates the request list for this preset.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Track> {
        match self {
            PresetPattern::Sequential => (0..20).map(|i| i * 10).collect(),
            PresetPattern::Random => (0..20).map(|_| rng.random_range(0..200)).collect(),
            PresetPattern::LocalizedRandom => (0..20)
                .map(|_| {
                    let base: Track = rng.random_range(0..180);
                    base + rng.random_range(0..20)
                })
                .collect(),
            PresetPattern::Alternating => (0..20)
                .map(|i| if i % 2 == 0 { i * 15 } else { 199 - i * 15 })
                .collect(),
            PresetPattern::Clustered => (50..57).chain(120..127).chain(180..186).collect(),
        }
    }
}
