//! Policy selector.
//!
//! The six policies form a closed set: dispatch is an exhaustive match,
//! so an unknown selector cannot reach the engine. Unrecognized policy
//! *names* are rejected at the parsing boundary with [`InvalidPolicy`]
//! rather than silently mapped to a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The classical head-scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-Come First-Served: service requests strictly in arrival order.
    Fcfs,
    /// Shortest Seek Time First: always service the nearest pending
    /// request. Minimizes per-step movement but can starve distant
    /// requests.
    Sstf,
    /// Elevator sweep to the physical disk edge, then reverse.
    Scan,
    /// Circular SCAN: sweep to the disk edge, return to track 0 in one
    /// long seek, and continue in the same logical direction.
    CScan,
    /// Like SCAN, but turn around at the outermost pending request
    /// instead of the disk edge.
    Look,
    /// Circular LOOK: jump from the outermost request straight to the
    /// innermost pending one.
    CLook,
}

impl Policy {
    /// All policies, in canonical presentation order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::CScan,
        Policy::Look,
        Policy::CLook,
    ];

    /// Short display name (e.g. "C-SCAN").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
            Policy::Look => "LOOK",
            Policy::CLook => "C-LOOK",
        }
    }

    /// Longer human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come First-Served",
            Policy::Sstf => "Shortest Seek Time First",
            Policy::Scan => "Elevator sweep to the disk edge",
            Policy::CScan => "Circular elevator sweep with wraparound",
            Policy::Look => "Elevator sweep to the last request",
            Policy::CLook => "Circular sweep to the last request",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a policy name that matches none of the known variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduling policy '{0}'")]
pub struct InvalidPolicy(pub String);

impl FromStr for Policy {
    type Err = InvalidPolicy;

    /// Parses the selector ids used by the visualizer ("fcfs", "cscan",
    /// ...), case-insensitively, with hyphenated aliases ("c-scan").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sstf" => Ok(Policy::Sstf),
            "scan" => Ok(Policy::Scan),
            "cscan" | "c-scan" => Ok(Policy::CScan),
            "look" => Ok(Policy::Look),
            "clook" | "c-look" => Ok(Policy::CLook),
            _ => Err(InvalidPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!("fcfs".parse::<Policy>(), Ok(Policy::Fcfs));
        assert_eq!("sstf".parse::<Policy>(), Ok(Policy::Sstf));
        assert_eq!("scan".parse::<Policy>(), Ok(Policy::Scan));
        assert_eq!("cscan".parse::<Policy>(), Ok(Policy::CScan));
        assert_eq!("look".parse::<Policy>(), Ok(Policy::Look));
        assert_eq!("clook".parse::<Policy>(), Ok(Policy::CLook));
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!("C-SCAN".parse::<Policy>(), Ok(Policy::CScan));
        assert_eq!("c-look".parse::<Policy>(), Ok(Policy::CLook));
        assert_eq!(" FCFS ".parse::<Policy>(), Ok(Policy::Fcfs));
    }

    #[test]
    fn test_unknown_name_is_rejected_not_defaulted() {
        let err = "fifo".parse::<Policy>().unwrap_err();
        assert_eq!(err, InvalidPolicy("fifo".to_string()));
        assert_eq!(err.to_string(), "unknown scheduling policy 'fifo'");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Policy::CScan.to_string(), "C-SCAN");
        assert_eq!(Policy::Fcfs.to_string(), "FCFS");
    }

    #[test]
    fn test_all_is_complete_and_unique() {
        assert_eq!(Policy::ALL.len(), 6);
        for (i, a) in Policy::ALL.iter().enumerate() {
            for b in &Policy::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serde_ids_match_selector_ids() {
        let json = serde_json::to_string(&Policy::CScan).expect("serialize");
        assert_eq!(json, "\"cscan\"");
        let back: Policy = serde_json::from_str("\"clook\"").expect("deserialize");
        assert_eq!(back, Policy::CLook);
    }
}
