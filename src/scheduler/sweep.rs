//! Shared sweep routine for the elevator-family policies.
//!
//! SCAN, C-SCAN, LOOK, and C-LOOK all sort the pending requests, split
//! them at the head position, and traverse one partition before turning
//! around. They differ in exactly two choices: whether the primary sweep
//! runs past the outermost request to the physical disk edge, and whether
//! the turnaround is a reversal or a wrap to the far side. [`SweepPlan`]
//! captures both so the four policies share one implementation.

use crate::models::{Direction, SeekPath, SimulationRequest, Track};

/// Whether the primary sweep runs to the physical disk edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeRule {
    /// Continue to the boundary track (disk size going up, 0 going down)
    /// unless the outermost request already sits at or beyond it.
    RunToEdge,
    /// Stop at the outermost pending request.
    StopAtLast,
}

/// How the head continues once the primary sweep is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Turnaround {
    /// Reverse and service the remaining partition moving back.
    Reverse,
    /// Continue in the same logical direction: wrap to the far side (after
    /// an edge run) or jump straight to the remaining partition's first
    /// request, then service it in sweep order.
    Wrap,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SweepPlan {
    pub edge: EdgeRule,
    pub turnaround: Turnaround,
}

impl SweepPlan {
    pub(crate) const SCAN: SweepPlan = SweepPlan {
        edge: EdgeRule::RunToEdge,
        turnaround: Turnaround::Reverse,
    };
    pub(crate) const C_SCAN: SweepPlan = SweepPlan {
        edge: EdgeRule::RunToEdge,
        turnaround: Turnaround::Wrap,
    };
    pub(crate) const LOOK: SweepPlan = SweepPlan {
        edge: EdgeRule::StopAtLast,
        turnaround: Turnaround::Reverse,
    };
    pub(crate) const C_LOOK: SweepPlan = SweepPlan {
        edge: EdgeRule::StopAtLast,
        turnaround: Turnaround::Wrap,
    };
}

/// Runs the parameterized elevator sweep.
///
/// Requests equal to the start position are serviced by the primary sweep
/// in either direction.
pub(crate) fn sweep(request: &SimulationRequest, plan: SweepPlan) -> SeekPath {
    let mut sorted = request.requests.clone();
    sorted.sort_unstable();

    let mut path = SeekPath::starting_at(request.start);
    if sorted.is_empty() {
        return path;
    }

    // First index at or above the head; everything below it belongs to
    // the downward partition.
    let head_index = sorted.partition_point(|&t| t < request.start);

    match request.direction {
        Direction::Up => sweep_up(&sorted, head_index, request, plan, &mut path),
        Direction::Down => sweep_down(&sorted, head_index, request, plan, &mut path),
    }
    path
}

fn sweep_up(
    sorted: &[Track],
    head_index: usize,
    request: &SimulationRequest,
    plan: SweepPlan,
    path: &mut SeekPath,
) {
    for &track in &sorted[head_index..] {
        path.push(track);
    }

    if plan.edge == EdgeRule::RunToEdge {
        if let Some(&max) = sorted.last() {
            if max < request.disk_size {
                path.push(request.disk_size);
            }
        }
    }

    match plan.turnaround {
        Turnaround::Reverse => {
            for &track in sorted[..head_index].iter().rev() {
                path.push(track);
            }
        }
        Turnaround::Wrap => {
            // C-SCAN passes through the origin even when nothing below the
            // head is pending; C-LOOK jumps only if something is.
            if plan.edge == EdgeRule::RunToEdge {
                path.push(0);
            }
            for &track in &sorted[..head_index] {
                path.push(track);
            }
        }
    }
}

fn sweep_down(
    sorted: &[Track],
    head_index: usize,
    request: &SimulationRequest,
    plan: SweepPlan,
    path: &mut SeekPath,
) {
    for &track in sorted[..head_index].iter().rev() {
        path.push(track);
    }

    if plan.edge == EdgeRule::RunToEdge {
        if let Some(&min) = sorted.first() {
            if min > 0 {
                path.push(0);
            }
        }
    }

    match plan.turnaround {
        Turnaround::Reverse => {
            for &track in &sorted[head_index..] {
                path.push(track);
            }
        }
        Turnaround::Wrap => {
            if plan.edge == EdgeRule::RunToEdge {
                path.push(request.disk_size);
            }
            for &track in sorted[head_index..].iter().rev() {
                path.push(track);
            }
        }
    }
}
