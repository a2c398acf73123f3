//! Policy dispatch and the order-driven algorithms.
//!
//! `schedule` is the engine's single entry point. FCFS and SSTF live here
//! because they service requests by arrival order and greedy proximity;
//! the four elevator policies delegate to the shared sweep routine.

use tracing::debug;

use super::policy::Policy;
use super::sweep::{sweep, SweepPlan};
use crate::models::{SeekPath, SimulationRequest};

/// Computes the service order and total head movement for one run.
///
/// Pure and total: identical inputs yield identical output, no state
/// survives the call, and every well-formed numeric input produces a
/// result. Out-of-range tracks are processed arithmetically rather than
/// rejected. An empty request set yields a path holding only the start
/// position and a zero seek count.
///
/// # Example
///
/// ```
/// use diskviz::models::SimulationRequest;
/// use diskviz::scheduler::{schedule, Policy};
///
/// let request = SimulationRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
/// let path = schedule(Policy::Fcfs, &request);
/// assert_eq!(path.seek_count, 640);
/// ```
pub fn schedule(policy: Policy, request: &SimulationRequest) -> SeekPath {
    if request.is_empty() {
        return SeekPath::starting_at(request.start);
    }

    let path = match policy {
        Policy::Fcfs => fcfs(request),
        Policy::Sstf => sstf(request),
        Policy::Scan => sweep(request, SweepPlan::SCAN),
        Policy::CScan => sweep(request, SweepPlan::C_SCAN),
        Policy::Look => sweep(request, SweepPlan::LOOK),
        Policy::CLook => sweep(request, SweepPlan::C_LOOK),
    };

    debug!(
        policy = policy.name(),
        requests = request.request_count(),
        seek_count = path.seek_count,
        "computed seek path"
    );
    path
}

/// Services requests in arrival order, no reordering.
fn fcfs(request: &SimulationRequest) -> SeekPath {
    let mut path = SeekPath::starting_at(request.start);
    for &track in &request.requests {
        path.push(track);
    }
    path
}

/// Repeatedly services the nearest pending request. A distance tie goes
/// to the earlier request in arrival order.
fn sstf(request: &SimulationRequest) -> SeekPath {
    let mut path = SeekPath::starting_at(request.start);
    let mut position = request.start;
    let mut visited = vec![false; request.requests.len()];

    for _ in 0..request.requests.len() {
        let mut nearest: Option<(usize, u64)> = None;
        for (i, &track) in request.requests.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let distance = position.abs_diff(track);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((i, distance));
            }
        }

        if let Some((i, _)) = nearest {
            visited[i] = true;
            position = request.requests[i];
            path.push(position);
        }
    }
    path
}
