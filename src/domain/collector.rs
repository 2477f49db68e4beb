//! Snapshot collector — composes every reader into one `Snapshot`.
//!
//! Resource and network readers touch OS counters and may block, so they run
//! concurrently on the blocking pool. The cheap readers run inline. Nothing is
//! cached between calls.

use std::sync::Arc;
use std::time::Instant;

use axum::http::request::Parts;
use chrono::Utc;
use tracing::{debug, warn};

use super::probe::{HostProbe, ProbeError, SysinfoProbe};
use super::types::{Probed, Snapshot};
use super::{environment, network, orchestration, platform, request, resources};

#[derive(Clone)]
pub struct SnapshotCollector {
    probe: Arc<dyn HostProbe>,
}

impl SnapshotCollector {
    pub fn new(probe: Arc<dyn HostProbe>) -> Self {
        Self { probe }
    }

    /// Collector backed by the live machine.
    pub fn live() -> Self {
        Self::new(Arc::new(SysinfoProbe))
    }

    /// Collect a fresh snapshot. Request facts are attached only when `inbound` is supplied.
    pub async fn collect(&self, inbound: Option<&Parts>) -> Snapshot {
        let started = Instant::now();
        let timestamp = Utc::now();

        let resources_probe = Arc::clone(&self.probe);
        let network_probe = Arc::clone(&self.probe);
        let (resources, network) = tokio::join!(
            tokio::task::spawn_blocking(move || resources::read(resources_probe.as_ref())),
            tokio::task::spawn_blocking(move || network::read(network_probe.as_ref())),
        );

        let probe = self.probe.as_ref();
        let snapshot = Snapshot {
            timestamp,
            hostname: probe.hostname(),
            platform: platform::read(probe),
            environment: environment::read(probe),
            kubernetes: orchestration::read(probe),
            resources: guard("resources", resources.unwrap_or_else(|e| Err(e.into()))),
            network: guard("network", network.unwrap_or_else(|e| Err(e.into()))),
            request: inbound.map(request::read),
        };

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            resources_ok = snapshot.resources.as_ok().is_some(),
            network_ok = snapshot.network.error().is_none(),
            with_request = snapshot.request.is_some(),
            "snapshot collected"
        );

        snapshot
    }
}

/// Contain a reader failure: log it and substitute the `{ Error }` sentinel.
fn guard<T>(section: &'static str, result: Result<T, ProbeError>) -> Probed<T> {
    result.map(Probed::Ok).unwrap_or_else(|e| {
        warn!(section, error = %e, "failed to collect {}", section);
        Probed::failed(e)
    })
}
