use super::probe::HostProbe;
use super::types::Environment;

/// Snapshot the whole environment table. Nothing is filtered or redacted.
pub fn read(probe: &dyn HostProbe) -> Environment {
    probe.env_vars()
}
