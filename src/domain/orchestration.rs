//! Orchestration metadata reader — Kubernetes hints from env and filesystem.

use std::collections::BTreeMap;
use std::path::Path;

use super::probe::HostProbe;
use super::types::{OrchestrationFacts, Presence};

/// Variables that orchestrators (or the downward API) commonly inject.
const KUBERNETES_VARS: &[(&str, &str)] = &[
    ("KUBERNETES_SERVICE_HOST", "Kubernetes Service Host"),
    ("KUBERNETES_SERVICE_PORT", "Kubernetes Service Port"),
    ("HOSTNAME", "Pod Hostname"),
    ("POD_NAME", "Pod Name"),
    ("POD_NAMESPACE", "Pod Namespace"),
    ("POD_IP", "Pod IP"),
    ("NODE_NAME", "Node Name"),
    ("SERVICE_ACCOUNT", "Service Account"),
];

/// Mounted into every pod that has a service account.
pub const SERVICE_ACCOUNT_DIR: &str = "/var/run/secrets/kubernetes.io";

pub fn read(probe: &dyn HostProbe) -> OrchestrationFacts {
    let env = probe.env_vars();

    let labels: BTreeMap<String, String> = KUBERNETES_VARS
        .iter()
        .filter_map(|(var, label)| {
            env.get(*var)
                .filter(|value| !value.is_empty())
                .map(|value| (label.to_string(), value.clone()))
        })
        .collect();

    OrchestrationFacts {
        labels,
        in_kubernetes: Presence::from(probe.path_exists(Path::new(SERVICE_ACCOUNT_DIR))),
    }
}
