use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full process environment, key-sorted.
pub type Environment = BTreeMap<String, String>;

/// One complete, timestamped aggregation of every fact category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    pub hostname: String,
    pub platform: PlatformFacts,
    pub environment: Environment,
    pub kubernetes: OrchestrationFacts,
    pub resources: Probed<ResourceFacts>,
    pub network: Probed<NetworkFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestFacts>,
}

/// Outcome of a reader that talks to OS counters.
///
/// Serialized untagged: either the facts themselves or `{ "Error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Probed<T> {
    Ok(T),
    Failed {
        #[serde(rename = "Error")]
        error: String,
    },
}

impl<T> Probed<T> {
    pub fn failed(error: impl ToString) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }

    pub fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(facts) => Some(facts),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Failed { error } => Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFacts {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "System")]
    pub system: String,
    #[serde(rename = "Release")]
    pub release: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Machine")]
    pub machine: String,
    #[serde(rename = "Processor")]
    pub processor: String,
    #[serde(rename = "Runtime Version")]
    pub runtime_version: String,
}

/// Whether a container-orchestrator marker was found on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Yes,
    No,
}

impl From<bool> for Presence {
    fn from(present: bool) -> Self {
        if present {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Orchestrator metadata keyed by human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestrationFacts {
    #[serde(flatten)]
    pub labels: BTreeMap<String, String>,
    #[serde(rename = "In Kubernetes")]
    pub in_kubernetes: Presence,
}

/// Resource usage, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFacts {
    #[serde(rename = "CPU Usage")]
    pub cpu_usage: String,
    #[serde(rename = "CPU Count")]
    pub cpu_count: String,
    #[serde(rename = "Memory Total")]
    pub memory_total: String,
    #[serde(rename = "Memory Used")]
    pub memory_used: String,
    #[serde(rename = "Memory Percent")]
    pub memory_percent: String,
    #[serde(rename = "Disk Total")]
    pub disk_total: String,
    #[serde(rename = "Disk Used")]
    pub disk_used: String,
    #[serde(rename = "Disk Percent")]
    pub disk_percent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFacts {
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "FQDN")]
    pub fqdn: String,
    /// `Interface <name>` → IPv4 address.
    #[serde(flatten)]
    pub interfaces: BTreeMap<String, String>,
    #[serde(rename = "IP Address")]
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFacts {
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Remote Address")]
    pub remote_address: String,
    #[serde(rename = "User Agent")]
    pub user_agent: String,
    #[serde(rename = "Headers")]
    pub headers: BTreeMap<String, String>,
}
