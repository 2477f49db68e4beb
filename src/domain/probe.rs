//! Host probe — the narrow seam through which readers touch the OS.
//!
//! Readers are pure functions of a `HostProbe`. `SysinfoProbe` answers from
//! the live machine; tests substitute fixed values.

use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::Path;

use sysinfo::{CpuRefreshKind, Disks, Networks, RefreshKind, System};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("system information is not available on this platform")]
    Unsupported,
    #[error("no CPUs reported by the operating system")]
    NoCpus,
    #[error("memory counters are unavailable")]
    MemoryUnavailable,
    #[error("collection task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for ProbeError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Task(e.to_string())
    }
}

/// Static OS identity, as far as the OS reports it.
#[derive(Debug, Clone, Default)]
pub struct OsIdentity {
    pub kernel_version: Option<String>,
    pub long_os_version: Option<String>,
    pub cpu_brand: Option<String>,
}

/// Raw counters behind `ResourceFacts`. Byte quantities are raw bytes.
#[derive(Debug, Clone, Default)]
pub struct ResourceCounters {
    pub cpu_usage_percent: f32,
    pub cpu_count: usize,
    pub memory_total: u64,
    pub memory_used: u64,
    pub disks: Vec<DiskUsage>,
}

#[derive(Debug, Clone, Default)]
pub struct DiskUsage {
    pub mount_point: String,
    pub total: u64,
    pub used: u64,
}

#[derive(Debug, Clone)]
pub struct InterfaceAddrs {
    pub name: String,
    pub addrs: Vec<IpAddr>,
}

pub trait HostProbe: Send + Sync {
    fn hostname(&self) -> String;

    fn env_vars(&self) -> BTreeMap<String, String>;

    /// Existence check; any error counts as absent.
    fn path_exists(&self, path: &Path) -> bool;

    fn os_identity(&self) -> OsIdentity;

    /// May block while CPU usage is sampled.
    fn resource_counters(&self) -> Result<ResourceCounters, ProbeError>;

    fn interfaces(&self) -> Result<Vec<InterfaceAddrs>, ProbeError>;
}

/// Live probe backed by `sysinfo`, `hostname` and `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProbe;

impl HostProbe for SysinfoProbe {
    fn hostname(&self) -> String {
        hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".into())
    }

    fn env_vars(&self) -> BTreeMap<String, String> {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }

    fn os_identity(&self) -> OsIdentity {
        // Listing CPUs is enough for the brand; no usage or frequency reads
        let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
        let cpu_brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        OsIdentity {
            kernel_version: System::kernel_version(),
            long_os_version: System::long_os_version(),
            cpu_brand,
        }
    }

    fn resource_counters(&self) -> Result<ResourceCounters, ProbeError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(ProbeError::Unsupported);
        }

        // CPU usage is a delta between two refreshes
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        if sys.cpus().is_empty() {
            return Err(ProbeError::NoCpus);
        }
        if sys.total_memory() == 0 {
            return Err(ProbeError::MemoryUnavailable);
        }

        let disks = Disks::new_with_refreshed_list()
            .list()
            .iter()
            .map(|d| DiskUsage {
                mount_point: d.mount_point().to_string_lossy().to_string(),
                total: d.total_space(),
                used: d.total_space().saturating_sub(d.available_space()),
            })
            .collect();

        Ok(ResourceCounters {
            cpu_usage_percent: sys.global_cpu_usage(),
            cpu_count: sys.cpus().len(),
            memory_total: sys.total_memory(),
            memory_used: sys.used_memory(),
            disks,
        })
    }

    fn interfaces(&self) -> Result<Vec<InterfaceAddrs>, ProbeError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(ProbeError::Unsupported);
        }

        let networks = Networks::new_with_refreshed_list();
        Ok(networks
            .iter()
            .map(|(name, data)| InterfaceAddrs {
                name: name.to_string(),
                addrs: data.ip_networks().iter().map(|net| net.addr).collect(),
            })
            .collect())
    }
}
