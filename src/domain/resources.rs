//! Resource reader — CPU, memory and disk usage in display units.

use super::probe::{DiskUsage, HostProbe, ProbeError};
use super::types::ResourceFacts;

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// Read and format resource counters. Blocks while CPU usage is sampled.
pub fn read(probe: &dyn HostProbe) -> Result<ResourceFacts, ProbeError> {
    let counters = probe.resource_counters()?;
    let disk = primary_disk(&counters.disks);

    Ok(ResourceFacts {
        cpu_usage: fmt_percent(f64::from(counters.cpu_usage_percent)),
        cpu_count: counters.cpu_count.to_string(),
        memory_total: fmt_gib(counters.memory_total),
        memory_used: fmt_gib(counters.memory_used),
        memory_percent: fmt_percent(usage_percent(counters.memory_used, counters.memory_total)),
        disk_total: fmt_gib(disk.total),
        disk_used: fmt_gib(disk.used),
        disk_percent: fmt_percent(usage_percent(disk.used, disk.total)),
    })
}

/// The root filesystem if mounted, else the first disk, else a zero record.
fn primary_disk(disks: &[DiskUsage]) -> DiskUsage {
    disks
        .iter()
        .find(|d| d.mount_point == "/")
        .or_else(|| disks.first())
        .cloned()
        .unwrap_or_default()
}

fn usage_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

fn fmt_gib(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GIB)
}

fn fmt_percent(pct: f64) -> String {
    format!("{:.2}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::probe::testing::FakeProbe;
    use crate::domain::probe::ResourceCounters;

    const GIB: u64 = 1 << 30;

    fn probe_with(counters: ResourceCounters) -> FakeProbe {
        FakeProbe {
            counters: Ok(counters),
            ..FakeProbe::default()
        }
    }

    #[test]
    fn half_used_memory() {
        let facts = read(&probe_with(ResourceCounters {
            cpu_usage_percent: 3.14159,
            cpu_count: 8,
            memory_total: 8 * GIB,
            memory_used: 4 * GIB,
            disks: Vec::new(),
        }))
        .unwrap();

        assert_eq!(facts.memory_total, "8.00 GB");
        assert_eq!(facts.memory_used, "4.00 GB");
        assert_eq!(facts.memory_percent, "50.00%");
        assert_eq!(facts.cpu_usage, "3.14%");
        assert_eq!(facts.cpu_count, "8");
    }

    #[test]
    fn no_disks_yields_zero_record() {
        let facts = read(&probe_with(ResourceCounters {
            memory_total: GIB,
            ..ResourceCounters::default()
        }))
        .unwrap();

        assert_eq!(facts.disk_total, "0.00 GB");
        assert_eq!(facts.disk_used, "0.00 GB");
        assert_eq!(facts.disk_percent, "0.00%");
    }

    #[test]
    fn root_mount_is_preferred_over_first_disk() {
        let facts = read(&probe_with(ResourceCounters {
            memory_total: GIB,
            disks: vec![
                DiskUsage {
                    mount_point: "/boot/efi".into(),
                    total: GIB / 2,
                    used: GIB / 4,
                },
                DiskUsage {
                    mount_point: "/".into(),
                    total: 40 * GIB,
                    used: 10 * GIB,
                },
            ],
            ..ResourceCounters::default()
        }))
        .unwrap();

        assert_eq!(facts.disk_total, "40.00 GB");
        assert_eq!(facts.disk_used, "10.00 GB");
        assert_eq!(facts.disk_percent, "25.00%");
    }

    #[test]
    fn first_disk_used_when_root_is_not_listed() {
        let disk = primary_disk(&[
            DiskUsage {
                mount_point: "/data".into(),
                total: 2 * GIB,
                used: GIB,
            },
            DiskUsage {
                mount_point: "/scratch".into(),
                total: 4 * GIB,
                used: 0,
            },
        ]);
        assert_eq!(disk.mount_point, "/data");
    }

    #[test]
    fn counter_errors_propagate() {
        let probe = FakeProbe {
            counters: Err(ProbeError::MemoryUnavailable),
            ..FakeProbe::default()
        };
        assert_eq!(read(&probe), Err(ProbeError::MemoryUnavailable));
    }

    #[test]
    fn fractional_gib_rounds_to_two_decimals() {
        assert_eq!(fmt_gib(GIB + GIB / 3), "1.33 GB");
        assert_eq!(fmt_gib(0), "0.00 GB");
        assert_eq!(usage_percent(1, 0), 0.0);
    }
}
