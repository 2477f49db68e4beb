//! Network reader — hostname plus one IPv4 address per interface.

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};

use super::probe::{HostProbe, ProbeError};
use super::types::NetworkFacts;

/// Interfaces are walked in name order, and that order alone decides which
/// address becomes `IP Address`: a bridge such as `docker0` wins over `eth0`.
/// Within an interface the last IPv4 address is the one reported.
pub fn read(probe: &dyn HostProbe) -> Result<NetworkFacts, ProbeError> {
    let hostname = probe.hostname();

    let mut interfaces = probe.interfaces()?;
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));

    let mut entries = BTreeMap::new();
    let mut primary: Option<Ipv4Addr> = None;

    for iface in &interfaces {
        for addr in &iface.addrs {
            let IpAddr::V4(v4) = addr else { continue };

            entries.insert(format!("Interface {}", iface.name), v4.to_string());

            if primary.is_none() && *v4 != Ipv4Addr::LOCALHOST {
                primary = Some(*v4);
            }
        }
    }

    // FQDN is the plain hostname: no reverse DNS lookup
    Ok(NetworkFacts {
        fqdn: hostname.clone(),
        hostname,
        interfaces: entries,
        ip_address: primary.unwrap_or(Ipv4Addr::LOCALHOST).to_string(),
    })
}
