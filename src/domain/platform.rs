//! Platform reader — static OS and runtime identity.

use super::probe::HostProbe;
use super::types::PlatformFacts;

const NOT_AVAILABLE: &str = "N/A";

pub fn read(probe: &dyn HostProbe) -> PlatformFacts {
    let identity = probe.os_identity();

    let system = system_name(std::env::consts::OS);
    let release = identity
        .kernel_version
        .unwrap_or_else(|| NOT_AVAILABLE.into());
    let machine = std::env::consts::ARCH.to_string();

    PlatformFacts {
        platform: format!("{}-{}-{}", system, release, machine),
        system,
        release,
        version: identity
            .long_os_version
            .unwrap_or_else(|| NOT_AVAILABLE.into()),
        machine,
        processor: identity.cpu_brand.unwrap_or_else(|| NOT_AVAILABLE.into()),
        runtime_version: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    }
}

/// Kernel family name as `uname -s` would print it.
fn system_name(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".into(),
        "macos" | "ios" => "Darwin".into(),
        "windows" => "Windows".into(),
        "freebsd" => "FreeBSD".into(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::probe::testing::FakeProbe;
    use crate::domain::probe::OsIdentity;

    #[test]
    fn platform_string_joins_system_release_machine() {
        let facts = read(&FakeProbe::default());
        assert_eq!(facts.release, "6.1.0");
        assert_eq!(facts.version, "Linux 12 Debian GNU/Linux");
        assert_eq!(facts.processor, "Example CPU @ 3.00GHz");
        assert_eq!(
            facts.platform,
            format!("{}-6.1.0-{}", facts.system, std::env::consts::ARCH)
        );
        assert!(facts.runtime_version.starts_with("canary-piet "));
    }

    #[test]
    fn missing_identity_fields_fall_back_to_na() {
        let probe = FakeProbe {
            identity: OsIdentity::default(),
            ..FakeProbe::default()
        };
        let facts = read(&probe);
        assert_eq!(facts.release, "N/A");
        assert_eq!(facts.version, "N/A");
        assert_eq!(facts.processor, "N/A");
        assert!(!facts.machine.is_empty());
    }

    #[test]
    fn system_names_follow_uname() {
        assert_eq!(system_name("linux"), "Linux");
        assert_eq!(system_name("macos"), "Darwin");
        assert_eq!(system_name("windows"), "Windows");
        assert_eq!(system_name("solaris"), "solaris");
    }
}
