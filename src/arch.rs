use std::fmt;

/// Architecture names as used by the package tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Amd64,
    Aarch64,
    Armel,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Aarch64 => "aarch64",
            Arch::Armel => "armel",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a machine identifier (as printed by `uname -m`) to an architecture
pub fn arch_from_machine(machine: &str) -> Option<Arch> {
    match machine {
        "x86_64" | "amd64" => Some(Arch::Amd64),
        "aarch64" => Some(Arch::Aarch64),
        m if m.contains("arm") => Some(Arch::Armel),
        _ => None,
    }
}

/// Machine name from the `uname(2)` system call
#[cfg(unix)]
fn kernel_machine() -> Option<String> {
    let uname = rustix::system::uname();
    let machine = uname.machine().to_string_lossy().trim().to_string();
    Some(machine)
}

#[cfg(not(unix))]
fn kernel_machine() -> Option<String> {
    None
}

/// Processor name the host environment reports, used when the kernel
/// gives nothing
fn reported_processor() -> Option<String> {
    std::env::var("PROCESSOR_ARCHITECTURE").ok()
}

/// Take `primary` unless it's missing or blank, then `secondary`
fn pick_machine(primary: Option<String>, secondary: Option<String>) -> String {
    primary
        .filter(|m| !m.trim().is_empty())
        .or_else(|| secondary.map(|m| m.trim().to_string()))
        .unwrap_or_default()
}

/// The host machine identifier, e.g. `x86_64`. Empty if the host
/// reports nothing.
pub fn host_machine() -> String {
    pick_machine(kernel_machine(), reported_processor())
}

/// Detect the architecture of the host machine
pub fn detect_arch() -> Option<Arch> {
    let machine = host_machine();
    let arch = arch_from_machine(&machine);
    if arch.is_none() {
        tracing::debug!("Unrecognized machine identifier: '{}'", machine);
    }
    arch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_machines() {
        assert_eq!(arch_from_machine("x86_64"), Some(Arch::Amd64));
        assert_eq!(arch_from_machine("amd64"), Some(Arch::Amd64));
        assert_eq!(arch_from_machine("aarch64"), Some(Arch::Aarch64));
    }

    #[test]
    fn test_arm_variants_are_armel() {
        for machine in ["armv7l", "armv6l", "arm64", "armel"] {
            assert_eq!(arch_from_machine(machine), Some(Arch::Armel), "{}", machine);
        }
    }

    #[test]
    fn test_unknown_machines() {
        for machine in ["i686", "ppc64le", "riscv64", "mips64", "loongarch64", ""] {
            assert_eq!(arch_from_machine(machine), None, "{}", machine);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Arch::Amd64.to_string(), "amd64");
        assert_eq!(Arch::Armel.as_str(), "armel");
    }

    #[test]
    fn test_secondary_only_when_primary_blank() {
        assert_eq!(
            pick_machine(Some("x86_64".to_string()), Some("AMD64".to_string())),
            "x86_64"
        );
        assert_eq!(
            pick_machine(Some(String::new()), Some("aarch64".to_string())),
            "aarch64"
        );
        assert_eq!(pick_machine(None, Some(" armv7l ".to_string())), "armv7l");
        assert_eq!(pick_machine(None, None), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_host_machine_comes_from_kernel() {
        // The syscall answer wins; no `uname` program on PATH is consulted
        let kernel = rustix::system::uname()
            .machine()
            .to_string_lossy()
            .trim()
            .to_string();
        assert!(!kernel.is_empty());
        assert_eq!(host_machine(), kernel);
        assert_eq!(detect_arch(), arch_from_machine(&kernel));
    }

    #[cfg(all(unix, target_arch = "x86_64"))]
    #[test]
    fn test_detects_amd64_host() {
        assert_eq!(detect_arch(), Some(Arch::Amd64));
    }
}
