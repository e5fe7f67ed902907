//! Resource kinds, allocation choices and size formatting

use serde::{Deserialize, Serialize};

/// Selectable vCPU counts
pub const CPU_CHOICES: &[u32] = &[1, 2, 4];

/// Selectable RAM sizes in MB
pub const RAM_CHOICES_MB: &[u32] = &[256, 512, 1024, 2048, 4096, 6144, 8192, 10240];

/// Selectable disk sizes in MB
pub const DISK_CHOICES_MB: &[u32] = &[
    512, 1024, 2048, 3072, 4096, 5120, 6144, 7168, 8192, 10240, 12288, 15360, 16384, 18432, 20480,
    25600, 30720, 32768,
];

/// Megabytes per gigabyte for display conversion
pub const MB_PER_GB: f64 = 1024.0;

/// One of the three planned resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Cpu,
    Ram,
    Disk,
}

impl Resource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Ram => "RAM",
            Self::Disk => "Disk",
        }
    }

    pub fn all() -> &'static [Resource] {
        &[Resource::Cpu, Resource::Ram, Resource::Disk]
    }

    /// Values the user may pick for this resource, ascending
    pub fn choices(&self) -> &'static [u32] {
        match self {
            Self::Cpu => CPU_CHOICES,
            Self::Ram => RAM_CHOICES_MB,
            Self::Disk => DISK_CHOICES_MB,
        }
    }

    pub fn is_valid_choice(&self, value: u32) -> bool {
        self.choices().contains(&value)
    }

    /// Human-readable amount, e.g. "2 vCPU", "512 MB", "1.5 GB"
    pub fn format(&self, value: u32) -> String {
        match self {
            Self::Cpu => format!("{} vCPU", value),
            Self::Ram | Self::Disk => format_size_mb(value as u64),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert MB to GB with plain division, no rounding
pub fn mb_to_gb(mb: u64) -> f64 {
    mb as f64 / MB_PER_GB
}

/// Sizes below 1 GB stay in MB, everything else is shown in (possibly fractional) GB
pub fn format_size_mb(mb: u64) -> String {
    if mb < 1024 {
        format!("{} MB", mb)
    } else {
        format!("{} GB", mb_to_gb(mb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_are_sorted_and_aligned() {
        for resource in Resource::all() {
            let choices = resource.choices();
            assert!(choices.windows(2).all(|w| w[0] < w[1]), "{resource}");
        }
        assert!(RAM_CHOICES_MB.iter().all(|v| v % 256 == 0));
        assert!(DISK_CHOICES_MB.iter().all(|v| v % 512 == 0));
    }

    #[test]
    fn test_is_valid_choice() {
        assert!(Resource::Cpu.is_valid_choice(4));
        assert!(!Resource::Cpu.is_valid_choice(3));
        assert!(Resource::Ram.is_valid_choice(6144));
        assert!(!Resource::Ram.is_valid_choice(3072));
        assert!(Resource::Disk.is_valid_choice(3072));
        assert!(!Resource::Disk.is_valid_choice(0));
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(Resource::Cpu.format(2), "2 vCPU");
        assert_eq!(Resource::Ram.format(256), "256 MB");
        assert_eq!(Resource::Ram.format(1024), "1 GB");
        assert_eq!(Resource::Disk.format(32768), "32 GB");
        assert_eq!(format_size_mb(1536), "1.5 GB");
    }

    #[test]
    fn test_mb_to_gb_keeps_fractions() {
        assert_eq!(mb_to_gb(256), 0.25);
        assert_eq!(mb_to_gb(768), 0.75);
        assert_eq!(mb_to_gb(0), 0.0);
    }
}
