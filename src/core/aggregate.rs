//! Aggregated resource totals, recomputed on every read

use super::allocation::AllocatedInstance;
use super::resource::mb_to_gb;

pub fn total_cpu(instances: &[AllocatedInstance]) -> u64 {
    instances.iter().map(|i| i.cpu as u64).sum()
}

/// Total RAM in MB
pub fn total_ram(instances: &[AllocatedInstance]) -> u64 {
    instances.iter().map(|i| i.ram as u64).sum()
}

/// Total disk in MB
pub fn total_disk(instances: &[AllocatedInstance]) -> u64 {
    instances.iter().map(|i| i.disk as u64).sum()
}

/// Sums over a list of planned instances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub cpu: u64,
    pub ram_mb: u64,
    pub disk_mb: u64,
}

impl Totals {
    pub fn of(instances: &[AllocatedInstance]) -> Self {
        Self {
            cpu: total_cpu(instances),
            ram_mb: total_ram(instances),
            disk_mb: total_disk(instances),
        }
    }

    pub fn ram_gb(&self) -> f64 {
        mb_to_gb(self.ram_mb)
    }

    pub fn disk_gb(&self) -> f64 {
        mb_to_gb(self.disk_mb)
    }

    /// e.g. "3 vCPU, 0.75 GB RAM, 2.5 GB Disk"
    pub fn summary(&self) -> String {
        format!(
            "{} vCPU, {} GB RAM, {} GB Disk",
            self.cpu,
            self.ram_gb(),
            self.disk_gb()
        )
    }
}
