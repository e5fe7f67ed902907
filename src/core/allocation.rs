//! Allocation list - Planned instances in the order they were added

use serde::{Deserialize, Serialize};

use super::error::AllocationError;
use super::resource::format_size_mb;
use super::template::ImageType;

/// A committed image with its final allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedInstance {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    /// vCPU count
    pub cpu: u32,
    /// RAM in MB
    pub ram: u32,
    /// Disk in MB
    pub disk: u32,
}

impl AllocatedInstance {
    pub fn cpu_string(&self) -> String {
        format!("{} vCPU", self.cpu)
    }

    pub fn ram_string(&self) -> String {
        format_size_mb(self.ram as u64)
    }

    pub fn disk_string(&self) -> String {
        format_size_mb(self.disk as u64)
    }
}

/// Ordered list of planned instances; duplicates are allowed
#[derive(Debug, Clone, Default)]
pub struct AllocationList {
    instances: Vec<AllocatedInstance>,
}

impl AllocationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, instance: AllocatedInstance) {
        self.instances.push(instance);
    }

    /// Remove the instance at `index`, shifting later ones down
    pub fn remove_at(&mut self, index: usize) -> Result<AllocatedInstance, AllocationError> {
        if index >= self.instances.len() {
            return Err(AllocationError::IndexOutOfRange {
                index,
                len: self.instances.len(),
            });
        }
        Ok(self.instances.remove(index))
    }

    pub fn all(&self) -> &[AllocatedInstance] {
        &self.instances
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(id: &str, ram: u32) -> AllocatedInstance {
        AllocatedInstance {
            id: id.to_string(),
            name: id.to_uppercase(),
            image_type: ImageType::Lxc,
            cpu: 1,
            ram,
            disk: 512,
        }
    }

    fn ids(list: &AllocationList) -> Vec<&str> {
        list.all().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut list = AllocationList::new();
        list.add(instance("a", 256));
        list.add(instance("b", 256));
        list.add(instance("a", 1024));
        assert_eq!(ids(&list), vec!["a", "b", "a"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut list = AllocationList::new();
        for id in ["a", "b", "c", "d"] {
            list.add(instance(id, 256));
        }
        assert_eq!(list.remove_at(1).unwrap().id, "b");
        assert_eq!(ids(&list), vec!["a", "c", "d"]);
        assert_eq!(list.remove_at(2).unwrap().id, "d");
        assert_eq!(list.remove_at(0).unwrap().id, "a");
        assert_eq!(ids(&list), vec!["c"]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list = AllocationList::new();
        assert_eq!(
            list.remove_at(0),
            Err(AllocationError::IndexOutOfRange { index: 0, len: 0 })
        );
        list.add(instance("a", 256));
        assert!(list.remove_at(1).is_err());
        assert_eq!(ids(&list), vec!["a"]);
    }

    #[test]
    fn test_display_strings() {
        let mut small = instance("a", 512);
        assert_eq!(small.cpu_string(), "1 vCPU");
        assert_eq!(small.ram_string(), "512 MB");
        small.disk = 10240;
        assert_eq!(small.disk_string(), "10 GB");
    }
}
