//! Selection model - The image being configured before it is added

use tracing::debug;

use super::allocation::AllocatedInstance;
use super::catalog::Catalog;
use super::error::SelectionError;
use super::resource::Resource;
use super::template::ImageTemplate;

pub const DEFAULT_CPU: u32 = 1;
pub const DEFAULT_RAM_MB: u32 = 256;
pub const DEFAULT_DISK_MB: u32 = 512;

/// Working allocation for the currently chosen template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    chosen: Option<ImageTemplate>,
    cpu: u32,
    ram: u32,
    disk: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            chosen: None,
            cpu: DEFAULT_CPU,
            ram: DEFAULT_RAM_MB,
            disk: DEFAULT_DISK_MB,
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a template by its search label and load its default allocation.
    /// Earlier overrides are discarded.
    pub fn choose(&mut self, catalog: &Catalog, search_key: &str) -> Result<(), SelectionError> {
        let template = catalog
            .lookup(search_key)
            .ok_or_else(|| SelectionError::TemplateNotFound(search_key.to_string()))?;

        self.cpu = template.cpu;
        self.ram = template.ram;
        self.disk = template.disk;
        self.chosen = Some(template.clone());
        debug!("Selected '{}'", search_key);
        Ok(())
    }

    /// Override one working value; it must be one of the resource's choices
    pub fn set(&mut self, resource: Resource, value: u32) -> Result<(), SelectionError> {
        if !resource.is_valid_choice(value) {
            return Err(SelectionError::InvalidAllocationValue { resource, value });
        }
        match resource {
            Resource::Cpu => self.cpu = value,
            Resource::Ram => self.ram = value,
            Resource::Disk => self.disk = value,
        }
        Ok(())
    }

    pub fn set_cpu(&mut self, value: u32) -> Result<(), SelectionError> {
        self.set(Resource::Cpu, value)
    }

    pub fn set_ram(&mut self, value: u32) -> Result<(), SelectionError> {
        self.set(Resource::Ram, value)
    }

    pub fn set_disk(&mut self, value: u32) -> Result<(), SelectionError> {
        self.set(Resource::Disk, value)
    }

    pub fn can_commit(&self) -> bool {
        self.chosen.is_some()
    }

    /// Snapshot the selection into an instance and reset to the initial state
    pub fn commit(&mut self) -> Result<AllocatedInstance, SelectionError> {
        let template = self.chosen.take().ok_or(SelectionError::NoTemplateSelected)?;
        let instance = AllocatedInstance {
            id: template.id,
            name: template.name,
            image_type: template.image_type,
            cpu: self.cpu,
            ram: self.ram,
            disk: self.disk,
        };
        *self = Self::default();
        Ok(instance)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn chosen(&self) -> Option<&ImageTemplate> {
        self.chosen.as_ref()
    }

    /// Label of the chosen template, empty when nothing is chosen
    pub fn search_key(&self) -> String {
        self.chosen
            .as_ref()
            .map(ImageTemplate::search_label)
            .unwrap_or_default()
    }

    /// Whether `text` is exactly the label of the chosen template
    pub fn is_labelled(&self, text: &str) -> bool {
        self.chosen.as_ref().is_some_and(|t| t.matches_label(text))
    }

    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Cpu => self.cpu,
            Resource::Ram => self.ram,
            Resource::Disk => self.disk,
        }
    }

    pub fn cpu(&self) -> u32 {
        self.cpu
    }

    pub fn ram(&self) -> u32 {
        self.ram
    }

    pub fn disk(&self) -> u32 {
        self.disk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template::ImageType;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ImageTemplate::new("docker", "Docker", "LXC", 1, 512, 2048),
            ImageTemplate::new("haos", "Home Assistant OS", "VM", 2, 4096, 32768),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let selection = Selection::new();
        assert!(selection.chosen().is_none());
        assert!(!selection.can_commit());
        assert_eq!((selection.cpu(), selection.ram(), selection.disk()), (1, 256, 512));
        assert_eq!(selection.search_key(), "");
    }

    #[test]
    fn test_choose_loads_defaults() {
        let mut selection = Selection::new();
        selection.choose(&catalog(), "Home Assistant OS VM").unwrap();
        assert!(selection.can_commit());
        assert_eq!(selection.search_key(), "Home Assistant OS VM");
        assert_eq!((selection.cpu(), selection.ram(), selection.disk()), (2, 4096, 32768));
    }

    #[test]
    fn test_choose_miss_keeps_state() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.choose(&catalog, "Docker LXC").unwrap();
        selection.set_ram(2048).unwrap();
        let before = selection.clone();

        let err = selection.choose(&catalog, "Nextcloud LXC").unwrap_err();
        assert_eq!(err, SelectionError::TemplateNotFound("Nextcloud LXC".into()));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_switching_template_drops_overrides() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.choose(&catalog, "Docker LXC").unwrap();
        selection.set_cpu(4).unwrap();
        selection.choose(&catalog, "Home Assistant OS VM").unwrap();
        assert_eq!(selection.cpu(), 2);
        selection.choose(&catalog, "Docker LXC").unwrap();
        assert_eq!(selection.cpu(), 1);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let mut selection = Selection::new();
        selection.set_cpu(2).unwrap();
        assert_eq!(
            selection.set_cpu(3),
            Err(SelectionError::InvalidAllocationValue {
                resource: Resource::Cpu,
                value: 3
            })
        );
        assert_eq!(selection.cpu(), 2);
        assert!(selection.set_ram(100).is_err());
        assert_eq!(selection.ram(), DEFAULT_RAM_MB);
        assert!(selection.set_disk(1536).is_err());
        assert_eq!(selection.disk(), DEFAULT_DISK_MB);
    }

    #[test]
    fn test_overrides_allowed_before_choosing() {
        let mut selection = Selection::new();
        selection.set_disk(8192).unwrap();
        assert_eq!(selection.get(Resource::Disk), 8192);
        assert!(!selection.can_commit());
    }

    #[test]
    fn test_commit_without_choice() {
        let mut selection = Selection::new();
        assert_eq!(selection.commit(), Err(SelectionError::NoTemplateSelected));
    }

    #[test]
    fn test_commit_snapshots_and_resets() {
        let mut selection = Selection::new();
        selection.choose(&catalog(), "Docker LXC").unwrap();
        selection.set_disk(4096).unwrap();

        let instance = selection.commit().unwrap();
        assert_eq!(instance.id, "docker");
        assert_eq!(instance.name, "Docker");
        assert_eq!(instance.image_type, ImageType::Lxc);
        assert_eq!((instance.cpu, instance.ram, instance.disk), (1, 512, 4096));
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_is_labelled() {
        let mut selection = Selection::new();
        assert!(!selection.is_labelled(""));
        selection.choose(&catalog(), "Docker LXC").unwrap();
        assert!(selection.is_labelled("Docker LXC"));
        assert!(!selection.is_labelled("Docker LX"));
        assert!(!selection.is_labelled("Home Assistant OS VM"));
    }

    #[test]
    fn test_out_of_list_defaults_commit_as_is() {
        let catalog = Catalog::new(vec![ImageTemplate::new("k3s", "K3s", "LXC", 3, 3072, 1536)])
            .unwrap();
        assert!(!Resource::Cpu.is_valid_choice(3));
        assert!(!Resource::Ram.is_valid_choice(3072));

        let mut selection = Selection::new();
        selection.choose(&catalog, "K3s LXC").unwrap();
        assert_eq!((selection.cpu(), selection.ram(), selection.disk()), (3, 3072, 1536));

        let instance = selection.commit().unwrap();
        assert_eq!(instance.id, "k3s");
        assert_eq!((instance.cpu, instance.ram, instance.disk), (3, 3072, 1536));
    }
}
