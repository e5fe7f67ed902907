//! Application state - Central state management for the planner

use std::sync::Arc;

use tracing::{info, warn};

use super::aggregate::Totals;
use super::allocation::{AllocatedInstance, AllocationList};
use super::catalog::Catalog;
use super::error::{AllocationError, SelectionError};
use super::resource::Resource;
use super::selection::Selection;
use super::settings::Settings;

/// Central application state
pub struct AppState {
    /// Read-only image catalog
    pub catalog: Arc<Catalog>,
    /// Application settings
    pub settings: Settings,
    /// Image being configured
    selection: Selection,
    /// Planned instances
    allocations: AllocationList,
}

impl AppState {
    /// Create a new application state
    pub fn new(catalog: Arc<Catalog>, settings: Settings) -> Self {
        info!("Planner ready with {} catalog images", catalog.len());
        Self {
            catalog,
            settings,
            selection: Selection::new(),
            allocations: AllocationList::new(),
        }
    }

    /// Pick the image matching a search label
    pub fn choose(&mut self, search_key: &str) -> Result<(), SelectionError> {
        self.selection
            .choose(&self.catalog, search_key)
            .inspect_err(|e| warn!("Choose failed: {}", e))
    }

    /// Override one resource of the current selection
    pub fn set_allocation(&mut self, resource: Resource, value: u32) -> Result<(), SelectionError> {
        self.selection
            .set(resource, value)
            .inspect_err(|e| warn!("Override rejected: {}", e))
    }

    pub fn can_add(&self) -> bool {
        self.selection.can_commit()
    }

    /// Add is only offered while the search box still shows the chosen image
    pub fn can_add_from(&self, search_text: &str) -> bool {
        self.can_add() && self.selection.is_labelled(search_text)
    }

    /// Commit the selection and append it to the plan
    pub fn add_selected(&mut self) -> Result<AllocatedInstance, SelectionError> {
        let instance = self.selection.commit()?;
        self.allocations.add(instance.clone());
        info!(
            "Added {} {} ({} vCPU, {} MB RAM, {} MB disk), {} planned",
            instance.name,
            instance.image_type,
            instance.cpu,
            instance.ram,
            instance.disk,
            self.allocations.len()
        );
        Ok(instance)
    }

    /// Remove a planned instance by position
    pub fn remove_at(&mut self, index: usize) -> Result<AllocatedInstance, AllocationError> {
        let removed = self.allocations.remove_at(index)?;
        info!(
            "Removed {} {} at #{}, {} planned",
            removed.name,
            removed.image_type,
            index,
            self.allocations.len()
        );
        Ok(removed)
    }

    /// Drop every planned instance
    pub fn clear(&mut self) {
        let count = self.allocations.len();
        self.allocations.clear();
        self.selection.reset();
        info!("Cleared {} planned instances", count);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn instances(&self) -> &[AllocatedInstance] {
        self.allocations.all()
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.allocations.all())
    }

    pub fn instance_count(&self) -> usize {
        self.allocations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::total_cpu;
    use crate::core::template::{ImageTemplate, ImageType};

    fn state() -> AppState {
        let catalog = Catalog::new(vec![ImageTemplate::new(
            "docker", "Docker", "LXC", 1, 512, 2048,
        )])
        .unwrap();
        AppState::new(Arc::new(catalog), Settings::default())
    }

    #[test]
    fn test_docker_scenario() {
        let mut state = state();
        state.choose("Docker LXC").unwrap();
        state.set_allocation(Resource::Ram, 1024).unwrap();

        let added = state.add_selected().unwrap();
        assert_eq!(
            added,
            AllocatedInstance {
                id: "docker".into(),
                name: "Docker".into(),
                image_type: ImageType::Lxc,
                cpu: 1,
                ram: 1024,
                disk: 2048,
            }
        );
        assert_eq!(state.instance_count(), 1);
        assert_eq!(state.totals().ram_mb, 1024);
        assert_eq!(state.totals().ram_gb(), 1.0);
        assert_eq!(state.totals().summary(), "1 vCPU, 1 GB RAM, 2 GB Disk");

        let selection = state.selection();
        assert!(selection.chosen().is_none());
        assert_eq!((selection.cpu(), selection.ram(), selection.disk()), (1, 256, 512));
    }

    #[test]
    fn test_add_without_choice_leaves_plan_untouched() {
        let mut state = state();
        assert!(!state.can_add());
        assert_eq!(state.add_selected(), Err(SelectionError::NoTemplateSelected));
        assert_eq!(state.instance_count(), 0);
    }

    #[test]
    fn test_same_image_added_twice() {
        let mut state = state();
        state.choose("Docker LXC").unwrap();
        state.add_selected().unwrap();
        state.choose("Docker LXC").unwrap();
        state.set_allocation(Resource::Cpu, 4).unwrap();
        state.add_selected().unwrap();

        assert_eq!(state.instance_count(), 2);
        assert_eq!(total_cpu(state.instances()), 5);
        assert_eq!(state.totals().summary(), "5 vCPU, 1 GB RAM, 4 GB Disk");

        assert_eq!(state.remove_at(0).unwrap().cpu, 1);
        assert_eq!(state.instances()[0].cpu, 4);
        assert_eq!(
            state.remove_at(1),
            Err(AllocationError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_committed_instances_are_snapshots() {
        let mut state = state();
        state.choose("Docker LXC").unwrap();
        state.add_selected().unwrap();

        state.catalog = Arc::new(
            Catalog::new(vec![ImageTemplate::new(
                "docker", "Docker CE", "LXC", 4, 8192, 8192,
            )])
            .unwrap(),
        );
        assert_eq!(state.instances()[0].name, "Docker");
        assert_eq!(state.instances()[0].ram, 512);
    }

    #[test]
    fn test_clear() {
        let mut state = state();
        state.choose("Docker LXC").unwrap();
        state.add_selected().unwrap();
        state.choose("Docker LXC").unwrap();
        state.clear();
        assert_eq!(state.instance_count(), 0);
        assert!(!state.can_add());
    }

    #[test]
    fn test_edited_search_text_blocks_add() {
        let mut state = state();
        assert!(!state.can_add_from("Docker LXC"));

        state.choose("Docker LXC").unwrap();
        assert!(state.can_add_from("Docker LXC"));
        assert!(!state.can_add_from("Docker"));
        assert!(!state.can_add_from("AdGuard LXC"));
        assert!(state.can_add());

        state.add_selected().unwrap();
        assert!(!state.can_add_from("Docker LXC"));
    }
}
