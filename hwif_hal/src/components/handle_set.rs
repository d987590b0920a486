//! Pointer-style storage strategy: one component's handles into driver storage.
//!
//! A `HandleSet` borrows from the driver that exported its handles. It gives
//! the same named access as [`InterfaceSet`](super::InterfaceSet) but reads
//! and writes go straight through to driver storage with no copy.

use super::access::{InterfaceRead, InterfaceWrite};
use hwif_common::error::{HwError, HwResult};
use hwif_common::hardware::handle::{BoundHandle, CommandHandle, StateHandle};

/// Handles of a single component, in export order.
#[derive(Debug, Clone)]
pub struct HandleSet<H> {
    component_name: String,
    handles: Vec<H>,
}

impl<H: BoundHandle> HandleSet<H> {
    /// Collect the handles of `component_name` from an export list.
    ///
    /// Handles of other components are skipped.
    ///
    /// # Errors
    /// `HwError::Configuration` if the component exports one interface name
    /// twice.
    pub fn for_component(
        component_name: impl Into<String>,
        exported: impl IntoIterator<Item = H>,
    ) -> HwResult<Self> {
        let component_name = component_name.into();
        let mut handles: Vec<H> = Vec::new();
        for handle in exported {
            if handle.component_name() != component_name {
                continue;
            }
            if handles
                .iter()
                .any(|h| h.interface_name() == handle.interface_name())
            {
                return Err(HwError::Configuration(format!(
                    "Component {} exports interface {} twice",
                    component_name,
                    handle.interface_name()
                )));
            }
            handles.push(handle);
        }
        Ok(Self {
            component_name,
            handles,
        })
    }

    /// Component served by this set.
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Interface names in export order.
    pub fn interface_names(&self) -> impl Iterator<Item = &str> {
        self.handles.iter().map(|h| h.interface_name())
    }

    /// Number of handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// True when the component exported nothing.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H: BoundHandle> InterfaceRead for HandleSet<H> {
    fn interface_count(&self) -> usize {
        self.handles.len()
    }

    fn slot_index(&self, name: &str) -> Option<usize> {
        self.handles.iter().position(|h| h.interface_name() == name)
    }

    #[inline]
    fn read_slot(&self, index: usize) -> f64 {
        self.handles[index].value()
    }
}

impl InterfaceWrite for HandleSet<CommandHandle<'_>> {
    #[inline]
    fn write_slot(&mut self, index: usize, value: f64) {
        self.handles[index].set_value(value);
    }
}

/// State handles of one component.
pub type StateHandleSet<'a> = HandleSet<StateHandle<'a>>;

/// Command handles of one component.
pub type CommandHandleSet<'a> = HandleSet<CommandHandle<'a>>;
