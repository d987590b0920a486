//! Owned storage strategy: ordered interfaces with parallel value storage.

use super::access::{InterfaceRead, InterfaceWrite};
use hwif_common::component_info::InterfaceInfo;
use hwif_common::error::{HwError, HwResult};
use std::collections::HashMap;

/// Validated interface list plus zero-initialized value storage.
///
/// Invariants, established by [`InterfaceSet::new`]:
/// - `interfaces`, `names` and `values` have the same length and order
/// - names are non-empty and unique (exact, case-sensitive)
/// - `index[name]` is the position of `name`
///
/// Storage is sized once at construction; reads and writes never reallocate.
#[derive(Debug, Clone, Default)]
pub struct InterfaceSet {
    interfaces: Vec<InterfaceInfo>,
    names: Vec<String>,
    index: HashMap<String, usize>,
    values: Vec<f64>,
}

impl InterfaceSet {
    /// Validate `interfaces` and allocate storage for them.
    ///
    /// # Errors
    /// `HwError::Configuration` on an empty or duplicate interface name.
    pub fn new(interfaces: Vec<InterfaceInfo>) -> HwResult<Self> {
        let mut index = HashMap::with_capacity(interfaces.len());
        for (slot, interface) in interfaces.iter().enumerate() {
            if interface.name.is_empty() {
                return Err(HwError::Configuration(format!(
                    "Interface #{slot} has an empty name"
                )));
            }
            if index.insert(interface.name.clone(), slot).is_some() {
                return Err(HwError::Configuration(format!(
                    "Duplicate interface name: {}",
                    interface.name
                )));
            }
        }

        let names = interfaces.iter().map(|i| i.name.clone()).collect();
        let values = vec![0.0; interfaces.len()];
        Ok(Self {
            interfaces,
            names,
            index,
            values,
        })
    }

    /// Number of interfaces.
    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    /// True when no interface is configured.
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Descriptive interface list.
    pub fn interfaces(&self) -> &[InterfaceInfo] {
        &self.interfaces
    }

    /// Interface names in storage order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Current value of `name`.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&slot| self.values[slot])
    }
}

impl InterfaceRead for InterfaceSet {
    fn interface_count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn slot_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[inline]
    fn read_slot(&self, index: usize) -> f64 {
        self.values[index]
    }

    fn get_all(&self, values: &mut [f64]) -> HwResult {
        if values.len() != self.values.len() {
            return Err(HwError::InterfaceValueSizeNotEqual {
                expected: self.values.len(),
                actual: values.len(),
            });
        }
        values.copy_from_slice(&self.values);
        Ok(())
    }
}

impl InterfaceWrite for InterfaceSet {
    #[inline]
    fn write_slot(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    fn set_all(&mut self, values: &[f64]) -> HwResult {
        if values.len() != self.values.len() {
            return Err(HwError::InterfaceValueSizeNotEqual {
                expected: self.values.len(),
                actual: values.len(),
            });
        }
        self.values.copy_from_slice(values);
        Ok(())
    }
}
