//! Named access to scalar slots.
//!
//! `InterfaceRead` / `InterfaceWrite` describe "name → scalar slot" without
//! saying who owns the slot. Implementors only provide slot lookup and raw
//! slot access; request validation lives once, in the provided methods:
//!
//! 1. empty name list → `InterfaceNotProvided`
//! 2. any unknown name (exact match) → `InterfaceNotFound`
//! 3. `values.len() != names.len()` → `InterfaceValueSizeNotEqual`
//!
//! Validation finishes before the first slot is touched, so a failed call
//! has no side effects. None of the methods allocate on success.

use hwif_common::error::{HwError, HwResult};

/// Read access to a set of named scalar slots.
pub trait InterfaceRead {
    /// Number of slots, i.e. the width of the canonical order.
    fn interface_count(&self) -> usize;

    /// Slot index of `name` in canonical order.
    fn slot_index(&self, name: &str) -> Option<usize>;

    /// Value at `index`. `index < interface_count()`.
    fn read_slot(&self, index: usize) -> f64;

    /// Fill `values[i]` from the slot bound to `names[i]`.
    ///
    /// `names` may be any subset of the configured names in any order.
    fn get<N: AsRef<str>>(&self, values: &mut [f64], names: &[N]) -> HwResult {
        check_request(self, names, values.len())?;
        for (value, name) in values.iter_mut().zip(names) {
            if let Some(index) = self.slot_index(name.as_ref()) {
                *value = self.read_slot(index);
            }
        }
        Ok(())
    }

    /// Copy every slot, in canonical order, into `values`.
    fn get_all(&self, values: &mut [f64]) -> HwResult {
        check_width(self.interface_count(), values.len())?;
        for (index, value) in values.iter_mut().enumerate() {
            *value = self.read_slot(index);
        }
        Ok(())
    }
}

/// Write access to a set of named scalar slots.
pub trait InterfaceWrite: InterfaceRead {
    /// Overwrite the value at `index`. `index < interface_count()`.
    fn write_slot(&mut self, index: usize, value: f64);

    /// Store `values[i]` into the slot bound to `names[i]`.
    ///
    /// A name listed twice receives the later value.
    fn set<N: AsRef<str>>(&mut self, values: &[f64], names: &[N]) -> HwResult {
        check_request(self, names, values.len())?;
        for (&value, name) in values.iter().zip(names) {
            if let Some(index) = self.slot_index(name.as_ref()) {
                self.write_slot(index, value);
            }
        }
        Ok(())
    }

    /// Overwrite every slot from `values`, in canonical order.
    fn set_all(&mut self, values: &[f64]) -> HwResult {
        check_width(self.interface_count(), values.len())?;
        for (index, &value) in values.iter().enumerate() {
            self.write_slot(index, value);
        }
        Ok(())
    }
}

/// Validate an explicit-name request against `slots`.
fn check_request<S, N>(slots: &S, names: &[N], value_count: usize) -> HwResult
where
    S: InterfaceRead + ?Sized,
    N: AsRef<str>,
{
    if names.is_empty() {
        return Err(HwError::InterfaceNotProvided);
    }
    if let Some(missing) = names
        .iter()
        .map(AsRef::as_ref)
        .find(|name| slots.slot_index(name).is_none())
    {
        return Err(HwError::InterfaceNotFound(missing.to_string()));
    }
    if value_count != names.len() {
        return Err(HwError::InterfaceValueSizeNotEqual {
            expected: names.len(),
            actual: value_count,
        });
    }
    Ok(())
}

fn check_width(expected: usize, actual: usize) -> HwResult {
    if expected != actual {
        return Err(HwError::InterfaceValueSizeNotEqual { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal fixed-name implementor.
    struct Slots {
        names: [&'static str; 3],
        values: [f64; 3],
    }

    impl InterfaceRead for Slots {
        fn interface_count(&self) -> usize {
            self.names.len()
        }

        fn slot_index(&self, name: &str) -> Option<usize> {
            self.names.iter().position(|n| *n == name)
        }

        fn read_slot(&self, index: usize) -> f64 {
            self.values[index]
        }
    }

    impl InterfaceWrite for Slots {
        fn write_slot(&mut self, index: usize, value: f64) {
            self.values[index] = value;
        }
    }

    fn slots() -> Slots {
        Slots {
            names: ["a", "b", "c"],
            values: [1.0, 2.0, 3.0],
        }
    }

    const NO_NAMES: &[&str] = &[];

    #[test]
    fn empty_names_checked_first() {
        let mut s = slots();
        assert_eq!(s.set(&[], NO_NAMES), Err(HwError::InterfaceNotProvided));
        assert_eq!(s.set(&[1.0, 2.0], NO_NAMES), Err(HwError::InterfaceNotProvided));
        assert_eq!(s.get(&mut [], NO_NAMES), Err(HwError::InterfaceNotProvided));
    }

    #[test]
    fn not_found_wins_over_size_mismatch() {
        let mut s = slots();
        assert_eq!(
            s.set(&[9.0], &["a", "x"]),
            Err(HwError::InterfaceNotFound("x".into()))
        );
        assert_eq!(
            s.get(&mut [0.0; 5], &["A"]),
            Err(HwError::InterfaceNotFound("A".into()))
        );
        assert_eq!(s.values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn size_mismatch_has_no_side_effects() {
        let mut s = slots();
        assert_eq!(
            s.set(&[9.0], &["a", "b"]),
            Err(HwError::InterfaceValueSizeNotEqual {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(s.values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn get_follows_request_order() {
        let s = slots();
        let mut out = [0.0; 2];
        s.get(&mut out, &["c", "a"]).unwrap();
        assert_eq!(out, [3.0, 1.0]);
    }

    #[test]
    fn full_width_access() {
        let mut s = slots();
        assert!(s.set_all(&[1.0]).is_err());
        s.set_all(&[4.0, 5.0, 6.0]).unwrap();

        let mut out = [0.0; 3];
        s.get_all(&mut out).unwrap();
        assert_eq!(out, [4.0, 5.0, 6.0]);
        assert_eq!(
            s.get_all(&mut [0.0; 4]),
            Err(HwError::InterfaceValueSizeNotEqual {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn repeated_name_takes_last_value() {
        let mut s = slots();
        s.set(&[7.0, 8.0], &["b", "b"]).unwrap();
        assert_eq!(s.values[1], 8.0);
    }
}
