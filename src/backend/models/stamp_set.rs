// src/backend/models/stamp_set.rs
use crate::error::StampError;
use crate::models::common::StampId;
use std::collections::BTreeSet;

/// The collected stamp points of one card.
///
/// Invariant: every member lies in `1..=total`, so the set never holds more
/// than `total` entries. Iteration is ascending, which is also the persisted order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StampSet {
    total: u32,
    stamps: BTreeSet<StampId>,
}

impl StampSet {
    pub fn empty(total: u32) -> Self {
        Self {
            total,
            stamps: BTreeSet::new(),
        }
    }

    /// Builds a set from persisted values, dropping anything outside `1..=total`.
    /// Returns the set together with the values that were dropped.
    pub fn from_persisted(total: u32, values: &[i64]) -> (Self, Vec<i64>) {
        let mut set = Self::empty(total);
        let mut rejected = Vec::new();
        for &value in values {
            match StampId::try_from(value) {
                Ok(id) if set.in_range(id) => {
                    set.stamps.insert(id);
                }
                _ => rejected.push(value),
            }
        }
        (set, rejected)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn in_range(&self, id: StampId) -> bool {
        id >= 1 && id <= self.total
    }

    /// Inserts a stamp point.
    ///
    /// # Returns
    /// * `Ok(true)` if the stamp was newly added, `Ok(false)` if it was already present.
    ///
    /// # Errors
    /// `StampError::InvalidStampPoint` if `id` is outside `1..=total`.
    pub fn insert(&mut self, id: StampId) -> Result<bool, StampError> {
        if !self.in_range(id) {
            return Err(StampError::InvalidStampPoint(id.to_string()));
        }
        Ok(self.stamps.insert(id))
    }

    pub fn clear(&mut self) {
        self.stamps.clear();
    }

    pub fn contains(&self, id: StampId) -> bool {
        self.stamps.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.stamps.len() == self.total as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = StampId> + '_ {
        self.stamps.iter().copied()
    }

    /// Ascending list of collected ids.
    pub fn to_vec(&self) -> Vec<StampId> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_ascending_order() {
        let mut set = StampSet::empty(6);
        assert_eq!(set.insert(4), Ok(true));
        assert_eq!(set.insert(1), Ok(true));
        assert_eq!(set.insert(2), Ok(true));
        assert_eq!(set.to_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn duplicate_insert_reports_false() {
        let mut set = StampSet::empty(6);
        assert_eq!(set.insert(3), Ok(true));
        assert_eq!(set.insert(3), Ok(false));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn out_of_range_insert_is_rejected() {
        let mut set = StampSet::empty(6);
        assert!(set.insert(0).is_err());
        assert!(set.insert(7).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn complete_only_at_total() {
        let mut set = StampSet::empty(3);
        assert!(!set.is_complete());
        set.insert(1).unwrap();
        set.insert(2).unwrap();
        assert!(!set.is_complete());
        set.insert(3).unwrap();
        assert!(set.is_complete());
    }

    #[test]
    fn from_persisted_drops_invalid_and_duplicates() {
        let (set, rejected) = StampSet::from_persisted(6, &[5, 1, 1, 0, -2, 9, 3]);
        assert_eq!(set.to_vec(), vec![1, 3, 5]);
        assert_eq!(rejected, vec![0, -2, 9]);
    }
}
