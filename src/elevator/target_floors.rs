//! Sorted set of floors an elevator is obliged to visit.
use serde;
use std::collections::BTreeSet;

/// Ordered target set with the neighbour queries the LOOK scan needs.
///
/// # Example
/// ```rust
/// use elevator::elevator::target_floors::TargetFloors;
/// let mut targets = TargetFloors::new();
/// targets.add(7);
/// targets.add(2);
/// assert_eq!(targets.ceiling(3), Some(7));
/// assert_eq!(targets.floor(3), Some(2));
/// ```
#[derive(PartialEq, Eq, Clone, Debug, Default, serde::Serialize, serde::Deserialize, Hash)]
#[serde(transparent)]
pub struct TargetFloors {
    floors: BTreeSet<i32>,
}

impl TargetFloors {
    pub fn new() -> TargetFloors {
        TargetFloors {
            floors: BTreeSet::new(),
        }
    }

    /// Adds `floor`. Returns false if it was already a target.
    pub fn add(&mut self, floor: i32) -> bool {
        self.floors.insert(floor)
    }

    /// Removes `floor`. Returns false if it was not a target.
    pub fn remove(&mut self, floor: i32) -> bool {
        self.floors.remove(&floor)
    }

    pub fn contains(&self, floor: i32) -> bool {
        self.floors.contains(&floor)
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    /// Smallest target `>= floor`.
    pub fn ceiling(&self, floor: i32) -> Option<i32> {
        self.floors.range(floor..).next().copied()
    }

    /// Largest target `<= floor`.
    pub fn floor(&self, floor: i32) -> Option<i32> {
        self.floors.range(..=floor).next_back().copied()
    }

    pub fn first(&self) -> Option<i32> {
        self.floors.iter().next().copied()
    }

    pub fn last(&self) -> Option<i32> {
        self.floors.iter().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.floors.iter().copied()
    }
}

impl std::iter::FromIterator<i32> for TargetFloors {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> TargetFloors {
        TargetFloors {
            floors: iter.into_iter().collect(),
        }
    }
}
