//! Storage containers and the bounded supplies which hand them out.
//!
//! Every container has a sequential ID starting from 1 and a fixed kind. Containers are only ever
//! created by a [`ContainerSupply`], which yields at most a fixed number of them. Once a supply is
//! exhausted it stays exhausted, so each supply is effectively single-use.
use crate::crop::BushelUnit;
use crate::mineral::{Order, PARCEL_SIZE};
use crate::units::Kilograms;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use strum::Display;

/// The number of bushels a crop container holds
pub const CROP_CONTAINER_CAPACITY: usize = 21;

/// The number of crop containers available to the crop stack
pub const CROP_CONTAINER_LIMIT: u32 = 10;

/// The mass of minerals a mineral container holds
pub const MINERAL_CONTAINER_CAPACITY: Kilograms = Kilograms(565);

/// The number of mineral containers available to the mineral heap
pub const MINERAL_CONTAINER_LIMIT: u32 = 30;

/// The kind of resource a container is designed to store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ContainerKind {
    /// Holds bushels of processed crops
    Crop,
    /// Holds orders of minerals
    Mineral,
}

/// A storage container which can be produced by a [`ContainerSupply`]
pub trait Container {
    /// The kind tag shared by all containers of this type
    const KIND: ContainerKind;

    /// Create a new, empty container with the given ID
    fn empty(id: u32) -> Self;

    /// The container's ID
    fn id(&self) -> u32;

    /// The number of items currently held
    fn len(&self) -> usize;

    /// Whether the container holds nothing
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The container's kind
    fn kind(&self) -> ContainerKind {
        Self::KIND
    }
}

/// A container of bushels
#[derive(Debug, Clone, PartialEq)]
pub struct CropContainer {
    /// Sequential ID, starting at 1
    pub id: u32,
    /// Bushels in the order they were stored
    pub bushels: Vec<BushelUnit>,
}

impl CropContainer {
    /// Whether the container has reached its capacity
    pub fn is_full(&self) -> bool {
        self.bushels.len() >= CROP_CONTAINER_CAPACITY
    }
}

impl Container for CropContainer {
    const KIND: ContainerKind = ContainerKind::Crop;

    fn empty(id: u32) -> Self {
        Self {
            id,
            bushels: Vec::with_capacity(CROP_CONTAINER_CAPACITY),
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn len(&self) -> usize {
        self.bushels.len()
    }
}

/// A container of mineral orders
#[derive(Debug, Clone, PartialEq)]
pub struct MineralContainer {
    /// Sequential ID, starting at 1
    pub id: u32,
    /// Orders in the order they were stored
    pub orders: Vec<Order>,
}

impl MineralContainer {
    /// The weight used for capacity checks.
    ///
    /// Every order is counted as a full parcel, whatever its actual amount.
    pub fn nominal_weight(&self) -> Kilograms {
        self.orders.iter().map(|_| PARCEL_SIZE).sum()
    }

    /// The sum of the amounts of all orders in the container
    pub fn actual_weight(&self) -> Kilograms {
        self.orders.iter().map(|order| order.amount).sum()
    }

    /// Whether the container has reached its capacity
    pub fn is_full(&self) -> bool {
        self.nominal_weight() >= MINERAL_CONTAINER_CAPACITY
    }
}

impl Container for MineralContainer {
    const KIND: ContainerKind = ContainerKind::Mineral;

    fn empty(id: u32) -> Self {
        Self {
            id,
            orders: Vec::new(),
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn len(&self) -> usize {
        self.orders.len()
    }
}

/// Hands out up to a fixed number of empty containers, numbered from 1.
///
/// Returns `None` once the maximum has been reached and for every call thereafter.
#[derive(Debug)]
pub struct ContainerSupply<C: Container> {
    next_id: u32,
    maximum: u32,
    _kind: PhantomData<C>,
}

impl<C: Container> ContainerSupply<C> {
    /// Create a supply which will yield `maximum` containers
    pub fn new(maximum: u32) -> Self {
        Self {
            next_id: 1,
            maximum,
            _kind: PhantomData,
        }
    }

    /// The maximum number of containers this supply was created with
    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    /// The number of containers which have not yet been handed out
    pub fn remaining(&self) -> u32 {
        self.maximum - (self.next_id - 1)
    }
}

impl ContainerSupply<CropContainer> {
    /// The supply of containers used by the crop stack
    pub fn crop() -> Self {
        Self::new(CROP_CONTAINER_LIMIT)
    }
}

impl ContainerSupply<MineralContainer> {
    /// The supply of containers used by the mineral heap
    pub fn mineral() -> Self {
        Self::new(MINERAL_CONTAINER_LIMIT)
    }
}

impl<C: Container> Iterator for ContainerSupply<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.next_id > self.maximum {
            return None;
        }

        let container = C::empty(self.next_id);
        self.next_id += 1;
        Some(container)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl<C: Container> ExactSizeIterator for ContainerSupply<C> {}
impl<C: Container> FusedIterator for ContainerSupply<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mineral::MineralID;
    use rstest::rstest;

    #[test]
    fn test_supply_sequential_ids() {
        let supply = ContainerSupply::<CropContainer>::crop();
        let ids: Vec<_> = supply.map(|c| c.id()).collect();
        assert_eq!(ids, (1..=CROP_CONTAINER_LIMIT).collect::<Vec<_>>());
    }

    #[test]
    fn test_supply_exhausted() {
        let mut supply = ContainerSupply::<MineralContainer>::new(2);
        assert_eq!(supply.len(), 2);
        assert_eq!(supply.next().unwrap().id, 1);
        assert_eq!(supply.next().unwrap().id, 2);
        assert_eq!(supply.remaining(), 0);
        assert!(supply.next().is_none());

        // Stays exhausted
        assert!(supply.next().is_none());
    }

    #[test]
    fn test_supply_zero() {
        let mut supply = ContainerSupply::<CropContainer>::new(0);
        assert!(supply.next().is_none());
    }

    #[rstest]
    #[case(ContainerSupply::<CropContainer>::crop().next().unwrap().kind(), ContainerKind::Crop)]
    #[case(ContainerSupply::<MineralContainer>::mineral().next().unwrap().kind(), ContainerKind::Mineral)]
    fn test_container_kind(#[case] kind: ContainerKind, #[case] expected: ContainerKind) {
        assert_eq!(kind, expected);
    }

    #[test]
    fn test_supply_limits() {
        assert_eq!(ContainerSupply::<CropContainer>::crop().count(), 10);
        assert_eq!(ContainerSupply::<MineralContainer>::mineral().count(), 30);
    }

    #[test]
    fn test_mineral_container_weights() {
        let mut container = MineralContainer::empty(1);
        assert!(container.is_empty());
        container.orders.push(Order {
            mineral: MineralID::new("Onyx"),
            amount: Kilograms(5),
        });
        container.orders.push(Order {
            mineral: MineralID::new("Onyx"),
            amount: Kilograms(3),
        });
        assert_eq!(container.nominal_weight(), Kilograms(10));
        assert_eq!(container.actual_weight(), Kilograms(8));
        assert!(!container.is_full());
    }

    #[test]
    fn test_mineral_container_capacity_in_orders() {
        assert_eq!(MINERAL_CONTAINER_CAPACITY.value() / PARCEL_SIZE.value(), 113);
    }
}
