//! The storage facility, which records the mineral containers packed by the heap.
use crate::container::{Container, ContainerSupply, MineralContainer};
use crate::mineral::{MineralID, Order};
use crate::units::Kilograms;
use indexmap::{IndexMap, IndexSet};
use log::debug;

/// Metadata recorded about a container stored in the facility
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityEntry {
    /// The stored container
    pub container: MineralContainer,
    /// The distinct minerals held by the container, in the order first stored
    pub contents: IndexSet<MineralID>,
}

impl FacilityEntry {
    /// Create an entry for a sealed container, recording which minerals it holds
    fn seal(container: MineralContainer) -> Self {
        let contents = container
            .orders
            .iter()
            .map(|order| order.mineral.clone())
            .collect();

        Self {
            container,
            contents,
        }
    }
}

/// The containers stored in the facility, keyed by container ID.
///
/// Orders which arrived after the last container was sealed are not stored, but are counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacilityRecord {
    entries: IndexMap<u32, FacilityEntry>,
    dropped_orders: usize,
    dropped_kilograms: Kilograms,
}

impl FacilityRecord {
    /// The number of containers stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no containers are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry for the container with the given ID
    pub fn get(&self, container_id: u32) -> Option<&FacilityEntry> {
        self.entries.get(&container_id)
    }

    /// Iterate over the stored containers in the order they were sealed
    pub fn iter(&self) -> indexmap::map::Values<'_, u32, FacilityEntry> {
        self.entries.values()
    }

    /// The number of orders which could not be stored
    pub fn dropped_orders(&self) -> usize {
        self.dropped_orders
    }

    /// The total amount of the orders which could not be stored
    pub fn dropped_kilograms(&self) -> Kilograms {
        self.dropped_kilograms
    }

    fn insert(&mut self, container: MineralContainer) {
        debug!(
            "Sealed mineral container {} ({} orders, {})",
            container.id(),
            container.len(),
            container.nominal_weight()
        );
        self.entries
            .insert(container.id(), FacilityEntry::seal(container));
    }
}

/// Pack orders into containers taken from `supply` and store them in a facility.
///
/// Each container is sealed as soon as it reaches capacity and the next one is taken from the
/// supply. Once the supply is exhausted, remaining orders are dropped and counted in the record. A
/// trailing, partially filled container is stored whatever its weight.
pub fn pack_orders<I>(orders: I, mut supply: ContainerSupply<MineralContainer>) -> FacilityRecord
where
    I: IntoIterator<Item = Order>,
{
    let mut facility = FacilityRecord::default();
    let mut current = supply.next();

    for order in orders {
        let Some(container) = current.as_mut() else {
            facility.dropped_orders += 1;
            facility.dropped_kilograms = facility.dropped_kilograms + order.amount;
            continue;
        };

        container.orders.push(order);
        if container.is_full() {
            facility.extend(current.take());
            current = supply.next();
        }
    }

    facility.extend(current.filter(|c| !c.is_empty()));

    facility
}

impl<'a> IntoIterator for &'a FacilityRecord {
    type Item = &'a FacilityEntry;
    type IntoIter = indexmap::map::Values<'a, u32, FacilityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<MineralContainer> for FacilityRecord {
    fn extend<T: IntoIterator<Item = MineralContainer>>(&mut self, iter: T) {
        for container in iter {
            self.insert(container);
        }
    }
}
