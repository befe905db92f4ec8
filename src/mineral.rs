//! The mineral stockpile and the orders drawn from it.
use crate::id::define_id_type;
use crate::units::Kilograms;
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

define_id_type! {MineralID}

/// The largest amount of a mineral which can be withdrawn in one order
pub const PARCEL_SIZE: Kilograms = Kilograms(5);

/// A single withdrawal from the stockpile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// The mineral withdrawn
    pub mineral: MineralID,
    /// The amount withdrawn, never more than [`PARCEL_SIZE`]
    pub amount: Kilograms,
}

/// A finite stockpile of minerals.
///
/// The remaining amounts are private: the stock can only be listed and drawn down.
#[derive(Debug, Clone, PartialEq)]
pub struct MineralStock {
    remaining: IndexMap<MineralID, Kilograms>,
}

impl MineralStock {
    /// Create a stockpile from minerals and their amounts.
    ///
    /// Each mineral may only appear once.
    pub fn new<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = (MineralID, Kilograms)>,
    {
        let mut remaining = IndexMap::new();
        for (mineral, amount) in iter {
            ensure!(
                !remaining.contains_key(&mineral),
                "Duplicate mineral in stockpile: {mineral}"
            );
            remaining.insert(mineral, amount);
        }

        Ok(Self { remaining })
    }

    /// The minerals in the stockpile, in the order they were added
    pub fn products(&self) -> Vec<MineralID> {
        self.remaining.keys().cloned().collect()
    }

    /// Withdraw up to one parcel of the given mineral.
    ///
    /// The order's amount is zero once the mineral has run out.
    pub fn process(&mut self, mineral: &MineralID) -> Result<Order> {
        let remaining = self
            .remaining
            .get_mut(mineral)
            .with_context(|| format!("Unknown mineral: {mineral}"))?;

        let amount = (*remaining).min(PARCEL_SIZE);
        *remaining = *remaining - amount;

        Ok(Order {
            mineral: mineral.clone(),
            amount,
        })
    }
}

/// Draw down the whole stockpile in parcels.
///
/// Minerals are processed in the stockpile's order. Each is withdrawn in full parcels until a
/// short (or empty) withdrawal shows it has run out. Empty withdrawals do not produce orders.
pub fn allocate_orders(stock: &mut MineralStock) -> Result<Vec<Order>> {
    let mut orders = Vec::new();
    for mineral in stock.products() {
        let first = orders.len();
        loop {
            let order = stock.process(&mineral)?;
            let is_full_parcel = order.amount == PARCEL_SIZE;
            if !order.amount.is_zero() {
                orders.push(order);
            }

            if !is_full_parcel {
                break;
            }
        }

        debug!("Allocated {} orders of {mineral}", orders.len() - first);
    }

    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, mineral_stock};
    use itertools::Itertools;
    use rstest::rstest;

    fn stock_of(kilograms: u32) -> MineralStock {
        MineralStock::new([(MineralID::new("Onyx"), Kilograms(kilograms))]).unwrap()
    }

    #[test]
    fn test_mineral_stock_duplicate() {
        assert_error!(
            MineralStock::new([
                (MineralID::new("Onyx"), Kilograms(5)),
                (MineralID::new("Onyx"), Kilograms(10))
            ]),
            "Duplicate mineral in stockpile: Onyx"
        );
    }

    #[rstest]
    fn test_products_order(mineral_stock: MineralStock) {
        assert_eq!(
            mineral_stock.products(),
            ["Onyx", "Amethyst", "Bloodstone", "Emerald"].map(MineralID::new)
        );
    }

    #[test]
    fn test_process() {
        let mut stock = stock_of(7);
        let onyx = MineralID::new("Onyx");
        assert_eq!(stock.process(&onyx).unwrap().amount, Kilograms(5));
        assert_eq!(stock.process(&onyx).unwrap().amount, Kilograms(2));
        assert_eq!(stock.process(&onyx).unwrap().amount, Kilograms(0));
        assert_eq!(stock.remaining[&onyx], Kilograms::ZERO);
    }

    #[test]
    fn test_process_unknown_mineral() {
        assert_error!(
            stock_of(5).process(&MineralID::new("Ruby")),
            "Unknown mineral: Ruby"
        );
    }

    #[rstest]
    #[case(0, 0, None)]
    #[case(3, 1, Some(3))]
    #[case(5, 1, Some(5))]
    #[case(10, 2, Some(5))]
    #[case(12, 3, Some(2))]
    #[case(2943, 589, Some(3))]
    fn test_allocate_orders(
        #[case] kilograms: u32,
        #[case] num_orders: usize,
        #[case] last_amount: Option<u32>,
    ) {
        let mut stock = stock_of(kilograms);
        let orders = allocate_orders(&mut stock).unwrap();

        assert_eq!(orders.len(), num_orders);
        assert_eq!(orders.last().map(|o| o.amount.value()), last_amount);
        if let Some((_, rest)) = orders.split_last() {
            assert!(rest.iter().all(|o| o.amount == PARCEL_SIZE));
        }
        assert_eq!(
            orders.iter().map(|o| o.amount).sum::<Kilograms>(),
            Kilograms(kilograms)
        );
        assert!(stock.remaining.values().all(|k| k.is_zero()));
    }

    #[rstest]
    fn test_allocate_orders_all_minerals(mut mineral_stock: MineralStock) {
        let orders = allocate_orders(&mut mineral_stock).unwrap();
        assert_eq!(orders.len(), 589 + 792 + 802 + 770);

        // Minerals are drained one at a time in stockpile order
        let minerals: Vec<_> = orders.iter().map(|o| o.mineral.clone()).dedup().collect();
        assert_eq!(minerals, mineral_stock.products());
        assert!(mineral_stock.remaining.values().all(|k| k.is_zero()));
    }
}
