//! Fixtures for tests
use crate::crop::CropRecord;
use crate::mineral::{MineralID, MineralStock};
use crate::scenario::Scenario;
use crate::units::Kilograms;
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

#[fixture]
pub fn crops() -> Vec<CropRecord> {
    [("Corn", 368), ("Wheat", 452), ("Kale", 212), ("Turnip", 84)]
        .into_iter()
        .map(|(crop_type, plants)| CropRecord {
            crop_type: crop_type.into(),
            plants,
        })
        .collect()
}

#[fixture]
pub fn mineral_stock() -> MineralStock {
    MineralStock::new(
        [
            ("Onyx", 2943),
            ("Amethyst", 3958),
            ("Bloodstone", 4010),
            ("Emerald", 3850),
        ]
        .into_iter()
        .map(|(mineral, kilograms)| (MineralID::new(mineral), Kilograms(kilograms))),
    )
    .unwrap()
}

#[fixture]
pub fn scenario(crops: Vec<CropRecord>, mineral_stock: MineralStock) -> Scenario {
    Scenario {
        crops,
        minerals: mineral_stock,
    }
}
