use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{EnumIter, EnumString};
use thiserror::Error;

pub type PointCategoryPrimitive = i16;

/// The fixed kinds of ecological collection points shown on the map.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PointCategory {
    RecyclingPoint       = 0,
    RecyclingCenter      = 1,
    SeedlingDistribution = 2,
    PlantSales           = 3,
    LampCollection       = 4,
    OilCollection        = 5,
    MedicineCollection   = 6,
    ElectronicsDonation  = 7,
}

#[derive(Debug, Error)]
#[error("Invalid point category primitive: {0}")]
pub struct InvalidPointCategoryPrimitive(PointCategoryPrimitive);

impl TryFrom<PointCategoryPrimitive> for PointCategory {
    type Error = InvalidPointCategoryPrimitive;
    fn try_from(from: PointCategoryPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPointCategoryPrimitive(from))
    }
}

impl From<PointCategory> for PointCategoryPrimitive {
    fn from(from: PointCategory) -> Self {
        from.to_i16().expect("Point category primitive")
    }
}
