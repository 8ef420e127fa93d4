use crate::{
    filters::{City, HouseTypeName},
    properties::FurnishedType,
};

/// Every change a user can make to the pending filters. Rent values are raw control values, they
/// are snapped to the rent grid when applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    SetRentMin(i64),
    SetRentMax(i64),
    SetRentRange(i64, i64),
    SetCity(Option<City>),
    SelectHouseType(HouseTypeName),
    DeselectHouseType(HouseTypeName),
    SelectFurnishedType(FurnishedType),
    DeselectFurnishedType(FurnishedType),
    SetPetFriendly(bool),
    SetUtilitiesIncluded(bool),
    SetParkingAvailable(bool),
}
