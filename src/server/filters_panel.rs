use crate::{
    filters::{
        City, FiltersPresentation, FiltersView, HouseTypeName, PARKING_AVAILABLE_PARAM,
        PET_FRIENDLY_PARAM, RentRange, UTILITIES_INCLUDED_PARAM,
    },
    properties::FurnishedType,
};
use serde::Serialize;

/// Template model of the filters panel, pre-filled with the pending filters.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FiltersPanel {
    pub presentation: FiltersPresentation,
    pub is_overlay: bool,
    pub is_open: bool,
    /// Committed query string, submitted back so that applying filters keeps unrelated parameters.
    pub query: String,
    pub rent: RentControl,
    pub cities: Vec<FilterChoice>,
    pub house_types: Vec<FilterChoice>,
    pub furnished_types: Vec<FilterChoice>,
    pub amenities: Vec<FilterChoice>,
    pub is_default: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentControl {
    pub min: u32,
    pub max: u32,
    pub lower_limit: u32,
    pub upper_limit: u32,
    pub step: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl From<&FiltersView> for FiltersPanel {
    fn from(view: &FiltersView) -> Self {
        let filters = view.filters();
        let presentation = view.presentation();
        let (is_overlay, is_open) = match presentation {
            FiltersPresentation::Inline => (false, true),
            FiltersPresentation::Overlay { open } => (true, open),
        };

        Self {
            presentation,
            is_overlay,
            is_open,
            query: view.query().to_string(),
            rent: RentControl {
                min: filters.rent().min(),
                max: filters.rent().max(),
                lower_limit: RentRange::LOWER_LIMIT,
                upper_limit: RentRange::UPPER_LIMIT,
                step: RentRange::STEP,
            },
            cities: City::ALL
                .into_iter()
                .map(|city| FilterChoice {
                    value: city.as_str(),
                    label: city.label(),
                    selected: filters.city() == Some(city),
                })
                .collect(),
            house_types: HouseTypeName::ALL
                .into_iter()
                .map(|house_type| FilterChoice {
                    value: house_type.as_str(),
                    label: house_type.as_str(),
                    selected: filters.house_types().contains(&house_type),
                })
                .collect(),
            furnished_types: FurnishedType::ALL
                .into_iter()
                .map(|furnished_type| FilterChoice {
                    value: furnished_type.as_str(),
                    label: furnished_type.label(),
                    selected: filters.furnished_types().contains(&furnished_type),
                })
                .collect(),
            amenities: vec![
                FilterChoice {
                    value: PET_FRIENDLY_PARAM,
                    label: "Pet friendly",
                    selected: filters.pet_friendly(),
                },
                FilterChoice {
                    value: UTILITIES_INCLUDED_PARAM,
                    label: "Utilities included",
                    selected: filters.utilities_included(),
                },
                FilterChoice {
                    value: PARKING_AVAILABLE_PARAM,
                    label: "Parking available",
                    selected: filters.parking_available(),
                },
            ],
            is_default: filters.is_default(),
        }
    }
}
