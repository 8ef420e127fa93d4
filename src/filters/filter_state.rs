use crate::{
    filters::{City, FilterEdit, HouseTypeName, ListingPredicate, QueryString, RentRange, Selection},
    properties::FurnishedType,
};
use serde::Serialize;

pub const MIN_RENT_PARAM: &str = "minRent";
pub const MAX_RENT_PARAM: &str = "maxRent";
pub const CITY_PARAM: &str = "city";
pub const HOUSE_TYPES_PARAM: &str = "houseTypes";
pub const FURNISHED_TYPES_PARAM: &str = "furnishedTypes";
pub const PET_FRIENDLY_PARAM: &str = "petFriendly";
pub const UTILITIES_INCLUDED_PARAM: &str = "utilitiesIncluded";
pub const PARKING_AVAILABLE_PARAM: &str = "parkingAvailable";

/// Listing search filters. The default value is the "no filters applied" state, it's never written
/// to the URL.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    rent: RentRange,
    city: Option<City>,
    house_types: Selection<HouseTypeName>,
    furnished_types: Selection<FurnishedType>,
    pet_friendly: bool,
    utilities_included: bool,
    parking_available: bool,
}

impl FilterState {
    /// Derives filters from the query string. Never fails: missing or malformed parameters resolve
    /// to their defaults.
    pub fn parse(query: &QueryString) -> Self {
        Self {
            rent: RentRange::parse_lossy(query.get(MIN_RENT_PARAM), query.get(MAX_RENT_PARAM)),
            city: query
                .get(CITY_PARAM)
                .and_then(|city| city.parse::<City>().ok()),
            house_types: query
                .get(HOUSE_TYPES_PARAM)
                .map(Selection::parse_lossy)
                .unwrap_or_default(),
            furnished_types: query
                .get(FURNISHED_TYPES_PARAM)
                .map(Selection::parse_lossy)
                .unwrap_or_default(),
            pet_friendly: query.get(PET_FRIENDLY_PARAM) == Some("true"),
            utilities_included: query.get(UTILITIES_INCLUDED_PARAM) == Some("true"),
            parking_available: query.get(PARKING_AVAILABLE_PARAM) == Some("true"),
        }
    }

    /// Writes filters to a copy of `previous` query. Filters that are at their default value are
    /// removed from the query, parameters that don't belong to filters are left untouched.
    pub fn serialize(&self, previous: &QueryString) -> QueryString {
        let default = Self::default();
        let mut query = previous.clone();

        set_or_delete(
            &mut query,
            MIN_RENT_PARAM,
            (self.rent.min() != default.rent.min()).then(|| self.rent.min().to_string()),
        );
        set_or_delete(
            &mut query,
            MAX_RENT_PARAM,
            (self.rent.max() != default.rent.max()).then(|| self.rent.max().to_string()),
        );
        set_or_delete(
            &mut query,
            CITY_PARAM,
            self.city.map(|city| city.as_str().to_string()),
        );
        set_or_delete(
            &mut query,
            HOUSE_TYPES_PARAM,
            Some(self.house_types.join()).filter(|value| !value.is_empty()),
        );
        set_or_delete(
            &mut query,
            FURNISHED_TYPES_PARAM,
            Some(self.furnished_types.join()).filter(|value| !value.is_empty()),
        );
        for (name, enabled) in [
            (PET_FRIENDLY_PARAM, self.pet_friendly),
            (UTILITIES_INCLUDED_PARAM, self.utilities_included),
            (PARKING_AVAILABLE_PARAM, self.parking_available),
        ] {
            set_or_delete(&mut query, name, enabled.then(|| "true".to_string()));
        }

        query
    }

    /// Returns default filters together with the bare query the listings page is committed to,
    /// leftover parameters from any previous state are all dropped.
    pub fn reset() -> (Self, QueryString) {
        (Self::default(), QueryString::default())
    }

    /// Applies a single user edit.
    pub fn apply_edit(&mut self, edit: FilterEdit) {
        match edit {
            FilterEdit::SetRentMin(min) => self.rent = self.rent.with_min(min),
            FilterEdit::SetRentMax(max) => self.rent = self.rent.with_max(max),
            FilterEdit::SetRentRange(min, max) => self.rent = RentRange::from_bounds(min, max),
            FilterEdit::SetCity(city) => self.city = city,
            FilterEdit::SelectHouseType(house_type) => self.house_types.select(house_type),
            FilterEdit::DeselectHouseType(house_type) => self.house_types.deselect(house_type),
            FilterEdit::SelectFurnishedType(furnished_type) => {
                self.furnished_types.select(furnished_type)
            }
            FilterEdit::DeselectFurnishedType(furnished_type) => {
                self.furnished_types.deselect(furnished_type)
            }
            FilterEdit::SetPetFriendly(value) => self.pet_friendly = value,
            FilterEdit::SetUtilitiesIncluded(value) => self.utilities_included = value,
            FilterEdit::SetParkingAvailable(value) => self.parking_available = value,
        }
    }

    /// Same as [`FilterState::apply_edit`], but for a sequence of edits.
    pub fn with_edits(mut self, edits: impl IntoIterator<Item = FilterEdit>) -> Self {
        for edit in edits {
            self.apply_edit(edit);
        }
        self
    }

    /// Projects filters into the parameters of the listings query.
    pub fn to_predicate(&self) -> ListingPredicate {
        ListingPredicate {
            rent: self.rent.min()..=self.rent.max(),
            city: self.city,
            house_types: self.house_types.iter().copied().collect(),
            furnished_types: self.furnished_types.iter().copied().collect(),
            pet_friendly: self.pet_friendly,
            utilities_included: self.utilities_included,
            parking_available: self.parking_available,
        }
    }

    pub fn rent(&self) -> RentRange {
        self.rent
    }

    pub fn city(&self) -> Option<City> {
        self.city
    }

    pub fn house_types(&self) -> &Selection<HouseTypeName> {
        &self.house_types
    }

    pub fn furnished_types(&self) -> &Selection<FurnishedType> {
        &self.furnished_types
    }

    pub fn pet_friendly(&self) -> bool {
        self.pet_friendly
    }

    pub fn utilities_included(&self) -> bool {
        self.utilities_included
    }

    pub fn parking_available(&self) -> bool {
        self.parking_available
    }

    /// Whether any filter differs from its default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn set_or_delete(query: &mut QueryString, name: &str, value: Option<String>) {
    match value {
        Some(value) => query.set(name, value),
        None => query.delete(name),
    }
}

#[cfg(test)]
mod tests {
    use super::FilterState;
    use crate::{
        filters::{City, FilterEdit, HouseTypeName, QueryString, RentRange},
        properties::FurnishedType,
    };
    use insta::assert_json_snapshot;

    fn all_edits_state() -> FilterState {
        FilterState::default().with_edits([
            FilterEdit::SetRentRange(400, 3100),
            FilterEdit::SetCity(Some(City::TheHague)),
            FilterEdit::SelectHouseType(HouseTypeName::Room),
            FilterEdit::SelectHouseType(HouseTypeName::Studio),
            FilterEdit::SelectFurnishedType(FurnishedType::Partially),
            FilterEdit::SetPetFriendly(true),
            FilterEdit::SetUtilitiesIncluded(true),
            FilterEdit::SetParkingAvailable(true),
        ])
    }

    #[test]
    fn default() {
        let state = FilterState::default();
        assert_eq!(state.rent(), RentRange::new(600, 2500).unwrap());
        assert_eq!(state.city(), None);
        assert!(state.house_types().is_empty());
        assert!(state.furnished_types().is_empty());
        assert!(!state.pet_friendly());
        assert!(!state.utilities_included());
        assert!(!state.parking_available());
        assert!(state.is_default());
    }

    #[test]
    fn parses_empty_and_malformed_queries_to_defaults() {
        assert_eq!(
            FilterState::parse(&QueryString::default()),
            FilterState::default()
        );
        assert_eq!(
            FilterState::parse(&QueryString::parse(
                "minRent=&maxRent=lots&city=berlin&houseTypes=,&furnishedTypes=Fully&petFriendly=1"
            )),
            FilterState::default()
        );
    }

    #[test]
    fn parses_malformed_rent_and_empty_house_types() {
        let state = FilterState::parse(&QueryString::parse("minRent=abc&houseTypes="));
        assert_eq!(state.rent().min(), 600);
        assert!(state.house_types().is_empty());
    }

    #[test]
    fn parses_booleans_strictly() {
        for value in ["yes", "True", "TRUE", "1", "on", ""] {
            let state = FilterState::parse(&QueryString::parse(&format!("petFriendly={value}")));
            assert!(!state.pet_friendly(), "{value}");
        }

        let state = FilterState::parse(&QueryString::parse(
            "petFriendly=true&utilitiesIncluded=true&parkingAvailable=true",
        ));
        assert!(state.pet_friendly());
        assert!(state.utilities_included());
        assert!(state.parking_available());
    }

    #[test]
    fn parses_query() {
        let state = FilterState::parse(&QueryString::parse(
            "maxRent=1800&city=Amsterdam&houseTypes=Room,Apartment,Room&furnishedTypes=fully",
        ));
        assert_eq!(state.rent(), RentRange::new(600, 1800).unwrap());
        assert_eq!(state.city(), Some(City::Amsterdam));
        assert_eq!(state.house_types().join(), "Room,Apartment");
        assert_eq!(state.furnished_types().join(), "fully");
    }

    #[test]
    fn suppresses_defaults() {
        let previous = QueryString::parse(
            "sort=newest&minRent=600&maxRent=1000&city=utrecht&houseTypes=Room&furnishedTypes=fully&petFriendly=true&utilitiesIncluded=false&parkingAvailable=true&page=3",
        );
        let query = FilterState::default().serialize(&previous);
        assert_eq!(query.to_string(), "sort=newest&page=3");
    }

    #[test]
    fn serializes_only_changed_filters() {
        let state = FilterState::default().with_edits([
            FilterEdit::SetRentMax(1800),
            FilterEdit::SelectHouseType(HouseTypeName::Apartment),
            FilterEdit::SelectHouseType(HouseTypeName::Room),
        ]);

        let query = state.serialize(&QueryString::default());
        assert_eq!(query.to_string(), "maxRent=1800&houseTypes=Apartment,Room");
        for name in [
            "minRent",
            "city",
            "furnishedTypes",
            "petFriendly",
            "utilitiesIncluded",
            "parkingAvailable",
        ] {
            assert!(!query.contains(name), "{name}");
        }
    }

    #[test]
    fn preserves_unrelated_parameters() {
        let previous = QueryString::parse("sort=newest&minRent=600");
        let state = FilterState::default().with_edits([FilterEdit::SetRentMin(700)]);
        assert_eq!(
            state.serialize(&previous),
            QueryString::parse("sort=newest&minRent=700")
        );
    }

    #[test]
    fn keeps_selection_order_in_query() {
        let state = FilterState::default().with_edits([
            FilterEdit::SelectFurnishedType(FurnishedType::Unfurnished),
            FilterEdit::SelectFurnishedType(FurnishedType::Fully),
        ]);
        assert_eq!(
            state.serialize(&QueryString::default()).to_string(),
            "furnishedTypes=unfurnished,fully"
        );
    }

    #[test]
    fn round_trips_reachable_states() {
        let previous_queries = [
            QueryString::default(),
            QueryString::parse("sort=newest&page=2"),
            QueryString::parse("minRent=900&city=enschede&houseTypes=House&petFriendly=true"),
        ];

        let states = [
            FilterState::default(),
            all_edits_state(),
            FilterState::default().with_edits([FilterEdit::SetRentRange(0, 0)]),
            FilterState::default().with_edits([FilterEdit::SetRentRange(5000, 5000)]),
            FilterState::default().with_edits([FilterEdit::SetRentMin(2500)]),
            FilterState::default().with_edits([
                FilterEdit::SelectHouseType(HouseTypeName::House),
                FilterEdit::SelectHouseType(HouseTypeName::Apartment),
                FilterEdit::DeselectHouseType(HouseTypeName::House),
                FilterEdit::SetCity(Some(City::Rotterdam)),
                FilterEdit::SetCity(None),
            ]),
            FilterState::default().with_edits(
                FurnishedType::ALL
                    .into_iter()
                    .map(FilterEdit::SelectFurnishedType),
            ),
        ];

        for previous in &previous_queries {
            for state in &states {
                let query = state.serialize(previous);
                let reparsed = FilterState::parse(&QueryString::parse(&query.to_string()));
                assert_eq!(&reparsed, state, "{query}");
            }
        }
    }

    #[test]
    fn resets_all_filter_parameters() {
        let (state, query) = FilterState::reset();
        assert!(state.is_default());
        assert!(query.is_empty());
        assert_eq!(query.to_location("/properties"), "/properties");

        assert_eq!(state.serialize(&query), query);
        assert_eq!(FilterState::reset().1, query);
    }

    #[test]
    fn projects_predicate() {
        let predicate = FilterState::default().to_predicate();
        assert_eq!(predicate.rent, 600..=2500);
        assert_eq!(predicate.city, None);
        assert!(predicate.house_types.is_empty());
        assert!(predicate.furnished_types.is_empty());
        assert!(!predicate.pet_friendly);

        let predicate = all_edits_state().to_predicate();
        assert_eq!(predicate.rent, 400..=3100);
        assert_eq!(predicate.city, Some(City::TheHague));
        assert_eq!(
            predicate.house_types,
            vec![HouseTypeName::Room, HouseTypeName::Studio]
        );
        assert_eq!(predicate.furnished_types, vec![FurnishedType::Partially]);
        assert!(predicate.pet_friendly);
        assert!(predicate.utilities_included);
        assert!(predicate.parking_available);
    }

    #[test]
    fn serialization() {
        assert_json_snapshot!(all_edits_state(), @r###"
        {
          "rent": {
            "min": 400,
            "max": 3100
          },
          "city": "the hague",
          "houseTypes": [
            "Room",
            "Studio"
          ],
          "furnishedTypes": [
            "partially"
          ],
          "petFriendly": true,
          "utilitiesIncluded": true,
          "parkingAvailable": true
        }
        "###);
    }
}
