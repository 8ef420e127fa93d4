use crate::{
    filters::{City, HouseTypeName},
    properties::FurnishedType,
};
use serde::Serialize;
use sqlx::{Postgres, QueryBuilder};
use std::ops::RangeInclusive;

/// Parameters of the listings query derived from the filters.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListingPredicate {
    /// Inclusive monthly rent range.
    pub rent: RangeInclusive<u32>,
    /// Exact (case-insensitive) city match, if set.
    pub city: Option<City>,
    /// Listing house type must be one of these, if not empty.
    pub house_types: Vec<HouseTypeName>,
    /// Listing furnishing must be one of these, if not empty.
    pub furnished_types: Vec<FurnishedType>,
    /// Amenity toggles only ever include: `true` requires the amenity, `false` doesn't constrain.
    pub pet_friendly: bool,
    pub utilities_included: bool,
    pub parking_available: bool,
}

impl ListingPredicate {
    /// Appends ` AND ...` conditions to a query that already has a `WHERE` clause. Expects
    /// `properties`, `rent_details`, `locations` and `house_types` to be aliased as `p`, `r`, `l`
    /// and `h` respectively.
    pub fn push_conditions(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder
            .push(" AND r.rent_amount BETWEEN ")
            .push_bind(i64::from(*self.rent.start()))
            .push(" AND ")
            .push_bind(i64::from(*self.rent.end()));

        if let Some(city) = self.city {
            builder
                .push(" AND lower(l.city) = ")
                .push_bind(city.as_str());
        }

        if !self.house_types.is_empty() {
            builder.push(" AND h.name = ANY(").push_bind(
                self.house_types
                    .iter()
                    .map(|house_type| house_type.as_str().to_string())
                    .collect::<Vec<_>>(),
            );
            builder.push(")");
        }

        if !self.furnished_types.is_empty() {
            builder.push(" AND p.furnished_type = ANY(").push_bind(
                self.furnished_types
                    .iter()
                    .map(|furnished_type| furnished_type.as_str().to_string())
                    .collect::<Vec<_>>(),
            );
            builder.push(")");
        }

        for (column, required) in [
            ("p.pet_friendly", self.pet_friendly),
            ("p.utilities_included", self.utilities_included),
            ("p.parking_available", self.parking_available),
        ] {
            if required {
                builder.push(format!(" AND {column} = TRUE"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        filters::{City, FilterEdit, FilterState, HouseTypeName},
        properties::FurnishedType,
    };
    use insta::assert_snapshot;
    use sqlx::{Postgres, QueryBuilder};

    fn to_sql(state: &FilterState) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT p.id FROM properties AS p WHERE p.deleted_at IS NULL");
        state.to_predicate().push_conditions(&mut builder);
        builder.sql().to_string()
    }

    #[test]
    fn default_filters_only_constrain_rent() {
        assert_snapshot!(to_sql(&FilterState::default()), @"SELECT p.id FROM properties AS p WHERE p.deleted_at IS NULL AND r.rent_amount BETWEEN $1 AND $2");
    }

    #[test]
    fn all_filters() {
        let state = FilterState::default().with_edits([
            FilterEdit::SetCity(Some(City::Utrecht)),
            FilterEdit::SelectHouseType(HouseTypeName::Apartment),
            FilterEdit::SelectFurnishedType(FurnishedType::Fully),
            FilterEdit::SetPetFriendly(true),
            FilterEdit::SetUtilitiesIncluded(true),
            FilterEdit::SetParkingAvailable(true),
        ]);
        assert_snapshot!(to_sql(&state), @"SELECT p.id FROM properties AS p WHERE p.deleted_at IS NULL AND r.rent_amount BETWEEN $1 AND $2 AND lower(l.city) = $3 AND h.name = ANY($4) AND p.furnished_type = ANY($5) AND p.pet_friendly = TRUE AND p.utilities_included = TRUE AND p.parking_available = TRUE");
    }

    #[test]
    fn disabled_toggles_do_not_exclude_listings() {
        let state = FilterState::default().with_edits([
            FilterEdit::SetPetFriendly(false),
            FilterEdit::SetParkingAvailable(true),
        ]);
        assert_snapshot!(to_sql(&state), @"SELECT p.id FROM properties AS p WHERE p.deleted_at IS NULL AND r.rent_amount BETWEEN $1 AND $2 AND p.parking_available = TRUE");
    }
}
