use crate::{
    error::Error as RoomiesError,
    filters::{
        CITY_PARAM, FURNISHED_TYPES_PARAM, FilterEdit, FilterState, FiltersView,
        HOUSE_TYPES_PARAM, HouseTypeName, MAX_RENT_PARAM, MIN_RENT_PARAM,
        PARKING_AVAILABLE_PARAM, PET_FRIENDLY_PARAM, QueryString, RentRange, Selection,
        UTILITIES_INCLUDED_PARAM, ViewportClass,
    },
    properties::FurnishedType,
};
use actix_web::{HttpResponse, http::header, web};
use std::str::FromStr;
use url::form_urlencoded;

const PROPERTIES_PATH: &str = "/properties";
/// Form field that carries the query string the filters panel was rendered for.
const QUERY_FIELD: &str = "query";

/// Submitted filters panel: the complete pending state plus the current query string.
struct FiltersForm {
    fields: Vec<(String, String)>,
}

impl FiltersForm {
    fn parse(body: &[u8]) -> Self {
        Self {
            fields: form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    fn query(&self) -> QueryString {
        QueryString::parse(self.first(QUERY_FIELD).unwrap_or_default())
    }

    fn first<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        self.all(name).next()
    }

    fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.fields
            .iter()
            .filter(move |(field_name, _)| field_name == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn all_parsed<T: FromStr<Err = anyhow::Error>>(&self, name: &str) -> anyhow::Result<Vec<T>> {
        self.all(name).map(parse_value).collect()
    }

    /// Edits that turn the pending state into the submitted one. Checkboxes are only submitted when
    /// checked, so absent fields clear their filters.
    fn to_edits(&self, pending: &FilterState) -> anyhow::Result<Vec<FilterEdit>> {
        let house_types = self.all_parsed::<HouseTypeName>(HOUSE_TYPES_PARAM)?;
        let furnished_types = self.all_parsed::<FurnishedType>(FURNISHED_TYPES_PARAM)?;

        let default_rent = RentRange::default();
        let mut edits = vec![FilterEdit::SetRentRange(
            default_rent.min().into(),
            default_rent.max().into(),
        )];
        match (
            self.first(MIN_RENT_PARAM).map(parse_rent).transpose()?,
            self.first(MAX_RENT_PARAM).map(parse_rent).transpose()?,
        ) {
            (Some(min), Some(max)) => edits.push(FilterEdit::SetRentRange(min, max)),
            (Some(min), None) => edits.push(FilterEdit::SetRentMin(min)),
            (None, Some(max)) => edits.push(FilterEdit::SetRentMax(max)),
            (None, None) => {}
        }

        edits.push(FilterEdit::SetCity(
            self.first(CITY_PARAM).map(parse_value).transpose()?,
        ));

        edits.extend(selection_edits(
            pending.house_types(),
            &house_types,
            FilterEdit::DeselectHouseType,
            FilterEdit::SelectHouseType,
        ));
        edits.extend(selection_edits(
            pending.furnished_types(),
            &furnished_types,
            FilterEdit::DeselectFurnishedType,
            FilterEdit::SelectFurnishedType,
        ));

        let is_checked = |name| self.first(name) == Some("true");
        edits.extend([
            FilterEdit::SetPetFriendly(is_checked(PET_FRIENDLY_PARAM)),
            FilterEdit::SetUtilitiesIncluded(is_checked(UTILITIES_INCLUDED_PARAM)),
            FilterEdit::SetParkingAvailable(is_checked(PARKING_AVAILABLE_PARAM)),
        ]);

        Ok(edits)
    }
}

/// Deselects values that are no longer submitted and selects the new ones after them, values that
/// stay selected keep their position.
fn selection_edits<T: Copy + PartialEq>(
    pending: &Selection<T>,
    submitted: &[T],
    deselect: fn(T) -> FilterEdit,
    select: fn(T) -> FilterEdit,
) -> Vec<FilterEdit> {
    pending
        .iter()
        .filter(|value| !submitted.contains(value))
        .copied()
        .map(deselect)
        .chain(
            submitted
                .iter()
                .filter(|value| !pending.contains(value))
                .copied()
                .map(select),
        )
        .collect()
}

fn parse_rent(value: &str) -> anyhow::Result<i64> {
    value.parse::<i64>().map_err(|err| {
        RoomiesError::client_with_root_cause(
            anyhow::Error::new(err).context("Rent amount is not valid."),
        )
        .into()
    })
}

fn parse_value<T: FromStr<Err = anyhow::Error>>(value: &str) -> anyhow::Result<T> {
    value
        .parse::<T>()
        .map_err(|err| RoomiesError::client_with_root_cause(err).into())
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Commits submitted filters and redirects to the listings page with the new query string.
pub async fn properties_filters_apply(
    body: web::Bytes,
    viewport: ViewportClass,
) -> Result<HttpResponse, RoomiesError> {
    let form = FiltersForm::parse(&body);
    let mut view = FiltersView::new(form.query(), viewport);
    for edit in form.to_edits(view.filters())? {
        view.edit(edit);
    }

    Ok(see_other(view.apply().to_location(PROPERTIES_PATH)))
}

/// Drops all filters and redirects to the bare listings page.
pub async fn properties_filters_reset(
    body: web::Bytes,
    viewport: ViewportClass,
) -> Result<HttpResponse, RoomiesError> {
    let mut view = FiltersView::new(FiltersForm::parse(&body).query(), viewport);
    Ok(see_other(view.reset().to_location(PROPERTIES_PATH)))
}
