use serde::Serialize;
use std::{fmt, str::FromStr};

/// Multi-value filter selection. Keeps the order in which values were selected (that's the order
/// they are written to the query string in), but compares as a set.
#[derive(Serialize, Debug, Clone, Eq)]
#[serde(transparent)]
pub struct Selection<T>(Vec<T>);

impl<T: Copy + PartialEq> Selection<T> {
    /// Adds value to the end of the selection, no-op if the value is already selected.
    pub fn select(&mut self, value: T) {
        if !self.0.contains(&value) {
            self.0.push(value);
        }
    }

    /// Removes value from the selection, order of the remaining values is preserved.
    pub fn deselect(&mut self, value: T) {
        self.0.retain(|selected| *selected != value);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Copy + PartialEq + FromStr> Selection<T> {
    /// Parses comma-separated list of values. Values that cannot be parsed are dropped, duplicates
    /// collapse into the first occurrence.
    pub fn parse_lossy(value: &str) -> Self {
        value
            .split(',')
            .filter_map(|value| value.parse::<T>().ok())
            .collect()
    }
}

impl<T: Copy + PartialEq + fmt::Display> Selection<T> {
    /// Joins selected values with commas, in selection order.
    pub fn join(&self) -> String {
        self.0
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: Copy + PartialEq> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut selection = Self::default();
        for value in iter {
            selection.select(value);
        }
        selection
    }
}

impl<T: PartialEq> PartialEq for Selection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|value| other.0.contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;
    use crate::filters::HouseTypeName;

    #[test]
    fn keeps_selection_order_and_collapses_duplicates() {
        let mut selection = Selection::default();
        selection.select(HouseTypeName::Room);
        selection.select(HouseTypeName::Apartment);
        selection.select(HouseTypeName::Room);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.join(), "Room,Apartment");

        selection.deselect(HouseTypeName::Room);
        selection.select(HouseTypeName::Room);
        assert_eq!(selection.join(), "Apartment,Room");

        selection.deselect(HouseTypeName::Studio);
        assert_eq!(selection.join(), "Apartment,Room");
    }

    #[test]
    fn compares_as_set() {
        let one: Selection<_> = [HouseTypeName::Room, HouseTypeName::House].into_iter().collect();
        let two: Selection<_> = [HouseTypeName::House, HouseTypeName::Room].into_iter().collect();
        assert_eq!(one, two);

        let three: Selection<_> = [HouseTypeName::House].into_iter().collect();
        assert_ne!(one, three);
        assert_ne!(three, one);
    }

    #[test]
    fn parses_lossy() {
        assert_eq!(
            Selection::<HouseTypeName>::parse_lossy("Apartment,Room").join(),
            "Apartment,Room"
        );
        assert_eq!(
            Selection::<HouseTypeName>::parse_lossy("Room,Castle,,Room,Studio").join(),
            "Room,Studio"
        );
        assert!(Selection::<HouseTypeName>::parse_lossy("").is_empty());
        assert!(Selection::<HouseTypeName>::parse_lossy(",,").is_empty());
    }
}
