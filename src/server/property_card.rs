use crate::properties::PropertyWithDetails;
use serde::Serialize;

/// Template model of a property in the listings grid.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCard<'a> {
    pub property: &'a PropertyWithDetails,
    pub href: String,
    pub primary_image_url: Option<&'a str>,
}

impl<'a> PropertyCard<'a> {
    /// Card that links to `{path}/{id}`.
    pub fn new(property: &'a PropertyWithDetails, path: &str) -> Self {
        Self {
            href: format!("{path}/{}", property.property.id),
            primary_image_url: property
                .primary_image()
                .map(|image| image.image_url.as_str()),
            property,
        }
    }

    pub fn from_all(properties: &'a [PropertyWithDetails], path: &str) -> Vec<Self> {
        properties
            .iter()
            .map(|property| Self::new(property, path))
            .collect()
    }
}
