use crate::{
    api::Api,
    error::Error as RoomiesError,
    filters::FilterState,
    properties::{HouseType, NewPropertyForm, PropertyId, PropertyWithDetails},
    users::UserId,
};
use anyhow::Context;
use time::OffsetDateTime;
use tracing::info;

/// API to browse and publish property listings.
pub struct PropertiesApiExt<'a> {
    api: &'a Api,
}

impl<'a> PropertiesApiExt<'a> {
    /// Instantiates properties API extension.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Retrieves listed properties that match the filters.
    pub async fn find(&self, filters: &FilterState) -> anyhow::Result<Vec<PropertyWithDetails>> {
        self.api.db.find_properties(&filters.to_predicate()).await
    }

    /// Retrieves property by its ID.
    pub async fn get(&self, id: PropertyId) -> anyhow::Result<Option<PropertyWithDetails>> {
        self.api.db.get_property(id).await
    }

    /// Retrieves all properties published by the landlord.
    pub async fn find_by_landlord(
        &self,
        landlord_id: UserId,
    ) -> anyhow::Result<Vec<PropertyWithDetails>> {
        self.api.db.find_landlord_properties(landlord_id).await
    }

    pub async fn get_house_types(&self) -> anyhow::Result<Vec<HouseType>> {
        self.api.db.get_house_types().await
    }

    /// Validates submitted listing form and stores a new property owned by the landlord.
    pub async fn create(
        &self,
        landlord_id: UserId,
        form: NewPropertyForm,
    ) -> anyhow::Result<PropertyId> {
        let property = form.into_new_property(landlord_id, OffsetDateTime::now_utc())?;

        let house_types = self.get_house_types().await?;
        if !house_types
            .iter()
            .any(|house_type| house_type.id == property.house_type_id)
        {
            return Err(RoomiesError::client("House type is not valid.").into());
        }

        self.api
            .db
            .insert_property(&property)
            .await
            .with_context(|| format!("Failed to insert property ({}).", property.id))?;

        info!(
            user.id = %landlord_id,
            property.id = %property.id,
            "Created a new property listing."
        );

        Ok(property.id)
    }
}

impl Api {
    /// Returns an API to work with property listings.
    pub fn properties(&self) -> PropertiesApiExt<'_> {
        PropertiesApiExt::new(self)
    }
}
