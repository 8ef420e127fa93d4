mod raw_house_type;
mod raw_property_image;
mod raw_property_with_details;

use self::{
    raw_house_type::RawHouseType, raw_property_image::RawPropertyImage,
    raw_property_with_details::RawPropertyWithDetails,
};
use crate::{
    database::Database,
    filters::ListingPredicate,
    properties::{
        HouseType, NewProperty, PropertyId, PropertyImage, PropertyWithDetails, VisibilityStatus,
    },
    users::UserId,
};
use itertools::Itertools;
use sqlx::{Postgres, QueryBuilder, query, query_as};
use uuid::Uuid;

const PROPERTIES_SELECT: &str = r#"
SELECT p.id, p.title, p.description, p.landlord_id, p.is_shared, p.shared_with, p.is_furnished,
       p.furnished_type, p.square_meters, p.type_of_flooring, p.energy_efficiency_rating,
       p.visibility_status, p.utilities_included, p.pet_friendly, p.parking_available,
       p.is_bathroom_shared, p.is_kitchen_shared, p.garden_available, p.storage_room_available,
       p.created_at, p.updated_at,
       h.id AS house_type_id, h.name AS house_type_name, h.description AS house_type_description,
       l.id AS location_id, l.address, l.city, l.state, l.country, l.postal_code, l.latitude,
       l.longitude, l.nearby_amenities,
       r.id AS rent_details_id, r.rent_amount, r.currency, r.security_deposit, r.utility_costs,
       r.other_charges
FROM properties AS p
INNER JOIN house_types AS h ON h.id = p.house_type_id
INNER JOIN locations AS l ON l.id = p.location_id
INNER JOIN rent_details AS r ON r.id = p.rent_details_id
WHERE p.deleted_at IS NULL"#;

/// Extends primary database with the property listings-related methods.
impl Database {
    /// Retrieves listed properties matching the predicate, newest first.
    pub async fn find_properties(
        &self,
        predicate: &ListingPredicate,
    ) -> anyhow::Result<Vec<PropertyWithDetails>> {
        let raw_properties = find_properties_query(predicate)
            .build_query_as::<RawPropertyWithDetails>()
            .fetch_all(&self.pool)
            .await?;

        self.with_images(raw_properties).await
    }

    /// Retrieves a single non-deleted property regardless of its visibility.
    pub async fn get_property(
        &self,
        id: PropertyId,
    ) -> anyhow::Result<Option<PropertyWithDetails>> {
        let mut builder = QueryBuilder::<Postgres>::new(PROPERTIES_SELECT);
        builder.push(" AND p.id = ").push_bind(*id);

        let Some(raw_property) = builder
            .build_query_as::<RawPropertyWithDetails>()
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_images(vec![raw_property]).await?.pop())
    }

    /// Retrieves all non-deleted properties of the landlord, newest first.
    pub async fn find_landlord_properties(
        &self,
        landlord_id: UserId,
    ) -> anyhow::Result<Vec<PropertyWithDetails>> {
        let mut builder = QueryBuilder::<Postgres>::new(PROPERTIES_SELECT);
        builder
            .push(" AND p.landlord_id = ")
            .push_bind(*landlord_id)
            .push(" ORDER BY p.created_at DESC");

        let raw_properties = builder
            .build_query_as::<RawPropertyWithDetails>()
            .fetch_all(&self.pool)
            .await?;

        self.with_images(raw_properties).await
    }

    /// Retrieves all known house types.
    pub async fn get_house_types(&self) -> anyhow::Result<Vec<HouseType>> {
        Ok(query_as::<_, RawHouseType>(
            r#"
SELECT id, name, description
FROM house_types
ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(HouseType::from)
        .collect())
    }

    /// Inserts property with its location, rent details and primary image.
    pub async fn insert_property(&self, property: &NewProperty) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;

        let location = &property.location;
        query(
            r#"
INSERT INTO locations (id, address, city, state, country, postal_code, latitude, longitude, nearby_amenities)
VALUES ( $1, $2, $3, $4, $5, $6, $7, $8, $9 )
            "#,
        )
        .bind(location.id)
        .bind(&location.address)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.country)
        .bind(&location.postal_code)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.nearby_amenities)
        .execute(&mut *tx)
        .await?;

        let rent_details = &property.rent_details;
        query(
            r#"
INSERT INTO rent_details (id, rent_amount, currency, security_deposit, utility_costs, other_charges)
VALUES ( $1, $2, $3, $4, $5, $6 )
            "#,
        )
        .bind(rent_details.id)
        .bind(i32::try_from(rent_details.rent_amount)?)
        .bind(&rent_details.currency)
        .bind(i32::try_from(rent_details.security_deposit)?)
        .bind(rent_details.utility_costs.map(i32::try_from).transpose()?)
        .bind(rent_details.other_charges.map(i32::try_from).transpose()?)
        .execute(&mut *tx)
        .await?;

        query(
            r#"
INSERT INTO properties (id, title, description, landlord_id, house_type_id, location_id,
                        rent_details_id, is_shared, shared_with, is_furnished, furnished_type,
                        visibility_status, utilities_included, pet_friendly, parking_available,
                        created_at, updated_at)
VALUES ( $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $16 )
            "#,
        )
        .bind(*property.id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(*property.landlord_id)
        .bind(property.house_type_id)
        .bind(location.id)
        .bind(rent_details.id)
        .bind(property.is_shared)
        .bind(property.shared_with.map(i32::try_from).transpose()?)
        .bind(property.is_furnished)
        .bind(property.furnished_type.as_str())
        .bind(property.visibility_status.as_str())
        .bind(property.utilities_included)
        .bind(property.pet_friendly)
        .bind(property.parking_available)
        .bind(property.created_at)
        .execute(&mut *tx)
        .await?;

        if let Some(ref image_url) = property.image_url {
            query(
                r#"
INSERT INTO property_images (id, property_id, image_url, is_primary, created_at)
VALUES ( $1, $2, $3, TRUE, $4 )
                "#,
            )
            .bind(Uuid::now_v7())
            .bind(*property.id)
            .bind(image_url.as_str())
            .bind(property.created_at)
            .execute(&mut *tx)
            .await?;
        }

        Ok(tx.commit().await?)
    }

    /// Converts raw rows and attaches images to every property, primary image first.
    async fn with_images(
        &self,
        raw_properties: Vec<RawPropertyWithDetails>,
    ) -> anyhow::Result<Vec<PropertyWithDetails>> {
        if raw_properties.is_empty() {
            return Ok(vec![]);
        }

        let property_ids = raw_properties.iter().map(|raw| raw.id).collect::<Vec<_>>();
        let mut images = query_as::<_, RawPropertyImage>(
            r#"
SELECT id, property_id, image_url, is_primary
FROM property_images
WHERE property_id = ANY($1) AND deleted_at IS NULL
ORDER BY is_primary DESC, created_at
            "#,
        )
        .bind(property_ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(PropertyImage::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?
        .into_iter()
        .into_group_map_by(|image| image.property_id);

        raw_properties
            .into_iter()
            .map(|raw_property| {
                let mut property = PropertyWithDetails::try_from(raw_property)?;
                property.images = images.remove(&property.property.id).unwrap_or_default();
                Ok(property)
            })
            .collect()
    }
}

fn find_properties_query(predicate: &ListingPredicate) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(PROPERTIES_SELECT);
    builder
        .push(" AND p.visibility_status = ")
        .push_bind(VisibilityStatus::Listed.as_str());
    predicate.push_conditions(&mut builder);
    builder.push(" ORDER BY p.created_at DESC");
    builder
}
