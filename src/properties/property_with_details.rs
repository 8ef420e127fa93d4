use crate::properties::{HouseType, Location, Property, PropertyImage, RentDetails};
use serde::Serialize;

/// Property together with everything the listing card and detail page show.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWithDetails {
    #[serde(flatten)]
    pub property: Property,
    pub house_type: HouseType,
    pub location: Location,
    pub rent_details: RentDetails,
    /// Images, primary image first.
    pub images: Vec<PropertyImage>,
}

impl PropertyWithDetails {
    pub fn primary_image(&self) -> Option<&PropertyImage> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        properties::PropertyImage,
        tests::{MockPropertyBuilder, mock_property_id},
    };
    use insta::assert_json_snapshot;
    use url::Url;
    use uuid::uuid;

    #[test]
    fn picks_primary_image() -> anyhow::Result<()> {
        let property = MockPropertyBuilder::new(mock_property_id()).build();
        assert!(property.primary_image().is_none());

        let image = |id, is_primary| -> anyhow::Result<PropertyImage> {
            Ok(PropertyImage {
                id,
                property_id: mock_property_id(),
                image_url: Url::parse(&format!("https://roomies.dev/images/{id}.jpg"))?,
                is_primary,
            })
        };

        let property = MockPropertyBuilder::new(mock_property_id())
            .add_image(image(uuid!("00000000-0000-0000-0000-00000000000a"), false)?)
            .add_image(image(uuid!("00000000-0000-0000-0000-00000000000b"), true)?)
            .build();
        assert_eq!(
            property.primary_image().map(|image| image.id),
            Some(uuid!("00000000-0000-0000-0000-00000000000b"))
        );

        let property = MockPropertyBuilder::new(mock_property_id())
            .add_image(image(uuid!("00000000-0000-0000-0000-00000000000a"), false)?)
            .build();
        assert_eq!(
            property.primary_image().map(|image| image.id),
            Some(uuid!("00000000-0000-0000-0000-00000000000a"))
        );

        Ok(())
    }

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let property = MockPropertyBuilder::new(mock_property_id())
            .set_pet_friendly()
            .add_image(PropertyImage {
                id: uuid!("00000000-0000-0000-0000-00000000000a"),
                property_id: mock_property_id(),
                image_url: Url::parse("https://roomies.dev/images/a.jpg")?,
                is_primary: true,
            })
            .build();

        assert_json_snapshot!(property, @r###"
        {
          "id": "00000000-0000-0000-0000-000000000001",
          "title": "Cozy Apartment in Enschede",
          "description": "Bright apartment close to the university.",
          "landlordId": "00000000-0000-0000-0000-000000000002",
          "isShared": false,
          "isFurnished": true,
          "furnishedType": "fully",
          "visibilityStatus": "listed",
          "utilitiesIncluded": false,
          "petFriendly": true,
          "parkingAvailable": false,
          "isBathroomShared": false,
          "isKitchenShared": false,
          "gardenAvailable": false,
          "storageRoomAvailable": false,
          "createdAt": 946720800,
          "updatedAt": 946720800,
          "houseType": {
            "id": "00000000-0000-0000-0000-000000000003",
            "name": "Apartment"
          },
          "location": {
            "id": "00000000-0000-0000-0000-000000000004",
            "address": "123 Main St",
            "city": "Enschede",
            "state": "Overijssel",
            "country": "Netherlands",
            "postalCode": "7511JD"
          },
          "rentDetails": {
            "id": "00000000-0000-0000-0000-000000000005",
            "rentAmount": 1200,
            "currency": "EUR",
            "securityDeposit": 2400
          },
          "images": [
            {
              "id": "00000000-0000-0000-0000-00000000000a",
              "imageUrl": "https://roomies.dev/images/a.jpg",
              "isPrimary": true
            }
          ]
        }
        "###);

        Ok(())
    }
}
