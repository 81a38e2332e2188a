use std::collections::HashSet;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

const CATALOG_JSON: &str = include_str!("../data/properties.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("property '{0}' has no rooms")]
    NoRooms(String),
    #[error("room '{room}' in '{property}' has zero capacity")]
    ZeroCapacity { property: String, room: String },
    #[error("property slug '{0}' is used more than once")]
    DuplicateSlug(String),
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    MowgliCamp,
    DinosaurPark,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::MowgliCamp, Brand::DinosaurPark];

    pub fn title(self) -> &'static str {
        match self {
            Brand::MowgliCamp => "🌲 Mowgli Camp",
            Brand::DinosaurPark => "🦖 Dinosaur Park",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Brand::MowgliCamp => "Jungle-inspired adventure stay where wilderness meets comfort",
            Brand::DinosaurPark => {
                "Family-friendly themed forest resort with playful charm and premium comfort"
            }
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Brand::MowgliCamp => "mowgli",
            Brand::DinosaurPark => "dinosaur",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub title: String,
    pub availability: String,
    pub image: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Amenity {
    pub icon: String,
    pub label: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub hero_image: String,
    pub capacity: u32,
    pub bed_config: String,
    pub size_label: String,
    pub price: String,
    #[serde(default)]
    pub feature_tags: Vec<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
}

impl Room {
    // Packages are sold as bundles, everything else as a room.
    pub fn booking_noun(&self) -> &'static str {
        if self.name.contains("Package") {
            "Package"
        } else {
            "Room"
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Property {
    pub slug: String,
    pub brand: Brand,
    pub listing: Listing,
    pub name: String,
    pub location: String,
    pub hero_image: String,
    pub description: String,
    pub amenities: Vec<Amenity>,
    pub rooms: Vec<Room>,
}

/// Every property shown on the site, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    properties: Vec<Rc<Property>>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let properties: Vec<Property> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(property.slug.clone()));
            }
            if property.rooms.is_empty() {
                return Err(CatalogError::NoRooms(property.name.clone()));
            }
            if let Some(room) = property.rooms.iter().find(|r| r.capacity == 0) {
                return Err(CatalogError::ZeroCapacity {
                    property: property.name.clone(),
                    room: room.name.clone(),
                });
            }
        }

        Ok(Self {
            properties: properties.into_iter().map(Rc::new).collect(),
        })
    }

    pub fn get(&self, slug: &str) -> Option<Rc<Property>> {
        self.properties.iter().find(|p| p.slug == slug).cloned()
    }

    pub fn by_brand(&self, brand: Brand) -> impl Iterator<Item = &Rc<Property>> {
        self.properties.iter().filter(move |p| p.brand == brand)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.by_brand(Brand::MowgliCamp).count(), 2);
        assert_eq!(catalog.by_brand(Brand::DinosaurPark).count(), 4);

        let dorm = catalog.get("dormitory-hut").unwrap();
        assert_eq!(dorm.rooms[0].capacity, 10);
        assert_eq!(dorm.rooms[0].gallery_images.len(), 6);
    }

    #[test]
    fn unknown_slug_is_none() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.get("treehouse").is_none());
    }

    fn property_json(slug: &str, rooms: &str) -> String {
        format!(
            r#"{{"slug":"{slug}","brand":"dinosaur_park",
                "listing":{{"title":"t","availability":"a","image":"/i.jpg"}},
                "name":"{slug}","location":"l","hero_image":"/h.jpg","description":"d",
                "amenities":[],"rooms":{rooms}}}"#
        )
    }

    const ONE_ROOM: &str = r#"[{"name":"Hut","description":"d","hero_image":"/h.jpg",
        "capacity":4,"bed_config":"b","size_label":"s","price":"p"}]"#;

    #[test]
    fn room_collections_default_to_empty() {
        let raw = format!("[{}]", property_json("hut", ONE_ROOM));
        let catalog = Catalog::from_json(&raw).unwrap();
        let hut = catalog.get("hut").unwrap();
        assert!(hut.rooms[0].gallery_images.is_empty());
        assert!(hut.rooms[0].feature_tags.is_empty());
    }

    #[test]
    fn rejects_property_without_rooms() {
        let raw = format!("[{}]", property_json("empty", "[]"));
        assert!(matches!(
            Catalog::from_json(&raw),
            Err(CatalogError::NoRooms(name)) if name == "empty"
        ));
    }

    #[test]
    fn rejects_zero_capacity() {
        let rooms = ONE_ROOM.replace("\"capacity\":4", "\"capacity\":0");
        let raw = format!("[{}]", property_json("hut", &rooms));
        assert!(matches!(
            Catalog::from_json(&raw),
            Err(CatalogError::ZeroCapacity { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let one = property_json("hut", ONE_ROOM);
        let raw = format!("[{one},{one}]");
        assert!(matches!(
            Catalog::from_json(&raw),
            Err(CatalogError::DuplicateSlug(slug)) if slug == "hut"
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn booking_noun_follows_room_name() {
        let catalog = Catalog::load().unwrap();
        let dome = catalog.get("forest-dome").unwrap();
        assert_eq!(dome.rooms[0].booking_noun(), "Package");

        let mut room = dome.rooms[0].clone();
        room.name = "Garden Suite".into();
        assert_eq!(room.booking_noun(), "Room");
    }
}
