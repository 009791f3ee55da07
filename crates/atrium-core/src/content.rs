//! Site Content Models
//!
//! Navigation layouts, image carousels, the business directory and the
//! history timeline. Editable sub-record lists (routes, images) reuse
//! [`Records`]; list-level "current" selection lives in the registry's
//! exclusive slot, not in per-record booleans.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::records::{Keyed, Records};

// ============ Navigation Layouts ============

/// One navigation entry of a layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub icon: String,
    /// Disabled routes stay in the layout but are not shown in the nav.
    #[serde(default = "default_on")]
    pub is_enabled: bool,
}

impl Keyed for RouteEntry {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// A named navigation arrangement. At most one layout is in effect
/// site-wide at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLayout {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub routes: Records<RouteEntry>,
}

impl Keyed for NavLayout {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl NavLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            routes: Records::new(),
        }
    }

    pub fn add_route(&mut self, route: RouteEntry) -> Uuid {
        let id = route.id;
        self.routes.push(route);
        id
    }

    pub fn remove_route(&mut self, route_id: Uuid) {
        self.routes.remove(route_id);
    }
}

// ============ Carousels ============

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselImage {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub url: String,
    #[serde(default = "default_on")]
    pub is_visible: bool,
}

impl Keyed for CarouselImage {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// An ordered image rotation. At most one carousel is in effect at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Carousel {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub images: Records<CarouselImage>,
}

impl Keyed for Carousel {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Carousel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            images: Records::new(),
        }
    }

    pub fn add_image(&mut self, image: CarouselImage) -> Uuid {
        let id = image.id;
        self.images.push(image);
        id
    }

    pub fn remove_image(&mut self, image_id: Uuid) {
        self.images.remove(image_id);
    }
}

// ============ History Timeline ============

/// One era of the site's historical timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub years_from: i32,
    pub years_upto: i32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// Display position within the timeline.
    #[serde(default)]
    pub index: u32,
    #[serde(default = "default_on")]
    pub is_visible: bool,
}

impl Keyed for HistoryEntry {
    fn key(&self) -> Uuid {
        self.id
    }
}

// ============ Business Directory ============

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub hours: String,
    /// Embedded map markup shown on the detail page.
    #[serde(default)]
    pub iframe: String,
}

impl Keyed for DirectoryEntry {
    fn key(&self) -> Uuid {
        self.id
    }
}

fn default_on() -> bool {
    true
}
