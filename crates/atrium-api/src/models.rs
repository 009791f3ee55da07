//! API Models

use std::collections::BTreeMap;

use atrium_core::{Answer, CarouselImage, FieldDefinition, RouteEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Standard API response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

// ============ Forms ============

/// Create/update payload for a form definition. Fields keep the ids they
/// arrive with; new fields (no id on the wire) get one on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub fields: Vec<FieldDefinition>,
}

/// A completed response draft as submitted by a renderer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub form_id: Uuid,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub responses: BTreeMap<Uuid, Answer>,
}

// ============ Layouts ============

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LayoutPayload {
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub routes: Vec<RouteEntry>,
}

/// Partial update for one route of a layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RouteUpdate {
    pub name: Option<String>,
    pub path: Option<String>,
    pub icon: Option<String>,
    pub is_enabled: Option<bool>,
}

impl RouteUpdate {
    pub fn apply(&self, route: &mut RouteEntry) {
        if let Some(name) = &self.name {
            route.name = name.clone();
        }
        if let Some(path) = &self.path {
            route.path = path.clone();
        }
        if let Some(icon) = &self.icon {
            route.icon = icon.clone();
        }
        if let Some(is_enabled) = self.is_enabled {
            route.is_enabled = is_enabled;
        }
    }
}

// ============ Carousels ============

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarouselPayload {
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub images: Vec<CarouselImage>,
}
