//! Atrium Content Portal - Domain Model
//!
//! Everything the admin dashboard edits, behind a REST surface provided
//! by `atrium-api`.
//!
//! ## Features
//! - Dynamic form definitions with typed fields and per-kind options
//! - Builder sessions with draft-until-save semantics
//! - Render planning and response capture with schema-drift tolerance
//! - Tabular response viewing over heterogeneous submissions
//! - Navigation layouts, carousels, directory and history content

pub mod builder;
pub mod content;
pub mod error;
pub mod form;
pub mod records;
pub mod registry;
pub mod render;
pub mod response;
pub mod store;

pub use builder::FormBuilder;
pub use content::{Carousel, CarouselImage, DirectoryEntry, HistoryEntry, NavLayout, RouteEntry};
pub use error::{FormsError, Result};
pub use form::{FieldDefinition, FieldKind, FieldTemplate, FormDefinition};
pub use records::{Keyed, Records};
pub use registry::Registry;
pub use render::{render_plan, Answer, Control, RenderedField, ResponseDraft};
pub use response::{project_table, validate_response, Response, ResponseTable};
pub use store::{FormStore, MemoryStore, StoredForm};
