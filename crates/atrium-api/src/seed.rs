//! Demo Content
//!
//! Seed data for local development, in the shape an admin would build
//! through the dashboard. Tests construct their own state and never
//! rely on these.

use atrium_core::{
    Carousel, CarouselImage, DirectoryEntry, FieldKind, FieldTemplate, FormBuilder, FormStore,
    HistoryEntry, NavLayout, RouteEntry,
};
use uuid::Uuid;

use crate::state::AppState;

pub async fn seed_demo_content(state: &AppState) {
    seed_layouts(state);
    seed_carousels(state);
    seed_directory(state);
    seed_history(state);
    seed_contact_form(state).await;
    tracing::info!("demo content seeded");
}

fn seed_layouts(state: &AppState) {
    let mut layout = NavLayout::new("Default");
    for (name, path, icon) in [
        ("Home", "/", "house"),
        ("History", "/history", "clock"),
        ("Directory", "/directory", "storefront"),
        ("Contact", "/contact", "envelope"),
    ] {
        layout.add_route(RouteEntry {
            id: Uuid::new_v4(),
            name: name.into(),
            path: path.into(),
            icon: icon.into(),
            is_enabled: true,
        });
    }
    let id = layout.id;
    state.layouts.insert(layout);
    state.layouts.set_current(id);
}

fn seed_carousels(state: &AppState) {
    let mut carousel = Carousel::new("Front page");
    for url in ["/media/main-street.jpg", "/media/harbor.jpg", "/media/festival.jpg"] {
        carousel.add_image(CarouselImage {
            id: Uuid::new_v4(),
            url: url.into(),
            is_visible: true,
        });
    }
    let id = carousel.id;
    state.carousels.insert(carousel);
    state.carousels.set_current(id);
}

fn seed_directory(state: &AppState) {
    state.directory.insert(DirectoryEntry {
        id: Uuid::new_v4(),
        name: "Corner Bakery".into(),
        address: "12 Main St".into(),
        phone_number: "555-0114".into(),
        email: "hello@cornerbakery.example".into(),
        website: "https://cornerbakery.example".into(),
        image: None,
        hours: "Tue-Sun 7:00-15:00".into(),
        iframe: String::new(),
    });
    state.directory.insert(DirectoryEntry {
        id: Uuid::new_v4(),
        name: "Harbor Books".into(),
        address: "3 Quay Rd".into(),
        phone_number: "555-0187".into(),
        email: "info@harborbooks.example".into(),
        website: "https://harborbooks.example".into(),
        image: None,
        hours: "Mon-Sat 9:00-18:00".into(),
        iframe: String::new(),
    });
}

fn seed_history(state: &AppState) {
    state.history.insert(HistoryEntry {
        id: Uuid::new_v4(),
        title: "Founding and early settlement".into(),
        years_from: 1871,
        years_upto: 1902,
        image: "/media/history/founding.jpg".into(),
        description: "The first families settle around the old mill.".into(),
        index: 0,
        is_visible: true,
    });
    state.history.insert(HistoryEntry {
        id: Uuid::new_v4(),
        title: "The railway years".into(),
        years_from: 1903,
        years_upto: 1958,
        image: "/media/history/railway.jpg".into(),
        description: "The line to the coast turns the town into a market hub.".into(),
        index: 1,
        is_visible: true,
    });
}

async fn seed_contact_form(state: &AppState) {
    let mut builder = FormBuilder::new("Contact us", "Questions, suggestions, corrections.");
    let fields = [
        FieldTemplate { label: "Name".into(), required: true, ..Default::default() },
        FieldTemplate {
            label: "Email".into(),
            kind: FieldKind::Email,
            required: true,
            ..Default::default()
        },
        FieldTemplate {
            label: "Topic".into(),
            kind: FieldKind::Select,
            options: vec!["General".into(), "Directory listing".into(), "Corrections".into()],
            ..Default::default()
        },
        FieldTemplate {
            label: "Message".into(),
            kind: FieldKind::Textarea,
            required: true,
            ..Default::default()
        },
    ];
    for field in fields {
        // Templates above are well-formed; a rejected one is a bug here.
        if let Err(err) = builder.add_field(field) {
            tracing::warn!(%err, "skipping malformed seed field");
        }
    }
    match builder.save(state.forms.as_ref()).await {
        Ok(stored) => {
            let _ = state.forms.set_current(stored.definition.id).await;
        }
        Err(err) => tracing::warn!(%err, "seeding contact form failed"),
    }
}
