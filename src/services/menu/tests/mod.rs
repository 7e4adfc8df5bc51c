//! Unit tests for the menu service.
//!
//! Pure validation, slug, filter, and serving-window logic. No network.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use chrono::NaiveTime;

use crate::config::ApiConfig;
use crate::services::menu::{
    Diet, Dish, DishDraft, DishTags, FilterSelection, MenuApi, MenuError, MenuFilter, MenuService,
    OwnerSignup, extract_video_id, matches_search, slugify,
};

fn dish(name: &str, veg: Option<bool>) -> Dish {
    Dish {
        id: "d1".to_string(),
        hotel_id: "h1".to_string(),
        name: name.to_string(),
        veg,
        price: 250.0,
        quantity: None,
        description: Some("House special with extra ghee".to_string()),
        timing_from: None,
        timing_to: None,
        photo_url: None,
        video_url: None,
    }
}

#[test]
fn slugify_collapses_and_trims() {
    assert_eq!(slugify("Spice Route, Koramangala!"), "spice-route-koramangala");
    assert_eq!(slugify("  --Cafe 42--  "), "cafe-42");
    assert_eq!(slugify("ALLCAPS"), "allcaps");
}

#[test]
fn slugify_empty_input_falls_back() {
    let slug = slugify("!!!");
    assert!(slug.starts_with("id-"), "got {slug}");
}

#[test]
fn video_id_from_known_url_shapes() {
    let id = Some("dQw4w9WgXcQ".to_string());
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        id
    );
    assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), id);
    assert_eq!(
        extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"),
        id
    );
    assert_eq!(extract_video_id("https://example.com/watch?v=nope"), None);
    assert_eq!(extract_video_id(""), None);
}

#[test]
fn diet_filters_displace_each_other() {
    let mut selection = FilterSelection::new();
    assert!(selection.toggle(MenuFilter::Diet(Diet::VegOnly)));
    assert_eq!(selection.diet(), Some(Diet::VegOnly));

    assert!(selection.toggle(MenuFilter::Diet(Diet::NonVegOnly)));
    assert_eq!(selection.diet(), Some(Diet::NonVegOnly));

    // Toggling the active diet clears it.
    assert!(selection.toggle(MenuFilter::Diet(Diet::NonVegOnly)));
    assert_eq!(selection.diet(), None);
}

#[test]
fn tag_cap_is_enforced() {
    let mut selection = FilterSelection::new();
    assert!(selection.toggle(MenuFilter::Tag(DishTags::MUST_TRY)));
    assert!(selection.toggle(MenuFilter::Tag(DishTags::HIGH_PROTEIN)));
    // Third tag is refused.
    assert!(!selection.toggle(MenuFilter::Tag(DishTags::HOT_AND_SPICY)));
    assert_eq!(selection.tags(), DishTags::MUST_TRY | DishTags::HIGH_PROTEIN);

    // Removing one makes room again.
    assert!(selection.toggle(MenuFilter::Tag(DishTags::MUST_TRY)));
    assert!(selection.toggle(MenuFilter::Tag(DishTags::HOT_AND_SPICY)));
}

#[test]
fn diet_matching_spares_unclassified_dishes() {
    let mut selection = FilterSelection::new();
    selection.toggle(MenuFilter::Diet(Diet::VegOnly));

    assert!(selection.matches_diet(&dish("Paneer Tikka", Some(true))));
    assert!(!selection.matches_diet(&dish("Chicken 65", Some(false))));
    assert!(selection.matches_diet(&dish("Mystery Curry", None)));
}

#[test]
fn search_covers_name_and_description() {
    let d = dish("Masala Dosa", Some(true));
    assert!(matches_search(&d, "dosa"));
    assert!(matches_search(&d, "GHEE"));
    assert!(matches_search(&d, "  "));
    assert!(!matches_search(&d, "pizza"));
}

#[test]
fn serving_window_defaults_and_wraps() {
    let mut d = dish("Idli", Some(true));
    // Defaults: 09:00-22:00.
    assert!(d.available_at(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    assert!(!d.available_at(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));

    // Late-night window wrapping midnight.
    d.timing_from = Some("22:00".to_string());
    d.timing_to = Some("02:00".to_string());
    assert!(d.available_at(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
    assert!(d.available_at(NaiveTime::from_hms_opt(1, 0, 0).unwrap()));
    assert!(!d.available_at(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));

    // Garbage timing never hides a dish.
    d.timing_from = Some("soon".to_string());
    assert!(d.available_at(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
}

fn full_signup() -> OwnerSignup {
    OwnerSignup {
        restaurant_name: "Spice Route".to_string(),
        user_name: "Asha".to_string(),
        state: "Karnataka".to_string(),
        city: "Bengaluru".to_string(),
        restaurant_id: "Spice Route".to_string(),
        gmail: "asha@gmail.com".to_string(),
        password: "secret1".to_string(),
        re_password: "secret1".to_string(),
    }
}

#[test]
fn signup_validation_rules() {
    assert!(MenuService::validate_signup(&full_signup()).is_ok());

    let mut missing = full_signup();
    missing.city = "  ".to_string();
    assert!(matches!(
        MenuService::validate_signup(&missing),
        Err(MenuError::Validation(msg)) if msg == "Please fill all the fields"
    ));

    let mut bad_gmail = full_signup();
    bad_gmail.gmail = "asha@example.com".to_string();
    assert!(matches!(
        MenuService::validate_signup(&bad_gmail),
        Err(MenuError::Validation(msg)) if msg.contains("@gmail.com")
    ));

    let mut mismatch = full_signup();
    mismatch.re_password = "other".to_string();
    assert!(matches!(
        MenuService::validate_signup(&mismatch),
        Err(MenuError::Validation(msg)) if msg == "Password does not match"
    ));
}

#[test]
fn login_validation_rules() {
    assert!(MenuService::validate_login("asha@gmail.com", "secret1").is_ok());
    assert!(MenuService::validate_login("asha@example.com", "secret1").is_err());
    assert!(MenuService::validate_login("asha@gmail.com", "short").is_err());
}

#[test]
fn dish_draft_validation() {
    let draft = DishDraft {
        name: "Masala Dosa".to_string(),
        veg: Some(true),
        price: "120".to_string(),
        video_link: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        ..DishDraft::default()
    };
    let new_dish = MenuService::draft_to_new_dish("h1", &draft).unwrap();
    assert_eq!(new_dish.timing_from, "09:00");
    assert_eq!(new_dish.timing_to, "22:00");
    assert_eq!(new_dish.video_url.as_deref(), Some("https://youtu.be/dQw4w9WgXcQ"));

    let mut no_veg = draft.clone();
    no_veg.veg = None;
    assert!(MenuService::draft_to_new_dish("h1", &no_veg).is_err());

    let mut bad_price = draft.clone();
    bad_price.price = "free".to_string();
    assert!(MenuService::draft_to_new_dish("h1", &bad_price).is_err());

    let mut bad_link = draft;
    bad_link.video_link = "https://example.com/clip".to_string();
    assert!(MenuService::draft_to_new_dish("h1", &bad_link).is_err());
}

#[test]
fn menu_url_is_the_qr_payload() {
    assert_eq!(
        MenuService::menu_url("https://ody.example/", "spice-route"),
        "https://ody.example/hotel/spice-route"
    );
}

#[test]
fn api_requires_base_url() {
    let config = ApiConfig::default();
    assert!(matches!(
        MenuApi::new(&config),
        Err(MenuError::MissingBaseUrl)
    ));
}
