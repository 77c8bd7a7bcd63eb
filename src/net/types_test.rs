use super::*;

fn sedan() -> Category {
    Category { id: "c1".to_owned(), name: "Sedan".to_owned() }
}

// =============================================================
// Car
// =============================================================

#[test]
fn car_deserializes_populated_category() {
    let json = serde_json::json!({
        "_id": "car-1",
        "model": "Civic",
        "make": "Honda",
        "color": "Blue",
        "category": {"_id": "c1", "name": "Sedan"},
        "registrationNo": "XY-123"
    });
    let car: Car = serde_json::from_value(json).expect("car");
    assert_eq!(car.id, "car-1");
    assert_eq!(car.category, CategoryRef::Populated(sedan()));
    assert_eq!(car.registration_no, "XY-123");
}

#[test]
fn car_deserializes_bare_category_id_and_plain_id() {
    let json = serde_json::json!({
        "id": "car-2",
        "model": "Model 3",
        "make": "Tesla",
        "color": "Red",
        "category": "c1",
        "registrationNo": "EV-1"
    });
    let car: Car = serde_json::from_value(json).expect("car");
    assert_eq!(car.id, "car-2");
    assert_eq!(car.category, CategoryRef::Id("c1".to_owned()));
}

#[test]
fn car_missing_field_is_rejected() {
    let json = serde_json::json!({"_id": "car-3", "model": "Civic"});
    assert!(serde_json::from_value::<Car>(json).is_err());
}

#[test]
fn car_fields_serialize_with_wire_names() {
    let fields = CarFields {
        model: "Civic".to_owned(),
        make: "Honda".to_owned(),
        color: "Blue".to_owned(),
        category: "c1".to_owned(),
        registration_no: "XY-123".to_owned(),
    };
    let value = serde_json::to_value(&fields).expect("json");
    assert_eq!(value["registrationNo"], "XY-123");
    assert_eq!(value["category"], "c1");
    assert!(value.get("registration_no").is_none());
}

#[test]
fn car_fields_from_car_keep_category_id() {
    let car = Car {
        id: "car-1".to_owned(),
        model: "Civic".to_owned(),
        make: "Honda".to_owned(),
        color: "Blue".to_owned(),
        category: CategoryRef::Populated(sedan()),
        registration_no: "XY-123".to_owned(),
    };
    assert_eq!(CarFields::from(&car).category, "c1");
}

// =============================================================
// CategoryRef
// =============================================================

#[test]
fn category_label_resolves_known_ids() {
    let known = vec![sedan()];
    assert_eq!(CategoryRef::Populated(sedan()).label(&[]), "Sedan");
    assert_eq!(CategoryRef::Id("c1".to_owned()).label(&known), "Sedan");
    assert_eq!(CategoryRef::Id("c9".to_owned()).label(&known), "c9");
}

#[test]
fn sign_in_response_requires_token() {
    assert!(serde_json::from_str::<SignInResponse>(r#"{"token":"a.b.c"}"#).is_ok());
    assert!(serde_json::from_str::<SignInResponse>("{}").is_err());
}
