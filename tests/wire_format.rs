//! Integration tests for the serialization contract.
//!
//! Enums serialize as their lower-case names, the schedule-cell variant is
//! internally tagged on `kind`, association wrappers flatten the wrapped
//! order's fields alongside their one extra field, timestamps are RFC 3339
//! text, and identifiers are canonical UUID text.

use crouton::{
    orders::{
        AssociatedName, Bread, Filling, Order, OrderDetail, OrderKind, OrderUuid,
        RecurringOrderExceptionUuid, Sauce,
    },
    users::User,
    variants::{OrderVariant, WeekOrderVariant},
    weeks::WeekIdentifier,
};
use serde_json::json;
use testresult::TestResult;
use uuid::Uuid;

const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

fn test_order() -> Result<Order, jiff::Error> {
    Ok(Order {
        id: OrderUuid::from_uuid(Uuid::nil()),
        created_at: "2025-11-03T09:00:00Z".parse()?,
        updated_at: "2025-11-04T12:30:00Z".parse()?,
        detail: OrderDetail {
            filling: Filling::VeganSausage,
            bread: Bread::White,
            sauce: Sauce::Red,
        },
        kind: OrderKind::Single,
    })
}

#[test]
fn enums_serialize_as_their_lower_case_names() -> TestResult {
    assert_eq!(serde_json::to_value(Filling::Bacon)?, json!("bacon"));
    assert_eq!(
        serde_json::to_value(Filling::VeganSausage)?,
        json!("vegan_sausage")
    );
    assert_eq!(serde_json::to_value(Bread::White)?, json!("white"));
    assert_eq!(serde_json::to_value(Sauce::Brown)?, json!("brown"));
    assert_eq!(serde_json::to_value(OrderKind::Recurring)?, json!("recurring"));

    Ok(())
}

#[test]
fn orders_serialize_every_field_with_standard_formats() -> TestResult {
    let order = test_order()?;

    assert_eq!(
        serde_json::to_value(&order)?,
        json!({
            "id": NIL_UUID,
            "created_at": "2025-11-03T09:00:00Z",
            "updated_at": "2025-11-04T12:30:00Z",
            "detail": {
                "filling": "vegan_sausage",
                "bread": "white",
                "sauce": "red",
            },
            "kind": "single",
        })
    );

    Ok(())
}

#[test]
fn schedule_cells_are_tagged_on_kind() -> TestResult {
    let order = test_order()?;
    let cell = order.for_week(WeekIdentifier::new(2025, 45));

    assert_eq!(
        serde_json::to_value(&cell)?,
        json!({
            "week": { "year": 2025, "week": 45 },
            "order": {
                "kind": "single",
                "id": NIL_UUID,
                "detail": {
                    "filling": "vegan_sausage",
                    "bread": "white",
                    "sauce": "red",
                },
            },
        })
    );

    Ok(())
}

#[test]
fn exception_cells_carry_only_their_identity() -> TestResult {
    let cell = WeekOrderVariant {
        week: WeekIdentifier::new(2025, 45),
        order: OrderVariant::Exception {
            id: RecurringOrderExceptionUuid::from_uuid(Uuid::nil()),
        },
    };

    assert_eq!(
        serde_json::to_value(&cell)?,
        json!({
            "week": { "year": 2025, "week": 45 },
            "order": { "kind": "exception", "id": NIL_UUID },
        })
    );

    Ok(())
}

#[test]
fn association_wrappers_flatten_the_wrapped_order() -> TestResult {
    let named = AssociatedName::new(test_order()?, "Sam");

    assert_eq!(
        serde_json::to_value(&named)?,
        json!({
            "id": NIL_UUID,
            "created_at": "2025-11-03T09:00:00Z",
            "updated_at": "2025-11-04T12:30:00Z",
            "detail": {
                "filling": "vegan_sausage",
                "bread": "white",
                "sauce": "red",
            },
            "kind": "single",
            "name": "Sam",
        })
    );

    Ok(())
}

#[test]
fn decoded_users_arrive_normalized() -> TestResult {
    let user: User = serde_json::from_value(json!({
        "name": "Sam",
        "email": "Sam@EXAMPLE.com",
    }))?;

    assert_eq!(user.email(), "sam@example.com");
    assert_eq!(
        serde_json::to_value(&user)?.get("email"),
        Some(&json!("sam@example.com"))
    );

    Ok(())
}

#[test]
fn tagged_cells_round_trip_through_json() -> TestResult {
    let order = test_order()?;
    let cell = order.for_week(WeekIdentifier::new(2025, 45));

    let encoded = serde_json::to_string(&cell)?;
    let decoded: WeekOrderVariant = serde_json::from_str(&encoded)?;

    assert_eq!(decoded, cell);

    Ok(())
}
