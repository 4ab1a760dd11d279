use super::*;

fn stores() -> (MenuStore, CartStore) {
    (MenuStore::seeded(), CartStore::new())
}

/// stock + cart quantity for every menu item
fn conserved(menu: &MenuStore, cart: &CartStore) -> Vec<u32> {
    menu.items()
        .iter()
        .map(|item| item.quantity + cart.quantity_of(item.id))
        .collect()
}

#[test]
fn test_order_moves_stock_into_cart() {
    let (mut menu, mut cart) = stores();

    let placed = place_order(&mut menu, &mut cart, 1, 5.0).unwrap();

    assert_eq!(placed.remaining_stock, 35);
    assert_eq!(placed.cart_quantity, 5);
    assert_eq!(menu.stock(1), Some(35));
    let line = cart.get(1).unwrap();
    assert_eq!(line.quantity, 5);
    assert_eq!(line.name, "Chicken Burger");
    assert_eq!(line.price, 24.0);
}

#[test]
fn test_order_exceeding_stock_is_rejected() {
    let (mut menu, mut cart) = stores();
    place_order(&mut menu, &mut cart, 1, 5.0).unwrap();

    let err = place_order(&mut menu, &mut cart, 1, 50.0).unwrap_err();

    assert_eq!(
        err,
        OrderError::ExceedsStock {
            item_id: 1,
            requested: 50,
            stock: 35
        }
    );
    assert_eq!(menu.stock(1), Some(35));
    assert_eq!(cart.quantity_of(1), 5);
}

#[test]
fn test_repeat_orders_aggregate() {
    let (mut menu, mut cart) = stores();
    place_order(&mut menu, &mut cart, 2, 3.0).unwrap();
    let placed = place_order(&mut menu, &mut cart, 2, 4.0).unwrap();

    assert_eq!(placed.cart_quantity, 7);
    assert_eq!(cart.len(), 1);
    assert_eq!(menu.stock(2), Some(13));
}

#[test]
fn test_order_entire_stock() {
    let (mut menu, mut cart) = stores();
    let placed = place_order(&mut menu, &mut cart, 2, 20.0).unwrap();
    assert_eq!(placed.remaining_stock, 0);
    assert!(place_order(&mut menu, &mut cart, 2, 1.0).is_err());
}

#[test]
fn test_invalid_quantities_change_nothing() {
    let (mut menu, mut cart) = stores();
    let before = menu.items().to_vec();

    for requested in [0.0, -1.0, -0.5, 2.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = place_order(&mut menu, &mut cart, 1, requested).unwrap_err();
        assert!(
            matches!(err, OrderError::InvalidQuantity(_)),
            "{} gave {:?}",
            requested,
            err
        );
    }

    assert_eq!(menu.items(), before.as_slice());
    assert!(cart.is_empty());
}

#[test]
fn test_quantity_above_maximum_is_invalid() {
    assert!(matches!(
        validate_quantity(f64::from(MAX_QUANTITY) + 1.0),
        Err(OrderError::InvalidQuantity(_))
    ));
    assert_eq!(validate_quantity(f64::from(MAX_QUANTITY)), Ok(MAX_QUANTITY));
}

#[test]
fn test_unknown_item_is_rejected() {
    let (mut menu, mut cart) = stores();
    assert_eq!(
        place_order(&mut menu, &mut cart, 42, 1.0),
        Err(OrderError::ItemNotFound(42))
    );
    assert!(cart.is_empty());
}

#[test]
fn test_remove_restores_full_quantity() {
    let (mut menu, mut cart) = stores();
    place_order(&mut menu, &mut cart, 1, 5.0).unwrap();
    place_order(&mut menu, &mut cart, 1, 50.0).unwrap_err();

    let removed = remove_from_cart(&mut menu, &mut cart, 1).unwrap();

    assert_eq!(removed.quantity, 5);
    assert_eq!(menu.stock(1), Some(40));
    assert!(cart.is_empty());
}

#[test]
fn test_remove_missing_line_is_noop() {
    let (mut menu, mut cart) = stores();
    place_order(&mut menu, &mut cart, 3, 2.0).unwrap();

    assert_eq!(
        remove_from_cart(&mut menu, &mut cart, 1),
        Err(OrderError::CartLineNotFound(1))
    );
    assert_eq!(menu.stock(1), Some(40));
    assert_eq!(menu.stock(3), Some(28));
    assert_eq!(cart.quantity_of(3), 2);
}

#[test]
fn test_stock_plus_cart_is_conserved() {
    let (mut menu, mut cart) = stores();
    let initial = conserved(&menu, &cart);

    let script: [(i64, f64); 8] = [
        (1, 5.0),
        (2, 20.0),
        (2, 1.0),
        (3, 0.0),
        (4, 99.0),
        (1, 35.0),
        (1, 1.0),
        (4, f64::NAN),
    ];
    for (id, qty) in script {
        let _ = place_order(&mut menu, &mut cart, id, qty);
        assert_eq!(conserved(&menu, &cart), initial);
    }

    for id in [2, 1, 7] {
        let _ = remove_from_cart(&mut menu, &mut cart, id);
        assert_eq!(conserved(&menu, &cart), initial);
    }
}

#[test]
fn test_cart_total_tracks_lines() {
    let (mut menu, mut cart) = stores();
    place_order(&mut menu, &mut cart, 1, 5.0).unwrap();
    place_order(&mut menu, &mut cart, 3, 2.0).unwrap();

    let expected: f64 = cart
        .lines()
        .iter()
        .map(|l| l.price * f64::from(l.quantity))
        .sum();
    assert_eq!(cart.total(), expected);
    assert_eq!(cart.total(), 176.0);
}
