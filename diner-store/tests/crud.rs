//! CRUD behaviour of the restaurant store, through the public facade

mod common;

use chrono::Timelike;
use common::*;
use diner_store::{Config, Restaurant, ReturnValue};
use shared::models::{Customer, CustomerCreate, Dish, OrderDish};

#[tokio::test]
async fn customer_lifecycle() {
    let store = store().await;

    assert_eq!(store.add_customer(&customer(1)).await, ReturnValue::Ok);
    assert_eq!(store.add_customer(&customer(1)).await, ReturnValue::AlreadyExists);
    assert_eq!(
        store.get_customer(1).await,
        Some(Customer {
            cust_id: 1,
            full_name: "Customer 1".into(),
            age: 26,
            phone: "0501234567".into(),
        })
    );
    assert_eq!(store.get_customer(2).await, None);

    assert_eq!(store.delete_customer(1).await, ReturnValue::Ok);
    assert_eq!(store.delete_customer(1).await, ReturnValue::NotExists);
    assert_eq!(store.get_customer(1).await, None);
}

#[tokio::test]
async fn customer_bad_params() {
    let store = store().await;

    let mut no_name = customer(1);
    no_name.full_name = None;
    assert_eq!(store.add_customer(&no_name).await, ReturnValue::BadParams);
    assert_eq!(store.add_customer(&CustomerCreate::default()).await, ReturnValue::BadParams);
    assert_eq!(
        store.add_customer(&CustomerCreate::new(1, "Ada", 18, "05012")).await,
        ReturnValue::BadParams
    );
    assert_eq!(
        store.add_customer(&CustomerCreate::new(1, "Ada", 120, "0501234567")).await,
        ReturnValue::Ok
    );
}

#[tokio::test]
async fn order_total_follows_items() {
    let store = store().await;
    add_dishes(&store, &[(1, 7.0)]).await;
    add_orders(&store, &[(1, 3.0)]).await;

    assert_eq!(store.get_order_total_price(1).await, Some(3.0));
    assert_eq!(store.order_contains_dish(1, 1, 2).await, ReturnValue::Ok);
    assert_eq!(store.get_order_total_price(1).await, Some(17.0));
    assert_eq!(store.get_all_order_items(1).await, vec![OrderDish::new(1, 2, 7.0)]);

    assert_eq!(store.order_does_not_contain_dish(1, 1).await, ReturnValue::Ok);
    assert_eq!(store.order_does_not_contain_dish(1, 1).await, ReturnValue::NotExists);
    assert_eq!(store.get_order_total_price(1).await, Some(3.0));
    assert_eq!(store.get_order_total_price(2).await, None);
}

#[tokio::test]
async fn captured_price_is_frozen() {
    let store = store().await;
    add_dishes(&store, &[(1, 10.0)]).await;
    add_orders(&store, &[(1, 0.0), (2, 0.0)]).await;

    assert_eq!(store.order_contains_dish(1, 1, 1).await, ReturnValue::Ok);
    assert_eq!(store.update_dish_price(1, 12.5).await, ReturnValue::Ok);
    assert_eq!(store.order_contains_dish(2, 1, 1).await, ReturnValue::Ok);

    assert_eq!(store.get_order_total_price(1).await, Some(10.0));
    assert_eq!(store.get_order_total_price(2).await, Some(12.5));
}

#[tokio::test]
async fn dish_updates() {
    let store = store().await;
    add_dishes(&store, &[(1, 10.0)]).await;

    assert_eq!(store.update_dish_price(1, -2.0).await, ReturnValue::BadParams);
    assert_eq!(store.update_dish_price(2, 5.0).await, ReturnValue::NotExists);
    assert_eq!(store.update_dish_active_status(2, false).await, ReturnValue::NotExists);

    assert_eq!(store.update_dish_active_status(1, false).await, ReturnValue::Ok);
    assert_eq!(store.update_dish_price(1, 11.0).await, ReturnValue::NotExists);
    assert_eq!(
        store.get_dish(1).await,
        Some(Dish { dish_id: 1, name: "Dish 1".into(), price: 10.0, is_active: false })
    );

    add_orders(&store, &[(1, 1.0)]).await;
    assert_eq!(store.order_contains_dish(1, 1, 1).await, ReturnValue::NotExists);
    assert_eq!(store.update_dish_active_status(1, true).await, ReturnValue::Ok);
    assert_eq!(store.order_contains_dish(1, 1, 1).await, ReturnValue::Ok);
    assert_eq!(store.order_contains_dish(1, 1, 1).await, ReturnValue::AlreadyExists);
    assert_eq!(store.order_contains_dish(1, 2, 1).await, ReturnValue::NotExists);
    assert_eq!(store.order_contains_dish(2, 1, 1).await, ReturnValue::NotExists);
}

#[tokio::test]
async fn deleting_a_dish_cascades() {
    let store = store().await;
    add_customers(&store, [1]).await;
    add_dishes(&store, &[(1, 4.0), (2, 6.0)]).await;
    add_orders(&store, &[(1, 1.0)]).await;
    assert_eq!(store.order_contains_dish(1, 1, 1).await, ReturnValue::Ok);
    assert_eq!(store.order_contains_dish(1, 2, 1).await, ReturnValue::Ok);
    assert_eq!(store.customer_rated_dish(1, 2, 5).await, ReturnValue::Ok);

    assert_eq!(store.delete_dish(2).await, ReturnValue::Ok);
    assert_eq!(store.delete_dish(2).await, ReturnValue::NotExists);
    assert_eq!(store.get_all_order_items(1).await, vec![OrderDish::new(1, 1, 4.0)]);
    assert!(store.get_all_customer_ratings(1).await.is_empty());
    assert_eq!(store.get_order_total_price(1).await, Some(5.0));
}

#[tokio::test]
async fn placement_rules() {
    let store = store().await;
    add_customers(&store, [1, 2]).await;
    add_orders(&store, &[(1, 5.0), (2, 5.0)]).await;

    assert_eq!(store.customer_placed_order(1, 1).await, ReturnValue::Ok);
    assert_eq!(store.customer_placed_order(2, 1).await, ReturnValue::AlreadyExists);
    assert_eq!(store.customer_placed_order(5, 5).await, ReturnValue::NotExists);
    assert_eq!(store.customer_placed_order(5, 2).await, ReturnValue::NotExists);
    assert_eq!(store.customer_placed_order(1, 5).await, ReturnValue::NotExists);

    assert_eq!(store.get_customer_that_placed_order(1).await.map(|c| c.cust_id), Some(1));
    assert_eq!(store.get_customer_that_placed_order(2).await, None);
    assert_eq!(store.get_customer_that_placed_order(3).await, None);
}

#[tokio::test]
async fn deleting_a_customer_keeps_their_orders() {
    let store = store().await;
    add_customers(&store, [1, 2]).await;
    add_dishes(&store, &[(1, 7.0)]).await;
    add_orders(&store, &[(1, 3.0)]).await;
    assert_eq!(store.customer_placed_order(1, 1).await, ReturnValue::Ok);
    assert_eq!(store.order_contains_dish(1, 1, 2).await, ReturnValue::Ok);
    assert_eq!(store.customer_rated_dish(1, 1, 4).await, ReturnValue::Ok);

    assert_eq!(store.delete_customer(1).await, ReturnValue::Ok);
    assert!(store.get_order(1).await.is_some());
    assert_eq!(store.get_order_total_price(1).await, Some(17.0));
    assert_eq!(store.get_customer_that_placed_order(1).await, None);
    assert!(store.get_all_customer_ratings(1).await.is_empty());

    // Anonymous now, so another customer may claim it
    assert_eq!(store.customer_placed_order(2, 1).await, ReturnValue::Ok);
    assert_eq!(store.get_customer_that_placed_order(1).await.map(|c| c.cust_id), Some(2));
}

#[tokio::test]
async fn deleting_an_order_cascades() {
    let store = store().await;
    add_customers(&store, [1]).await;
    add_dishes(&store, &[(1, 7.0)]).await;
    add_orders(&store, &[(1, 3.0)]).await;
    assert_eq!(store.customer_placed_order(1, 1).await, ReturnValue::Ok);
    assert_eq!(store.order_contains_dish(1, 1, 2).await, ReturnValue::Ok);

    assert_eq!(store.delete_order(1).await, ReturnValue::Ok);
    assert_eq!(store.delete_order(1).await, ReturnValue::NotExists);
    assert!(store.get_all_order_items(1).await.is_empty());
    assert_eq!(store.get_customer_that_placed_order(1).await, None);

    // The order id is free again
    add_orders(&store, &[(1, 4.0)]).await;
    assert_eq!(store.customer_placed_order(1, 1).await, ReturnValue::Ok);
}

#[tokio::test]
async fn ratings() {
    let store = store().await;
    add_customers(&store, [1]).await;
    add_dishes(&store, &[(1, 7.0), (2, 8.0)]).await;

    assert_eq!(store.customer_rated_dish(1, 2, 3).await, ReturnValue::Ok);
    assert_eq!(store.customer_rated_dish(1, 1, 5).await, ReturnValue::Ok);
    assert_eq!(store.customer_rated_dish(1, 1, 2).await, ReturnValue::AlreadyExists);
    assert_eq!(store.customer_rated_dish(1, 1, 0).await, ReturnValue::BadParams);
    assert_eq!(store.customer_rated_dish(1, 1, 6).await, ReturnValue::BadParams);
    assert_eq!(store.customer_rated_dish(2, 1, 3).await, ReturnValue::NotExists);
    assert_eq!(store.customer_rated_dish(1, 3, 3).await, ReturnValue::NotExists);
    assert_eq!(store.get_all_customer_ratings(1).await, vec![(1, 5), (2, 3)]);

    assert_eq!(store.customer_deleted_rating_on_dish(1, 1).await, ReturnValue::Ok);
    assert_eq!(store.customer_deleted_rating_on_dish(1, 1).await, ReturnValue::NotExists);
    assert_eq!(store.customer_rated_dish(1, 1, 1).await, ReturnValue::Ok);
    assert_eq!(store.get_all_customer_ratings(1).await, vec![(1, 1), (2, 3)]);
    assert!(store.get_all_customer_ratings(9).await.is_empty());
}

#[tokio::test]
async fn order_timestamps_drop_subseconds() {
    let store = store().await;
    let mut new_order = order(1, 2.0);
    new_order.date = at(2024, 2, 29).with_nanosecond(250_000_000);
    assert_eq!(store.add_order(&new_order).await, ReturnValue::Ok);
    assert_eq!(store.get_order(1).await.map(|o| o.date), Some(at(2024, 2, 29)));
}

#[tokio::test]
async fn file_backed_store_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diner.db");
    let config = Config::with_overrides(path.to_string_lossy());

    let store = Restaurant::open(&config).await.unwrap();
    add_customers(&store, [1]).await;
    store.database().close().await;

    let store = Restaurant::open(&config).await.unwrap();
    assert!(store.get_customer(1).await.is_some());
    store.database().close().await;
}

#[tokio::test]
async fn reads_collapse_failures_to_not_found() {
    let store = store().await;
    add_customers(&store, [1]).await;
    store.database().close().await;

    assert_eq!(store.get_customer(1).await, None);
    assert!(store.get_all_order_items(1).await.is_empty());
    assert!(!store.did_customer_order_top_rated_dishes(1).await);
    assert_eq!(store.add_customer(&customer(2)).await, ReturnValue::Error);
}
