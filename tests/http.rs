use std::net::SocketAddr;

use serde_json::{json, Value};

use plantnet::app_system::StorefrontSystem;
use plantnet::http::{router, AppState};

async fn spawn_server() -> (SocketAddr, StorefrontSystem) {
    let system = StorefrontSystem::new(16);
    let app = router(AppState::from(&system));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, system)
}

fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}

async fn add_plant(client: &reqwest::Client, addr: SocketAddr, quantity: u32) -> String {
    let res = client
        .post(url(addr, "/add-plant"))
        .json(&json!({
            "name": "Snake Plant",
            "category": "Indoor",
            "price": 25,
            "quantity": quantity,
            "seller": { "name": "Sam", "email": "sam@example.com" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    body["insertedId"].as_str().unwrap().to_string()
}

fn purchase_body(plant_id: &str, quantity: u32) -> Value {
    json!({
        "customer": { "name": "Cleo", "email": "cleo@example.com" },
        "plantId": plant_id,
        "quantity": quantity,
        "address": "12 Garden Row",
        "price": 1,
        "status": "Delivered"
    })
}

#[tokio::test]
async fn purchase_and_cancel_over_http() {
    let (addr, _system) = spawn_server().await;
    let client = reqwest::Client::new();
    let plant_id = add_plant(&client, addr, 3).await;

    let res = client
        .post(url(addr, "/orderPurchase"))
        .json(&purchase_body(&plant_id, 2))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["plant"]["quantity"], 1);
    let order_id = body["insertedId"].as_str().unwrap().to_string();

    let res = client
        .post(url(addr, "/orderPurchase"))
        .json(&purchase_body(&plant_id, 2))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 409);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Insufficient stock"));

    let orders: Value = client
        .get(url(addr, "/myorders/cleo@example.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["_id"], order_id.as_str());
    assert_eq!(orders[0]["name"], "Snake Plant");
    assert_eq!(orders[0]["price"], 50.0);
    assert_eq!(orders[0]["status"], "Pending");

    let seller_orders: Value = client
        .get(url(addr, "/seller/orders/sam@example.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seller_orders.as_array().unwrap().len(), 1);

    let res = client.delete(url(addr, &format!("/cancelorder/{}", order_id))).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["deletedCount"], 1);

    let plant: Value = client
        .get(url(addr, &format!("/details/{}", plant_id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(plant["quantity"], 3);
}

#[tokio::test]
async fn catalog_endpoints() {
    let (addr, _system) = spawn_server().await;
    let client = reqwest::Client::new();
    let plant_id = add_plant(&client, addr, 4).await;

    let res = client
        .patch(url(addr, &format!("/plants/quantity/{}", plant_id)))
        .json(&json!({ "quantityToUpdate": 2, "status": "increase" }))
        .send()
        .await
        .unwrap();
    let plant: Value = res.json().await.unwrap();
    assert_eq!(plant["quantity"], 6);

    let res = client
        .patch(url(addr, &format!("/plants/quantity/{}", plant_id)))
        .json(&json!({ "quantityToUpdate": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 409);

    let stock: Value = client
        .get(url(addr, &format!("/plants/quantity/{}", plant_id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stock["quantity"], 6);

    let res = client.get(url(addr, "/plants/quantity/plant_999")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    let mine: Value = client
        .get(url(addr, "/plants?seller=sam@example.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(mine.as_array().unwrap().len(), 1);

    let res = client.get(url(addr, "/details/plant_999")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    let res = client.delete(url(addr, &format!("/delete/{}", plant_id))).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["deletedCount"], 1);

    let all: Value = client.get(url(addr, "/plants")).send().await.unwrap().json().await.unwrap();
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn account_and_seller_request() {
    let (addr, _system) = spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(url(addr, "/user/ana@example.com"))
        .json(&json!({ "name": "Ana" }))
        .send()
        .await
        .unwrap();
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["role"], "Customer");

    let role: Value = client
        .get(url(addr, "/user/role/ana@example.com"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(role["role"], "Customer");

    let res = client.patch(url(addr, "/user/ana@example.com")).send().await.unwrap();
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["status"], "requested");

    let res = client.patch(url(addr, "/user/ana@example.com")).send().await.unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(res.text().await.unwrap(), "You have already requested, wait for some time.");

    let res = client
        .patch(url(addr, "/user/role/ana@example.com"))
        .json(&json!({ "role": "Seller" }))
        .send()
        .await
        .unwrap();
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["role"], "Seller");

    let users: Value = client.get(url(addr, "/users")).send().await.unwrap().json().await.unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);

    let res = client.get(url(addr, "/user/role/nobody@example.com")).send().await.unwrap();
    assert_eq!(res.status(), 404);
}
