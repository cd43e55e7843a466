use super::*;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn retailer(name: &str, price: f64, is_best: bool) -> Retailer {
    Retailer { name: name.to_owned(), price, url: None, is_best }
}

fn product_with_retailers(retailers: Vec<Retailer>) -> Product {
    Product {
        id: ProductId::Number(7),
        title: "Sony WH-1000XM5".to_owned(),
        price: 348.0,
        rating: Some(4.7),
        image: None,
        specs: Vec::new(),
        retailers,
        why: None,
    }
}

// =============================================================
// ProductId
// =============================================================

#[test]
fn product_id_accepts_number_and_string() {
    let n: ProductId = serde_json::from_value(json!(1)).unwrap();
    let s: ProductId = serde_json::from_value(json!("sku-9")).unwrap();
    assert_eq!(n, ProductId::Number(1));
    assert_eq!(s, ProductId::Text("sku-9".to_owned()));
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_decodes_full_payload() {
    let product: Product = serde_json::from_value(json!({
        "id": 1,
        "title": "Bose QC Ultra",
        "price": 379.0,
        "rating": 4.6,
        "image": "https://img.example.com/qc.jpg",
        "specs": ["ANC", "24h battery"],
        "retailers": [
            { "name": "Amazon", "price": 349.0, "url": "https://amazon.example.com/qc", "is_best": true },
            { "name": "Best Buy", "price": 379.0 }
        ],
        "why": "Best comfort for long commutes"
    }))
    .unwrap();

    assert_eq!(product.id, ProductId::Number(1));
    assert_eq!(product.specs, vec!["ANC".to_owned(), "24h battery".to_owned()]);
    assert_eq!(product.retailers.len(), 2);
    assert!(product.retailers[0].is_best);
    assert!(!product.retailers[1].is_best);
    assert_eq!(product.retailers[1].url, None);
    assert_eq!(product.why.as_deref(), Some("Best comfort for long commutes"));
}

#[test]
fn product_optional_fields_default() {
    let product: Product = serde_json::from_value(json!({
        "id": "p-1",
        "title": "Desk lamp",
        "price": 29.5
    }))
    .unwrap();

    assert_eq!(product.rating, None);
    assert_eq!(product.image, None);
    assert!(product.specs.is_empty());
    assert!(product.retailers.is_empty());
    assert_eq!(product.why, None);
}

#[test]
fn product_without_price_is_rejected() {
    let result = serde_json::from_value::<Product>(json!({ "id": 1, "title": "No price" }));
    assert!(result.is_err());
}

#[test]
fn best_retailer_returns_first_flagged() {
    let product = product_with_retailers(vec![
        retailer("A", 10.0, false),
        retailer("B", 9.0, true),
        retailer("C", 8.0, true),
    ]);
    assert_eq!(product.best_retailer().map(|r| r.name.as_str()), Some("B"));
}

#[test]
fn best_retailer_none_when_unflagged() {
    let product = product_with_retailers(vec![retailer("A", 10.0, false)]);
    assert!(product.best_retailer().is_none());
}

// =============================================================
// Assist payloads
// =============================================================

#[test]
fn assist_request_serializes_message_field() {
    let body = serde_json::to_value(AssistRequest { message: "ANC headphones".to_owned() }).unwrap();
    assert_eq!(body, json!({ "message": "ANC headphones" }));
}

#[test]
fn assist_response_defaults_missing_collections() {
    let response: AssistResponse = serde_json::from_value(json!({ "summary": "Nothing yet" })).unwrap();
    assert_eq!(response.summary, "Nothing yet");
    assert!(response.tips.is_empty());
    assert!(response.recommendations.is_empty());
}

#[test]
fn assist_response_requires_summary() {
    let result = serde_json::from_value::<AssistResponse>(json!({ "tips": ["a"] }));
    assert!(result.is_err());
}

#[test]
fn trending_list_decodes_titles() {
    let items: Vec<TrendingItem> =
        serde_json::from_value(json!([{ "title": "Air fryers" }, { "title": "E-readers" }])).unwrap();
    assert_eq!(items[0].title, "Air fryers");
    assert_eq!(items.len(), 2);
}
