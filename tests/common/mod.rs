#![allow(dead_code)]

use restate_gateway::config::GatewayConfig;
use restate_gateway::Gateway;
use serde_json::{json, Value};
use std::net::TcpListener;
use wiremock::MockServer;

pub const DATABASE: &str = "db-main";
pub const PROPERTIES: &str = "properties";
pub const FAVORITES: &str = "favorite-games";

/// Gateway whose BaaS endpoint is `<mock>/v1` and deals endpoint `<deals>/api/1.0`
pub fn gateway_with(baas: &str, deals: &str) -> Gateway {
    let endpoint = format!("{}/v1", baas);
    let deals_endpoint = format!("{}/api/1.0", deals);

    let config = GatewayConfig::from_lookup(|name| {
        let value = match name {
            "APPWRITE_ENDPOINT" => endpoint.as_str(),
            "APPWRITE_PROJECT_ID" => "test-project",
            "APPWRITE_DATABASE_ID" => DATABASE,
            "APPWRITE_PROPERTIES_COLLECTION_ID" => PROPERTIES,
            "APPWRITE_FAV_GAMES_COLLECTION_ID" => FAVORITES,
            "APPWRITE_GALLERIES_COLLECTION_ID" => "galleries",
            "APPWRITE_REVIEWS_COLLECTION_ID" => "reviews",
            "APPWRITE_AGENTS_COLLECTION_ID" => "agents",
            "APPWRITE_REDIRECT_URI" => "restate://",
            "DEALS_API_ENDPOINT" => deals_endpoint.as_str(),
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap();

    Gateway::new(config).unwrap()
}

pub fn gateway_for(server: &MockServer) -> Gateway {
    gateway_with(&server.uri(), &server.uri())
}

/// Base URL of a port nothing listens on
pub fn unreachable_uri() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn documents_path(collection: &str) -> String {
    format!("/v1/databases/{}/collections/{}/documents", DATABASE, collection)
}

pub fn document_list(documents: Vec<Value>) -> Value {
    json!({ "total": documents.len(), "documents": documents })
}

pub fn favorite_doc(id: &str, user_id: &str, game_id: &str, title: &str) -> Value {
    json!({
        "$id": id,
        "$collectionId": FAVORITES,
        "$databaseId": DATABASE,
        "$createdAt": "2024-03-01T12:00:00.000+00:00",
        "$updatedAt": "2024-03-01T12:00:00.000+00:00",
        "$permissions": [],
        "userId": user_id,
        "gameID": game_id,
        "title": title,
        "thumb": format!("https://img.example.com/{}.jpg", game_id)
    })
}

pub fn property_doc(id: &str, name: &str, kind: &str) -> Value {
    json!({
        "$id": id,
        "$collectionId": PROPERTIES,
        "$databaseId": DATABASE,
        "$createdAt": "2024-01-15T09:30:00.000+00:00",
        "$updatedAt": "2024-01-15T09:30:00.000+00:00",
        "$permissions": [],
        "name": name,
        "address": "12 Harbour St",
        "type": kind,
        "image": "https://img.example.com/p.jpg",
        "price": 950,
        "rating": 4.5
    })
}

pub fn not_found(kind: &str) -> Value {
    json!({
        "message": "The requested resource could not be found.",
        "code": 404,
        "type": kind,
        "version": "1.5.7"
    })
}
