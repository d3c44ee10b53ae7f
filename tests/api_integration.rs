//! End-to-end tests for the JSON API.
//!
//! Each test builds the full router over a seeded in-memory store with mock
//! AI adapters and drives it with `oneshot`:
//! 1. Every documented endpoint answers with the expected shape
//! 2. Generated records show up under the demo user's history
//! 3. Both structured generation strategies plug in behind the same routes

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use travel_companion::adapters::ai::{
    AssistantIds, CompletionStructuredGenerator, MockAIProvider, MockAssistantThreads,
    MockStructuredGenerator, PollPolicy, ThreadRunStructuredGenerator,
};
use travel_companion::adapters::{api_router, InMemoryTravelStore, TravelAppState};
use travel_companion::config::ServerConfig;
use travel_companion::ports::{RunState, RunStatus, StructuredGenerator, ThreadMessage};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(provider: MockAIProvider, generator: Arc<dyn StructuredGenerator>) -> Router {
    let state = TravelAppState::with_store(InMemoryTravelStore::seeded(), Arc::new(provider), generator);
    api_router(state, &ServerConfig::default())
}

fn app() -> Router {
    app_with(MockAIProvider::new(), Arc::new(MockStructuredGenerator::new()))
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn itinerary_params() -> Value {
    json!({
        "mainDestination": "Tóquio",
        "otherDestinations": ["Kyoto"],
        "startDate": "2023-06-10",
        "endDate": "2023-06-17",
        "interests": ["Culinária", "Templos"],
        "preferences": "Ritmo tranquilo"
    })
}

fn checklist_params() -> Value {
    json!({
        "destination": "Bali",
        "climate": "tropical",
        "duration": 10,
        "tripType": "lazer",
        "confirmedItems": ["Passaporte"]
    })
}

// =============================================================================
// Catalog and currency
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = call(&app(), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn destinations_search_matches_activities() {
    let (status, body) = call(&app(), get("/api/destinations?search=templos")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bali"]);
}

#[tokio::test]
async fn destinations_filter_by_continent() {
    let (_, body) = call(&app(), get("/api/destinations?continent=am%C3%A9rica%20do%20sul")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn rates_list_the_nine_seeded_currencies() {
    let (status, body) = call(&app(), get("/api/currency/rates")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "AUD": 1.52, "BRL": 5.19, "CAD": 1.36, "CHF": 0.89, "CNY": 7.22,
            "EUR": 0.92, "GBP": 0.8, "JPY": 150.23, "USD": 1.0
        })
    );
}

#[tokio::test]
async fn convert_usd_to_brl() {
    let (status, body) = call(
        &app(),
        post("/api/currency/convert", json!({"from": "USD", "to": "BRL", "amount": 100})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"amount": 519.0, "from": "USD", "to": "BRL", "rate": 5.19}));
}

#[tokio::test]
async fn convert_round_trip_recovers_amount() {
    let app = app();
    let (_, there) = call(
        &app,
        post("/api/currency/convert", json!({"from": "EUR", "to": "JPY", "amount": 250.0})),
    )
    .await;
    let (_, back) = call(
        &app,
        post(
            "/api/currency/convert",
            json!({"from": "JPY", "to": "EUR", "amount": there["amount"]}),
        ),
    )
    .await;

    let recovered = back["amount"].as_f64().unwrap();
    assert!((recovered - 250.0).abs() <= 0.01, "recovered {}", recovered);
}

#[tokio::test]
async fn convert_rejects_non_positive_amount() {
    let (status, body) = call(
        &app(),
        post("/api/currency/convert", json!({"from": "USD", "to": "BRL", "amount": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn dolar_quote_uses_brl_rate() {
    let (status, body) = call(&app(), get("/api/currency/dolar")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rate"], 5.19);
    assert_eq!(body["change"], 0.1);
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn chat_replies_and_falls_back_on_empty_completion() {
    let provider = MockAIProvider::new()
        .with_response("Leve um guarda-chuva.")
        .with_response("   ");
    let app = app_with(provider.clone(), Arc::new(MockStructuredGenerator::new()));

    let (status, body) = call(&app, post("/api/chat", json!({"message": "Chove em Londres?"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Leve um guarda-chuva.");

    let (status, body) = call(&app, post("/api/chat", json!({"message": "E em Paris?"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "Desculpe, não consegui processar sua pergunta. Por favor, tente novamente."
    );
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn empty_chat_message_never_reaches_the_provider() {
    let provider = MockAIProvider::new();
    let app = app_with(provider.clone(), Arc::new(MockStructuredGenerator::new()));

    let (status, _) = call(&app, post("/api/chat", json!({"message": ""}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn chat_without_json_body_is_400() {
    let request = Request::post("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let (status, body) = call(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Generation through the completion strategy
// =============================================================================

#[tokio::test]
async fn completion_strategy_generates_checklist_and_records_it() {
    let provider = MockAIProvider::new().with_response(
        json!({
            "items": [
                {"id": 1, "text": "passaporte", "category": "Documentos", "checked": false},
                {"id": 2, "text": "Repelente", "category": "Saúde", "checked": false}
            ]
        })
        .to_string(),
    );
    let generator = Arc::new(CompletionStructuredGenerator::new(Arc::new(provider.clone()), 0.7));
    let app = app_with(provider.clone(), generator);

    let (status, body) = call(&app, post("/api/checklist", checklist_params())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["checked"], true);
    assert_eq!(body[1]["checked"], false);
    assert!(provider.get_calls()[0].json_mode);

    let (status, saved) = call(&app, get("/api/user/checklists")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved.as_array().unwrap().len(), 1);
    assert_eq!(saved[0]["destination"], "Bali");
    assert_eq!(saved[0]["userId"], 1);
    assert_eq!(saved[0]["checklistData"], body);
}

#[tokio::test]
async fn completion_strategy_reports_garbage_distinctly() {
    let provider = MockAIProvider::new().with_response("Desculpe, não sei.");
    let generator = Arc::new(CompletionStructuredGenerator::new(Arc::new(provider.clone()), 0.7));
    let app = app_with(provider, generator);

    let (status, body) = call(&app, post("/api/itinerary", itinerary_params())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INVALID_AI_RESPONSE");

    let (_, saved) = call(&app, get("/api/user/itineraries")).await;
    assert_eq!(saved, json!([]));
}

// =============================================================================
// Generation through the assistant thread/run strategy
// =============================================================================

fn assistant_generator(threads: MockAssistantThreads) -> Arc<dyn StructuredGenerator> {
    Arc::new(ThreadRunStructuredGenerator::new(
        Arc::new(threads),
        AssistantIds {
            itinerary: "asst_itinerary".to_string(),
            checklist: "asst_checklist".to_string(),
        },
        PollPolicy::new(Duration::from_millis(1), Duration::from_millis(200)),
    ))
}

#[tokio::test]
async fn assistant_strategy_generates_itinerary_from_prose_wrapped_array() {
    let reply = r#"Aqui está o seu roteiro:
[
  {"date": "Dia 1 - 10/06/2023", "title": "Chegada", "activities": [{"id": "1-1", "time": "15:00", "description": "Check-in em Shinjuku"}], "tip": "Compre um Suica"}
]
Boa viagem!"#;
    let threads = MockAssistantThreads::new()
        .with_statuses(vec![
            RunState::new(RunStatus::Queued),
            RunState::new(RunStatus::InProgress),
            RunState::new(RunStatus::Completed),
        ])
        .with_messages(vec![ThreadMessage::assistant(reply), ThreadMessage::user("Crie")]);
    let app = app_with(MockAIProvider::new(), assistant_generator(threads.clone()));

    let (status, body) = call(&app, post("/api/itinerary", itinerary_params())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["activities"][0]["description"], "Check-in em Shinjuku");
    assert_eq!(threads.started_assistants(), vec!["asst_itinerary".to_string()]);
    assert!(threads.posted_messages()[0].contains("8 dias em Tóquio"));

    let (_, saved) = call(&app, get("/api/user/itineraries")).await;
    assert_eq!(saved[0]["mainDestination"], "Tóquio");
    assert_eq!(saved[0]["startDate"], "2023-06-10");
    assert_eq!(saved[0]["itineraryData"], body);
}

#[tokio::test]
async fn assistant_strategy_failed_run_is_generic_500() {
    let threads =
        MockAssistantThreads::new().with_statuses(vec![RunState::failed("rate_limit_exceeded")]);
    let app = app_with(MockAIProvider::new(), assistant_generator(threads));

    let (status, body) = call(&app, post("/api/checklist", checklist_params())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "AI_PROVIDER_ERROR");
}

#[tokio::test]
async fn assistant_strategy_stuck_run_times_out() {
    let threads = MockAssistantThreads::new().with_statuses(vec![RunState::new(RunStatus::InProgress)]);
    let app = app_with(MockAIProvider::new(), assistant_generator(threads.clone()));

    let (status, body) = call(&app, post("/api/checklist", checklist_params())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "AI_PROVIDER_ERROR");
    assert!(threads.status_polls() > 1);
}

#[tokio::test]
async fn itinerary_with_end_before_start_is_400() {
    let mut params = itinerary_params();
    params["endDate"] = json!("2023-06-01");

    let (status, body) = call(&app(), post("/api/itinerary", params)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("endDate"));
}
