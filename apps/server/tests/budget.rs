mod common;

use axum::http::{Method, StatusCode};
use budgify_server::config::StorageKind;
use serde_json::{json, Value};

use common::{spawn_app, TestApp};

async fn seed_march(app: &TestApp, token: &str) {
    for (amount, category, date) in [(50, "Food", "2024-03-05"), (30, "Food", "2024-02-20")] {
        let (status, _) = app
            .post(
                "/expenses",
                token,
                json!({ "amount": amount, "category": category, "date": date }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    for (name, amount, frequency) in [("Streaming", 12, "monthly"), ("Insurance", 120, "annual")] {
        let (status, _) = app
            .post(
                "/recurring",
                token,
                json!({
                    "name": name,
                    "amount": amount,
                    "frequency": frequency,
                    "category": "Bills",
                    "start_date": "2024-01-01",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn march_summary_prorates_recurring_costs() {
    for storage in [StorageKind::Sqlite, StorageKind::Memory] {
        let app = spawn_app(storage).await;
        let token = app.register("jane", "jane@example.com").await;
        seed_march(&app, &token).await;

        let (status, _) = app.put("/budget", &token, json!({ "monthly_limit": 100 })).await;
        assert_eq!(status, StatusCode::OK);

        let (status, summary) = app.get("/budget/summary/2024/3", &token).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            summary,
            json!({
                "total_spent": 50.0,
                "recurring_costs": 22.0,
                "total_with_recurring": 72.0,
                "budget_limit": 100.0,
                "remaining": 28.0,
                "percentage_used": 72.0,
                "transaction_count": 1,
                "is_over_budget": false,
            })
        );

        app.put("/budget", &token, json!({ "monthly_limit": 50 })).await;
        let (_, summary) = app.get("/budget/summary/2024/3", &token).await;
        assert_eq!(summary["is_over_budget"], true);
        assert_eq!(summary["remaining"], -22.0);
    }
}

#[tokio::test]
async fn costs_starting_later_are_excluded() {
    let app = spawn_app(StorageKind::Sqlite).await;
    let token = app.register("jane", "jane@example.com").await;
    let (status, _) = app
        .post(
            "/recurring",
            &token,
            json!({
                "name": "Gym",
                "amount": 40,
                "frequency": "monthly",
                "category": "Health",
                "start_date": "2024-04-01",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, march) = app.get("/budget/summary/2024/3", &token).await;
    assert_eq!(march["recurring_costs"], 0.0);
    let (_, april) = app.get("/budget/summary/2024/4", &token).await;
    assert_eq!(april["recurring_costs"], 40.0);
}

#[tokio::test]
async fn empty_month_summary_is_all_zeros() {
    let app = spawn_app(StorageKind::Memory).await;
    let token = app.register("jane", "jane@example.com").await;

    let (status, summary) = app.get("/budget/summary/2024/3", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        summary,
        json!({
            "total_spent": 0.0,
            "recurring_costs": 0.0,
            "total_with_recurring": 0.0,
            "budget_limit": 0.0,
            "remaining": 0.0,
            "percentage_used": 0.0,
            "transaction_count": 0,
            "is_over_budget": false,
        })
    );
}

#[tokio::test]
async fn breakdown_groups_categories_and_fills_days() {
    let app = spawn_app(StorageKind::Sqlite).await;
    let token = app.register("jane", "jane@example.com").await;
    seed_march(&app, &token).await;
    let (status, _) = app
        .post(
            "/expenses",
            &token,
            json!({ "amount": 7.5, "category": "Transport", "date": "2024-03-05" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, breakdown) = app.get("/budget/breakdown/2024/3", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(breakdown["year"], 2024);
    assert_eq!(breakdown["month"], 3);
    assert_eq!(breakdown["transaction_count"], 2);
    assert_eq!(
        breakdown["category_totals"],
        json!({ "Food": 50.0, "Transport": 7.5 })
    );
    let days = breakdown["daily_spending"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[4], json!({ "day": 5, "amount": 57.5 }));
    assert_eq!(days[0]["amount"], 0.0);
}

#[tokio::test]
async fn budget_input_errors_are_client_errors() {
    let app = spawn_app(StorageKind::Memory).await;
    let token = app.register("jane", "jane@example.com").await;

    let bad_limits: [Value; 4] = [
        json!({ "monthly_limit": -5 }),
        json!({ "monthly_limit": 1e308 }),
        json!({ "monthly_limit": "lots" }),
        json!({}),
    ];
    for body in bad_limits {
        let (status, _) = app.put("/budget", &token, body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body} was accepted");
    }
    let (_, setting) = app.get("/budget", &token).await;
    assert_eq!(setting["monthly_limit"], 0.0);

    for uri in [
        "/budget/summary/2024/13",
        "/budget/summary/2024/0",
        "/budget/summary/2024/march",
        "/budget/breakdown/year/3",
    ] {
        let (status, body) = app.get(uri, &token).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} was accepted");
        assert_eq!(body["code"], 400);
    }
}

#[tokio::test]
async fn public_endpoints_need_no_token() {
    let app = spawn_app(StorageKind::Memory).await;

    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.send(Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Budgify API");
    assert_eq!(body["endpoints"]["budget"], "/budget");

    let (status, body) = app.send(Method::GET, "/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/budget/summary/{year}/{month}"].is_object());
    assert!(body["paths"]["/expenses/{id}"]["get"].is_object());
}
