//! End-to-end client tests against an in-process HTTP server.

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use atrium_client::{ApiError, CompanyApi, CompanyClient, PaymentsApi, PaymentsClient};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn company_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "address": "1 Test Way",
        "phone": "555-0000",
        "status": "ACTIVE",
    })
}

#[tokio::test]
async fn list_companies_unwraps_wrapped_payload() {
    let router = Router::new().route(
        "/companies",
        get(|| async { Json(json!({ "companies": [company_json("1", "Acme")] })) }),
    );
    let base = spawn(router).await;

    let companies = CompanyClient::new(base).list_companies(None).await.unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Acme");
}

#[tokio::test]
async fn list_companies_accepts_bare_arrays() {
    let router = Router::new().route(
        "/companies",
        get(|| async { Json(json!([company_json("1", "Acme"), company_json("2", "Beta")])) }),
    );
    let base = spawn(router).await;

    let companies = CompanyClient::new(base).list_companies(None).await.unwrap();
    assert_eq!(companies.len(), 2);
}

#[tokio::test]
async fn bearer_token_is_forwarded() {
    let router = Router::new().route(
        "/companies",
        get(|headers: HeaderMap| async move {
            match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                Some("Bearer session-token") => Json(json!([])).into_response(),
                _ => StatusCode::UNAUTHORIZED.into_response(),
            }
        }),
    );
    let base = spawn(router).await;
    let client = CompanyClient::new(base);

    assert!(client.list_companies(Some("session-token")).await.is_ok());

    let err = client.list_companies(None).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn server_message_is_surfaced_on_rejection() {
    let router = Router::new().route(
        "/companies/:id",
        axum::routing::delete(|Path(_id): Path<String>| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "Insufficient permissions" })),
            )
        }),
    );
    let base = spawn(router).await;

    let err = CompanyClient::new(base)
        .delete_company(&"1".into(), Some("t"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 403,
            message: "Insufficient permissions".to_string(),
        }
    );
}

#[tokio::test]
async fn rejection_without_message_body_falls_back_to_status_text() {
    let router = Router::new().route(
        "/companies",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn(router).await;

    let err = CompanyClient::new(base).list_companies(None).await.unwrap_err();
    match err {
        ApiError::Status { status: 500, message } => {
            assert!(message.contains("fetch companies"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on this port.
    let err = CompanyClient::new("http://127.0.0.1:1")
        .list_companies(None)
        .await
        .unwrap_err();
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn manage_member_posts_the_action_envelope() {
    let router = Router::new().route(
        "/companies/:id/members",
        post(
            |Path(_id): Path<String>, Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["companyId"], "c-1");
                assert_eq!(body["userId"], "u-2");
                assert_eq!(body["action"], "UPDATE_ROLE");
                assert_eq!(body["role"], "ADMIN");
                StatusCode::NO_CONTENT
            },
        ),
    );
    let base = spawn(router).await;

    CompanyClient::new(base)
        .manage_member(
            &"c-1".into(),
            &"u-2".into(),
            atrium_rbac::MemberAction::UpdateRole,
            Some(atrium_rbac::Role::Admin),
            Some("t"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn transactions_request_carries_pagination() {
    #[derive(serde::Deserialize)]
    struct Page {
        page: u32,
        limit: u32,
    }

    let router = Router::new().route(
        "/payments/account/transactions",
        get(|Query(page): Query<Page>| async move {
            assert_eq!(page.page, 2);
            assert_eq!(page.limit, 25);
            Json(json!({ "transactions": [] }))
        }),
    );
    let base = spawn(router).await;

    let transactions = PaymentsClient::new(base)
        .account_transactions(2, 25, Some("t"))
        .await
        .unwrap();
    assert!(transactions.is_empty());
}

#[tokio::test]
async fn pay_expense_tolerates_an_empty_response_body() {
    let router = Router::new().route(
        "/payments/expenses/:id/pay",
        post(|Path(id): Path<String>| async move {
            assert_eq!(id, "e-9");
            StatusCode::NO_CONTENT
        }),
    );
    let base = spawn(router).await;

    PaymentsClient::new(base)
        .pay_expense(&"e-9".into(), Some("t"))
        .await
        .unwrap();
}
