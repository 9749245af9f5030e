use crate::handlers::{committee, proposal, snapshot};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/committee", get(committee::get_committee))
        .route("/members/{address}", get(committee::get_member))
        .route("/deposits", post(proposal::create_deposit))
        .route("/proposals/{id}", get(proposal::get_proposal))
        .route("/proposals/{id}/approvals", post(proposal::approve_proposal))
        .route(
            "/proposals/{id}/signers/{address}",
            get(proposal::get_signer),
        )
        .route("/snapshot", get(snapshot::get_snapshot));

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CALLER_HEADER;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use contracts::{CustodyLedger, SharedLedger};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use types::ids::Address;

    fn member(i: u64) -> Address {
        Address::from_index(i)
    }

    fn app() -> Router {
        let members = (0..3).map(member).collect();
        let ledger = CustodyLedger::new(members, 2).unwrap();
        create_router(AppState::new(SharedLedger::new(ledger)))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
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
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn deposit(caller: Address, amount: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/deposits")
            .header(CALLER_HEADER, caller.to_hex())
            .header("content-type", "application/json")
            .body(Body::from(json!({ "amount": amount }).to_string()))
            .unwrap()
    }

    fn approve(caller: Address, id: u64) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/v1/proposals/{}/approvals", id))
            .header(CALLER_HEADER, caller.to_hex())
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_committee_endpoint() {
        let app = app();
        let (status, body) = send(&app, get("/v1/committee")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["threshold"], 2);
        assert_eq!(body["members"].as_array().unwrap().len(), 3);
        assert_eq!(body["release_policy"]["kind"], "depositor");
    }

    #[tokio::test]
    async fn test_member_lookup() {
        let app = app();
        let (_, body) = send(&app, get(&format!("/v1/members/{}", member(1)))).await;
        assert_eq!(body["member"], true);

        let (_, body) = send(&app, get(&format!("/v1/members/{}", Address::ZERO))).await;
        assert_eq!(body["member"], false);

        let (status, _) = send(&app, get("/v1/members/0x12")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_deposit_and_quorum_over_http() {
        let app = app();

        let (status, body) = send(&app, deposit(member(0), "1.5")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["proposal_id"], 0);

        let (status, body) = send(&app, approve(member(0), 0)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "pending");
        assert_eq!(body["signature_count"], 1);

        let (status, body) = send(&app, approve(member(2), 0)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "executed");
        assert_eq!(body["amount"], "1.5");

        let (_, body) = send(&app, get("/v1/proposals/0")).await;
        assert_eq!(body["executed"], true);
        assert_eq!(body["signature_count"], 2);

        let (_, body) = send(&app, get(&format!("/v1/proposals/0/signers/{}", member(2)))).await;
        assert_eq!(body["signed"], true);
        let (_, body) = send(&app, get(&format!("/v1/proposals/0/signers/{}", member(1)))).await;
        assert_eq!(body["signed"], false);

        let (status, body) = send(&app, approve(member(1), 0)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "ALREADY_EXECUTED");
    }

    #[tokio::test]
    async fn test_double_approval_conflict() {
        let app = app();
        send(&app, deposit(member(0), "1")).await;
        send(&app, approve(member(1), 0)).await;
        let (status, body) = send(&app, approve(member(1), 0)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "MEMBER_ALREADY_SIGNED");
    }

    #[tokio::test]
    async fn test_non_member_forbidden() {
        let app = app();
        let (status, body) = send(&app, deposit(Address::from_index(99), "1")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_missing_caller_header() {
        let app = app();
        let request = Request::builder()
            .method("POST")
            .uri("/v1/proposals/0/approvals")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "UNAUTHENTICATED");
    }

    #[tokio::test]
    async fn test_zero_deposit_rejected() {
        let app = app();
        let (status, body) = send(&app, deposit(member(0), "0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_AMOUNT");
    }

    #[tokio::test]
    async fn test_unknown_proposal() {
        let app = app();
        let (status, body) = send(&app, get("/v1/proposals/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_snapshot_digest() {
        let app = app();
        send(&app, deposit(member(0), "2")).await;
        let (status, body) = send(&app, get("/v1/snapshot")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["digest"].as_str().unwrap().len(), 64);
        assert_eq!(body["snapshot"]["balance"], "2");
    }
}
