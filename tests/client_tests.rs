//! End-to-end tests against a local mock of the remote API.

use mockito::{Matcher, Server};
use serde_json::json;

use revolut_business::api::{Client, TransactionFilter};
use revolut_business::cache::{self, AccountCache, DetailsCache};
use revolut_business::error::Error;
use revolut_business::models::{InternalCounterpartyRequest, PaymentRequest, Receiver};

const KEY: &str = "sand_0123456789012345678901234567890123456789";

fn client(server: &Server) -> Client {
    Client::with_base_url(KEY, &server.url()).unwrap()
}

fn account_body(id: &str, name: &str, balance: f64, currency: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "balance": balance,
        "currency": currency,
        "state": "active",
        "public": false,
        "created_at": "2020-01-11T12:22:53.12Z",
        "updated_at": "2020-02-11T12:22:53.12Z"
    })
}

fn details_body(account_no: &str) -> serde_json::Value {
    json!([{
        "account_no": account_no,
        "sort_code": "223344",
        "beneficiary": "Test Org",
        "beneficiary_address": {
            "street_line1": "1 Canada Square",
            "street_line2": "",
            "region": "",
            "city": "London",
            "country": "GB",
            "postcode": "E14 5AB"
        },
        "bank_country": "GB",
        "pooled": false,
        "schemes": ["bacs", "faster_payments"],
        "estimated_time": {"unit": "hours", "min": 0, "max": 12}
    }])
}

#[tokio::test]
async fn test_account_listing_fills_caches_then_serves_from_them() {
    let mut server = Server::new_async().await;

    let list_mock = server
        .mock("GET", "/accounts")
        .match_header("authorization", format!("Bearer {}", KEY).as_str())
        .with_status(200)
        .with_body(
            json!([
                account_body("acc-1", "Main", 100.0, "GBP"),
                account_body("acc-2", "Euros", 50.0, "EUR"),
            ])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let details_1 = server
        .mock("GET", "/accounts/acc-1/bank-details")
        .with_status(200)
        .with_body(details_body("11111111").to_string())
        .expect(1)
        .create_async()
        .await;
    let details_2 = server
        .mock("GET", "/accounts/acc-2/bank-details")
        .with_status(200)
        .with_body(details_body("22222222").to_string())
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let accounts_path = dir.path().join("accounts.json");
    let details_path = dir.path().join("details.json");
    let client = client(&server);

    // First listing: empty caches, so the list and both detail sets are
    // fetched and merged into the cache files.
    let mut accounts = AccountCache::load(&accounts_path);
    let mut details = DetailsCache::load(&details_path);
    assert!(accounts.is_empty());

    cache::refresh_accounts(&client, &mut accounts, &mut details)
        .await
        .unwrap();
    accounts.save(&accounts_path).unwrap();
    details.save(&details_path).unwrap();

    assert_eq!(accounts.len(), 2);
    assert_eq!(details.len(), 2);
    assert_eq!(
        details.get("acc-2").unwrap()[0].account_no.as_deref(),
        Some("22222222")
    );

    // Second listing: both caches are populated, no further network calls.
    let accounts = AccountCache::load(&accounts_path);
    let details = DetailsCache::load(&details_path);
    assert!(!accounts.is_empty());
    assert_eq!(accounts.sorted_ids(), vec!["acc-1", "acc-2"]);
    assert_eq!(details.get("acc-1").unwrap().len(), 1);

    list_mock.assert_async().await;
    details_1.assert_async().await;
    details_2.assert_async().await;
}

#[tokio::test]
async fn test_refresh_only_fetches_details_for_missing_ids() {
    let mut server = Server::new_async().await;

    let _list = server
        .mock("GET", "/accounts")
        .with_status(200)
        .with_body(
            json!([
                account_body("acc-1", "Main", 100.0, "GBP"),
                account_body("acc-3", "New", 5.0, "USD"),
            ])
            .to_string(),
        )
        .create_async()
        .await;
    // acc-1 is cached already; only acc-3 may be fetched.
    let details_3 = server
        .mock("GET", "/accounts/acc-3/bank-details")
        .with_status(200)
        .with_body(details_body("33333333").to_string())
        .expect(1)
        .create_async()
        .await;
    let details_1 = server
        .mock("GET", "/accounts/acc-1/bank-details")
        .expect(0)
        .create_async()
        .await;

    let client = client(&server);
    let mut accounts = AccountCache::new();
    let mut details = DetailsCache::new();
    accounts.set(
        "acc-1",
        serde_json::from_value(account_body("acc-1", "Main", 100.0, "GBP")).unwrap(),
    );
    details.set(
        "acc-1",
        serde_json::from_value(details_body("11111111")).unwrap(),
    );

    cache::refresh_accounts(&client, &mut accounts, &mut details)
        .await
        .unwrap();

    assert_eq!(details.len(), 2);
    // The cached entry was not refreshed.
    assert_eq!(
        details.get("acc-1").unwrap()[0].account_no.as_deref(),
        Some("11111111")
    );

    details_1.assert_async().await;
    details_3.assert_async().await;
}

#[tokio::test]
async fn test_payment_normalizes_currency_before_transmission() {
    let mut server = Server::new_async().await;

    let pay_mock = server
        .mock("POST", "/pay")
        .match_header("authorization", format!("Bearer {}", KEY).as_str())
        .match_body(Matcher::Json(json!({
            "request_id": "revolut-0000000000000001",
            "account_id": "acc-1",
            "receiver": {"counterparty_id": "cp-1"},
            "amount": 10.50,
            "currency": "GBP"
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "tx-1",
                "state": "pending",
                "created_at": "2020-02-01T10:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = PaymentRequest {
        request_id: "revolut-0000000000000001".to_string(),
        account_id: "acc-1".to_string(),
        receiver: Receiver {
            counterparty_id: "cp-1".to_string(),
            account_id: None,
        },
        amount: 10.50,
        currency: "gbp".to_string(),
        reference: None,
        schedule_for: None,
    };
    let response = client(&server).pay(&request).await.unwrap();

    assert_eq!(response.id, "tx-1");
    assert_eq!(response.state, "pending");
    pay_mock.assert_async().await;
}

#[tokio::test]
async fn test_payment_error_envelope_message_is_surfaced_verbatim() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/pay")
        .with_status(402)
        .with_body(r#"{"message":"insufficient funds","code":1042}"#)
        .create_async()
        .await;

    let request = PaymentRequest {
        request_id: "revolut-0000000000000002".to_string(),
        account_id: "acc-1".to_string(),
        receiver: Receiver {
            counterparty_id: "cp-1".to_string(),
            account_id: None,
        },
        amount: 10.50,
        currency: "gbp".to_string(),
        reference: None,
        schedule_for: None,
    };
    let err = client(&server).pay(&request).await.unwrap_err();

    assert_eq!(err.to_string(), "insufficient funds");
    match err {
        Error::Api { status, .. } => assert_eq!(status, 402),
        other => panic!("expected Error::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_account_falls_back_to_status_table() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/accounts/acc-9")
        .with_status(404)
        .with_body("not json")
        .create_async()
        .await;

    let err = client(&server).account("acc-9").await.unwrap_err();
    assert_eq!(err.to_string(), "unknown resource - check spelling");
}

#[tokio::test]
async fn test_transfer_uppercases_currency_and_decodes_state() {
    let mut server = Server::new_async().await;

    let transfer_mock = server
        .mock("POST", "/transfer")
        .match_body(Matcher::Json(json!({
            "request_id": "revolut-0000000000000003",
            "source_account_id": "acc-1",
            "target_account_id": "acc-2",
            "amount": 120.0,
            "currency": "EUR",
            "reference": "Rent"
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "tx-2",
                "state": "completed",
                "created_at": "2020-02-01T10:00:00Z",
                "completed_at": "2020-02-01T10:00:01Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = revolut_business::models::TransferRequest {
        request_id: "revolut-0000000000000003".to_string(),
        source_account_id: "acc-1".to_string(),
        target_account_id: "acc-2".to_string(),
        amount: 120.0,
        currency: "eur".to_string(),
        reference: Some("Rent".to_string()),
    };
    let response = client(&server).transfer(&request).await.unwrap();

    assert_eq!(response.state, "completed");
    assert!(response.completed_at.is_some());
    transfer_mock.assert_async().await;
}

#[tokio::test]
async fn test_transactions_listing_builds_the_fixed_query() {
    let mut server = Server::new_async().await;

    let list_mock = server
        .mock("GET", "/transactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("count".into(), "50".into()),
            Matcher::UrlEncoded("type".into(), "transfer".into()),
            Matcher::UrlEncoded("from".into(), "2020-01-01".into()),
        ]))
        .with_status(200)
        .with_body(
            json!([{
                "id": "tx-1",
                "type": "transfer",
                "state": "completed",
                "created_at": "2020-02-01T10:00:00Z",
                "legs": [{
                    "leg_id": "leg-1",
                    "amount": -100.0,
                    "currency": "GBP",
                    "account_id": "acc-1"
                }]
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let filter = TransactionFilter {
        count: Some(50),
        kind: Some("transfer".to_string()),
        from: Some("2020-01-01".to_string()),
        to: Some(String::new()),
        counterparty: None,
    };
    let transactions = client(&server).transactions(&filter).await.unwrap();

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].legs.len(), 1);
    list_mock.assert_async().await;
}

#[tokio::test]
async fn test_add_and_delete_counterparty() {
    let mut server = Server::new_async().await;

    let add_mock = server
        .mock("POST", "/counterparty")
        .match_body(Matcher::Json(json!({
            "profile_type": "personal",
            "name": "John Smith",
            "phone": "+447771234455"
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "cp-1",
                "name": "John Smith",
                "phone": "+447771234455",
                "profile_type": "personal",
                "state": "created",
                "created_at": "2020-01-11T12:22:53.12Z",
                "updated_at": "2020-01-11T12:22:53.12Z",
                "accounts": [
                    {"id": "cpa-1", "currency": "GBP", "type": "revolut"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let delete_mock = server
        .mock("DELETE", "/counterparty/cp-1")
        .with_status(204)
        .create_async()
        .await;

    let request = InternalCounterpartyRequest {
        profile_type: "personal".to_string(),
        name: Some("John Smith".to_string()),
        phone: Some("+447771234455".to_string()),
        email: None,
    };
    let client = client(&server);
    let counterparty = client.add_counterparty(&request).await.unwrap();

    assert_eq!(counterparty.id, "cp-1");
    assert_eq!(counterparty.accounts[0].kind, "revolut");

    client.delete_counterparty("cp-1").await.unwrap();

    add_mock.assert_async().await;
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_counterparty_surfaces_envelope_error() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("DELETE", "/counterparty/cp-9")
        .with_status(404)
        .with_body(r#"{"message":"counterparty not found","code":3002}"#)
        .create_async()
        .await;

    let err = client(&server)
        .delete_counterparty("cp-9")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "counterparty not found");
}

#[tokio::test]
async fn test_webhook_registration_expects_no_content() {
    let mut server = Server::new_async().await;

    let hook_mock = server
        .mock("POST", "/webhook")
        .match_body(Matcher::Json(json!({"url": "https://example.org/hook"})))
        .with_status(204)
        .create_async()
        .await;

    client(&server)
        .add_webhook("https://example.org/hook")
        .await
        .unwrap();
    hook_mock.assert_async().await;
}

#[tokio::test]
async fn test_cancel_transaction_expects_no_content() {
    let mut server = Server::new_async().await;

    let cancel_mock = server
        .mock("DELETE", "/transaction/tx-1")
        .with_status(204)
        .create_async()
        .await;

    client(&server).cancel_transaction("tx-1").await.unwrap();
    cancel_mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    // Nothing listens on this port; the failure must be distinct from an
    // HTTP-level error.
    let client = Client::with_base_url(KEY, "http://127.0.0.1:9").unwrap();
    let err = client.accounts().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
