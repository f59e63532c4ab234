//! Integration tests for the capability operations.
//!
//! Each test points a client at a mock server through the host override and
//! checks the request a pool operation sends, and that the raw response is
//! handed back whatever its status.

use std::sync::Arc;

use mirakl_api::clients::{Attachment, HttpClient};
use mirakl_api::rest::{
    Creatable, Deletable, Filters, Gettable, Listable, ResourcePool, Searchable, Updatable,
};
use mirakl_api::{ApiKey, HostUrl, Hostname, HttpError, MiraklClient, MiraklConfig};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

fn create_client(server_uri: &str) -> MiraklClient {
    let config = MiraklConfig::builder()
        .hostname(Hostname::new("example.mirakl.net").unwrap())
        .api_key(ApiKey::new("token123").unwrap())
        .host(HostUrl::new(server_uri).unwrap())
        .build()
        .unwrap();
    MiraklClient::new(&config).unwrap()
}

/// Matches requests that carry no header with the given name.
struct MissingHeader(&'static str);

impl Match for MissingHeader {
    fn matches(&self, request: &Request) -> bool {
        !request
            .headers
            .keys()
            .any(|name| name.as_str().eq_ignore_ascii_case(self.0))
    }
}

// ============================================================================
// Listable
// ============================================================================

#[tokio::test]
async fn test_fetch_list_sends_filters_as_query_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("status", "SHIPPED"))
        .and(header("authorization", "token123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": [], "total_count": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let filters = Filters::new().set("status", "SHIPPED");
    let response = client.orders().fetch_list(Some(&filters)).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.json::<serde_json::Value>().unwrap()["total_count"], 0);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_fetch_list_repeats_key_for_sequence_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let filters = Filters::new().set("order_state_codes", ["SHIPPING", "SHIPPED"]);
    client.orders().fetch_list(Some(&filters)).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("order_state_codes=SHIPPING&order_state_codes=SHIPPED")
    );
}

#[tokio::test]
async fn test_fetch_list_without_filters_sends_no_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sellerpayment/transactions_logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lines": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    client.transactions_logs().fetch_list(None).await.unwrap();
    client
        .transactions_logs()
        .fetch_list(Some(&Filters::new()))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|request| request.url.query().is_none()));
}

#[tokio::test]
async fn test_report_endpoints_return_raw_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/offers/imports/2042/error_report"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/csv")
                .set_body_string("sku;error\nA1;Invalid price\n"),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client
        .offers()
        .imports()
        .error_report("2042")
        .fetch_list(None)
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.content_type(), Some("text/csv"));
    assert!(response.text().contains("Invalid price"));
    assert!(response.json::<serde_json::Value>().is_err());
}

// ============================================================================
// Creatable
// ============================================================================

#[tokio::test]
async fn test_create_posts_json_body_with_json_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/threads/T1/message"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"body": "Hello", "to": ["OPERATOR"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message_id": "M1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client
        .threads()
        .message("T1")
        .create(&json!({"body": "Hello", "to": ["OPERATOR"]}))
        .await
        .unwrap();

    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_create_serializes_typed_items() {
    #[derive(serde::Serialize)]
    struct Tracking<'a> {
        carrier_code: &'a str,
        tracking_number: &'a str,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/shipments/tracking"))
        .and(body_json(json!({"carrier_code": "UPS", "tracking_number": "1Z999"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client
        .shipments()
        .tracking()
        .create(&Tracking {
            carrier_code: "UPS",
            tracking_number: "1Z999",
        })
        .await
        .unwrap();

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_multipart_create_omits_json_headers_for_that_request_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/offers/imports"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(MissingHeader("accept"))
        .and(header("authorization", "token123"))
        .and(body_string_contains("name=\"import_mode\""))
        .and(body_string_contains("NORMAL"))
        .and(body_string_contains("filename=\"offers.csv\""))
        .and(body_string_contains("sku;price"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"import_id": 2042})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/offers"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());

    let file = Attachment::new("file", "offers.csv", b"sku;price\nA1;9.99\n".to_vec())
        .mime_type("text/csv");
    let response = client
        .offers()
        .imports()
        .create_with_attachments(&json!({"import_mode": "NORMAL"}), vec![file])
        .await
        .unwrap();
    assert_eq!(response.code, 201);

    // The shared defaults are untouched by the multipart request
    let response = client
        .offers()
        .create(&json!({"offers": []}))
        .await
        .unwrap();
    assert_eq!(response.code, 201);
    assert_eq!(
        client
            .transport()
            .default_headers()
            .get("Accept")
            .map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_multipart_create_rejects_non_object_items() {
    let client = create_client("http://127.0.0.1:1");

    let result = client
        .shops()
        .documents()
        .create_with_attachments(&json!(["not", "an", "object"]), Vec::new())
        .await;

    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
}

// ============================================================================
// Gettable, Updatable, Deletable
// ============================================================================

#[tokio::test]
async fn test_fetch_one_appends_identifier() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/offers/2001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"offer_id": 2001})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client.offers().fetch_one("2001").await.unwrap();

    assert_eq!(response.json::<serde_json::Value>().unwrap()["offer_id"], 2001);
}

#[tokio::test]
async fn test_not_found_is_returned_as_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices/UNKNOWN"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"status": 404, "message": "Not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client.invoices().fetch_one("UNKNOWN").await.unwrap();

    assert_eq!(response.code, 404);
    assert!(!response.is_ok());
    assert_eq!(
        response.json::<serde_json::Value>().unwrap()["message"],
        "Not found"
    );
}

#[tokio::test]
async fn test_upsert_derives_identifier_from_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/orders/42"))
        .and(body_json(json!({"id": 42, "customer_notification_email": "a@b.c"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client
        .orders()
        .upsert(&json!({"id": 42, "customer_notification_email": "a@b.c"}), None)
        .await
        .unwrap();

    assert_eq!(response.code, 204);
}

#[tokio::test]
async fn test_upsert_explicit_identifier_wins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/orders/ORD9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client
        .orders()
        .upsert(&json!({"id": "ORD1"}), Some("ORD9"))
        .await
        .unwrap();

    assert_eq!(response.code, 204);
}

#[tokio::test]
async fn test_upsert_without_identifier_targets_bound_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/orders/ORD1/accept"))
        .and(body_json(json!({"order_lines": [{"accepted": true, "id": "ORD1-1"}]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client
        .orders()
        .accept("ORD1")
        .upsert(
            &json!({"order_lines": [{"accepted": true, "id": "ORD1-1"}]}),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.code, 204);
}

#[tokio::test]
async fn test_delete_appends_identifier() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/shops/documents/DOC1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client.shops().documents().delete("DOC1").await.unwrap();

    assert_eq!(response.code, 204);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_empty_identifier_never_targets_the_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/shops/documents/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/invoices/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());

    let response = client.shops().documents().delete("").await.unwrap();
    assert_eq!(response.code, 404);

    let response = client.invoices().fetch_one("").await.unwrap();
    assert_eq!(response.code, 404);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|request| request.url.path().ends_with('/')));
}

#[tokio::test]
async fn test_upsert_with_zero_id_targets_bound_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/orders"))
        .and(body_json(json!({"id": 0, "order_ids": ["ORD1"]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let response = client
        .orders()
        .upsert(&json!({"id": 0, "order_ids": ["ORD1"]}), None)
        .await
        .unwrap();

    assert_eq!(response.code, 204);
}

// ============================================================================
// Searchable
// ============================================================================

#[derive(Debug, Clone)]
struct HierarchySearchPool {
    endpoint: String,
    transport: Arc<HttpClient>,
}

impl ResourcePool for HierarchySearchPool {
    fn from_parts(endpoint: String, transport: Arc<HttpClient>) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    fn get_url(&self) -> &str {
        &self.endpoint
    }

    fn transport(&self) -> &Arc<HttpClient> {
        &self.transport
    }
}

impl Searchable for HierarchySearchPool {}

#[tokio::test]
async fn test_search_sends_single_query_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/hierarchies"))
        .and(query_param("query", "shoes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hierarchies": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let pool: HierarchySearchPool = client.settings().child(&["hierarchies"]);
    let response = pool.search("shoes").await.unwrap();

    assert!(response.is_ok());
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("query=shoes"));
}

// ============================================================================
// Transport failures and end-to-end flow
// ============================================================================

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = create_client("http://127.0.0.1:1");

    let result = client.account().fetch_list(None).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[tokio::test]
async fn test_tracking_update_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/orders/ORD1/tracking"))
        .and(header("authorization", "token123"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"carrier": "UPS"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let tracking = client.orders().tracking("ORD1");
    assert_eq!(
        tracking.get_url(),
        format!("{}/api/orders/ORD1/tracking", mock_server.uri())
    );

    let response = tracking.upsert(&json!({"carrier": "UPS"}), None).await.unwrap();

    assert_eq!(response.code, 204);
}
