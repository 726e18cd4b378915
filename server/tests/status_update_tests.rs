// tests/status_update_tests.rs

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{TestContext, ADMIN_KEY, SUPPLIER_KEY};
use loja_server::models::NewOrder;
use serde_json::{json, Value};

fn put_status(api_key: Option<&str>, body: Value) -> test::TestRequest {
  let req = test::TestRequest::put().uri("/api/v1/orders/status").set_json(body);
  match api_key {
    Some(key) => req.insert_header(("X-API-Key", key)),
    None => req,
  }
}

#[actix_web::test]
async fn despachado_is_accepted_and_reports_both_statuses() {
  let ctx = TestContext::new();
  let order = ctx.order(NewOrder::pending("1001", 12990, 1500)).await;
  let app = test::init_service(ctx.app()).await;

  let resp = test::call_service(
    &app,
    put_status(Some(SUPPLIER_KEY), json!({ "order_number": "1001", "status": "despachado" })).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], true);
  assert_eq!(body["data"]["order_number"], "1001");
  assert_eq!(body["data"]["previous_status"], "pendente");
  assert_eq!(body["data"]["new_status"], "despachado");
  assert_eq!(body["data"]["notification_sent"], false);

  assert_eq!(ctx.reload("1001").await.status, "despachado");
  let history = ctx.state.store.history_for(order.id).await.unwrap();
  assert_eq!(history.len(), 1);
  assert_eq!(body["data"]["history_id"], history[0].id.to_string());
}

#[actix_web::test]
async fn registry_only_status_embalado_is_rejected() {
  let ctx = TestContext::new();
  ctx.order(NewOrder::pending("1002", 1000, 0)).await;
  let app = test::init_service(ctx.app()).await;

  let resp = test::call_service(
    &app,
    put_status(Some(SUPPLIER_KEY), json!({ "order_number": "1002", "status": "embalado" })).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], false);
  assert!(body["error"].as_str().unwrap().contains("embalado"));
  assert!(body.get("data").is_none());
  assert_eq!(ctx.reload("1002").await.status, "pendente");
  assert_eq!(ctx.store.history_len(), 0);
}

#[actix_web::test]
async fn missing_or_wrong_api_key_is_unauthorized() {
  let ctx = TestContext::new();
  ctx.order(NewOrder::pending("1003", 1000, 0)).await;
  let app = test::init_service(ctx.app()).await;
  let body = json!({ "order_number": "1003", "status": "cancelado" });

  for key in [None, Some(""), Some("chave-errada")] {
    let resp = test::call_service(&app, put_status(key, body.clone()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "key {:?}", key);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
  }
  assert_eq!(ctx.store.history_len(), 0);
}

#[actix_web::test]
async fn authentication_is_checked_before_the_body() {
  let ctx = TestContext::new();
  let app = test::init_service(ctx.app()).await;

  let req = test::TestRequest::put()
    .uri("/api/v1/orders/status")
    .insert_header(("content-type", "application/json"))
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn unknown_order_is_not_found() {
  let ctx = TestContext::new();
  let app = test::init_service(ctx.app()).await;

  let resp = test::call_service(
    &app,
    put_status(Some(ADMIN_KEY), json!({ "order_number": "9999", "status": "cancelado" })).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Order 9999 not found");
}

#[actix_web::test]
async fn missing_fields_and_bad_json_are_bad_requests() {
  let ctx = TestContext::new();
  ctx.order(NewOrder::pending("1004", 1000, 0)).await;
  let app = test::init_service(ctx.app()).await;

  for body in [
    json!({ "order_number": "1004" }),
    json!({ "status": "cancelado" }),
    json!({ "order_number": "  ", "status": "cancelado" }),
    json!({ "order_number": "1004", "status": "" }),
    json!({ "order_number": "1004", "status": "CANCELADO" }),
    json!({ "order_number": "1004", "status": " despachado\n" }),
    json!({ "order_number": "1004", "status": "cancelado " }),
  ] {
    let resp = test::call_service(&app, put_status(Some(SUPPLIER_KEY), body.clone()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {}", body);
  }

  let req = test::TestRequest::put()
    .uri("/api/v1/orders/status")
    .insert_header(("X-API-Key", SUPPLIER_KEY))
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(ctx.store.history_len(), 0);
  assert_eq!(ctx.reload("1004").await.status, "pendente");
}

#[actix_web::test]
async fn identical_calls_write_two_history_rows() {
  let ctx = TestContext::new();
  let order = ctx.order(NewOrder::pending("1005", 1000, 0)).await;
  let app = test::init_service(ctx.app()).await;
  let body = json!({ "order_number": "1005", "status": "despachado", "notes": "saiu para entrega" });

  let first = test::call_service(&app, put_status(Some(SUPPLIER_KEY), body.clone()).to_request()).await;
  assert_eq!(first.status(), StatusCode::OK);
  let second = test::call_service(&app, put_status(Some(SUPPLIER_KEY), body).to_request()).await;
  assert_eq!(second.status(), StatusCode::OK);
  let second: Value = test::read_body_json(second).await;
  assert_eq!(second["data"]["previous_status"], "despachado");

  let history = ctx.state.store.history_for(order.id).await.unwrap();
  assert_eq!(history.len(), 2);
  assert!(history.iter().all(|h| h.status == "despachado"));
  assert!(history.iter().all(|h| h.note.as_deref() == Some("saiu para entrega")));
  assert_ne!(history[0].id, history[1].id);
}

#[actix_web::test]
async fn database_failure_is_internal_error_without_partial_writes() {
  let ctx = TestContext::new();
  ctx.order(NewOrder::pending("1006", 1000, 0)).await;
  ctx.store.set_fail_writes(true);
  let app = test::init_service(ctx.app()).await;

  let resp = test::call_service(
    &app,
    put_status(Some(ADMIN_KEY), json!({ "order_number": "1006", "status": "cancelado" })).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], false);
  assert_eq!(body["error"], "Database operation failed");

  assert_eq!(ctx.reload("1006").await.status, "pendente");
  assert_eq!(ctx.store.history_len(), 0);
}

#[actix_web::test]
async fn tracking_number_is_stored_and_customer_notified() {
  let ctx = TestContext::new();
  ctx
    .order(NewOrder::pending("1007", 5000, 1000).with_customer_email("ana@cliente.example"))
    .await;
  let app = test::init_service(ctx.app()).await;

  let resp = test::call_service(
    &app,
    put_status(
      Some(ADMIN_KEY),
      json!({ "order_number": "1007", "status": "cancelado", "tracking_number": "BR456" }),
    )
    .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["data"]["notification_sent"], true);

  assert_eq!(ctx.reload("1007").await.tracking_code.as_deref(), Some("BR456"));
  let sent = ctx.state.notifier.sent();
  assert_eq!(sent.len(), 1);
  assert_eq!(sent[0].to, "ana@cliente.example");
  assert_eq!(sent[0].from, "pedidos@loja.test");
  assert_eq!(sent[0].body, "Seu pedido #1007 foi cancelado.");
  assert_eq!(sent[0].subject, "Pedido #1007 - Cancelado");
}

#[actix_web::test]
async fn notification_failure_does_not_fail_the_update() {
  let ctx = TestContext::new();
  let order = ctx
    .order(NewOrder::pending("1008", 5000, 0).with_customer_email("bob@fail.test"))
    .await;
  let app = test::init_service(ctx.app()).await;

  let resp = test::call_service(
    &app,
    put_status(Some(SUPPLIER_KEY), json!({ "order_number": "1008", "status": "em_preparacao" })).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["data"]["new_status"], "em_preparacao");
  assert_eq!(body["data"]["notification_sent"], false);

  assert!(ctx.state.notifier.sent().is_empty());
  assert_eq!(ctx.state.store.history_for(order.id).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn adjacency_is_not_enforced_by_the_endpoint() {
  let ctx = TestContext::new();
  ctx.order(NewOrder::pending("1009", 1000, 0)).await;
  let app = test::init_service(ctx.app()).await;

  // pendente -> reembolsado is not an edge of the display graph.
  let resp = test::call_service(
    &app,
    put_status(Some(SUPPLIER_KEY), json!({ "order_number": "1009", "status": "reembolsado" })).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(ctx.reload("1009").await.status, "reembolsado");
}
