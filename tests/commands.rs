//! One-shot commands against a scripted gateway.

mod common;

use std::sync::Arc;

use common::fake_gateway::{FakeGateway, Scripted};
use common::{entry, symbol};
use currency_converter::commands;

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("utf-8 output")
}

#[tokio::test]
async fn test_list_symbols_prints_code_and_name() {
    let gateway = Arc::new(FakeGateway::new());
    gateway.push_symbols(Scripted::Ok(vec![
        symbol("USD", "US Dollar"),
        symbol("JPY", "Japanese Yen"),
    ]));

    let mut out = Vec::new();
    commands::list_symbols(gateway, &mut out).await.unwrap();

    let text = output(out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["USD   US Dollar", "JPY   Japanese Yen"]);
}

#[tokio::test]
async fn test_list_symbols_surfaces_gateway_failure() {
    let gateway = Arc::new(FakeGateway::new());
    gateway.push_symbols(Scripted::ServerError(502, "upstream down".to_string()));

    let mut out = Vec::new();
    let err = commands::list_symbols(gateway, &mut out).await.unwrap_err();

    assert!(err.to_string().contains("upstream down"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_show_history_lists_newest_first_with_most_popular() {
    let gateway = Arc::new(FakeGateway::new());
    gateway.push_history(Scripted::Ok(vec![
        entry("first", 10.0, "USD", "EUR", 9.2),
        entry("second", 20.0, "GBP", "EUR", 23.4),
        entry("third", 30.0, "EUR", "JPY", 4800.0),
    ]));

    let mut out = Vec::new();
    commands::show_history(gateway, &mut out).await.unwrap();

    let text = output(out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("Amount"));
    assert!(lines[1].contains("4800"));
    assert!(lines[3].contains("9.2"));
    assert_eq!(lines[4], "Most popular destination currency: EUR");
}

#[tokio::test]
async fn test_show_history_with_no_entries() {
    let gateway = Arc::new(FakeGateway::new());
    gateway.push_history(Scripted::Ok(vec![]));

    let mut out = Vec::new();
    commands::show_history(gateway, &mut out).await.unwrap();

    let text = output(out);
    assert!(text.ends_with("Most popular destination currency: -\n"));
}

#[tokio::test]
async fn test_convert_prints_result_and_refreshes_history() {
    let gateway = Arc::new(FakeGateway::new());
    gateway.push_conversion(Scripted::Ok(entry("c1", 100.0, "USD", "EUR", 92.3)));
    gateway.push_history(Scripted::Ok(vec![entry("c1", 100.0, "USD", "EUR", 92.3)]));

    let mut out = Vec::new();
    let result = commands::convert(Arc::clone(&gateway), "100", "USD", "EUR", &mut out)
        .await
        .unwrap();

    assert_eq!(result, Some(92.3));
    assert_eq!(output(out), "100 USD = 92.3 EUR\n");
    assert_eq!(gateway.history_calls(), 1);
}

#[tokio::test]
async fn test_convert_validation_failure_makes_no_request() {
    let gateway = Arc::new(FakeGateway::new());

    let mut out = Vec::new();
    let err = commands::convert(Arc::clone(&gateway), "100", "USD", " ", &mut out)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Select the currency to convert to"));
    assert!(gateway.convert_requests().is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_convert_server_failure_is_reported() {
    let gateway = Arc::new(FakeGateway::new());
    gateway.push_conversion(Scripted::ServerError(500, "rate unavailable".to_string()));

    let mut out = Vec::new();
    let err = commands::convert(Arc::clone(&gateway), "5", "USD", "XXX", &mut out)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("rate unavailable"));
    assert_eq!(gateway.history_calls(), 0);
}

#[tokio::test]
async fn test_convert_succeeds_when_history_refresh_fails() {
    let gateway = Arc::new(FakeGateway::new());
    gateway.push_conversion(Scripted::Ok(entry("c1", 100.0, "USD", "EUR", 92.3)));
    gateway.push_history(Scripted::ServerError(503, "history down".to_string()));

    let mut out = Vec::new();
    let result = commands::convert(Arc::clone(&gateway), "100", "USD", "EUR", &mut out)
        .await
        .unwrap();

    assert_eq!(result, Some(92.3));
    assert_eq!(output(out), "100 USD = 92.3 EUR\n");
    assert_eq!(gateway.convert_requests().len(), 1);
    assert_eq!(gateway.history_calls(), 1);
}
