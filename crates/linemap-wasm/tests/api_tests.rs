// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! API surface tests for the LineMapperApp bindings.
#![allow(clippy::expect_used, clippy::unwrap_used)]
use linemap_wasm::LineMapperApp;

#[test]
fn fresh_app_renders_an_empty_document() {
    let app = LineMapperApp::new();
    let svg = app.svg();
    assert!(svg.starts_with("<svg "));
    assert_eq!(svg.matches("<line ").count(), 0);
    assert_eq!(app.error_message(), None);
    assert_eq!(app.segments_json(), "[]");
}

#[test]
fn draw_fix_draw_shows_fixed_then_pending() {
    let mut app = LineMapperApp::new();
    app.draw("0 0 10 10 red").unwrap();
    app.fix().unwrap();
    app.draw("0 0 20 20 blue\n5 5 6 6 green").unwrap();

    assert_eq!(app.fixed_count(), 1);
    assert_eq!(app.pending_count(), 2);
    let svg = app.svg();
    assert_eq!(svg.matches("<line ").count(), 3);
    assert!(svg.find(r#"data-key="1""#).unwrap() < svg.find(r#"data-key="2""#).unwrap());

    let json: serde_json::Value = serde_json::from_str(&app.segments_json()).unwrap();
    let ids: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn bad_input_shows_error_and_keeps_fixed() {
    let mut app = LineMapperApp::new();
    app.draw("0 0 10 10 red").unwrap();
    app.fix().unwrap();
    app.draw("0 0 10 10 5").unwrap();

    assert_eq!(
        app.error_message().as_deref(),
        Some("Error: Line 1 is expecting four numbers from 0 to 4000 and one color string but not")
    );
    assert_eq!(app.fixed_count(), 1);
    assert_eq!(app.pending_count(), 0);
    assert!(app.svg().contains("expecting four numbers"));

    // Fix is a no-op while the error is shown.
    app.fix().unwrap();
    assert_eq!(app.fixed_count(), 1);
}

#[test]
fn unfix_discards_fixed_and_clear_empties_pending() {
    let mut app = LineMapperApp::new();
    app.draw("0 0 10 10 red").unwrap();
    app.fix().unwrap();
    app.draw("1 1 2 2 blue").unwrap();
    app.unfix().unwrap();
    assert_eq!(app.fixed_count(), 0);
    assert_eq!(app.pending_count(), 1);

    app.clear().unwrap();
    assert_eq!(app.pending_count(), 0);
    assert_eq!(app.svg().matches("<line ").count(), 0);
}

#[test]
fn resize_updates_document_size() {
    let mut app = LineMapperApp::new();
    app.resize(320, 240, 1.0).unwrap();
    assert!(app.svg().contains(r#"width="320" height="240""#));
}

#[test]
fn large_drawing_is_drawn_in_full() {
    let mut app = LineMapperApp::new();
    app.draw(&vec!["0 0 10 10 red"; 12_000].join("\n")).unwrap();
    assert_eq!(app.pending_count(), 12_000);
    assert_eq!(app.svg().matches("<line ").count(), 12_000);
}
