//! End-to-end routing scenarios over the in-memory bus.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use url::Url;

use ruffle_bridge_page::bus::MessageBus;
use ruffle_bridge_page::env::{PublicPathCell, StaticScript};
use ruffle_bridge_page::notifier::Notifier;
use ruffle_bridge_page::player::LocalPlayer;
use ruffle_bridge_page::RouterState;

use harness::{script_with_id, Page, MASKED};

#[test]
fn ping_is_answered_on_outbound_channel() {
    let page = Page::boot(Some(script_with_id("7")));
    assert_eq!(page.bridge.state(), RouterState::Attached);

    page.send(json!({ "to": "ruffle_page7", "index": 42, "data": { "type": "ping" } }));

    assert_eq!(
        page.received_on("ruffle_content7"),
        vec![json!({ "to": "ruffle_content7", "index": 42, "data": {} })]
    );
}

#[test]
fn index_is_passed_through_unchanged() {
    let page = Page::boot(Some(script_with_id("7")));

    page.send(json!({ "to": "ruffle_page7", "index": { "req": "a-1" }, "data": { "type": "ping" } }));
    page.send(json!({ "to": "ruffle_page7", "data": { "type": "ping" } }));

    let replies = page.received_on("ruffle_content7");
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["index"], json!({ "req": "a-1" }));
    assert!(replies[1]["index"].is_null());
}

#[test]
fn replies_keep_delivery_order() {
    let page = Page::boot(Some(script_with_id("7")));

    for index in 1..=3 {
        page.bus.post(json!({ "to": "ruffle_page7", "index": index, "data": { "type": "ping" } }));
    }
    page.bus.run_until_idle();

    let order: Vec<_> = page
        .received_on("ruffle_content7")
        .iter()
        .map(|m| m["index"].as_u64().unwrap())
        .collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn foreign_frames_are_ignored() {
    let page = Page::boot(Some(script_with_id("7")));

    page.send_foreign(json!({ "to": "ruffle_page7", "index": 1, "data": { "type": "ping" } }));
    page.send_foreign(json!({ "to": "ruffle_page7", "index": 2, "data": { "type": "load" } }));

    assert!(page.received_on("ruffle_content7").is_empty());
    assert!(page.player.installs().is_empty());
}

#[test]
fn other_instances_are_ignored() {
    let page = Page::boot(Some(script_with_id("7")));

    page.send(json!({ "to": "ruffle_page8", "index": 1, "data": { "type": "ping" } }));
    page.send(json!({ "to": "ruffle_page8", "index": 2, "data": { "type": "load", "config": {} } }));
    page.send(json!({ "to": "ruffle_page", "index": 3, "data": { "type": "ping" } }));

    assert!(page.received_on("ruffle_content7").is_empty());
    assert!(page.received_on("ruffle_content8").is_empty());
    assert!(page.player.installs().is_empty());
    assert!(page.player.config().is_none());
}

#[test]
fn absent_payloads_are_dropped() {
    let page = Page::boot(Some(script_with_id("7")));

    for data in [json!(null), json!(0), json!(""), json!(false), json!("ruffle_page7")] {
        page.send(data);
    }

    assert!(page.received_on("ruffle_content7").is_empty());
}

#[test]
fn unrecognized_commands_get_no_reply() {
    let page = Page::boot(Some(script_with_id("7")));

    page.send(json!({ "to": "ruffle_page7", "index": 1, "data": { "type": "reload" } }));
    page.send(json!({ "to": "ruffle_page7", "index": 2, "data": { "type": "open_url_in_player", "url": "https://x/a.swf" } }));
    page.send(json!({ "to": "ruffle_page7", "index": 3 }));
    page.send(json!({ "to": "ruffle_page7", "index": 4, "data": "ping" }));

    assert!(page.received_on("ruffle_content7").is_empty());
}

#[test]
fn load_merges_config_and_installs() {
    let page = Page::boot_with(
        Some(script_with_id("7")),
        LocalPlayer::new(),
        r#"{ "a": 2, "b": 3 }"#,
        Rc::new(PublicPathCell::new(MASKED)),
    );

    page.send(json!({
        "to": "ruffle_page7",
        "index": 5,
        "data": { "type": "load", "config": { "a": 1, "openInNewTab": "overridden?" } }
    }));

    assert_eq!(
        page.received_on("ruffle_content7"),
        vec![json!({ "to": "ruffle_content7", "index": 5, "data": {} })]
    );
    assert_eq!(page.player.installs(), vec!["extension".to_string()]);

    let config = page.player.config().expect("config slot exists");
    assert_eq!(serde_json::Value::Object(config.values().clone()), json!({ "a": 2, "b": 3 }));
    assert!(config.has_navigation_hook());
}

#[test]
fn load_creates_missing_config_slot() {
    let page = Page::boot(Some(script_with_id("7")));
    assert!(page.player.config().is_none());

    page.send(json!({ "to": "ruffle_page7", "index": 1, "data": { "type": "load", "config": { "autoplay": "on" } } }));
    page.send(json!({ "to": "ruffle_page7", "index": 2, "data": { "type": "load" } }));

    let config = page.player.config().expect("config slot exists");
    assert_eq!(config.get("autoplay"), Some(&json!("on")));
    assert!(config.has_navigation_hook());
    assert_eq!(page.player.installs().len(), 2);
    assert_eq!(page.received_on("ruffle_content7").len(), 2);
}

#[test]
fn load_with_non_object_config_is_acknowledged() {
    let page = Page::boot(Some(script_with_id("7")));

    page.send(json!({ "to": "ruffle_page7", "index": 1, "data": { "type": "load", "config": 5 } }));
    page.send(json!({ "to": "ruffle_page7", "index": 2, "data": { "type": "load", "config": "ab" } }));
    page.send(json!({ "to": "ruffle_page7", "index": 3, "data": { "type": "load", "config": true } }));
    page.send(json!({ "to": "ruffle_page7", "index": 4, "data": { "type": "load", "config": [1, 2] } }));

    let replies = page.received_on("ruffle_content7");
    assert_eq!(replies.len(), 4);
    assert!(replies.iter().all(|r| r["data"] == json!({})));
    assert_eq!(page.player.installs().len(), 4);

    // First writer wins per key: "ab" set "0" and "1" before [1, 2] arrived.
    let config = page.player.config().unwrap();
    assert_eq!(
        serde_json::Value::Object(config.values().clone()),
        json!({ "0": "a", "1": "b" })
    );
    assert!(config.has_navigation_hook());
}

#[test]
fn notifier_forwards_url_verbatim() {
    let page = Page::boot(Some(script_with_id("7")));
    let channels = page.bridge.channels().unwrap();
    assert_eq!(channels.inbound(), "ruffle_page7");

    let notifier = Notifier::new(page.bus.clone(), channels.outbound());
    notifier.open_url_in_player("HTTPS://Example.com/a b.swf");
    page.bus.run_until_idle();

    assert_eq!(
        page.received_on("ruffle_content7"),
        vec![json!({
            "to": "ruffle_content7",
            "index": null,
            "data": { "type": "open_url_in_player", "url": "HTTPS://Example.com/a b.swf" }
        })]
    );
}

#[test]
fn installer_sees_merged_config() {
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshots);
    let player = LocalPlayer::with_installer(move |context, config| {
        sink.borrow_mut()
            .push((context.to_string(), config.get("quality").cloned(), config.has_navigation_hook()));
    });
    let page = Page::boot_with(Some(script_with_id("7")), player, "", Rc::new(PublicPathCell::new(MASKED)));

    page.send(json!({ "to": "ruffle_page7", "index": 1, "data": { "type": "load", "config": { "quality": "high" } } }));

    assert_eq!(
        *snapshots.borrow(),
        vec![("extension".to_string(), Some(json!("high")), true)]
    );
}

#[test]
fn player_navigation_is_posted_to_content_script() {
    let page = Page::boot(Some(script_with_id("7")));
    page.send(json!({ "to": "ruffle_page7", "index": 1, "data": { "type": "load", "config": {} } }));

    let config = page.player.config().unwrap();
    let url = Url::parse("https://example.com/games/movie.swf").unwrap();
    assert!(config.open_in_new_tab(&url));
    page.bus.run_until_idle();

    let messages = page.received_on("ruffle_content7");
    assert_eq!(
        messages.last().unwrap(),
        &json!({
            "to": "ruffle_content7",
            "index": null,
            "data": { "type": "open_url_in_player", "url": "https://example.com/games/movie.swf" }
        })
    );
}

#[test]
fn attribute_id_is_used_without_query_id() {
    let script = StaticScript::new("chrome-extension://abcdef/dist/ruffle.js").with_attribute("ruffle-id", "31");
    let page = Page::boot(Some(script));
    assert_eq!(page.bridge.id().unwrap().as_str(), "31");

    page.send(json!({ "to": "ruffle_page31", "index": 0, "data": { "type": "ping" } }));

    assert_eq!(page.received_on("ruffle_content31").len(), 1);
}

#[test]
fn no_id_means_no_listener() {
    let page = Page::boot(Some(StaticScript::new("chrome-extension://abcdef/dist/ruffle.js")));
    assert_eq!(page.bridge.state(), RouterState::Unattached);
    assert!(page.bridge.id().is_none());
    // Only the harness recorder is subscribed.
    assert_eq!(page.bus.listener_count(), 1);

    page.send(json!({ "to": "ruffle_page", "index": 1, "data": { "type": "ping" } }));
    page.send(json!({ "to": "ruffle_pagenull", "index": 2, "data": { "type": "ping" } }));

    assert!(page.received_on("ruffle_content").is_empty());
    assert!(page.received_on("ruffle_contentnull").is_empty());
}

#[test]
fn empty_query_id_keeps_bridge_inert() {
    let script = StaticScript::new("chrome-extension://abcdef/dist/ruffle.js?id=").with_attribute("ruffle-id", "31");
    let page = Page::boot(Some(script));

    assert_eq!(page.bridge.state(), RouterState::Unattached);
    assert_eq!(page.bus.listener_count(), 1);
}

#[test]
fn missing_script_element_keeps_bridge_inert() {
    let page = Page::boot(None);

    assert_eq!(page.bridge.state(), RouterState::Unattached);
    assert!(page.bridge.polyfill().is_none());
    assert_eq!(page.public_path.current(), MASKED);
}

#[test]
fn replies_are_not_routed_back() {
    let page = Page::boot(Some(script_with_id("7")));

    page.bus.post(json!({ "to": "ruffle_page7", "index": 1, "data": { "type": "ping" } }));
    // The request and its single reply.
    assert_eq!(page.bus.run_until_idle(), 2);
}
