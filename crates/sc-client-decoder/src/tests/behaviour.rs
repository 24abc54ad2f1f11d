//! Behaviour-driven tests for response decoding.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use sc_client_session::{EventRegistry, SessionEvents};
use sc_client_types::{
    ClientCommand, EventCallback, EventId, Response, ScAddr, ScEvent, ScEventParams, ScEventType,
};
use serde_json::{Value, json};

use super::context_for;
use crate::error::DecodeError;
use crate::{CommandContext, Decoded, ResponseProcessor};

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

type Deliveries = Arc<Mutex<Vec<(usize, [u64; 3])>>>;

#[derive(Default)]
struct TestWorld {
    events: SessionEvents,
    params: Vec<ScEventParams>,
    subscribed: Vec<ScEvent>,
    outcome: Option<Result<Decoded, DecodeError>>,
    deliveries: Deliveries,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_json(raw: &str) -> Value {
    serde_json::from_str(raw.trim_matches('"')).expect("step payload is JSON")
}

fn parse_flag(raw: &str) -> bool {
    raw.trim_matches('"').parse().expect("status is true or false")
}

fn decode(world: &mut TestWorld, command: ClientCommand, response: &Response) {
    let processor = ResponseProcessor::new(&world.events);
    let context = match command {
        ClientCommand::EventsDestroy => CommandContext::EventsDestroy(&world.subscribed),
        _ => context_for(command, &world.params),
    };
    let outcome = processor.run(context, response);
    if let Ok(Decoded::EventsCreate(created)) = &outcome {
        world.subscribed.clone_from(created);
    }
    world.outcome = Some(outcome);
}

fn decoded(world: &TestWorld) -> &Decoded {
    world
        .outcome
        .as_ref()
        .expect("no response decoded")
        .as_ref()
        .expect("expected success but got error")
}

fn item_count(decoded: &Decoded) -> usize {
    match decoded {
        Decoded::CreateElements(addrs) => addrs.len(),
        Decoded::CheckElements(types) => types.len(),
        Decoded::Keynodes(addrs) => addrs.as_ref().map_or(0, Vec::len),
        Decoded::GetLinksByContent(links) => links.as_ref().map_or(0, Vec::len),
        Decoded::EventsCreate(events) => events.len(),
        Decoded::SearchTemplate(results) => results.len(),
        Decoded::GenerateTemplate(result) => usize::from(result.is_some()),
        Decoded::GetLinkContent(_) => 1,
        Decoded::DeleteElements(_) | Decoded::SetLinkContents(_) | Decoded::EventsDestroy(_) => 0,
    }
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("a session with no subscriptions")]
fn given_empty_session(world: &mut TestWorld) {
    assert!(world.events.is_empty());
}

#[given("a subscription request for {event_type}")]
fn given_subscription_request(world: &mut TestWorld, event_type: String) {
    let event_type =
        ScEventType::from_str(event_type.trim_matches('"')).expect("known event type");
    let sink = Arc::clone(&world.deliveries);
    let index = world.params.len();
    let callback = EventCallback::new(move |subscribed, connector, other| {
        sink.lock().expect("deliveries lock").push((
            index,
            [subscribed.value(), connector.value(), other.value()],
        ));
    });
    world.params.push(ScEventParams::new(
        ScAddr::new(4711),
        event_type,
        callback,
    ));
}

#[given("an existing subscription {id}")]
fn given_registered_subscription(world: &mut TestWorld, id: u64) {
    let event = ScEvent::new(
        EventId::new(id),
        ScEventType::DeleteElement,
        EventCallback::new(|_, _, _| {}),
    );
    world.events.register(event.clone());
    world.subscribed.push(event);
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the server acknowledges with ids {ids}")]
fn when_acknowledged(world: &mut TestWorld, ids: String) {
    let response = Response::success(parse_json(&ids));
    decode(world, ClientCommand::EventsCreate, &response);
}

#[when("the server answers the unsubscribe with status {status}")]
fn when_unsubscribed(world: &mut TestWorld, status: String) {
    let response = Response::new(parse_flag(&status), None);
    decode(world, ClientCommand::EventsDestroy, &response);
}

#[when("the server notifies subscription {id} with {payload}")]
fn when_notified(world: &mut TestWorld, id: u64, payload: String) {
    let notification = Response::success(parse_json(&payload)).with_id(id).as_event();
    let delivered = world
        .events
        .notify(&notification)
        .expect("notification is well formed");
    assert!(delivered, "no subscription {id} to notify");
}

#[when("a {command} response with payload {payload} is decoded")]
fn when_payload_decoded(world: &mut TestWorld, command: String, payload: String) {
    let command = ClientCommand::from_str(command.trim_matches('"')).expect("known command");
    decode(world, command, &Response::success(parse_json(&payload)));
}

#[when("a failed {command} response is decoded")]
fn when_failure_decoded(world: &mut TestWorld, command: String) {
    let command = ClientCommand::from_str(command.trim_matches('"')).expect("known command");
    decode(world, command, &Response::failure());
}

#[when("a search response aliasing {alias} to index {index} with constructions {addrs} is decoded")]
fn when_search_decoded(world: &mut TestWorld, alias: String, index: usize, addrs: String) {
    let aliases = BTreeMap::from([(alias.trim_matches('"').to_owned(), index)]);
    let payload = json!({"aliases": aliases, "addrs": parse_json(&addrs)});
    decode(world, ClientCommand::SearchTemplate, &Response::success(payload));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("{count} item(s) are decoded")]
fn then_item_count(world: &mut TestWorld, count: usize) {
    assert_eq!(item_count(decoded(world)), count);
}

#[then("the decoded status is {status}")]
fn then_status(world: &mut TestWorld, status: String) {
    assert_eq!(decoded(world).status(), Some(parse_flag(&status)));
}

#[then("the result is absent")]
fn then_absent(world: &mut TestWorld) {
    let absent = matches!(
        decoded(world),
        Decoded::Keynodes(None) | Decoded::GetLinksByContent(None) | Decoded::GenerateTemplate(None)
    );
    assert!(absent, "expected an absent result, got {:?}", decoded(world));
}

#[then("subscription {id} is registered")]
fn then_registered(world: &mut TestWorld, id: u64) {
    assert!(world.events.contains(EventId::new(id)));
}

#[then("{count} subscription(s) remain registered")]
fn then_registry_size(world: &mut TestWorld, count: usize) {
    assert_eq!(world.events.len(), count);
}

#[then("decoding fails with {error_kind}")]
fn then_decoding_fails(world: &mut TestWorld, error_kind: String) {
    let err = world
        .outcome
        .as_ref()
        .expect("no response decoded")
        .as_ref()
        .expect_err("expected error but got success");
    match error_kind.trim_matches('"') {
        "missing_payload" => assert!(
            matches!(err, DecodeError::MissingPayload { .. }),
            "expected MissingPayload, got: {err}"
        ),
        "malformed_payload" => assert!(
            matches!(err, DecodeError::MalformedPayload { .. }),
            "expected MalformedPayload, got: {err}"
        ),
        "acknowledgement_mismatch" => assert!(
            matches!(err, DecodeError::AcknowledgementMismatch { .. }),
            "expected AcknowledgementMismatch, got: {err}"
        ),
        other => panic!(
            "unsupported error kind: '{other}' \
             (supported: missing_payload, malformed_payload, acknowledgement_mismatch)"
        ),
    }
}

#[then("callback {index} received {payload}")]
fn then_callback_received(world: &mut TestWorld, index: usize, payload: String) {
    let expected: [u64; 3] = serde_json::from_value(parse_json(&payload)).expect("three addresses");
    let deliveries = world.deliveries.lock().expect("deliveries lock");
    assert_eq!(deliveries.as_slice(), &[(index, expected)]);
}

#[then("every template result maps {alias} to the first address")]
fn then_alias_maps_first(world: &mut TestWorld, alias: String) {
    let Decoded::SearchTemplate(results) = decoded(world) else {
        panic!("expected template results, got {:?}", decoded(world));
    };
    let alias = alias.trim_matches('"');
    for result in results {
        assert_eq!(result.get(alias), result.get_index(0));
        assert!(Arc::ptr_eq(result.aliases(), results[0].aliases()));
    }
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/event_subscriptions.feature",
    name = "Acknowledged subscriptions are registered in submission order"
)]
fn acknowledged_subscriptions_registered(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/event_subscriptions.feature",
    name = "Short acknowledgement registers nothing"
)]
fn short_acknowledgement_registers_nothing(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/event_subscriptions.feature",
    name = "Acknowledgement without a payload is rejected"
)]
fn acknowledgement_without_payload_rejected(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/event_subscriptions.feature",
    name = "Failed unsubscribe still clears the subscriptions"
)]
fn failed_unsubscribe_clears_subscriptions(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/event_subscriptions.feature",
    name = "Notifications reach the acknowledged callback"
)]
fn notifications_reach_callback(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_dispatch.feature",
    name = "Created element addresses keep their order"
)]
fn created_addresses_keep_order(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_dispatch.feature",
    name = "Absent keynodes are passed through"
)]
fn absent_keynodes_passed_through(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_dispatch.feature",
    name = "Empty link search results are passed through"
)]
fn empty_link_search_passed_through(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_dispatch.feature",
    name = "Template search yields one result per construction"
)]
fn template_search_one_result_per_construction(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_dispatch.feature",
    name = "Failed template search is empty"
)]
fn failed_template_search_is_empty(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_dispatch.feature",
    name = "Failed template generation is absent"
)]
fn failed_template_generation_is_absent(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_dispatch.feature",
    name = "Deletion reports the server status"
)]
fn deletion_reports_status(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/response_dispatch.feature",
    name = "Malformed element lists are rejected"
)]
fn malformed_element_lists_rejected(world: TestWorld) {
    let _ = world;
}
