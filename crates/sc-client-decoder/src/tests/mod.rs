//! Crate-level integration and BDD tests.

use sc_client_session::SessionEvents;
use sc_client_types::{ClientCommand, EventCallback, Response, ScAddr, ScEventParams, ScEventType};
use serde_json::json;

use crate::{CommandContext, Decoded, ResponseProcessor};

mod behaviour;

/// Builds the context for `command`, borrowing `params` for subscriptions.
fn context_for(command: ClientCommand, params: &[ScEventParams]) -> CommandContext<'_> {
    CommandContext::stateless(command).unwrap_or(match command {
        ClientCommand::EventsDestroy => CommandContext::EventsDestroy(&[]),
        _ => CommandContext::EventsCreate(params),
    })
}

#[test]
fn every_command_has_a_decoder() {
    let events = SessionEvents::new();
    let processor = ResponseProcessor::new(&events);
    for command in ClientCommand::ALL {
        let context = context_for(command, &[]);
        let response = match command {
            ClientCommand::GetLinkContent => {
                Response::success(json!([{"type": "binary", "value": "AAEC"}]))
            }
            _ => Response::success(json!([])),
        };
        let outcome = processor.run(context, &response);
        let decoded = match command {
            ClientCommand::GenerateTemplate | ClientCommand::SearchTemplate => {
                let failed = processor
                    .run(context, &Response::failure())
                    .expect("failed template decodes");
                assert!(outcome.is_err(), "{command} needs aliases and addrs");
                failed
            }
            _ => outcome.expect("decode"),
        };
        assert_eq!(decoded.command(), command);
    }
}

#[test]
fn session_round_trip_subscribe_notify_unsubscribe() {
    let events = SessionEvents::new();
    let processor = ResponseProcessor::new(&events);
    let params = [ScEventParams::new(
        ScAddr::new(4711),
        ScEventType::AddOutgoingEdge,
        EventCallback::new(|_, _, _| {}),
    )];

    let Decoded::EventsCreate(created) = processor
        .run(
            CommandContext::EventsCreate(&params),
            &Response::success(json!([12])),
        )
        .expect("subscribe")
    else {
        panic!("expected subscriptions");
    };

    let notification = Response::success(json!([4711, 1, 2])).with_id(12).as_event();
    assert!(events.notify(&notification).expect("deliver"));

    let destroyed = processor
        .run(
            CommandContext::EventsDestroy(&created),
            &Response::success(json!(null)),
        )
        .expect("unsubscribe");
    assert_eq!(destroyed.status(), Some(true));
    assert!(!events.notify(&notification).expect("deliver"));
}
