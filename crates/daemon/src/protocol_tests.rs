// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn instance_summary_converts_elapsed_activity_time() {
    let instance = Instance::new(42, "TargetIDE", std::time::Instant::now());
    let summary = InstanceSummary::from(&instance);
    assert_eq!(summary.pid, 42);
    assert_eq!(summary.display_label, "TargetIDE");
    assert!(matches!(summary.status, Status::Unknown));
    // Freshly created, so barely any time has elapsed.
    assert!(summary.last_activity_ms_ago < 1_000);
}

#[test]
fn requests_round_trip_through_json() {
    let requests = vec![
        Request::Ping,
        Request::Hello { version: "1".to_string() },
        Request::Shutdown,
        Request::Status,
        Request::ListInstances,
        Request::PauseMonitoring,
        Request::ResumeMonitoring,
        Request::ResumeInterventions { pid: 7 },
        Request::NudgeNow { pid: 7 },
        Request::SessionLog { lines: 50 },
    ];
    for req in requests {
        let bytes = encode(&req).unwrap();
        let back: Request = decode(&bytes).unwrap();
        assert_eq!(format!("{:?}", req), format!("{:?}", back));
    }
}

#[tokio::test]
async fn write_then_read_message_round_trips_over_a_pipe() {
    let (mut client, mut server) = tokio::io::duplex(4096);

    let response = Response::Status {
        uptime_secs: 120,
        instances_active: 2,
        monitoring_paused: false,
    };
    let data = encode(&response).unwrap();
    write_message(&mut client, &data).await.unwrap();

    let received = read_message(&mut server).await.unwrap();
    let back: Response = decode(&received).unwrap();
    assert_eq!(format!("{:?}", response), format!("{:?}", back));
}

#[tokio::test]
async fn read_message_on_closed_connection_is_connection_closed() {
    let (client, mut server) = tokio::io::duplex(4096);
    drop(client);
    let err = read_message(&mut server).await.unwrap_err();
    assert!(matches!(err, ProtocolError::ConnectionClosed));
}

#[tokio::test]
async fn write_message_rejects_oversized_payload() {
    let oversized = vec![0u8; MAX_MESSAGE_SIZE + 1];
    let (mut client, _server) = tokio::io::duplex(4096);
    let err = write_message(&mut client, &oversized).await.unwrap_err();
    assert!(matches!(err, ProtocolError::MessageTooLarge { .. }));
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn pid_carrying_requests_round_trip(pid in any::<u32>()) {
            for req in [Request::ResumeInterventions { pid }, Request::NudgeNow { pid }] {
                let bytes = encode(&req).unwrap();
                let back: Request = decode(&bytes).unwrap();
                prop_assert_eq!(format!("{req:?}"), format!("{back:?}"));
            }
        }

        #[test]
        fn session_log_request_round_trips_for_any_line_count(lines in any::<usize>()) {
            let req = Request::SessionLog { lines };
            let bytes = encode(&req).unwrap();
            let back: Request = decode(&bytes).unwrap();
            prop_assert_eq!(format!("{req:?}"), format!("{back:?}"));
        }

        #[test]
        fn hello_version_string_round_trips(version in "[ -~]{0,64}") {
            let req = Request::Hello { version: version.clone() };
            let bytes = encode(&req).unwrap();
            let back: Request = decode(&bytes).unwrap();
            match back {
                Request::Hello { version: back_version } => prop_assert_eq!(version, back_version),
                other => prop_assert!(false, "unexpected decode: {other:?}"),
            }
        }
    }
}
