//! State machine scenario tests: full seek/reset cycles as the UI drives
//! them, including the mocked provider end of the channel.

use pythia::oracle::{Answer, Oracle, Phase};
use pythia::provider::{ORACLE_SILENT_MESSAGE, ProviderError, fetch_answer};

use crate::common;

fn answer(text: &str) -> Answer {
    Answer::new(text).expect("non-empty test answer")
}

#[test]
fn only_the_first_seek_while_thinking_has_any_effect() {
    let mut oracle = Oracle::new();

    let tx = oracle.begin_seek().expect("first seek");
    for _ in 0..5 {
        assert!(oracle.begin_seek().is_none());
    }

    tx.send(Ok(answer("One question at a time.")))
        .expect("receiver held");
    oracle.poll();
    assert_eq!(oracle.answer(), Some("One question at a time."));
}

#[test]
fn answer_and_error_never_coexist() {
    let mut oracle = Oracle::new();

    let tx = oracle.begin_seek().expect("seek");
    tx.send(Ok(answer("Yes."))).expect("receiver held");
    oracle.poll();
    assert!(oracle.answer().is_some());
    assert!(oracle.error().is_none());

    let tx = oracle.begin_seek().expect("seek from answer");
    tx.send(Err(ProviderError::EmptyAnswer))
        .expect("receiver held");
    oracle.poll();
    assert!(oracle.answer().is_none());
    assert_eq!(oracle.error(), Some(ORACLE_SILENT_MESSAGE));
}

#[test]
fn full_cycle_is_independent_of_the_previous_one() {
    let mut oracle = Oracle::new();

    let tx = oracle.begin_seek().expect("first seek");
    tx.send(Ok(answer("The river finds its way.")))
        .expect("receiver held");
    oracle.poll();
    assert_eq!(oracle.phase(), Phase::Answer);

    oracle.reset();
    assert_eq!(oracle.phase(), Phase::AwaitingInput);
    assert!(oracle.answer().is_none());
    assert!(oracle.error().is_none());

    let tx = oracle.begin_seek().expect("second seek");
    tx.send(Ok(answer("Stone wears to sand.")))
        .expect("receiver held");
    oracle.poll();
    assert_eq!(oracle.answer(), Some("Stone wears to sand."));
}

#[test]
fn error_cycle_recovers_through_reset() {
    let mut oracle = Oracle::new();

    let tx = oracle.begin_seek().expect("seek");
    tx.send(Err(ProviderError::EmptyAnswer))
        .expect("receiver held");
    oracle.poll();
    assert_eq!(oracle.phase(), Phase::Error);

    oracle.reset();
    assert_eq!(oracle.phase(), Phase::AwaitingInput);

    let tx = oracle.begin_seek().expect("seek after error");
    tx.send(Ok(answer("Now the path is clear.")))
        .expect("receiver held");
    oracle.poll();
    assert_eq!(oracle.answer(), Some("Now the path is clear."));
}

#[tokio::test]
async fn machine_and_provider_compose_end_to_end() {
    let server = common::start_oracle_mock().await;
    common::mount_answer(&server, "Patience reveals what haste conceals.").await;
    let config = common::mock_config(&server);

    let mut oracle = Oracle::new();
    let tx = oracle.begin_seek().expect("seek accepted");

    // The app shell spawns this; here we run it inline.
    let result = fetch_answer(&config).await;
    tx.send(result).expect("receiver held");

    oracle.poll();
    assert_eq!(oracle.phase(), Phase::Answer);
    assert_eq!(
        oracle.answer(),
        Some("Patience reveals what haste conceals.")
    );
}

#[tokio::test]
async fn machine_and_provider_compose_on_failure() {
    let server = common::start_oracle_mock().await;
    common::mount_api_error(&server, 500, "internal").await;
    let config = common::mock_config(&server);

    let mut oracle = Oracle::new();
    let tx = oracle.begin_seek().expect("seek accepted");

    let result = fetch_answer(&config).await;
    tx.send(result).expect("receiver held");

    oracle.poll();
    assert_eq!(oracle.phase(), Phase::Error);
    assert_eq!(oracle.error(), Some(ORACLE_SILENT_MESSAGE));
}
