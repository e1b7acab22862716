// Ambient track and enable-audio affordance, driven through host fakes.

mod common;

use common::{FakeButton, FakeSink, SinkCall};
use portfolio_fx::OnceGate;
use portfolio_fx::ambient::AmbientAudio;
use portfolio_fx::media::{AudioSink, PlayOutcome};

const VOLUME: f64 = 0.06;

#[test]
fn rejected_autoplay_then_enable_hides_affordance_at_fixed_volume() {
    let button = FakeButton::default();
    let sink = FakeSink::scripted(&[PlayOutcome::Rejected, PlayOutcome::Started]);
    let ambient = AmbientAudio::new(sink, button.clone(), VOLUME, OnceGate::new());

    ambient.attempt();
    assert!(ambient.affordance_visible());
    assert_eq!(button.shown(), Some(true));

    ambient.enable();
    assert!(!ambient.affordance_visible());
    assert_eq!(button.shown(), Some(false));
    assert_eq!(ambient.sink().volume(), VOLUME);
}

#[test]
fn every_attempt_resets_volume_before_playing() {
    let sink = FakeSink::scripted(&[]);
    let ambient = AmbientAudio::new(sink, FakeButton::default(), VOLUME, OnceGate::new());
    ambient.attempt();
    ambient.enable();
    assert_eq!(
        ambient.sink().calls(),
        vec![
            SinkCall::Volume(VOLUME),
            SinkCall::Play,
            SinkCall::Volume(VOLUME),
            SinkCall::Play
        ]
    );
}

#[test]
fn enable_that_is_still_refused_keeps_affordance_and_grants_consent() {
    let consent = OnceGate::new();
    let sink = FakeSink::scripted(&[PlayOutcome::Rejected, PlayOutcome::Rejected]);
    let ambient = AmbientAudio::new(sink, FakeButton::default(), VOLUME, consent.clone());
    ambient.attempt();
    ambient.enable();
    assert!(ambient.affordance_visible());
    assert!(consent.is_fired());
}

#[test]
fn first_interaction_only_retries_when_paused() {
    let sink = FakeSink::scripted(&[]);
    sink.set_playing(true);
    let ambient = AmbientAudio::new(sink, FakeButton::default(), VOLUME, OnceGate::new());
    ambient.on_first_interaction();
    assert_eq!(ambient.sink().play_count(), 0);

    ambient.sink().set_playing(false);
    ambient.on_first_interaction();
    assert_eq!(ambient.sink().play_count(), 1);
    assert!(!ambient.affordance_visible());
}

#[test]
fn first_interaction_rejection_shows_affordance() {
    let sink = FakeSink::scripted(&[PlayOutcome::Rejected]);
    let ambient = AmbientAudio::new(sink, FakeButton::default(), VOLUME, OnceGate::new());
    ambient.on_first_interaction();
    assert!(ambient.affordance_visible());
}

#[test]
fn media_error_hides_affordance_for_good() {
    let button = FakeButton::default();
    let sink = FakeSink::scripted(&[PlayOutcome::Rejected, PlayOutcome::Rejected]);
    let ambient = AmbientAudio::new(sink, button.clone(), VOLUME, OnceGate::new());
    ambient.attempt();
    assert!(ambient.affordance_visible());

    ambient.on_media_error();
    assert_eq!(button.shown(), Some(false));
    ambient.attempt();
    assert!(!ambient.affordance_visible());
    assert_eq!(button.shown(), Some(false));
}

#[test]
fn missing_affordance_is_tolerated() {
    let sink = FakeSink::scripted(&[PlayOutcome::Rejected]);
    let ambient = AmbientAudio::new(sink, None::<FakeButton>, VOLUME, OnceGate::new());
    ambient.attempt();
    assert!(ambient.affordance_visible());
}
