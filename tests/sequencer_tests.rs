//! Integration tests for Sequencer

mod common;
use common::*;

use dual_led_sequencer::{
    AnimationStep, Color, Demonstration, DutyDriver, DutyPair, LoopCount, PWM_PERIOD, Sequencer,
};

#[test]
fn new_turns_led_off() {
    let timeline = Timeline::new();
    let sequencer = Sequencer::silent(MockLed::new(&timeline), MockDelay::new(&timeline));

    assert_eq!(timeline.pairs(), vec![DutyPair::OFF]);
    assert_eq!(sequencer.current_duty(), DutyPair::OFF);
}

#[test]
fn apply_writes_then_waits() {
    let (mut sequencer, timeline) = sequencer();

    sequencer.apply(AnimationStep::new(DutyPair::new(255, 80), 250));

    assert_eq!(
        timeline.writes(),
        vec![Write {
            at_ms: 0,
            pair: DutyPair::new(255, 80)
        }]
    );
    assert_eq!(timeline.now_ms(), 250);
    assert_eq!(sequencer.current_duty(), DutyPair::new(255, 80));
}

#[test]
fn pause_waits_without_writing() {
    let (mut sequencer, timeline) = sequencer();

    sequencer.pause(300);

    assert!(timeline.writes().is_empty());
    assert_eq!(timeline.now_ms(), 300);
}

#[test]
fn set_color_writes_immediately() {
    let (mut sequencer, timeline) = sequencer();

    sequencer.set_color(Color::Yellow);

    assert_eq!(timeline.pairs(), vec![DutyPair::new(255, 255)]);
    assert_eq!(timeline.now_ms(), 0);
}

#[test]
fn play_holds_each_step_for_its_duration() {
    let (mut sequencer, timeline) = sequencer();

    let demo = Demonstration::<8>::builder()
        .color(Color::Red, 100)
        .unwrap()
        .pause(50)
        .unwrap()
        .color(Color::Green, 200)
        .unwrap()
        .build()
        .unwrap();

    sequencer.play(&demo);

    assert_eq!(
        timeline.holds(),
        vec![(DutyPair::new(255, 0), 150), (DutyPair::new(0, 255), 200)]
    );
    assert_eq!(timeline.now_ms(), 350);
}

#[test]
fn play_logs_title_and_milestones_in_order() {
    let (mut sequencer, _timeline) = sequencer();

    let demo = Demonstration::<8>::builder()
        .title("[Test 9] Logging")
        .milestone("  first")
        .unwrap()
        .color(Color::Red, 10)
        .unwrap()
        .milestone("  second")
        .unwrap()
        .build()
        .unwrap();

    sequencer.play(&demo);

    assert_eq!(
        sequencer.log(),
        "[Test 9] Logging\r\n  first\r\n  second\r\n"
    );
}

#[test]
fn play_skips_empty_title() {
    let (mut sequencer, _timeline) = sequencer();

    let demo = Demonstration::<8>::builder()
        .color(Color::Red, 10)
        .unwrap()
        .build()
        .unwrap();

    sequencer.play(&demo);

    assert!(sequencer.log().is_empty());
}

#[test]
fn milestones_are_logged_before_the_following_step_runs() {
    let (mut sequencer, timeline) = sequencer();

    let demo = Demonstration::<8>::builder()
        .color(Color::Red, 100)
        .unwrap()
        .milestone("  GREEN...")
        .unwrap()
        .color(Color::Green, 100)
        .unwrap()
        .loop_count(LoopCount::Finite(2))
        .build()
        .unwrap();

    sequencer.play(&demo);

    assert_eq!(sequencer.log(), "  GREEN...\r\n  GREEN...\r\n");
    assert_eq!(timeline.pairs().len(), 4);
    assert_eq!(timeline.now_ms(), 400);
}

#[test]
fn sequencer_drives_pwm_channels_through_duty_driver() {
    let timeline = Timeline::new();
    let driver = DutyDriver::new(MockPwm::new(PWM_PERIOD), MockPwm::new(PWM_PERIOD));
    let mut sequencer = Sequencer::silent(driver, MockDelay::new(&timeline));

    sequencer.set_color(Color::Orange);
    sequencer.set_duty(DutyPair::new(0, 180));

    let (driver, _delay, _log) = sequencer.into_parts();
    let (red, green) = driver.release();
    // Power-on OFF write comes first
    assert_eq!(red.duties(), &[0, 999, 0]);
    assert_eq!(green.duties(), &[0, 313, 705]);
}

#[test]
fn into_parts_returns_log_contents() {
    let (mut sequencer, _timeline) = sequencer();

    sequencer.log_line("hello");

    let (_led, _delay, log) = sequencer.into_parts();
    assert_eq!(log, "hello\r\n");
}
