//! Tests for the slide transition timer

use super::*;

#[test]
fn test_new_transition_is_inactive() {
    let mut slide = SlideTransition::default();
    assert_eq!(slide.direction(), SlideDirection::None);

    // Ticking an idle transition leaves it idle
    slide.tick(Instant::now() + DEFAULT_SLIDE_DURATION);
    assert_eq!(slide.direction(), SlideDirection::None);
}

#[test]
fn test_start_sets_direction() {
    let mut slide = SlideTransition::default();
    slide.start(SlideDirection::Right, Instant::now());
    assert_eq!(slide.direction(), SlideDirection::Right);
    assert_ne!(slide.direction(), SlideDirection::None);
}

#[test]
fn test_tick_before_duration_keeps_direction() {
    let start = Instant::now();
    let mut slide = SlideTransition::default();
    slide.start(SlideDirection::Left, start);

    slide.tick(start + Duration::from_millis(399));
    assert_eq!(slide.direction(), SlideDirection::Left);
}

#[test]
fn test_tick_after_duration_clears_direction() {
    let start = Instant::now();
    let mut slide = SlideTransition::default();
    slide.start(SlideDirection::Left, start);

    slide.tick(start + Duration::from_millis(400));
    assert_eq!(slide.direction(), SlideDirection::None);
}

#[test]
fn test_late_tick_still_clears() {
    let start = Instant::now();
    let mut slide = SlideTransition::default();
    slide.start(SlideDirection::Right, start);

    slide.tick(start + Duration::from_secs(10));
    assert_eq!(slide.direction(), SlideDirection::None);
}

#[test]
fn test_restart_extends_window() {
    let start = Instant::now();
    let mut slide = SlideTransition::default();
    slide.start(SlideDirection::Right, start);
    slide.start(SlideDirection::Left, start + Duration::from_millis(300));

    slide.tick(start + Duration::from_millis(500));
    assert_eq!(slide.direction(), SlideDirection::Left);

    slide.tick(start + Duration::from_millis(700));
    assert_eq!(slide.direction(), SlideDirection::None);
}

#[test]
fn test_tick_with_earlier_instant_does_not_panic() {
    let start = Instant::now() + Duration::from_secs(1);
    let mut slide = SlideTransition::default();
    slide.start(SlideDirection::Right, start);

    slide.tick(Instant::now());
    assert_ne!(slide.direction(), SlideDirection::None);
}

#[test]
fn test_custom_duration() {
    let start = Instant::now();
    let mut slide = SlideTransition::new(Duration::from_millis(50));
    slide.start(SlideDirection::Right, start);

    slide.tick(start + Duration::from_millis(60));
    assert_eq!(slide.direction(), SlideDirection::None);
}
