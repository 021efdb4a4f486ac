//! Integration tests for the detector
//!
//! Tests text → Detector → DimensionalState across languages

use pretty_assertions::assert_eq;
use vmode::core::Detector;
use vmode::types::{Language, Vertical};
use vmode::{EMERGENCY_THRESHOLD, V_MODE_THRESHOLD};

#[test]
fn test_romantic_heart_is_not_an_emergency() {
    let state = Detector::new().detect("My heart races when I think of you", "en");
    assert!(!state.emergency_detected);
    assert!(state.suppressed_markers().all(|m| m.vertical == Vertical::Somatic));
}

#[test]
fn test_physiological_distress_is_an_emergency() {
    let state = Detector::new().detect("I can't breathe, my heart is pounding, I'm scared", "en");
    assert!(state.emergency_detected);
    assert!(state.vertical.somatic >= EMERGENCY_THRESHOLD);
    assert_eq!(state.primary_vertical, Vertical::Somatic);
}

#[test]
fn test_colloquial_heart_attack_is_not_an_emergency() {
    let state = Detector::new().detect("Haha you almost gave me a heart attack", "en");
    assert!(!state.emergency_detected);
}

#[test]
fn test_unrelated_framing_words_do_not_cancel_distress() {
    let detector = Detector::new();
    for text in [
        "I was laughing and now I can't breathe and my chest hurts",
        "I'm having a panic attack before my exam, I can't breathe",
        "He kissed me and then I started choking, I can't breathe",
    ] {
        let state = detector.detect(text, "en");
        assert!(state.emergency_detected, "{}", text);
        assert!(state.vertical.somatic >= EMERGENCY_THRESHOLD, "{}", text);
        assert_eq!(state.suppressed_markers().count(), 0, "{}", text);
    }
}

#[test]
fn test_anchored_exclusions_in_every_language() {
    let detector = Detector::new();
    assert!(!detector.detect("I can't breathe from laughing", "en").emergency_detected);
    assert!(!detector.detect("Ich kann nicht atmen vor Lachen", "de").emergency_detected);
    assert!(!detector.detect("Ik stik van het lachen", "nl").emergency_detected);

    // Same framing words, but far from the distress phrase
    let real = detector.detect("Ich habe vorhin gelacht, jetzt kann ich nicht atmen", "de");
    assert!(real.emergency_detected);
}

#[test]
fn test_v_mode_gap_is_preserved() {
    let detector = Detector::new();

    let short = detector.detect("What's the point of all this?", "en");
    assert!(short.vertical.existential > 0.2);
    assert!(short.vertical.existential <= V_MODE_THRESHOLD);
    assert!(!short.v_mode_triggered);

    let deep = detector.detect("What does it mean to live authentically?", "en");
    assert!(deep.v_mode_triggered);
    assert_eq!(deep.primary_vertical, Vertical::Existential);
}

#[test]
fn test_german_tables() {
    let detector = Detector::new();

    let emergency = detector.detect("Ich kann nicht atmen, mein Herz rast, ich habe Angst", "de");
    assert_eq!(emergency.language, Language::De);
    assert!(emergency.emergency_detected);

    let romantic = detector.detect("Mein Herz rast, wenn ich an dich denke", "de");
    assert!(!romantic.emergency_detected);
    assert_eq!(romantic.suppressed_markers().count(), 1);
}

#[test]
fn test_dutch_tables() {
    let detector = Detector::new();

    let emergency = detector.detect("Ik kan niet ademen en mijn hart bonkt", "NL");
    assert_eq!(emergency.language, Language::Nl);
    assert!(emergency.emergency_detected);

    let existential = detector.detect("Wat is de zin van het leven?", "nl_BE");
    assert_eq!(existential.primary_vertical, Vertical::Existential);
    assert!(existential.vertical.existential > 0.5);
}

#[test]
fn test_same_input_same_output() {
    let detector = Detector::new();
    let text = "Yesterday my sister and I argued about the meaning of it all.";
    let first = detector.detect(text, "en");
    for _ in 0..10 {
        assert_eq!(detector.detect(text, "en"), first);
    }
}

#[test]
fn test_detector_is_shareable_across_threads() {
    let detector = Detector::new();
    let expected = detector.detect("Is this all there is? Why am I even here?", "en");
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(detector.detect("Is this all there is? Why am I even here?", "en"), expected);
            });
        }
    });
}

#[test]
fn test_empty_and_unknown_language() {
    let state = Detector::new().detect("", "klingon");
    assert_eq!(state.language, Language::En);
    assert_eq!(state.integration, None);
    assert!(state.markers.is_empty());
}
