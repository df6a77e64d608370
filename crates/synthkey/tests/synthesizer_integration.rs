//! Integration tests: `InputSynthesizer` driving the recording mock backend.
//!
//! These cover the observable event streams for whole user actions: a typed
//! character with its modifiers, button presses in normalized space, and
//! wheel events with clamping and cursor defaults.

use std::sync::Arc;

use synthkey::application::synthesize_input::{InputSynthesizer, SynthError};
use synthkey::infrastructure::platform::mock::{InjectedEvent, MockPlatformInput};
use synthkey_core::keymap::windows_vk::{VK_CONTROL, VK_MENU, VK_SHIFT};
use synthkey_core::{MouseButton, MouseEventFlags, ScreenSize};

fn setup(mock: MockPlatformInput) -> (InputSynthesizer, Arc<MockPlatformInput>) {
    let platform = Arc::new(mock);
    let synth = InputSynthesizer::from_platform(Arc::clone(&platform));
    (synth, platform)
}

fn key(code: u8, key_up: bool) -> InjectedEvent {
    InjectedEvent::Key { code, key_up }
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

#[test]
fn test_typing_question_mark_wraps_slash_key_in_shift() {
    // Arrange – '?' is SHIFT + VK_OEM_2 on the US layout
    let (synth, platform) = setup(MockPlatformInput::default());

    // Act
    synth.key_down("?");
    synth.key_up("?");

    // Assert
    assert_eq!(
        platform.events(),
        vec![
            key(VK_SHIFT, false),
            key(0xBF, false),
            key(0xBF, true),
            key(VK_SHIFT, true),
        ]
    );
}

#[test]
fn test_named_keys_emit_single_transitions() {
    let (synth, platform) = setup(MockPlatformInput::default());

    synth.key_down("ctrl");
    synth.key_down("c");
    synth.key_up("c");
    synth.key_up("ctrl");

    assert_eq!(
        platform.events(),
        vec![
            key(VK_CONTROL, false),
            key(0x43, false),
            key(0x43, true),
            key(VK_CONTROL, true),
        ]
    );
}

#[test]
fn test_alt_key_name_maps_to_menu() {
    let (synth, platform) = setup(MockPlatformInput::default());
    synth.key_down("alt");
    assert_eq!(platform.events(), vec![key(VK_MENU, false)]);
}

#[test]
fn test_unmapped_and_unknown_keys_are_silent() {
    // Arrange
    let (synth, platform) = setup(MockPlatformInput::default());

    // Act
    for name in ["fn", "command", "yen", "definitely-not-a-key"] {
        synth.key_down(name);
        synth.key_up(name);
    }

    // Assert
    assert!(platform.events().is_empty());
}

#[test]
fn test_key_injection_failure_does_not_panic() {
    let mut mock = MockPlatformInput::default();
    mock.should_fail = true;
    let (synth, platform) = setup(mock);

    synth.key_down("A");
    synth.key_up("A");

    assert!(platform.events().is_empty());
}

// ── Mouse buttons ─────────────────────────────────────────────────────────────

#[test]
fn test_click_centre_of_1080p_screen() {
    // Arrange
    let (synth, platform) = setup(MockPlatformInput::default());

    // Act
    synth.click(960, 540, MouseButton::Left).unwrap();

    // Assert
    assert_eq!(
        platform.events(),
        vec![InjectedEvent::Mouse {
            flags: MouseEventFlags::LEFT_DOWN | MouseEventFlags::LEFT_UP,
            x: 32769,
            y: 32769,
            data: 0,
        }]
    );
}

#[test]
fn test_middle_button_down_and_up() {
    let (synth, platform) = setup(MockPlatformInput::default());

    synth.mouse_down(0, 0, MouseButton::Middle).unwrap();
    synth.mouse_up(0, 0, MouseButton::Middle).unwrap();

    let flags: Vec<_> = platform
        .events()
        .into_iter()
        .map(|e| match e {
            InjectedEvent::Mouse { flags, .. } => flags,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(flags, vec![MouseEventFlags::MIDDLE_DOWN, MouseEventFlags::MIDDLE_UP]);
}

#[test]
fn test_parsed_side_button_is_rejected() {
    // Arrange
    let (synth, platform) = setup(MockPlatformInput::default());
    let button: MouseButton = "X2".parse().unwrap();

    // Act
    let result = synth.mouse_down(10, 10, button);

    // Assert
    assert!(matches!(result, Err(SynthError::InvalidButton(_))));
    assert!(platform.events().is_empty());
}

#[test]
fn test_unparseable_button_converts_to_invalid_button() {
    let err = "thumb".parse::<MouseButton>().map_err(SynthError::from).unwrap_err();
    assert!(matches!(err, SynthError::InvalidButton(ref name) if name == "thumb"));
}

#[test]
fn test_mouse_injection_failure_is_suppressed() {
    let mut mock = MockPlatformInput::default();
    mock.should_fail = true;
    let (synth, _platform) = setup(mock);

    assert!(synth.click(100, 100, MouseButton::Right).is_ok());
}

// ── Move / scroll / queries ───────────────────────────────────────────────────

#[test]
fn test_move_to_updates_position() {
    let (synth, platform) = setup(MockPlatformInput::default());

    synth.move_to(640, 480).unwrap();

    assert_eq!(synth.position().unwrap(), (640, 480));
    assert_eq!(platform.events(), vec![InjectedEvent::CursorMoved { x: 640, y: 480 }]);
}

#[test]
fn test_move_to_failure_propagates() {
    let mut mock = MockPlatformInput::default();
    mock.should_fail = true;
    let (synth, _platform) = setup(mock);

    assert!(matches!(synth.move_to(1, 1), Err(SynthError::Platform(_))));
}

#[test]
fn test_scroll_without_coordinates_uses_cursor() {
    // Arrange – cursor at the screen centre
    let (synth, platform) = setup(MockPlatformInput::default().with_cursor(960, 540));

    // Act
    synth.scroll(5, None, None);

    // Assert
    assert_eq!(
        platform.events(),
        vec![InjectedEvent::Mouse {
            flags: MouseEventFlags::WHEEL,
            x: 32769,
            y: 32769,
            data: 5,
        }]
    );
}

#[test]
fn test_scroll_clamps_coordinates_past_the_far_edge() {
    // Arrange
    let (synth, platform) = setup(MockPlatformInput::new(ScreenSize::new(1920, 1080)));

    // Act
    synth.vscroll(-3, Some(5000), Some(-10));

    // Assert – x clamps to 1919, y to 0
    assert_eq!(
        platform.events(),
        vec![InjectedEvent::Mouse {
            flags: MouseEventFlags::WHEEL,
            x: 65502,
            y: 1,
            data: -3,
        }]
    );
}

#[test]
fn test_scroll_and_click_treat_injection_failure_alike() {
    // Arrange
    let mut mock = MockPlatformInput::default();
    mock.should_fail = true;
    let (synth, platform) = setup(mock);

    // Act – neither call surfaces the OS failure
    synth.scroll(3, Some(10), Some(10));
    let clicked = synth.click(10, 10, MouseButton::Left);

    // Assert
    assert!(clicked.is_ok());
    assert!(platform.events().is_empty());
}

#[test]
fn test_click_far_outside_screen_injects_nothing() {
    let (synth, platform) = setup(MockPlatformInput::default());

    assert!(synth.click(i32::MIN, 0, MouseButton::Left).is_ok());

    assert!(platform.events().is_empty());
}

#[test]
fn test_size_reports_mock_screen() {
    let (synth, _platform) = setup(MockPlatformInput::new(ScreenSize::new(2560, 1440)));
    assert_eq!(synth.size().unwrap(), ScreenSize::new(2560, 1440));
}
