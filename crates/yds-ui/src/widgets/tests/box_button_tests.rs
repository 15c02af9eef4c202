use super::*;
use yds_core::{Aspect, InvalidationState};
use yds_testing::RecordingScheduler;

fn theme() -> Rc<Theme> {
    Rc::new(Theme::standard())
}

fn snapshot(is_disabled: bool, is_warned: bool) -> ButtonSnapshot {
    ButtonSnapshot {
        is_disabled,
        is_warned,
    }
}

#[test]
fn construction_applies_defaults_and_ends_clean() {
    let theme = theme();
    let button = BoxButton::new(Invalidator::detached(), theme.clone());

    assert_eq!(button.invalidation_state(), InvalidationState::Clean);
    assert_eq!(button.button_type(), BoxButtonType::Filled);
    assert_eq!(button.size(), BoxButtonSize::Large);
    assert_eq!(button.rounding(), BoxButtonRounding::R4);
    assert!(button.is_enabled());
    assert_eq!(button.layer().height, Some(48.0));
    assert_eq!(button.layer().corner_radius, 4.0);
    assert_eq!(
        button.layer().background,
        Some(theme.color(ColorToken::ButtonPoint))
    );
    assert_eq!(button.title().color, theme.color(ColorToken::ButtonBright));
}

#[test]
fn disabled_wins_over_warned_for_every_type() {
    let theme = Theme::standard();
    for button_type in BoxButtonType::ALL {
        for pressed in [Interaction::IDLE, Interaction::PRESSED] {
            assert_eq!(
                resolve_button_style(button_type, snapshot(true, true), pressed, &theme),
                resolve_button_style(button_type, snapshot(true, false), pressed, &theme),
                "{button_type:?}"
            );
        }
        assert_eq!(
            button_rules(button_type).resolve(&snapshot(true, true)).tier,
            ButtonTier::Disabled
        );
    }
}

#[test]
fn pressing_swaps_variants_without_changing_tier() {
    let theme = Theme::standard();
    let idle = resolve_button_style(
        BoxButtonType::Tinted,
        snapshot(false, true),
        Interaction::IDLE,
        &theme,
    );
    let pressed = resolve_button_style(
        BoxButtonType::Tinted,
        snapshot(false, true),
        Interaction::PRESSED,
        &theme,
    );
    assert_eq!(idle.foreground, theme.color(ColorToken::ButtonWarned));
    assert_eq!(
        pressed.foreground,
        theme.color(ColorToken::ButtonWarnedPressed)
    );
    assert_eq!(idle.background, pressed.background);
    assert_eq!(idle.background, Some(theme.color(ColorToken::ButtonWarnedBG)));

    let line = resolve_button_style(
        BoxButtonType::Line,
        snapshot(false, false),
        Interaction::PRESSED,
        &theme,
    );
    assert_eq!(line.background, None);
    assert_eq!(
        line.border_color,
        Some(theme.color(ColorToken::ButtonPointPressed))
    );
    assert_eq!(line.border_width, 1.0);
}

#[test]
fn filled_buttons_have_no_border() {
    let theme = Theme::standard();
    for warned in [false, true] {
        let style = resolve_button_style(
            BoxButtonType::Filled,
            snapshot(false, warned),
            Interaction::PRESSED,
            &theme,
        );
        assert!(!style.has_border());
        assert_eq!(style.foreground, theme.color(ColorToken::ButtonBright));
    }
}

#[test]
fn resolution_is_repeatable() {
    let theme = Theme::standard();
    let first = resolve_button_style(
        BoxButtonType::Line,
        snapshot(false, true),
        Interaction::IDLE,
        &theme,
    );
    let second = resolve_button_style(
        BoxButtonType::Line,
        snapshot(false, true),
        Interaction::IDLE,
        &theme,
    );
    assert_eq!(first, second);
}

#[test]
fn left_icon_with_text_takes_precedence_over_right() {
    let both = IconSnapshot {
        has_left_icon: true,
        has_right_icon: true,
        has_text: true,
    };
    assert_eq!(icon_placement(both), IconPlacement::Leading);

    let right_only = IconSnapshot {
        has_left_icon: false,
        ..both
    };
    assert_eq!(icon_placement(right_only), IconPlacement::Trailing);

    let icon_only = IconSnapshot {
        has_text: false,
        ..both
    };
    assert_eq!(icon_placement(icon_only), IconPlacement::Plain);
}

#[test]
fn content_insets_follow_placement() {
    let leading = content_layout(IconPlacement::Leading, 16.0);
    assert_eq!(leading.direction, TextDirection::LeftToRight);
    assert_eq!(leading.image_insets, EdgeInsets::horizontal(-2.0, 2.0));
    assert_eq!(leading.title_insets, EdgeInsets::horizontal(2.0, -2.0));
    assert_eq!(leading.content_insets, EdgeInsets::horizontal(18.0, 18.0));

    let trailing = content_layout(IconPlacement::Trailing, 12.0);
    assert_eq!(trailing.direction, TextDirection::RightToLeft);
    assert_eq!(trailing.image_insets, EdgeInsets::horizontal(2.0, -2.0));
    assert_eq!(trailing.content_insets, EdgeInsets::horizontal(14.0, 14.0));

    let plain = content_layout(IconPlacement::Plain, 12.0);
    assert_eq!(plain.image_insets, EdgeInsets::ZERO);
    assert_eq!(plain.content_insets, EdgeInsets::horizontal(12.0, 12.0));
}

#[test]
fn attribute_writes_request_their_declared_aspects() {
    let scheduler = RecordingScheduler::new();
    let mut button = BoxButton::new(scheduler.invalidator(), theme());

    button.set_warned(true);
    assert_eq!(button.invalidation_state(), InvalidationState::DisplayPending);
    button.set_rounding(BoxButtonRounding::R8);
    assert_eq!(
        button.invalidation_state(),
        InvalidationState::LayoutAndDisplayPending
    );
    assert_eq!(scheduler.count(Aspect::Layout), 1);
    assert_eq!(scheduler.count(Aspect::Display), 1);

    button.settle();
    assert_eq!(button.layer().corner_radius, 8.0);
    assert_eq!(
        button.style().background,
        Some(Theme::standard().color(ColorToken::ButtonWarned))
    );
}

#[test]
fn pressing_only_requests_display() {
    let scheduler = RecordingScheduler::new();
    let mut button = BoxButton::new(scheduler.invalidator(), theme());

    button.set_pressed(true);
    assert_eq!(scheduler.count(Aspect::Layout), 0);
    assert_eq!(scheduler.count(Aspect::Display), 1);

    button.settle();
    assert_eq!(
        button.layer().background,
        Some(Theme::standard().color(ColorToken::ButtonPointPressed))
    );
    let stats = button.invalidator().stats();
    assert_eq!((stats.layouts, stats.displays), (1, 2));
}

#[test]
fn many_writes_collapse_into_one_pass_reflecting_final_values() {
    let mut button = BoxButton::new(Invalidator::detached(), theme());
    for label in ["one", "two", "three"] {
        button.set_text(Some(label));
        button.set_size(BoxButtonSize::Small);
        button.set_disabled(true);
        button.set_disabled(false);
    }
    button.settle();

    let stats = button.invalidator().stats();
    assert_eq!((stats.layouts, stats.displays), (2, 2));
    assert_eq!(button.title().text.as_deref(), Some("three"));
    assert_eq!(button.title().style, TextStyle::Button4);
    assert_eq!(button.image().size, 16.0);
    assert!(button.is_enabled());
}

#[test]
fn display_pass_picks_left_icon_and_sizes_it() {
    let mut button = BoxButton::new(Invalidator::detached(), theme());
    button.set_size(BoxButtonSize::ExtraLarge);
    button.set_text(Some("Next"));
    button.set_left_icon(Some(Icon::named("arrowLeft")));
    button.set_right_icon(Some(Icon::named("arrowRight")));
    button.settle();

    assert_eq!(button.image().icon, Some(Icon::named("arrowLeft")));
    assert_eq!(button.image().size, 24.0);
    assert_eq!(button.layer().height, Some(56.0));
    assert_eq!(
        *button.content_layout(),
        content_layout(IconPlacement::Leading, 16.0)
    );

    button.set_left_icon(None);
    button.settle();
    assert_eq!(button.image().icon, Some(Icon::named("arrowRight")));
    assert_eq!(
        button.content_layout().direction,
        TextDirection::RightToLeft
    );
}

#[test]
fn disabling_turns_off_touches_and_greys_out() {
    let theme = theme();
    let mut button = BoxButton::new(Invalidator::detached(), theme.clone());
    button.set_type(BoxButtonType::Line);
    button.set_warned(true);
    button.set_disabled(true);
    button.settle();

    assert!(!button.is_enabled());
    assert_eq!(button.title().color, theme.color(ColorToken::ButtonDisabled));
    assert_eq!(
        button.layer().border_color,
        Some(theme.color(ColorToken::ButtonDisabled))
    );
}
