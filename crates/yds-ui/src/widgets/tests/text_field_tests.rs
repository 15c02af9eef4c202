use super::*;
use yds_core::{Aspect, InvalidationState};
use yds_testing::RecordingScheduler;

fn theme() -> Rc<Theme> {
    Rc::new(Theme::standard())
}

fn snapshot(is_disabled: bool, is_negative: bool, is_positive: bool) -> FieldSnapshot {
    FieldSnapshot {
        is_disabled,
        is_negative,
        is_positive,
    }
}

#[test]
fn suffix_ladder_prefers_disabled_then_negative_then_positive() {
    let table = &SUFFIX_FIELD_RULES;
    assert_eq!(table.resolve(&snapshot(true, true, true)).tier, FieldTier::Disabled);
    assert_eq!(table.resolve(&snapshot(false, true, true)).tier, FieldTier::Negative);
    assert_eq!(table.resolve(&snapshot(false, false, true)).tier, FieldTier::Positive);
    assert_eq!(table.resolve(&snapshot(false, false, false)).tier, FieldTier::Normal);
    assert_eq!(table.matching_rule(&snapshot(false, false, false)), None);
}

#[test]
fn negative_and_positive_together_resolve_as_negative() {
    let theme = Theme::standard();
    assert_eq!(
        resolve_field_style(&SUFFIX_FIELD_RULES, snapshot(false, true, true), &theme),
        resolve_field_style(&SUFFIX_FIELD_RULES, snapshot(false, true, false), &theme)
    );
}

#[test]
fn only_validation_tiers_draw_a_border() {
    let theme = Theme::standard();
    let negative = resolve_field_style(&SUFFIX_FIELD_RULES, snapshot(false, true, false), &theme);
    assert_eq!(negative.style.border_width, 1.0);
    assert_eq!(
        negative.style.border_color,
        Some(theme.color(ColorToken::TextWarned))
    );

    let positive = resolve_field_style(&SUFFIX_FIELD_RULES, snapshot(false, false, true), &theme);
    assert_eq!(
        positive.style.border_color,
        Some(theme.color(ColorToken::TextPointed))
    );

    for quiet in [snapshot(true, true, false), snapshot(false, false, false)] {
        let style = resolve_field_style(&SUFFIX_FIELD_RULES, quiet, &theme);
        assert_eq!(style.style.border_width, 0.0);
        assert_eq!(style.style.border_color, None);
    }
}

#[test]
fn search_rules_ignore_validation_flags() {
    let theme = Theme::standard();
    let style = resolve_field_style(&SEARCH_FIELD_RULES, snapshot(false, true, true), &theme);
    assert_eq!(style.tier, FieldTier::Normal);
    assert_eq!(style.accessory, theme.color(ColorToken::TextSecondary));
}

#[test]
fn placeholder_dims_when_disabled() {
    let theme = Theme::standard();
    assert_eq!(
        placeholder_color(true, &theme),
        theme.color(ColorToken::TextDisabled)
    );
    assert_eq!(
        placeholder_color(false, &theme),
        theme.color(ColorToken::TextTertiary)
    );
}

#[test]
fn metrics_compute_text_insets_and_clear_button_offset() {
    let metrics = FieldMetrics::default();
    assert_eq!(metrics.text_insets(0.0, 0.0), EdgeInsets::horizontal(16.0, 16.0));
    assert_eq!(metrics.text_insets(16.0, 0.0), EdgeInsets::horizontal(40.0, 16.0));
    assert_eq!(metrics.clear_button_offset(), -10.0);
}

#[test]
fn suffix_field_state_is_display_only() {
    let scheduler = RecordingScheduler::new();
    let mut field = SuffixTextField::new(scheduler.invalidator(), theme());

    field.set_negative(true);
    field.set_positive(true);
    field.set_placeholder(Some("Amount"));
    assert_eq!(field.invalidation_state(), InvalidationState::DisplayPending);
    assert_eq!(scheduler.count(Aspect::Display), 1);
    assert_eq!(scheduler.count(Aspect::Layout), 0);

    field.settle();
    assert_eq!(field.resolved().tier, FieldTier::Negative);
    assert_eq!(field.field().placeholder.text.as_deref(), Some("Amount"));
    assert_eq!(
        field.field().placeholder.color,
        Theme::standard().color(ColorToken::TextTertiary)
    );
}

#[test]
fn suffix_text_is_applied_in_layout() {
    let scheduler = RecordingScheduler::new();
    let mut field = SuffixTextField::new(scheduler.invalidator(), theme());
    assert!(field.suffix().hidden);

    field.set_suffix_text(Some("@soongsil.ac.kr"));
    assert_eq!(field.invalidation_state(), InvalidationState::LayoutPending);
    field.settle();
    assert!(!field.suffix().hidden);
    assert_eq!(field.suffix().text.as_deref(), Some("@soongsil.ac.kr"));

    field.set_suffix_text(None);
    field.settle();
    assert!(field.suffix().hidden);
}

#[test]
fn disabled_suffix_field_greys_text_suffix_and_placeholder() {
    let theme = theme();
    let mut field = SuffixTextField::new(Invalidator::detached(), theme.clone());
    field.set_placeholder(Some("Email"));
    field.set_negative(true);
    field.set_disabled(true);
    field.settle();

    let disabled = theme.color(ColorToken::TextDisabled);
    assert!(!field.field().enabled);
    assert_eq!(field.field().text.color, disabled);
    assert_eq!(field.suffix().color, disabled);
    assert_eq!(field.field().placeholder.color, disabled);
    assert_eq!(field.field().layer.border_width, 0.0);
}

#[test]
fn search_field_applies_state_in_layout_and_placeholder_in_display() {
    let theme = theme();
    let mut field = SearchTextField::new(Invalidator::detached(), theme.clone());
    assert_eq!(field.search_icon().icon, Some(Icon::SEARCH_LINE));
    assert_eq!(field.field().text_insets, EdgeInsets::horizontal(40.0, 16.0));

    field.set_placeholder(Some("Search"));
    assert_eq!(field.invalidation_state(), InvalidationState::DisplayPending);
    field.set_disabled(true);
    assert_eq!(
        field.invalidation_state(),
        InvalidationState::LayoutAndDisplayPending
    );

    assert!(field.perform_layout_if_needed());
    assert!(!field.field().enabled);
    assert_eq!(field.search_icon().tint, theme.color(ColorToken::TextDisabled));
    assert_eq!(field.field().placeholder.text, None);

    assert!(field.perform_display_if_needed());
    assert_eq!(field.field().placeholder.text.as_deref(), Some("Search"));
    assert_eq!(
        field.field().placeholder.color,
        theme.color(ColorToken::TextDisabled)
    );
}

#[test]
fn typing_does_not_invalidate() {
    let mut field = SearchTextField::new(Invalidator::detached(), theme());
    field.set_text("yds");
    assert!(field.invalidation_state().is_clean());
    assert_eq!(field.field().text.text.as_deref(), Some("yds"));
}
