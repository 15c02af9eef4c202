use std::rc::Rc;

use yds_core::{Component, InvalidationState};
use yds_testing::TestHost;
use yds_ui::prelude::*;
use yds_ui::{HeadlessRenderer, PaintLayer};

#[test]
fn control_panel_edits_settle_in_one_frame() {
    let host = TestHost::new();
    let theme = Rc::new(Theme::standard());
    let button = host.mount(|invalidator| BoxButton::new(invalidator, theme.clone()));
    assert!(!host.needs_frame());

    {
        let mut button = button.borrow_mut();
        button.set_text(Some("Sign in"));
        button.set_type(BoxButtonType::Line);
        button.set_size(BoxButtonSize::Medium);
        button.set_warned(true);
        button.set_rounding(BoxButtonRounding::R8);
    }
    assert_eq!(host.frame_requests(), 1);

    let (report, frames) = host.pump();
    assert_eq!(frames, 1);
    assert_eq!((report.layouts, report.displays), (1, 1));

    let button = button.borrow();
    assert_eq!(button.invalidation_state(), InvalidationState::Clean);
    assert_eq!(button.layer().height, Some(40.0));
    assert_eq!(button.layer().corner_radius, 8.0);
    assert_eq!(
        button.layer().border_color,
        Some(theme.color(ColorToken::ButtonWarned))
    );
}

#[test]
fn press_and_release_repaint_without_layout() {
    let host = TestHost::new();
    let theme = Rc::new(Theme::standard());
    let button = host.mount(|invalidator| BoxButton::new(invalidator, theme.clone()));

    button.borrow_mut().set_pressed(true);
    let (report, _) = host.pump();
    assert_eq!((report.layouts, report.displays), (0, 1));
    assert_eq!(
        button.borrow().layer().background,
        Some(theme.color(ColorToken::ButtonPointPressed))
    );

    button.borrow_mut().set_pressed(false);
    host.pump();
    assert_eq!(
        button.borrow().layer().background,
        Some(theme.color(ColorToken::ButtonPoint))
    );
}

#[test]
fn several_widgets_share_one_frame() {
    let host = TestHost::new();
    let theme = Rc::new(Theme::standard());
    let field = host.mount(|invalidator| SuffixTextField::new(invalidator, theme.clone()));
    let badge = host.mount(|invalidator| Badge::new(invalidator, theme.clone()));
    let bar = host.mount(|invalidator| SearchBar::new(invalidator, theme.clone()));

    field.borrow_mut().set_positive(true);
    field.borrow_mut().set_suffix_text(Some("kg"));
    badge.borrow_mut().set_text(Some("Beta"));
    bar.borrow_mut().set_disabled(true);
    assert_eq!(host.frame_requests(), 1);

    let (report, frames) = host.pump();
    assert_eq!(frames, 1);
    assert_eq!(report.layouts, 3);
    assert_eq!(report.displays, 1);
    assert_eq!(field.borrow().resolved().tier, FieldTier::Positive);

    let mut renderer = HeadlessRenderer::new();
    renderer
        .paint(field.borrow().invalidator().id(), &*field.borrow())
        .paint(badge.borrow().invalidator().id(), &*badge.borrow());
    let scene = renderer.finish();
    assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["kg", "Beta"]);
    assert_eq!(scene.layers_for(PaintLayer::Behind).count(), 2);
}

#[test]
fn bottom_sheet_negotiation_then_display_frame() {
    let host = TestHost::new();
    let theme = Rc::new(Theme::standard());
    let sheet = host.mount(|invalidator| BottomSheet::new(invalidator, theme.clone()));

    {
        let mut sheet = sheet.borrow_mut();
        for _ in 0..20 {
            sheet.add_view(48.0_f32);
        }
        let preferred = sheet.negotiate_height(667.0);
        assert_eq!(preferred.height, 579.0);
        assert!(preferred.scroll_enabled);
    }

    let (report, _) = host.pump();
    assert_eq!(report.displays, 1);
    assert!(sheet.borrow().is_scrolling());
}

#[test]
fn dropped_widgets_are_skipped() {
    let host = TestHost::new();
    let theme = Rc::new(Theme::standard());
    let tooltip = host.mount(|invalidator| Tooltip::new(invalidator, theme.clone()));
    tooltip.borrow_mut().set_text("Copied");
    drop(tooltip);

    let (report, frames) = host.pump();
    assert_eq!(frames, 1);
    assert!(report.is_idle());
    assert_eq!(report.stale, 1);
    assert_eq!(host.runtime().live_components(), 0);
}
