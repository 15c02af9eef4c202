use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use yds_core::{Component, Interaction, Invalidator};
use yds_ui::{
    resolve_button_style, resolve_field_style, BoxButton, BoxButtonType, ButtonSnapshot,
    FieldSnapshot, Theme, SUFFIX_FIELD_RULES,
};

fn bench_button_resolution(c: &mut Criterion) {
    let theme = Theme::standard();
    let snapshots = [
        ButtonSnapshot::default(),
        ButtonSnapshot {
            is_disabled: false,
            is_warned: true,
        },
        ButtonSnapshot {
            is_disabled: true,
            is_warned: true,
        },
    ];
    c.bench_function("resolve_button_style", |b| {
        b.iter(|| {
            for button_type in BoxButtonType::ALL {
                for snapshot in snapshots {
                    for interaction in [Interaction::IDLE, Interaction::PRESSED] {
                        black_box(resolve_button_style(
                            button_type,
                            snapshot,
                            interaction,
                            &theme,
                        ));
                    }
                }
            }
        })
    });
}

fn bench_field_resolution(c: &mut Criterion) {
    let theme = Theme::standard();
    c.bench_function("resolve_field_style", |b| {
        b.iter(|| {
            for bits in 0u8..8 {
                let snapshot = FieldSnapshot {
                    is_disabled: bits & 1 != 0,
                    is_negative: bits & 2 != 0,
                    is_positive: bits & 4 != 0,
                };
                black_box(resolve_field_style(&SUFFIX_FIELD_RULES, snapshot, &theme));
            }
        })
    });
}

fn bench_coalesced_display_pass(c: &mut Criterion) {
    let theme = Rc::new(Theme::standard());
    let mut button = BoxButton::new(Invalidator::detached(), theme);
    c.bench_function("box_button_write_burst_then_settle", |b| {
        b.iter(|| {
            for pressed in [true, false, true, false] {
                button.set_pressed(pressed);
            }
            button.set_warned(true);
            button.set_warned(false);
            button.settle();
            black_box(button.style());
        })
    });
}

criterion_group!(
    benches,
    bench_button_resolution,
    bench_field_resolution,
    bench_coalesced_display_pass
);
criterion_main!(benches);
