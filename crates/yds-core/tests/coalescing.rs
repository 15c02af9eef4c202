use yds_core::{aspects, Aspect, Component, InvalidationState, Invalidator, Observed};
use yds_testing::{RecordingScheduler, TestHost};

struct Chip {
    invalidator: Invalidator,
    label: Observed<Option<String>>,
    selected: Observed<bool>,
    rendered: Vec<(Option<String>, bool)>,
}

impl Chip {
    fn new(invalidator: Invalidator) -> Self {
        let mut chip = Self {
            label: Observed::new(None, aspects::LAYOUT_AND_DISPLAY, &invalidator),
            selected: Observed::new(false, aspects::DISPLAY, &invalidator),
            invalidator,
            rendered: Vec::new(),
        };
        chip.force_pass();
        chip
    }
}

impl Component for Chip {
    fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    fn layout(&mut self) {}

    fn display(&mut self) {
        self.rendered.push((self.label.get().clone(), self.selected.value()));
    }
}

#[test]
fn scheduler_sees_one_request_per_aspect_between_passes() {
    let scheduler = RecordingScheduler::new();
    let mut chip = Chip::new(scheduler.invalidator());

    for round in 0..5 {
        chip.label.set(Some(format!("round {round}")));
        chip.selected.set(round % 2 == 0);
    }
    assert_eq!(scheduler.count(Aspect::Layout), 1);
    assert_eq!(scheduler.count(Aspect::Display), 1);

    chip.settle();
    assert_eq!(
        chip.rendered.last(),
        Some(&(Some("round 4".to_string()), true))
    );

    chip.selected.set(false);
    assert_eq!(scheduler.count(Aspect::Display), 2);
}

#[test]
fn host_pump_settles_after_a_single_frame() {
    let host = TestHost::new();
    let chip = host.mount(Chip::new);

    chip.borrow_mut().label.set(Some("a".into()));
    chip.borrow_mut().label.set(Some("b".into()));
    chip.borrow_mut().selected.set(true);

    let (report, frames) = host.pump();
    assert_eq!(frames, 1);
    assert_eq!((report.layouts, report.displays), (1, 1));
    assert_eq!(host.frame_requests(), 1);
    assert_eq!(chip.borrow().rendered.len(), 2);
    assert_eq!(chip.borrow().invalidation_state(), InvalidationState::Clean);
}
