use super::*;

#[derive(Default)]
struct Flags {
    disabled: bool,
    warned: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tier {
    Disabled,
    Warned,
    Default,
}

fn is_disabled(flags: &Flags) -> bool {
    flags.disabled
}

fn is_warned(flags: &Flags) -> bool {
    flags.warned
}

static LADDER: RuleTable<Flags, Tier> = RuleTable::new(
    &[
        Rule {
            when: is_disabled,
            then: Tier::Disabled,
        },
        Rule {
            when: is_warned,
            then: Tier::Warned,
        },
    ],
    Tier::Default,
);

#[test]
fn first_matching_rule_wins() {
    let both = Flags {
        disabled: true,
        warned: true,
    };
    assert_eq!(*LADDER.resolve(&both), Tier::Disabled);
    assert_eq!(LADDER.matching_rule(&both), Some(0));
}

#[test]
fn fallback_covers_default_tier() {
    assert_eq!(*LADDER.resolve(&Flags::default()), Tier::Default);
    assert_eq!(LADDER.matching_rule(&Flags::default()), None);
    assert_eq!(LADDER.len(), 3);
}

#[test]
fn lower_rule_applies_when_higher_ones_do_not_match() {
    let warned = Flags {
        disabled: false,
        warned: true,
    };
    assert_eq!(*LADDER.resolve(&warned), Tier::Warned);
}

#[test]
fn pressable_picks_by_interaction() {
    let pair = Pressable::new(1u8, 2u8);
    assert_eq!(pair.pick(Interaction::IDLE), 1);
    assert_eq!(pair.pick(Interaction::PRESSED), 2);
    assert_eq!(Pressable::fixed(7u8).pick(Interaction::PRESSED), 7);
    assert_eq!(pair.map(|v| v * 10), Pressable::new(10u8, 20u8));
}
