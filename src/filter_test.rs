use super::*;

fn filter() -> ProjectFilter {
    ProjectFilter::new(
        vec![Some("all".into()), Some("web".into()), Some("mobile".into()), None],
        vec![Some("web".into()), Some("mobile".into()), Some("web".into()), None],
    )
}

fn state() -> PageState {
    PageState::new(Vec::new(), 1024.0)
}

fn display_of(effects: &[Effect], card: usize) -> Option<&str> {
    effects.iter().rev().find_map(|e| match e {
        Effect::SetStyle { target: Target::ProjectCard(i), property: "display", value } if *i == card => {
            Some(value.as_str())
        }
        _ => None,
    })
}

#[test]
fn web_filter_hides_other_categories() {
    let mut s = state();
    let effects = filter().click(&mut s, 1);
    assert_eq!(display_of(&effects, 0), Some("block"));
    assert_eq!(display_of(&effects, 1), Some("none"));
    assert_eq!(display_of(&effects, 2), Some("block"));
    assert_eq!(display_of(&effects, 3), Some("none"));
}

#[test]
fn all_filter_shows_every_card() {
    let mut s = state();
    let f = filter();
    f.click(&mut s, 1);
    let effects = f.click(&mut s, 0);
    for card in 0..4 {
        assert_eq!(display_of(&effects, card), Some("block"), "card {card}");
    }
}

#[test]
fn shown_cards_get_fade_animation() {
    let mut s = state();
    let effects = filter().click(&mut s, 2);
    assert!(effects.contains(&Effect::style(Target::ProjectCard(1), "animation", "fadeIn 0.5s ease forwards")));
    assert!(!effects.contains(&Effect::style(Target::ProjectCard(0), "animation", "fadeIn 0.5s ease forwards")));
}

#[test]
fn click_moves_active_class() {
    let mut s = state();
    let effects = filter().click(&mut s, 2);
    assert_eq!(s.active_filter, Some(2));
    let removed = effects
        .iter()
        .filter(|e| matches!(e, Effect::RemoveClass { target: Target::FilterButton(_), .. }))
        .count();
    assert_eq!(removed, 4);
    assert!(effects.contains(&Effect::add_class(Target::FilterButton(2), "active")));
}

#[test]
fn button_without_filter_acts_as_all() {
    let mut s = state();
    let f = filter();
    assert_eq!(f.filter_value(3), "all");
    let effects = f.click(&mut s, 3);
    assert_eq!(display_of(&effects, 1), Some("block"));
}

#[test]
fn no_cards_or_buttons_is_inert() {
    let mut s = state();
    let empty = ProjectFilter::new(vec![Some("web".into())], Vec::new());
    assert!(!empty.enabled());
    assert!(empty.click(&mut s, 0).is_empty());
    assert_eq!(s.active_filter, None);
}

#[test]
fn out_of_range_button_is_ignored() {
    let mut s = state();
    assert!(filter().click(&mut s, 10).is_empty());
}

#[test]
fn matches_rules() {
    assert!(ProjectFilter::matches("all", None));
    assert!(ProjectFilter::matches("web", Some("web")));
    assert!(!ProjectFilter::matches("web", Some("mobile")));
    assert!(!ProjectFilter::matches("web", None));
}
