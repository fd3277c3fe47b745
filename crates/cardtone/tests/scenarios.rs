use std::cell::Cell;
use std::rc::Rc;

use cardtone::{
    Card, ColorMode, ColorOverrides, ColorSource, ContentCard, ContentCardProps, ThemeSignal,
    ThemeStore, TopicCard, TopicCardProps,
};

fn redraw_counter<C: Card>(card: &C) -> (Rc<Cell<u32>>, cardtone::Subscription) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    let sub = card.watch(move || inner.set(inner.get() + 1));
    (count, sub)
}

#[test]
fn customized_outer_background_in_light() {
    let store = Rc::new(ThemeStore::new(ColorMode::Light));
    let card = ContentCard::mount(
        ContentCardProps::new("Scenario A").colors(ColorOverrides::new().bg_color("#f9f8f6")),
        &store,
    );

    let style = card.style();
    assert_eq!(style.outer_background.as_str(), Some("#f9f8f6"));
    assert_eq!(style.outer_background.source, ColorSource::LightOverride);
    assert_eq!(style.inner_background.as_str(), Some("#ffffff"));
}

#[test]
fn plain_content_card_in_dark() {
    let store = Rc::new(ThemeStore::new(ColorMode::Dark));
    let card = ContentCard::mount(ContentCardProps::new("Scenario B"), &store);

    let style = card.style();
    assert_eq!(style.outer_background.as_str(), Some("transparent"));
    assert!(style.inner_background.is_unset());
    assert!(style.text_color.is_unset());
    assert!(style.inner_css().is_empty());
    assert_eq!(style.outer_css().get("color"), None);
}

#[test]
fn dark_text_override_stays_in_dark() {
    let store = Rc::new(ThemeStore::new(ColorMode::Dark));
    let card = TopicCard::mount(
        TopicCardProps::new("Scenario C").colors(ColorOverrides::new().dark_text_color("#ffffff")),
        &store,
    );
    assert_eq!(card.style().text_color.as_str(), Some("#ffffff"));

    store.set(ColorMode::Light);
    let style = card.style();
    assert_eq!(style.text_color.as_str(), Some("#1c1e21"));
    assert_eq!(style.text_color.source, ColorSource::BuiltInDefault);
}

#[test]
fn one_recompute_per_toggle() {
    let store = Rc::new(ThemeStore::new(ColorMode::Light));
    let card = TopicCard::mount(TopicCardProps::new("Toggles"), &store);
    let (redraws, _watch) = redraw_counter(&card);

    store.toggle();
    assert_eq!(redraws.get(), 1);
    assert!(card.style().mode.is_dark());

    store.set(ColorMode::Dark);
    assert_eq!(redraws.get(), 1);

    store.toggle();
    assert_eq!(redraws.get(), 2);
    assert_eq!(card.recompute_count(), 3);
}

#[test]
fn released_card_sees_no_more_changes() {
    let store = Rc::new(ThemeStore::new(ColorMode::Light));
    let mut card = TopicCard::mount(TopicCardProps::new("Released"), &store);
    let (redraws, _watch) = redraw_counter(&card);

    card.unmount();
    card.unmount();
    store.toggle();
    store.toggle();
    store.toggle();

    assert_eq!(redraws.get(), 0);
    assert_eq!(card.mode(), ColorMode::Light);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn dropping_one_card_leaves_others_subscribed() {
    let store = Rc::new(ThemeStore::new(ColorMode::Light));
    let kept = ContentCard::mount(ContentCardProps::new("Kept"), &store);
    let dropped = ContentCard::mount(ContentCardProps::new("Dropped"), &store);
    assert_eq!(store.subscriber_count(), 2);

    drop(dropped);
    store.toggle();

    assert_eq!(store.subscriber_count(), 1);
    assert_eq!(kept.mode(), ColorMode::Dark);
}

#[test]
fn hover_then_theme_change() {
    let store = Rc::new(ThemeStore::new(ColorMode::Light));
    let card = ContentCard::mount(ContentCardProps::new("Hover"), &store);
    let (redraws, _watch) = redraw_counter(&card);

    assert!(card.pointer_enter());
    assert!(!card.pointer_enter());
    let hovered = card.cta();
    assert!(!hovered.current().is_hidden());
    assert_eq!(hovered.current().background, "#ffffff");

    store.toggle();
    assert_eq!(card.cta().current().background, "#1b1b1d");

    assert!(card.pointer_leave());
    assert!(!card.pointer_leave());
    assert!(card.cta().current().is_hidden());

    assert_eq!(redraws.get(), 3);
}

#[test]
fn cards_mount_through_a_shared_trait_object() {
    let store = Rc::new(ThemeStore::new(ColorMode::Light));
    let signal: Rc<dyn ThemeSignal> = store.clone();

    let topic = TopicCard::mount(TopicCardProps::new("Dyn"), &signal);
    let content = ContentCard::mount(ContentCardProps::new("Dyn"), &signal);

    store.set(ColorMode::Dark);
    assert!(topic.mode().is_dark());
    assert!(content.mode().is_dark());
}

#[test]
fn fixed_mode_renders_statically() {
    let signal = Rc::new(ColorMode::Dark);
    let card = TopicCard::mount(TopicCardProps::new("Static"), &signal);

    assert!(card.is_mounted());
    assert_eq!(card.style().text_color.as_str(), Some("#e3e3e3"));
    assert_eq!(card.recompute_count(), 1);
}

#[test]
fn card_follows_shared_store_mounted_through_temporary_handle() {
    let host = ThemeStore::new(ColorMode::Light);
    let card = TopicCard::mount(TopicCardProps::new("Shared"), &Rc::new(host.clone()));

    host.set(ColorMode::Dark);
    assert_eq!(card.mode(), ColorMode::Dark);
    assert_eq!(card.style().text_color.as_str(), Some("#e3e3e3"));
    assert_eq!(host.subscriber_count(), 1);

    drop(card);
    assert_eq!(host.subscriber_count(), 0);
}

#[test]
fn unmounting_a_hovered_card_hides_its_cta() {
    let store = Rc::new(ThemeStore::new(ColorMode::Dark));
    let mut card = ContentCard::mount(ContentCardProps::new("Leaving"), &store);
    assert!(card.pointer_enter());

    card.unmount();
    assert!(!card.pointer_enter());
    assert!(card.cta().current().is_hidden());
}
