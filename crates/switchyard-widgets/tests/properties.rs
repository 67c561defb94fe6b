//! Behavioral properties of the toggle, exercised through its public API.

use proptest::prelude::*;
use switchyard_core::{
    AttrKey, AttributeSet, Bundle, Color, Drawable, HandleRule, LayerSlot, RenderSurface,
    ResourceId, ANIMATION_DURATION,
};
use switchyard_test::{fixture, init_tracing, ObserverRecorder};
use switchyard_widgets::persist::{pack_color, KEY_BKG_CHECKED_COLOR, KEY_CHECKED};

fn observed(attributes: &AttributeSet) -> (fixture::TestSwitch, ObserverRecorder) {
    init_tracing();
    let recorder = ObserverRecorder::new();
    let mut switch = fixture::switch_with(attributes);
    switch.add_observer(recorder.handle());
    (switch, recorder)
}

// ===== Configuration =====

#[test]
fn only_checked_background_defaults_unchecked_background() {
    let green = Color::rgb(0.0, 1.0, 0.0);
    let attrs = AttributeSet::new().with_color(AttrKey::BkgCheckedColor, green);
    let (switch, _) = observed(&attrs);
    assert_eq!(switch.bkg_not_checked_color(), switch.bkg_checked_color());
    assert_eq!(switch.bkg_checked_color(), green);
}

#[test]
fn no_toggle_colors_resolve_to_accent_and_white() {
    let (switch, _) = observed(&AttributeSet::new());
    assert_eq!(switch.toggle_checked_color(), fixture::palette().accent);
    assert_eq!(switch.toggle_not_checked_color(), Color::WHITE);
}

#[test]
fn only_checked_icon_defaults_unchecked_icon() {
    let attrs = AttributeSet::new().with_resource(AttrKey::ToggleCheckedImage, fixture::ICON_ON);
    let (switch, _) = observed(&attrs);
    assert_eq!(switch.toggle_not_checked_image(), fixture::ICON_ON);
    assert_eq!(switch.toggle_checked_image(), switch.toggle_not_checked_image());
}

#[test]
fn ingestion_never_notifies() {
    let (mut switch, recorder) = observed(&fixture::full_attributes());
    assert!(switch.is_checked());
    switch.configure(&AttributeSet::new());
    assert!(!switch.is_checked());
    recorder.assert_silent();
}

#[test]
fn yaml_attributes_configure_the_toggle() {
    let attrs = AttributeSet::from_yaml(
        "checked: true\nswitchBkgCheckedColor: \"#336699\"\nswitchToggleNotCheckedImage: 101\n",
    )
    .unwrap();
    let (switch, recorder) = observed(&attrs);
    assert!(switch.is_checked());
    assert_eq!(switch.bkg_not_checked_color(), Color::from_hex("#336699").unwrap());
    assert_eq!(switch.toggle_checked_image(), fixture::ICON_OFF);
    recorder.assert_silent();
}

// ===== State machine =====

#[test]
fn double_toggle_restores_state_and_notifies_twice() {
    let (mut switch, recorder) = observed(&AttributeSet::new());
    let before = switch.is_checked();
    switch.toggle();
    switch.toggle();
    assert_eq!(switch.is_checked(), before);
    recorder.assert_values(&[!before, before]);
    assert!(recorder.calls().iter().all(|n| n.id == fixture::SWITCH_ID));
}

#[test]
fn removing_unregistered_observer_is_noop() {
    let (mut switch, recorder) = observed(&AttributeSet::new());
    let stranger = ObserverRecorder::new();
    switch.remove_observer(&stranger.handle());
    switch.toggle();
    assert_eq!(recorder.count(), 1);
    stranger.assert_silent();
}

#[test]
fn duplicate_registration_removed_once_per_call() {
    let (mut switch, recorder) = observed(&AttributeSet::new());
    switch.add_observer(recorder.handle());
    switch.toggle();
    assert_eq!(recorder.count(), 2);

    switch.remove_observer(&recorder.handle());
    recorder.reset();
    switch.toggle();
    assert_eq!(recorder.count(), 1);
}

// ===== Rendering =====

#[test]
fn handle_alignment_follows_checked() {
    let (mut switch, _) = observed(&AttributeSet::new());
    switch.set_checked(true);
    let rules = switch.surface().handle_rules();
    assert_eq!(rules.resolved(), Some(HandleRule::AlignTrailing));
    assert_eq!(rules.len(), 1);

    switch.set_checked(false);
    let rules = switch.surface().handle_rules();
    assert_eq!(rules.resolved(), Some(HandleRule::AlignLeading));
    assert_eq!(rules.len(), 1);
}

#[test]
fn toggle_crossfades_icon_between_states() {
    let (mut switch, _) = observed(&fixture::full_attributes());
    switch.toggle();

    let icon = switch
        .surface()
        .layer(LayerSlot::HandleIcon)
        .unwrap()
        .cross_fade()
        .unwrap();
    assert_eq!(icon.source().image().unwrap().source, fixture::ICON_ON);
    assert_eq!(icon.target().image().unwrap().source, fixture::ICON_OFF);
    assert_eq!(icon.duration(), Some(ANIMATION_DURATION));
}

#[test]
fn fade_from_icon_to_nothing_draws_nothing_when_done() {
    let attrs = AttributeSet::new()
        .with_resource(AttrKey::ToggleCheckedImage, fixture::ICON_ON)
        .with_resource(AttrKey::ToggleNotCheckedImage, ResourceId::NONE)
        .with_bool(AttrKey::Checked, true);
    let (mut switch, _) = observed(&attrs);
    switch.set_checked(false);

    let layer = switch.surface().layer(LayerSlot::HandleIcon).unwrap();
    assert_eq!(layer.end_frame(), &Drawable::Empty);
    assert!(layer.frames_at(ANIMATION_DURATION).is_empty());
    assert_eq!(layer.frames_at(std::time::Duration::ZERO).len(), 1);
}

#[test]
fn settled_surface_shows_only_end_frames() {
    let (mut switch, _) = observed(&AttributeSet::new());
    switch.toggle();
    switch.toggle();
    switch.surface_mut().settle();
    let track = switch.surface().layer(LayerSlot::TrackBackground).unwrap();
    assert!(!track.is_transitioning());
    assert_eq!(track.end_frame(), &Drawable::Fill(switch.bkg_not_checked_color()));
}

// ===== Persistence =====

#[test]
fn restore_partial_snapshot() {
    let c = Color::rgb(0.25, 0.5, 0.75);
    let snapshot = Bundle::new()
        .with_bool(KEY_CHECKED, true)
        .with_int(KEY_BKG_CHECKED_COLOR, pack_color(c));
    let (mut switch, recorder) = observed(&AttributeSet::new());

    switch.restore_state(&snapshot);
    assert!(switch.is_checked());
    assert_eq!(switch.bkg_not_checked_color(), Color::from_argb(c.to_argb()));
    assert_eq!(switch.bkg_checked_color(), switch.bkg_not_checked_color());
    recorder.assert_values(&[true]);
}

#[test]
fn save_then_restore_into_fresh_toggle() {
    let (original, _) = observed(&fixture::full_attributes());
    let mut bundle = Bundle::new();
    original.save_state(&mut bundle);

    let (mut restored, recorder) = observed(&AttributeSet::new());
    restored.restore_state(&Bundle::from_json(&bundle.to_json().unwrap()).unwrap());
    assert_eq!(restored.style(), original.style());
    assert_eq!(restored.is_checked(), original.is_checked());
    recorder.assert_values(&[true]);
}

// ===== Properties =====

proptest! {
    #[test]
    fn prop_set_checked_never_notifies(values in prop::collection::vec(any::<bool>(), 0..20)) {
        let (mut switch, recorder) = observed(&AttributeSet::new());
        for v in values {
            switch.set_checked(v);
            prop_assert_eq!(switch.is_checked(), v);
        }
        prop_assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn prop_exactly_one_alignment_rule(ops in prop::collection::vec(any::<Option<bool>>(), 1..20)) {
        let (mut switch, _) = observed(&AttributeSet::new());
        for op in ops {
            match op {
                Some(v) => switch.set_checked(v),
                None => switch.toggle(),
            }
            let expected = HandleRule::for_checked(switch.is_checked());
            prop_assert_eq!(switch.surface().handle_rules().resolved(), Some(expected));
        }
    }

    #[test]
    fn prop_toggle_notifies_each_new_value(n in 0usize..16) {
        let (mut switch, recorder) = observed(&AttributeSet::new());
        let mut expected = Vec::new();
        for _ in 0..n {
            switch.toggle();
            expected.push(switch.is_checked());
        }
        prop_assert_eq!(recorder.values(), expected);
    }

    #[test]
    fn prop_transitions_never_nest(n in 1usize..12) {
        let (mut switch, _) = observed(&AttributeSet::new());
        for _ in 0..n {
            switch.toggle();
        }
        let track = switch.surface().layer(LayerSlot::TrackBackground).unwrap();
        let fade = track.cross_fade().unwrap();
        prop_assert_eq!(fade.target(), &Drawable::Fill(switch.style().bkg_color(switch.is_checked())));
        prop_assert_eq!(fade.source(), &Drawable::Fill(switch.style().bkg_color(!switch.is_checked())));
    }
}
