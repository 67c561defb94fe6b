//! Suspend/resume snapshots of a toggle.
//!
//! Colors are stored as packed ARGB and icons as raw resource ids, both
//! reinterpreted as `i32`. Restoring runs the same default cascade as
//! attribute ingestion, so a partial snapshot still yields a complete style.

use crate::style::PartialStyle;
use crate::switch::Switch;
use switchyard_core::{Color, PersistenceStore, RenderSurface, ResourceId, ResourceResolver};

/// Checked state.
pub const KEY_CHECKED: &str = "switchyard.checked";
/// Aspect-ratio lock.
pub const KEY_FORCE_ASPECT_RATIO: &str = "switchyard.force_aspect_ratio";
/// Enabled flag.
pub const KEY_ENABLED: &str = "switchyard.enabled";
/// Track color when checked.
pub const KEY_BKG_CHECKED_COLOR: &str = "switchyard.bkg_checked_color";
/// Track color when unchecked.
pub const KEY_BKG_NOT_CHECKED_COLOR: &str = "switchyard.bkg_not_checked_color";
/// Handle color when checked.
pub const KEY_TOGGLE_CHECKED_COLOR: &str = "switchyard.toggle_checked_color";
/// Handle color when unchecked.
pub const KEY_TOGGLE_NOT_CHECKED_COLOR: &str = "switchyard.toggle_not_checked_color";
/// Handle icon when checked.
pub const KEY_TOGGLE_CHECKED_IMAGE: &str = "switchyard.toggle_checked_image";
/// Handle icon when unchecked.
pub const KEY_TOGGLE_NOT_CHECKED_IMAGE: &str = "switchyard.toggle_not_checked_image";

/// Every key written by [`Switch::save_state`].
pub const ALL_KEYS: [&str; 9] = [
    KEY_CHECKED,
    KEY_FORCE_ASPECT_RATIO,
    KEY_ENABLED,
    KEY_BKG_CHECKED_COLOR,
    KEY_BKG_NOT_CHECKED_COLOR,
    KEY_TOGGLE_CHECKED_COLOR,
    KEY_TOGGLE_NOT_CHECKED_COLOR,
    KEY_TOGGLE_CHECKED_IMAGE,
    KEY_TOGGLE_NOT_CHECKED_IMAGE,
];

/// Pack a color for an integer slot.
#[must_use]
pub fn pack_color(color: Color) -> i32 {
    i32::from_be_bytes(color.to_argb().to_be_bytes())
}

/// Inverse of [`pack_color`].
#[must_use]
pub fn unpack_color(packed: i32) -> Color {
    Color::from_argb(u32::from_be_bytes(packed.to_be_bytes()))
}

fn pack_resource(id: ResourceId) -> i32 {
    i32::from_be_bytes(id.raw().to_be_bytes())
}

fn unpack_resource(packed: i32) -> ResourceId {
    ResourceId::new(u32::from_be_bytes(packed.to_be_bytes()))
}

/// Read the explicit values present in a snapshot.
pub fn read_snapshot<P: PersistenceStore + ?Sized>(store: &P) -> PartialStyle {
    PartialStyle {
        checked: store.read_bool(KEY_CHECKED),
        force_aspect_ratio: store.read_bool(KEY_FORCE_ASPECT_RATIO),
        enabled: store.read_bool(KEY_ENABLED),
        bkg_checked_color: store.read_int(KEY_BKG_CHECKED_COLOR).map(unpack_color),
        bkg_not_checked_color: store.read_int(KEY_BKG_NOT_CHECKED_COLOR).map(unpack_color),
        toggle_checked_color: store.read_int(KEY_TOGGLE_CHECKED_COLOR).map(unpack_color),
        toggle_not_checked_color: store
            .read_int(KEY_TOGGLE_NOT_CHECKED_COLOR)
            .map(unpack_color),
        toggle_checked_image: store.read_int(KEY_TOGGLE_CHECKED_IMAGE).map(unpack_resource),
        toggle_not_checked_image: store
            .read_int(KEY_TOGGLE_NOT_CHECKED_IMAGE)
            .map(unpack_resource),
    }
}

impl<S: RenderSurface, R: ResourceResolver> Switch<S, R> {
    /// Write the checked state and the full style into `store`.
    pub fn save_state<P: PersistenceStore + ?Sized>(&self, store: &mut P) {
        let style = self.style();
        store.put_bool(KEY_CHECKED, self.is_checked());
        store.put_bool(KEY_FORCE_ASPECT_RATIO, style.force_aspect_ratio);
        store.put_bool(KEY_ENABLED, style.enabled);
        store.put_int(KEY_BKG_CHECKED_COLOR, pack_color(style.bkg_checked_color));
        store.put_int(KEY_BKG_NOT_CHECKED_COLOR, pack_color(style.bkg_not_checked_color));
        store.put_int(KEY_TOGGLE_CHECKED_COLOR, pack_color(style.toggle_checked_color));
        store.put_int(
            KEY_TOGGLE_NOT_CHECKED_COLOR,
            pack_color(style.toggle_not_checked_color),
        );
        store.put_int(KEY_TOGGLE_CHECKED_IMAGE, pack_resource(style.toggle_checked_image));
        store.put_int(
            KEY_TOGGLE_NOT_CHECKED_IMAGE,
            pack_resource(style.toggle_not_checked_image),
        );
        tracing::debug!(id = %self.id(), checked = self.is_checked(), "state saved");
    }

    /// Restore state from `store`, filling missing keys with the default
    /// cascade, then notify observers exactly once with the restored value.
    pub fn restore_state<P: PersistenceStore + ?Sized>(&mut self, store: &P) {
        let partial = read_snapshot(store);
        self.apply_style(&partial);
        tracing::debug!(id = %self.id(), checked = self.is_checked(), "state restored");
        self.notify_observers();
    }
}
