//! Ready-made collaborators for widget tests.

use switchyard_core::{
    AttrKey, AttributeSet, Color, Palette, RecordingSurface, ResourceId, ResourceTable, Size,
    WidgetId,
};
use switchyard_widgets::Switch;

/// Toggle type used throughout the tests.
pub type TestSwitch = Switch<RecordingSurface, ResourceTable>;

/// Identifier of [`switch`].
pub const SWITCH_ID: WidgetId = WidgetId::new(1);

/// Icon registered in [`resources`] for the checked state.
pub const ICON_ON: ResourceId = ResourceId::new(100);

/// Icon registered in [`resources`] for the unchecked state.
pub const ICON_OFF: ResourceId = ResourceId::new(101);

/// Size of every fixture icon.
pub const ICON_SIZE: Size = Size::new(16.0, 16.0);

/// A palette with distinctive accent and track colors.
pub fn palette() -> Palette {
    Palette::light()
        .with_accent(Color::from_argb(0xFFFF_8000))
        .with_track(Color::from_argb(0xFF1A_1A1A))
}

/// Resolver knowing [`ICON_ON`] and [`ICON_OFF`].
pub fn resources() -> ResourceTable {
    ResourceTable::new()
        .with_image(ICON_ON, ICON_SIZE)
        .with_image(ICON_OFF, ICON_SIZE)
}

/// Attributes with every key set.
pub fn full_attributes() -> AttributeSet {
    AttributeSet::new()
        .with_bool(AttrKey::Checked, true)
        .with_bool(AttrKey::ForceAspectRatio, false)
        .with_bool(AttrKey::Enabled, true)
        .with_color(AttrKey::BkgCheckedColor, Color::rgb(0.0, 0.6, 0.0))
        .with_color(AttrKey::BkgNotCheckedColor, Color::rgb(0.6, 0.0, 0.0))
        .with_color(AttrKey::ToggleCheckedColor, Color::WHITE)
        .with_color(AttrKey::ToggleNotCheckedColor, Color::BLACK)
        .with_resource(AttrKey::ToggleCheckedImage, ICON_ON)
        .with_resource(AttrKey::ToggleNotCheckedImage, ICON_OFF)
}

/// Unstyled toggle with [`SWITCH_ID`], [`palette`] and [`resources`],
/// laid out at the standard size.
pub fn switch() -> TestSwitch {
    switch_with(&AttributeSet::new())
}

/// Toggle configured from `attributes`, laid out at the standard size.
pub fn switch_with(attributes: &AttributeSet) -> TestSwitch {
    use switchyard_core::{Rect, Widget};

    let mut switch = Switch::from_attributes(
        SWITCH_ID,
        attributes,
        palette(),
        RecordingSurface::new(),
        resources(),
    );
    switch.layout(Rect::new(0.0, 0.0, 44.0, 20.0));
    switch
}
