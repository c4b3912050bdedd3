//! Layout group component
//!
//! Arranges the elements of its entity's children. Any change to a setting
//! signals the reflow scheduler; the actual arrangement happens once per frame
//! in `World::post_update`.

use crate::ecs::{ComponentData, ComponentSchema, ReflowHandle, SceneResult};
use crate::foundation::math::{Vec2, Vec4};
use crate::ui::layout::{Fitting, LayoutOptions, Orientation};

/// Layout group settings plus its reflow subscription
#[derive(Debug, Default)]
pub struct LayoutGroupComponent {
    options: LayoutOptions,
    handle: Option<ReflowHandle>,
}

impl LayoutGroupComponent {
    /// Create a detached group with the given settings
    pub const fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            handle: None,
        }
    }

    /// All settings at once
    pub const fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Main axis
    pub const fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    /// Whether children are placed in reverse order
    pub const fn reverse(&self) -> bool {
        self.options.reverse
    }

    /// Alignment of spare space, per axis
    pub const fn alignment(&self) -> Vec2 {
        self.options.alignment
    }

    /// Padding as (left, top, right, bottom)
    pub const fn padding(&self) -> Vec4 {
        self.options.padding
    }

    /// Spacing between children and lines
    pub const fn spacing(&self) -> Vec2 {
        self.options.spacing
    }

    /// Horizontal fitting
    pub const fn width_fitting(&self) -> Fitting {
        self.options.width_fitting
    }

    /// Vertical fitting
    pub const fn height_fitting(&self) -> Fitting {
        self.options.height_fitting
    }

    /// Whether children wrap onto new lines
    pub const fn wrap(&self) -> bool {
        self.options.wrap
    }

    /// Set the main axis
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.options.orientation = orientation;
        self.schedule_reflow();
    }

    /// Set reverse placement
    pub fn set_reverse(&mut self, reverse: bool) {
        self.options.reverse = reverse;
        self.schedule_reflow();
    }

    /// Set alignment
    pub fn set_alignment(&mut self, alignment: Vec2) {
        self.options.alignment = alignment;
        self.schedule_reflow();
    }

    /// Set padding
    pub fn set_padding(&mut self, padding: Vec4) {
        self.options.padding = padding;
        self.schedule_reflow();
    }

    /// Set spacing
    pub fn set_spacing(&mut self, spacing: Vec2) {
        self.options.spacing = spacing;
        self.schedule_reflow();
    }

    /// Set horizontal fitting
    pub fn set_width_fitting(&mut self, fitting: Fitting) {
        self.options.width_fitting = fitting;
        self.schedule_reflow();
    }

    /// Set vertical fitting
    pub fn set_height_fitting(&mut self, fitting: Fitting) {
        self.options.height_fitting = fitting;
        self.schedule_reflow();
    }

    /// Set wrapping
    pub fn set_wrap(&mut self, wrap: bool) {
        self.options.wrap = wrap;
        self.schedule_reflow();
    }

    /// Ask for a reflow at the end of this frame. Returns true if newly queued.
    pub fn schedule_reflow(&self) -> bool {
        self.handle.as_ref().is_some_and(ReflowHandle::schedule)
    }

    /// Whether the group is subscribed to a scheduler
    pub fn is_subscribed(&self) -> bool {
        self.handle.as_ref().is_some_and(ReflowHandle::is_subscribed)
    }

    pub(crate) fn attach(&mut self, handle: ReflowHandle) {
        self.handle = Some(handle);
    }

    pub(crate) fn on_remove(&mut self) {
        self.handle = None;
    }
}

impl ComponentSchema for LayoutGroupComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        let defaults = LayoutOptions::default();
        Ok(Self::new(LayoutOptions {
            orientation: data.choice("orientation")?.unwrap_or(defaults.orientation),
            reverse: data.bool("reverse")?.unwrap_or(defaults.reverse),
            alignment: data.vec2("alignment")?.unwrap_or(defaults.alignment),
            padding: data.vec4("padding")?.unwrap_or(defaults.padding),
            spacing: data.vec2("spacing")?.unwrap_or(defaults.spacing),
            width_fitting: data.choice("width_fitting")?.unwrap_or(defaults.width_fitting),
            height_fitting: data.choice("height_fitting")?.unwrap_or(defaults.height_fitting),
            wrap: data.bool("wrap")?.unwrap_or(defaults.wrap),
        }))
    }

    fn to_data(&self) -> ComponentData {
        let options = &self.options;
        ComponentData::new()
            .with("orientation", options.orientation)
            .with("reverse", options.reverse)
            .with("alignment", options.alignment)
            .with("padding", options.padding)
            .with("spacing", options.spacing)
            .with("width_fitting", options.width_fitting)
            .with("height_fitting", options.height_fitting)
            .with("wrap", options.wrap)
    }
}
