//! Control registry
//!
//! Owns a set of controls on behalf of the host. The host's hit-testing maps
//! pointer activity to region ids, and [`ControlRegistry::dispatch`] routes
//! the resulting events to the bound control. This is the input boundary
//! where events for disabled controls are dropped.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use zephyr_animation::FrameClock;
use zephyr_core::{DrawList, InteractionEvent, Rect};

use crate::control::Control;

new_key_type! {
    pub struct ControlId;
}

/// Controls plus the hit regions that address them
#[derive(Default)]
pub struct ControlRegistry {
    controls: SlotMap<ControlId, Box<dyn Control>>,
    regions: FxHashMap<u64, ControlId>,
    clock: FrameClock,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<C: Control>(&mut self, control: C) -> ControlId {
        let kind = control.kind();
        let id = self.controls.insert(Box::new(control));
        tracing::trace!("Registered {:?} as {:?}", kind, id);
        id
    }

    /// Remove a control and every region bound to it
    pub fn remove(&mut self, id: ControlId) -> Option<Box<dyn Control>> {
        let control = self.controls.remove(id)?;
        let stale: SmallVec<[u64; 4]> = self
            .regions
            .iter()
            .filter(|(_, bound)| **bound == id)
            .map(|(region, _)| *region)
            .collect();
        for region in stale {
            self.regions.remove(&region);
        }
        Some(control)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Route events for hit region `region` to control `id`
    ///
    /// Returns `false` if `id` is not registered.
    pub fn bind_region(&mut self, region: u64, id: ControlId) -> bool {
        if !self.controls.contains_key(id) {
            return false;
        }
        self.regions.insert(region, id);
        true
    }

    pub fn unbind_region(&mut self, region: u64) -> Option<ControlId> {
        self.regions.remove(&region)
    }

    pub fn region_target(&self, region: u64) -> Option<ControlId> {
        self.regions.get(&region).copied()
    }

    /// Deliver an event arriving on a hit region
    ///
    /// Returns whether the event reached a control. Unknown regions and
    /// disabled controls swallow the event.
    pub fn dispatch(&mut self, region: u64, event: InteractionEvent) -> bool {
        match self.regions.get(&region).copied() {
            Some(id) => self.dispatch_to(id, event),
            None => {
                tracing::trace!("Dropped {:?} for unbound region {}", event, region);
                false
            }
        }
    }

    /// Deliver an event directly to a control
    pub fn dispatch_to(&mut self, id: ControlId, event: InteractionEvent) -> bool {
        let Some(control) = self.controls.get_mut(id) else {
            return false;
        };
        if !control.is_enabled() {
            tracing::trace!("Dropped {:?} for disabled {:?}", event, control.kind());
            return false;
        }
        control.handle_event(event);
        true
    }

    /// Advance every control to host frame time `now_ms`
    ///
    /// Returns whether another frame is needed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let dt = self.clock.advance(now_ms);
        self.tick(dt)
    }

    /// Advance every control by `dt_ms`
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let mut animating = false;
        for control in self.controls.values_mut() {
            animating |= control.tick(dt_ms);
        }
        animating
    }

    pub fn has_active_animations(&self) -> bool {
        self.controls.values().any(|control| control.is_animating())
    }

    pub fn draw(&self, id: ControlId, bounds: Rect) -> Option<DrawList> {
        self.controls.get(id).map(|control| control.draw(bounds))
    }

    pub fn control(&self, id: ControlId) -> Option<&dyn Control> {
        self.controls.get(id).map(|control| &**control)
    }

    /// Typed access to a registered control
    pub fn get<T: Control>(&self, id: ControlId) -> Option<&T> {
        self.controls.get(id)?.as_any().downcast_ref::<T>()
    }

    pub fn get_mut<T: Control>(&mut self, id: ControlId) -> Option<&mut T> {
        self.controls.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    pub fn ids(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.controls.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{Button, ButtonProps};
    use crate::switch::{Switch, SwitchProps};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use zephyr_core::ControlPhase;

    #[test]
    fn test_dispatch_by_region() {
        let mut registry = ControlRegistry::new();
        let id = registry.insert(Button::new(ButtonProps::new("Ok")));
        assert!(registry.bind_region(7, id));

        assert!(registry.dispatch(7, InteractionEvent::HoverEnter));
        assert!(!registry.dispatch(8, InteractionEvent::HoverEnter));

        let button = registry.get::<Button>(id).unwrap();
        assert_eq!(button.phase(), ControlPhase::Hovered);
        assert!(registry.get::<Switch>(id).is_none());
    }

    #[test]
    fn test_disabled_controls_swallow_events() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let mut registry = ControlRegistry::new();
        let id = registry.insert(
            Button::new(ButtonProps::new("Ok").enabled(false)).on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        registry.bind_region(1, id);

        assert!(!registry.dispatch(1, InteractionEvent::PressStart));
        assert!(!registry.dispatch(1, InteractionEvent::PressEnd));

        let interaction = registry.control(id).unwrap().interaction();
        assert!(!interaction.pressed);
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remove_unbinds_regions() {
        let mut registry = ControlRegistry::new();
        let id = registry.insert(Switch::new(SwitchProps::new(false)));
        registry.bind_region(1, id);
        registry.bind_region(2, id);

        assert!(registry.remove(id).is_some());
        assert!(registry.is_empty());
        assert_eq!(registry.region_target(1), None);
        assert_eq!(registry.region_target(2), None);
        assert!(!registry.bind_region(3, id));
    }

    #[test]
    fn test_frame_drives_animations() {
        let mut registry = ControlRegistry::new();
        let id = registry.insert(Switch::new(SwitchProps::new(false)));
        registry.get_mut::<Switch>(id).unwrap().set_checked(true);
        assert!(registry.has_active_animations());

        // First frame only syncs the clock
        assert!(registry.frame(1_000.0));
        let mut now = 1_000.0;
        while registry.frame(now) {
            now += 16.0;
        }

        assert!(!registry.has_active_animations());
        assert_eq!(registry.get::<Switch>(id).unwrap().rendered().position, 1.0);
    }
}
