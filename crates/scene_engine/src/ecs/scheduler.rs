//! Layout reflow scheduling
//!
//! Layout groups subscribe here when they are initialized and signal through a
//! [`ReflowHandle`] whenever their inputs change. Signals are deduplicated; the
//! queue is only drained at the post-update point of the frame, by
//! [`World::post_update`](super::World::post_update).
//!
//! Draining swaps the live queue for an empty one before any reflow runs, so a
//! reflow that signals again lands in the next frame's queue instead of the
//! batch being iterated.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use super::Entity;
use crate::foundation::collections::UniqueQueue;

#[derive(Debug, Default)]
struct ReflowState {
    subscribed: HashSet<Entity>,
    queue: UniqueQueue<Entity>,
}

impl ReflowState {
    fn schedule(&mut self, entity: Entity) -> bool {
        self.subscribed.contains(&entity) && self.queue.push(entity)
    }
}

/// Collects layout groups that need a reflow this frame.
///
/// A layout group is identified by its owning entity, since an entity carries
/// at most one component of each type.
#[derive(Debug, Default)]
pub struct ReflowScheduler {
    state: Rc<RefCell<ReflowState>>,
}

impl ReflowScheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe the layout group owned by `entity` and hand back its signal handle
    pub fn subscribe(&self, entity: Entity) -> ReflowHandle {
        self.state.borrow_mut().subscribed.insert(entity);
        ReflowHandle {
            entity,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Unsubscribe and drop any pending reflow. Returns true if it was subscribed.
    pub fn unsubscribe(&self, entity: Entity) -> bool {
        let mut state = self.state.borrow_mut();
        state.queue.remove(&entity);
        state.subscribed.remove(&entity)
    }

    /// Queue a reflow for a subscribed layout group. Returns true if newly queued.
    pub fn schedule(&self, entity: Entity) -> bool {
        self.state.borrow_mut().schedule(entity)
    }

    /// Whether the layout group owned by `entity` is subscribed
    pub fn is_subscribed(&self, entity: Entity) -> bool {
        self.state.borrow().subscribed.contains(&entity)
    }

    /// Whether a reflow is pending for `entity`
    pub fn is_queued(&self, entity: Entity) -> bool {
        self.state.borrow().queue.contains(&entity)
    }

    /// Number of pending reflows
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Pending reflows in signal order
    pub fn queued(&self) -> Vec<Entity> {
        self.state.borrow().queue.iter().copied().collect()
    }

    /// Move the pending reflows out, leaving an empty queue for the next frame
    pub fn take_batch(&self) -> Vec<Entity> {
        self.state.borrow_mut().queue.take()
    }
}

/// Signal handle held by a subscribed layout group
///
/// The handle only keeps a weak link to the scheduler, so a component that
/// outlives its world simply stops scheduling.
#[derive(Clone)]
pub struct ReflowHandle {
    entity: Entity,
    state: Weak<RefCell<ReflowState>>,
}

impl ReflowHandle {
    /// Entity owning the subscribed layout group
    pub const fn entity(&self) -> Entity {
        self.entity
    }

    /// Queue a reflow. Returns true if newly queued.
    pub fn schedule(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| state.borrow_mut().schedule(self.entity))
    }

    /// Whether the subscription is still live
    pub fn is_subscribed(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| state.borrow().subscribed.contains(&self.entity))
    }
}

impl fmt::Debug for ReflowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflowHandle")
            .field("entity", &self.entity)
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}
