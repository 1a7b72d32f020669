//! Widget Pool - Handle recycling for grid cells.
//!
//! Manages the lifecycle of widget handles:
//! - `active`: handles currently placed, in row-major placement order
//! - `free`: released handles, reused first-in first-out
//! - Template cloning when the free list is empty
//!
//! A handle is in exactly one of the two lists once created. Nothing is
//! ever destroyed: released widgets stay parked under the template's parent.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::HostError;
use crate::host::LayoutHost;
use crate::types::NodeId;

// =============================================================================
// Reconcile Plan
// =============================================================================

/// One step of a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolAction {
    /// Pop the tail of `active` and release it.
    Release,
    /// Acquire a handle and append it to `active`.
    Acquire,
}

/// What it takes to bring `active` to a target length.
///
/// Shrinking pops from the tail and growing appends at the tail, so every
/// index below `min(old, new)` keeps its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcilePlan {
    Unchanged,
    Release(usize),
    Acquire(usize),
}

impl ReconcilePlan {
    /// Plan for moving from `current` active handles to `target`.
    pub fn new(current: usize, target: usize) -> Self {
        if current > target {
            ReconcilePlan::Release(current - target)
        } else if current < target {
            ReconcilePlan::Acquire(target - current)
        } else {
            ReconcilePlan::Unchanged
        }
    }

    /// The plan as individual actions, in execution order.
    pub fn actions(self) -> impl Iterator<Item = PoolAction> {
        let (action, count) = match self {
            ReconcilePlan::Unchanged => (PoolAction::Acquire, 0),
            ReconcilePlan::Release(n) => (PoolAction::Release, n),
            ReconcilePlan::Acquire(n) => (PoolAction::Acquire, n),
        };
        std::iter::repeat_n(action, count)
    }
}

// =============================================================================
// Pool
// =============================================================================

/// Free-list of widgets cloned from one template.
#[derive(Debug, Clone)]
pub struct WidgetPool {
    template: NodeId,
    active: Vec<NodeId>,
    free: VecDeque<NodeId>,
    created: usize,
}

impl WidgetPool {
    pub fn new(template: NodeId) -> Self {
        Self {
            template,
            active: Vec::new(),
            free: VecDeque::new(),
            created: 0,
        }
    }

    pub fn template(&self) -> NodeId {
        self.template
    }

    /// Handles currently placed, in placement order.
    pub fn active(&self) -> &[NodeId] {
        &self.active
    }

    /// Handles parked for reuse, front is reused first.
    pub fn free(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.free.iter().copied()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Total handles ever instantiated by this pool.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Take the front of the free list, or clone the template.
    pub fn acquire<H: LayoutHost>(&mut self, host: &mut H) -> Result<NodeId, HostError> {
        if let Some(handle) = self.free.pop_front() {
            return Ok(handle);
        }
        let handle = host.instantiate(self.template)?;
        self.created += 1;
        Ok(handle)
    }

    /// Park `handle` under the template's parent and make it reusable.
    pub fn release<H: LayoutHost>(&mut self, host: &mut H, handle: NodeId) -> Result<(), HostError> {
        let holder = host.parent(self.template)?;
        host.set_parent(handle, holder)?;
        self.free.push_back(handle);
        Ok(())
    }

    /// Grow or shrink `active` to `target` handles, attaching new ones to
    /// `container`.
    pub fn reconcile<H: LayoutHost>(
        &mut self,
        host: &mut H,
        container: NodeId,
        target: usize,
    ) -> Result<ReconcilePlan, HostError> {
        let plan = ReconcilePlan::new(self.active.len(), target);
        for action in plan.actions() {
            match action {
                PoolAction::Release => {
                    if let Some(handle) = self.active.pop() {
                        if let Err(err) = self.release(host, handle) {
                            self.active.push(handle);
                            return Err(err);
                        }
                    }
                }
                PoolAction::Acquire => {
                    let handle = self.acquire(host)?;
                    if let Err(err) = host.set_parent(handle, Some(container)) {
                        self.free.push_front(handle);
                        return Err(err);
                    }
                    self.active.push(handle);
                }
            }
        }
        debug!(
            ?plan,
            active = self.active.len(),
            free = self.free.len(),
            created = self.created,
            "reconciled widget pool"
        );
        Ok(plan)
    }
}

// =============================================================================
// Tests
// =============================================================================
