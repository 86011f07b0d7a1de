use log::{debug, info};

use crate::config::EvadeGeometry;
use crate::proposal::state::{ContainerBounds, ProposalModel, ShakeTicket, UnitSource};
use crate::proposal::timer::{Scheduler, ShakeTimer};

/// Owns the proposal model together with its random source and shake timer.
///
/// The settle callback handed to [`evade`] is what the timer runs once the
/// shake is over; the widget uses it to post a message back to itself.
///
/// [`evade`]: ProposalController::evade
pub struct ProposalController<S: Scheduler, U> {
    model: ProposalModel,
    geometry: EvadeGeometry,
    units: U,
    shake_timer: ShakeTimer<S>,
}

impl<S: Scheduler, U: UnitSource> ProposalController<S, U> {
    pub fn new(scheduler: S, units: U, geometry: EvadeGeometry) -> Self {
        Self {
            model: ProposalModel::new(),
            geometry,
            units,
            shake_timer: ShakeTimer::new(scheduler),
        }
    }

    pub fn model(&self) -> &ProposalModel {
        &self.model
    }

    pub fn shake_pending(&self) -> bool {
        self.shake_timer.is_armed()
    }

    /// Returns whether anything changed.
    pub fn accept(&mut self) -> bool {
        if self.model.is_accepted() {
            return false;
        }
        info!("Proposal accepted");
        self.shake_timer.cancel();
        self.model = self.model.accept();
        true
    }

    pub fn evade<F>(&mut self, bounds: ContainerBounds, on_settle: F) -> bool
    where
        F: FnOnce(ShakeTicket) + 'static,
    {
        if self.model.is_accepted() {
            debug!("Evade ignored, proposal already accepted");
            return false;
        }
        let (next, ticket) = self.model.evade(bounds, &self.geometry, &mut self.units);
        let Some(ticket) = ticket else {
            debug!("Evade ignored for {}x{} container", bounds.width, bounds.height);
            return false;
        };
        debug!("No button moved to ({:.1}, {:.1})", next.position.x, next.position.y);
        self.model = next;
        self.shake_timer.rearm(self.geometry.shake_ms, move || on_settle(ticket));
        true
    }

    pub fn settle(&mut self, ticket: ShakeTicket) -> bool {
        let next = self.model.settle(ticket);
        let changed = next != self.model;
        if changed {
            // The timer that delivered this ticket has fired
            self.shake_timer.cancel();
        }
        self.model = next;
        changed
    }
}
