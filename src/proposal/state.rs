use rand::Rng;

use crate::config::EvadeGeometry;

/// Uniform draws in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator into a [`UnitSource`].
pub struct RandUnits<R>(pub R);

impl<R: Rng> UnitSource for RandUnits<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProposalState {
    #[default]
    Pending,
    Accepted,
}

/// Offset of the "No" button from where the layout would put it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvadePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Identifies one shake. Only the newest ticket may end the shaking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShakeTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProposalModel {
    pub state: ProposalState,
    pub position: EvadePosition,
    pub shaking: bool,
    latest_ticket: ShakeTicket,
}

impl ProposalModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_accepted(&self) -> bool {
        self.state == ProposalState::Accepted
    }

    /// How many shakes this session has started.
    pub fn shake_round(&self) -> u64 {
        self.latest_ticket.0
    }

    pub fn accept(&self) -> Self {
        Self {
            state: ProposalState::Accepted,
            ..self.clone()
        }
    }

    /// Picks a fresh spot for the "No" button somewhere inside `bounds`.
    ///
    /// The offset is measured from the container's center and keeps the
    /// button's footprint from sliding off either edge. Returns the ticket
    /// of the shake this starts, or `None` if nothing moved (zero-size
    /// container, or the proposal was already accepted).
    pub fn evade<U: UnitSource + ?Sized>(
        &self,
        bounds: ContainerBounds,
        geometry: &EvadeGeometry,
        units: &mut U,
    ) -> (Self, Option<ShakeTicket>) {
        if self.is_accepted() || !bounds.is_usable() {
            return (self.clone(), None);
        }

        let fw = geometry.footprint_width;
        let fh = geometry.footprint_height;
        let x = units.next_unit() * (bounds.width - fw) - bounds.width / 2.0 + fw / 2.0;
        let y = units.next_unit() * (bounds.height - fh) - bounds.height / 2.0 + fh / 2.0;

        let ticket = ShakeTicket(self.latest_ticket.0 + 1);
        let next = Self {
            state: self.state,
            position: EvadePosition { x, y },
            shaking: true,
            latest_ticket: ticket,
        };
        (next, Some(ticket))
    }

    /// Ends the shake started by `ticket`, unless a newer one has begun.
    pub fn settle(&self, ticket: ShakeTicket) -> Self {
        if self.is_accepted() || ticket != self.latest_ticket {
            return self.clone();
        }
        Self {
            shaking: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays a fixed list of draws, cycling when it runs out.
    pub(crate) struct Sequence {
        draws: Vec<f64>,
        next: usize,
    }

    impl Sequence {
        pub(crate) fn new(draws: &[f64]) -> Self {
            Self { draws: draws.to_vec(), next: 0 }
        }
    }

    impl UnitSource for Sequence {
        fn next_unit(&mut self) -> f64 {
            let value = self.draws[self.next % self.draws.len()];
            self.next += 1;
            value
        }
    }

    fn geometry() -> EvadeGeometry {
        EvadeGeometry::default()
    }

    #[test]
    fn fresh_session_is_pending_and_centered() {
        let model = ProposalModel::new();
        assert_eq!(model.state, ProposalState::Pending);
        assert_eq!(model.position, EvadePosition::default());
        assert!(!model.shaking);
    }

    #[test]
    fn accept_is_terminal_and_idempotent() {
        let accepted = ProposalModel::new().accept();
        assert_eq!(accepted.state, ProposalState::Accepted);
        let again = accepted.accept();
        assert_eq!(again, accepted);
    }

    #[test]
    fn evade_in_400_by_300_uses_exact_formula() {
        let model = ProposalModel::new();
        let bounds = ContainerBounds::new(400.0, 300.0);

        let (low, _) = model.evade(bounds, &geometry(), &mut Sequence::new(&[0.0, 0.0]));
        assert_eq!(low.position, EvadePosition { x: -125.0, y: -100.0 });

        let (mid, _) = model.evade(bounds, &geometry(), &mut Sequence::new(&[0.5, 0.25]));
        assert_eq!(mid.position, EvadePosition { x: 0.0, y: -50.0 });
        assert!(mid.shaking);
    }

    #[test]
    fn evade_stays_in_range_over_many_trials() {
        let mut units = RandUnits(StdRng::seed_from_u64(0x10_7e));
        let mut model = ProposalModel::new();
        for (w, h) in [(400.0, 300.0), (151.0, 101.0), (1920.0, 600.0)] {
            let bounds = ContainerBounds::new(w, h);
            for _ in 0..1000 {
                let (next, ticket) = model.evade(bounds, &geometry(), &mut units);
                assert!(ticket.is_some());
                let EvadePosition { x, y } = next.position;
                assert!(x >= -w / 2.0 + 75.0 && x < w / 2.0 - 75.0, "x={} for w={}", x, w);
                assert!(y >= -h / 2.0 + 50.0 && y < h / 2.0 - 50.0, "y={} for h={}", y, h);
                model = next;
            }
        }
    }

    #[test]
    fn evade_replaces_rather_than_accumulates() {
        let bounds = ContainerBounds::new(400.0, 300.0);
        let mut units = Sequence::new(&[0.9, 0.9, 0.5, 0.5]);
        let (first, _) = ProposalModel::new().evade(bounds, &geometry(), &mut units);
        let (second, _) = first.evade(bounds, &geometry(), &mut units);
        assert_eq!(second.position, EvadePosition { x: 0.0, y: 0.0 });
    }

    #[test]
    fn degenerate_container_is_a_no_op() {
        let mut units = Sequence::new(&[0.3]);
        let (moved, _) = ProposalModel::new().evade(ContainerBounds::new(400.0, 300.0), &geometry(), &mut units);

        for bounds in [
            ContainerBounds::new(0.0, 300.0),
            ContainerBounds::new(400.0, 0.0),
            ContainerBounds::new(-10.0, -10.0),
            ContainerBounds::new(f64::NAN, 300.0),
        ] {
            let (next, ticket) = moved.evade(bounds, &geometry(), &mut units);
            assert_eq!(next, moved);
            assert!(ticket.is_none());
        }
    }

    #[test]
    fn evade_after_accept_changes_nothing() {
        let accepted = ProposalModel::new().accept();
        let (next, ticket) = accepted.evade(ContainerBounds::new(400.0, 300.0), &geometry(), &mut Sequence::new(&[0.7]));
        assert_eq!(next, accepted);
        assert!(ticket.is_none());
    }

    #[test]
    fn only_latest_ticket_settles() {
        let bounds = ContainerBounds::new(400.0, 300.0);
        let mut units = Sequence::new(&[0.2]);
        let (first, stale) = ProposalModel::new().evade(bounds, &geometry(), &mut units);
        let (second, fresh) = first.evade(bounds, &geometry(), &mut units);

        let still = second.settle(stale.unwrap());
        assert!(still.shaking);

        let done = still.settle(fresh.unwrap());
        assert!(!done.shaking);
        assert_eq!(done.position, second.position);
    }

    #[test]
    fn custom_footprint_changes_the_band() {
        let wide = EvadeGeometry { footprint_width: 300.0, footprint_height: 200.0, shake_ms: 500 };
        let (next, _) = ProposalModel::new().evade(ContainerBounds::new(400.0, 300.0), &wide, &mut Sequence::new(&[0.0, 0.0]));
        assert_eq!(next.position, EvadePosition { x: -50.0, y: -50.0 });
    }
}
