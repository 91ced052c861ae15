// Sound-engine warm-up state, owned by the dispatcher.
//
// NotReady -> Loading -> Ready. A failed load returns to NotReady so the
// warm-up control can be used again; teardown returns to NotReady and
// invalidates every ticket issued so far.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadinessState {
    #[default]
    NotReady,
    Loading,
    Ready,
}

/// What the start control should offer for a readiness state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarmUpControl {
    /// Visible and clickable.
    Offer,
    /// Visible but disabled while a load is in flight.
    Busy,
    Hidden,
}

impl ReadinessState {
    pub fn warm_up_control(self) -> WarmUpControl {
        match self {
            ReadinessState::NotReady => WarmUpControl::Offer,
            ReadinessState::Loading => WarmUpControl::Busy,
            ReadinessState::Ready => WarmUpControl::Hidden,
        }
    }
}

/// Proof that a load was started in a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct Readiness {
    state: ReadinessState,
    generation: u64,
}

impl Readiness {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> ReadinessState {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == ReadinessState::Ready
    }

    /// Start warming up. Returns `None` if a load is in flight or already done.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.state != ReadinessState::NotReady {
            return None;
        }
        self.state = ReadinessState::Loading;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// True while `ticket` belongs to the load that is still in flight.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation && self.state == ReadinessState::Loading
    }

    /// Returns false for a stale ticket (session torn down since it was issued).
    pub fn on_load_complete(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = ReadinessState::Ready;
        true
    }

    pub fn on_load_failed(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = ReadinessState::NotReady;
        true
    }

    pub fn teardown(&mut self) {
        self.state = ReadinessState::NotReady;
        self.generation = self.generation.wrapping_add(1);
    }
}
