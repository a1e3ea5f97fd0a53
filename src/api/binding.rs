use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{Clock, Point, SystemClock};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartAdapter, ChartConfig, POINT_UPDATE_EVENT, PointUpdate};

/// Lifecycle phase of a [`LifecycleBinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BindingState {
    Unattached,
    Attached,
    /// Terminal.
    Detached,
}

/// Result of delivering one host event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// The point was appended to the chart.
    Applied(Point),
    /// The event name is not one the binding handles.
    Ignored,
    /// The binding is not attached; the event was logged and discarded.
    Dropped,
}

enum Phase<R: Renderer> {
    Unattached,
    Attached(ChartAdapter<R>),
    Detached,
}

/// Glue between a host component lifecycle and a [`ChartAdapter`].
///
/// The host calls `on_attach` with its drawing surface, forwards named events
/// through `handle_event`, and calls `on_detach` on teardown. The adapter is
/// owned here and never outlives the attached phase.
pub struct LifecycleBinding<R: Renderer> {
    phase: Phase<R>,
    config: ChartConfig,
    clock: Option<Box<dyn Clock>>,
}

impl<R: Renderer> Default for LifecycleBinding<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> LifecycleBinding<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Unattached,
            config: ChartConfig::default(),
            clock: None,
        }
    }

    pub fn with_config(config: ChartConfig) -> ChartResult<Self> {
        Ok(Self {
            phase: Phase::Unattached,
            config: config.validate()?,
            clock: None,
        })
    }

    /// Uses `clock` instead of the system clock for the adapter created on attach.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    #[must_use]
    pub fn state(&self) -> BindingState {
        match self.phase {
            Phase::Unattached => BindingState::Unattached,
            Phase::Attached(_) => BindingState::Attached,
            Phase::Detached => BindingState::Detached,
        }
    }

    #[must_use]
    pub fn adapter(&self) -> Option<&ChartAdapter<R>> {
        match &self.phase {
            Phase::Attached(adapter) => Some(adapter),
            Phase::Unattached | Phase::Detached => None,
        }
    }

    pub fn adapter_mut(&mut self) -> Option<&mut ChartAdapter<R>> {
        match &mut self.phase {
            Phase::Attached(adapter) => Some(adapter),
            Phase::Unattached | Phase::Detached => None,
        }
    }

    /// Builds the chart adapter around `surface`.
    ///
    /// Only valid once, from the unattached phase.
    pub fn on_attach(&mut self, surface: R) -> ChartResult<()> {
        match self.phase {
            Phase::Unattached => {}
            Phase::Attached(_) => {
                return Err(ChartError::InvalidLifecycle(
                    "binding is already attached".to_owned(),
                ));
            }
            Phase::Detached => {
                return Err(ChartError::InvalidLifecycle(
                    "binding was detached and cannot be attached again".to_owned(),
                ));
            }
        }

        let clock = self
            .clock
            .take()
            .unwrap_or_else(|| Box::new(SystemClock));
        let adapter = ChartAdapter::from_parts(surface, self.config.clone(), clock);
        self.phase = Phase::Attached(adapter);
        debug!("chart binding attached");
        Ok(())
    }

    /// Delivers a named host event with a structured payload.
    ///
    /// `new-point` payloads that fail to decode are rejected before any chart
    /// state changes. Other event names are ignored.
    pub fn handle_event(
        &mut self,
        name: &str,
        payload: serde_json::Value,
    ) -> ChartResult<EventOutcome> {
        if name != POINT_UPDATE_EVENT {
            debug!(event = name, "ignoring unhandled chart event");
            return Ok(EventOutcome::Ignored);
        }
        if !matches!(self.phase, Phase::Attached(_)) {
            return Ok(self.drop_event(name));
        }

        let update = PointUpdate::from_json_value(payload).inspect_err(|err| {
            warn!(event = name, error = %err, "rejecting malformed chart event");
        })?;
        self.handle_point_update(&update)
    }

    /// Same as [`handle_event`](Self::handle_event) for hosts delivering raw JSON text.
    pub fn handle_event_json(&mut self, name: &str, payload: &str) -> ChartResult<EventOutcome> {
        let payload: serde_json::Value = serde_json::from_str(payload).map_err(|e| {
            ChartError::InvalidPayload(format!("event `{name}` payload is not valid json: {e}"))
        })?;
        self.handle_event(name, payload)
    }

    /// Forwards an already decoded point update to the adapter.
    pub fn handle_point_update(&mut self, update: &PointUpdate) -> ChartResult<EventOutcome> {
        if let Phase::Attached(adapter) = &mut self.phase {
            return adapter.apply(update).map(EventOutcome::Applied);
        }
        Ok(self.drop_event(POINT_UPDATE_EVENT))
    }

    /// Destroys the adapter and enters the terminal phase.
    pub fn on_detach(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Detached) {
            Phase::Attached(mut adapter) => {
                adapter.destroy();
                debug!("chart binding detached");
            }
            Phase::Unattached => debug!("chart binding detached before attach"),
            Phase::Detached => debug!("chart binding already detached"),
        }
    }

    fn drop_event(&self, name: &str) -> EventOutcome {
        warn!(
            event = name,
            state = ?self.state(),
            "dropping chart event outside attached phase"
        );
        EventOutcome::Dropped
    }
}
