use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mpuview_frame::{validate, Angles, ValidationError, FRAME_SIZE};
use mpuview_transport::Transport;
use tracing::{debug, error, info, warn};

use crate::error::{PollError, Result};
use crate::orientation::OrientationState;
use crate::render::Renderer;

/// Delay between the end of one tick and the start of the next.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Poller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Delay before each tick. Default: 100 ms.
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Where the poller is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    /// Waiting for the next tick.
    Idle,
    /// One read + validate cycle in progress.
    Polling,
}

/// Read-only view of a poller's [`PollerState`], usable from other threads.
#[derive(Debug, Clone)]
pub struct PollerStateWatch {
    polling: Arc<AtomicBool>,
}

impl PollerStateWatch {
    pub fn get(&self) -> PollerState {
        if self.polling.load(Ordering::SeqCst) {
            PollerState::Polling
        } else {
            PollerState::Idle
        }
    }
}

/// Result of one successful tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The report was accepted; this is the new orientation.
    Updated(OrientationState),
    /// The report was discarded; orientation is unchanged.
    Rejected(ValidationError),
}

/// Counters over the lifetime of a poller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollStats {
    pub accepted: u64,
    pub bad_length: u64,
    pub bad_signature: u64,
    pub bad_declared_size: u64,
    pub bad_checksum: u64,
}

impl PollStats {
    /// Total number of discarded reports.
    pub fn rejected(&self) -> u64 {
        self.bad_length + self.bad_signature + self.bad_declared_size + self.bad_checksum
    }

    fn record_rejection(&mut self, err: &ValidationError) {
        let counter = match err {
            ValidationError::BadLength { .. } => &mut self.bad_length,
            ValidationError::BadSignature { .. } => &mut self.bad_signature,
            ValidationError::BadDeclaredSize { .. } => &mut self.bad_declared_size,
            ValidationError::BadChecksum { .. } => &mut self.bad_checksum,
        };
        *counter = counter.saturating_add(1);
    }
}

/// Map wire angles onto render axes.
///
/// The board's axes don't line up with the display's, so the assignment is
/// rotated: render X takes the wire Y angle, render Y takes wire Z and render
/// Z takes wire X.
pub fn remap_axes(wire: Angles) -> OrientationState {
    OrientationState::new(wire.y, wire.z, wire.x)
}

/// Fixed-interval driver: read one report, validate it, publish it.
///
/// The poller owns the transport, the orientation state and the renderer.
/// Ticks never overlap, and the transport is closed exactly once when
/// [`Poller::run`] or [`Poller::close`] consumes the poller.
pub struct Poller<T, R> {
    transport: T,
    renderer: R,
    orientation: OrientationState,
    polling: Arc<AtomicBool>,
    stats: PollStats,
    config: PollerConfig,
    buf: [u8; FRAME_SIZE],
}

impl<T: Transport, R: Renderer> Poller<T, R> {
    /// Create a poller with default configuration.
    pub fn new(transport: T, renderer: R) -> Self {
        Self::with_config(transport, renderer, PollerConfig::default())
    }

    /// Create a poller with explicit configuration.
    pub fn with_config(transport: T, renderer: R, config: PollerConfig) -> Self {
        Self {
            transport,
            renderer,
            orientation: OrientationState::ZERO,
            polling: Arc::new(AtomicBool::new(false)),
            stats: PollStats::default(),
            config,
            buf: [0u8; FRAME_SIZE],
        }
    }

    /// Run one read + validate cycle.
    ///
    /// Validation failures are logged and returned as
    /// [`TickOutcome::Rejected`]; only a transport failure is an error.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.polling.store(true, Ordering::SeqCst);
        let outcome = self.poll_once();
        self.polling.store(false, Ordering::SeqCst);
        outcome
    }

    fn poll_once(&mut self) -> Result<TickOutcome> {
        let read = self.transport.read(&mut self.buf).map_err(PollError::Read)?;

        match validate(&self.buf[..read]) {
            Ok(wire) => {
                debug!(x = wire.x, y = wire.y, z = wire.z, "report accepted");
                self.orientation.replace(remap_axes(wire));
                self.stats.accepted = self.stats.accepted.saturating_add(1);
                self.renderer.redraw(&self.orientation);
                Ok(TickOutcome::Updated(self.orientation))
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "discarding report");
                self.stats.record_rejection(&err);
                Ok(TickOutcome::Rejected(err))
            }
        }
    }

    /// Tick every `interval` until `running` is cleared or the transport
    /// fails, then close the transport.
    ///
    /// The next tick is scheduled regardless of whether the previous report
    /// was accepted.
    pub fn run(mut self, running: &AtomicBool) -> Result<PollStats> {
        info!(
            endpoint = self.transport.endpoint(),
            interval_ms = self.config.interval.as_millis() as u64,
            "polling started"
        );

        while running.load(Ordering::SeqCst) {
            std::thread::sleep(self.config.interval);
            if !running.load(Ordering::SeqCst) {
                break;
            }

            if let Err(err) = self.tick() {
                error!(error = %err, "transport failure, stopping");
                let stats = self.stats;
                if let Err(close_err) = self.close() {
                    warn!(error = %close_err, "close after failure also failed");
                }
                log_stats(&stats);
                return Err(err);
            }
        }

        let stats = self.stats;
        self.close()?;
        log_stats(&stats);
        Ok(stats)
    }

    /// Release the transport.
    pub fn close(self) -> Result<()> {
        debug!(endpoint = self.transport.endpoint(), "closing transport");
        self.transport.close().map_err(PollError::Close)
    }

    /// Current orientation.
    pub fn orientation(&self) -> &OrientationState {
        &self.orientation
    }

    /// Current cycle state.
    pub fn state(&self) -> PollerState {
        self.state_watch().get()
    }

    /// Handle that follows the cycle state, including while a tick is running.
    pub fn state_watch(&self) -> PollerStateWatch {
        PollerStateWatch {
            polling: Arc::clone(&self.polling),
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> &PollStats {
        &self.stats
    }

    /// Borrow the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Poller configuration.
    pub fn config(&self) -> &PollerConfig {
        &self.config
    }
}

fn log_stats(stats: &PollStats) {
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected(),
        bad_length = stats.bad_length,
        bad_signature = stats.bad_signature,
        bad_declared_size = stats.bad_declared_size,
        bad_checksum = stats.bad_checksum,
        "polling stopped"
    );
}
