//! PollDriver: identify the peripheral once, then poll/decode/render forever.

use embedded_hal_async::delay::DelayNs;
use wii_ext_proto::{decode_classic, decode_nunchuk, identify, ControllerId, NunchukState};

use crate::render;
use crate::sink::{DisplayError, PanelDisplay, TextSink};
use crate::transport::{ExtTransport, TransportError};

/// Fatal startup conditions; the driver never enters its loop after one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// The bus session failed during identification.
    Transport(TransportError),
    /// The peripheral did not answer the identification read. Distinct from
    /// an unknown identity, which is a valid session.
    IdentUnavailable,
}

/// What a single poll cycle did, for observability and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// A report was available, decoded (or hex-dumped) and rendered.
    Rendered,
    /// The peripheral had no report ready; one notification was emitted.
    NoData,
}

/// The poll loop: owns the bus session, the sinks and the session identity.
///
/// The identity is resolved exactly once, in [`identify`](Self::identify);
/// every subsequent cycle dispatches on that fixed tag. Per cycle the driver
/// performs exactly one transport read and one request - the request for the
/// *next* report goes out right after the current read, so the peripheral
/// acquires its next sample during the cadence sleep (pipelining of depth
/// one, never deeper).
///
/// Sink failures never propagate out of a cycle: a broken render target must
/// not stall the loop.
pub struct PollDriver<T, C, D> {
    transport: T,
    console: C,
    panel: Option<D>,
    id: ControllerId,
    cadence_ms: u32,
}

impl<T, C, D> PollDriver<T, C, D>
where
    T: ExtTransport,
    C: TextSink,
    D: PanelDisplay,
{
    /// Open the session: read the identification registers, resolve the
    /// controller class and prime the report pipeline.
    ///
    /// # Errors
    ///
    /// [`StartupError::IdentUnavailable`] if the peripheral did not answer,
    /// [`StartupError::Transport`] on a bus fault. Both are fatal; there is
    /// no automatic retry.
    pub async fn identify(
        mut transport: T,
        console: C,
        panel: Option<D>,
        cadence_ms: u32,
    ) -> Result<Self, StartupError> {
        let ident = transport
            .read_ident()
            .await
            .map_err(StartupError::Transport)?
            .ok_or(StartupError::IdentUnavailable)?;
        let id = identify(&ident);

        // Prime the pipeline so the first cycle has a report to read.
        transport
            .request_report()
            .await
            .map_err(StartupError::Transport)?;

        Ok(Self {
            transport,
            console,
            panel,
            id,
            cadence_ms,
        })
    }

    /// The identity resolved at session start.
    #[must_use]
    pub fn controller(&self) -> ControllerId {
        self.id
    }

    /// Whether the panel sink is attached (a missing display is a disabled
    /// feature, not a fault).
    #[must_use]
    pub fn has_panel(&self) -> bool {
        self.panel.is_some()
    }

    /// Run one poll cycle: read the pending report, request the next one,
    /// then decode and render.
    ///
    /// # Errors
    ///
    /// Only transport faults surface; sink errors are swallowed after the
    /// fact (the sinks are render surfaces, not collaborators that may veto
    /// a cycle).
    pub async fn poll_cycle(&mut self) -> Result<CycleOutcome, TransportError> {
        let report = self.transport.read_report().await?;
        self.transport.request_report().await?;

        let Some(frame) = report else {
            let _ = self.console.write_block(render::NO_DATA);
            return Ok(CycleOutcome::NoData);
        };

        match self.id {
            ControllerId::Nunchuk => {
                let state = decode_nunchuk(&frame);
                let _ = self.console.write_block(&render::format_nunchuk(&state));
                if let Some(panel) = self.panel.as_mut() {
                    let _ = draw_panel(panel, &state);
                }
            }
            ControllerId::Classic => {
                // No panel rendering is defined for this schema.
                let state = decode_classic(&frame);
                let _ = self.console.write_block(&render::format_classic(&state));
            }
            ControllerId::Unknown(_) => {
                let _ = self.console.write_block(&render::format_raw(&frame));
            }
        }

        Ok(CycleOutcome::Rendered)
    }

    /// Run the poll loop forever on the configured cadence.
    ///
    /// Cycle-level transport faults are logged and do not stop the loop;
    /// the next cycle retries from the read.
    pub async fn run(&mut self, mut delay: impl DelayNs) -> ! {
        loop {
            if let Err(_e) = self.poll_cycle().await {
                #[cfg(feature = "defmt")]
                defmt::warn!("poll cycle failed: {}", _e);
            }
            delay.delay_ms(self.cadence_ms).await;
        }
    }
}

/// One panel frame: clear, home the cursor, write the block, flush.
fn draw_panel<D: PanelDisplay>(panel: &mut D, state: &NunchukState) -> Result<(), DisplayError> {
    let block = render::format_panel(state);
    panel.clear()?;
    panel.set_cursor(0, 0)?;
    panel.write_text(&block)?;
    panel.flush()
}
