//! Speech capture session controller.
//!
//! Wraps an event-driven recognition device behind a capability trait so the
//! state machine is testable with a scripted fake device. Finalized chunks
//! are dispatched downstream exactly once each, in device order; interim
//! chunks update the visible transcript and are never forwarded.

use thiserror::Error;
use tracing::{info, warn};

/// Failure raised by a recognition device when asked to start capturing.
#[derive(Debug, Error)]
#[error("recognition device failed to start: {0}")]
pub struct DeviceError(pub String);

/// Capability interface over a continuous audio-recognition device.
///
/// The device delivers [`DeviceEvent`]s through whatever integration layer
/// owns it; the controller only drives start/stop.
pub trait RecognitionDevice {
    fn start(&mut self) -> Result<(), DeviceError>;
    fn stop(&mut self);
}

/// Observable device events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Started,
    /// Partial hypothesis, visible but not yet committed
    Interim(String),
    /// Finalized chunk, committed and forwarded downstream
    Final(String),
    Error(String),
    Ended,
}

/// Capture session states.
///
/// `Unsupported` is entered once at construction when no device exists and is
/// sticky. `Error` requires an explicit `start()` to recover; there is no
/// auto-retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStatus {
    Idle,
    Listening,
    Processing,
    Unsupported,
    Error,
}

/// Visible transcript: interim hypothesis plus committed finalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub interim: String,
    pub committed: String,
}

/// One capture session over an exclusively-owned recognition device.
pub struct SpeechSession<D: RecognitionDevice> {
    device: Option<D>,
    status: CaptureStatus,
    transcript: Transcript,
}

impl<D: RecognitionDevice> SpeechSession<D> {
    /// Build a session. `None` means the host has no recognition device; the
    /// session is permanently `Unsupported` and every call is a no-op.
    pub fn new(device: Option<D>) -> Self {
        let status = if device.is_some() {
            CaptureStatus::Idle
        } else {
            CaptureStatus::Unsupported
        };
        Self {
            device,
            status,
            transcript: Transcript::default(),
        }
    }

    pub fn status(&self) -> CaptureStatus {
        self.status
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn supported(&self) -> bool {
        self.status != CaptureStatus::Unsupported
    }

    /// Begin capturing. Clears any prior transcript. Recovers from `Error`;
    /// no-op while already live or unsupported.
    pub fn start(&mut self) {
        match self.status {
            CaptureStatus::Unsupported => {}
            CaptureStatus::Listening | CaptureStatus::Processing => {}
            CaptureStatus::Idle | CaptureStatus::Error => {
                // A supported session always holds a device.
                let Some(device) = self.device.as_mut() else {
                    self.status = CaptureStatus::Unsupported;
                    return;
                };
                self.transcript = Transcript::default();
                match device.start() {
                    Ok(()) => {
                        info!("speech capture started");
                        self.status = CaptureStatus::Listening;
                    }
                    Err(err) => {
                        warn!(%err, "speech capture failed to start");
                        self.status = CaptureStatus::Error;
                    }
                }
            }
        }
    }

    /// Request the device to stop. The session stays in `Processing` until
    /// the device's own `Ended` event arrives. Idempotent: a no-op unless
    /// currently listening.
    pub fn stop(&mut self) {
        if self.status != CaptureStatus::Listening {
            return;
        }
        if let Some(device) = self.device.as_mut() {
            device.stop();
        }
        self.status = CaptureStatus::Processing;
    }

    /// Feed one device event through the state machine. `on_final` is invoked
    /// exactly once per finalized chunk, in delivery order, with no batching.
    pub fn handle_event(&mut self, event: DeviceEvent, mut on_final: impl FnMut(&str)) {
        if self.status == CaptureStatus::Unsupported {
            return;
        }
        match event {
            DeviceEvent::Started => {
                if self.status == CaptureStatus::Idle {
                    self.status = CaptureStatus::Listening;
                }
            }
            DeviceEvent::Interim(text) => {
                if self.status == CaptureStatus::Listening {
                    self.transcript.interim = text;
                }
            }
            DeviceEvent::Final(text) => {
                // Devices may flush a last finalized chunk between stop() and
                // their Ended event, so Processing accepts finals too.
                if matches!(
                    self.status,
                    CaptureStatus::Listening | CaptureStatus::Processing
                ) {
                    let chunk = text.trim();
                    if chunk.is_empty() {
                        return;
                    }
                    self.transcript.interim.clear();
                    if !self.transcript.committed.is_empty() {
                        self.transcript.committed.push(' ');
                    }
                    self.transcript.committed.push_str(chunk);
                    on_final(chunk);
                }
            }
            DeviceEvent::Ended => {
                if matches!(
                    self.status,
                    CaptureStatus::Listening | CaptureStatus::Processing
                ) {
                    info!("speech capture ended");
                    self.status = CaptureStatus::Idle;
                }
            }
            DeviceEvent::Error(reason) => {
                warn!(%reason, "recognition device error, capture abandoned");
                self.status = CaptureStatus::Error;
            }
        }
    }
}

impl<D: RecognitionDevice> Drop for SpeechSession<D> {
    /// Scoped acquisition: the device is never left listening after the
    /// session's owning scope ends.
    fn drop(&mut self) {
        if matches!(
            self.status,
            CaptureStatus::Listening | CaptureStatus::Processing
        ) {
            if let Some(device) = self.device.as_mut() {
                device.stop();
            }
        }
    }
}
