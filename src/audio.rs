// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget sound playback.
//!
//! One output stream lives for the application's lifetime and at most one
//! clip plays at a time: starting a new clip drops the previous sink, which
//! stops whatever was still playing. There is no queueing and no explicit
//! cancellation beyond that supersession.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;

use crate::assets;
use crate::error::AudioError;

/// Owns the audio output stream and the sink for the clip in flight.
///
/// The stream handle must outlive every sink created from it, so the player
/// is constructed once at startup and kept on the application state. On
/// machines with no output device construction fails once, the caller logs
/// it, and playback is skipped for the rest of the session.
pub struct SoundPlayer {
    // Keeps the OS stream alive; dropping it silences all sinks.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    current: Option<Sink>,
}

impl SoundPlayer {
    /// Opens the default audio output device.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::NoDevice`] when no output device is available.
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::NoDevice(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            handle,
            current: None,
        })
    }

    /// Looks up a bundled clip by its logical name and plays it.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::ResourceMissing`] when the name is not part of
    /// the embedded asset set, plus everything [`Self::play`] can return.
    pub fn play_resource(&mut self, name: &str) -> Result<(), AudioError> {
        let bytes = assets::sound_bytes(name)
            .ok_or_else(|| AudioError::ResourceMissing(name.to_string()))?;
        self.play(bytes)
    }

    /// Decodes `bytes` and starts playback, superseding any clip still
    /// playing. Returns immediately; decoding happens lazily on the audio
    /// thread as samples are pulled.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::Undecodable`] for unreadable data and
    /// [`AudioError::Playback`] when the sink cannot be created. Both are
    /// recoverable: the caller logs and carries on.
    pub fn play(&mut self, bytes: Vec<u8>) -> Result<(), AudioError> {
        let source =
            Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::Undecodable(e.to_string()))?;

        let sink =
            Sink::try_new(&self.handle).map_err(|e| AudioError::Playback(e.to_string()))?;
        sink.append(source);

        // Dropping the previous sink stops it.
        self.current = Some(sink);
        Ok(())
    }
}
