// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Audio(AudioError),
}

/// Specific error types for sound playback issues.
///
/// Every variant is recoverable: playback failures are logged and the
/// rest of the interaction (alert, scrolling) continues unaffected.
#[derive(Debug, Clone)]
pub enum AudioError {
    /// No audio output device is available on this machine.
    NoDevice(String),

    /// The named sound resource is not part of the bundled asset set.
    ResourceMissing(String),

    /// The resource exists but could not be decoded.
    Undecodable(String),

    /// The output sink could not be created or driven.
    Playback(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoDevice(msg) => write!(f, "no audio output device: {msg}"),
            AudioError::ResourceMissing(name) => write!(f, "sound resource not found: {name}"),
            AudioError::Undecodable(msg) => write!(f, "sound resource could not be decoded: {msg}"),
            AudioError::Playback(msg) => write!(f, "sound playback failed: {msg}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "configuration error: {msg}"),
            Error::Audio(err) => write!(f, "audio error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
