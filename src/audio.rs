//=========================================================================
// Audio Subsystem
//
// Background music playback through the default output device.
//
// Responsibilities:
// - Open the output stream and a playback sink
// - Decode the music file and loop it for the life of the session
//
// Notes:
// The output stream handle must stay alive for playback to continue,
// so `Music` owns it alongside the sink. The handle is not `Send`;
// the whole subsystem lives on the event-loop thread.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

//=== External Crates =====================================================

use log::info;
use rodio::{Decoder, OutputStream, Sink, Source};

//=== AudioError ==========================================================

/// Music playback failures.
#[derive(Debug)]
pub enum AudioError {
    /// No usable output device.
    Device(rodio::StreamError),

    /// Playback sink could not be attached to the stream.
    Sink(rodio::PlayError),

    /// Music file could not be opened.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Music file was read but could not be decoded.
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(source) => write!(f, "Failed to open audio output: {}", source),
            Self::Sink(source) => write!(f, "Failed to create playback sink: {}", source),
            Self::Open { path, source } => {
                write!(f, "Failed to open {}: {}", path.display(), source)
            }
            Self::Decode { path, source } => {
                write!(f, "Failed to decode {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Device(source) => Some(source),
            Self::Sink(source) => Some(source),
            Self::Open { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

//=== Music ===============================================================

/// Looped background music bound to the default output device.
///
/// Playback runs for as long as this value is alive; dropping it stops
/// the music and closes the device.
pub struct Music {
    // Dropping the stream silences the sink, so it rides along unused.
    _stream: OutputStream,
    sink: Sink,
}

impl Music {
    /// Opens the output device and starts looping the given file.
    pub fn play_looped(path: &Path) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default().map_err(AudioError::Device)?;
        let sink = Sink::try_new(&handle).map_err(AudioError::Sink)?;

        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let decoder =
            Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        sink.append(decoder.repeat_infinite());
        info!(target: "audio", "Looping {}", path.display());

        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    /// Whether the sink still has audio queued.
    pub fn is_playing(&self) -> bool {
        !self.sink.empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Playback itself needs a real output device, which test machines
    // rarely have. These cover the failure paths that don't.

    #[test]
    fn missing_file_reports_open_error() {
        let result = Music::play_looped(Path::new("definitely/not/here.ogg"));
        match result {
            Err(AudioError::Open { .. }) | Err(AudioError::Device(_)) => {}
            Err(other) => panic!("Unexpected error: {}", other),
            Ok(_) => panic!("Expected an error for a missing file"),
        }
    }

    #[test]
    fn errors_format_with_path() {
        let err = AudioError::Open {
            path: PathBuf::from("music/theme.ogg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let text = err.to_string();
        assert!(text.contains("music/theme.ogg"), "got: {}", text);
    }
}
