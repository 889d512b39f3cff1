//! Speech presenter.
//!
//! Vocalizes digest lines through a local command-line speech engine.
//! Engine availability is resolved once at startup: prefer `espeak-ng`,
//! fall back to macOS `say`, and if neither is on PATH the speaker is
//! [`Speaker::Disabled`] and every `speak` call is a silent no-op. A
//! missing or failing engine never fails the digest run.
//!
//! Bullet and marker glyphs are stripped here, before vocalizing; the
//! summarizer emits them for display and does not know about speech.

use crate::config::SpeechConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech engine could not be run: {0}")]
    Io(#[from] std::io::Error),
    #[error("Speech engine exited with {0}")]
    Engine(std::process::ExitStatus),
}

/// A resolved speech engine.
///
/// The disabled variant is a full no-op implementation, so callers hold a
/// `Speaker` unconditionally and never branch on availability themselves.
#[derive(Debug)]
pub enum Speaker {
    /// `espeak-ng <text>` with rate (`-s`, words per minute) and amplitude
    /// (`-a`, 0..=200).
    EspeakNg {
        bin: PathBuf,
        rate: u32,
        amplitude: u32,
    },
    /// macOS `say -r <wpm> <text>`.
    Say { bin: PathBuf, rate: u32 },
    /// No engine available, or voice output not requested.
    Disabled,
}

impl Speaker {
    /// Probe PATH for a usable engine.
    #[instrument(level = "info", skip_all)]
    pub fn detect(config: &SpeechConfig) -> Self {
        if let Some(bin) = find_in_path("espeak-ng") {
            info!(engine = %bin.display(), "Using espeak-ng for voice output");
            return Speaker::EspeakNg {
                bin,
                rate: config.rate,
                amplitude: amplitude_for(config.volume),
            };
        }
        if let Some(bin) = find_in_path("say") {
            info!(engine = %bin.display(), "Using say for voice output");
            return Speaker::Say {
                bin,
                rate: config.rate,
            };
        }
        info!("No speech engine found on PATH; voice output disabled");
        Speaker::Disabled
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Speaker::Disabled)
    }

    /// Speak one line of text, blocking until playback finishes.
    ///
    /// Display glyphs are stripped first; a line that is empty after
    /// stripping is skipped. [`Speaker::Disabled`] always returns `Ok`.
    pub async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let line = clean_for_speech(text);
        if line.is_empty() {
            return Ok(());
        }

        let status = match self {
            Speaker::Disabled => return Ok(()),
            Speaker::EspeakNg {
                bin,
                rate,
                amplitude,
            } => {
                debug!(%line, "Speaking via espeak-ng");
                Command::new(bin)
                    .arg("-s")
                    .arg(rate.to_string())
                    .arg("-a")
                    .arg(amplitude.to_string())
                    .arg(&line)
                    .status()
                    .await?
            }
            Speaker::Say { bin, rate } => {
                debug!(%line, "Speaking via say");
                Command::new(bin)
                    .arg("-r")
                    .arg(rate.to_string())
                    .arg(&line)
                    .status()
                    .await?
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::Engine(status))
        }
    }
}

/// Map a `0.0..=1.0` volume to espeak-ng's amplitude scale (0..=200).
fn amplitude_for(volume: f32) -> u32 {
    (volume.clamp(0.0, 1.0) * 200.0).round() as u32
}

/// Strip display glyphs so they are not read aloud.
fn clean_for_speech(text: &str) -> String {
    text.replace('•', "").replace('📰', "").trim().to_string()
}

/// Locate an executable on PATH.
fn find_in_path(bin: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(bin))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_for_speech_strips_glyphs() {
        assert_eq!(
            clean_for_speech("• Markets opened higher."),
            "Markets opened higher."
        );
        assert_eq!(clean_for_speech("📰 Rates cut"), "Rates cut");
        assert_eq!(clean_for_speech("  plain text  "), "plain text");
    }

    #[test]
    fn test_clean_for_speech_empty_after_stripping() {
        assert_eq!(clean_for_speech("• "), "");
        assert_eq!(clean_for_speech("📰"), "");
        assert_eq!(clean_for_speech(""), "");
    }

    #[test]
    fn test_amplitude_for_clamps_and_scales() {
        assert_eq!(amplitude_for(0.8), 160);
        assert_eq!(amplitude_for(0.0), 0);
        assert_eq!(amplitude_for(1.0), 200);
        assert_eq!(amplitude_for(2.5), 200);
        assert_eq!(amplitude_for(-1.0), 0);
    }

    #[tokio::test]
    async fn test_disabled_speaker_is_a_noop() {
        let speaker = Speaker::Disabled;
        assert!(!speaker.is_enabled());
        assert!(speaker.speak("• Anything at all.").await.is_ok());
    }

    #[test]
    fn test_find_in_path_missing_binary() {
        assert!(find_in_path("daily-news-digest-no-such-binary").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_path_finds_sh() {
        assert!(find_in_path("sh").is_some());
    }
}
