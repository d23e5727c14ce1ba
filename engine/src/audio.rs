//! Poem recording playback through an external player command.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio player configured (set [library] audio_player)")]
    NoPlayer,
    #[error("audio file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to start {player}")]
    Spawn {
        player: String,
        #[source]
        source: io::Error,
    },
}

/// At most one running player process. Starting again restarts playback.
#[derive(Debug, Default)]
pub struct AudioPlayer {
    command: Option<String>,
    child: Option<Child>,
}

impl AudioPlayer {
    #[must_use]
    pub fn new(command: Option<String>) -> Self {
        Self {
            command,
            child: None,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.command.is_some()
    }

    /// True while a spawned player has not exited.
    pub fn is_playing(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(_)) | Err(_) => {
                self.child = None;
                false
            }
        }
    }

    pub fn play(&mut self, path: &Path) -> Result<(), AudioError> {
        let Some(command) = self.command.clone() else {
            return Err(AudioError::NoPlayer);
        };
        if !path.exists() {
            return Err(AudioError::Missing(path.to_path_buf()));
        }
        self.stop();

        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(AudioError::NoPlayer)?;
        let child = Command::new(program)
            .args(parts)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AudioError::Spawn {
                player: program.to_string(),
                source,
            })?;
        tracing::info!(player = program, path = %path.display(), "Audio playback started");
        self.child = Some(child);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(err) = child.kill() {
                tracing::debug!("Audio player already exited: {err}");
            }
            let _ = child.wait();
        }
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    #[cfg(unix)]
    use std::thread;
    #[cfg(unix)]
    use std::time::{Duration, Instant};

    use super::{AudioError, AudioPlayer};

    #[test]
    fn unconfigured_player_reports_no_player() {
        let mut player = AudioPlayer::new(None);
        let dir = tempfile::tempdir().unwrap();
        let err = player.play(&dir.path().join("poem.mp3")).unwrap_err();
        assert!(matches!(err, AudioError::NoPlayer));
        assert!(!player.is_playing());
    }

    #[test]
    fn missing_file_is_reported_before_spawning() {
        let mut player = AudioPlayer::new(Some("mpv".to_string()));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poem.mp3");
        let err = player.play(&path).unwrap_err();
        assert!(matches!(err, AudioError::Missing(p) if p == path));
    }

    #[test]
    fn unknown_program_is_a_spawn_error() {
        let mut player = AudioPlayer::new(Some("rizal-no-such-player-xyz".to_string()));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poem.mp3");
        fs::write(&path, b"ID3").unwrap();
        let err = player.play(&path).unwrap_err();
        assert!(matches!(err, AudioError::Spawn { .. }));
        assert!(err.to_string().contains("rizal-no-such-player-xyz"));
    }

    #[cfg(unix)]
    #[test]
    fn configured_player_spawns_and_restarts() {
        let mut player = AudioPlayer::new(Some("tail -f".to_string()));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poem.mp3");
        fs::write(&path, b"ID3").unwrap();

        player.play(&path).unwrap();
        assert!(player.is_playing());

        // Replaces the running child rather than stacking a second one.
        player.play(&path).unwrap();
        assert!(player.is_playing());

        player.stop();
        assert!(!player.is_playing());
    }

    #[cfg(unix)]
    #[test]
    fn finished_player_is_no_longer_playing() {
        let mut player = AudioPlayer::new(Some("true".to_string()));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poem.mp3");
        fs::write(&path, b"ID3").unwrap();

        player.play(&path).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        while player.is_playing() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        assert!(!player.is_playing());
    }
}
