use crate::domain::SoundCue;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while trying to play a cue
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("sound asset not found: {}", .0.display())]
    AssetMissing(PathBuf),

    #[error("no audio player available (tried {0})")]
    NoPlayer(String),

    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Exited { program: String, status: ExitStatus },

    #[error("failed to check on {program}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can play the two timer cues
pub trait CuePlayer {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError>;

    /// Failures of earlier playback detected since the last call
    fn poll(&mut self) -> Vec<SoundError> {
        Vec::new()
    }
}

/// Audio file and playback volume (0.0 to 1.0) for one cue
#[derive(Debug, Clone, PartialEq)]
pub struct CueAsset {
    pub path: PathBuf,
    pub volume: f32,
}

/// A system audio command line for one asset
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCommand {
    pub program: String,
    pub args: Vec<String>,
}

#[cfg(target_os = "macos")]
pub fn player_commands(asset: &CueAsset) -> Vec<PlayerCommand> {
    vec![PlayerCommand {
        program: "afplay".to_string(),
        args: vec![
            "-v".to_string(),
            format!("{:.2}", asset.volume),
            asset.path.display().to_string(),
        ],
    }]
}

#[cfg(not(target_os = "macos"))]
pub fn player_commands(asset: &CueAsset) -> Vec<PlayerCommand> {
    // paplay volume is linear with 65536 = 100%
    let pa_volume = (asset.volume.clamp(0.0, 1.0) * 65536.0).round() as u32;
    vec![
        PlayerCommand {
            program: "paplay".to_string(),
            args: vec![
                format!("--volume={}", pa_volume),
                asset.path.display().to_string(),
            ],
        },
        PlayerCommand {
            program: "aplay".to_string(),
            args: vec!["-q".to_string(), asset.path.display().to_string()],
        },
    ]
}

/// A spawned player plus the commands left to try if it fails
struct Playback {
    program: String,
    child: Child,
    fallbacks: Vec<PlayerCommand>,
}

/// Spawn the first available command. Commands that are not installed are skipped.
fn spawn_first(cue: SoundCue, mut commands: Vec<PlayerCommand>) -> Result<Playback, SoundError> {
    let tried: Vec<String> = commands.iter().map(|c| c.program.clone()).collect();

    while !commands.is_empty() {
        let command = commands.remove(0);
        let spawned = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(cue = cue.name(), program = %command.program, "playing cue");
                return Ok(Playback {
                    program: command.program,
                    child,
                    fallbacks: commands,
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(SoundError::Spawn {
                    program: command.program,
                    source,
                })
            }
        }
    }

    Err(SoundError::NoPlayer(tried.join(", ")))
}

type CommandBuilder = Box<dyn Fn(&CueAsset) -> Vec<PlayerCommand>>;

/// Plays cues by spawning the platform's command-line audio player
pub struct SystemPlayer {
    start: CueAsset,
    end: CueAsset,
    commands: CommandBuilder,
    playing: HashMap<SoundCue, Playback>,
    failures: Vec<SoundError>,
}

impl SystemPlayer {
    pub fn new(start: CueAsset, end: CueAsset) -> Self {
        Self::with_commands(start, end, player_commands)
    }

    /// Use a custom command line for each asset instead of the platform players
    pub fn with_commands<F>(start: CueAsset, end: CueAsset, commands: F) -> Self
    where
        F: Fn(&CueAsset) -> Vec<PlayerCommand> + 'static,
    {
        Self {
            start,
            end,
            commands: Box::new(commands),
            playing: HashMap::new(),
            failures: Vec::new(),
        }
    }

    fn asset(&self, cue: SoundCue) -> &CueAsset {
        match cue {
            SoundCue::Start => &self.start,
            SoundCue::End => &self.end,
        }
    }

    /// Reap a finished player for `cue`. A failed player is recorded and
    /// the next fallback command is started in its place.
    fn reap(&mut self, cue: SoundCue) {
        let Some(playback) = self.playing.get_mut(&cue) else {
            return;
        };

        let status = match playback.child.try_wait() {
            Ok(None) => return,
            Ok(Some(status)) => status,
            Err(source) => {
                let program = playback.program.clone();
                self.playing.remove(&cue);
                self.failures.push(SoundError::Wait { program, source });
                return;
            }
        };

        let Some(finished) = self.playing.remove(&cue) else {
            return;
        };
        if status.success() {
            return;
        }

        self.failures.push(SoundError::Exited {
            program: finished.program,
            status,
        });
        if finished.fallbacks.is_empty() {
            return;
        }
        match spawn_first(cue, finished.fallbacks) {
            Ok(next) => {
                self.playing.insert(cue, next);
            }
            Err(e) => self.failures.push(e),
        }
    }

    /// Stop a still-playing instance of `cue` and reap the process
    fn stop(&mut self, cue: SoundCue) {
        self.reap(cue);
        if let Some(mut playback) = self.playing.remove(&cue) {
            let _ = playback.child.kill();
            let _ = playback.child.wait();
        }
    }

    #[cfg(test)]
    fn playing_pid(&self, cue: SoundCue) -> Option<u32> {
        self.playing.get(&cue).map(|p| p.child.id())
    }

    #[cfg(test)]
    fn playing_program(&self, cue: SoundCue) -> Option<&str> {
        self.playing.get(&cue).map(|p| p.program.as_str())
    }
}

impl CuePlayer for SystemPlayer {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError> {
        // Replays always start from the beginning
        self.stop(cue);

        let asset = self.asset(cue).clone();
        if !asset.path.exists() {
            return Err(SoundError::AssetMissing(asset.path));
        }

        let playback = spawn_first(cue, (self.commands)(&asset))?;
        self.playing.insert(cue, playback);
        Ok(())
    }

    fn poll(&mut self) -> Vec<SoundError> {
        self.reap(SoundCue::Start);
        self.reap(SoundCue::End);
        std::mem::take(&mut self.failures)
    }
}

impl Drop for SystemPlayer {
    fn drop(&mut self) {
        self.stop(SoundCue::Start);
        self.stop(SoundCue::End);
    }
}

/// Cue playback with a mute switch. Failures are logged and dropped.
pub struct SoundCues {
    player: Box<dyn CuePlayer>,
    pub muted: bool,
}

impl SoundCues {
    pub fn new(player: Box<dyn CuePlayer>, muted: bool) -> Self {
        Self { player, muted }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Play `cue` unless muted. Returns whether playback was attempted.
    pub fn play(&mut self, cue: SoundCue) -> bool {
        self.poll();
        if self.muted {
            return false;
        }
        if let Err(e) = self.player.play(cue) {
            warn!(cue = cue.name(), error = %e, "error playing sound");
        }
        true
    }

    /// Log failures of players that have finished since the last check
    pub fn poll(&mut self) {
        for e in self.player.poll() {
            warn!(error = %e, "sound playback failed");
        }
    }
}
