use crate::api::types::{ClipId, SoundCommand};

/// Audio output collaborator.
///
/// Plays are fire-and-forget: a one-shot play of a clip that is already
/// sounding overlaps it, and looping playback runs until stopped.
pub trait SoundPlayer {
    fn play(&mut self, clip: ClipId, looping: bool);
    fn stop(&mut self, clip: ClipId);
    fn stop_all(&mut self);
}

/// Forward a frame's sound commands to the player, in emission order.
pub fn dispatch_sounds(commands: &[SoundCommand], player: &mut dyn SoundPlayer) {
    for command in commands {
        match *command {
            SoundCommand::Play { clip, looping } => player.play(clip, looping),
            SoundCommand::Stop { clip } => player.stop(clip),
            SoundCommand::StopAll => player.stop_all(),
        }
    }
}

/// A player that only remembers the commands it received.
/// Used by hosts that forward sound to another process, and by tests.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub commands: Vec<SoundCommand>,
}

impl RecordingPlayer {
    /// Drain recorded commands.
    pub fn take(&mut self) -> Vec<SoundCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&mut self, clip: ClipId, looping: bool) {
        self.commands.push(SoundCommand::Play { clip, looping });
    }

    fn stop(&mut self, clip: ClipId) {
        self.commands.push(SoundCommand::Stop { clip });
    }

    fn stop_all(&mut self) {
        self.commands.push(SoundCommand::StopAll);
    }
}
