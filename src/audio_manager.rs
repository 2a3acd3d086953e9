use std::{fs::File, io::BufReader, io::Cursor, io::Read, sync::Arc};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::config::{AssetPaths, AudioConfig};
use crate::core::events::GameEvent;
use crate::error::{GameError, Result};

/// Reads a sound file and checks it decodes, so a bad file fails at startup.
fn load_sound(path: &str) -> Result<Arc<Vec<u8>>> {
    let asset_err = |reason: String| GameError::Asset { path: path.to_string(), reason };
    let mut f = File::open(path).map_err(|e| asset_err(e.to_string()))?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).map_err(|e| asset_err(e.to_string()))?;
    Decoder::new(Cursor::new(buf.clone())).map_err(|e| asset_err(e.to_string()))?;
    log::info!("loaded sound {}", path);
    Ok(Arc::new(buf))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Effect {
    Jump,
    Die,
}

fn effect_for(event: &GameEvent) -> Option<Effect> {
    match event {
        GameEvent::JumpTriggered => Some(Effect::Jump),
        GameEvent::PlayerNearHazard => Some(Effect::Die),
        GameEvent::StateChanged { .. } => None,
    }
}

/// First idle channel, or `None` when every channel is playing.
fn pick_channel(busy: &[bool]) -> Option<usize> {
    busy.iter().position(|&b| !b)
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music_sink: Option<Sink>,
    channels: Vec<Sink>,   // un sink por canal de efectos
    music: Arc<Vec<u8>>,
    jump: Arc<Vec<u8>>,
    die: Arc<Vec<u8>>,
    music_volume: f32,
}

impl AudioManager {
    pub fn new(assets: &AssetPaths, config: &AudioConfig) -> Result<Self> {
        let (_stream, handle) =
            OutputStream::try_default().map_err(|e| GameError::AudioInit(e.to_string()))?;
        let channels = (0..config.channels.max(1))
            .map(|_| Sink::try_new(&handle).map_err(|e| GameError::AudioInit(e.to_string())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            _stream,
            handle,
            music_sink: None,
            channels,
            music: load_sound(&assets.music)?,
            jump: load_sound(&assets.jump_sound)?,
            die: load_sound(&assets.die_sound)?,
            music_volume: config.music_volume,
        })
    }

    /// Starts the background music, looping forever. Calling it again is a no-op.
    pub fn play_music_loop(&mut self) -> Result<()> {
        if self.music_sink.is_some() { return Ok(()); }
        let dec = Decoder::new_looped(Cursor::new(self.music.as_ref().clone()))
            .map_err(|e| GameError::AudioInit(e.to_string()))?;
        let sink = Sink::try_new(&self.handle).map_err(|e| GameError::AudioInit(e.to_string()))?;
        sink.append(dec);
        sink.set_volume(self.music_volume);
        self.music_sink = Some(sink);
        Ok(())
    }

    pub fn handle_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(effect_for) {
            self.play_effect(effect);
        }
    }

    /// Plays on the first idle channel; the effect is dropped if every channel is busy.
    fn play_effect(&self, effect: Effect) {
        let busy: Vec<bool> = self.channels.iter().map(|s| !s.empty()).collect();
        let Some(channel) = pick_channel(&busy) else {
            log::trace!("all {} effect channels busy, dropping {:?}", self.channels.len(), effect);
            return;
        };
        let data = match effect {
            Effect::Jump => &self.jump,
            Effect::Die => &self.die,
        };
        if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(data.as_ref().clone()))) {
            self.channels[channel].append(dec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::StateKind;

    #[test]
    fn events_map_to_their_effects() {
        assert_eq!(effect_for(&GameEvent::JumpTriggered), Some(Effect::Jump));
        assert_eq!(effect_for(&GameEvent::PlayerNearHazard), Some(Effect::Die));
        let change = GameEvent::StateChanged { from: StateKind::Intro, to: StateKind::Maze };
        assert_eq!(effect_for(&change), None);
    }

    #[test]
    fn first_idle_channel_is_used() {
        assert_eq!(pick_channel(&[false; 8]), Some(0));
        assert_eq!(pick_channel(&[true, true, false, false]), Some(2));
        assert_eq!(pick_channel(&[true, true, true, true, true, true, true, false]), Some(7));
    }

    #[test]
    fn effect_is_dropped_when_all_channels_busy() {
        assert_eq!(pick_channel(&[true; 8]), None);
        assert_eq!(pick_channel(&[]), None);
    }
}
