use std::{path::Path, sync::Arc};

use sdl2::{
    audio::{
        AudioCVT, AudioCallback, AudioDevice, AudioFormat, AudioSpec, AudioSpecDesired,
        AudioSpecWAV,
    },
    AudioSubsystem,
};

pub const FREQUENCY: i32 = 44_100;
pub const CHANNELS: u8 = 2;

/// Decoded samples already in the playback device's format.
#[derive(Clone, Debug)]
pub struct Sound {
    samples: Arc<[i16]>,
}

impl Sound {
    pub fn from_samples(samples: Vec<i16>) -> Self {
        Self {
            samples: samples.into(),
        }
    }

    /// Loads a WAV file and converts it to `spec`.
    pub fn load_wav(path: &Path, spec: &AudioSpec) -> Result<Self, String> {
        let wav = AudioSpecWAV::load_wav(path)?;
        let cvt = AudioCVT::new(
            wav.format,
            wav.channels,
            wav.freq,
            AudioFormat::s16_sys(),
            spec.channels,
            spec.freq,
        )?;

        let bytes = cvt.convert(wav.buffer().to_vec());
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_ne_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self::from_samples(samples))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

struct Voice {
    sound: Sound,
    position: usize,
}

impl Voice {
    fn new(sound: Sound) -> Self {
        Self { sound, position: 0 }
    }

    fn is_finished(&self) -> bool {
        self.position >= self.sound.len()
    }
}

/// Sums a looping music track and one-shot effects into the output buffer.
pub struct Mixer {
    music: Option<Voice>,
    music_paused: bool,
    effects: Vec<Voice>,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer {
    pub fn new() -> Self {
        Self {
            music: None,
            music_paused: false,
            effects: Vec::new(),
        }
    }

    pub fn play_effect(&mut self, sound: &Sound) {
        if !sound.is_empty() {
            self.effects.push(Voice::new(sound.clone()));
        }
    }

    pub fn play_music(&mut self, sound: &Sound) {
        self.music = Some(Voice::new(sound.clone()));
        self.music_paused = false;
    }

    pub fn is_music_playing(&self) -> bool {
        self.music.is_some()
    }

    pub fn is_music_paused(&self) -> bool {
        self.music_paused
    }

    pub fn pause_music(&mut self) {
        if self.music.is_some() {
            self.music_paused = true;
        }
    }

    pub fn resume_music(&mut self) {
        self.music_paused = false;
    }

    pub fn halt_music(&mut self) {
        self.music = None;
        self.music_paused = false;
    }

    pub fn active_effects(&self) -> usize {
        self.effects.len()
    }

    fn mix_into(&mut self, out: &mut [i16]) {
        out.fill(0);

        if !self.music_paused {
            if let Some(music) = self.music.as_mut() {
                let samples = &music.sound.samples;
                if !samples.is_empty() {
                    for sample in out.iter_mut() {
                        if music.position >= samples.len() {
                            music.position = 0;
                        }
                        *sample = sample.saturating_add(samples[music.position]);
                        music.position += 1;
                    }
                }
            }
        }

        for effect in self.effects.iter_mut() {
            let remaining = &effect.sound.samples[effect.position..];
            for (sample, &value) in out.iter_mut().zip(remaining.iter()) {
                *sample = sample.saturating_add(value);
            }
            effect.position += remaining.len().min(out.len());
        }

        self.effects.retain(|effect| !effect.is_finished());
    }
}

impl AudioCallback for Mixer {
    type Channel = i16;

    fn callback(&mut self, out: &mut [i16]) {
        self.mix_into(out);
    }
}

/// An open playback device driven by a [`Mixer`].
pub struct AudioPlayer {
    device: AudioDevice<Mixer>,
}

impl AudioPlayer {
    pub fn open(audio_subsystem: &AudioSubsystem) -> Result<Self, String> {
        let desired_spec = AudioSpecDesired {
            freq: Some(FREQUENCY),
            channels: Some(CHANNELS),
            samples: None,
        };

        let device = audio_subsystem.open_playback(None, &desired_spec, |spec| {
            log::debug!(
                "opened audio device: {} Hz, {} channels, {:?}",
                spec.freq,
                spec.channels,
                spec.format
            );
            Mixer::new()
        })?;
        device.resume();

        Ok(Self { device })
    }

    pub fn load_wav(&self, path: &Path) -> Result<Sound, String> {
        Sound::load_wav(path, self.device.spec())
    }

    pub fn play_effect(&mut self, sound: &Sound) {
        self.device.lock().play_effect(sound);
    }

    /// Starts `music` when nothing plays, otherwise toggles its pause state.
    pub fn toggle_music(&mut self, music: &Sound) {
        let mut mixer = self.device.lock();
        if !mixer.is_music_playing() {
            mixer.play_music(music);
        } else if mixer.is_music_paused() {
            mixer.resume_music();
        } else {
            mixer.pause_music();
        }
    }

    pub fn halt_music(&mut self) {
        self.device.lock().halt_music();
    }
}
