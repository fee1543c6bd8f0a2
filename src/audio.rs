//! Audio collaborator interface
//!
//! The simulation only names sounds; mixing, decoding and channel management
//! belong to whatever implements [`AudioSink`].

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player laser fired
    PlayerFire,
    /// Enemy laser fired
    EnemyFire,
    /// Ship destroyed or player hit
    Explosion,
}

impl SoundEffect {
    /// Asset file backing this effect
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::PlayerFire => "player_fire.wav",
            SoundEffect::EnemyFire => "enemy_fire.wav",
            SoundEffect::Explosion => "explosion.wav",
        }
    }
}

/// Volume channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Sound,
    Music,
}

/// Something that can make noise
pub trait AudioSink {
    fn play_sound(&mut self, effect: SoundEffect);
    /// Start (fade in) the background track
    fn play_music(&mut self);
    fn fade_out_music(&mut self);
    /// `level` is in `0..=MAX_VOLUME`
    fn set_volume(&mut self, channel: Channel, level: u8);
}
