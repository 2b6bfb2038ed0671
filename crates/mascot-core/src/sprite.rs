//! Pose selection: which sprite is shown and how it is transformed.

use crate::config::SpriteSet;
use crate::constants::PULSE_SCALE;
use crate::direction::Direction;
use crate::transition::Phase;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Default,
    Notice,
    Back,
    Side,
}

impl Sprite {
    pub fn asset<'a>(&self, set: &'a SpriteSet) -> &'a str {
        match self {
            Sprite::Default => &set.default,
            Sprite::Notice => &set.notice,
            Sprite::Back => &set.back,
            Sprite::Side => &set.side,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub sprite: Sprite,
    /// Mirror the side sprite so it faces east.
    pub flip_x: bool,
    pub scale: f32,
    pub glow: bool,
}

pub fn pose_for(phase: Phase, hovered: bool, direction: Direction) -> Pose {
    let sprite = match phase {
        Phase::Moving | Phase::Closing | Phase::Holding => Sprite::Notice,
        Phase::PoffuEffect | Phase::Opening => Sprite::Default,
        Phase::Idle if hovered => Sprite::Notice,
        Phase::Idle => match direction {
            Direction::North => Sprite::Back,
            Direction::East | Direction::West => Sprite::Side,
            Direction::South => Sprite::Default,
        },
    };
    let pulsing = phase == Phase::PoffuEffect;
    Pose {
        sprite,
        flip_x: phase == Phase::Idle && direction == Direction::East,
        scale: if pulsing { PULSE_SCALE } else { 1.0 },
        glow: pulsing,
    }
}
