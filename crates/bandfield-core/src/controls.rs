//! User controls exposed by the page.

use crate::error::UnknownControl;
use std::str::FromStr;

/// Push buttons, identified in the DOM by their element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Start,
    Pause,
    Backward,
    Forward,
    Faster,
    Slower,
    BackgroundColor,
    IncreaseParticleSize,
    DecreaseParticleSize,
    IncreaseSensitivity,
    DecreaseSensitivity,
    Toggle3D,
}

impl Button {
    pub const ALL: [Button; 12] = [
        Button::Start,
        Button::Pause,
        Button::Backward,
        Button::Forward,
        Button::Faster,
        Button::Slower,
        Button::BackgroundColor,
        Button::IncreaseParticleSize,
        Button::DecreaseParticleSize,
        Button::IncreaseSensitivity,
        Button::DecreaseSensitivity,
        Button::Toggle3D,
    ];

    pub const fn element_id(self) -> &'static str {
        match self {
            Button::Start => "startButton",
            Button::Pause => "pauseButton",
            Button::Backward => "backwardButton",
            Button::Forward => "forwardButton",
            Button::Faster => "fasterButton",
            Button::Slower => "slowerButton",
            Button::BackgroundColor => "backgroundColorButton",
            Button::IncreaseParticleSize => "increaseParticleSizeButton",
            Button::DecreaseParticleSize => "decreaseParticleSizeButton",
            Button::IncreaseSensitivity => "increaseSensitivityButton",
            Button::DecreaseSensitivity => "decreaseSensitivityButton",
            Button::Toggle3D => "toggle3DButton",
        }
    }
}

impl FromStr for Button {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Button::ALL
            .into_iter()
            .find(|b| b.element_id() == s)
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Control {
    Button(Button),
    /// Progress slider moved to a percentage of the track.
    Seek(f64),
    /// Track selector changed to a file name or URL.
    SelectTrack(String),
}

impl From<Button> for Control {
    fn from(b: Button) -> Self {
        Control::Button(b)
    }
}
