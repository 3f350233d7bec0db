//! Application messages

use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Restart the draw-in animation of every chart
    PlayAnimation,
    /// Freeze every chart at its current phase
    StopAnimation,
    /// Frame tick while an animation runs
    AnimationTick(Instant),
}
