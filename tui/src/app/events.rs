/// External signals consumed by the presenter. Every variant is produced by
/// a discrete input event (key press, mouse click, resize) and is applied
/// synchronously before the next one is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    NextSlide,
    PrevSlide,
    /// Jump straight to a slide index (0-based). Producers derive the index
    /// from deck geometry, so it is valid by construction.
    JumpTo(usize),
    FirstSlide,
    LastSlide,
    MouseClick(u16, u16),
    Resized(u16, u16),
    Quit,
}
