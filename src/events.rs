use crate::view::Pixel;

/// Everything the control loop reacts to. Each variant carries only what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Exit the application
    Quit,

    /// A pointer button went down at `pos`
    ButtonDown { button: Button, pos: Pixel },

    /// The pointer moved by `delta` while the primary button is held
    Motion { delta: Pixel },

    Key(KeyCommand),

    /// The viewport changed size, in pixels
    Resize { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    ScrollUp,
    ScrollDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Start or pause the simulation
    ToggleRunning,

    /// Kill every cell and pause
    Clear,

    /// Restore the initial pattern and pause
    Reset,

    ToggleGridlines,

    /// Advance the world by a single generation
    Advance,

    /// Recenter the view at zoom `1.0`
    ResetView,
}
