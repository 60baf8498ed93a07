use tracing::info;

use crate::cell::LiveSet;
use crate::events::Button;
use crate::events::InputEvent;
use crate::events::KeyCommand;
use crate::life::Life;
use crate::render::Canvas;
use crate::render::draw_frame;
use crate::view::Pixel;
use crate::view::ViewState;

/// What the control loop should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// All state of the interactive simulation, owned by the control loop.
///
/// One tick is: feed every pending [`InputEvent`] to [`App::handle`], call [`App::tick`], then
/// [`App::draw`].
pub struct App {
    life: Life,

    /// The starting pattern. Only ever copied out, so a reset always restores it exactly.
    initial: LiveSet,

    view: ViewState,

    running: bool,

    show_gridlines: bool,
}

impl App {
    pub fn new(initial: LiveSet, view: ViewState) -> Self {
        Self {
            life: Life::new(initial.clone()),
            initial,
            view,
            running: false,
            show_gridlines: true,
        }
    }

    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn initial(&self) -> &LiveSet {
        &self.initial
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn show_gridlines(&self) -> bool {
        self.show_gridlines
    }

    pub fn handle(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::Quit => return Control::Exit,

            InputEvent::ButtonDown { button, pos } => self.button_down(button, pos),

            InputEvent::Motion { delta } => self.view.pan(delta),

            InputEvent::Key(command) => self.command(command),

            InputEvent::Resize { width, height } => self.view.resize(width, height),
        }

        Control::Continue
    }

    /// Advance the simulation by one generation, if it is running
    pub fn tick(&mut self) {
        if self.running {
            self.life.step();
        }
    }

    /// Paint the current generation. Returns `false` if the zoom was too small to draw cells.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> bool {
        draw_frame(canvas, self.life.cells(), &self.view, self.show_gridlines)
    }

    fn button_down(&mut self, button: Button, pos: Pixel) {
        match button {
            Button::ScrollUp => self.view.zoom_in(),
            Button::ScrollDown => self.view.zoom_out(),
            Button::Primary => {
                if let Some(cell) = self.view.screen_to_grid(pos) {
                    self.life.toggle(cell);
                }
            }
        }
    }

    fn command(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::ToggleRunning => {
                self.running = !self.running;

                info!(running = self.running, "toggled simulation");
            }
            KeyCommand::Clear => {
                self.life.clear();
                self.running = false;

                info!("cleared");
            }
            KeyCommand::Reset => {
                self.life.replace(self.initial.clone());
                self.running = false;

                info!(population = self.initial.len(), "reset to initial pattern");
            }
            KeyCommand::ToggleGridlines => {
                self.show_gridlines = !self.show_gridlines;
            }
            KeyCommand::Advance => self.life.step(),
            KeyCommand::ResetView => self.view.reset(),
        }
    }
}
