#[cfg(test)]
pub use tui_tester::TuiTester;

#[cfg(test)]
mod tui_tester {
    use anyhow::Result;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use phozzel_tui::tui::app::{App, Mode};
    use ratatui::{backend::TestBackend, buffer::Cell, Terminal};
    use std::fmt::Write;

    /// Step size for [`TuiTester::advance_ms`]: small enough that the smooth
    /// scroll animation gets its per-tick steps.
    const TICK_MS: u64 = 25;

    pub struct TuiTester<'a> {
        terminal: Terminal<TestBackend>,
        app: App<'a>,
        now_ms: u64,
    }

    impl<'a> TuiTester<'a> {
        /// Make a new tester.
        ///
        /// # Errors
        /// Returns an error if the test terminal cannot be initialized.
        pub fn new(app: App<'a>, width: u16, height: u16) -> Result<Self> {
            let terminal = Terminal::new(TestBackend::new(width, height))?;
            Ok(Self {
                terminal,
                app,
                now_ms: 0,
            })
        }

        pub fn app(&mut self) -> &mut App<'a> {
            &mut self.app
        }

        /// Renders the buffer and asserts that the given string is visible.
        ///
        /// # Panics
        /// If `needle` cannot be found in the current buffer.
        ///
        /// # Errors
        /// If something goes wrong while drawing to the screen.
        ///
        /// # Note
        /// This currently fails to find strings that are broken up by line breaks
        pub fn expect_visible(&mut self, needle: &str) -> Result<&mut Self> {
            let screen = self.render_to_string()?;
            assert!(
                screen.contains(needle),
                "The string '{needle}' was not found on this screen:\n{screen}"
            );
            Ok(self)
        }

        /// Renders the buffer and asserts that the given string is *not* visible.
        ///
        /// # Panics
        /// If `needle` is present be found in the current buffer.
        ///
        /// # Errors
        /// If something goes wrong while drawing to the screen.
        ///
        /// # Note
        /// This currently fails to find strings that are broken up by line breaks
        pub fn expect_not_visible(&mut self, needle: &str) -> Result<&mut Self> {
            let screen = self.render_to_string()?;
            assert!(
                !screen.contains(needle),
                "The string '{needle}' was not expected on this screen:\n{screen}"
            );
            Ok(self)
        }

        fn render_to_string(&mut self) -> Result<String> {
            self.terminal.draw(|frame| {
                self.app.render(frame);
            })?;
            let width = self.terminal.backend().buffer().area.width as usize;

            let screen = self
                .terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .enumerate()
                .fold(String::new(), |mut string, (index, cell)| {
                    let _ = write!(string, "{}", Cell::symbol(cell));
                    if (index + 1) % width == 0 {
                        let _ = writeln!(string);
                    }
                    string
                });
            Ok(screen)
        }

        /// Assert that the app is in an exiting state.
        ///
        /// # Panics
        /// If it isn't.
        pub fn expect_exiting(&self) {
            assert_eq!(self.app.mode, Mode::Exiting);
        }

        /// Sends the characters in the given string as individual keypresses to the app.
        /// Note that this does not render the app in between keypresses.
        pub fn type_string(&mut self, keys: &str) -> &mut Self {
            keys.chars().for_each(|c| {
                self.app
                    .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            });
            self
        }

        /// Sends a single key press to the app.
        pub fn type_key(&mut self, key: KeyCode) -> &mut Self {
            self.app.handle_key(KeyEvent::new(key, KeyModifiers::NONE));
            self
        }

        /// Moves the simulated clock forward, ticking the app along the way
        /// so timers fire and animations advance.
        pub fn advance_ms(&mut self, delta_ms: u64) -> &mut Self {
            let end = self.now_ms + delta_ms;
            while self.now_ms < end {
                self.now_ms = (self.now_ms + TICK_MS).min(end);
                self.app.tick(self.now_ms);
            }
            self
        }

        /// Left-clicks a cell. Draws first so the hit map matches what is
        /// on screen.
        ///
        /// # Errors
        /// If something goes wrong while drawing to the screen.
        pub fn click(&mut self, column: u16, row: u16) -> Result<&mut Self> {
            self.render_to_string()?;
            self.app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            });
            Ok(self)
        }

        /// Moves the pointer over a cell. Draws first so the hit map matches
        /// what is on screen.
        ///
        /// # Errors
        /// If something goes wrong while drawing to the screen.
        pub fn hover(&mut self, column: u16, row: u16) -> Result<&mut Self> {
            self.render_to_string()?;
            self.app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            });
            Ok(self)
        }
    }
}
