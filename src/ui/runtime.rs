//! Terminal setup and the event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
	Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::state::App;
use crate::search::SearchOutcome;

impl App<'_> {
	/// Pump the terminal event loop until the user exits with an outcome.
	pub(crate) fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			match event_rx.recv() {
				Ok(event) => pending_events.push_back(event),
				Err(_) => break Err(anyhow!("input event channel disconnected")),
			}
			pending_events.extend(event_rx.try_iter());

			while let Some(event) = pending_events.pop_front() {
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
					Event::Paste(text) => {
						self.handle_paste(&text);
						None
					}
					Event::Mouse(mouse) => {
						self.handle_mouse(mouse);
						None
					}
					_ => None,
				};
				if let Some(outcome) = outcome {
					break 'event_loop Ok(outcome);
				}
			}
		};

		ratatui::restore();
		execute!(stdout(), DisableBracketedPaste, DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
