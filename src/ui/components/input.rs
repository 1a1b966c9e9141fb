use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Single-line text input backed by [`TextArea`].
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Create an input pre-filled with `initial` and the cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let initial: String = initial.into();
		let first_line = initial.lines().next().unwrap_or_default().to_string();
		let mut textarea = TextArea::new(vec![first_line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Show `text` in `style` while the input is empty.
	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key press to the input. Returns `true` if the text changed.
	///
	/// Keys that would split the input across lines are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		if is_line_break(&input) {
			return false;
		}
		self.textarea.input(input)
	}

	pub fn render_textarea(&self, frame: &mut ratatui::Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(input: &Input) -> bool {
	match input.key {
		Key::Enter => true,
		Key::Char('m' | 'j') => input.ctrl,
		_ => false,
	}
}
