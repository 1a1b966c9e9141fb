use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub prompt: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Loading indicator shown at the right edge of the input row.
pub struct LoadingState<'a> {
	pub loading: bool,
	pub label: &'a str,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the text input and, while a lookup is in flight, a spinner.
pub fn render_input_row(
	frame: &mut ratatui::Frame,
	input: InputContext<'_>,
	loading: LoadingState<'_>,
) {
	let InputContext {
		search_input,
		prompt,
		area,
		theme,
	} = input;

	let prompt_width = calculate_prompt_width(prompt);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(layout_constraints(prompt_width))
		.split(area);

	if prompt_width > 0 {
		let prompt_widget = Paragraph::new(format!("{prompt} > ")).style(theme.prompt_style());
		frame.render_widget(prompt_widget, horizontal[0]);
	}

	let input_area = horizontal[horizontal.len() - 1];
	search_input.render_textarea(frame, input_area);

	if loading.loading {
		render_loading(frame, input_area, loading.label, loading.throbber_state, theme);
	}
}

fn calculate_prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		u16::try_from(prompt.width())
			.unwrap_or(u16::MAX)
			.saturating_add(3)
	}
}

fn layout_constraints(prompt_width: u16) -> Vec<Constraint> {
	if prompt_width > 0 {
		vec![Constraint::Length(prompt_width), Constraint::Min(1)]
	} else {
		vec![Constraint::Min(1)]
	}
}

fn render_loading(
	frame: &mut ratatui::Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(muted_style);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(throbber_state));
	if !label.is_empty() {
		line.spans.push(Span::styled(label.to_string(), muted_style));
	}

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Never draw over the typed query; leave a small gap after its last glyph.
	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);
	if max_width == 0 {
		return;
	}

	buffer.set_line(start_x, input_row, &line, max_width);
}

#[cfg(test)]
mod tests {
	use super::*;
	use ratatui::{Terminal, backend::TestBackend};

	fn first_row(terminal: &Terminal<TestBackend>) -> String {
		let buffer = terminal.backend().buffer();
		let width = buffer.area.width as usize;
		buffer
			.content
			.chunks(width)
			.next()
			.expect("first row available")
			.iter()
			.map(|cell| cell.symbol())
			.collect()
	}

	fn draw(input: &SearchInput<'_>, loading: bool) -> String {
		let mut terminal = Terminal::new(TestBackend::new(50, 1)).expect("create terminal");
		let theme = Theme::default();
		let throbber_state = ThrobberState::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_input_row(
					frame,
					InputContext {
						search_input: input,
						prompt: "Search",
						area,
						theme: &theme,
					},
					LoadingState {
						loading,
						label: "Searching",
						throbber_state: &throbber_state,
					},
				);
			})
			.expect("render frame");
		first_row(&terminal)
	}

	#[test]
	fn prompt_width_accounts_for_separator() {
		assert_eq!(calculate_prompt_width(""), 0);
		assert_eq!(calculate_prompt_width("Search"), 9);
	}

	#[test]
	fn layout_without_prompt_is_a_single_column() {
		assert_eq!(layout_constraints(0).len(), 1);
		assert!(matches!(layout_constraints(9)[0], Constraint::Length(9)));
	}

	#[test]
	fn spinner_is_only_drawn_while_loading() {
		let input = SearchInput::new("vacation");

		let idle = draw(&input, false);
		assert!(idle.contains("Search > "));
		assert!(idle.contains("vacation"));
		assert!(!idle.contains("Searching"));

		let busy = draw(&input, true);
		assert_eq!(
			busy.trim_end(),
			format!("Search > vacation{}⠷ Searching", " ".repeat(22))
		);
	}

	#[test]
	fn spinner_never_covers_a_long_query() {
		let query = "x".repeat(38);
		let input = SearchInput::new(query.clone());

		let busy = draw(&input, true);
		assert!(busy.starts_with(&format!("Search > {query}  ")), "{busy}");
		assert!(!busy.contains("Searching"), "{busy}");
	}
}
