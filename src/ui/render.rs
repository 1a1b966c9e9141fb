use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{Paragraph, Wrap},
};

use super::App;
use super::components::{
	InputContext, LoadingState, ResultView, render_input_row, render_result,
};

impl<'a> App<'a> {
	pub(crate) fn draw(&self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let header_height = self.header_height(area.width);
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(header_height),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(area);

		self.render_header(frame, layout[0]);

		let input_ctx = InputContext {
			search_input: &self.search_input,
			prompt: &self.ui.prompt,
			area: layout[1],
			theme: &self.theme,
		};
		let loading = LoadingState {
			loading: self.is_loading(),
			label: &self.ui.loading_label,
			throbber_state: &self.throbber_state,
		};
		render_input_row(frame, input_ctx, loading);

		let view = match self.result() {
			Some(record) => ResultView::Record {
				title: &record.title,
				revealed: self.revealed_text(),
			},
			None => ResultView::Empty {
				message: &self.ui.empty_message,
			},
		};
		render_result(frame, layout[3], view, &self.theme);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(self.header(), area);
	}

	fn header(&self) -> Paragraph<'_> {
		let mut lines = vec![Line::from(Span::styled(
			self.ui.title.as_str(),
			self.theme.header_style(),
		))];
		if !self.ui.intro.is_empty() {
			lines.push(Line::from(Span::styled(
				self.ui.intro.as_str(),
				self.theme.empty_style(),
			)));
		}
		Paragraph::new(lines).wrap(Wrap { trim: true })
	}

	/// Rows the header occupies once word-wrapped to `width` columns.
	pub(crate) fn header_height(&self, width: u16) -> u16 {
		let rows = self.header().line_count(width.max(1));
		u16::try_from(rows).unwrap_or(u16::MAX)
	}
}
