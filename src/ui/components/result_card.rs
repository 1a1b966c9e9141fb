use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::style::Theme;

/// What the result area should show this frame.
pub enum ResultView<'a> {
	/// A record is available; `revealed` is the animated prefix of its description.
	Record { title: &'a str, revealed: &'a str },
	/// No record is held.
	Empty { message: &'a str },
}

/// Render the single result slot.
pub fn render_result(frame: &mut Frame, area: Rect, view: ResultView<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	match view {
		ResultView::Record { title, revealed } => {
			let block = Block::default()
				.borders(Borders::ALL)
				.border_style(theme.border_style())
				.title(Line::from(Span::styled(
					format!(" {title} "),
					theme.highlight_style(),
				)));
			let body = Paragraph::new(revealed.to_string())
				.block(block)
				.wrap(Wrap { trim: false });
			frame.render_widget(body, area);
		}
		ResultView::Empty { message } => {
			let empty = Paragraph::new(message.to_string())
				.alignment(Alignment::Center)
				.style(theme.empty_style());
			frame.render_widget(empty, area);
		}
	}
}
