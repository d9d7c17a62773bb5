use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;

use super::app_state::App;
use crate::toast::render_toasts;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.render_at(frame, Instant::now());
    }

    pub fn render_at(&mut self, frame: &mut Frame, now: Instant) {
        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
        let (body_area, help_area) = (layout[0], layout[1]);

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from("ttoast playground"),
            Line::from(""),
            Line::from(Span::styled(
                "Press Ctrl+Shift+N to run the demo sequence",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered();
        frame.render_widget(body, body_area);

        let help_line = Paragraph::new(" Ctrl+Shift+N demo | s/e/w/i sample toasts | q quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help_line, help_area);

        // Toasts render last so they sit on top of everything else
        if let Some(stack) = self.notifier.stack() {
            render_toasts(frame, stack, now, self.corner);
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
