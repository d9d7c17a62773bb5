use super::*;
use crate::toast::{Severity, Timings, Toast};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::{Color, Modifier};
use std::time::{Duration, Instant};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn test_timings() -> Timings {
    Timings {
        enter: ms(400),
        display: ms(5000),
        exit: ms(400),
    }
}

fn render_to_terminal(
    stack: &ToastStack,
    now: Instant,
    corner: Corner,
    width: u16,
    height: u16,
) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_toasts(frame, stack, now, corner))
        .unwrap();
    terminal
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for x in 0..buffer.area.width {
        let idx = (y * buffer.area.width + x) as usize;
        text.push_str(buffer.content[idx].symbol());
    }
    text
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| row_text(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn any_cell_with_bg(terminal: &Terminal<TestBackend>, bg: Color) -> bool {
    let buffer = terminal.backend().buffer();
    buffer.content.iter().any(|cell| cell.bg == bg)
}

fn any_cell_dimmed(terminal: &Terminal<TestBackend>) -> bool {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .iter()
        .any(|cell| cell.modifier.contains(Modifier::DIM))
}

#[test]
fn test_visible_toast_shows_message_and_icon() {
    let t0 = Instant::now();
    let mut stack = ToastStack::new();
    stack.push(Toast::new_at("Saved", Severity::Success, test_timings(), t0));

    let terminal = render_to_terminal(&stack, t0 + ms(1000), Corner::BottomRight, 80, 24);

    // Width 11, anchored bottom-right: content on row 20, cols 67..78
    let content_row = row_text(&terminal, 20);
    assert!(content_row.contains("✔ Saved"), "row was: {content_row:?}");
    assert!(any_cell_with_bg(&terminal, Color::Green));
    assert!(!any_cell_dimmed(&terminal));
}

#[test]
fn test_each_severity_renders_its_own_background() {
    let t0 = Instant::now();
    for (severity, bg) in [
        (Severity::Info, Color::Blue),
        (Severity::Success, Color::Green),
        (Severity::Warning, Color::Yellow),
        (Severity::Error, Color::Red),
    ] {
        let mut stack = ToastStack::new();
        stack.push(Toast::new_at("x", severity, test_timings(), t0));
        let terminal = render_to_terminal(&stack, t0 + ms(1000), Corner::BottomRight, 80, 24);
        assert!(
            any_cell_with_bg(&terminal, bg),
            "missing {bg:?} for {severity:?}"
        );
    }
}

#[test]
fn test_fading_toast_is_dimmed_and_offset() {
    let t0 = Instant::now();
    let mut stack = ToastStack::new();
    stack.push(Toast::new_at("Saved", Severity::Success, test_timings(), t0));

    let visible = render_to_terminal(&stack, t0 + ms(1000), Corner::BottomRight, 80, 24);
    let fading = render_to_terminal(&stack, t0 + ms(5200), Corner::BottomRight, 80, 24);

    assert!(any_cell_dimmed(&fading));

    // Mid-exit the toast has slid right: its old left border column is blank
    let visible_row = row_text(&visible, 20);
    let fading_row = row_text(&fading, 20);
    let left_edge = visible_row.char_indices().position(|(_, c)| c != ' ').unwrap();
    let shifted_edge = fading_row.char_indices().position(|(_, c)| c != ' ').unwrap();
    assert!(shifted_edge > left_edge, "{shifted_edge} <= {left_edge}");
}

#[test]
fn test_removed_toast_renders_nothing() {
    let t0 = Instant::now();
    let mut stack = ToastStack::new();
    stack.push(Toast::new_at("Saved", Severity::Success, test_timings(), t0));

    let terminal = render_to_terminal(&stack, t0 + ms(6000), Corner::BottomRight, 80, 24);
    assert!(!buffer_text(&terminal).contains("Saved"));
}

#[test]
fn test_empty_stack_renders_blank_frame() {
    let stack = ToastStack::new();
    let terminal = render_to_terminal(&stack, Instant::now(), Corner::BottomRight, 80, 24);
    assert_eq!(buffer_text(&terminal).trim(), "");
}

#[test]
fn test_newest_toast_takes_the_corner_slot() {
    let t0 = Instant::now();
    let mut stack = ToastStack::new();
    stack.push(Toast::new_at("first", Severity::Info, test_timings(), t0));
    stack.push(Toast::new_at("second", Severity::Info, test_timings(), t0));

    let terminal = render_to_terminal(&stack, t0 + ms(1000), Corner::BottomRight, 80, 24);

    // Slot 0 (rows 19..22) holds the newest, slot 1 (rows 16..19) the older
    assert!(row_text(&terminal, 20).contains("second"));
    assert!(row_text(&terminal, 17).contains("first"));
}

#[test]
fn test_top_right_corner_renders_at_the_top() {
    let t0 = Instant::now();
    let mut stack = ToastStack::new();
    stack.push(Toast::new_at("up here", Severity::Info, test_timings(), t0));

    let terminal = render_to_terminal(&stack, t0 + ms(1000), Corner::TopRight, 80, 24);
    assert!(row_text(&terminal, 3).contains("up here"));
}

#[test]
fn test_tiny_frame_renders_nothing_without_panicking() {
    let t0 = Instant::now();
    let mut stack = ToastStack::new();
    stack.push(Toast::new_at("squeeze", Severity::Info, test_timings(), t0));

    let terminal = render_to_terminal(&stack, t0 + ms(1000), Corner::BottomRight, 4, 3);
    assert_eq!(buffer_text(&terminal).trim(), "");
}

#[test]
fn test_overflowing_toasts_are_skipped_not_lost() {
    let t0 = Instant::now();
    let mut stack = ToastStack::new();
    for i in 0..10 {
        stack.push(Toast::new_at(
            format!("toast-{i}"),
            Severity::Info,
            test_timings(),
            t0,
        ));
    }

    // 24 rows fit 6 slots; rendering must not panic and the stack keeps all 10
    let _ = render_to_terminal(&stack, t0 + ms(1000), Corner::BottomRight, 80, 24);
    assert_eq!(stack.len(), 10);
}
