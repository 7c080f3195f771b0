//! Rendering - drawing the roadmap, editor, preview, and overlays.

use super::state::{InstructionTab, TuiState, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use tagtrek_core::{catalog, Level, LevelStatus, LAST_LEVEL_ID, SCORE_PER_LEVEL};

pub fn draw_ui(f: &mut Frame, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(5),    // content
            Constraint::Length(1), // status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], state);

    match state.view {
        View::Roadmap => draw_roadmap(f, chunks[1], state),
        View::Editor => draw_editor_view(f, chunks[1], state),
    }

    draw_status_bar(f, chunks[2], state);

    if state.show_success {
        draw_success_modal(f, f.size(), state);
    }
    if state.show_help {
        draw_help_overlay(f, f.size(), state);
    }
}

/// Top bar: brand on the left, EXP and LEVEL on the right.
fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let stats = format!(
        "EXP {}  ·  LEVEL {}/{} ",
        state.progress.score(),
        state.progress.frontier(),
        LAST_LEVEL_ID
    );
    let brand = " TagTrek — HTML missions";
    let pad = (area.width as usize)
        .saturating_sub(brand.chars().count() + stats.chars().count());

    let line = Line::from(vec![
        Span::styled(brand, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(pad)),
        Span::styled(stats, Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_roadmap(f: &mut Frame, area: Rect, state: &TuiState) {
    let items: Vec<ListItem> = catalog()
        .iter()
        .map(|level| roadmap_item(level, state))
        .collect();

    let title = if state.catalog_complete {
        " Mission Map — all missions complete, Officer! "
    } else {
        " Mission Map "
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 70))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.roadmap_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn roadmap_item(level: &'static Level, state: &TuiState) -> ListItem<'static> {
    let (marker, style) = match state.progress.status_of(level.id) {
        LevelStatus::Completed => ("✔", Style::default().fg(Color::Green)),
        LevelStatus::Unlocked => ("▸", Style::default().fg(Color::Cyan)),
        LevelStatus::Locked => ("✖", Style::default().fg(Color::DarkGray)),
    };
    let text = format!(" {marker} Mission {:02}  {}", level.id, level.mission_name);
    ListItem::new(Line::from(Span::styled(text, style)))
}

fn draw_editor_view(f: &mut Frame, area: Rect, state: &TuiState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_instruction_panel(f, columns[0], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    draw_editor_pane(f, right[0], state);
    draw_preview_pane(f, right[1], state);
}

fn draw_instruction_panel(f: &mut Frame, area: Rect, state: &TuiState) {
    let level = state.current_level();
    let title = format!(" Mission {:02} — {} ", level.id, level.mission_name);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width.max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();

    // Tab strip.
    let (briefing_style, mission_style) = match state.tab {
        InstructionTab::Briefing => (active_tab(), inactive_tab()),
        InstructionTab::Mission => (inactive_tab(), active_tab()),
    };
    lines.push(Line::from(vec![
        Span::styled(" Briefing ", briefing_style),
        Span::raw("  "),
        Span::styled(" Mission ", mission_style),
        Span::styled("   (Tab to switch)", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::default());

    match state.tab {
        InstructionTab::Briefing => briefing_lines(level, width, &mut lines),
        InstructionTab::Mission => mission_lines(level, width, &mut lines),
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn active_tab() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn inactive_tab() -> Style {
    Style::default().fg(Color::Gray)
}

fn push_wrapped(lines: &mut Vec<Line>, text: &str, width: usize, style: Style) {
    for piece in textwrap::wrap(text, width) {
        lines.push(Line::from(Span::styled(piece.into_owned(), style)));
    }
}

fn briefing_lines(level: &'static Level, width: usize, lines: &mut Vec<Line>) {
    lines.push(Line::from(Span::styled(
        format!("Concept: {}", level.title),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    push_wrapped(lines, level.simple_explanation, width, Style::default());

    if let Some(tag) = level.visual_tag {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("[concept diagram: {tag}]"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(analogy) = level.analogy {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Analogy",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )));
        push_wrapped(
            lines,
            &format!("\u{201c}{analogy}\u{201d}"),
            width,
            Style::default().fg(Color::Magenta),
        );
    }
}

fn mission_lines(level: &'static Level, width: usize, lines: &mut Vec<Line>) {
    lines.push(Line::from(Span::styled(
        "Objectives",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    push_wrapped(lines, level.description, width, Style::default());
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Task",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    push_wrapped(
        lines,
        level.instruction,
        width,
        Style::default().fg(Color::Yellow),
    );

    if let Some(snippet) = level.example_snippet {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Reference",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        for snippet_line in snippet.split('\n') {
            lines.push(Line::from(Span::styled(
                format!("  {snippet_line}"),
                Style::default().fg(Color::Green),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press Ctrl+R to deploy your code.",
        Style::default().fg(Color::DarkGray),
    )));
}

fn draw_editor_pane(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default().borders(Borders::ALL).title(" Editor ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (row, col) = state.editor.cursor();
    let height = inner.height.max(1) as usize;
    let scroll = row.saturating_sub(height - 1);

    let lines: Vec<Line> = state
        .editor
        .lines()
        .iter()
        .map(|l| Line::from(l.clone()))
        .collect();

    f.render_widget(
        Paragraph::new(lines).scroll((scroll as u16, 0)),
        inner,
    );

    // Show the cursor only while the editor has focus.
    if !state.show_success && !state.show_help {
        let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (row - scroll) as u16;
        f.set_cursor(x, y);
    }
}

/// Live preview: the learner's markup rendered to plain text. Best effort;
/// the preview is a rendering collaborator, not part of grading.
fn draw_preview_pane(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default().borders(Borders::ALL).title(" Live Preview ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width.max(1) as usize;
    let rendered = html2text::from_read(state.editor.text().as_bytes(), width);
    let lines: Vec<Line> = rendered
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    let (text, style) = match &state.status_line {
        Some(msg) => (
            format!(" {msg}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => {
            let hint = match state.view {
                View::Roadmap => " ↑/↓ select · Enter open · q quit · F1 help",
                View::Editor => " Ctrl+R run · Tab briefing/mission · Ctrl+U restart · Esc map · F1 help",
            };
            (hint.to_string(), Style::default().fg(Color::DarkGray))
        }
    };
    f.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), area);
}

fn draw_success_modal(f: &mut Frame, area: Rect, state: &TuiState) {
    let popup = centered_rect(46, 9, area);
    f.render_widget(Clear, popup);

    let at_last = state.progress.current() == LAST_LEVEL_ID;
    let next_hint = if at_last {
        "[Enter] Finish"
    } else {
        "[Enter] Next mission"
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Mission Accomplished!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from("Good work, Cadet. Concept secured.").alignment(Alignment::Center),
        Line::from(Span::styled(
            format!("+{SCORE_PER_LEVEL} EXP"),
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(format!("{next_hint}   [Esc] Return to map")).alignment(Alignment::Center),
    ];

    let modal = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(modal, popup);
}

fn draw_help_overlay(f: &mut Frame, area: Rect, state: &TuiState) {
    let popup = centered_rect(52, 12, area);
    f.render_widget(Clear, popup);

    let keys: &[(&str, &str)] = match state.view {
        View::Roadmap => &[
            ("↑/↓ or k/j", "move between missions"),
            ("Enter", "open the selected mission"),
            ("q / Ctrl+C", "quit"),
        ],
        View::Editor => &[
            ("Ctrl+R", "run the validator on your code"),
            ("Tab", "switch Briefing / Mission tab"),
            ("Ctrl+U", "restore the starter code"),
            ("Esc", "back to the mission map"),
            ("Ctrl+C", "quit"),
        ],
    };

    let mut lines = vec![Line::default()];
    for (key, action) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Cyan)),
            Span::raw(*action),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from("Press any key to close.").alignment(Alignment::Center));

    let overlay = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(overlay, popup);
}

/// A fixed-size rectangle centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
