use binsout_core::model::{BinType, ServiceArea};
use binsout_core::service::Resolution;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::app::{AppState, Phase, ViewMode};

pub(crate) fn draw(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();

    // Outer layout: title, search input, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, input_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let header = Paragraph::new("binsout.com.au – your local bin collection guide")
        .block(Block::default().borders(Borders::ALL).title("BinsOut"));
    frame.render_widget(header, *header_area);

    // Search input
    let input = Paragraph::new(state.query.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search your address (Enter to search)"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(input, *input_area);

    // Main content
    match &state.phase {
        Phase::Idle => draw_idle(frame, *content_area),
        Phase::Loading { .. } => draw_loading(frame, *content_area),
        Phase::NoResults { query } => draw_no_results(frame, query, *content_area),
        Phase::Failed { message } => draw_failed(frame, message, *content_area),
        Phase::Found(resolution) => match state.view {
            ViewMode::List => draw_schedule_list(frame, resolution, *content_area),
            ViewMode::Map => draw_area_map(frame, state, resolution, *content_area),
        },
    }

    // Status bar
    let nav_hint = match state.phase {
        Phase::Found(_) => {
            "Type to edit · Enter search · Tab list/map view · F1/F2 examples · Esc quit"
        }
        _ => "Type to edit · Enter search · F1/F2 examples · Esc quit",
    };

    let status_text = if matches!(state.phase, Phase::Loading { .. }) {
        format!("Searching… · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = match state.phase {
        Phase::Failed { .. } => Style::default().fg(Color::Red),
        Phase::Loading { .. } => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_idle(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("Never miss bin day again! 🗑️"),
        Line::from(""),
        Line::from(
            "Enter your address to find your local council's bin collection schedule for",
        ),
        Line::from("general waste, recycling, and green waste."),
        Line::from(""),
        Line::from("Try these examples: F1 fills \"Doncaster\" · F2 fills \"Donvale\""),
        Line::from(""),
        Line::from(Span::styled(
            "Get the BinsOut app – iOS and Android downloads coming soon.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Welcome"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new("Searching…")
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_no_results(frame: &mut Frame<'_>, query: &str, area: Rect) {
    let message = format!(
        "No results found for \"{query}\". Try searching for \"Doncaster\" or \"Donvale\" to see example data."
    );
    let paragraph = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_failed(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let paragraph = Paragraph::new(message.to_owned())
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn found_banner(resolution: &Resolution) -> String {
    match &resolution.council {
        Some(council) => format!(
            "Found: {} – {}",
            resolution.address.label, council.area.meta.name
        ),
        None => format!(
            "Found: {} – council undetermined",
            resolution.address.label
        ),
    }
}

fn draw_schedule_list(frame: &mut Frame<'_>, resolution: &Resolution, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // found banner
            Constraint::Min(0),    // schedule table
            Constraint::Length(3), // council contact
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [banner_area, table_area, contact_area] = chunks else {
        return;
    };

    let banner = Paragraph::new(found_banner(resolution))
        .block(Block::default().borders(Borders::ALL).title("Match"))
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, *banner_area);

    let Some(council) = &resolution.council else {
        let paragraph = Paragraph::new(
            "We found your address, but it sits outside every council area we know about. \
             Contact your local council directly for collection days.",
        )
        .block(Block::default().borders(Borders::ALL).title("Schedule"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *table_area);
        return;
    };

    let rows = BinType::ALL.into_iter().map(|bin| {
        let rule = council.schedule.rule(bin);
        Row::new(vec![
            Cell::from(format!("{} {}", bin.glyph(), bin.display_name())),
            Cell::from(rule.day_name()),
            Cell::from(rule.cadence.to_string()),
        ])
        .style(Style::default().fg(bin_color(bin)))
    });

    let column_widths = [
        Constraint::Length(20),
        Constraint::Length(12),
        Constraint::Min(22),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Bin", "Day", "Cadence"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Schedule"))
        .column_spacing(1);
    frame.render_widget(table, *table_area);

    let contact = Paragraph::new(format!(
        "{} · {} · {}",
        council.area.meta.name, council.area.meta.contact.phone, council.area.meta.contact.email
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Council Information"),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(contact, *contact_area);
}

fn draw_area_map(frame: &mut Frame<'_>, state: &AppState, resolution: &Resolution, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // found banner
            Constraint::Min(0),    // colored council blocks
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [banner_area, map_area] = chunks else {
        return;
    };

    let banner = Paragraph::new(found_banner(resolution))
        .block(Block::default().borders(Borders::ALL).title("Match"))
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, *banner_area);

    if state.areas.is_empty() {
        let paragraph = Paragraph::new("No council areas registered.")
            .block(Block::default().borders(Borders::ALL).title("Council Areas"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *map_area);
        return;
    }

    let slot_count = u32::try_from(state.areas.len()).unwrap_or(1);
    let constraints = state
        .areas
        .iter()
        .map(|_| Constraint::Ratio(1, slot_count))
        .collect::<Vec<Constraint>>();

    let slot_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(*map_area);

    for (slot, council_area) in slot_chunks.iter().zip(state.areas.iter()) {
        frame.render_widget(area_block(council_area, resolution), *slot);
    }
}

/// One colored block per council, with a marker when the resolved address
/// falls inside its bounds.
fn area_block(area: &ServiceArea, resolution: &Resolution) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(area.meta.name.clone())];

    if area.bounds.contains(resolution.address.coordinate) {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("📍 {}", resolution.address.label)));
    }

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .bg(hex_color(&area.color))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
}

fn bin_color(bin: BinType) -> Color {
    match bin.color_tag() {
        "red" => Color::Red,
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        _ => Color::White,
    }
}

/// Parse a `#rrggbb` string into an RGB color, falling back to gray when the
/// string is malformed.
fn hex_color(hex: &str) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let mut channels = [0u8; 3];
    let mut chars = digits.chars();

    for channel in &mut channels {
        let high = chars.next().and_then(|digit| digit.to_digit(16));
        let low = chars.next().and_then(|digit| digit.to_digit(16));
        match (high, low) {
            (Some(high), Some(low)) => {
                *channel = u8::try_from(high * 16 + low).unwrap_or(u8::MAX);
            }
            _ => return Color::Gray,
        }
    }

    if chars.next().is_some() {
        return Color::Gray;
    }

    let [red, green, blue] = channels;
    Color::Rgb(red, green, blue)
}
