use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use showdeck_core::app::{ErrorPage, LoadingPage, PageSelection, ReadyPage};
use showdeck_core::domain::DataDomain;
use super::model::TuiModel;

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let size = frame.area();

        match model.page() {
            PageSelection::Error(page) => Self::render_error_page(&page, frame, size),
            PageSelection::Loading(page) => Self::render_loading_page(&page, frame, size),
            PageSelection::Ready(page) => Self::render_ready_page(model, &page, frame, size),
        }

        if !model.errors.is_empty() {
            Self::render_error_overlay(model, frame, size);
        }
    }

    fn render_error_page(page: &ErrorPage<'_>, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Failed to load showdeck",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for failure in page.failures() {
            lines.push(Line::from(format!("  • {}", failure)));
        }

        lines.push(Line::from(""));
        if page.props.readiness.has_error {
            lines.push(Line::from("Press r to retry the failed domains, q to quit"));
        } else {
            lines.push(Line::from("Make sure the state directory is writable, then restart. Press q to quit"));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Error"))
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, Self::centered_rect(70, 60, area));
    }

    fn render_loading_page(page: &LoadingPage<'_>, frame: &mut Frame, area: Rect) {
        let inner = Self::centered_rect(50, 50, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let populated = page.props.domains.populated_count();
        let total = DataDomain::ALL.len();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Loading"))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(populated as f64 / total as f64)
            .label(format!("{}/{}", populated, total));
        frame.render_widget(gauge, chunks[0]);

        let items: Vec<ListItem> = page
            .props
            .domains
            .iter()
            .map(|(domain, status)| {
                let (marker, color) = if status.is_populated {
                    ("✓", Color::Green)
                } else {
                    ("⋯", Color::Yellow)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(color)),
                    Span::raw(" "),
                    Span::raw(domain.label()),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items), chunks[1]);
    }

    fn render_ready_page(model: &TuiModel, page: &ReadyPage<'_>, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        Self::render_header(page, frame, chunks[0]);

        let chrome = page.props.chrome;
        // Small screens overlay the sidebar instead of reserving a column for it
        let body = if chrome.is_sidebar_visible && !page.props.dimensions.is_small_screen {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(24), Constraint::Min(0)])
                .split(chunks[1]);
            Self::render_sidebar(model, page, frame, columns[0]);
            columns[1]
        } else {
            chunks[1]
        };

        Self::render_library(model, page, frame, body);

        if chrome.is_sidebar_visible && page.props.dimensions.is_small_screen {
            let overlay = Rect { width: body.width.min(24), ..body };
            frame.render_widget(Clear, overlay);
            Self::render_sidebar(model, page, frame, overlay);
        }

        let hints = Paragraph::new("b Toggle sidebar | q Quit").style(Style::default().fg(Color::Gray));
        frame.render_widget(hints, chunks[2]);
    }

    fn render_header(page: &ReadyPage<'_>, frame: &mut Frame, area: Rect) {
        let chrome = page.props.chrome;
        let mut spans = vec![Span::styled(
            " showdeck",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if !chrome.version.is_empty() {
            spans.push(Span::raw(format!(" v{}", chrome.version)));
        }
        if chrome.is_updated {
            spans.push(Span::styled(" [UPDATED - restart]", Style::default().fg(Color::Yellow)));
        }
        if chrome.is_disconnected {
            spans.push(Span::styled(" [DISCONNECTED]", Style::default().fg(Color::Red)));
        }

        let header = Paragraph::new(Line::from(spans))
            .style(Style::default().fg(Color::White).bg(Color::Blue));
        frame.render_widget(header, area);
    }

    fn render_sidebar(model: &TuiModel, page: &ReadyPage<'_>, frame: &mut Frame, area: Rect) {
        let accent = Self::accent(page);
        let items: Vec<ListItem> = DataDomain::ALL
            .iter()
            .map(|domain| {
                ListItem::new(Line::from(vec![
                    Span::styled(domain.label(), Style::default().fg(accent)),
                    Span::raw(format!(" ({})", model.projection.item_count(*domain))),
                ]))
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Library"));
        frame.render_widget(list, area);
    }

    fn render_library(model: &TuiModel, page: &ReadyPage<'_>, frame: &mut Frame, area: Rect) {
        let series = model.projection.item_count(DataDomain::Series);
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} series in library", series),
                Style::default().fg(Self::accent(page)).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(message) = model.last_message() {
            lines.push(Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Gray))));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Series"))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    /// Accent color; color-impaired mode avoids the green/red axis
    fn accent(page: &ReadyPage<'_>) -> Color {
        if page.props.ui_settings.enable_color_impaired_mode {
            Color::LightBlue
        } else {
            Color::Green
        }
    }

    /// Render error overlay
    fn render_error_overlay(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 20, area);

        frame.render_widget(Clear, popup_area);

        let error_text: Vec<Line> = model.errors.iter().map(|error| Line::from(error.as_str())).collect();

        let error_popup = Paragraph::new(error_text)
            .block(Block::default().borders(Borders::ALL).title("Errors (Esc to dismiss)"))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });

        frame.render_widget(error_popup, popup_area);
    }

    /// Helper to create centered rectangle
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
