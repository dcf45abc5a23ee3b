//! Stateless UI rendering for the coach.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
};
use strictly_bubble::{BarRole, CHART_TITLE, Chart};

use super::app::App;
use super::input::KEY_HELP;

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Array
            Constraint::Min(10),    // Chart
            Constraint::Length(4),  // Feedback
            Constraint::Length(3),  // Steps
            Constraint::Length(10), // History
            Constraint::Length(1),  // Keys
        ])
        .split(area);

    let subtitle = if app.is_auto() { " (auto sort)" } else { "" };
    let title = Paragraph::new(format!("Bubble Sort Game{}", subtitle))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let array = Paragraph::new(format!("{:?}", snapshot.array()))
        .block(Block::default().title("Current Array").borders(Borders::ALL));
    frame.render_widget(array, chunks[1]);

    frame.render_widget(bar_chart(snapshot.chart()), chunks[2]);

    let feedback = Paragraph::new(snapshot.feedback())
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Feedback").borders(Borders::ALL));
    frame.render_widget(feedback, chunks[3]);

    let steps = Paragraph::new(snapshot.steps_text())
        .block(Block::default().title("Step Tracker").borders(Borders::ALL));
    frame.render_widget(steps, chunks[4]);

    draw_history(frame, chunks[5], snapshot.history_text());

    let keys = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[6]);
}

/// Shows the newest history lines that fit.
fn draw_history(frame: &mut Frame, area: Rect, history: &str) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<&str> = history.lines().collect();
    let start = lines.len().saturating_sub(visible);
    let text = lines[start..].join("\n");

    let paragraph = Paragraph::new(text)
        .block(Block::default().title("History Log").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn bar_color(role: BarRole) -> Color {
    match role {
        BarRole::Normal => Color::LightBlue,
        BarRole::First => ORANGE,
        BarRole::Second => Color::Red,
    }
}

/// Converts the chart model into a ratatui bar chart.
fn bar_chart(chart: &Chart) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = chart
        .bars()
        .iter()
        .map(|bar| {
            let color = bar_color(bar.role);
            Bar::default()
                .value(u64::from(bar.value))
                .label(Line::from(bar.index.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    BarChart::default()
        .block(Block::default().title(CHART_TITLE).borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .max(u64::from(chart.axis_max()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_bubble::{Command, Decision, ListSpec};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_all_panels() {
        let app = App::new(ListSpec::new(4, 1, 9), StdRng::seed_from_u64(8)).unwrap();
        let screen = render(&app);
        for label in [
            "Bubble Sort Game",
            "Current Array",
            CHART_TITLE,
            "Feedback",
            "Steps: 0",
            "History Log",
        ] {
            assert!(screen.contains(label), "missing {}", label);
        }
        assert!(screen.contains("New list generated"));
    }

    #[test]
    fn test_history_shows_latest_step() {
        let mut app = App::new(ListSpec::new(4, 1, 9), StdRng::seed_from_u64(8)).unwrap();
        while app.session().is_done() {
            app.handle(Command::Generate);
        }
        app.handle(Command::Decide(Decision::Swap));
        let screen = render(&app);
        assert!(screen.contains("Step 1:"));
        assert!(screen.contains("Steps: 1"));
    }

    #[test]
    fn test_bar_colors_follow_roles() {
        assert_eq!(bar_color(BarRole::First), ORANGE);
        assert_eq!(bar_color(BarRole::Second), Color::Red);
        assert_eq!(bar_color(BarRole::Normal), Color::LightBlue);
    }
}
