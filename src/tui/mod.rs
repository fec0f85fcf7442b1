//! TUI module - progression chart for one exercise (ratatui)

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
};
use std::io::{stdout, Stdout};

use crate::logs::LogEntry;
use crate::progression::{ProgressStats, SeriesPoint, build_series, compute_stats};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Chart viewer state
pub struct App {
    title: String,
    entries: Vec<LogEntry>,
    series: Vec<SeriesPoint>,
    stats: Option<ProgressStats>,
    should_quit: bool,
}

impl App {
    pub fn new(title: String, entries: Vec<LogEntry>) -> Self {
        let series = build_series(&entries);
        let stats = compute_stats(&entries);
        Self {
            title,
            entries,
            series,
            stats,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        let result = self.event_loop(&mut terminal);
        finish_session(result, restore_terminal)
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(8),
                Constraint::Length(3),
            ])
            .split(area);

        // Header with summary stats
        let summary = match self.stats {
            Some(s) => format!(
                "{} | actual {} kg | máx {} kg | mín {} kg",
                self.title, s.current, s.max, s.min
            ),
            None => format!("{} | sin datos suficientes", self.title),
        };
        let header = Paragraph::new(summary)
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        self.render_chart(frame, chunks[1]);

        // Latest entries first
        let rows: Vec<Row> = self
            .entries
            .iter()
            .rev()
            .map(|e| {
                Row::new(vec![
                    Cell::from(e.date.chars().take(10).collect::<String>()),
                    Cell::from(e.weight.clone()),
                    Cell::from(e.reps.clone()),
                    Cell::from(e.notes.clone()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Min(20),
            ],
        )
        .header(Row::new(vec!["Fecha", "Peso", "Reps", "Notas"])
            .style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Registros"));
        frame.render_widget(table, chunks[2]);

        // Footer
        let footer = Paragraph::new("q: salir")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[3]);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let points: Vec<(f64, f64)> = self
            .series
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.weight))
            .collect();

        let (y_min, y_max) = weight_bounds(&self.series);
        let x_max = (points.len().max(2) - 1) as f64;

        let x_labels: Vec<String> = match (self.series.first(), self.series.last()) {
            (Some(first), Some(last)) => vec![first.date.clone(), last.date.clone()],
            _ => vec![],
        };
        let y_labels = vec![format!("{:.0}", y_min), format!("{:.0}", y_max)];

        let datasets = vec![
            Dataset::default()
                .name("kg")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&points),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title("Progresión"))
            .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
            .y_axis(Axis::default().bounds([y_min, y_max]).labels(y_labels));

        frame.render_widget(chart, area);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                        _ => {}
                    }
                }
        Ok(())
    }
}

/// Y axis bounds with a little headroom; flat or empty series still get a range
fn weight_bounds(series: &[SeriesPoint]) -> (f64, f64) {
    if series.is_empty() {
        return (0.0, 1.0);
    }
    let min = series.iter().map(|p| p.weight).fold(f64::MAX, f64::min);
    let max = series.iter().map(|p| p.weight).fold(f64::MIN, f64::max);
    let pad = ((max - min) * 0.1).max(1.0);
    ((min - pad).max(0.0), max + pad)
}

/// Always run `restore`; an error from the loop takes precedence over one from restoring
fn finish_session(result: Result<()>, restore: impl FnOnce() -> Result<()>) -> Result<()> {
    let restored = restore();
    result.and(restored)
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
