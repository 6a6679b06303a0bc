//! Ratatui-based terminal UI.
//!
//! The TUI renders the GDP bar chart and wires mouse hover to the tooltip
//! controller: entering a bar shows the quarter/value popup next to the
//! pointer, leaving it hides the popup. `r` refetches the dataset, `e`
//! exports the current chart as SVG, `q` quits.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::pipeline::{self, RunOutput};
use crate::chart::{Pointer, Tooltip, TooltipState};
use crate::domain::{ChartConfig, ChartRunConfig};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::GdpBarsChart;

/// Default path for the in-TUI SVG export.
const EXPORT_PATH: &str = "gdp.svg";

/// Start the TUI.
pub fn run(config: ChartRunConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen, mouse
/// capture) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

struct App {
    config: ChartRunConfig,
    run: Option<RunOutput>,
    tooltip: Tooltip,
    hovered: Option<usize>,
    status: String,
    /// Terminal cells occupied by the chart canvas in the last frame, used to
    /// translate mouse positions into logical pixels.
    chart_area: Option<Rect>,
}

impl App {
    fn new(config: ChartRunConfig) -> Self {
        let mut app = Self {
            config,
            run: None,
            tooltip: Tooltip::new(),
            hovered: None,
            status: "Loading GDP data...".to_string(),
            chart_area: None,
        };
        app.refresh();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Moved
                        && self.handle_hover(mouse.column, mouse.row)
                    {
                        needs_redraw = true;
                    }
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => {
                self.status = "Loading GDP data...".to_string();
                self.refresh();
            }
            KeyCode::Char('e') => self.export_svg(Path::new(EXPORT_PATH)),
            _ => {}
        }
        false
    }

    /// Hover handling: map the mouse cell into logical pixels, hit-test the
    /// bars, and drive the tooltip state machine. Returns `true` when the
    /// visible state changed.
    fn handle_hover(&mut self, column: u16, row: u16) -> bool {
        let Some(run) = &self.run else {
            return false;
        };
        let Some(area) = self.chart_area else {
            return false;
        };

        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return self.clear_hover();
        }

        let (px, py) = cell_to_px(area, column, row, &self.config.chart);
        let hit = run.layout.bars.iter().position(|bar| bar.contains(px, py));

        match hit {
            Some(index) => {
                let bar = &run.layout.bars[index];
                match self.tooltip.show(bar, Pointer { x: px, y: py }) {
                    Ok(()) => {
                        self.hovered = Some(index);
                        // The tooltip follows the pointer, so every move over
                        // a bar changes the visible state.
                        true
                    }
                    Err(err) => {
                        self.status = err.to_string();
                        self.clear_hover();
                        true
                    }
                }
            }
            None => self.clear_hover(),
        }
    }

    fn clear_hover(&mut self) -> bool {
        let changed = self.hovered.is_some() || self.tooltip.is_visible();
        self.hovered = None;
        self.tooltip.hide();
        changed
    }

    fn refresh(&mut self) {
        self.hovered = None;
        self.tooltip.hide();
        match pipeline::run_chart(&self.config) {
            Ok(run) => {
                self.status = format!(
                    "Loaded {} quarters ({} .. {}).",
                    run.stats.n_points, run.stats.date_min, run.stats.date_max
                );
                self.run = Some(run);
            }
            Err(err) => {
                // Keep any previously rendered dataset; surface the failure.
                self.status = format!("Load failed: {err}");
            }
        }
    }

    fn export_svg(&mut self, path: &Path) {
        let Some(run) = &self.run else {
            self.status = "No dataset to export.".to_string();
            return;
        };
        match crate::io::svg::write_svg(path, &run.layout) {
            Ok(()) => self.status = format!("Wrote {}.", path.display()),
            Err(err) => self.status = format!("SVG export failed: {err}"),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
        self.draw_tooltip(frame);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("gdp", Style::default().fg(Color::Cyan)),
            Span::raw(" - GDP in United States"),
        ]));

        let summary = match &self.run {
            Some(run) => format!(
                "n={} | dates=[{}, {}] | gdp=[${:.1}, ${:.1}] Billions",
                run.stats.n_points,
                run.stats.date_min,
                run.stats.date_max,
                run.stats.value_min,
                run.stats.value_max,
            ),
            None => "no data".to_string(),
        };
        lines.push(Line::from(Span::styled(
            summary,
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_chart(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Gross Domestic Product in Billions")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);
        self.chart_area = Some(inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new(format!("Waiting for data... {}", self.status))
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let widget = GdpBarsChart {
            layout: &run.layout,
            hovered: self.hovered,
        };
        frame.render_widget(widget, inner);

        draw_axis_labels(frame, inner, run, &self.config.chart);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "hover bar: tooltip  r refresh  e export svg  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    /// Floating tooltip popup, positioned from the controller's state.
    fn draw_tooltip(&self, frame: &mut ratatui::Frame<'_>) {
        let TooltipState::Visible { top, left, .. } = self.tooltip.state() else {
            return;
        };
        let Some(area) = self.chart_area else {
            return;
        };

        let lines = self.tooltip.lines();
        if lines.is_empty() {
            return;
        }
        let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 2;
        let height = lines.len() as u16 + 2;

        let (col, row) = px_to_cell(area, *left, *top, &self.config.chart);
        let frame_area = frame.area();
        let col = col.min(frame_area.width.saturating_sub(width));
        let row = row.min(frame_area.height.saturating_sub(height));
        let rect = Rect {
            x: col,
            y: row,
            width,
            height,
        }
        .intersection(frame_area);
        if rect.width < 2 || rect.height < 2 {
            return;
        }

        let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
        let popup = Paragraph::new(text)
            .style(Style::default().fg(Color::Black).bg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, rect);
        frame.render_widget(popup, rect);
    }
}

/// Map a terminal cell (cell center) to logical canvas pixels.
fn cell_to_px(area: Rect, column: u16, row: u16, config: &ChartConfig) -> (f64, f64) {
    let u = (column.saturating_sub(area.x) as f64 + 0.5) / area.width.max(1) as f64;
    let v = (row.saturating_sub(area.y) as f64 + 0.5) / area.height.max(1) as f64;
    (u * config.width, v * config.height)
}

/// Map logical canvas pixels to a terminal cell.
fn px_to_cell(area: Rect, x: f64, y: f64, config: &ChartConfig) -> (u16, u16) {
    let u = (x / config.width).clamp(0.0, 1.0);
    let v = (y / config.height).clamp(0.0, 1.0);
    let col = area.x as f64 + u * area.width.saturating_sub(1) as f64;
    let row = area.y as f64 + v * area.height.saturating_sub(1) as f64;
    (col.round() as u16, row.round() as u16)
}

/// Draw axis tick labels around the chart canvas.
///
/// The Plotters widget draws gridlines and bars; tick text renders much more
/// crisply as plain terminal cells, so the labels come straight from the
/// layout's axis ticks.
fn draw_axis_labels(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    run: &RunOutput,
    config: &ChartConfig,
) {
    let style = Style::default().fg(Color::Gray);

    // Year labels under the baseline.
    let (_, baseline_row) = px_to_cell(area, 0.0, config.baseline(), config);
    let label_row = (baseline_row + 1).min(area.y + area.height.saturating_sub(1));
    for tick in &run.layout.x_axis.ticks {
        let (col, _) = px_to_cell(area, tick.px, 0.0, config);
        let label_len = tick.label.len() as u16;
        let start = col.saturating_sub(label_len / 2);
        if start + label_len > area.x + area.width {
            continue;
        }
        frame.render_widget(
            Paragraph::new(tick.label.clone()).style(style),
            Rect {
                x: start,
                y: label_row,
                width: label_len,
                height: 1,
            },
        );
    }

    // Value labels left of the axis, shifted per the layout's label offset.
    for tick in &run.layout.y_axis.ticks {
        let (_, row) = px_to_cell(area, 0.0, tick.px, config);
        let (end_col, _) = px_to_cell(
            area,
            config.padding + run.layout.y_axis.label_offset,
            0.0,
            config,
        );
        let label_len = tick.label.len() as u16;
        let start = end_col.saturating_sub(label_len);
        if start < area.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(tick.label.clone()).style(style),
            Rect {
                x: start,
                y: row,
                width: label_len,
                height: 1,
            },
        );
    }
}
