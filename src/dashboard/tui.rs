//! One-screen terminal dashboard.
//!
//! Renders the resolved widget layout with ratatui: KPI tiles on top, the
//! main progress/maturity row in the middle, activity and critical items at
//! the bottom. Read-only; `q` or `Esc` exits.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Gauge, List, ListItem, Paragraph},
    Frame, Terminal,
};

use super::layout::{DashboardLayout, KpiRow, MainRow};
use crate::analysis::DependencyReport;
use crate::fs::RoadmapSnapshot;
use crate::models::{MilestoneStatus, Priority, QuickWinStatus, WidgetKind};

/// Poll timeout for the event loop.
const POLL_TIMEOUT: Duration = Duration::from_millis(200);

/// Terminal dashboard application.
pub struct DashboardApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cleaned_up: bool,
}

impl DashboardApp {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self {
            terminal,
            cleaned_up: false,
        })
    }

    /// Draw/poll loop until the user quits.
    pub fn run(
        &mut self,
        snapshot: &RoadmapSnapshot,
        report: &DependencyReport,
        layout: &DashboardLayout,
    ) -> Result<()> {
        let result = self.event_loop(snapshot, report, layout);
        self.cleanup();
        result
    }

    fn event_loop(
        &mut self,
        snapshot: &RoadmapSnapshot,
        report: &DependencyReport,
        layout: &DashboardLayout,
    ) -> Result<()> {
        loop {
            self.terminal
                .draw(|frame| draw(frame, snapshot, report, layout))
                .context("Failed to draw dashboard")?;

            if event::poll(POLL_TIMEOUT).context("Failed to poll events")? {
                if let Event::Key(key) = event::read().context("Failed to read event")? {
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

impl Drop for DashboardApp {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn draw(
    frame: &mut Frame,
    snapshot: &RoadmapSnapshot,
    report: &DependencyReport,
    layout: &DashboardLayout,
) {
    let mut constraints = vec![Constraint::Length(1)];
    if layout.kpi_row.is_some() {
        constraints.push(Constraint::Length(5));
    }
    if layout.main_row != MainRow::Hidden {
        constraints.push(Constraint::Min(8));
    }
    if !layout.bottom_row.is_empty() {
        constraints.push(Constraint::Length(8));
    }
    if layout.show_qol_impact {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut next = 0;
    let mut take = || {
        let area = areas[next];
        next += 1;
        area
    };

    let title = Paragraph::new("cairn dashboard").style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, take());

    if let Some(kpi_row) = &layout.kpi_row {
        render_kpi_row(frame, take(), kpi_row, snapshot, report);
    }
    if layout.main_row != MainRow::Hidden {
        render_main_row(frame, take(), layout.main_row, snapshot);
    }
    if !layout.bottom_row.is_empty() {
        render_bottom_row(frame, take(), &layout.bottom_row, snapshot, report);
    }
    if layout.show_qol_impact {
        render_qol_impact(frame, take(), snapshot);
    }

    let footer = Paragraph::new("q: quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, take());
}

fn render_kpi_row(
    frame: &mut Frame,
    area: Rect,
    row: &KpiRow,
    snapshot: &RoadmapSnapshot,
    report: &DependencyReport,
) {
    let constraints: Vec<Constraint> = row
        .widgets
        .iter()
        .map(|_| Constraint::Ratio(1, row.columns as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (kind, cell) in row.widgets.iter().zip(cells.iter()) {
        let value = kpi_value(*kind, snapshot, report);
        let tile = Paragraph::new(vec![
            Line::from(""),
            Line::from(value).style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .centered()
        .block(Block::bordered().title(kind.display_name()));
        frame.render_widget(tile, *cell);
    }
}

fn kpi_value(kind: WidgetKind, snapshot: &RoadmapSnapshot, report: &DependencyReport) -> String {
    match kind {
        WidgetKind::KpiCapabilities => snapshot.capabilities.len().to_string(),
        WidgetKind::KpiMilestones => snapshot.milestones.len().to_string(),
        WidgetKind::KpiQuickWins => snapshot.quick_wins.len().to_string(),
        WidgetKind::KpiBlocked => report.blocked_count.to_string(),
        _ => String::new(),
    }
}

fn render_main_row(frame: &mut Frame, area: Rect, row: MainRow, snapshot: &RoadmapSnapshot) {
    match row {
        MainRow::Hidden => {}
        MainRow::Single(kind) => render_main_widget(frame, area, kind, snapshot),
        MainRow::Split => {
            // Progress spans two of three columns, maturity takes the third.
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
                .split(area);
            render_main_widget(frame, cells[0], WidgetKind::CapabilityProgress, snapshot);
            render_main_widget(frame, cells[1], WidgetKind::OverallMaturity, snapshot);
        }
    }
}

fn render_main_widget(frame: &mut Frame, area: Rect, kind: WidgetKind, snapshot: &RoadmapSnapshot) {
    match kind {
        WidgetKind::CapabilityProgress => {
            let items: Vec<ListItem> = snapshot
                .capabilities
                .iter()
                .map(|cap| {
                    let pct = (cap.progress() * 100.0).round() as u32;
                    ListItem::new(format!(
                        "{:<30} L{} -> L{}  {pct:>3}%",
                        cap.name, cap.current_level, cap.target_level
                    ))
                })
                .collect();
            let list =
                List::new(items).block(Block::bordered().title(kind.display_name()));
            frame.render_widget(list, area);
        }
        WidgetKind::OverallMaturity => {
            let (current, target) = maturity_averages(snapshot);
            let ratio = if target > 0.0 {
                (current / target).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let gauge = Gauge::default()
                .block(Block::bordered().title(kind.display_name()))
                .gauge_style(Style::default().fg(Color::Cyan))
                .label(format!("avg L{current:.1} of L{target:.1}"))
                .ratio(ratio);
            frame.render_widget(gauge, area);
        }
        _ => {}
    }
}

fn maturity_averages(snapshot: &RoadmapSnapshot) -> (f64, f64) {
    if snapshot.capabilities.is_empty() {
        return (0.0, 0.0);
    }
    let n = snapshot.capabilities.len() as f64;
    let current: f64 = snapshot
        .capabilities
        .iter()
        .map(|c| c.current_level.value() as f64)
        .sum();
    let target: f64 = snapshot
        .capabilities
        .iter()
        .map(|c| c.target_level.value() as f64)
        .sum();
    (current / n, target / n)
}

fn render_bottom_row(
    frame: &mut Frame,
    area: Rect,
    widgets: &[WidgetKind],
    snapshot: &RoadmapSnapshot,
    report: &DependencyReport,
) {
    let constraints: Vec<Constraint> = widgets
        .iter()
        .map(|_| Constraint::Ratio(1, widgets.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (kind, cell) in widgets.iter().zip(cells.iter()) {
        let lines = match kind {
            WidgetKind::RecentActivity => recent_activity(snapshot),
            WidgetKind::CriticalItems => critical_items(snapshot, report),
            _ => Vec::new(),
        };
        let items: Vec<ListItem> = lines.into_iter().map(ListItem::new).collect();
        let list = List::new(items).block(Block::bordered().title(kind.display_name()));
        frame.render_widget(list, *cell);
    }
}

/// Most recently updated records across all three collections.
fn recent_activity(snapshot: &RoadmapSnapshot) -> Vec<String> {
    let mut entries: Vec<(DateTime<Utc>, String)> = Vec::new();

    for cap in &snapshot.capabilities {
        entries.push((cap.updated_at, format!("capability: {}", cap.name)));
    }
    for ms in &snapshot.milestones {
        entries.push((ms.updated_at, format!("milestone: {} [{}]", ms.name, ms.status)));
    }
    for qw in &snapshot.quick_wins {
        entries.push((qw.updated_at, format!("quick win: {} [{}]", qw.name, qw.status)));
    }

    entries.sort_by(|a, b| b.0.cmp(&a.0));
    entries
        .into_iter()
        .take(6)
        .map(|(ts, label)| format!("{} {label}", ts.format("%m-%d %H:%M")))
        .collect()
}

/// Critical-priority items plus dependency-blocked milestones.
fn critical_items(snapshot: &RoadmapSnapshot, report: &DependencyReport) -> Vec<String> {
    let mut lines = Vec::new();

    for ms in &snapshot.milestones {
        if ms.priority == Priority::Critical && ms.status != MilestoneStatus::Completed {
            lines.push(format!("critical: {}", ms.name));
        }
    }
    for chain in &report.blocked_chains {
        lines.push(format!(
            "blocked: {} ({} unresolved)",
            chain.milestone_name,
            chain.blocked_dependencies.len()
        ));
    }

    lines.truncate(6);
    lines
}

fn render_qol_impact(frame: &mut Frame, area: Rect, snapshot: &RoadmapSnapshot) {
    let total = snapshot.quick_wins.len();
    let done = snapshot
        .quick_wins
        .iter()
        .filter(|qw| qw.status == QuickWinStatus::Done)
        .count();
    let ratio = if total > 0 {
        done as f64 / total as f64
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(Block::bordered().title(WidgetKind::QolImpact.display_name()))
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!("{done} of {total} quick wins done"))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}
