use anyhow::{Context, Result};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame, Terminal,
};

use super::scene::{Hud, Rgb, Scene, Shape, ShapeKind};

/// Anything that can put a finished scene in front of the player
pub trait SceneRenderer {
    fn present(&mut self, scene: &Scene) -> Result<()>;
}

/// Draws scenes with ratatui. Each board cell becomes two terminal columns
/// and one row, so the 640x480 board needs 66x26 characters with its border.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene) {
        let (columns, rows) = board_size(scene);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),        // Header
                Constraint::Length(rows + 2), // Board
                Constraint::Length(1),        // Footer
                Constraint::Min(0),
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(&scene.hud), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(columns * 2 + 2), Constraint::Min(0)])
            .split(chunks[1])[0];
        frame.render_widget(self.render_board(board_area, scene), board_area);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, _area: Rect, scene: &Scene) -> Paragraph<'_> {
        let (columns, rows) = board_size(scene);
        let empty = Span::styled("  ", Style::default().bg(color(scene.background)));
        let mut grid = vec![vec![empty; columns as usize]; rows as usize];

        for shape in &scene.shapes {
            if shape.cell.x < 0 || shape.cell.y < 0 {
                continue;
            }
            let column = (shape.cell.x / scene.cell_size) as usize;
            let row = (shape.cell.y / scene.cell_size) as usize;

            if let Some(slot) = grid.get_mut(row).and_then(|line| line.get_mut(column)) {
                *slot = shape_span(shape, scene.background);
            }
        }

        let lines: Vec<Line> = grid.into_iter().map(Line::from).collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, hud: &Hud) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                hud.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.length.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.elapsed.clone(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Left)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Left)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn board_size(scene: &Scene) -> (u16, u16) {
    let columns = (scene.width / scene.cell_size).clamp(0, i32::from(u16::MAX / 4));
    let rows = (scene.height / scene.cell_size).clamp(0, i32::from(u16::MAX / 4));
    (columns as u16, rows as u16)
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn shape_span(shape: &Shape, background: Rgb) -> Span<'static> {
    match (shape.kind, shape.outline) {
        (ShapeKind::Rect, None) => Span::styled("  ", Style::default().bg(color(shape.fill))),
        (ShapeKind::Rect, Some(outline)) => Span::styled(
            "[]",
            Style::default().fg(color(outline)).bg(color(shape.fill)),
        ),
        (ShapeKind::Circle, _) => Span::styled(
            "()",
            Style::default()
                .fg(color(shape.fill))
                .bg(color(background))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// A [`Renderer`] bound to a ratatui terminal
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    renderer: Renderer,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B) -> Result<Self> {
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        Ok(Self {
            terminal,
            renderer: Renderer::new(),
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> SceneRenderer for TerminalRenderer<B> {
    fn present(&mut self, scene: &Scene) -> Result<()> {
        let renderer = &self.renderer;
        self.terminal
            .draw(|frame| renderer.render(frame, scene))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
