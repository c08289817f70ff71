// src/tui/inner.rs  —  ratatui layout
use anyhow::Result;
use crossterm::{execute, terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use std::io::stdout;

use super::UiState;
use crate::catalog::Catalog;
use crate::dom::Document;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
}

fn el_text<'a>(doc: &'a Document, id: &str) -> &'a str {
    doc.element(id).map(|el| el.text.as_str()).unwrap_or("")
}

impl Tui {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        let backend  = CrosstermBackend::new(out);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn cleanup(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }

    pub fn draw(&mut self, doc: &Document, catalog: &Catalog, s: &UiState) -> Result<()> {
        let playing = doc.is_visible("game-container");
        self.terminal.draw(|f| {
            let area = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),  // header
                    Constraint::Min(6),     // games list / session panel
                    Constraint::Length(7),  // controls / play-on-phone
                    Constraint::Length(3),  // footer hints
                ])
                .split(area);

            // ── Header ────────────────────────────────────────────────────
            let header = Paragraph::new(format!(
                " {}  |  {}  [{}]",
                el_text(doc, "site-header"),
                el_text(doc, "site-desc"),
                el_text(doc, "lang-toggle"),
            ))
            .style(Style::default().fg(Color::Black).bg(Color::Cyan)
                   .add_modifier(Modifier::BOLD));
            f.render_widget(header, chunks[0]);

            // ── Body: session panel while playing, games list otherwise ──
            if playing {
                let addr = s.player_address.as_deref().unwrap_or("");
                let lines: Vec<Line> = vec![
                    Line::from(Span::styled(
                        el_text(doc, "game-status").to_string(),
                        Style::default().fg(Color::White),
                    )),
                    Line::from(vec![
                        Span::styled("PLAYER: ", Style::default().fg(Color::DarkGray)),
                        Span::styled(addr.to_string(), Style::default().fg(Color::Green)),
                    ]),
                    Line::from(vec![
                        Span::styled(
                            format!(
                                " Esc = {}   f = {}   l = [{}] ",
                                el_text(doc, "close-game"),
                                el_text(doc, "fullscreen-game"),
                                el_text(doc, "lang-toggle-player"),
                            ),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                ];
                let panel = Paragraph::new(lines)
                    .block(Block::default()
                        .title(format!(" {} ", el_text(doc, "site-title")))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green)))
                    .wrap(Wrap { trim: true });
                f.render_widget(panel, chunks[1]);
            } else {
                let rows: Vec<Line> = catalog.iter().enumerate()
                    .map(|(i, g)| {
                        let marker = if i == s.selected { "▶ " } else { "  " };
                        let style = if i == s.selected {
                            Style::default().fg(Color::Black).bg(Color::Yellow)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        Line::from(Span::styled(format!("{marker}{}", g.title), style))
                    })
                    .collect();
                let list = Paragraph::new(rows)
                    .block(Block::default()
                        .title(format!(" {} ", el_text(doc, "games-section")))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan)))
                    .scroll((doc.scroll_top as u16, 0));
                f.render_widget(list, chunks[1]);
            }

            // ── Controls: upload + play-on-phone ─────────────────────────
            let prompt_line = if s.prompt_active {
                Line::from(vec![
                    Span::styled("> ", Style::default().fg(Color::Yellow)),
                    Span::styled(s.prompt_buf.clone(), Style::default().fg(Color::White)),
                    Span::styled("▏", Style::default().fg(Color::Yellow)),
                ])
            } else {
                Line::from(Span::styled(
                    format!("o = {}", el_text(doc, "upload-label")),
                    Style::default().fg(Color::DarkGray),
                ))
            };
            let connect_line = match &s.connect_url {
                Some(url) => Line::from(vec![
                    Span::styled(
                        format!("{} ", el_text(doc, "connect-mobile")),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(url.clone(), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!("   ({})", el_text(doc, "scan-qr")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                None => Line::from(""),
            };
            let controls = Paragraph::new(vec![prompt_line, connect_line])
                .block(Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)));
            f.render_widget(controls, chunks[2]);

            // ── Footer ────────────────────────────────────────────────────
            let hints = if playing {
                " Esc = close   f = fullscreen   l/Tab = language"
            } else {
                " ↑/↓ + Enter = play   o = open ROM   l/Tab = language   q = quit"
            };
            let footer = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{}  |{hints}", el_text(doc, "footer")),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    s.status.clone(),
                    Style::default().fg(Color::Magenta),
                )),
            ])
            .style(Style::default().bg(Color::Black));
            f.render_widget(footer, chunks[3]);
        })?;
        Ok(())
    }
}
