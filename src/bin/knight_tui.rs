//! Knight's Tour - Terminal User Interface
//!
//! A TUI demonstration of Warnsdorff's rule using ratatui.
//! App logic lives in `warnsdorff::tui::app`.

#![forbid(unsafe_code)]

use warnsdorff::config::TourConfig;
use warnsdorff::tui::TourApp;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let app = if let Some(yaml_path) = args.get(1) {
        match TourApp::from_yaml_file(yaml_path) {
            Ok(app) => {
                eprintln!(
                    "Loaded: {yaml_path} ({0}x{0} board, seed {1})",
                    app.tour.board().size(),
                    app.tour.seed()
                );
                app
            }
            Err(e) => {
                eprintln!("Error loading '{yaml_path}': {e}");
                eprintln!("Usage: knight_tui [path/to/config.yaml]");
                std::process::exit(1);
            }
        }
    } else {
        TourApp::new(TourConfig::default())
    };

    tui::run(app)
}

mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Line as CanvasLine, Rectangle},
            Block, Borders, Paragraph,
        },
        Frame, Terminal,
    };
    use std::io::{self, Write};
    use std::time::{Duration, Instant};
    use warnsdorff::config::SPEED_PRESETS;
    use warnsdorff::engine::board::{BoardSnapshot, Coord};
    use warnsdorff::tui::TourApp;

    pub fn run(mut app: TourApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = run_main_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_main_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut TourApp,
    ) -> io::Result<()> {
        // Frame rate is decoupled from the tour interval: the engine
        // decides when a move is due, the loop just polls.
        let frame_rate = Duration::from_millis(50);
        let started = Instant::now();
        let mut last_frame = Instant::now();

        loop {
            terminal.draw(|f| ui(f, app))?;

            let now_ms = started.elapsed().as_millis() as u64;
            if app.take_bell() {
                // Fire-and-forget audio cue
                let mut out = io::stdout();
                out.write_all(b"\x07")?;
                out.flush()?;
            }

            let timeout = frame_rate.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code, now_ms);
                    }
                }
            }

            if last_frame.elapsed() >= frame_rate {
                app.advance(started.elapsed().as_millis() as u64);
                last_frame = Instant::now();
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn ui(f: &mut Frame, app: &TourApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(18),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_title(f, chunks[0]);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_board(f, main_chunks[0], app);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        render_stats(f, right_chunks[0], app);
        render_controls(f, right_chunks[1], app);

        render_status_bar(f, chunks[2], app);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " Knight's Tour ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("- Warnsdorff's rule, one move per tick "),
        ])])
        .block(Block::default().borders(Borders::ALL).title("warnsdorff"));
        f.render_widget(title, area);
    }

    /// Center of a square in canvas space (canvas y grows upward,
    /// board rows grow downward).
    fn cell_center(c: Coord, size: u8) -> (f64, f64) {
        (
            f64::from(c.x) + 0.5,
            f64::from(size - 1 - c.y) + 0.5,
        )
    }

    fn cell_color(count: u32, dark_square: bool) -> Color {
        match count {
            0 => {
                if dark_square {
                    Color::DarkGray
                } else {
                    Color::Gray
                }
            }
            1 => Color::Green,
            _ => Color::Yellow,
        }
    }

    fn render_board(f: &mut Frame, area: Rect, app: &TourApp) {
        let snapshot = app.tour.snapshot();
        let size = snapshot.size;
        let guide = app.guide_segments();
        let knight = snapshot.knight;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Board (Green=visited, Yellow=revisited)"),
            )
            .x_bounds([0.0, f64::from(size)])
            .y_bounds([0.0, f64::from(size)])
            .paint(move |ctx| {
                draw_squares(ctx, &snapshot);

                // Guide arrow: the two legs of the L, arrowhead on the
                // second
                if let Some(segments) = guide {
                    for seg in segments {
                        let (x1, y1) = cell_center(seg.from, size);
                        let (x2, y2) = cell_center(seg.to, size);
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color: Color::Cyan,
                        });
                        if seg.arrowhead {
                            ctx.print(
                                x2,
                                y2,
                                Span::styled("▶", Style::default().fg(Color::Cyan)),
                            );
                        }
                    }
                }

                let (kx, ky) = cell_center(knight, size);
                ctx.print(
                    kx,
                    ky,
                    Span::styled(
                        "♞",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            });

        f.render_widget(canvas, area);
    }

    fn draw_squares(ctx: &mut ratatui::widgets::canvas::Context<'_>, snapshot: &BoardSnapshot) {
        let size = snapshot.size;
        for y in 0..size {
            for x in 0..size {
                let coord = Coord::new(x, y);
                let count = snapshot.visit_count(coord).unwrap_or(0);
                let dark_square = (x + y) % 2 == 0;
                ctx.draw(&Rectangle {
                    x: f64::from(x),
                    y: f64::from(size - 1 - y),
                    width: 1.0,
                    height: 1.0,
                    color: cell_color(count, dark_square),
                });
            }
        }
    }

    fn render_stats(f: &mut Frame, area: Rect, app: &TourApp) {
        let board = app.tour.board();
        let visited = board.visited_cells();
        let total = board.total_cells();

        let status_color = match app.status_label() {
            "RUNNING" => Color::Green,
            "PAUSED" => Color::Yellow,
            "ENDED" => Color::Cyan,
            _ => Color::Gray,
        };

        let on_off = |on: bool| {
            if on {
                Span::styled("ON", Style::default().fg(Color::Green))
            } else {
                Span::styled("OFF", Style::default().fg(Color::Gray))
            }
        };

        let stats_text = vec![
            Line::from(vec![
                Span::raw("Status: "),
                Span::styled(
                    app.status_label(),
                    Style::default().fg(status_color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("Board: "),
                Span::styled(
                    format!("{0}x{0}", board.size()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw("   Seed: "),
                Span::styled(format!("{}", app.tour.seed()), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::raw("Knight: "),
                Span::styled(board.knight().to_string(), Style::default().fg(Color::Magenta)),
            ]),
            Line::from(vec![
                Span::raw("Steps: "),
                Span::styled(
                    format!("{}", app.tour.step_count()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("   Visited: "),
                Span::styled(
                    format!("{visited}/{total}"),
                    Style::default().fg(if visited == total {
                        Color::Green
                    } else {
                        Color::Yellow
                    }),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("Speed: "),
                Span::styled(
                    format!("{}x", app.tour.speed()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(" ({} ms/move)", app.tour.interval_ms()),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(vec![
                Span::raw("Sound: "),
                on_off(app.sound_on),
                Span::raw("   Guide: "),
                on_off(app.guide_on),
            ]),
        ];

        let stats = Paragraph::new(stats_text)
            .block(Block::default().borders(Borders::ALL).title("Statistics"));
        f.render_widget(stats, area);
    }

    fn render_controls(f: &mut Frame, area: Rect, app: &TourApp) {
        let speed_line = SPEED_PRESETS
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if i == app.speed_idx() {
                    format!("[{s}x]")
                } else {
                    format!(" {s}x ")
                }
            })
            .collect::<String>();

        let controls_text = vec![
            Line::from(Span::styled(
                "Controls:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(" Space  - Start / stop"),
            Line::from(" N      - Single move"),
            Line::from(" R      - Reset (same seed)"),
            Line::from(" 1-4    - Speed presets"),
            Line::from(" S      - Toggle sound"),
            Line::from(" G      - Toggle guide arrow"),
            Line::from(" Q      - Quit"),
            Line::from(""),
            Line::from(vec![
                Span::raw(" Speed: "),
                Span::styled(speed_line, Style::default().fg(Color::Cyan)),
            ]),
        ];

        let controls = Paragraph::new(controls_text)
            .block(Block::default().borders(Borders::ALL).title("Controls"));

        f.render_widget(controls, area);
    }

    fn render_status_bar(f: &mut Frame, area: Rect, app: &TourApp) {
        let build = option_env!("GIT_HASH").unwrap_or("unknown");

        let status_text = Line::from(vec![
            Span::raw(format!(
                " warnsdorff v{} ({build}) ",
                env!("CARGO_PKG_VERSION")
            )),
            Span::raw("| "),
            Span::raw(format!("Frame: {} ", app.frame_count)),
            Span::raw("| "),
            Span::styled(
                match app.status_label() {
                    "ENDED" => "Tour ended: no more valid moves. R to reset.",
                    "IDLE" => "Press Space to start.",
                    _ => "",
                },
                Style::default().fg(Color::Gray),
            ),
        ]);

        let status_bar =
            Paragraph::new(status_text).block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ratatui::backend::TestBackend;
        use warnsdorff::config::TourConfig;

        fn create_test_terminal() -> Terminal<TestBackend> {
            let backend = TestBackend::new(100, 40);
            Terminal::new(backend).expect("Failed to create test terminal")
        }

        fn test_app() -> TourApp {
            TourApp::new(TourConfig::builder().seed(42).build())
        }

        #[test]
        fn test_ui_renders_without_panic() {
            let mut terminal = create_test_terminal();
            let app = test_app();

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI should render without panic");
        }

        #[test]
        fn test_ui_renders_running_with_guide() {
            let mut terminal = create_test_terminal();
            let mut app = test_app();
            app.guide_on = true;
            app.toggle_running(0);

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI with guide should render");
        }

        #[test]
        fn test_ui_renders_after_full_run() {
            let mut terminal = create_test_terminal();
            let mut app = test_app();
            app.toggle_running(0);
            while app.tour.tick().is_some() {
                if app.status_label() == "ENDED" {
                    break;
                }
            }

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI after exhaustion should render");
        }

        #[test]
        fn test_render_board() {
            let mut terminal = create_test_terminal();
            let app = test_app();

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_board(f, area, &app);
                })
                .expect("Board should render");
        }

        #[test]
        fn test_render_stats() {
            let mut terminal = create_test_terminal();
            let app = test_app();

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_stats(f, area, &app);
                })
                .expect("Stats should render");
        }

        #[test]
        fn test_render_controls() {
            let mut terminal = create_test_terminal();
            let app = test_app();

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_controls(f, area, &app);
                })
                .expect("Controls should render");
        }

        #[test]
        fn test_render_status_bar() {
            let mut terminal = create_test_terminal();
            let app = test_app();

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_status_bar(f, area, &app);
                })
                .expect("Status bar should render");
        }

        #[test]
        fn test_cell_center_flips_rows() {
            // Row 0 is the top of the board, which is the top of the
            // canvas (largest y)
            let (x, y) = cell_center(Coord::new(0, 0), 8);
            assert!((x - 0.5).abs() < f64::EPSILON);
            assert!((y - 7.5).abs() < f64::EPSILON);

            let (_, y_bottom) = cell_center(Coord::new(0, 7), 8);
            assert!((y_bottom - 0.5).abs() < f64::EPSILON);
        }

        #[test]
        fn test_cell_color_tiers() {
            assert_eq!(cell_color(1, false), Color::Green);
            assert_eq!(cell_color(2, false), Color::Yellow);
            assert_eq!(cell_color(5, true), Color::Yellow);
            assert_ne!(cell_color(0, true), cell_color(0, false));
        }

        #[test]
        fn test_ui_different_board_sizes() {
            let mut terminal = create_test_terminal();

            for n in [5u8, 8, 12] {
                let app = TourApp::new(TourConfig::builder().board_size(n).seed(42).build());
                terminal
                    .draw(|f| ui(f, &app))
                    .unwrap_or_else(|e| panic!("UI should render with {n}x{n} board: {e}"));
            }
        }
    }
}
