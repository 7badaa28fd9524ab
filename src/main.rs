mod app;
mod core;
mod models;
mod ui;
mod utils;

use app::App;
use clap::Parser;
use core::actions::{find_action, Action};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use ui::{IconMode, ViewportMode, WarningScreen, MIN_WIDTH};
use utils::{
    config::{self, AppConfig},
    error::Result,
    logging,
};

/// 테마에 따라 레이아웃이 바뀌는 터미널 멀티 테마 스위처
#[derive(Parser, Debug)]
#[command(name = "multitheme")]
#[command(about = "A terminal multi-theme switcher with theme-driven page layouts", long_about = None)]
struct Args {
    /// 설정 파일 경로
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 모바일/데스크톱 전환 기준 열 수
    #[arg(long, value_name = "COLS", value_parser = clap::value_parser!(u16).range(MIN_WIDTH as i64..))]
    breakpoint: Option<u16>,

    /// ASCII 아이콘 사용
    #[arg(long)]
    ascii_icons: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // TUI가 stdout을 쓰므로 로그는 파일로
    if let Err(err) = logging::init() {
        eprintln!("warning: {err}");
    }

    let mut config = AppConfig::load_or_default(args.config.as_deref());
    if let Some(breakpoint) = args.breakpoint {
        config.mobile_breakpoint = breakpoint;
    }
    if args.ascii_icons {
        config.icon_mode = IconMode::Ascii;
    }
    tracing::debug!(?config, "effective config");

    let mut app = App::new(config);
    if let Some(dir) = config::config_dir() {
        let applied = app.styles.load_overrides_from_dir(&dir.join("styles"));
        if applied > 0 {
            tracing::info!(applied, "style overrides applied");
        }
    }

    // Setup terminal
    let mouse = app.config.mouse;
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "app loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.config.tick_rate_ms);

    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                ViewportMode::TooSmall => {
                    // 경고 화면 표시
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .tokens(app.tokens());
                    f.render_widget(warning, app.layout.areas().warning);
                }
                ViewportMode::Desktop | ViewportMode::Mobile => {
                    app.render(f.buffer_mut());
                }
            }
        })?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.is_dropdown_open() {
                        // 드롭다운 모드에서의 키 처리
                        handle_dropdown_keys(app, key.modifiers, key.code);
                    } else {
                        // 일반 모드에서의 키 처리
                        handle_normal_keys(app, key.modifiers, key.code);
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 드롭다운 모드 키 처리
fn handle_dropdown_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match code {
        // 항목 이동: Up/Down
        KeyCode::Up => app.dropdown_prev(),
        KeyCode::Down => app.dropdown_next(),
        KeyCode::Char('k') if modifiers == KeyModifiers::NONE => app.dropdown_prev(),
        KeyCode::Char('j') if modifiers == KeyModifiers::NONE => app.dropdown_next(),
        // 항목 선택: Enter
        KeyCode::Enter => app.confirm_dropdown(),
        // 나머지는 레지스트리 (t, Esc, 1~3, q)
        _ => handle_normal_keys(app, modifiers, code),
    }
}

/// 마우스 처리: 왼쪽 클릭은 HitMap 라우팅, 휠은 스크롤
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.layout.mode() == ViewportMode::TooSmall {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.handle_click(mouse.column, mouse.row),
        MouseEventKind::ScrollUp => app.execute_action(Action::ScrollUp),
        MouseEventKind::ScrollDown => app.execute_action(Action::ScrollDown),
        _ => {}
    }
}
