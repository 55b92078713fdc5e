// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::io::stdout;
use std::time::{Duration, Instant};

mod audio;
mod catalog;
mod cli;
mod error;
mod profile;
mod session;
mod settings;
mod ui;

use audio::{AudioFeedback, Silent, TerminalBell};
use catalog::{Catalog, Difficulty};
use clap::Parser;
use cli::Args;
use error::AppError;
use profile::ProfileTable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use session::{Phase, QuizSession};
use settings::Settings;
use ui::{MenuEntry, View};

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use ratatui::prelude::*;

// --------------------------------------------------
// データ構造
// --------------------------------------------------

/// アプリ全体の状態を管理する
struct App {
    session: QuizSession,
    /// メニューに出すむずかしさ一覧
    menu: Vec<MenuEntry>,
    /// メニュー / 選択肢のカーソル位置
    cursor: usize,
    should_quit: bool,
}

impl App {
    fn new(session: QuizSession, profiles: &ProfileTable) -> Self {
        let menu = Difficulty::ALL
            .iter()
            .map(|&difficulty| MenuEntry {
                difficulty,
                question_count: profiles.get(difficulty).question_count,
            })
            .collect();
        Self {
            session,
            menu,
            cursor: 0,
            should_quit: false,
        }
    }

    fn view(&self) -> View<'_> {
        View {
            snapshot: self.session.snapshot(),
            menu: &self.menu,
            cursor: self.cursor,
        }
    }

    fn start(&mut self, difficulty: Difficulty) {
        self.session.start_game(difficulty);
        self.cursor = 0;
    }

    fn back_to_menu(&mut self) {
        self.session.end_to_menu();
        self.cursor = 0;
    }

    /// 今の画面で選べる行の数
    fn row_count(&self) -> usize {
        let snap = self.session.snapshot();
        match snap.phase {
            Phase::Idle => self.menu.len(),
            Phase::Answering if !snap.locked => snap.question.map_or(0, |q| q.options.len()),
            _ => 0,
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1) % rows
        } else {
            (self.cursor + rows - 1) % rows
        };
    }

    /// カーソル行 (または数字キーの行) を決定する
    fn choose(&mut self, row: usize, now: Instant) {
        match self.session.snapshot().phase {
            Phase::Idle => {
                if let Some(entry) = self.menu.get(row).copied() {
                    self.start(entry.difficulty);
                }
            }
            Phase::Answering => {
                let label = self
                    .session
                    .snapshot()
                    .question
                    .and_then(|q| q.options.get(row).cloned());
                if let Some(label) = label {
                    self.session.submit_answer(&label, now);
                    self.cursor = 0;
                }
            }
            Phase::ShowingResult => {
                self.session.advance_manually();
            }
            Phase::Ended => self.back_to_menu(),
        }
    }

    /// キー入力の処理
    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let phase = self.session.snapshot().phase;
        match key.code {
            KeyCode::Esc if phase == Phase::Idle => self.should_quit = true,
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Up => self.move_cursor(false),
            KeyCode::Down | KeyCode::Tab => self.move_cursor(true),
            KeyCode::Enter => self.choose(self.cursor, now),
            KeyCode::Char(' ') | KeyCode::Char('n') if phase == Phase::ShowingResult => {
                self.session.advance_manually();
            }
            KeyCode::Char('e') if phase == Phase::Idle => self.start(Difficulty::Easy),
            KeyCode::Char('m') if phase == Phase::Idle => self.start(Difficulty::Medium),
            KeyCode::Char('h') if phase == Phase::Idle => self.start(Difficulty::Hard),
            KeyCode::Char(c) => {
                // 数字キーで直接えらぶ (1始まり)
                if let Some(n) = c.to_digit(10).filter(|&n| n >= 1) {
                    let row = n as usize - 1;
                    if row < self.row_count() {
                        self.choose(row, now);
                    }
                }
            }
            _ => {}
        }
    }
}

// --------------------------------------------------
// メイン関数 (TUIセットアップと実行ループ)
// --------------------------------------------------

fn main() -> Result<(), AppError> {
    pretty_env_logger::init();
    let args = Args::parse();

    let settings = args.apply(Settings::load(args.settings.as_deref())?);
    let catalog = match &settings.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::default(),
    };
    // 設定の矛盾はここで止める
    let profiles = ProfileTable::standard(&catalog)?;

    let audio: Box<dyn AudioFeedback> = if settings.sound {
        Box::new(TerminalBell::new())
    } else {
        Box::new(Silent)
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let session = QuizSession::new(profiles.clone(), audio)
        .with_rng(rng)
        .with_auto_advance(settings.auto_advance());
    let mut app = App::new(session, &profiles);
    if let Some(difficulty) = args.difficulty {
        app.start(difficulty);
    }

    log::info!("starting flag quiz");
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal()?;
    result?;
    Ok(())
}

fn setup_terminal() -> std::io::Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
    stdout().execute(Hide)?; // カーソルを非表示
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> std::io::Result<()> {
    stdout().execute(Show)?; // カーソルを再表示
    stdout().execute(LeaveAlternateScreen)?; // 代替スクリーンを終了
    disable_raw_mode()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<impl Backend>, app: &mut App) -> std::io::Result<()> {
    while !app.should_quit {
        // せいかい後の自動送り
        app.session.tick(Instant::now());

        terminal.draw(|f| ui::draw(f, &app.view()))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    app.handle_key(key, Instant::now());
                }
            }
        }
    }

    Ok(())
}
