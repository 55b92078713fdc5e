// ============================================
// src/ui.rs
// UI描画
// ============================================

use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::catalog::Difficulty;
use crate::session::{Phase, Question, Snapshot};

const TITLE: &str = " こくき クイズ ";

/// メニューの1行 (むずかしさ + 問題数)
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub difficulty: Difficulty,
    pub question_count: usize,
}

/// 描画に必要なもの一式
pub struct View<'a> {
    pub snapshot: Snapshot<'a>,
    pub menu: &'a [MenuEntry],
    /// 選択中の行 (メニュー or 選択肢)
    pub cursor: usize,
}

pub fn draw(f: &mut Frame, view: &View) {
    let size = f.area();
    // 枠線を描画
    let block = Block::default().borders(Borders::ALL).title(TITLE);
    let inner_area = block.inner(size);
    f.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // [0] メイン
            Constraint::Length(1), // [1] キー操作のヒント
        ])
        .split(inner_area);

    let hint = match view.snapshot.phase {
        Phase::Idle => "↑↓/1-3: えらぶ  Enter: はじめる  Esc: おわる",
        Phase::Answering => "↑↓/すうじ: えらぶ  Enter: こたえる  Esc: メニュー",
        Phase::ShowingResult if view.snapshot.auto_advance_pending => "Esc: メニュー",
        Phase::ShowingResult => "Enter: つぎのもんだい  Esc: メニュー",
        Phase::Ended => "Enter: さいしょにもどる  Esc: メニュー",
    };
    f.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)).centered(),
        chunks[1],
    );

    match view.snapshot.phase {
        Phase::Idle => draw_menu(f, chunks[0], view),
        Phase::Ended => draw_summary(f, chunks[0], &view.snapshot),
        Phase::Answering | Phase::ShowingResult => draw_game(f, chunks[0], view),
    }
}

// --------------------------------------------------
// むずかしさ選択
// --------------------------------------------------

fn draw_menu(f: &mut Frame, area: Rect, view: &View) {
    let mut lines = vec![
        Line::from("むずかしさを えらんでね").style(Style::default().fg(Color::Cyan).bold()),
        Line::from(""),
    ];

    for (i, entry) in view.menu.iter().enumerate() {
        let text = format!(
            "{}. {} ({}もん)",
            i + 1,
            entry.difficulty.label(),
            entry.question_count
        );
        let color = match entry.difficulty {
            Difficulty::Easy => Color::Green,
            Difficulty::Medium => Color::Yellow,
            Difficulty::Hard => Color::Red,
        };
        let style = if i == view.cursor {
            Style::default().fg(Color::Black).bg(color)
        } else {
            Style::default().fg(color)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    f.render_widget(Paragraph::new(lines).centered(), centered_rows(area, 5));
}

// --------------------------------------------------
// 問題とリザルト
// --------------------------------------------------

fn draw_game(f: &mut Frame, area: Rect, view: &View) {
    let snap = &view.snapshot;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] 進み具合
            Constraint::Length(1), // [1] とくてん
            Constraint::Length(1), // [2] 空白
            Constraint::Min(1),    // [3] 問題 or リザルト
        ])
        .split(area);

    // 0. 進み具合 (何問目か)
    let ratio = if snap.question_count > 0 {
        (snap.question_index as f64 / snap.question_count as f64).min(1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
        .ratio(ratio)
        .label(format!("{} / {}", snap.question_index, snap.question_count));
    f.render_widget(gauge, chunks[0]);

    // 1. とくてん
    f.render_widget(
        Paragraph::new(format!("とくてん: {}", snap.score))
            .style(Style::default().fg(Color::Yellow).bold())
            .centered(),
        chunks[1],
    );

    let Some(question) = snap.question else {
        return;
    };

    if snap.phase == Phase::ShowingResult {
        draw_result(f, chunks[3], snap.last_answer_correct, question);
    } else {
        draw_question(f, chunks[3], question, view.cursor);
    }
}

fn draw_question(f: &mut Frame, area: Rect, question: &Question, cursor: usize) {
    let mut lines = vec![
        Line::from("このこくきは どこのくに？").style(Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from(&*question.correct.flag).style(Style::default().bold()),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let text = format!("{}. {}", i + 1, option);
        let style = if i == cursor {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    f.render_widget(Paragraph::new(lines).centered(), area);
}

fn draw_result(f: &mut Frame, area: Rect, correct: bool, question: &Question) {
    let lines = if correct {
        let style = Style::default().fg(Color::Green);
        vec![
            Line::from("せいかい！").style(style.bold()),
            Line::from(""),
            Line::from("つぎのもんだいに すすみます").style(style),
        ]
    } else {
        let style = Style::default().fg(Color::Red);
        vec![
            Line::from("ざんねん...").style(style.bold()),
            Line::from(""),
            Line::from(format!(
                "こたえ: {} {}",
                question.correct.flag,
                question.correct_label()
            ))
            .style(style),
        ]
    };

    f.render_widget(Paragraph::new(lines).centered(), centered_rows(area, 3));
}

// --------------------------------------------------
// おわり
// --------------------------------------------------

fn draw_summary(f: &mut Frame, area: Rect, snap: &Snapshot) {
    let lines = vec![
        Line::from("クイズ おわり！").style(Style::default().fg(Color::Green).bold()),
        Line::from(""),
        Line::from(format!("さいしゅうてん: {} / {}", snap.score, snap.question_count))
            .style(Style::default().fg(Color::Yellow)),
    ];
    f.render_widget(Paragraph::new(lines).centered(), centered_rows(area, 3));
}

/// 高さ `rows` の領域を縦方向の真ん中に取る
fn centered_rows(area: Rect, rows: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(rows),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}
