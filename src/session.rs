// ============================================
// src/session.rs
// 1回のプレイ (むずかしさを選んでから終わるまで) の状態
// ============================================

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::audio::{AudioFeedback, Cue};
use crate::catalog::{Country, Difficulty};
use crate::profile::{DifficultyProfile, ProfileTable};

/// せいかいのあと次の問題に進むまでの時間
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(2);

/// 画面の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// むずかしさ選択
    Idle,
    /// 回答待ち
    Answering,
    /// せいかい / ざんねん 表示中
    ShowingResult,
    /// 全問終わった
    Ended,
}

/// 1問分 (正解の国 + 選択肢)
#[derive(Debug, Clone)]
pub struct Question {
    pub correct: Country,
    pub options: Vec<String>,
}

impl Question {
    pub fn correct_label(&self) -> &str {
        &self.correct.name
    }
}

/// 予約された自動送り。epoch が変わっていたら捨てる
#[derive(Debug, Clone, Copy)]
struct ScheduledAdvance {
    due: Instant,
    epoch: u64,
}

/// 描画用の読み取り専用ビュー
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub score: usize,
    pub question_index: usize,
    pub question_count: usize,
    pub question: Option<&'a Question>,
    pub last_answer_correct: bool,
    pub locked: bool,
    pub auto_advance_pending: bool,
}

pub struct QuizSession {
    profiles: ProfileTable,
    rng: StdRng,
    audio: Box<dyn AudioFeedback>,
    auto_advance_delay: Duration,

    difficulty: Difficulty,
    score: usize,
    question_index: usize,
    current: Option<Question>,
    phase: Phase,
    last_answer_correct: bool,
    started: bool,
    locked: bool,

    pending: Option<ScheduledAdvance>,
    /// リセットのたびに増える
    epoch: u64,
}

impl QuizSession {
    pub fn new(profiles: ProfileTable, audio: Box<dyn AudioFeedback>) -> Self {
        Self {
            profiles,
            rng: StdRng::from_os_rng(),
            audio,
            auto_advance_delay: DEFAULT_AUTO_ADVANCE,
            difficulty: Difficulty::Easy,
            score: 0,
            question_index: 0,
            current: None,
            phase: Phase::Idle,
            last_answer_correct: false,
            started: false,
            locked: false,
            pending: None,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn with_auto_advance(mut self, delay: Duration) -> Self {
        self.auto_advance_delay = delay;
        self
    }

    fn profile(&self) -> &DifficultyProfile {
        self.profiles.get(self.difficulty)
    }

    /// 予約を取り消し、全ての状態を最初に戻す
    fn reset(&mut self) {
        self.pending = None;
        self.epoch += 1;
        self.score = 0;
        self.question_index = 0;
        self.current = None;
        self.last_answer_correct = false;
        self.started = false;
        self.locked = false;
    }

    /// MARK:ゲーム開始
    pub fn start_game(&mut self, difficulty: Difficulty) {
        self.reset();
        self.difficulty = difficulty;
        self.started = true;
        log::info!("game started: {difficulty}");
        self.generate_question();
    }

    /// MARK:次の問題を作る (もう残っていなければ終了)
    pub fn generate_question(&mut self) {
        if !self.started {
            return;
        }

        let profile = self.profiles.get(self.difficulty);
        let (question_count, options_count) = (profile.question_count, profile.options_count);

        if self.question_index >= question_count {
            self.finish();
            return;
        }

        // プールのコピーをシャッフルして先頭から選択肢の数だけ取る
        let mut picked: Vec<&Country> = profile.eligible.iter().collect();
        picked.shuffle(&mut self.rng);
        picked.truncate(options_count);

        let correct = picked[self.rng.random_range(0..picked.len())].clone();
        let options = picked.iter().map(|c| c.name.to_string()).collect();

        self.current = Some(Question { correct, options });
        self.pending = None;
        self.phase = Phase::Answering;
        self.locked = false;
        self.question_index += 1;

        log::debug!("question {}/{question_count} generated", self.question_index);
    }

    fn finish(&mut self) {
        self.pending = None;
        self.current = None;
        self.started = false;
        self.locked = false;
        self.phase = Phase::Ended;
        log::info!(
            "game over: {} / {} ({})",
            self.score,
            self.profile().question_count,
            self.difficulty
        );
    }

    /// MARK:回答する
    /// 受け付けたら正誤を返す。ロック中などで無視したら None
    pub fn submit_answer(&mut self, label: &str, now: Instant) -> Option<bool> {
        if self.locked || self.phase != Phase::Answering {
            return None;
        }
        let question = self.current.as_ref()?;

        let correct = label == question.correct_label();
        self.last_answer_correct = correct;
        self.phase = Phase::ShowingResult;
        self.locked = true;

        let cue = if correct { Cue::Correct } else { Cue::Incorrect };
        if let Err(e) = self.audio.play(cue) {
            log::warn!("error playing sound: {e}");
        }

        if correct {
            self.score += 1;
            self.pending = Some(ScheduledAdvance {
                due: now + self.auto_advance_delay,
                epoch: self.epoch,
            });
        }

        log::debug!(
            "answer {label:?} for question {}: {}",
            self.question_index,
            if correct { "correct" } else { "incorrect" }
        );
        Some(correct)
    }

    /// ざんねんのあと「つぎのもんだい」
    pub fn advance_manually(&mut self) -> bool {
        if self.phase != Phase::ShowingResult || self.last_answer_correct {
            return false;
        }
        self.generate_question();
        true
    }

    /// 予約した自動送りの時刻を過ぎていたら進める
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(task) = self.pending else {
            return false;
        };
        if task.epoch != self.epoch {
            self.pending = None;
            return false;
        }
        if now < task.due {
            return false;
        }

        self.pending = None;
        self.generate_question();
        true
    }

    /// MARK:メニューに戻る
    pub fn end_to_menu(&mut self) {
        self.reset();
        self.phase = Phase::Idle;
        log::debug!("back to menu");
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            score: self.score,
            question_index: self.question_index,
            question_count: self.profile().question_count,
            question: self.current.as_ref(),
            last_answer_correct: self.last_answer_correct,
            locked: self.locked,
            auto_advance_pending: self.pending.is_some(),
        }
    }
}
