// ============================================
// src/audio.rs
// せいかい / ざんねん の効果音
// ============================================

use console::Term;

use crate::error::AudioError;

/// 鳴らす音の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Correct,
    Incorrect,
}

/// 効果音の再生先。呼ぶたびに最初から鳴らし直す
pub trait AudioFeedback {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// ターミナルのベルを鳴らす (せいかい: 1回、ざんねん: 2回)
pub struct TerminalBell {
    term: Term,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioFeedback for TerminalBell {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        let bell = match cue {
            Cue::Correct => "\x07",
            Cue::Incorrect => "\x07\x07",
        };
        self.term.write_str(bell)?;
        self.term.flush()?;
        Ok(())
    }
}

/// 音を出さない (--mute)
#[derive(Debug, Default)]
pub struct Silent;

impl AudioFeedback for Silent {
    fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}
