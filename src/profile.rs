// ============================================
// src/profile.rs
// むずかしさごとの設定 (出題する国・選択肢の数・問題数)
// ============================================

use std::collections::{HashMap, HashSet};

use crate::catalog::{Catalog, Country, Difficulty};
use crate::error::ConfigError;

/// むずかしさごとのルール (国のプールはまだ含まない)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileRule {
    /// このタグ以下の国を出題する
    pub max_tag: Difficulty,
    pub options_count: usize,
    pub question_count: usize,
}

impl ProfileRule {
    /// 標準のルール
    pub fn standard(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self { max_tag: Difficulty::Easy, options_count: 3, question_count: 10 },
            Difficulty::Medium => Self { max_tag: Difficulty::Medium, options_count: 4, question_count: 15 },
            Difficulty::Hard => Self { max_tag: Difficulty::Hard, options_count: 5, question_count: 20 },
        }
    }
}

/// 1つのむずかしさの設定
#[derive(Debug, Clone)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    pub eligible: Vec<Country>,
    pub options_count: usize,
    pub question_count: usize,
}

/// むずかしさ → 設定 の表。起動時に1回だけ作り、あとは読むだけ
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: HashMap<Difficulty, DifficultyProfile>,
}

impl ProfileTable {
    /// 標準ルールで作る
    pub fn standard(catalog: &Catalog) -> Result<Self, ConfigError> {
        Self::build(catalog, ProfileRule::standard)
    }

    /// MARK:カタログを絞り込んで表を作り、設定の矛盾をチェックする
    pub fn build(
        catalog: &Catalog,
        rule_for: impl Fn(Difficulty) -> ProfileRule,
    ) -> Result<Self, ConfigError> {
        let mut profiles = HashMap::new();

        for difficulty in Difficulty::ALL {
            let rule = rule_for(difficulty);
            let eligible: Vec<Country> = catalog
                .countries()
                .iter()
                .filter(|c| c.difficulty <= rule.max_tag)
                .cloned()
                .collect();

            let profile = DifficultyProfile {
                difficulty,
                eligible,
                options_count: rule.options_count,
                question_count: rule.question_count,
            };
            profile.validate()?;

            log::debug!(
                "profile {difficulty}: {} countries, {} options, {} questions",
                profile.eligible.len(),
                profile.options_count,
                profile.question_count
            );
            profiles.insert(difficulty, profile);
        }

        Ok(Self { profiles })
    }

    pub fn get(&self, difficulty: Difficulty) -> &DifficultyProfile {
        // build() が全てのむずかしさを入れている
        &self.profiles[&difficulty]
    }
}

impl DifficultyProfile {
    fn validate(&self) -> Result<(), ConfigError> {
        let difficulty = self.difficulty;

        if self.options_count < 2 {
            return Err(ConfigError::TooFewOptions { difficulty, options: self.options_count });
        }
        if self.question_count < 1 {
            return Err(ConfigError::NoQuestions { difficulty });
        }
        if self.eligible.len() < self.options_count {
            return Err(ConfigError::PoolTooSmall {
                difficulty,
                pool: self.eligible.len(),
                options: self.options_count,
            });
        }

        // 名前が正解の判定に使われるので重複は不可
        let mut seen = HashSet::new();
        for country in &self.eligible {
            if !seen.insert(&*country.name) {
                return Err(ConfigError::DuplicateName {
                    difficulty,
                    name: country.name.to_string(),
                });
            }
        }
        Ok(())
    }
}
