// ============================================
// src/cli.rs
// コマンドライン引数
// ============================================

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Difficulty;
use crate::settings::Settings;

/// こくき クイズ: 国旗を見て国の名前を当てるクイズ
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// メニューをとばしてすぐに始める
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// 国リストのJSONファイル
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// 設定ファイル (省略時は標準の場所)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// 乱数のシード (同じ問題を出したいとき)
    #[arg(long)]
    pub seed: Option<u64>,

    /// せいかいのあと次へ進むまでのミリ秒
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// 音を鳴らさない
    #[arg(long)]
    pub mute: bool,
}

impl Args {
    /// 設定ファイルの値を引数で上書きする
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(path) = &self.catalog {
            settings.catalog = Some(path.clone());
        }
        if let Some(ms) = self.delay_ms {
            settings.auto_advance_ms = ms;
        }
        if self.mute {
            settings.sound = false;
        }
        settings
    }
}
