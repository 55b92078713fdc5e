/*
 * src/catalog.rs
 * 国旗データ (こくき) を管理するモジュール
 */

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// むずかしさ。国のタグとプロファイルのキーの両方に使う
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// メニューに表示する名前
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "かんたん",
            Difficulty::Medium => "ふつう",
            Difficulty::Hard => "むずかしい",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// 1つのお題 (国旗 + 正解の名前 + むずかしさ)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub flag: Cow<'static, str>, // 表示用 (絵文字の国旗)
    pub name: Cow<'static, str>, // 正解の名前 (ひらがな)
    pub difficulty: Difficulty,
}

const fn country(flag: &'static str, name: &'static str, difficulty: Difficulty) -> Country {
    Country {
        flag: Cow::Borrowed(flag),
        name: Cow::Borrowed(name),
        difficulty,
    }
}

use Difficulty::{Easy, Hard, Medium};

/// 組み込みの国リスト (むずかしさ順)
pub const COUNTRIES: &[Country] = &[
    // かんたん
    country("🇯🇵", "にほん", Easy),
    country("🇺🇸", "アメリカ", Easy),
    country("🇨🇳", "ちゅうごく", Easy),
    country("🇰🇷", "かんこく", Easy),
    country("🇫🇷", "フランス", Easy),
    country("🇬🇧", "イギリス", Easy),
    country("🇮🇹", "イタリア", Easy),
    country("🇩🇪", "ドイツ", Easy),
    country("🇧🇷", "ブラジル", Easy),
    country("🇨🇦", "カナダ", Easy),

    // ふつう
    country("🇦🇺", "オーストラリア", Medium),
    country("🇪🇸", "スペイン", Medium),
    country("🇮🇳", "インド", Medium),
    country("🇷🇺", "ロシア", Medium),
    country("🇲🇽", "メキシコ", Medium),
    country("🇹🇭", "タイ", Medium),
    country("🇨🇭", "スイス", Medium),
    country("🇪🇬", "エジプト", Medium),
    country("🇦🇷", "アルゼンチン", Medium),
    country("🇳🇿", "ニュージーランド", Medium),

    // むずかしい
    country("🇸🇪", "スウェーデン", Hard),
    country("🇳🇴", "ノルウェー", Hard),
    country("🇫🇮", "フィンランド", Hard),
    country("🇵🇹", "ポルトガル", Hard),
    country("🇬🇷", "ギリシャ", Hard),
    country("🇹🇷", "トルコ", Hard),
    country("🇻🇳", "ベトナム", Hard),
    country("🇰🇪", "ケニア", Hard),
    country("🇵🇪", "ペルー", Hard),
    country("🇲🇳", "モンゴル", Hard),
    country("🇯🇲", "ジャマイカ", Hard),
    country("🇮🇸", "アイスランド", Hard),
];

/// 読み取り専用の国リスト
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Default for Catalog {
    /// 組み込みリストを使う
    fn default() -> Self {
        Self::new(COUNTRIES.to_vec())
    }
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// MARK:JSONファイルから読み込む
    /// 形式: `[{"flag": "🇯🇵", "name": "にほん", "difficulty": "easy"}, ...]`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let countries: Vec<Country> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("loaded {} countries from {}", countries.len(), path.display());
        Ok(Self::new(countries))
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn builtin_names_are_unique() {
        let names: HashSet<_> = COUNTRIES.iter().map(|c| &c.name).collect();
        assert_eq!(names.len(), COUNTRIES.len());
    }

    #[test]
    fn builtin_has_every_difficulty() {
        for d in Difficulty::ALL {
            assert!(COUNTRIES.iter().any(|c| c.difficulty == d), "no {d} countries");
        }
    }

    #[test]
    fn load_reads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"flag":"🇯🇵","name":"にほん","difficulty":"easy"}},
                {{"flag":"🇸🇪","name":"スウェーデン","difficulty":"hard"}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog.countries().len(), 2);
        assert_eq!(catalog.countries()[0].name, "にほん");
        assert_eq!(catalog.countries()[1].difficulty, Difficulty::Hard);
    }

    #[test]
    fn load_rejects_unknown_difficulty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"flag":"🇯🇵","name":"にほん","difficulty":"extreme"}}]"#).unwrap();

        let err = Catalog::load(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Catalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
