//! Rule configuration.
//!
//! A [`Rules`] value is immutable once attached to a game line. It carries
//! both the Go-family settings (ko variant, scoring, suicide, komi) and the
//! connection-family settings (basic rule, victory condition N, move cutoff,
//! first pass wins).
//!
//! # Descriptor format
//!
//! Rules round-trip through a compact token string, used in logs, error
//! messages and the command line:
//!
//! ```text
//! koPOSITIONALscoreAREAsui1komi7.5
//! koSIMPLEscoreTERRITORYsui0komi5
//! koPOSITIONALscoreAREAsui1komi0basicRENJUvcnB3
//! ```
//!
//! Keys are lowercase, values are uppercase or numeric. Connection-family
//! tokens are only written when they differ from the defaults. They also
//! serialize to JSON with serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Color;
use crate::constants::VCN_MAX_LEVEL;
use crate::error::RulesError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KoRule {
    /// Only the immediate recapture of a single stone is banned.
    Simple,
    /// No whole-board position may repeat, regardless of who is to move.
    Positional,
    /// No position may repeat with the same player to move.
    Situational,
    /// Positional superko, with the lookback window reset by every pass.
    Spight,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringRule {
    Area,
    Territory,
}

/// Connection-family selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BasicRule {
    /// Five or more in a row wins.
    #[default]
    Freestyle,
    /// Exactly five wins.
    Standard,
    /// Overlines win for white; black is restricted by forbidden points.
    Renju,
}

/// Victory condition N: `side` must force a win, and loses if it runs out
/// of pass budget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VcnRule {
    #[default]
    NoVc,
    Vc { side: Color, level: u8 },
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub ko_rule: KoRule,
    pub scoring_rule: ScoringRule,
    pub multi_stone_suicide_legal: bool,
    pub komi: f32,
    #[serde(default)]
    pub basic_rule: BasicRule,
    #[serde(default)]
    pub vcn_rule: VcnRule,
    /// Stone placements after which the game is cut off. 0 disables.
    #[serde(default)]
    pub max_moves: u32,
    #[serde(default)]
    pub first_pass_win: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self::tromp_taylorish()
    }
}

// =============================================================================
// Presets and Queries
// =============================================================================

impl Rules {
    /// Positional superko, area scoring, suicide legal, komi 7.5.
    pub fn tromp_taylorish() -> Self {
        Self {
            ko_rule: KoRule::Positional,
            scoring_rule: ScoringRule::Area,
            multi_stone_suicide_legal: true,
            komi: 7.5,
            basic_rule: BasicRule::Freestyle,
            vcn_rule: VcnRule::NoVc,
            max_moves: 0,
            first_pass_win: false,
        }
    }

    /// Simple ko, territory scoring, no suicide, komi 6.5.
    pub fn japanese_like() -> Self {
        Self {
            ko_rule: KoRule::Simple,
            scoring_rule: ScoringRule::Territory,
            multi_stone_suicide_legal: false,
            komi: 6.5,
            ..Self::tromp_taylorish()
        }
    }

    /// Connection-game rules with no komi.
    pub fn gomoku(basic_rule: BasicRule) -> Self {
        Self {
            komi: 0.0,
            basic_rule,
            ..Self::tromp_taylorish()
        }
    }

    /// The side that must force a win under victory condition N.
    pub fn vc_side(&self) -> Option<Color> {
        match self.vcn_rule {
            VcnRule::NoVc => None,
            VcnRule::Vc { side, .. } => Some(side),
        }
    }

    pub fn vc_level(&self) -> Option<u8> {
        match self.vcn_rule {
            VcnRule::NoVc => None,
            VcnRule::Vc { level, .. } => Some(level),
        }
    }

    pub fn is_vcn(&self) -> bool {
        self.vcn_rule != VcnRule::NoVc
    }

    /// Reject unsupported combinations.
    pub fn validate(&self) -> Result<(), RulesError> {
        if let VcnRule::Vc { level, .. } = self.vcn_rule {
            if !(1..=VCN_MAX_LEVEL).contains(&level) {
                return Err(RulesError::InvalidVcnLevel(level));
            }
        }
        if self.is_vcn() && self.max_moves != 0 {
            return Err(RulesError::VcnWithMaxMoves {
                rules: self.to_string(),
            });
        }
        if self.first_pass_win && (self.is_vcn() || self.max_moves != 0) {
            return Err(RulesError::FirstPassWinConflict {
                rules: self.to_string(),
            });
        }
        if !self.komi.is_finite() || (self.komi * 2.0).fract() != 0.0 {
            return Err(RulesError::InvalidKomi(self.komi));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, RulesError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate rules from JSON.
    pub fn from_json(text: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_json::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }
}

// =============================================================================
// Descriptor Tokens
// =============================================================================

impl KoRule {
    pub const fn token(self) -> &'static str {
        match self {
            KoRule::Simple => "SIMPLE",
            KoRule::Positional => "POSITIONAL",
            KoRule::Situational => "SITUATIONAL",
            KoRule::Spight => "SPIGHT",
        }
    }

    fn from_token(s: &str) -> Option<Self> {
        [
            KoRule::Simple,
            KoRule::Positional,
            KoRule::Situational,
            KoRule::Spight,
        ]
        .into_iter()
        .find(|r| r.token() == s)
    }
}

impl ScoringRule {
    pub const fn token(self) -> &'static str {
        match self {
            ScoringRule::Area => "AREA",
            ScoringRule::Territory => "TERRITORY",
        }
    }

    fn from_token(s: &str) -> Option<Self> {
        [ScoringRule::Area, ScoringRule::Territory]
            .into_iter()
            .find(|r| r.token() == s)
    }
}

impl BasicRule {
    pub const fn token(self) -> &'static str {
        match self {
            BasicRule::Freestyle => "FREESTYLE",
            BasicRule::Standard => "STANDARD",
            BasicRule::Renju => "RENJU",
        }
    }

    fn from_token(s: &str) -> Option<Self> {
        [BasicRule::Freestyle, BasicRule::Standard, BasicRule::Renju]
            .into_iter()
            .find(|r| r.token() == s)
    }
}

fn parse_vcn(s: &str) -> Option<VcnRule> {
    let mut chars = s.chars();
    let side = match chars.next()? {
        'B' => Color::Black,
        'W' => Color::White,
        _ => return None,
    };
    let level = chars.as_str().parse().ok()?;
    Some(VcnRule::Vc { side, level })
}

fn parse_flag(s: &str) -> Option<bool> {
    match s {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

/// Split `koSIMPLEsui1` into `[("ko", "SIMPLE"), ("sui", "1")]`.
fn split_tokens(s: &str) -> Vec<(&str, &str)> {
    let mut tokens = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let key_end = rest.find(|c: char| !c.is_ascii_lowercase()).unwrap_or(rest.len());
        let (key, after) = rest.split_at(key_end);
        let value_end = after.find(|c: char| c.is_ascii_lowercase()).unwrap_or(after.len());
        let (value, next) = after.split_at(value_end);
        tokens.push((key, value));
        rest = next;
    }
    tokens
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ko{}score{}sui{}komi{}",
            self.ko_rule.token(),
            self.scoring_rule.token(),
            u8::from(self.multi_stone_suicide_legal),
            self.komi
        )?;
        if self.basic_rule != BasicRule::Freestyle {
            write!(f, "basic{}", self.basic_rule.token())?;
        }
        if let VcnRule::Vc { side, level } = self.vcn_rule {
            let side = match side {
                Color::Black => 'B',
                Color::White => 'W',
            };
            write!(f, "vcn{side}{level}")?;
        }
        if self.max_moves != 0 {
            write!(f, "maxmoves{}", self.max_moves)?;
        }
        if self.first_pass_win {
            write!(f, "firstpasswin1")?;
        }
        Ok(())
    }
}

impl FromStr for Rules {
    type Err = RulesError;

    /// Parse a descriptor. Missing tokens keep the values of
    /// [`Rules::tromp_taylorish`]; the result is validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = |reason: String| RulesError::Parse {
            input: input.to_string(),
            reason,
        };
        let mut rules = Rules::tromp_taylorish();
        let mut seen: Vec<&str> = Vec::new();

        for (key, value) in split_tokens(input) {
            if seen.contains(&key) {
                return Err(err(format!("duplicate token {key:?}")));
            }
            seen.push(key);
            let bad_value = || err(format!("bad value {value:?} for {key:?}"));
            match key {
                "ko" => rules.ko_rule = KoRule::from_token(value).ok_or_else(bad_value)?,
                "score" => {
                    rules.scoring_rule = ScoringRule::from_token(value).ok_or_else(bad_value)?
                }
                "sui" => rules.multi_stone_suicide_legal = parse_flag(value).ok_or_else(bad_value)?,
                "komi" => rules.komi = value.parse().map_err(|_| bad_value())?,
                "basic" => rules.basic_rule = BasicRule::from_token(value).ok_or_else(bad_value)?,
                "vcn" => rules.vcn_rule = parse_vcn(value).ok_or_else(bad_value)?,
                "maxmoves" => rules.max_moves = value.parse().map_err(|_| bad_value())?,
                "firstpasswin" => rules.first_pass_win = parse_flag(value).ok_or_else(bad_value)?,
                "" => return Err(err(format!("value {value:?} without a key"))),
                other => return Err(err(format!("unknown token {other:?}"))),
            }
        }

        rules.validate()?;
        Ok(rules)
    }
}
