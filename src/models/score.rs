//! Side, score fields and per-side ScoreState.

use crate::models::session::KumiteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which competitor a score applies to. Aka fights from slot 0 (red), shiro from slot 1 (white).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[serde(alias = "red")]
    Aka,
    #[serde(alias = "white")]
    Shiro,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Aka, Side::Shiro];

    pub fn opponent(self) -> Side {
        match self {
            Side::Aka => Side::Shiro,
            Side::Shiro => Side::Aka,
        }
    }

    /// Position of this side in a match pair.
    pub fn index(self) -> usize {
        match self {
            Side::Aka => 0,
            Side::Shiro => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Aka => "aka",
            Side::Shiro => "shiro",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = KumiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aka" | "red" => Ok(Side::Aka),
            "shiro" | "white" => Ok(Side::Shiro),
            other => Err(KumiteError::UnknownAction(other.to_string())),
        }
    }
}

/// A mutable field of ScoreState: the `actionKind` of a scoring action.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreField {
    Wazari,
    Ippon,
    Kinshi,
    KinshiNi,
    KinshiChui,
    KinshiHansoku,
    Atenai,
    AtenaiChui,
    AtenaiHansoku,
    Shikaku,
    Kiken,
}

const KINSHI_LADDER: [ScoreField; 4] = [
    ScoreField::Kinshi,
    ScoreField::KinshiNi,
    ScoreField::KinshiChui,
    ScoreField::KinshiHansoku,
];

const ATENAI_LADDER: [ScoreField; 3] = [
    ScoreField::Atenai,
    ScoreField::AtenaiChui,
    ScoreField::AtenaiHansoku,
];

impl ScoreField {
    pub const ALL: [ScoreField; 11] = [
        ScoreField::Wazari,
        ScoreField::Ippon,
        ScoreField::Kinshi,
        ScoreField::KinshiNi,
        ScoreField::KinshiChui,
        ScoreField::KinshiHansoku,
        ScoreField::Atenai,
        ScoreField::AtenaiChui,
        ScoreField::AtenaiHansoku,
        ScoreField::Shikaku,
        ScoreField::Kiken,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreField::Wazari => "wazari",
            ScoreField::Ippon => "ippon",
            ScoreField::Kinshi => "kinshi",
            ScoreField::KinshiNi => "kinshiNi",
            ScoreField::KinshiChui => "kinshiChui",
            ScoreField::KinshiHansoku => "kinshiHansoku",
            ScoreField::Atenai => "atenai",
            ScoreField::AtenaiChui => "atenaiChui",
            ScoreField::AtenaiHansoku => "atenaiHansoku",
            ScoreField::Shikaku => "shikaku",
            ScoreField::Kiken => "kiken",
        }
    }

    /// Wazari and ippon are counters; everything else is a flag.
    pub fn is_counter(self) -> bool {
        matches!(self, ScoreField::Wazari | ScoreField::Ippon)
    }

    /// Penalties that end the match for the penalised side.
    pub fn is_terminal_penalty(self) -> bool {
        matches!(
            self,
            ScoreField::KinshiHansoku
                | ScoreField::AtenaiHansoku
                | ScoreField::Shikaku
                | ScoreField::Kiken
        )
    }

    fn ladder(self) -> Option<&'static [ScoreField]> {
        if KINSHI_LADDER.contains(&self) {
            Some(&KINSHI_LADDER)
        } else if ATENAI_LADDER.contains(&self) {
            Some(&ATENAI_LADDER)
        } else {
            None
        }
    }

    /// Flag that must already be set before this one may be set.
    pub fn ladder_predecessor(self) -> Option<ScoreField> {
        let ladder = self.ladder()?;
        let pos = ladder.iter().position(|f| *f == self)?;
        pos.checked_sub(1).map(|p| ladder[p])
    }

    /// Flag that must be clear before this one may be cleared.
    pub fn ladder_successor(self) -> Option<ScoreField> {
        let ladder = self.ladder()?;
        let pos = ladder.iter().position(|f| *f == self)?;
        ladder.get(pos + 1).copied()
    }

    /// Human-readable history description for an applied value.
    pub fn describe(self, value: ScoreValue) -> String {
        match (self, value) {
            (ScoreField::Wazari, _) => "Waza-ari (+1)".to_string(),
            (ScoreField::Ippon, _) => "Ippon (+1)".to_string(),
            (field, value) => format!("{} ({})", field.as_str(), value),
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreField {
    type Err = KumiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreField::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| KumiteError::UnknownAction(s.to_string()))
    }
}

/// Value held by a score field: a count for wazari/ippon, a flag for penalties.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Count(u32),
    Flag(bool),
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Count(n) => write!(f, "{}", n),
            ScoreValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Live score and penalty state of one side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreState {
    pub wazari: u32,
    pub ippon: u32,
    pub kinshi: bool,
    pub kinshi_ni: bool,
    pub kinshi_chui: bool,
    pub kinshi_hansoku: bool,
    pub atenai: bool,
    pub atenai_chui: bool,
    pub atenai_hansoku: bool,
    pub shikaku: bool,
    pub kiken: bool,
    pub display_name: String,
}

impl ScoreState {
    /// Zeroed state for a side showing `display_name`.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            wazari: 0,
            ippon: 0,
            kinshi: false,
            kinshi_ni: false,
            kinshi_chui: false,
            kinshi_hansoku: false,
            atenai: false,
            atenai_chui: false,
            atenai_hansoku: false,
            shikaku: false,
            kiken: false,
            display_name: display_name.into(),
        }
    }

    /// Score in half points (one wazari = 1, one ippon = 2).
    pub fn half_points(&self) -> u32 {
        self.wazari + 2 * self.ippon
    }

    /// `wazari * 0.5 + ippon`.
    pub fn points(&self) -> f64 {
        f64::from(self.half_points()) / 2.0
    }

    pub fn get(&self, field: ScoreField) -> ScoreValue {
        match field {
            ScoreField::Wazari => ScoreValue::Count(self.wazari),
            ScoreField::Ippon => ScoreValue::Count(self.ippon),
            flag => ScoreValue::Flag(self.flag(flag).unwrap_or_default()),
        }
    }

    /// Store `value` in `field`. The value type must match the field (count vs flag).
    pub fn set(&mut self, field: ScoreField, value: ScoreValue) -> Result<(), KumiteError> {
        match (field, value) {
            (ScoreField::Wazari, ScoreValue::Count(n)) => self.wazari = n,
            (ScoreField::Ippon, ScoreValue::Count(n)) => self.ippon = n,
            (flag, ScoreValue::Flag(b)) => match self.flag_mut(flag) {
                Some(slot) => *slot = b,
                None => return Err(KumiteError::ValueMismatch { field }),
            },
            _ => return Err(KumiteError::ValueMismatch { field }),
        }
        Ok(())
    }

    fn flag(&self, field: ScoreField) -> Option<bool> {
        let value = match field {
            ScoreField::Kinshi => self.kinshi,
            ScoreField::KinshiNi => self.kinshi_ni,
            ScoreField::KinshiChui => self.kinshi_chui,
            ScoreField::KinshiHansoku => self.kinshi_hansoku,
            ScoreField::Atenai => self.atenai,
            ScoreField::AtenaiChui => self.atenai_chui,
            ScoreField::AtenaiHansoku => self.atenai_hansoku,
            ScoreField::Shikaku => self.shikaku,
            ScoreField::Kiken => self.kiken,
            ScoreField::Wazari | ScoreField::Ippon => return None,
        };
        Some(value)
    }

    fn flag_mut(&mut self, field: ScoreField) -> Option<&mut bool> {
        let slot = match field {
            ScoreField::Kinshi => &mut self.kinshi,
            ScoreField::KinshiNi => &mut self.kinshi_ni,
            ScoreField::KinshiChui => &mut self.kinshi_chui,
            ScoreField::KinshiHansoku => &mut self.kinshi_hansoku,
            ScoreField::Atenai => &mut self.atenai,
            ScoreField::AtenaiChui => &mut self.atenai_chui,
            ScoreField::AtenaiHansoku => &mut self.atenai_hansoku,
            ScoreField::Shikaku => &mut self.shikaku,
            ScoreField::Kiken => &mut self.kiken,
            ScoreField::Wazari | ScoreField::Ippon => return None,
        };
        Some(slot)
    }

    /// Current value of a flag field; false for counters.
    pub fn is_set(&self, field: ScoreField) -> bool {
        self.flag(field).unwrap_or(false)
    }
}

/// Both sides' score state.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub aka: ScoreState,
    pub shiro: ScoreState,
}

impl Default for Scores {
    fn default() -> Self {
        Self::named("AKA", "SHIRO")
    }
}

impl Scores {
    pub fn named(aka: impl Into<String>, shiro: impl Into<String>) -> Self {
        Self {
            aka: ScoreState::new(aka),
            shiro: ScoreState::new(shiro),
        }
    }

    pub fn side(&self, side: Side) -> &ScoreState {
        match side {
            Side::Aka => &self.aka,
            Side::Shiro => &self.shiro,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut ScoreState {
        match side {
            Side::Aka => &mut self.aka,
            Side::Shiro => &mut self.shiro,
        }
    }
}
