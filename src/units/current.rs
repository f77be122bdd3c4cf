use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 전류 단위. 내부 기준은 암페어이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentUnit {
    MilliAmpere,
    Ampere,
    KiloAmpere,
}

impl ScaledUnit for CurrentUnit {
    const ALL: &'static [Self] = &[
        CurrentUnit::MilliAmpere,
        CurrentUnit::Ampere,
        CurrentUnit::KiloAmpere,
    ];

    fn symbol(self) -> &'static str {
        match self {
            CurrentUnit::MilliAmpere => "mA",
            CurrentUnit::Ampere => "A",
            CurrentUnit::KiloAmpere => "kA",
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            CurrentUnit::MilliAmpere => 1e-3,
            CurrentUnit::Ampere => 1.0,
            CurrentUnit::KiloAmpere => 1e3,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            CurrentUnit::MilliAmpere => &["milliamp", "m"],
            CurrentUnit::Ampere => &["amp", "ampere"],
            CurrentUnit::KiloAmpere => &["kiloamp", "k"],
        }
    }
}
