/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use core::fmt;
use core::str::FromStr;

#[cfg(windows)]
const SYSTEM_NEWLINE: &[u8] = b"\r\n";
#[cfg(not(windows))]
const SYSTEM_NEWLINE: &[u8] = b"\n";

/// Line terminator used for every newline of a declaration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Newline {
    /// `\r\n`
    Dos,
    /// `\r`
    Mac,
    /// `\n`
    Unix,
    /// Whatever the host uses.
    #[default]
    System,
}

impl Newline {
    pub const NAMES: [&'static str; 4] = ["dos", "mac", "unix", "system"];

    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Newline::Dos => b"\r\n",
            Newline::Mac => b"\r",
            Newline::Unix => b"\n",
            Newline::System => SYSTEM_NEWLINE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Newline::Dos => "dos",
            Newline::Mac => "mac",
            Newline::Unix => "unix",
            Newline::System => "system",
        }
    }
}

impl FromStr for Newline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dos" => Ok(Newline::Dos),
            "mac" => Ok(Newline::Mac),
            "unix" => Ok(Newline::Unix),
            "system" => Ok(Newline::System),
            other => Err(format!(
                "unknown newline mode '{other}', expected one of {}",
                Newline::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for Newline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
