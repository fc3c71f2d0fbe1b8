use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

pub const SOCKET_NAME: &str = "gyre.sock";

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct HexColor(String);

crate::impl_string_newtype!(HexColor);

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Verb {
    Pause,
    Resume,
    Toggle,
    Reload,
    Debug,
    LineWidth,
    Speed,
    Color,
    Animate,
}

/// One line of the control protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    Pause,
    Resume,
    Toggle,
    Reload,
    Debug,
    LineWidth(f64),
    Speed(f64),
    Color(HexColor),
    Animate(bool),
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownVerb(String),
    #[error("'{verb}' expects a value")]
    MissingValue { verb: Verb },
    #[error("'{verb}' takes no value")]
    UnexpectedValue { verb: Verb },
    #[error("invalid value '{value}' for '{verb}'")]
    InvalidValue { verb: Verb, value: String },
}

impl ControlCommand {
    pub fn verb(&self) -> Verb {
        match self {
            Self::Pause => Verb::Pause,
            Self::Resume => Verb::Resume,
            Self::Toggle => Verb::Toggle,
            Self::Reload => Verb::Reload,
            Self::Debug => Verb::Debug,
            Self::LineWidth(_) => Verb::LineWidth,
            Self::Speed(_) => Verb::Speed,
            Self::Color(_) => Verb::Color,
            Self::Animate(_) => Verb::Animate,
        }
    }
}

fn parse_value<T: FromStr>(verb: Verb, value: &str) -> Result<T, CommandParseError> {
    value.parse().map_err(|_| CommandParseError::InvalidValue {
        verb,
        value: value.to_string(),
    })
}

impl FromStr for ControlCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandParseError::Empty)?;
        let verb =
            Verb::from_str(word).map_err(|_| CommandParseError::UnknownVerb(word.to_string()))?;
        let value = words.next();

        if words.next().is_some() {
            return Err(CommandParseError::UnexpectedValue { verb });
        }

        match (verb, value) {
            (Verb::Pause, None) => Ok(Self::Pause),
            (Verb::Resume, None) => Ok(Self::Resume),
            (Verb::Toggle, None) => Ok(Self::Toggle),
            (Verb::Reload, None) => Ok(Self::Reload),
            (Verb::Debug, None) => Ok(Self::Debug),
            (Verb::Pause | Verb::Resume | Verb::Toggle | Verb::Reload | Verb::Debug, Some(_)) => {
                Err(CommandParseError::UnexpectedValue { verb })
            }
            (_, None) => Err(CommandParseError::MissingValue { verb }),
            (Verb::LineWidth, Some(v)) => parse_value(verb, v).map(Self::LineWidth),
            (Verb::Speed, Some(v)) => parse_value(verb, v).map(Self::Speed),
            (Verb::Animate, Some(v)) => parse_value(verb, v).map(Self::Animate),
            (Verb::Color, Some(v)) => Ok(Self::Color(HexColor::new(v))),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.verb();
        match self {
            Self::LineWidth(v) | Self::Speed(v) => write!(f, "{verb} {v}"),
            Self::Color(c) => write!(f, "{verb} {c}"),
            Self::Animate(b) => write!(f, "{verb} {b}"),
            _ => write!(f, "{verb}"),
        }
    }
}

/// `$XDG_RUNTIME_DIR/gyre.sock`, or `/tmp/gyre.sock` when no runtime dir is set.
pub fn socket_path() -> PathBuf {
    directories::BaseDirs::new()
        .and_then(|dirs| dirs.runtime_dir().map(|dir| dir.join(SOCKET_NAME)))
        .unwrap_or_else(|| PathBuf::from("/tmp").join(SOCKET_NAME))
}

pub fn send(cmd: &ControlCommand) -> std::io::Result<()> {
    let mut stream = UnixStream::connect(socket_path())?;
    writeln!(stream, "{}", cmd)
}
