use std::fmt;
use std::str::FromStr;

/// Record classes from RFC 1035 §3.2.4 and §3.2.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordClass {
    #[default]
    IN,
    CS,
    CH,
    HS,
    ANY,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CS => "CS",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::ANY => 255,
        }
    }

    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordClass::IN),
            2 => Some(RecordClass::CS),
            3 => Some(RecordClass::CH),
            4 => Some(RecordClass::HS),
            255 => Some(RecordClass::ANY),
            _ => None,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(RecordClass::IN),
            "CS" => Ok(RecordClass::CS),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            "ANY" | "*" => Ok(RecordClass::ANY),
            _ => Err(format!("Unknown record class: {}", s)),
        }
    }
}
