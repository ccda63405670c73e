//! Priority values: facility and severity.
//!
//! PRI is `facility * 8 + severity` (RFC 5424 §6.2.1), so the valid range
//! is 0..=191. Names follow the conventional syslog.conf keywords.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

/// Highest valid PRI value (local7.debug).
pub const MAX_PRIORITY: u8 = 191;

/// Message facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Facility {
    Kern = 0,
    User,
    Mail,
    Daemon,
    Auth,
    Syslog,
    Lpr,
    News,
    Uucp,
    Cron,
    AuthPriv,
    Ftp,
    Ntp,
    Audit,
    Alert,
    Clock,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
}

const FACILITIES: [Facility; 24] = [
    Facility::Kern,
    Facility::User,
    Facility::Mail,
    Facility::Daemon,
    Facility::Auth,
    Facility::Syslog,
    Facility::Lpr,
    Facility::News,
    Facility::Uucp,
    Facility::Cron,
    Facility::AuthPriv,
    Facility::Ftp,
    Facility::Ntp,
    Facility::Audit,
    Facility::Alert,
    Facility::Clock,
    Facility::Local0,
    Facility::Local1,
    Facility::Local2,
    Facility::Local3,
    Facility::Local4,
    Facility::Local5,
    Facility::Local6,
    Facility::Local7,
];

static FACILITY_NAMES: phf::Map<&'static str, Facility> = phf_map! {
    "kern" => Facility::Kern,
    "user" => Facility::User,
    "mail" => Facility::Mail,
    "daemon" => Facility::Daemon,
    "auth" => Facility::Auth,
    "security" => Facility::Auth,
    "syslog" => Facility::Syslog,
    "lpr" => Facility::Lpr,
    "news" => Facility::News,
    "uucp" => Facility::Uucp,
    "cron" => Facility::Cron,
    "authpriv" => Facility::AuthPriv,
    "ftp" => Facility::Ftp,
    "ntp" => Facility::Ntp,
    "audit" => Facility::Audit,
    "alert" => Facility::Alert,
    "clock" => Facility::Clock,
    "local0" => Facility::Local0,
    "local1" => Facility::Local1,
    "local2" => Facility::Local2,
    "local3" => Facility::Local3,
    "local4" => Facility::Local4,
    "local5" => Facility::Local5,
    "local6" => Facility::Local6,
    "local7" => Facility::Local7,
};

impl Facility {
    /// Facility from its numeric code (0..=23).
    pub fn from_code(code: u8) -> Option<Self> {
        FACILITIES.get(code as usize).copied()
    }

    /// Look up a facility keyword such as `local4` or `authpriv`.
    pub fn from_name(name: &str) -> Option<Self> {
        FACILITY_NAMES.get(name).copied()
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical keyword for this facility.
    pub fn name(self) -> &'static str {
        match self {
            Self::Kern => "kern",
            Self::User => "user",
            Self::Mail => "mail",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Syslog => "syslog",
            Self::Lpr => "lpr",
            Self::News => "news",
            Self::Uucp => "uucp",
            Self::Cron => "cron",
            Self::AuthPriv => "authpriv",
            Self::Ftp => "ftp",
            Self::Ntp => "ntp",
            Self::Audit => "audit",
            Self::Alert => "alert",
            Self::Clock => "clock",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

/// Message severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Informational,
    Debug,
}

const SEVERITIES: [Severity; 8] = [
    Severity::Emergency,
    Severity::Alert,
    Severity::Critical,
    Severity::Error,
    Severity::Warning,
    Severity::Notice,
    Severity::Informational,
    Severity::Debug,
];

static SEVERITY_NAMES: phf::Map<&'static str, Severity> = phf_map! {
    "emerg" => Severity::Emergency,
    "panic" => Severity::Emergency,
    "alert" => Severity::Alert,
    "crit" => Severity::Critical,
    "err" => Severity::Error,
    "error" => Severity::Error,
    "warning" => Severity::Warning,
    "warn" => Severity::Warning,
    "notice" => Severity::Notice,
    "info" => Severity::Informational,
    "debug" => Severity::Debug,
};

impl Severity {
    /// Severity from its numeric code (0..=7).
    pub fn from_code(code: u8) -> Option<Self> {
        SEVERITIES.get(code as usize).copied()
    }

    /// Look up a severity keyword such as `err` or `warning`.
    pub fn from_name(name: &str) -> Option<Self> {
        SEVERITY_NAMES.get(name).copied()
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Emergency => "emerg",
            Self::Alert => "alert",
            Self::Critical => "crit",
            Self::Error => "err",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Informational => "info",
            Self::Debug => "debug",
        }
    }
}

/// A validated PRI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
    /// Wrap a raw PRI value, `None` above 191.
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_PRIORITY).then_some(Self(value))
    }

    pub fn from_parts(facility: Facility, severity: Severity) -> Self {
        Self(facility.code() * 8 + severity.code())
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn facility(self) -> Facility {
        // 191 / 8 == 23, always in range.
        FACILITIES[(self.0 >> 3) as usize]
    }

    pub fn severity(self) -> Severity {
        SEVERITIES[(self.0 & 0x07) as usize]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.facility().name(), self.severity().name())
    }
}

/// Error parsing a `facility.severity` selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriorityParseError {
    #[error("expected facility.severity, got {0:?}")]
    Format(String),
    #[error("unknown facility {0:?}")]
    UnknownFacility(String),
    #[error("unknown severity {0:?}")]
    UnknownSeverity(String),
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    /// Parse `local4.notice` style selectors, or a bare number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<u8>() {
            return Priority::new(value).ok_or_else(|| PriorityParseError::Format(s.to_string()));
        }
        let (facility, severity) = s
            .split_once('.')
            .ok_or_else(|| PriorityParseError::Format(s.to_string()))?;
        let facility = Facility::from_name(facility)
            .ok_or_else(|| PriorityParseError::UnknownFacility(facility.to_string()))?;
        let severity = Severity::from_name(severity)
            .ok_or_else(|| PriorityParseError::UnknownSeverity(severity.to_string()))?;
        Ok(Priority::from_parts(facility, severity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        // RFC 5424 example: auth.crit
        let pri = Priority::new(34).unwrap();
        assert_eq!(pri.facility(), Facility::Auth);
        assert_eq!(pri.severity(), Severity::Critical);
        assert_eq!(pri.to_string(), "auth.crit");

        let pri = Priority::new(165).unwrap();
        assert_eq!(pri.facility(), Facility::Local4);
        assert_eq!(pri.severity(), Severity::Notice);
    }

    #[test]
    fn test_range() {
        assert!(Priority::new(0).is_some());
        assert_eq!(Priority::new(191).map(|p| p.to_string()).as_deref(), Some("local7.debug"));
        assert!(Priority::new(192).is_none());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("local4.notice".parse::<Priority>().unwrap().value(), 165);
        assert_eq!("security.warn".parse::<Priority>().unwrap().value(), 36);
        assert_eq!("13".parse::<Priority>().unwrap().value(), 13);
        assert!(matches!(
            "bogus.info".parse::<Priority>(),
            Err(PriorityParseError::UnknownFacility(_))
        ));
        assert!(matches!("kern".parse::<Priority>(), Err(PriorityParseError::Format(_))));
        assert!("200".parse::<Priority>().is_err());
    }

    #[test]
    fn test_codes_roundtrip_names() {
        for code in 0..24u8 {
            let facility = Facility::from_code(code).unwrap();
            assert_eq!(Facility::from_name(facility.name()), Some(facility));
        }
        for code in 0..8u8 {
            let severity = Severity::from_code(code).unwrap();
            assert_eq!(Severity::from_name(severity.name()), Some(severity));
        }
        assert_eq!(Facility::from_code(24), None);
    }
}
