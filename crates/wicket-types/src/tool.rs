//! Tool identity and argument-contract types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated identifier for a query tool.
///
/// The tool catalog is fixed at compile time; dispatch goes through this
/// enum rather than free-form strings so an unknown name is unrepresentable
/// past the registry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    GetTeamInfo,
    GetPlayerInfo,
    GetMatchDetails,
    GetBallByBall,
    GetPlayerPerformance,
    GetMatchOfficials,
    GetVenueInfo,
}

impl ToolName {
    /// All tools in catalog order.
    pub const ALL: [ToolName; 7] = [
        ToolName::GetTeamInfo,
        ToolName::GetPlayerInfo,
        ToolName::GetMatchDetails,
        ToolName::GetBallByBall,
        ToolName::GetPlayerPerformance,
        ToolName::GetMatchOfficials,
        ToolName::GetVenueInfo,
    ];

    /// Returns the wire name of the tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetTeamInfo => "get_team_info",
            ToolName::GetPlayerInfo => "get_player_info",
            ToolName::GetMatchDetails => "get_match_details",
            ToolName::GetBallByBall => "get_ball_by_ball",
            ToolName::GetPlayerPerformance => "get_player_performance",
            ToolName::GetMatchOfficials => "get_match_officials",
            ToolName::GetVenueInfo => "get_venue_info",
        }
    }

    /// Resolves a wire name to a tool, if it names one.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = UnknownToolName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownToolName {
            name: s.to_string(),
        })
    }
}

/// Error returned when a string names no catalog tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToolName {
    /// The name that failed to resolve.
    pub name: String,
}

impl fmt::Display for UnknownToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tool: {}", self.name)
    }
}

impl std::error::Error for UnknownToolName {}

/// Declared argument of a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolArgument {
    /// Argument name.
    pub name: String,
    /// JSON Schema type (string, integer, ...).
    #[serde(rename = "type")]
    pub arg_type: String,
    /// Human-readable description.
    pub description: String,
    /// Whether this argument is required.
    #[serde(default)]
    pub required: bool,
    /// Allowed values for enum-constrained arguments.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Default value applied when the argument is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ToolArgument {
    /// Creates an optional string argument.
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type: "string".to_string(),
            description: description.into(),
            required: false,
            enum_values: None,
            default: None,
        }
    }

    /// Creates an optional integer argument.
    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type: "integer".to_string(),
            description: description.into(),
            required: false,
            enum_values: None,
            default: None,
        }
    }

    /// Marks the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Constrains the argument to an enumerated value set.
    pub fn with_enum(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Complete declared contract of a tool: identity, description, arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Tool identity.
    pub name: ToolName,
    /// Human-readable description.
    pub description: String,
    /// Declared arguments (closed set).
    #[serde(default)]
    pub arguments: Vec<ToolArgument>,
}
