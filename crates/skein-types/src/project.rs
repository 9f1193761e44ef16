//! Knitting project kinds and their size classes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::InvalidInput;

/// Kind of project a yarn estimate is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    /// Hats and beanies.
    Hat,
    /// Scarves.
    Scarf,
    /// Pullovers and cardigans.
    Sweater,
    /// Blankets and throws.
    Blanket,
}

impl PatternType {
    /// Returns the pattern type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hat => "hat",
            Self::Scarf => "scarf",
            Self::Sweater => "sweater",
            Self::Blanket => "blanket",
        }
    }

    /// Returns the display label shown in the community UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hat => "모자",
            Self::Scarf => "목도리",
            Self::Sweater => "스웨터",
            Self::Blanket => "담요",
        }
    }

    /// Returns the size classes offered for this project, smallest first.
    #[must_use]
    pub const fn sizes(&self) -> &'static [Size] {
        match self {
            Self::Hat | Self::Sweater => &[Size::Baby, Size::Child, Size::Adult],
            Self::Scarf => &[Size::Short, Size::Medium, Size::Long],
            Self::Blanket => &[Size::Baby, Size::Throw, Size::Full],
        }
    }

    /// Returns all pattern types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hat, Self::Scarf, Self::Sweater, Self::Blanket]
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hat" => Ok(Self::Hat),
            "scarf" => Ok(Self::Scarf),
            "sweater" => Ok(Self::Sweater),
            "blanket" => Ok(Self::Blanket),
            _ => Err(InvalidInput::PatternType(s.to_string())),
        }
    }
}

/// Size class of a project.
///
/// Which sizes are meaningful depends on the [`PatternType`]; see
/// [`Size::applies_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Infant garment or crib blanket.
    Baby,
    /// Child garment.
    Child,
    /// Adult garment.
    Adult,
    /// Short scarf or cowl.
    Short,
    /// Medium scarf.
    Medium,
    /// Long wrap scarf.
    Long,
    /// Lap blanket.
    Throw,
    /// Full bed blanket.
    Full,
}

impl Size {
    /// Returns the size as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Baby => "baby",
            Self::Child => "child",
            Self::Adult => "adult",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Throw => "throw",
            Self::Full => "full",
        }
    }

    /// Returns the display label shown in the community UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Baby => "아기용",
            Self::Child => "아동용",
            Self::Adult => "성인용",
            Self::Short => "짧은",
            Self::Medium => "중간",
            Self::Long => "긴",
            Self::Throw => "무릎담요",
            Self::Full => "풀사이즈",
        }
    }

    /// Returns true if this size is offered for the given project.
    #[must_use]
    pub fn applies_to(&self, pattern_type: PatternType) -> bool {
        pattern_type.sizes().contains(self)
    }

    /// Returns all sizes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Baby,
            Self::Child,
            Self::Adult,
            Self::Short,
            Self::Medium,
            Self::Long,
            Self::Throw,
            Self::Full,
        ]
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Size {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baby" => Ok(Self::Baby),
            "child" => Ok(Self::Child),
            "adult" => Ok(Self::Adult),
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "throw" => Ok(Self::Throw),
            "full" => Ok(Self::Full),
            _ => Err(InvalidInput::Size(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_type_parse() {
        assert_eq!("hat".parse::<PatternType>().unwrap(), PatternType::Hat);
        assert_eq!("Sweater".parse::<PatternType>().unwrap(), PatternType::Sweater);
        assert_eq!(" blanket ".parse::<PatternType>().unwrap(), PatternType::Blanket);
        assert_eq!(
            "mittens".parse::<PatternType>(),
            Err(InvalidInput::PatternType("mittens".to_string()))
        );
    }

    #[test]
    fn test_size_parse() {
        assert_eq!("THROW".parse::<Size>().unwrap(), Size::Throw);
        assert!("huge".parse::<Size>().is_err());
    }

    #[test]
    fn test_sizes_per_pattern() {
        assert!(Size::Adult.applies_to(PatternType::Hat));
        assert!(Size::Baby.applies_to(PatternType::Blanket));
        assert!(!Size::Long.applies_to(PatternType::Sweater));
        assert!(!Size::Child.applies_to(PatternType::Blanket));

        // Every size belongs to at least one project.
        for size in Size::all() {
            assert!(PatternType::all().iter().any(|p| size.applies_to(*p)));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PatternType::Scarf).unwrap();
        assert_eq!(json, "\"scarf\"");
        let size: Size = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(size, Size::Medium);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PatternType::Blanket.label(), "담요");
        assert_eq!(Size::Throw.label(), "무릎담요");
    }
}
