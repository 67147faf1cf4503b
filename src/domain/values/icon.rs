use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icon assets shipped with the UI library. Each is registered as a global
/// component under its PascalCase name during bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Icon {
    Aim,
    ArrowLeft,
    ArrowRight,
    Bell,
    CircleCheck,
    CircleClose,
    DataAnalysis,
    Delete,
    Edit,
    Expand,
    Fold,
    Histogram,
    House,
    Menu,
    Opportunity,
    Plus,
    Refresh,
    Search,
    Setting,
    SwitchButton,
    TrendCharts,
    User,
    Wallet,
    Warning,
}

impl Icon {
    pub const ALL: [Icon; 24] = [
        Icon::Aim,
        Icon::ArrowLeft,
        Icon::ArrowRight,
        Icon::Bell,
        Icon::CircleCheck,
        Icon::CircleClose,
        Icon::DataAnalysis,
        Icon::Delete,
        Icon::Edit,
        Icon::Expand,
        Icon::Fold,
        Icon::Histogram,
        Icon::House,
        Icon::Menu,
        Icon::Opportunity,
        Icon::Plus,
        Icon::Refresh,
        Icon::Search,
        Icon::Setting,
        Icon::SwitchButton,
        Icon::TrendCharts,
        Icon::User,
        Icon::Wallet,
        Icon::Warning,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Aim => "Aim",
            Icon::ArrowLeft => "ArrowLeft",
            Icon::ArrowRight => "ArrowRight",
            Icon::Bell => "Bell",
            Icon::CircleCheck => "CircleCheck",
            Icon::CircleClose => "CircleClose",
            Icon::DataAnalysis => "DataAnalysis",
            Icon::Delete => "Delete",
            Icon::Edit => "Edit",
            Icon::Expand => "Expand",
            Icon::Fold => "Fold",
            Icon::Histogram => "Histogram",
            Icon::House => "House",
            Icon::Menu => "Menu",
            Icon::Opportunity => "Opportunity",
            Icon::Plus => "Plus",
            Icon::Refresh => "Refresh",
            Icon::Search => "Search",
            Icon::Setting => "Setting",
            Icon::SwitchButton => "SwitchButton",
            Icon::TrendCharts => "TrendCharts",
            Icon::User => "User",
            Icon::Wallet => "Wallet",
            Icon::Warning => "Warning",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| format!("Unknown icon: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Icon::ALL.iter().map(|i| i.name()).collect();
        assert_eq!(names.len(), Icon::ALL.len());
    }

    #[test]
    fn test_parse_round_trips_display() {
        for icon in Icon::ALL {
            assert_eq!(icon.to_string().parse::<Icon>().unwrap(), icon);
        }
        assert!("NotAnIcon".parse::<Icon>().is_err());
    }
}
