//! Static tournament data displayed on the page.

pub const PRIZE_POOL: u32 = 300_000;
pub const TOTAL_TEAMS: u32 = 24;
pub const TOURNAMENT_DAYS: u32 = 7;

pub const GROUPS: &[&str] = &["Group A", "Group B", "Group C", "Group D"];
pub const TEAMS_PER_GROUP: u32 = 6;

/// Accent color of a card. Maps to a css modifier class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Gold,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Gold => "gold",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const ROADMAP: &[Step] = &[
    Step {
        title: "Group Stage (Days 1-4)",
        detail: "Round robin format",
    },
    Step {
        title: "Play-ins (Day 5)",
        detail: "Teams #9-20 compete",
    },
    Step {
        title: "Champion Rush (Day 6)",
        detail: "Grand finals format",
    },
    Step {
        title: "Clash Squad (Day 7)",
        detail: "Top 8 teams battle",
    },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchDay {
    pub event: &'static str,
    pub tone: Tone,
}

/// One entry per tournament day, starting at day 1.
pub const TIMELINE: &[MatchDay] = &[
    MatchDay {
        event: "Group A vs B",
        tone: Tone::Primary,
    },
    MatchDay {
        event: "Group B vs C",
        tone: Tone::Secondary,
    },
    MatchDay {
        event: "Group C vs D",
        tone: Tone::Accent,
    },
    MatchDay {
        event: "Group D vs A",
        tone: Tone::Primary,
    },
    MatchDay {
        event: "Play-ins",
        tone: Tone::Secondary,
    },
    MatchDay {
        event: "Champion Rush Grand Finals",
        tone: Tone::Gold,
    },
    MatchDay {
        event: "Clash Squad Showdown",
        tone: Tone::Accent,
    },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Prize {
    pub place: &'static str,
    pub title: &'static str,
    pub amount: u32,
    pub tone: Tone,
}

pub const PRIZES: &[Prize] = &[
    Prize {
        place: "Champion",
        title: "Tournament Champion",
        amount: 100_000,
        tone: Tone::Gold,
    },
    Prize {
        place: "Runner-Up",
        title: "Finalist",
        amount: 70_000,
        tone: Tone::Primary,
    },
    Prize {
        place: "2nd Runner-Up",
        title: "Podium Finisher",
        amount: 30_000,
        tone: Tone::Secondary,
    },
    Prize {
        place: "MVP",
        title: "Player of the Tournament",
        amount: 20_000,
        tone: Tone::Accent,
    },
    Prize {
        place: "Clash Squad Winner",
        title: "CS Master",
        amount: 80_000,
        tone: Tone::Gold,
    },
];

/// Battle royale placement points, best placement first.
pub const PLACEMENT_POINTS: &[(&str, u32)] = &[
    ("1st", 12),
    ("2nd", 9),
    ("3rd", 8),
    ("4th", 7),
    ("5th", 6),
    ("6th", 5),
    ("7th", 4),
    ("8th", 3),
    ("9th", 2),
    ("10th", 1),
    ("11th-12th", 0),
];

pub const POINTS_PER_KILL: u32 = 1;

pub const TIE_BREAKERS: &[&str] = &[
    "Number of Booyahs",
    "Total Kills",
    "Placement in Last Match",
];

pub const MATCHES_PER_DAY: u32 = 6;

/// The battle royale map pool in rotation order.
pub const BATTLE_ROYALE_MAPS: &[&str] = &[
    "Bermuda",
    "Purgatory",
    "Kalahari",
    "Alpine",
    "Nexterra",
    "Solara",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    pub name: &'static str,
    pub best_of: u32,
    pub matches: u32,
}

/// The Clash Squad bracket on the final day.
pub const CLASH_SQUAD_STAGES: &[Stage] = &[
    Stage {
        name: "Quarterfinals",
        best_of: 1,
        matches: 4,
    },
    Stage {
        name: "Semifinals",
        best_of: 3,
        matches: 2,
    },
    Stage {
        name: "Finals",
        best_of: 5,
        matches: 1,
    },
];

/// Returns the maps played in a Clash Squad series of `best_of` games. A series plays the
/// first `best_of` maps of the battle royale pool.
pub fn clash_squad_maps(best_of: u32) -> &'static [&'static str] {
    let len = (best_of as usize).min(BATTLE_ROYALE_MAPS.len());
    &BATTLE_ROYALE_MAPS[..len]
}

/// Formats an amount of rupees with Indian digit grouping, e.g. `₹3,00,000`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    let (mut head, tail) = digits.split_at(digits.len().saturating_sub(3));

    // Above the thousands, digits are grouped in pairs.
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, group) = head.split_at(head.len() - 2);
        groups.push(group);
        head = rest;
    }
    if !head.is_empty() {
        groups.push(head);
    }
    groups.reverse();
    groups.push(tail);

    format!("₹{}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(70_000), "₹70,000");
        assert_eq!(format_inr(100_000), "₹1,00,000");
        assert_eq!(format_inr(300_000), "₹3,00,000");
        assert_eq!(format_inr(1_234_567), "₹12,34,567");
        assert_eq!(format_inr(123_456_789), "₹12,34,56,789");
    }

    #[test]
    fn test_prizes_match_pool() {
        let total: u32 = PRIZES.iter().map(|prize| prize.amount).sum();
        assert_eq!(total, PRIZE_POOL);
    }

    #[test]
    fn test_groups_match_teams() {
        assert_eq!(GROUPS.len() as u32 * TEAMS_PER_GROUP, TOTAL_TEAMS);
    }

    #[test]
    fn test_timeline_covers_days() {
        assert_eq!(TIMELINE.len() as u32, TOURNAMENT_DAYS);
    }

    #[test]
    fn test_placement_points_decreasing() {
        assert_eq!(PLACEMENT_POINTS.first(), Some(&("1st", 12)));

        for pair in PLACEMENT_POINTS.windows(2) {
            assert!(pair[0].1 >= pair[1].1, "{:?}", pair);
        }
    }

    #[test]
    fn test_clash_squad_maps() {
        assert_eq!(clash_squad_maps(1), ["Bermuda"]);
        assert_eq!(clash_squad_maps(3), ["Bermuda", "Purgatory", "Kalahari"]);
        assert_eq!(clash_squad_maps(5).len(), 5);
        assert_eq!(clash_squad_maps(99).len(), BATTLE_ROYALE_MAPS.len());

        for stage in CLASH_SQUAD_STAGES {
            assert_eq!(clash_squad_maps(stage.best_of).len() as u32, stage.best_of);
        }
    }
}
