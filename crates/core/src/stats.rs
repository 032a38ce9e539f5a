// SPDX-License-Identifier: MIT

//!
//! Career stats (shown on the experience page)
//!

use crate::{Clock, ExitType, Portfolio, Position};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// How many skills [`PortfolioStats::top_skills`] holds at most
pub const TOP_SKILL_COUNT: usize = 10;

/// e.g. `$120M` or `$1.2B` (the number only)
static DOLLAR_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+(?:\.\d+)?)").expect("valid dollar amount regex"));

/// Every `N%` in a description
static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)%").expect("valid percentage regex"));

/// Any number, optionally with a `k`/`m`/`b` suffix
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)[kmb]?\+?").expect("valid number regex"));

/// e.g. `25 designers`
static TEAM_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+designers?").expect("valid team size regex"));

/// e.g. `$2B` or `$120m` (revenue in millions or billions)
static REVENUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$(\d+(?:\.\d+)?)([mb])").expect("valid revenue regex"));

/// Whether a skill shows up in more than one position
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTrend {
    /// Used in more than one position
    Growing,

    /// Used in one position only
    Stable,
}

/// How often a skill (position tag) appears and over which years
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillUsage {
    pub skill: String,

    /// The number of positions tagged with the skill
    pub frequency: usize,

    pub first_year: i32,
    pub last_year: i32,
    pub trend: SkillTrend,
}

/// A company exit
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExitOutcome {
    /// First word of the company name
    pub company: String,

    pub exit_type: ExitType,

    /// The first dollar amount in the exit details (units as written, e.g.
    /// `$1.2B` gives 1.2), or 0 if there isn't one
    pub value: f64,
}

/// One row per position for the experience charts
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PositionSummary {
    pub company: String,
    pub period: String,

    /// The year the position started
    pub year: i32,

    pub achievements: usize,
    pub tags: usize,
    pub exit_type: Option<ExitType>,
}

/// Impact numbers pulled out of a position's achievement descriptions.  Each
/// is 0 when no description mentions it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ImpactMetrics {
    /// First word of the company name
    pub company: String,

    /// Largest percentage given for anything about users
    pub user_growth: u32,

    /// Number of designers in the last description that mentions a team
    pub team_size: u32,

    /// Revenue in millions (billions are scaled up), from the last description
    /// that mentions one
    pub revenue: f64,

    /// Largest percentage given for a reduction
    pub efficiency: u32,
}

impl ImpactMetrics {
    pub fn from(position: &Position) -> Self {
        let mut metrics = ImpactMetrics {
            company: first_word(&position.company),
            user_growth: 0,
            team_size: 0,
            revenue: 0.0,
            efficiency: 0,
        };

        for achievement in &position.achievements {
            let description = achievement.description().to_lowercase();
            let first_percent: Option<u32> = PERCENT_RE
                .captures(&description)
                .and_then(|captures| captures[1].parse().ok());
            let has_number = NUMBER_RE.is_match(&description);

            if let Some(percent) = first_percent {
                if description.contains("user") {
                    metrics.user_growth = metrics.user_growth.max(percent);
                }
                if description.contains("reduc") {
                    metrics.efficiency = metrics.efficiency.max(percent);
                }
            }
            if description.contains("team") && has_number {
                if let Some(size) = TEAM_SIZE_RE
                    .captures(&description)
                    .and_then(|captures| captures[1].parse().ok())
                {
                    metrics.team_size = size;
                }
            }
            if description.contains('$') && has_number {
                if let Some(captures) = REVENUE_RE.captures(&description) {
                    if let Ok(value) = captures[1].parse::<f64>() {
                        metrics.revenue = match &captures[2] {
                            "b" | "B" => value * 1000.0,
                            _ => value,
                        };
                    }
                }
            }
        }
        metrics
    }
}

/// Headline numbers for the whole portfolio
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PortfolioStats {
    pub total_positions: usize,
    pub total_achievements: usize,
    pub unique_skills: usize,

    /// Most used skills first.  Skills used equally often keep the order in
    /// which they were first seen.
    pub top_skills: Vec<SkillUsage>,

    pub exits: Vec<ExitOutcome>,

    /// In data order
    pub positions: Vec<PositionSummary>,

    /// In data order
    pub impact: Vec<ImpactMetrics>,
}

impl PortfolioStats {
    /// Count everything in the portfolio.  Each tag is dated by the start year
    /// of the position it's on.
    pub fn from(portfolio: &Portfolio, clock: &dyn Clock) -> Self {
        let positions = portfolio.positions();

        // Skill name -> years (first-seen order)
        let mut skills: Vec<(&str, Vec<i32>)> = Vec::new();
        for position in positions {
            let year = position.parsed_period(clock).start.year().value();
            for tag in &position.tags {
                match skills.iter_mut().find(|(skill, _)| *skill == tag.as_str()) {
                    Some((_, years)) => years.push(year),
                    None => skills.push((tag.as_str(), vec![year])),
                }
            }
        }

        let unique_skills = skills.len();
        let mut top_skills: Vec<SkillUsage> = skills
            .into_iter()
            .map(|(skill, years)| SkillUsage {
                skill: skill.to_string(),
                frequency: years.len(),
                first_year: years.iter().copied().min().unwrap_or_default(),
                last_year: years.iter().copied().max().unwrap_or_default(),
                trend: if years.len() > 1 {
                    SkillTrend::Growing
                } else {
                    SkillTrend::Stable
                },
            })
            .collect();
        // Stable sort
        top_skills.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        top_skills.truncate(TOP_SKILL_COUNT);

        let exits = positions
            .iter()
            .filter_map(|position| {
                let exit = position.exit.as_ref()?;
                Some(ExitOutcome {
                    company: first_word(&position.company),
                    exit_type: exit.exit_type,
                    value: first_dollar_amount(&exit.details).unwrap_or(0.0),
                })
            })
            .collect();

        let summaries = positions
            .iter()
            .map(|position| PositionSummary {
                company: position.company.clone(),
                period: position.period.clone(),
                year: position.parsed_period(clock).start.year().value(),
                achievements: position.achievements.len(),
                tags: position.tags.len(),
                exit_type: position.exit.as_ref().map(|exit| exit.exit_type),
            })
            .collect();

        PortfolioStats {
            total_positions: positions.len(),
            total_achievements: positions.iter().map(|p| p.achievements.len()).sum(),
            unique_skills,
            top_skills,
            exits,
            positions: summaries,
            impact: positions.iter().map(ImpactMetrics::from).collect(),
        }
    }
}

/// The number following the first `$` that's followed by a digit, e.g. `120`
/// in `"raising $120M"`
fn first_dollar_amount(text: &str) -> Option<f64> {
    DOLLAR_AMOUNT_RE
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
}

fn first_word(text: &str) -> String {
    text.split_whitespace().next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::portfolio::test::test_portfolio;
    use crate::{Date, FixedClock};

    fn stats() -> PortfolioStats {
        let clock = FixedClock(Date::from(1, 1, 2024).unwrap());
        PortfolioStats::from(&test_portfolio(), &clock)
    }

    #[test]
    fn totals() {
        let stats = stats();
        assert_eq!(stats.total_positions, 4);
        assert_eq!(stats.total_achievements, 11);
        assert_eq!(stats.unique_skills, 12);
    }

    #[test]
    fn top_skills() {
        let stats = stats();
        assert_eq!(stats.top_skills.len(), TOP_SKILL_COUNT);

        let names: Vec<&str> = stats.top_skills.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(
            names[..5],
            [
                "full-stack ux",
                "design ops",
                "international design team",
                "market leadership",
                "principal",
            ]
        );

        let full_stack = &stats.top_skills[0];
        assert_eq!(full_stack.frequency, 3);
        assert_eq!(full_stack.first_year, 2015);
        assert_eq!(full_stack.last_year, 2022);
        assert_eq!(full_stack.trend, SkillTrend::Growing);
        assert_eq!(stats.top_skills[4].trend, SkillTrend::Stable);
    }

    #[test]
    fn exits() {
        let stats = stats();
        assert_eq!(
            stats.exits,
            vec![
                ExitOutcome {
                    company: "StartupVenture".to_string(),
                    exit_type: ExitType::Ipo,
                    value: 120.0,
                },
                ExitOutcome {
                    company: "Enterprise".to_string(),
                    exit_type: ExitType::Acquisition,
                    value: 1.2,
                },
            ]
        );
    }

    #[test]
    fn position_summaries() {
        let stats = stats();
        assert_eq!(
            stats.positions[0],
            PositionSummary {
                company: "TechCorp Innovation".to_string(),
                period: "2022 - Present".to_string(),
                year: 2022,
                achievements: 3,
                tags: 5,
                exit_type: None,
            }
        );
        let rows: Vec<(i32, usize, usize, Option<ExitType>)> = stats
            .positions
            .iter()
            .map(|row| (row.year, row.achievements, row.tags, row.exit_type))
            .collect();
        assert_eq!(
            rows,
            vec![
                (2022, 3, 5, None),
                (2020, 3, 4, None),
                (2018, 3, 4, Some(ExitType::Ipo)),
                (2015, 2, 4, Some(ExitType::Acquisition)),
            ]
        );
    }

    #[test]
    fn impact_metrics() {
        let stats = stats();
        assert_eq!(
            stats.impact[0],
            ImpactMetrics {
                company: "TechCorp".to_string(),
                user_growth: 300,
                team_size: 25,
                revenue: 0.0,
                efficiency: 40,
            }
        );
        // Billions are scaled to millions, and a team without a designer count
        // has no size
        assert_eq!(
            stats.impact[1],
            ImpactMetrics {
                company: "FinanceFlow".to_string(),
                user_growth: 75,
                team_size: 0,
                revenue: 2000.0,
                efficiency: 75,
            }
        );
        // Title-only achievements have no description to mine
        assert_eq!(stats.impact[3].user_growth, 0);
        assert_eq!(stats.impact[3].revenue, 0.0);
    }

    #[test]
    fn impact_revenue_in_millions() {
        let mut position = crate::test_helpers::position("p", "2020 - 2021");
        position.company = "Acme Corp".to_string();
        position.achievements = vec![
            crate::Achievement::from(
                crate::AchievementId::from("a").unwrap(),
                "A".to_string(),
                "Grew team revenue to $3.5M with 1 designer".to_string(),
                Vec::new(),
            ),
        ];
        let metrics = ImpactMetrics::from(&position);
        assert_eq!(metrics.company, "Acme");
        assert_eq!(metrics.revenue, 3.5);
        assert_eq!(metrics.team_size, 1);
    }

    #[test]
    fn dollar_amounts() {
        assert_eq!(first_dollar_amount("raising $120M"), Some(120.0));
        assert_eq!(first_dollar_amount("for $1.2B"), Some(1.2));
        assert_eq!(first_dollar_amount("$ and then $3."), Some(3.0));
        assert_eq!(first_dollar_amount("undisclosed"), None);
    }
}
