// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Folio project*
//!
//! The `folio` tool: print the career timeline and stats, build shareable
//! links, and export the site's data
//!

use clap::{Parser, Subcommand};
use folio_core::{
    AboutData, AchievementId, AchievementKeyStyle, Clock, Config, Date, Portfolio, PortfolioStats,
    PositionId, ABOUT_FILE_NAME, PORTFOLIO_FILE_NAME,
};
use folio_state::{Route, UrlStateSync};
use folio_timeline::{Bar, TimelineLayout, YearLabel, as_percentage, tag_preview};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::error::Error;
use std::path::PathBuf;

#[macro_use]
extern crate log;

/// Number of characters the timeline is drawn across
const TIMELINE_WIDTH: usize = 60;

/// Folio entry point
///
/// One of:
/// - Print the timeline
/// - Print the stats
/// - Build a link with positions/achievements expanded
/// - Export the data files
fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new().add_filter_allow_str("folio").build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
    Ok(())
}

/// Folio CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Folio tool for the portfolio site's data",
    after_help = "Dates are resolved against --now (or the config's `now`) when given"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dir containing portfolio.json and about.json (overrides the config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Pretend today is this date (yyyy-mm-dd)
    #[arg(long, global = true)]
    pub now: Option<Date>,

    /// Log debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the career timeline (newest first)
    Timeline {
        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the career stats
    Stats {
        /// Print the stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a link with the given positions/achievements expanded
    Link {
        /// Things to toggle, in order: `position` or `position:achievement`
        toggles: Vec<String>,

        /// Query string to start from
        #[arg(long, default_value = "")]
        query: String,

        /// Write achievements as `position:achievement`
        #[arg(long)]
        namespaced: bool,

        /// Link to the position's own page (at the achievement, if given)
        /// instead
        #[arg(long, conflicts_with_all = ["query", "namespaced"])]
        page: bool,
    },

    /// Write portfolio.json and about.json (pretty-printed) to the dir
    Export {
        /// Where to write the files
        out_dir: PathBuf,
    },
}

fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let config_path = match args.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let mut config = Config::load(&config_path)?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if args.now.is_some() {
        config.now = args.now;
    }
    debug!("Using config {config:?}");

    let clock = config.clock();
    let portfolio = Portfolio::from_path(config.data_dir.join(PORTFOLIO_FILE_NAME))?;

    match args.command {
        Command::Timeline { json } => print_timeline(&portfolio, &config, clock.as_ref(), json),
        Command::Stats { json } => print_stats(&portfolio, clock.as_ref(), json),
        Command::Link {
            toggles,
            query,
            namespaced,
            page,
        } => {
            let style = if namespaced {
                AchievementKeyStyle::Namespaced
            } else {
                config.achievement_keys
            };
            let link = if page {
                position_page_link(&toggles)?
            } else {
                index_link(&portfolio, style, &query, &toggles)?
            };
            println!("{link}");
            Ok(())
        }
        Command::Export { out_dir } => {
            let about = AboutData::from_path(config.data_dir.join(ABOUT_FILE_NAME))?;
            for path in portfolio.export_to_dir(&about, &out_dir)? {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

/// Split `position` or `position:achievement`
fn parse_toggle(toggle: &str) -> Result<(PositionId, Option<AchievementId>), Box<dyn Error>> {
    Ok(match toggle.split_once(':') {
        Some((position, achievement)) => (
            PositionId::from(position)?,
            Some(AchievementId::from(achievement)?),
        ),
        None => (PositionId::from(toggle)?, None),
    })
}

fn index_link(
    portfolio: &Portfolio,
    style: AchievementKeyStyle,
    query: &str,
    toggles: &[String],
) -> Result<String, Box<dyn Error>> {
    let mut sync = UrlStateSync::new(portfolio, style, query)?;
    for toggle in toggles {
        match parse_toggle(toggle)? {
            (position, Some(achievement)) => sync.toggle_achievement(&position, &achievement)?,
            (position, None) => sync.toggle_position(&position)?,
        };
    }
    Ok(format!("{}?{}", Route::Index.to_url()?, sync.query()))
}

fn position_page_link(toggles: &[String]) -> Result<String, Box<dyn Error>> {
    let [toggle] = toggles else {
        return Err("--page takes exactly one `position` or `position:achievement`".into());
    };
    let (id, achievement) = parse_toggle(toggle)?;
    Ok(Route::Position { id, achievement }.to_url()?)
}

fn print_timeline(
    portfolio: &Portfolio,
    config: &Config,
    clock: &dyn Clock,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let layout = TimelineLayout::from(portfolio.positions(), clock);

    if json {
        let out = serde_json::json!({
            "range": layout.range(),
            "labels": layout.labels(),
            "bars": layout.bars(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if layout.bars().is_empty() {
        println!("Nothing to show");
        return Ok(());
    }

    println!("{}", axis_line(layout.labels()));
    for bar in layout.bars() {
        println!("{}", bar_line(bar));
        let mut details = format!(
            "  {} @ {} ({} to {}, {:.1}% of the timeline)",
            bar.title,
            bar.company,
            bar.period.start.as_long_date_format(),
            bar.period.end.as_long_date_format(),
            as_percentage(bar.width),
        );
        if let Some(exit) = bar.exit {
            details.push_str(&format!(" [{}]", exit.badge()));
        }
        println!("{details}");

        if let Some(position) = portfolio.position(&bar.position_id) {
            let tags = tag_preview(position, config.tag_preview_limit);
            if !tags.shown.is_empty() {
                let mut line = format!("  {}", tags.shown.join(", "));
                if let Some(more) = tags.overflow_label() {
                    line.push_str(&format!(" {more}"));
                }
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Column (from the left) that a fraction of the timeline lands on
fn column(fraction: f64) -> usize {
    ((fraction * TIMELINE_WIDTH as f64).round() as usize).min(TIMELINE_WIDTH)
}

fn axis_line(labels: &[YearLabel]) -> String {
    let mut line = vec![' '; TIMELINE_WIDTH + 4];
    for label in labels {
        let start = column(label.offset);
        for (i, c) in label.year.to_string().chars().enumerate() {
            if let Some(slot) = line.get_mut(start + i) {
                *slot = c;
            }
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

fn bar_line(bar: &Bar) -> String {
    let start = column(bar.end_offset);
    let len = column(bar.width).max(1);
    format!("{}{}", " ".repeat(start), "█".repeat(len))
}

fn print_stats(
    portfolio: &Portfolio,
    clock: &dyn Clock,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let stats = PortfolioStats::from(portfolio, clock);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Positions:    {}", stats.total_positions);
    println!("Achievements: {}", stats.total_achievements);
    println!("Skills:       {}", stats.unique_skills);
    println!();
    println!("Top skills:");
    for skill in &stats.top_skills {
        println!(
            "  {:<28} x{} ({}-{}, {:?})",
            skill.skill, skill.frequency, skill.first_year, skill.last_year, skill.trend
        );
    }
    if !stats.exits.is_empty() {
        println!();
        println!("Exits:");
        for exit in &stats.exits {
            println!(
                "  {:<20} {} {}",
                exit.company,
                exit.exit_type.badge(),
                exit.value
            );
        }
    }
    println!();
    println!("Impact:");
    for impact in &stats.impact {
        println!(
            "  {:<20} users +{}%, team {}, revenue ${}M, efficiency {}%",
            impact.company, impact.user_growth, impact.team_size, impact.revenue, impact.efficiency
        );
    }
    Ok(())
}
