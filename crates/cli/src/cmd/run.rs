//! The availability wizard and its non-interactive batch twin.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use rota_core::availability::{
    weekday_name, AvailabilityGrid, END_HOUR, START_HOUR,
};
use rota_core::config::loader::ConfigLoader;
use rota_core::config::types::ResolvedConfig;
use rota_core::export::{default_export_path, to_csv};
use rota_core::pattern::{
    parse_date_selector, parse_exception_list, parse_intervals, DateSelector, Pattern,
};
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

use crate::prompt::{confirm, prompt_month, prompt_parsed, prompt_text, PromptError};
use crate::RunArgs;

const WEEKDAYS: [Weekday; 5] =
    [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri];

const WELCOME: &str = "Hi! I'm here to help you let everyone know when you can make it.
To do so, I will ask you a couple of simple questions.

The only time the formatting of your answer matters is when I need several items.
For example, to say you are free between 9am and 1pm, enter the two hours:
9 13
If you are free for two stretches on one day, separate the intervals with a space again:
9 13 15 19
That reads: free from 9am to 1pm and again from 3pm till 7pm.

Please note several things:
- The 24 hour clock is used throughout.
- Only hours from 9 to 19 are considered.
- The second hour of each pair is *not* part of the interval.
- Answer h, help or help! at any question to see its explanation again.

For each day of the week we first look at your usual schedule and then at exceptional dates.
If you have no regular schedule on a day, answer never and fill the dates out one by one.";

const INTERVAL_HELP: &str = "Give an even number of hours from [9-19] separated \
by spaces; each pair is one interval and its second hour is not included. \
Answer never for no availability, or always for the whole working day.";

const DATES_HELP: &str = "Give day-of-month numbers separated by spaces, \
None for no dates, or All for every date of the month.";

const NAME_HELP: &str = "Your name only labels the export; it appears in the \
CSV header and in the default file name.";

const PATH_HELP: &str = "Where the CSV lands; hit Enter to accept the default.";

pub fn run(config: Option<&Path>, args: RunArgs) {
    let cfg = match ConfigLoader::load_or_default(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    crate::logging::init(&cfg);

    if args.batch {
        run_batch(&cfg, &args);
    } else if let Err(e) = run_wizard(&cfg, &args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run_wizard(cfg: &ResolvedConfig, args: &RunArgs) -> Result<(), PromptError> {
    println!("{WELCOME}");
    println!();

    let name = match &args.name {
        Some(n) => n.clone(),
        None => prompt_text("Please enter your name", None, NAME_HELP)?,
    };

    let (year, month) = pick_month(args)?;
    let mut grid = build_grid(year, month);

    let free_by_default = args.free_by_default
        || cfg.free_by_default
        || confirm("Should every slot start out as free?", false)?;
    if free_by_default {
        grid.set_default(true);
    }

    for weekday in WEEKDAYS {
        collect_weekday(&mut grid, weekday)?;
    }
    collect_extra_patterns(&mut grid)?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            let default = proposed_path(cfg, args, &name);
            let text = prompt_text(
                "Where should I save your CSV?",
                Some(&default.display().to_string()),
                PATH_HELP,
            )?;
            PathBuf::from(text)
        }
    };

    write_export(&grid, &name, &output);
    print_summary(&grid);
    Ok(())
}

/// Settle the target month: flags win, otherwise propose the month after the
/// current one (January of the next year when run in December) and let the
/// user override it.
fn pick_month(args: &RunArgs) -> Result<(i32, u32), PromptError> {
    let proposed = next_month(Local::now().date_naive());

    if let Some(month) = args.month {
        return Ok((args.year.unwrap_or(proposed.0), month));
    }

    let label = month_label(proposed.0, proposed.1);
    let ok = confirm(
        &format!("We will check your availability for {label}. Is that ok?"),
        true,
    )?;
    if ok {
        Ok(proposed)
    } else {
        let month = prompt_month()?;
        Ok((args.year.unwrap_or(proposed.0), month))
    }
}

fn collect_weekday(
    grid: &mut AvailabilityGrid,
    weekday: Weekday,
) -> Result<(), PromptError> {
    let day_name = weekday_name(weekday);
    println!("Ok, let's deal with {day_name}.");

    let regular = prompt_parsed(
        &format!("What times are you usually free on {day_name}s?"),
        Some("never"),
        INTERVAL_HELP,
        parse_intervals,
    )?;
    let dates = grid.dates_for_weekday(weekday);
    grid.apply_pattern(&DateSelector::Days(dates.clone()), &regular, true);

    let options =
        dates.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    let exceptions = prompt_parsed(
        &format!("Any exceptions? Type one or more of these dates: {options}"),
        Some("None"),
        DATES_HELP,
        parse_exception_list,
    )?;
    for day in exceptions {
        grid.reset_dates(&[day]);
        let times = prompt_parsed(
            &format!("What times are you free on the {day}?"),
            Some("never"),
            INTERVAL_HELP,
            parse_intervals,
        )?;
        grid.apply_pattern(&DateSelector::Days(vec![day]), &times, true);
    }
    Ok(())
}

/// One last chance to declare availability by date rather than by weekday.
/// Each answer overwrites the dates it names; an empty selection moves on.
fn collect_extra_patterns(grid: &mut AvailabilityGrid) -> Result<(), PromptError> {
    loop {
        let dates = prompt_parsed(
            "Any other dates to mark? (None to finish, All for the whole month)",
            Some("None"),
            DATES_HELP,
            parse_date_selector,
        )?;
        if dates.is_empty() {
            return Ok(());
        }

        let intervals = prompt_parsed(
            "What times are you free on those dates?",
            Some("never"),
            INTERVAL_HELP,
            parse_intervals,
        )?;
        Pattern::new(dates, intervals).apply_to(grid);
    }
}

fn run_batch(cfg: &ResolvedConfig, args: &RunArgs) {
    let Some(name) = args.name.clone() else {
        eprintln!("--name is required with --batch");
        std::process::exit(1);
    };

    let proposed = next_month(Local::now().date_naive());
    let year = args.year.unwrap_or(proposed.0);
    let month = args.month.unwrap_or(proposed.1);

    let mut grid = build_grid(year, month);
    if args.free_by_default || cfg.free_by_default {
        grid.set_default(true);
    }

    for raw in &args.patterns {
        match parse_pattern_arg(raw) {
            Ok(pattern) => pattern.apply_to(&mut grid),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    let output = match &args.output {
        Some(path) => path.clone(),
        None => proposed_path(cfg, args, &name),
    };
    write_export(&grid, &name, &output);
}

/// Parse one `--pattern DATES=HOURS` argument with the same parsers the
/// wizard answers go through.
fn parse_pattern_arg(raw: &str) -> Result<Pattern, String> {
    let Some((dates_part, hours_part)) = raw.split_once('=') else {
        return Err(format!("invalid pattern '{raw}': expected DATES=HOURS"));
    };
    let dates = parse_date_selector(dates_part)
        .map_err(|e| format!("invalid dates in '{raw}': {e}"))?;
    let intervals = parse_intervals(hours_part)
        .map_err(|e| format!("invalid hours in '{raw}': {e}"))?;
    Ok(Pattern::new(dates, intervals))
}

fn build_grid(year: i32, month: u32) -> AvailabilityGrid {
    match AvailabilityGrid::new(year, month) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn next_month(today: NaiveDate) -> (i32, u32) {
    if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

fn proposed_path(cfg: &ResolvedConfig, args: &RunArgs, name: &str) -> PathBuf {
    match (&args.output, &cfg.export_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join(format!("{name}_availability.csv")),
        (None, None) => default_export_path(name),
    }
}

fn write_export(grid: &AvailabilityGrid, name: &str, path: &Path) {
    let rows = grid.export();
    let csv = to_csv(&rows, name);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Failed to create directory {}: {e}", parent.display());
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = fs::write(path, csv) {
        eprintln!("Failed to write {}: {e}", path.display());
        std::process::exit(1);
    }

    info!(rows = rows.len(), path = %path.display(), "availability exported");
    println!("OK   rota run");
    println!("output: {}", path.display());
}

#[derive(Tabled)]
struct WeekdayRow {
    #[tabled(rename = "Weekday")]
    weekday: &'static str,
    #[tabled(rename = "Dates")]
    dates: usize,
    #[tabled(rename = "Free hours")]
    free_hours: usize,
}

fn print_summary(grid: &AvailabilityGrid) {
    let rows: Vec<WeekdayRow> = WEEKDAYS
        .iter()
        .map(|&weekday| {
            let dates = grid.dates_for_weekday(weekday);
            let free_hours = dates
                .iter()
                .map(|&day| {
                    (START_HOUR..END_HOUR)
                        .filter(|&hour| grid.is_available(day, hour) == Some(true))
                        .count()
                })
                .sum();
            WeekdayRow {
                weekday: weekday_name(weekday),
                dates: dates.len(),
                free_hours,
            }
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}
