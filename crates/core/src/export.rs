//! Flat CSV rendering of the exported grid.

use std::fmt::Write as _;
use std::path::PathBuf;

use dirs::home_dir;

use crate::availability::{weekday_name, Slot};

/// Header line: `date,time,weekday,<name>_available`.
pub fn csv_header(name: &str) -> String {
    format!("date,time,weekday,{name}_available")
}

/// Render export rows as CSV, one line per slot, flags as `1`/`0`.
pub fn to_csv(rows: &[Slot], name: &str) -> String {
    let mut out = String::with_capacity(csv_header(name).len() + rows.len() * 16);
    out.push_str(&csv_header(name));
    out.push('\n');
    for slot in rows {
        let _ = writeln!(
            out,
            "{},{},{},{}",
            slot.day,
            slot.hour,
            weekday_name(slot.weekday),
            u8::from(slot.available)
        );
    }
    out
}

/// Default export location: `~/<name>_availability.csv`.
pub fn default_export_path(name: &str) -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(format!("{name}_availability.csv"))
}
