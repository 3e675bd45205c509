//! Stat table rendering in the four report formats.

use colored::Colorize;
use erdrick_core::{LevelRow, StatTable};

pub const COLUMNS: [&str; 7] = [
    "Level",
    "Experience",
    "Strength",
    "Agility",
    "HP",
    "MP",
    "Spells",
];

fn stat_cell(value: Option<u16>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn spell_cell(row: &LevelRow) -> &'static str {
    row.spell.map_or("", |spell| spell.as_str())
}

pub fn render_console(table: &StatTable) {
    let header: Vec<String> = COLUMNS
        .iter()
        .map(|name| format!("{name:>10}").bold().to_string())
        .collect();
    println!("{}", header.join(" "));
    for row in &table.rows {
        println!(
            "{:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            row.level,
            row.experience,
            stat_cell(row.strength),
            stat_cell(row.agility),
            stat_cell(row.hp),
            stat_cell(row.mp),
            spell_cell(row),
        );
    }
}

#[must_use]
pub fn markdown_report(table: &StatTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    out.push_str(&format!("|{}\n", "---|".repeat(COLUMNS.len())));
    for row in &table.rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            row.level,
            row.experience,
            stat_cell(row.strength),
            stat_cell(row.agility),
            stat_cell(row.hp),
            stat_cell(row.mp),
            spell_cell(row),
        ));
    }
    out
}

#[must_use]
pub fn csv_report(table: &StatTable) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            row.level,
            row.experience,
            stat_cell(row.strength),
            stat_cell(row.agility),
            stat_cell(row.hp),
            stat_cell(row.mp),
            spell_cell(row),
        ));
    }
    out
}
