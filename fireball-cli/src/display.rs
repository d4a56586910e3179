use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use textplots::Plot;

use crate::import::ImportResult;
use fireball_core::analysis::{Analysis, FrequencyTable};
use fireball_core::models::{DigitTag, DrawRecord, HotCold, SuggestionSet};

pub fn display_no_data() {
    println!("Add or fetch at least one draw to begin.");
}

pub fn display_draws(draws: &[DrawRecord]) {
    if draws.is_empty() {
        display_no_data();
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Main", "Fireball"]);

    for draw in draws {
        table.add_row(vec![date_cell(draw), draw.main(), draw.fireball()]);
    }

    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import finished:");
    println!("  Rows read : {}", result.total_records);
    println!("  Added     : {}", result.inserted);
    if result.errors > 0 {
        println!("  Rejected  : {}", result.errors);
    }
}

pub fn display_analysis(analysis: &Analysis, draw_count: usize) {
    println!("\n📊 Digit frequencies over {} draws\n", draw_count);

    println!("── Main digits ──");
    display_frequency_table(&analysis.main_freq, &analysis.main);
    display_frequency_chart(&analysis.main_freq);

    println!("\n── Fireball ──");
    display_frequency_table(&analysis.fire_freq, &analysis.fireball);
    display_frequency_chart(&analysis.fire_freq);

    println!();
    for line in hot_cold_lines(analysis) {
        println!("{line}");
    }
}

fn hot_cold_lines(analysis: &Analysis) -> Vec<String> {
    vec![
        format!("Hot main digits  : {}", join_digits(&analysis.main.hot)),
        format!("Cold main digits : {}", join_digits(&analysis.main.cold)),
        format!("Hot fireballs    : {}", join_digits(&analysis.fireball.hot)),
        format!("Cold fireballs   : {}", join_digits(&analysis.fireball.cold)),
    ]
}

fn date_cell(draw: &DrawRecord) -> &str {
    if draw.date().is_empty() { "-" } else { draw.date() }
}

fn display_frequency_table(freq: &FrequencyTable, hot_cold: &HotCold) {
    let total = freq.total().max(1) as f64;
    let peak = freq.iter().map(|(_, c)| c).max().unwrap_or(0).max(1) as f64;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Digit", "Count", "Share", "Tag", ""]);

    for (digit, count) in freq.dense().iter().enumerate() {
        let digit = digit as u8;
        let tag = hot_cold.tag(digit);
        let color = match tag {
            DigitTag::Hot => Color::Red,
            DigitTag::Cold => Color::Cyan,
            DigitTag::Normal if freq.contains(digit) => Color::White,
            DigitTag::Normal => Color::DarkGrey,
        };
        let bar = "█".repeat(((*count as f64 / peak) * 20.0).round() as usize);

        table.add_row(vec![
            Cell::new(digit),
            Cell::new(count),
            Cell::new(format!("{:.1}%", *count as f64 * 100.0 / total)),
            Cell::new(tag.to_string()).fg(color),
            Cell::new(bar).fg(color),
        ]);
    }
    println!("{table}");
}

fn display_frequency_chart(freq: &FrequencyTable) {
    let dense = freq.dense();
    let y_max = dense.iter().copied().max().unwrap_or(0).max(1) as f32;
    let points: Vec<(f32, f32)> = dense
        .iter()
        .enumerate()
        .map(|(d, &c)| (d as f32, c as f32))
        .collect();

    let shape = textplots::Shape::Bars(&points);
    let mut chart = textplots::Chart::new_with_y_range(120, 40, 0.0, 10.0, 0.0, y_max);
    println!("{}", chart.lineplot(&shape));
}

pub fn display_suggestions(suggestions: &SuggestionSet) {
    println!("\n🎲 Suggested combinations\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("🔥 Hot combinations").fg(Color::Red),
            Cell::new("❄️ Cold combinations").fg(Color::Cyan),
        ]);

    let rows = suggestions.hot.len().max(suggestions.cold.len());
    for i in 0..rows {
        let hot = suggestions.hot.get(i).map(|c| c.to_string()).unwrap_or_default();
        let cold = suggestions.cold.get(i).map(|c| c.to_string()).unwrap_or_default();
        table.add_row(vec![hot, cold]);
    }
    println!("{table}");
}

pub fn display_fetched(draw: &DrawRecord) {
    println!("Fetched {} (Fireball {}) on {}", draw.main(), draw.fireball(), draw.date());
}

fn join_digits(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" - ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_digits() {
        assert_eq!(join_digits(&[2, 7, 8]), "2 - 7 - 8");
        assert_eq!(join_digits(&[]), "");
    }

    #[test]
    fn test_date_cell_placeholder() {
        let undated = DrawRecord::new("", "123", "4").unwrap();
        let dated = DrawRecord::new("2024-06-01", "123", "4").unwrap();
        assert_eq!(date_cell(&undated), "-");
        assert_eq!(date_cell(&dated), "2024-06-01");
    }

    #[test]
    fn test_hot_cold_lines_include_cold_fireballs() {
        let analysis = Analysis {
            main_freq: [2, 2, 7].into_iter().collect(),
            fire_freq: [3, 3, 1].into_iter().collect(),
            main: HotCold { hot: vec![2, 7], cold: vec![2, 7] },
            fireball: HotCold { hot: vec![3], cold: vec![1] },
        };
        let lines = hot_cold_lines(&analysis);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Hot fireballs    : 3");
        assert_eq!(lines[3], "Cold fireballs   : 1");
    }
}
