use daycast_core::{ConditionGroup, CurrentWeather, DailySummary, WeatherBoard};

pub fn render_board(board: &WeatherBoard) -> String {
    let mut lines = vec![board.city.clone()];

    lines.push(match &board.current {
        Some(current) => current_line(current),
        None => "Today: unavailable".to_string(),
    });

    if !board.daily.is_empty() {
        lines.push(String::new());
        lines.push("Forecast".to_string());
        lines.extend(board.daily.iter().map(daily_line));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn current_line(current: &CurrentWeather) -> String {
    row(
        "Today",
        current.condition_id,
        &current.description,
        current.display_temperature(),
    )
}

fn daily_line(summary: &DailySummary) -> String {
    let weekday = summary.day.format("%A").to_string();
    row(
        &weekday,
        summary.condition_id,
        &summary.description,
        summary.display_temperature(),
    )
}

fn row(label: &str, condition_id: u32, description: &str, temperature: i64) -> String {
    format!(
        "{label:<10} {:<24} {:<12} {temperature:>4}℃",
        capitalize_words(description),
        ConditionGroup::from_id(condition_id).label(),
    )
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
