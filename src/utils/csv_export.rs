//! 中奖名单导出

use chrono::{Local, TimeZone};

use crate::models::WinnerView;

const BOM: &str = "\u{feff}";
const HEADER: &str = "Prize,Staff ID,Name,Department,Draw Time";

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn format_draw_time(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// 生成带 BOM 的 CSV 文本，便于表格软件识别 UTF-8
pub fn render_winners_csv(winners: &[WinnerView]) -> String {
    let mut out = String::from(BOM);
    out.push_str(HEADER);
    for w in winners {
        out.push('\n');
        let row = [
            escape_field(&w.prize_name),
            escape_field(&w.staff_id),
            escape_field(&w.name),
            escape_field(&w.department),
            format_draw_time(w.timestamp),
        ];
        out.push_str(&row.join(","));
    }
    out
}
