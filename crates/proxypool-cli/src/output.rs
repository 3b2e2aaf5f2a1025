use proxypool_core::{format_detected_at, Proxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

pub fn render(rows: &[Proxy], format: OutputFormat) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
        OutputFormat::Csv => render_csv(rows),
        OutputFormat::Table => render_table(rows),
    };
    Ok(out)
}

fn render_csv(rows: &[Proxy]) -> String {
    let mut out = String::from("ip,port,speed,category,anonymous,detected_at\n");
    for p in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            p.ip,
            p.port,
            p.speed,
            csv_field(p.category.as_str()),
            p.anonymous,
            p.detected_at
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_table(rows: &[Proxy]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:-<90}\n", ""));
    out.push_str(&format!(
        "  {:<18} {:<6} {:<6} {:<8} {:<10} {}\n",
        "IP", "Port", "Speed", "Type", "Anonymous", "DetectedAt"
    ));
    out.push_str(&format!("{:-<90}\n", ""));
    for p in rows {
        out.push_str(&format!(
            "  {:<18} {:<6} {:<6} {:<8} {:<10} {}\n",
            p.ip,
            p.port,
            p.speed,
            p.category,
            p.anonymous_label(),
            format_detected_at(p.detected_at)
        ));
    }
    out
}
