//! Headless dashboard session.
//!
//! Reads one event per line from stdin and prints every resulting effect as a
//! JSON line, starting with the initial render:
//!
//! ```text
//! tab tab-gdp
//! set cont_gdp Europe
//! set year_map 2007
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::data::load_database;
use gm_dashboard::{ControlId, Dashboard, Effect, Event};
use std::io::{BufRead, Write};

/// Parse one input line; `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.splitn(3, char::is_whitespace);
    match parts.next() {
        Some("tab") => {
            let value = parts.next().unwrap_or("").to_string();
            Ok(Some(Event::TabSelected(value)))
        }
        Some("set") => {
            let control: ControlId = match parts.next() {
                Some(id) => id.parse()?,
                None => anyhow::bail!("`set` needs a control id and a value"),
            };
            let value = match parts.next() {
                Some(v) => v.trim().to_string(),
                None => anyhow::bail!("`set {}` needs a value", control),
            };
            Ok(Some(Event::SelectionChanged { control, value }))
        }
        Some(other) => anyhow::bail!("Unknown command {:?} (expected `tab` or `set`)", other),
        None => Ok(None),
    }
}

fn emit(out: &mut impl Write, effect: &Effect) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string(effect)?)?;
    Ok(())
}

/// Feed every line of `input` through the controller, writing effects to `out`.
///
/// Malformed lines are logged and skipped; the session keeps going.
pub fn drive(dashboard: &mut Dashboard, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<usize> {
    let mut handled = 0;
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        let event = match parse_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("session: line {}: {}", n + 1, e);
                continue;
            }
        };
        let effect = dashboard.handle(event)?;
        emit(out, &effect)?;
        handled += 1;
    }
    Ok(handled)
}

pub fn run_session(data: &str) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let mut dashboard = Dashboard::new(db)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for effect in dashboard.initial_effects() {
        emit(&mut out, &effect)?;
    }
    out.flush()?;

    let handled = drive(&mut dashboard, std::io::stdin().lock(), &mut out)?;
    log::info!("session: handled {} events", handled);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_db::Database;

    #[test]
    fn parses_tab_and_set_lines() {
        assert_eq!(
            parse_line("tab tab-gdp").unwrap(),
            Some(Event::TabSelected("tab-gdp".to_string()))
        );
        assert_eq!(
            parse_line("  set year_map 2007 ").unwrap(),
            Some(Event::SelectionChanged {
                control: ControlId::YearMap,
                value: "2007".to_string(),
            })
        );
        assert_eq!(parse_line("tab").unwrap(), Some(Event::TabSelected(String::new())));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # a note").unwrap(), None);
    }

    #[test]
    fn bad_lines_are_errors() {
        assert!(parse_line("set nope 1952").is_err());
        assert!(parse_line("set cont_pop").is_err());
        assert!(parse_line("click tab-gdp").is_err());
    }

    #[test]
    fn drive_emits_one_effect_per_event() {
        let db = Database::from_csv(
            "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\n\
             China,Asia,1952,44.0,556263527,400.448611,CHN,156\n\
             Norway,Europe,1952,72.67,3327728,10095.42172,NOR,578\n",
        )
        .unwrap();
        let mut dashboard = Dashboard::new(db).unwrap();
        let input = "tab tab-gdp\n\nbogus line\nset cont_gdp Europe\n";
        let mut out = Vec::new();

        let handled = drive(&mut dashboard, input.as_bytes(), &mut out).unwrap();
        assert_eq!(handled, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["effect"], "visibility");
        assert_eq!(lines[1]["effect"], "chart");
        assert_eq!(lines[1]["output"], "Gdp");
        assert_eq!(dashboard.selection(ControlId::ContGdp), "Europe");
    }
}
