//! Presentation sink: renders matches as HTML table rows.
//!
//! Column order follows the voter list layout: serial, ward, name, guardian,
//! house no, house name, gender, age, id, polling station, score. A render
//! failure aborts only the current render; previously rendered content is the
//! caller's to keep or drop.

use crate::engine::ScoredMatch;
use crate::roll::VoterRecord;
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Row formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Render ranked matches, one `<tr>` per record, score column last.
pub fn render_rows(matches: &[ScoredMatch]) -> Result<String, RenderError> {
    let mut out = String::new();
    for m in matches {
        write_row(&mut out, &m.record, &m.display_score())?;
    }
    Ok(out)
}

/// Render an unranked pool listing (empty-query fallback), no score values.
pub fn render_pool(records: &[VoterRecord]) -> Result<String, RenderError> {
    let mut out = String::new();
    for record in records {
        write_row(&mut out, record, "")?;
    }
    Ok(out)
}

fn write_row(out: &mut String, r: &VoterRecord, score: &str) -> Result<(), RenderError> {
    let age = r.age.map(|a| a.to_string()).unwrap_or_default();
    write!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        r.serial,
        escape(&r.ward),
        escape(&r.name),
        escape(&r.guardian),
        escape(&r.house_no),
        escape(&r.house_name),
        escape(&r.gender),
        age,
        escape(&r.id),
        escape(&r.polling_station),
        score,
    )?;
    Ok(())
}

/// Minimal HTML escaping for text cells.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
