use super::table::Row;
use std::fmt::Write;

const COLUMNS: [&str; 5] = ["Preview", "Views", "Active", "Category", "Progress"];

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the table body. The static view formats Preview as an inline
/// image and Progress as a percentage; edit mode swaps every cell for a
/// form control instead.
pub fn render_table(rows: &[Row], edit: bool) -> String {
    let mut out = String::new();
    out.push_str("<table border=\"1\" class=\"dataframe\">\n<thead><tr>");
    for column in &COLUMNS {
        let _ = write!(out, "<th>{}</th>", column);
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for row in rows {
        if edit {
            render_edit_row(&mut out, row);
        } else {
            render_static_row(&mut out, row);
        }
    }

    out.push_str("</tbody>\n</table>");
    out
}

fn render_static_row(out: &mut String, row: &Row) {
    let _ = write!(
        out,
        "<tr><td><img src=\"{}\" width=\"100\"></td><td>{}</td><td>{}</td><td>{}</td><td>{}%</td></tr>\n",
        escape(&row.preview),
        row.views,
        row.active,
        escape(row.category.label()),
        row.progress,
    );
}

fn render_edit_row(out: &mut String, row: &Row) {
    let checked = if row.active { " checked" } else { "" };
    let _ = write!(
        out,
        "<tr>\
         <td><input type=\"text\" value=\"{}\"></td>\
         <td><input type=\"number\" min=\"0\" max=\"999\" value=\"{}\"></td>\
         <td><input type=\"checkbox\"{}></td>\
         <td><input type=\"text\" value=\"{}\"></td>\
         <td><input type=\"number\" min=\"1\" max=\"99\" value=\"{}\"></td>\
         </tr>\n",
        escape(&row.preview),
        row.views,
        checked,
        escape(row.category.label()),
        row.progress,
    );
}
