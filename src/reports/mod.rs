// ===== letterdraw/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use letterdraw::catalog::Record;
use letterdraw::fields;
use letterdraw::selector::{ExclusionSet, Letter, NoMatch};
use letterdraw::session::{Session, Shown};
use serde::Serialize;

/// JSON shape for an empty pick.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoMatchReport {
    pub letter: String,
    pub wildcard: bool,
    pub filters: Vec<String>,
    pub message: String,
}

impl From<&NoMatch> for NoMatchReport {
    fn from(n: &NoMatch) -> Self {
        Self {
            letter: n.letter.to_string(),
            wildcard: n.wildcard,
            filters: n.active.iter().map(|k| k.to_string()).collect(),
            message: n.to_string(),
        }
    }
}

pub fn item_table(record: &Record) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Item").add_attribute(Attribute::Bold),
        Cell::new(fields::name(record).unwrap_or("?"))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    if let Some(path) = fields::local_image_path(record) {
        table.add_row(vec![Cell::new("Image"), Cell::new(path)]);
    }
    if let Some(url) = fields::wiki_url(record) {
        table.add_row(vec![Cell::new("Wiki"), Cell::new(url)]);
    }
    table
}

pub fn render_shown(shown: &Shown) -> String {
    match shown {
        Shown::Item(record) => item_table(record).to_string(),
        Shown::NoMatch(n) => n.to_string(),
    }
}

/// Per-letter candidate counts, with and without the active switches.
pub fn stats_table(
    records: &[Record],
    wildcard: bool,
    exclusions: ExclusionSet,
    counts: &[(Letter, usize, usize)],
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Items"),
        Cell::new("Eligible").fg(Color::Cyan),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (letter, total, eligible) in counts {
        let eligible_cell = if *eligible == 0 {
            Cell::new(eligible).fg(Color::Red)
        } else {
            Cell::new(eligible).fg(Color::Cyan)
        };
        table.add_row(vec![Cell::new(letter), Cell::new(total), eligible_cell]);
    }

    table.add_row(vec![
        Cell::new("All").add_attribute(Attribute::Bold),
        Cell::new(records.len()),
        Cell::new(format!(
            "wildcard {} | filters {}",
            if wildcard { "on" } else { "off" },
            exclusions
        )),
    ]);
    table
}

pub fn render_status(session: &Session) -> String {
    let letter = session
        .letter()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "-".to_string());
    let current = session
        .current()
        .and_then(fields::name)
        .unwrap_or("-");

    let mut lines = vec![
        format!("Items loaded: {}", session.records().len()),
        format!("Letter: {}", letter),
        format!(
            "Wildcard: {}",
            if session.wildcard() { "on" } else { "off" }
        ),
        format!("Filters: {}", session.exclusions()),
        format!("Showing: {}", current),
    ];
    if let Some(err) = session.load_error() {
        lines.push(format!("Load error: {}", err));
    }
    lines.join("\n")
}
