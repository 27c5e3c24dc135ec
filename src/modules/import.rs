//! Headerless word-list spreadsheets.
//!
//! Column 1 holds the word, column 2 a comma-separated list of meanings, and
//! columns 3+ alternate example sentence / translation. Workbooks (`.xlsx`,
//! `.xls`, `.ods`) go through calamine, `.csv` through the csv reader.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePair {
    pub en: String,
    pub ko: String,
}

/// One word line of the sheet, already cleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub word: String,
    pub meanings: Vec<String>,
    pub examples: Vec<ExamplePair>,
}

/// A raw sheet row; `None` is an empty cell.
pub type Cells = Vec<Option<String>>;

pub fn parse_voca_sheet(file_name: &str, data: &[u8]) -> Result<Vec<ImportRow>, String> {
    let rows = if file_name.to_ascii_lowercase().ends_with(".csv") {
        read_csv_rows(data)?
    } else {
        read_workbook_rows(data)?
    };
    Ok(rows_to_entries(rows))
}

pub fn read_csv_rows(data: &[u8]) -> Result<Vec<Cells>, String> {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| format!("CSV parse error: {}", e))?;
        rows.push(
            record
                .iter()
                .map(|field| Some(field.to_string()).filter(|f| !f.is_empty()))
                .collect(),
        );
    }
    Ok(rows)
}

/// Rows of the first worksheet, column A first even when it is blank.
pub fn read_workbook_rows(data: &[u8]) -> Result<Vec<Cells>, String> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data.to_vec()))
        .map_err(|e| format!("Spreadsheet parse error: {}", e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| "Spreadsheet has no worksheet".to_string())?
        .map_err(|e| format!("Spreadsheet parse error: {}", e))?;

    let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    Ok(range
        .rows()
        .map(|row| {
            std::iter::repeat(None)
                .take(col_offset)
                .chain(row.iter().map(cell_text))
                .collect()
        })
        .collect())
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        // Whole numbers come back as floats from most writers
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        other => Some(other.to_string()),
    }
}

fn cleaned(cell: Option<&Option<String>>) -> Option<String> {
    cell.and_then(|c| c.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

/// Turn raw rows into word entries. Rows without a word are dropped; example
/// pairs end at the first empty sentence cell.
pub fn rows_to_entries(rows: Vec<Cells>) -> Vec<ImportRow> {
    let mut entries = Vec::new();

    for row in rows {
        let Some(word) = cleaned(row.first()) else {
            continue;
        };

        let meanings = row
            .get(1)
            .and_then(|c| c.as_deref())
            .map(|m| {
                m.split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let mut examples = Vec::new();
        let mut col = 2;
        while col < row.len() {
            let Some(en) = cleaned(row.get(col)) else {
                break;
            };
            let ko = cleaned(row.get(col + 1)).unwrap_or_default();
            examples.push(ExamplePair { en, ko });
            col += 2;
        }

        entries.push(ImportRow {
            word,
            meanings,
            examples,
        });
    }

    entries
}
