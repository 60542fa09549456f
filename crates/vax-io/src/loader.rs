//! Campaign record loader.
//!
//! # Record format
//!
//! Semicolon-delimited, headerless; the first field is the record type, and
//! each type carries seven data fields:
//!
//! ```csv
//! PERSON;98765432J;Jane;Doe;jane@example.com;Main St 1;08001;17/05/1980
//! VACCINE_LOT;01/01/2022;08:00;08001;Alpha;2;21;500
//! ```
//!
//! | Type          | Data fields                                            |
//! |---------------|--------------------------------------------------------|
//! | `PERSON`      | document, name, surname, email, address, cp, birthday  |
//! | `VACCINE_LOT` | date, time, cp, vaccine name, required doses, interval days, doses |
//!
//! `PERSON` rows register a person (a repeated document is an error);
//! `VACCINE_LOT` rows register the vaccine and center on first sight and
//! post the doses to the center's stock from the delivery date onward.
//! Dates are `dd/mm/yyyy`, times `hh:mm`.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use vax_core::{DATE_FMT, SlotTime};
use vax_registry::{Person, Vaccine};
use vax_schedule::Campaign;

use crate::error::{LoadError, LoadResult};

/// Data fields per record, not counting the leading type tag.
const ENTRY_FIELDS: usize = 7;

// ── Record rows ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PersonRow {
    _kind:    String,
    document: String,
    name:     String,
    surname:  String,
    email:    String,
    address:  String,
    cp:       String,
    birthday: String,
}

#[derive(Deserialize)]
struct LotRow {
    _kind:    String,
    date:     String,
    time:     String,
    cp:       String,
    name:     String,
    required: u32,
    interval: u32,
    doses:    i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load campaign records from a file into `campaign`.
///
/// Returns the number of records ingested.  Loading stops at the first bad
/// record; everything before it has already been applied.
pub fn load_campaign_csv(path: &Path, campaign: &mut Campaign) -> LoadResult<usize> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_campaign_reader(file, campaign)
}

/// Like [`load_campaign_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading embedded
/// fixtures.
pub fn load_campaign_reader<R: Read>(reader: R, campaign: &mut Campaign) -> LoadResult<usize> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);

    let mut loaded = 0;
    for result in csv_reader.records() {
        let record = result.map_err(|e| LoadError::Parse(e.to_string()))?;

        // A blank line parses as one empty field; skip it.
        if record.len() <= 1 && record.get(0).is_none_or(str::is_empty) {
            continue;
        }

        match record.get(0) {
            Some("PERSON") => load_person(&record, campaign)?,
            Some("VACCINE_LOT") => load_lot(&record, campaign)?,
            other => {
                return Err(LoadError::InvalidEntryType(
                    other.unwrap_or_default().to_string(),
                ));
            }
        }
        loaded += 1;
    }

    Ok(loaded)
}

// ── Per-type ingestion ────────────────────────────────────────────────────────

fn load_person(record: &csv::StringRecord, campaign: &mut Campaign) -> LoadResult<()> {
    check_fields(record, "PERSON")?;
    let row: PersonRow = record
        .deserialize(None)
        .map_err(|e| LoadError::Parse(e.to_string()))?;

    let birthday = NaiveDate::parse_from_str(&row.birthday, DATE_FMT)
        .map_err(|e| LoadError::Parse(format!("invalid birthday {:?}: {e}", row.birthday)))?;

    campaign.register_person(Person {
        document: row.document,
        name:     row.name,
        surname:  row.surname,
        email:    row.email,
        address:  row.address,
        cp:       row.cp,
        birthday,
    })?;
    Ok(())
}

fn load_lot(record: &csv::StringRecord, campaign: &mut Campaign) -> LoadResult<()> {
    check_fields(record, "VACCINE_LOT")?;
    let row: LotRow = record
        .deserialize(None)
        .map_err(|e| LoadError::Parse(e.to_string()))?;

    let stamp = SlotTime::parse(&row.date, &row.time)
        .map_err(|e| LoadError::Parse(e.to_string()))?;

    campaign.receive_lot(
        stamp,
        &row.cp,
        Vaccine::new(row.name, row.required, row.interval),
        row.doses,
    );
    Ok(())
}

fn check_fields(record: &csv::StringRecord, kind: &'static str) -> LoadResult<()> {
    let got = record.len().saturating_sub(1);
    if got != ENTRY_FIELDS {
        return Err(LoadError::InvalidEntryFormat {
            kind,
            expected: ENTRY_FIELDS,
            got,
        });
    }
    Ok(())
}
