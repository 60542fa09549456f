//! clinic — smallest end-to-end example for the rust_vax framework.
//!
//! Loads a handful of persons and vaccine lots from an embedded record
//! fixture, allocates appointment series for everyone, then prints the
//! resulting bookings and per-center stock.  Swap the fixture for real
//! record files to run an actual campaign snapshot.

use std::io::Cursor;

use anyhow::Result;

use vax_core::SlotTime;
use vax_io::{load_campaign_reader, print_center_stock, write_person_appointments, write_vaccines};
use vax_schedule::{Campaign, ScheduleError};

// ── Campaign records ──────────────────────────────────────────────────────────

// Two centers; Alpha is a two-dose vaccine with a 21-day interval, Beta a
// single-dose one.  The Alpha lot at 08001 is deliberately small so late
// requesters spill into the relaxed second-week pass or run out entirely.
const DATA_CSV: &str = "\
PERSON;11111111A;Jane;Doe;jane@doe.cat;Main St 1;08001;17/05/1980\n\
PERSON;22222222B;John;Roe;john@roe.cat;Side St 2;08001;02/11/1993\n\
PERSON;33333333C;Mary;Poe;mary@poe.cat;High St 3;17001;23/08/1947\n\
PERSON;44444444D;Pete;Moe;pete@moe.cat;Low St 4;17001;30/01/2001\n\
VACCINE_LOT;03/01/2022;08:00;08001;Alpha;2;21;4\n\
VACCINE_LOT;03/01/2022;08:00;17001;Beta;1;0;1\n\
";

const START: &str = "01/01/2022";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== clinic — rust_vax campaign ===");
    println!();

    // 1. Load persons and lots.
    let mut campaign = Campaign::new();
    let loaded = load_campaign_reader(Cursor::new(DATA_CSV), &mut campaign)?;
    println!(
        "Loaded {loaded} records: {} persons, {} vaccines, {} centers, {} lots",
        campaign.population_count(),
        campaign.vaccine_count(),
        campaign.center_count(),
        campaign.lot_count(),
    );

    let mut vaccines = Vec::new();
    write_vaccines(&campaign, &mut vaccines)?;
    print!("{}", String::from_utf8(vaccines)?);
    println!();

    // 2. Allocate an appointment series for everyone from the campaign start.
    let start = SlotTime::parse(START, "09:00")?;
    for (cp, document) in [
        ("08001", "11111111A"),
        ("08001", "22222222B"),
        ("17001", "33333333C"),
        ("17001", "44444444D"),
    ] {
        match campaign.allocate_appointment(cp, document, start) {
            Ok(()) => println!("{document} booked at {cp}"),
            Err(ScheduleError::NoVaccinesAvailable) => {
                println!("{document} NOT booked at {cp}: no doses in the 14-day window");
            }
            Err(e) => return Err(e.into()),
        }
    }

    // A second request for the same person is refused.
    let retry = campaign.allocate_appointment("08001", "11111111A", start);
    println!("retry for 11111111A: {}", retry.unwrap_err());
    println!();

    // 3. Print everyone's bookings.
    for document in ["11111111A", "22222222B", "33333333C", "44444444D"] {
        let mut out = Vec::new();
        write_person_appointments(&campaign, document, &mut out)?;
        print!("{}", String::from_utf8(out)?);
    }
    println!();

    // 4. Show where the stock went.
    let mut out = Vec::new();
    for cp in ["08001", "17001"] {
        print_center_stock(&campaign, cp, &mut out)?;
    }
    print!("{}", String::from_utf8(out)?);

    Ok(())
}
