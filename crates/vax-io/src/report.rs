//! Report export in the campaign record formats.
//!
//! All record exports go through `csv::Writer` with the same semicolon
//! delimiter the loader accepts, so a written report is loadable where the
//! record type allows it.  The stock listing is a human-readable text block
//! instead, written to any `io::Write`.

use std::io::{self, Write};

use csv::WriterBuilder;

use vax_core::{DATE_FMT, TIME_FMT};
use vax_schedule::Campaign;

use crate::error::ReportResult;

// ── Record exports ────────────────────────────────────────────────────────────

/// Write one `VACCINE;name;required;interval` record per registered vaccine,
/// in registration order.
pub fn write_vaccines<W: Write>(campaign: &Campaign, out: W) -> ReportResult<()> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(out);
    for (_, vaccine) in campaign.vaccines().iter() {
        writer.write_record([
            "VACCINE".to_string(),
            vaccine.name.clone(),
            vaccine.required_doses.to_string(),
            vaccine.interval_days.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one `VACCINE_LOT;…` record per ingested lot, in delivery order.
/// The rows are loadable back through the loader.
pub fn write_lots<W: Write>(campaign: &Campaign, out: W) -> ReportResult<()> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(out);
    for lot in campaign.lots().iter() {
        let vaccine = campaign.vaccines().get(lot.vaccine);
        writer.write_record([
            "VACCINE_LOT".to_string(),
            lot.stamp.date.format(DATE_FMT).to_string(),
            lot.stamp.time.format(TIME_FMT).to_string(),
            campaign.centers().get(lot.center).cp.clone(),
            vaccine.name.clone(),
            vaccine.required_doses.to_string(),
            vaccine.interval_days.to_string(),
            lot.doses.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one `APPOINTMENT;date;time;cp;vaccine` record per appointment the
/// person holds, visiting centers in registration order.
///
/// Fails with `ScheduleError::PersonNotFound` for an unknown document.
pub fn write_person_appointments<W: Write>(
    campaign: &Campaign,
    document: &str,
    out: W,
) -> ReportResult<()> {
    let appointments = campaign.person_appointments(document)?;
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(out);
    for (center, appointment) in appointments {
        writer.write_record([
            "APPOINTMENT".to_string(),
            appointment.stamp.date.format(DATE_FMT).to_string(),
            appointment.stamp.time.format(TIME_FMT).to_string(),
            campaign.centers().get(center).cp.clone(),
            campaign.vaccines().get(appointment.vaccine).name.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

// ── Stock listing ─────────────────────────────────────────────────────────────

/// Write the banner-framed stock listing of one center: every posted ledger
/// entry as `vaccine;date;delta`, vaccines in ID order, entries in posting
/// order.  Writes nothing when the center is unknown.
pub fn print_center_stock<W: Write>(campaign: &Campaign, cp: &str, mut out: W) -> io::Result<()> {
    let Some(center) = campaign.centers().find_by_cp(cp) else {
        return Ok(());
    };
    let stock = &campaign.centers().get(center).stock;

    writeln!(out, "==============================")?;
    writeln!(out, "STOCK FOR CENTER {cp}")?;
    writeln!(out, "==============================")?;
    for vaccine in stock.vaccines() {
        let name = &campaign.vaccines().get(vaccine).name;
        for entry in stock.entries(vaccine) {
            writeln!(out, "{name};{};{}", entry.date.format(DATE_FMT), entry.delta)?;
        }
    }
    writeln!(out, "==============================")?;
    writeln!(out)?;
    Ok(())
}
