use crate::error::Result;
use polysaw::core::models::walk::Walk;
use polysaw::workflows::ensemble::EnsembleRecord;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct CoordinateRow {
    x: i32,
    y: i32,
    z: i32,
}

pub fn format_summary_line(record: &EnsembleRecord) -> String {
    let rg = record.radius_of_gyration();
    let e2e = record.end_to_end_distance();
    format!(
        "N={:4}  Rg={:.3} +/- {:.3}  E2E={:.3} +/- {:.3}",
        record.chain_length, rg.mean, rg.std_dev, e2e.mean, e2e.std_dev
    )
}

pub fn write_records<W: Write>(records: &[EnsembleRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_walk<W: Write>(walk: &Walk, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for p in walk.positions() {
        csv_writer.serialize(CoordinateRow {
            x: p.x,
            y: p.y,
            z: p.z,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
