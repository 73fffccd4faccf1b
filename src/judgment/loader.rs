use super::types::RawCut;
use crate::error::HsResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a CSV cut log with a header row of `RawCut` field names
/// (`scoringType,before,after,accuracy,cutNormalZ,maxCutScore,fixedCutScore,assumedAfter`).
///
/// Missing columns take their defaults. Rows that fail to parse are skipped.
pub fn load_cuts<R: Read>(reader: R) -> HsResult<Vec<RawCut>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut cuts = Vec::new();
    let mut skipped_count = 0;

    for (row_idx, result) in rdr.deserialize::<RawCut>().enumerate() {
        match result {
            Ok(cut) => cuts.push(cut),
            Err(e) => {
                skipped_count += 1;
                warn!("[Row {}] Skipping cut: {}", row_idx + 1, e);
            }
        }
    }

    debug!(
        "Loaded {} cuts ({} skipped)",
        cuts.len(),
        skipped_count
    );

    Ok(cuts)
}

pub fn load_cuts_from_file<P: AsRef<Path>>(path: P) -> HsResult<Vec<RawCut>> {
    let file = File::open(path.as_ref())?;
    load_cuts(file)
}
