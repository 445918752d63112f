//! File output: newline-separated word lists and the per-run provenance
//! record naming the corpus a dictionary was generated from.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LexibuildError;

/// Write one word per line. Parent directories must already exist; the
/// CLI creates them.
pub fn write_word_list<P: AsRef<Path>>(path: P, words: &[String]) -> Result<(), LexibuildError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{word}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the provenance companion: corpus origin plus a UTC generation
/// timestamp, one record per run.
pub fn write_source_info<P: AsRef<Path>>(path: P, source: &str) -> Result<(), LexibuildError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "Source: Leipzig Corpora Collection")?;
    writeln!(writer, "Corpus: {source}")?;
    writeln!(writer, "Generated: {}", utc_now())?;
    writer.flush()?;
    Ok(())
}

fn utc_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format_utc(secs)
}

/// Render seconds since the Unix epoch as `YYYY-MM-DDTHH:MM:SSZ`.
/// Days-to-civil conversion follows the standard proleptic Gregorian
/// era arithmetic.
fn format_utc(secs: u64) -> String {
    let days = secs / 86_400;
    let rem = secs % 86_400;
    let (hour, min, sec) = (rem / 3600, rem % 3600 / 60, rem % 60);

    let z = days as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{min:02}:{sec:02}Z")
}

#[cfg(test)]
mod tests {
    use super::format_utc;

    #[test]
    fn epoch_renders_as_1970() {
        assert_eq!(format_utc(0), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn known_instant() {
        // 2021-03-14 01:59:26 UTC
        assert_eq!(format_utc(1_615_687_166), "2021-03-14T01:59:26Z");
    }
}
