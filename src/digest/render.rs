use std::fmt::{self, Write};

use super::record::DigestRecord;

/// Shareable plain-text form of a digest, suitable for a clipboard or an
/// email body.
pub fn render_plain_text(record: &DigestRecord) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    write_digest(&mut out, record).map(|()| out).unwrap_or_default()
}

fn write_digest(out: &mut impl Write, record: &DigestRecord) -> fmt::Result {
    if record.is_empty() {
        writeln!(out, "Daily digest for {}", record.day)?;
        writeln!(out, "No matching roles today. Check again tomorrow.")?;
        return Ok(());
    }

    writeln!(out, "Top {} jobs for you ({})", record.len(), record.day)?;

    for (rank, entry) in record.jobs.iter().enumerate() {
        let job = &entry.job;
        writeln!(out)?;
        writeln!(out, "{}. {} @ {}", rank + 1, job.title, job.company)?;
        writeln!(
            out,
            "   {} | {} | {} yrs | match {}",
            job.location, job.mode, job.experience, entry.score
        )?;
        writeln!(out, "   Apply: {}", job.apply_url)?;
    }

    Ok(())
}
