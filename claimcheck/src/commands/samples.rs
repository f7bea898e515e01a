//! The `samples` command.

use std::io::Write;

use anyhow::Result;

/// Claims worth trying; they span likely-true, likely-false and contested.
pub const SAMPLE_CLAIMS: [&str; 5] = [
    "The COVID-19 vaccine contains microchips",
    "Climate change is caused by human activities",
    "The Great Wall of China is visible from space",
    "Drinking 8 glasses of water daily is necessary for health",
    "5G networks cause cancer",
];

pub fn run_samples<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Try these example claims:")?;
    for claim in SAMPLE_CLAIMS {
        writeln!(writer, "  claimcheck verify \"{}\"", claim)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_sample() {
        let mut buf = Vec::new();
        run_samples(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), SAMPLE_CLAIMS.len() + 1);
        assert!(out.contains("claimcheck verify \"5G networks cause cancer\""));
    }
}
