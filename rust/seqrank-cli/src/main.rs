//! Seqrank entry point — the fixed reference workflow.
//!
//! Builds a 10 000 element sequence, ranks it descending in place, and
//! prints the elapsed wall-clock seconds in the reference output format.
//! No flags, no environment, no files.

use std::time::Instant;

use seqrank_core::{sequence, timing};

/// Sequence length the reference script hardcodes.
const SEQUENCE_LEN: usize = 10_000;

/// The reference output line: six fractional digits, fixed point.
fn report_line(secs: f64) -> String {
    format!("Execution time of script = {:.6} sec.", secs)
}

fn main() {
    let start = Instant::now();
    let mut seq = sequence::build(SEQUENCE_LEN);
    sequence::rank_descending(&mut seq);
    let end = Instant::now();

    println!("{}", report_line(timing::elapsed_secs(start, end)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_line_matches_reference_format() {
        assert_eq!(
            report_line(0.123456789),
            "Execution time of script = 0.123457 sec."
        );
        assert_eq!(report_line(0.0), "Execution time of script = 0.000000 sec.");
    }

    #[test]
    fn fixed_workflow_produces_descending_sequence() {
        let start = Instant::now();
        let mut seq = sequence::build(SEQUENCE_LEN);
        sequence::rank_descending(&mut seq);
        let end = Instant::now();

        assert_eq!(seq.len(), SEQUENCE_LEN);
        assert!(seq.windows(2).all(|w| w[0] >= w[1]));

        let secs = timing::elapsed_secs(start, end);
        assert!(secs.is_finite());
        assert!(secs >= 0.0);
    }
}
