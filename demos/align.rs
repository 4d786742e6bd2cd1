//! Print every optimal global and local alignment of two sequences.
//!
//! `cargo run --example align -- TGCATAT ATCCGAT`

use dp_align::{Aligner, TableReporter};

fn main() -> dp_align::Result<()> {
    let mut args = std::env::args().skip(1);
    let a = args.next().unwrap_or_else(|| "TGCATAT".to_string());
    let b = args.next().unwrap_or_else(|| "ATCCGAT".to_string());

    for aligner in [Aligner::global(), Aligner::local()] {
        let mut reporter = TableReporter::new(std::io::stdout());
        let matrix = aligner.build_matrix_reported(a.as_bytes(), b.as_bytes(), &mut reporter)?;
        println!("{} score {}", aligner.mode(), matrix.best_score());
        for aln in aligner.alignments(&matrix, None)? {
            let (top, bottom) = aln.to_strings();
            println!("{top}\n{bottom}\n");
        }
    }
    Ok(())
}
