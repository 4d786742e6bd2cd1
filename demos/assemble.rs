//! Assemble shuffled fragments of a sentence against its template.

use dp_align::Assembler;

fn main() -> dp_align::Result<()> {
    let template = b"THEQUICKBROWNFOX";
    let fragments = [&b"QUICKB"[..], b"BROWNF", b"THEQU"];

    let assembly = Assembler::default().assemble(template, &fragments)?;
    for f in &assembly.fragments {
        println!("{:>3}  {}", f.offset, String::from_utf8_lossy(&f.sequence));
    }
    println!("{}", String::from_utf8_lossy(&assembly.consensus));
    Ok(())
}
