use collections_fmt::{Document, LineFormatter, apply_insertions};

fn main() {
    let text = "List(\"apple\", \"banana\") did not contain the same elements as List(\"banana\", \"cherry\")";
    let document = Document::from_text(text);

    // Compute the break positions, then apply them in one batch.
    let formatter = LineFormatter::default();
    let edits = formatter.format(&document);
    let formatted = apply_insertions(text, &edits).unwrap();

    println!("--- original ---");
    println!("{text}");
    println!("--- formatted ---");
    println!("{formatted}");

    // The two collections now read vertically, one element per line.
    assert!(formatted.contains("List(\n\t\"apple\", \n\t\"banana\""));
    assert!(formatted.contains("\n\ndid not contain the same elements as \n\n"));
}
