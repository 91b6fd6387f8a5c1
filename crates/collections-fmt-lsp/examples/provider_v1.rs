use collections_fmt_lsp::{LspTextEdit, apply_formatting_edits, handle_formatting_request};
use serde_json::json;

fn main() {
    let text = "List(1, 2) did not contain the same elements as List(2, 3)";

    // `textDocument/formatting`
    let params = json!({
        "textDocument": { "uri": "file:///failures/run.log" },
        "options": { "tabSize": 4, "insertSpaces": false },
    });

    let result = handle_formatting_request(text, &params).unwrap();
    let edits: Vec<LspTextEdit> = result
        .as_array()
        .unwrap()
        .iter()
        .filter_map(LspTextEdit::from_value)
        .collect();

    println!("edits: count={}", edits.len());
    for edit in &edits {
        println!(
            "- insert at {}:{} text={:?}",
            edit.range.start.line, edit.range.start.character, edit.new_text
        );
    }

    let formatted = apply_formatting_edits(text, &edits).unwrap();
    println!("--- formatted ---");
    println!("{formatted}");
}
