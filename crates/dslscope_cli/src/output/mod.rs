//! Output formatting module

use dslscope_fetch::DocBundle;
use miette::{IntoDiagnostic, Result};

const RULE_WIDTH: usize = 60;

/// Prints fetched documentation, as JSON or as one banner-separated block per URL.
pub fn output_docs(bundle: &DocBundle, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&bundle.to_json()).into_diagnostic()?
        );
        return Ok(());
    }

    print!("{}", format_docs(bundle));
    Ok(())
}

fn format_docs(bundle: &DocBundle) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    for result in &bundle.results {
        output.push_str(&format!("{rule}\nURL: {}\n{rule}\n", result.url));
        match &result.content {
            Ok(content) => output.push_str(content),
            Err(_) => output.push_str("[FETCH FAILED]"),
        }
        output.push_str("\n\n");
    }

    output
}
