use std::path::Path;

use colored::Colorize;

use crate::cli::output;
use crate::core::errors::{PixlockError, Result};
use crate::core::models::selected_file::{format_bytes, SelectedFile};
use crate::core::services::validation;

/// Execute the `pixlock inspect` command.
///
/// Shows the file details the upload would carry, plus whether the
/// encrypt and decrypt flows would accept the file. Never contacts
/// the server.
pub fn execute(file: &str) -> Result<()> {
    let selected = SelectedFile::from_path(Path::new(file))?;

    output::header("File information");
    println!("  Filename: {}", selected.name.cyan());
    println!("  Size:     {}", format_bytes(selected.size));
    println!("  Type:     {}", selected.mime);
    match &selected.modified {
        Some(ts) => println!("  Modified: {}", ts.format("%Y-%m-%d %H:%M:%S")),
        None => println!("  Modified: {}", "unknown".dimmed()),
    }

    println!();
    print_verdict("encrypt", validation::validate_image(&selected));
    print_verdict("decrypt", validation::validate_package(&selected));

    Ok(())
}

fn print_verdict(flow: &str, verdict: Result<()>) {
    match verdict {
        Ok(()) => output::success(&format!("{flow}: accepted")),
        Err(e) => output::warning(&format!("{flow}: rejected ({})", short_reason(&e))),
    }
}

/// One-line rejection reason; the full multi-line help text belongs
/// to the actual upload commands.
fn short_reason(e: &PixlockError) -> String {
    match e {
        PixlockError::FileTooLarge { size, limit } => {
            format!("too large: {} over the {} limit", format_bytes(*size), format_bytes(*limit))
        }
        PixlockError::UnsupportedImageType { detected } => {
            format!("unsupported image type: {detected}")
        }
        PixlockError::NotAPackage { detected } => {
            format!("not a ZIP package: {detected}")
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::validation::MAX_FILE_SIZE;
    use std::path::PathBuf;

    fn file(name: &str, size: u64, mime: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(name),
            name: name.to_string(),
            size,
            mime: mime.to_string(),
            modified: None,
        }
    }

    #[test]
    fn short_reason_for_oversize_names_both_sizes() {
        let f = file("big.png", MAX_FILE_SIZE + 1024, "image/png");
        let reason = short_reason(&validation::validate_image(&f).unwrap_err());
        assert!(reason.contains("too large"));
        assert!(reason.contains("100.00 MB"));
    }

    #[test]
    fn short_reason_for_wrong_type_names_the_type() {
        let f = file("doc.pdf", 10, "application/pdf");
        let reason = short_reason(&validation::validate_image(&f).unwrap_err());
        assert_eq!(reason, "unsupported image type: application/pdf");
    }

    #[test]
    fn short_reason_for_non_zip_names_the_type() {
        let f = file("doc.pdf", 10, "application/pdf");
        let reason = short_reason(&validation::validate_package(&f).unwrap_err());
        assert_eq!(reason, "not a ZIP package: application/pdf");
    }
}
