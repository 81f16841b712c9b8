//! Terraform fragment output for ASG records.
//!
//! One file per subscription:
//!
//! ```text
//! asgs = [
//!   {
//!     asgName           = "asg1"
//!     resourceGroupName = "rg1"
//!   },
//! ]
//! ```

use crate::error::{AsgError, AsgResult};
use crate::models::Asg;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name for a subscription: lowercase, spaces and path separators to `-`.
pub fn fragment_file_name(display_name: &str) -> String {
    let name: String = display_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '-',
            _ => c,
        })
        .collect();
    format!("{}.tf", name.to_lowercase())
}

/// Escape a value for use inside an HCL double quoted string.
pub fn escape_hcl(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `${` and `%{` start interpolation / directives
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// One list element.
pub fn render_block(asg: &Asg) -> String {
    format!(
        "  {{\n    asgName           = \"{name}\"\n    resourceGroupName = \"{rg}\"\n  }},\n",
        name = escape_hcl(&asg.asg_name),
        rg = escape_hcl(&asg.resource_group_name),
    )
}

fn write_asgs<W: Write>(writer: &mut W, asgs: &[Asg]) -> io::Result<()> {
    writeln!(writer, "asgs = [")?;
    for asg in asgs {
        writer.write_all(render_block(asg).as_bytes())?;
    }
    writeln!(writer, "]")?;
    writer.flush()
}

/// Write the ASGs of one subscription to `target_dir`.
///
/// Returns the written path, or `None` when `asgs` is empty and no file was
/// created. An existing file is truncated. A failed write can leave a
/// partial file behind.
pub fn write_fragment(
    display_name: &str,
    asgs: &[Asg],
    target_dir: &Path,
) -> AsgResult<Option<PathBuf>> {
    if asgs.is_empty() {
        log::info!("No ASGs in {display_name}, skip writing file");
        return Ok(None);
    }

    let path = target_dir.join(fragment_file_name(display_name));
    let file = File::create(&path).map_err(|e| AsgError::io(path.clone(), e))?;
    let mut writer = BufWriter::new(file);
    write_asgs(&mut writer, asgs).map_err(|e| AsgError::io(path.clone(), e))?;

    log::info!("Wrote {} ASGs to {}", asgs.len(), path.display());
    Ok(Some(path))
}
