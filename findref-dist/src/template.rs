use std::fs;
use std::path::Path;

use crate::error::{DistError, Result};

/// Read a template file, failing before any rendering is attempted when the
/// file is absent.
pub fn load(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DistError::TemplateNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Substitute `{{key}}` placeholders. Unknown placeholders are left in place
/// so a typo shows up verbatim in the rendered output.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}
