//! HTML pages served by the intake routes.
//!
//! Both templates are compiled into the binary. The form template has two
//! placeholders, `{{ size_options }}` and `{{ custom_option }}`.

use loom_core::CUSTOM_SIZE_OPTION;

const FORM_TEMPLATE: &str = include_str!("../templates/form.html");

/// Static confirmation page.
pub const SUCCESS_PAGE: &str = include_str!("../templates/success.html");

/// Render the application form offering `sizes` in the size dropdown.
pub fn render_form(sizes: &[&str]) -> String {
    let options = sizes
        .iter()
        .map(|size| {
            let size = escape_html(size);
            format!("        <option value=\"{size}\">{size}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    FORM_TEMPLATE
        .replace("{{ size_options }}", &options)
        .replace("{{ custom_option }}", &escape_html(CUSTOM_SIZE_OPTION))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
