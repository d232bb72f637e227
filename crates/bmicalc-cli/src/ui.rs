//! UI helpers for CLI display.

use console::{style, Style};

use bmicalc_core::category::Category;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Terminal style for a category label.
#[must_use]
pub fn category_style(category: Category) -> Style {
    let base = Style::new().bold();
    match category {
        Category::Underweight => base.cyan(),
        Category::Normal => base.green(),
        Category::Overweight => base.yellow(),
        Category::Obese => base.red(),
    }
}

/// Category name, coloured unless `NO_COLOR` is set.
#[must_use]
pub fn styled_category(category: Category) -> String {
    if is_color_disabled() {
        category.name().to_string()
    } else {
        category_style(category).apply_to(category.name()).to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
