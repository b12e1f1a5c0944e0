//! Output formatting for the CLI.

use brew_menu::prelude::*;
use console::style;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print pretty JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a single-line JSON value.
    pub fn json_line<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("    {} {}", style("•").dim(), item);
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Selection mark for a member or tier.
pub fn mark(selected: bool) -> String {
    if selected {
        style("[x]").green().to_string()
    } else {
        style("[ ]").dim().to_string()
    }
}

/// Format a nutrition value, "-" when unknown.
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

/// One-line nutrition summary, "unknown" when the product reports none.
pub fn format_nutrition(facts: Option<&NutritionFacts>) -> String {
    let Some(facts) = facts else {
        return "unknown".to_string();
    };
    format!(
        "{} kcal, fat {}, protein {}, carbs {}, weight {}",
        format_amount(facts.kilocalories),
        format_amount(facts.fat),
        format_amount(facts.protein),
        format_amount(facts.carbohydrate),
        format_amount(facts.weight),
    )
}

/// Print every group of a session's selection.
pub fn print_selection(output: &Output, session: &CustomizationSession, show_unselected: bool) {
    let selection = session.selection();
    if selection.is_empty() {
        output.info("No customizable groups");
        return;
    }

    for group in &selection.groups {
        let focus = if group.is_focused { " (focused)" } else { "" };
        output.header(&format!(
            "{} [{}]{}",
            group.title(),
            group.policy().as_str(),
            focus
        ));
        if let Some(label) = session.group_price_label(group.code()) {
            output.kv("price", &style(label).cyan().to_string());
        }

        let tiers: Vec<String> = group
            .tiers
            .iter()
            .map(|t| format!("{} {} x{}", mark(t.is_selected), t.name, t.quantity))
            .collect();
        output.kv("tiers", &tiers.join("  "));

        for member in &group.members {
            if !member.is_selected && !show_unselected {
                continue;
            }
            let surcharge = session
                .ingredient_price_label(group.code(), member.id())
                .unwrap_or_default();
            output.list_item(&format!(
                "{} {} ({}) {}",
                mark(member.is_selected),
                member.ingredient.name,
                member.id(),
                style(surcharge).dim()
            ));
        }
    }
}

/// Print a session's totals.
pub fn print_totals(output: &Output, session: &CustomizationSession, nutrition: bool) {
    let totals = session.totals();
    output.kv("total", &style(session.price_label()).bold().to_string());
    if nutrition {
        output.kv("nutrition", &format_nutrition(totals.nutrition.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(242.0)), "242");
        assert_eq!(format_amount(Some(1.5)), "1.5");
        assert_eq!(format_amount(None), "-");
    }

    #[test]
    fn test_format_nutrition() {
        let facts = NutritionFacts::absent().with_kilocalories(150.0).with_fat(5.0);
        assert_eq!(
            format_nutrition(Some(&facts)),
            "150 kcal, fat 5, protein -, carbs -, weight -"
        );
    }

    #[test]
    fn test_format_missing_nutrition() {
        assert_eq!(format_nutrition(None), "unknown");
    }
}
