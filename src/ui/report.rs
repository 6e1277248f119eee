//! Plain console rendering of a [`Page`], used by `monkey-viewer show`.

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::formatters::{format_size, pad_right};
use super::view::{MonkeyPanel, Page, TraitCard};
use crate::core::model::Rarity;

fn tinted(text: &str, rarity: &Rarity) -> ColoredString {
    match rarity.color() {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn trait_line(card: &TraitCard, category_width: usize, value_width: usize) -> String {
    format!(
        "  {} {} {}",
        pad_right(&card.category, category_width).white(),
        tinted(&pad_right(&card.value, value_width), &card.rarity).bold(),
        tinted(card.rarity.as_str(), &card.rarity)
    )
}

/// Render the page as printable lines
pub fn render_report(page: &Page, source: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(format!("{} {}", "🐵 ForkMonkey".green().bold(), source.dimmed()));

    if let Some(header) = &page.header {
        out.push(format!(
            "{} {} │ {} {} │ {} {}",
            "Generation".dimmed(),
            header.generation.green().bold(),
            "Age".dimmed(),
            header.age.green().bold(),
            "Rarity".dimmed(),
            header.rarity.green().bold()
        ));
    }
    out.push(String::new());

    out.push("Monkey".white().bold().to_string());
    match &page.monkey {
        MonkeyPanel::Empty => out.push(format!("  {}", "No data loaded".dimmed())),
        MonkeyPanel::Artwork { summary, .. } => match summary {
            Some(summary) => out.push(format!(
                "  SVG {} · {} · {} elements",
                summary.dimensions().unwrap_or_else(|| "?".to_string()),
                format_size(summary.bytes),
                summary.element_count
            )),
            None => out.push(format!(
                "  {}",
                "The artwork does not contain an <svg> element".yellow()
            )),
        },
        MonkeyPanel::Error { message, hint } => {
            out.push(format!("  {}", message.red().bold()));
            out.push(format!("  {}", hint.dimmed()));
        }
    }
    if let Some(identity) = &page.identity {
        out.push(format!("  {}  {}", "DNA Hash ".dimmed(), identity.dna_hash));
        out.push(format!("  {}  {}", "Mutations".dimmed(), identity.mutations));
        out.push(format!("  {}  {}", "Parent   ".dimmed(), identity.parent));
    }
    out.push(String::new());

    if !page.traits.is_empty() {
        out.push(format!(
            "{} {}",
            "Traits".white().bold(),
            format!("({})", page.traits.len()).dimmed()
        ));
        let category_width = page.traits.iter().map(|c| c.category.width()).max().unwrap_or(0);
        let value_width = page.traits.iter().map(|c| c.value.width()).max().unwrap_or(0);
        for card in &page.traits {
            out.push(trait_line(card, category_width, value_width));
        }
        out.push(String::new());
    }

    if let Some(history) = &page.history {
        out.push(format!(
            "{} {}",
            "Evolution History".white().bold(),
            format!("({})", history.count).dimmed()
        ));
        if let Some(placeholder) = history.placeholder() {
            out.push(format!("  {}", placeholder.dimmed()));
        }
        for item in &history.items {
            out.push(format!("  {}", item.date.yellow()));
            out.push(format!("    {}", item.story));
            out.push(format!(
                "    {}",
                format!(
                    "Gen: {} • Mutations: {} • Rarity: {}",
                    item.generation, item.mutations, item.rarity
                )
                .dimmed()
            ));
        }
    }

    out.join("\n")
}
