//! Replay a scripted sequence of session events.

use std::fs;

use anyhow::{Context as _, Result};
use brew_menu::prelude::*;
use serde_json::json;

use super::{load_menu, open_session, ReplayArgs};
use crate::context::Context;
use crate::output::{format_nutrition, print_selection, print_totals};

/// Run the replay command.
pub fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let menu = load_menu(&args.menu, ctx)?;
    let script = load_script(&args.script, ctx)?;
    let mut session = open_session(&menu, args.product.as_deref(), ctx)?;

    if !ctx.output.is_json() {
        ctx.output.header(&format!(
            "Replaying {} event(s) on {}",
            script.len(),
            session.active_product().id
        ));
        ctx.output.kv("start", &session.price_label());
    }

    for (index, event) in script.iter().enumerate() {
        let totals = session.apply(event);

        if ctx.output.is_json() {
            ctx.output.json_line(&json!({
                "step": index + 1,
                "event": event,
                "product": session.active_product().id,
                "totals": totals,
                "priceLabel": session.price_label(),
            }));
            continue;
        }

        ctx.output.step(
            index + 1,
            script.len(),
            &format!("{:<40} {}", describe(event), session.price_label()),
        );
        if ctx.config.output.nutrition {
            ctx.output.debug(&format_nutrition(totals.nutrition.as_ref()));
        }
    }

    if !ctx.output.is_json() {
        print_selection(&ctx.output, &session, ctx.config.output.show_unselected);
        ctx.output.header("Totals");
        print_totals(&ctx.output, &session, ctx.config.output.nutrition);
    }

    Ok(())
}

fn load_script(path: &str, ctx: &Context) -> Result<Vec<SessionEvent>> {
    let path = ctx.resolve_path(path);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script: {}", path.display()))
}

/// Short human description of an event.
fn describe(event: &SessionEvent) -> String {
    match event {
        SessionEvent::SelectProduct { product } => format!("select product {}", product),
        SessionEvent::SelectGroup { group } => format!("focus {}", group),
        SessionEvent::ToggleIngredient { group, ingredient } => {
            format!("toggle {}/{}", group, ingredient)
        }
        SessionEvent::SelectTier {
            group: Some(group),
            quantity,
        } => format!("tier {} x{}", group, quantity),
        SessionEvent::SelectTier {
            group: None,
            quantity,
        } => format!("tier (focused) x{}", quantity),
        SessionEvent::SetCurrency {
            currency: Some(currency),
        } => format!("currency {}", currency),
        SessionEvent::SetCurrency { currency: None } => "currency cleared".to_string(),
    }
}
