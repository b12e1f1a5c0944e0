//! Show a product's initial customization.

use anyhow::Result;
use serde_json::json;

use super::{load_menu, open_session, InspectArgs};
use crate::context::Context;
use crate::output::{print_selection, print_totals};

/// Run the inspect command.
pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let menu = load_menu(&args.menu, ctx)?;
    let session = open_session(&menu, Some(&args.product), ctx)?;
    let product = session.active_product();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product.id,
            "sizes": session.products().iter().map(|p| &p.id).collect::<Vec<_>>(),
            "selection": session.selection(),
            "totals": session.totals(),
            "priceLabel": session.price_label(),
        }));
        return Ok(());
    }

    ctx.output.header(&format!("{} ({})", product.name, product.id));
    if let Some(ref size) = product.size_name {
        ctx.output.kv("size", size);
    }
    let sizes: Vec<&str> = session.products().iter().map(|p| p.id.as_str()).collect();
    ctx.output.kv("sizes", &sizes.join(", "));

    print_selection(&ctx.output, &session, ctx.config.output.show_unselected);

    ctx.output.header("Totals");
    print_totals(&ctx.output, &session, ctx.config.output.nutrition);

    Ok(())
}
