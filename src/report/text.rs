use crate::domain::model::{AreaEstimate, Category, TierEstimates};
use crate::report::format::{format_area, format_currency, format_whole_currency};
use crate::report::partners::PARTNERS;
use crate::report::ReportContext;
use crate::utils::error::{EstimateError, Result};
use std::fmt::{self, Write};

/// Tier names of the aggregate basis, in window, paint, flooring order.
struct BasisNames<'a> {
    window: &'a str,
    paint: &'a str,
    flooring: &'a str,
}

pub fn render(context: &ReportContext<'_>) -> Result<String> {
    let basis = &context.estimate.total.basis;
    let catalog = context.catalog;
    let names = BasisNames {
        window: catalog.tier_name(Category::Windows, &basis.window)?,
        paint: catalog.tier_name(Category::Paint, &basis.paint)?,
        flooring: catalog.tier_name(Category::Flooring, &basis.flooring)?,
    };

    let mut out = String::new();
    write_summary(&mut out, context, &names)
        .map_err(|e| EstimateError::IoError(std::io::Error::other(e)))?;
    Ok(out)
}

fn write_summary(
    out: &mut String,
    context: &ReportContext<'_>,
    names: &BasisNames<'_>,
) -> fmt::Result {
    let estimate = context.estimate;

    writeln!(out, "Renovation Estimate Summary: {}", context.project_name)?;
    writeln!(out, "Generated {}", context.generated_at.format("%Y-%m-%d %H:%M UTC"))?;

    writeln!(out, "\nWindow Treatments")?;
    for tier in estimate.windows.iter() {
        writeln!(
            out,
            "  {}: {} - {}",
            tier.tier_name,
            format_whole_currency(tier.estimate.low),
            format_whole_currency(tier.estimate.high)
        )?;
        for room in &tier.estimate.room_quantities {
            let noun = if room.quantity > 1 { "windows" } else { "window" };
            writeln!(out, "    {}: {} {}", room.name, room.quantity, noun)?;
        }
        if let Some(note) = oversized_note(context, &tier.tier_id) {
            writeln!(out, "    note: {}", note)?;
        }
    }

    writeln!(out, "\nPainting")?;
    write_area_section(out, &estimate.paint)?;

    writeln!(out, "\nFlooring")?;
    write_area_section(out, &estimate.flooring)?;

    writeln!(out, "\nComplete Project Estimate")?;
    writeln!(
        out,
        "  Estimated Total: {} - {}",
        format_currency(estimate.total.low),
        format_currency(estimate.total.high)
    )?;
    writeln!(
        out,
        "  * Based on {}, {}, and {} flooring options. Prices include materials and standard installation.",
        names.window, names.paint, names.flooring
    )?;

    writeln!(out, "\nReady to Start Your Project?")?;
    writeln!(
        out,
        "Contact our partner programs for professional service and exclusive discounts:"
    )?;
    for partner in PARTNERS {
        writeln!(out, "  - {}: {}", partner.name, partner.description)?;
    }

    Ok(())
}

fn write_area_section(out: &mut String, estimates: &TierEstimates<AreaEstimate>) -> fmt::Result {
    for tier in estimates.iter() {
        writeln!(out, "  {}: {}", tier.tier_name, format_currency(tier.estimate.cost))?;
        writeln!(out, "    Total area: {} sq. ft.", format_area(tier.estimate.total_area))?;
        for room in &tier.estimate.rooms {
            match room.wall_count {
                Some(walls) => writeln!(
                    out,
                    "    {}: {} sq. ft. ({} walls)",
                    room.name,
                    format_area(room.area),
                    walls
                )?,
                None => writeln!(out, "    {}: {} sq. ft.", room.name, format_area(room.area))?,
            }
        }
    }
    Ok(())
}

/// Windows wider than a tier's `max_width` need more than one treatment.
fn oversized_note(context: &ReportContext<'_>, tier_id: &str) -> Option<String> {
    let max_width = context.catalog.window_tier(tier_id).ok()?.max_width?;
    let count = context
        .entries
        .windows
        .as_slice()
        .iter()
        .filter(|entry| entry.area_sq_ft().is_ok())
        .filter(|entry| entry.width.is_some_and(|width| width > max_width))
        .fold(0u64, |count, entry| count.saturating_add(u64::from(entry.quantity())));

    (count > 0).then(|| {
        format!(
            "{} window(s) wider than {} in; may need more than one treatment",
            count,
            format_area(max_width)
        )
    })
}
