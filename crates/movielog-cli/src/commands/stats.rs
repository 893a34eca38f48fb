use super::Workspace;
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};

pub fn run_stats(workspace: &Workspace, output: &Output) -> Result<()> {
    let stats = workspace.catalog().stats()?;
    output.data(&stats)?;
    if !output.is_human() {
        return Ok(());
    }

    let mut summary = Table::new();
    summary.set_header(vec![
        Cell::new("Collection").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    summary.add_row(vec![Cell::new("Movies"), Cell::new(stats.total)]);
    summary.add_row(vec![Cell::new("Completed"), Cell::new(stats.completed)]);
    summary.add_row(vec![Cell::new("Watching"), Cell::new(stats.watching)]);
    summary.add_row(vec![Cell::new("Want to Watch"), Cell::new(stats.want_to_watch)]);
    summary.add_row(vec![
        Cell::new("Total runtime"),
        Cell::new(format!(
            "{} min ({}h {}m)",
            stats.total_runtime,
            stats.total_runtime / 60,
            stats.total_runtime % 60
        )),
    ]);
    summary.add_row(vec![
        Cell::new("Average rating"),
        Cell::new(format!("{:.1} ({} rated)", stats.average_rating, stats.rating_count)),
    ]);
    output.table(summary);

    if !stats.genre_breakdown.is_empty() {
        let mut genres = Table::new();
        genres.set_header(vec![
            Cell::new("Genre").add_attribute(Attribute::Bold),
            Cell::new("Movies").add_attribute(Attribute::Bold),
        ]);
        for (genre, count) in &stats.genre_breakdown {
            genres.add_row(vec![Cell::new(genre), Cell::new(count)]);
        }
        output.table(genres);
    }

    if !stats.year_breakdown.is_empty() {
        let mut years = Table::new();
        years.set_header(vec![
            Cell::new("Year").add_attribute(Attribute::Bold),
            Cell::new("Movies").add_attribute(Attribute::Bold),
        ]);
        for (year, count) in &stats.year_breakdown {
            years.add_row(vec![Cell::new(year), Cell::new(count)]);
        }
        output.table(years);
    }
    Ok(())
}

pub fn run_genres(workspace: &Workspace, output: &Output) -> Result<()> {
    let genres = workspace.catalog().genres()?;
    output.data(&genres)?;
    if !output.is_human() {
        return Ok(());
    }

    if genres.is_empty() {
        output.info("No genres recorded yet");
    }
    for genre in genres {
        output.info(genre);
    }
    Ok(())
}
