use super::Workspace;
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use movielog_core::ListQuery;
use movielog_models::{Movie, WatchStatus};
use owo_colors::OwoColorize;

pub fn run_list(
    workspace: &Workspace,
    page: usize,
    genre: Option<String>,
    status: Option<String>,
    output: &Output,
) -> Result<()> {
    let query = ListQuery {
        page: page.max(1),
        ..ListQuery::from_params(None, genre.as_deref(), status.as_deref())
    };
    let result = workspace.catalog().list(&query)?;
    output.data(&result)?;
    if !output.is_human() {
        return Ok(());
    }

    if result.movies.is_empty() {
        output.info("No movies match");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(
        ["ID", "Title", "Director", "Year", "Genre", "Status", "Rating"]
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );
    for movie in &result.movies {
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(&movie.director),
            Cell::new(optional(movie.release_year)),
            Cell::new(&movie.genre),
            status_cell(movie.watch_status),
            Cell::new(rating(movie)),
        ]);
    }
    output.table(table);

    let pagination = &result.pagination;
    output.info(format!(
        "Page {} of {} ({} movies)",
        pagination.current_page, pagination.total_pages, pagination.total_records
    ));
    Ok(())
}

pub fn run_show(workspace: &Workspace, id: u64, output: &Output) -> Result<()> {
    let movie = workspace.catalog().get(id)?;
    output.data(&movie)?;
    if !output.is_human() {
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(format!("#{} {}", movie.id, movie.title))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Director"), Cell::new(&movie.director)]);
    table.add_row(vec![Cell::new("Release year"), Cell::new(optional(movie.release_year))]);
    table.add_row(vec![Cell::new("Genre"), Cell::new(&movie.genre)]);
    table.add_row(vec![
        Cell::new("Runtime"),
        Cell::new(movie.runtime.map(|m| format!("{} min", m)).unwrap_or_default()),
    ]);
    table.add_row(vec![Cell::new("Status"), status_cell(movie.watch_status)]);
    table.add_row(vec![Cell::new("Rating"), Cell::new(rating(&movie))]);
    table.add_row(vec![
        Cell::new("Added"),
        Cell::new(movie.date_added.format("%Y-%m-%d %H:%M UTC")),
    ]);
    output.table(table);

    if !movie.review_notes.is_empty() {
        output.info(format!("\n{}", movie.review_notes.italic()));
    }
    Ok(())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn rating(movie: &Movie) -> String {
    movie
        .personal_rating
        .map(|r| format!("{:.1}/10", r))
        .unwrap_or_default()
}

fn status_cell(status: WatchStatus) -> Cell {
    let color = match status {
        WatchStatus::Completed => Color::Green,
        WatchStatus::Watching => Color::Yellow,
        WatchStatus::WantToWatch => Color::Blue,
    };
    Cell::new(status).fg(color)
}
