use clap::Args;
use focus_recruitment::board::{
    board_page, location_options, JobBoardQuery, JobBoardResponse, ALL_LOCATIONS,
};
use focus_recruitment::catalog::{Catalog, JobListing};
use focus_recruitment::config::AppConfig;
use focus_recruitment::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct JobsArgs {
    /// Case-insensitive text matched against title and description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Exact category chip to filter by
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Exact location to filter by
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Page to show (clamped to the available range)
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LocationsArgs {
    /// Narrow the dropdown the way typing into it would
    #[arg(long, default_value = "")]
    pub(crate) query: String,
}

pub(crate) fn run_jobs(args: JobsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = Catalog::embedded()?;

    let query = JobBoardQuery {
        search: args.search,
        category: args.category,
        location: args.location,
        page: Some(args.page),
    };
    let response = board_page(&catalog, config.board.page_size, &query);
    print!("{}", render_board(&response));
    Ok(())
}

pub(crate) fn run_locations(args: LocationsArgs) -> Result<(), AppError> {
    let catalog = Catalog::embedded()?;
    for option in location_options(catalog.locations(), &args.query) {
        println!("- {}", option.label());
    }
    Ok(())
}

pub(crate) fn render_board(response: &JobBoardResponse) -> String {
    let mut out = String::new();
    let filters = &response.filters;
    let page = &response.page;

    out.push_str("Focus Recruitment jobs board\n");
    out.push_str(&format!(
        "Filters: search='{}' | category={} | location={}\n",
        filters.search_query,
        filters.selected_category.as_deref().unwrap_or("All"),
        filters.selected_location.as_deref().unwrap_or(ALL_LOCATIONS),
    ));

    if page.total_results == 0 {
        out.push_str("No jobs match the current filters.\n");
        return out;
    }

    out.push_str(&format!("{} matching jobs\n", page.total_results));
    for listing in &page.items {
        out.push_str(&render_listing(listing));
    }

    if page.show_pagination {
        out.push_str(&format!(
            "\nPage {} of {}{}{}\n",
            page.page,
            page.total_pages,
            if page.has_previous { " | previous" } else { "" },
            if page.has_next { " | next" } else { "" },
        ));
    }
    out
}

fn render_listing(listing: &JobListing) -> String {
    format!(
        "\n[{}] {} ({} priority)\n  {} | {}\n  {}\n  {} | {}\n",
        listing.id,
        listing.title,
        listing.severity.label(),
        listing.category,
        listing.locations.join(", "),
        listing.hours,
        listing.email,
        listing.phone,
    )
}
