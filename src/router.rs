use crate::buildium::LeaseSource;
use crate::config::AppConfig;
use crate::domain::{aggregate, build_occupant_index, merge_layout, LeaseRecord};
use crate::errors::{ResultResp, ServerError};
use crate::layout::load_map_layout;
use crate::responses::html_response;
use crate::templates::pages::{leases_page, map_page, MapVm};
use astra::Request;

pub struct App {
    pub cfg: AppConfig,
    pub leases: Box<dyn LeaseSource>,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => render_map(app),
        ("GET", "/leases") => render_leases(app),
        _ => Err(ServerError::NotFound),
    }
}

/// Fetches the full lease set and narrows it to the configured property.
/// Filtering by property is the caller's job, not the classification core's.
fn property_records(app: &App) -> Result<Vec<LeaseRecord>, ServerError> {
    let all = app
        .leases
        .lease_records()
        .map_err(|e| ServerError::Upstream(e.to_string()))?;

    Ok(all
        .into_iter()
        .filter(|r| r.property_name == app.cfg.property_name)
        .collect())
}

/// The full render pipeline, once per request:
/// fetch -> build index -> merge onto layout -> aggregate -> page.
fn render_map(app: &App) -> ResultResp {
    let records = property_records(app)?;
    let layout = load_map_layout(&app.cfg.layout_path);
    let scheme = app.cfg.prefix_scheme;

    let index = build_occupant_index(&records, scheme);
    let booths = merge_layout(&layout, &index, scheme);
    let stats = aggregate(&booths);

    let vm = MapVm {
        property_name: app.cfg.property_name.clone(),
        plane_width: layout.plane_width,
        plane_height: layout.plane_height,
        booths,
        stats,
        scheme,
    };

    html_response(map_page(&vm))
}

fn render_leases(app: &App) -> ResultResp {
    let records = property_records(app)?;
    html_response(leases_page(&app.cfg.property_name, &records))
}
