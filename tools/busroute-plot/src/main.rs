use anyhow::{bail, Context, Result};
use busroute_overlay::{MapHost, OverlayConfig, RouteOverlayLayer, Viewport};
use busroute_transit::prelude::*;
use busroute_transit::spatial::haversine_distance;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{
    filter::FilterFn, fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt,
};

mod bundle;
mod output;

use bundle::Bundle;
use output::{overlay_to_geojson, write_geojson};

#[derive(Parser, Debug)]
#[command(
    name = "busroute-plot",
    author,
    version,
    about = "Render the bus routes through a stop as a GeoJSON overlay",
    long_about = "Loads a JSON transit bundle, selects a stop, and plots every route \
                  pattern through it that is visible in the given bounds. Each visible \
                  segment becomes a LineString feature carrying its route number, legend \
                  color and zoom-dependent width."
)]
struct Args {
    /// Input transit bundle (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Stop id to select
    #[arg(short, long, conflicts_with = "near")]
    stop: Option<String>,

    /// Select the stop closest to `<lat>,<lon>` instead of by id
    #[arg(long, value_parser = parse_lat_lon, allow_hyphen_values = true)]
    near: Option<LatLon>,

    /// Search radius in meters for --near
    #[arg(long, default_value_t = 250.0)]
    radius: f64,

    /// Map zoom level
    #[arg(short, long, allow_negative_numbers = true)]
    zoom: i32,

    /// Visible bounds as `<north>,<west>,<south>,<east>` in degrees
    #[arg(short, long, value_parser = parse_bounds, allow_hyphen_values = true)]
    bounds: Viewport,

    /// Device pixel density factor
    #[arg(short, long, default_value_t = 1.0)]
    density: f32,

    /// Output GeoJSON file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

/// A map view that never moves
struct FixedView {
    bounds: Viewport,
    density_factor: f32,
}

impl MapHost for FixedView {
    fn visible_bounds(&self) -> Viewport {
        self.bounds
    }

    fn density_factor(&self) -> f32 {
        self.density_factor
    }
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    values
        .try_into()
        .map_err(|values: Vec<f64>| format!("expected {N} comma-separated numbers, got {}", values.len()))
}

fn parse_lat_lon(s: &str) -> Result<LatLon, String> {
    let [lat, lon] = parse_numbers::<2>(s)?;
    Ok(LatLon::new(lat, lon))
}

fn parse_bounds(s: &str) -> Result<Viewport, String> {
    let [north, west, south, east] = parse_numbers::<4>(s)?;
    let viewport = Viewport::new(LatLon::new(north, west), LatLon::new(south, east));
    if viewport.is_degenerate() {
        return Err(format!("bounds {s:?} have no area"));
    }
    Ok(viewport)
}

fn setup_logging(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = FilterFn::new(move |meta| {
        meta.module_path().unwrap_or_default().starts_with("busroute") && *meta.level() <= max_level
    });
    let layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().without_time())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();
}

/// Closest stop to `point` within `radius_m`
fn closest_stop(
    provider: &StaticTransitProvider,
    point: LatLon,
    radius_m: f64,
) -> Option<std::sync::Arc<dyn Stop>> {
    provider
        .stops_near(point, radius_m)
        .into_iter()
        .min_by(|a, b| {
            haversine_distance(point, a.location())
                .total_cmp(&haversine_distance(point, b.location()))
        })
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    tracing::info!("Input: {}", args.input.display());

    let provider = Bundle::load(&args.input)?
        .into_provider()
        .context("Invalid transit bundle")?;

    tracing::info!(
        "Loaded {} stops and {} routes",
        provider.all_stops().len(),
        provider.all_routes().len()
    );

    let mut selection = StopSelection::new();
    if let Some(id) = &args.stop {
        selection
            .select_by_id(&provider, &StopIdentifier::new(id))
            .with_context(|| format!("Cannot select stop {id}"))?;
    } else if let Some(point) = args.near {
        match closest_stop(&provider, point, args.radius) {
            Some(stop) => selection.select(stop),
            None => bail!(
                "No stop within {}m of {}, {}",
                args.radius,
                point.latitude(),
                point.longitude()
            ),
        }
    }

    match selection.selected() {
        Some(stop) => tracing::info!("Selected stop {} ({})", stop.id(), stop.name()),
        None => tracing::info!("No stop selected"),
    }

    let config = OverlayConfig::default().with_density(args.density);
    let mut layer = RouteOverlayLayer::new(config).context("Invalid overlay configuration")?;
    let view = FixedView {
        bounds: args.bounds,
        density_factor: args.density,
    };

    let segment_count = layer
        .redraw(&view, &selection, args.zoom)
        .segments()
        .len();

    tracing::info!("Plotted {segment_count} visible segments");
    for label in layer.legend_labels() {
        tracing::info!("Route {} -> {}", label.text, busroute_overlay::style::to_hex(label.color));
    }

    let geojson = overlay_to_geojson(layer.overlay());
    match &args.output {
        Some(path) => write_geojson(&geojson, path)?,
        None => println!(
            "{}",
            serde_json::to_string_pretty(&geojson).context("Failed to serialize GeoJSON")?
        ),
    }

    Ok(())
}
