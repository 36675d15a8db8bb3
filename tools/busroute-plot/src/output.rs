use anyhow::{Context, Result};
use busroute_overlay::{style::to_hex, RouteOverlay, RouteSegment};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use std::path::Path;

/// Convert a segment to a two-point GeoJSON LineString feature
fn segment_to_feature(segment: &RouteSegment) -> Feature {
    let coords: Vec<Vec<f64>> = [segment.start, segment.end]
        .iter()
        .map(|p| {
            let p = p.to_lat_lon();
            vec![p.longitude(), p.latitude()]
        })
        .collect();

    let style = segment.style();

    let mut properties = serde_json::Map::new();
    properties.insert("route".to_string(), serde_json::json!(segment.route.as_str()));
    properties.insert("color".to_string(), serde_json::json!(style.hex()));
    properties.insert("width".to_string(), serde_json::json!(style.width));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coords))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// One feature per segment; the legend rides along as a `legend` foreign member
pub fn overlay_to_geojson(overlay: &RouteOverlay) -> GeoJson {
    let features: Vec<Feature> = overlay.segments().iter().map(segment_to_feature).collect();

    let legend: Vec<serde_json::Value> = overlay
        .legend()
        .entries()
        .iter()
        .map(|entry| {
            serde_json::json!({
                "route": entry.number.as_str(),
                "color": to_hex(entry.color),
            })
        })
        .collect();

    let mut foreign_members = serde_json::Map::new();
    foreign_members.insert("legend".to_string(), serde_json::Value::Array(legend));

    GeoJson::from(FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    })
}

pub fn write_geojson(geojson: &GeoJson, output_path: &Path) -> Result<()> {
    tracing::info!("Writing overlay to {}", output_path.display());

    let json_string =
        serde_json::to_string_pretty(geojson).context("Failed to serialize GeoJSON")?;

    std::fs::write(output_path, json_string)
        .with_context(|| format!("Failed to write GeoJSON to {}", output_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use busroute_overlay::{OverlayConfig, RouteOverlayRenderer, Viewport};
    use busroute_transit::prelude::*;
    use std::sync::Arc;

    fn overlay() -> RouteOverlay {
        let route: Arc<dyn Route> = Arc::new(RouteImpl {
            number: RouteNumber::new("99"),
            name: "UBC/Commercial-Broadway".into(),
            patterns: vec![Arc::new(PatternImpl {
                name: "EB1".into(),
                destination: "Commercial-Broadway".into(),
                direction: Direction::East,
                path: vec![LatLon::new(49.26, -123.25), LatLon::new(49.25, -123.15)],
            })],
        });
        let stop = StopImpl {
            id: StopIdentifier::new("51479"),
            name: "UBC Exchange Bay 7".into(),
            location: LatLon::new(49.2674, -123.2473),
            routes: vec![route],
        };

        let renderer = RouteOverlayRenderer::new(OverlayConfig::default().with_density(1.5)).unwrap();
        let viewport = Viewport::new(LatLon::new(49.30, -123.30), LatLon::new(49.20, -123.10));
        renderer.render(Some(&stop), &viewport, 12)
    }

    #[test]
    fn test_overlay_to_geojson() {
        let json = serde_json::to_value(overlay_to_geojson(&overlay())).unwrap();

        assert_eq!(json["type"], "FeatureCollection");

        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);

        let feature = &features[0];
        assert_eq!(feature["properties"]["route"], "99");
        assert_eq!(feature["properties"]["color"], "#e6194b");
        assert_eq!(feature["properties"]["width"], 7.5);

        let coords = feature["geometry"]["coordinates"].as_array().unwrap();
        let first = coords[0].as_array().unwrap();
        assert!((first[0].as_f64().unwrap() + 123.25).abs() < 1e-7);
        assert!((first[1].as_f64().unwrap() - 49.26).abs() < 1e-7);

        assert_eq!(json["legend"][0]["route"], "99");
        assert_eq!(json["legend"][0]["color"], "#e6194b");
    }

    #[test]
    fn test_write_geojson() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.geojson");

        write_geojson(&overlay_to_geojson(&overlay()), &path).unwrap();

        let written: GeoJson = std::fs::read_to_string(&path).unwrap().parse().unwrap();
        assert!(matches!(written, GeoJson::FeatureCollection(fc) if fc.features.len() == 1));
    }
}
