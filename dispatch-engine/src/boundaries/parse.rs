//! Parsing of raw boundary documents into typed districts.
//!
//! Boundary records come out of the store as GeoJSON-shaped nested
//! arrays. Parsing is deliberately lenient: a malformed document costs a
//! warning and is skipped, never the whole load.

use serde_json::Value;
use tracing::warn;

use crate::domain::{District, Geometry, Polygon, Ring};
use crate::store::RawDistrictDocument;

/// Parse every usable district out of `docs`, in input order.
pub fn parse_documents(docs: &[RawDistrictDocument]) -> Vec<District> {
    docs.iter().filter_map(parse_document).collect()
}

fn parse_document(doc: &RawDistrictDocument) -> Option<District> {
    let owner = match doc.owner_name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => {
            warn!(document = doc.id, "district document has no owner station name, skipping");
            return None;
        }
    };

    let geometry = match doc.geometry_type.as_str() {
        "Polygon" => parse_polygon(&doc.coordinates).map(Geometry::Polygon),
        "MultiPolygon" => parse_multi_polygon(&doc.coordinates),
        other => {
            warn!(
                document = doc.id,
                geometry_type = other,
                "unsupported geometry type, skipping"
            );
            return None;
        }
    };

    match geometry {
        Some(geometry) => Some(District {
            owner_station_name: owner,
            geometry,
        }),
        None => {
            warn!(document = doc.id, "district document yielded no usable rings, skipping");
            None
        }
    }
}

fn parse_multi_polygon(coordinates: &Value) -> Option<Geometry> {
    let polygons: Vec<Polygon> = coordinates
        .as_array()?
        .iter()
        .filter_map(parse_polygon)
        .collect();
    if polygons.is_empty() {
        None
    } else {
        Some(Geometry::MultiPolygon(polygons))
    }
}

/// A polygon with zero usable rings is dropped.
fn parse_polygon(coordinates: &Value) -> Option<Polygon> {
    let rings: Vec<Ring> = coordinates.as_array()?.iter().filter_map(parse_ring).collect();
    if rings.is_empty() {
        None
    } else {
        Some(Polygon::new(rings))
    }
}

/// A ring that yields zero usable points is dropped.
fn parse_ring(value: &Value) -> Option<Ring> {
    let points: Vec<(f64, f64)> = value.as_array()?.iter().filter_map(parse_point).collect();
    if points.is_empty() {
        None
    } else {
        Some(Ring::new(points))
    }
}

/// A point is kept only when both coordinate values are numbers.
fn parse_point(value: &Value) -> Option<(f64, f64)> {
    let pair = value.as_array()?;
    let x = pair.first()?.as_f64()?;
    let y = pair.get(1)?.as_f64()?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: i64, owner: Option<&str>, geometry_type: &str, coordinates: Value) -> RawDistrictDocument {
        RawDistrictDocument {
            id,
            owner_name: owner.map(str::to_string),
            geometry_type: geometry_type.to_string(),
            coordinates,
        }
    }

    #[test]
    fn parses_polygon_document() {
        let docs = [doc(
            1,
            Some("Station_1"),
            "Polygon",
            json!([[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]]),
        )];

        let districts = parse_documents(&docs);
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].owner_station_name, "Station_1");
        assert!(districts[0].geometry.contains(5.0, 5.0));
    }

    #[test]
    fn parses_multi_polygon_document() {
        let docs = [doc(
            2,
            Some("Station_2"),
            "MultiPolygon",
            json!([
                [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]],
                [[[20.0, 0.0], [30.0, 0.0], [30.0, 10.0], [20.0, 10.0]]]
            ]),
        )];

        let districts = parse_documents(&docs);
        assert_eq!(districts.len(), 1);
        assert!(districts[0].geometry.contains(25.0, 5.0));
        assert!(!districts[0].geometry.contains(15.0, 5.0));
    }

    #[test]
    fn missing_owner_is_skipped() {
        let square = json!([[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]]);
        let docs = [
            doc(3, None, "Polygon", square.clone()),
            doc(4, Some("   "), "Polygon", square),
        ];

        assert!(parse_documents(&docs).is_empty());
    }

    #[test]
    fn unsupported_type_is_skipped() {
        let docs = [doc(5, Some("Station_5"), "LineString", json!([[0.0, 0.0], [1.0, 1.0]]))];
        assert!(parse_documents(&docs).is_empty());
    }

    #[test]
    fn non_numeric_points_are_dropped() {
        let docs = [doc(
            6,
            Some("Station_6"),
            "Polygon",
            json!([[[0.0, 0.0], ["bad", 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]]),
        )];

        let districts = parse_documents(&docs);
        assert_eq!(districts.len(), 1);
        // The malformed vertex is gone; the remaining square still works.
        assert!(districts[0].geometry.contains(5.0, 5.0));
    }

    #[test]
    fn document_with_only_unusable_rings_is_skipped() {
        let docs = [doc(
            7,
            Some("Station_7"),
            "Polygon",
            json!([[["a", "b"], ["c", "d"]]]),
        )];

        assert!(parse_documents(&docs).is_empty());
    }

    #[test]
    fn bad_documents_do_not_block_good_ones() {
        let square = json!([[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]]);
        let docs = [
            doc(8, None, "Polygon", square.clone()),
            doc(9, Some("Station_9"), "Circle", json!([])),
            doc(10, Some("Station_10"), "Polygon", square),
        ];

        let districts = parse_documents(&docs);
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].owner_station_name, "Station_10");
    }
}
