use crate::errors::ParseError;
use crate::Coordinate;
use wkt::types::{Coord, LineString, Polygon};
use wkt::Geometry;

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Coordinate {
            x: coord.x,
            y: coord.y,
        }
    }
}

/// All vertices of all geometries in `wkt_str`, in order of appearance, e.g.
/// to build a [`Quadtree`](crate::Quadtree) from a `MULTIPOINT`. Empty points
/// are skipped.
pub fn parse_points(wkt_str: &str) -> Result<Vec<Coordinate>, ParseError> {
    let wkt_geoms =
        wkt::Wkt::from_str(wkt_str).map_err(|err| ParseError::Wkt(err.to_string()))?;
    let mut points = Vec::new();
    for geom in wkt_geoms.items {
        collect_points(geom, &mut points);
    }
    Ok(points)
}

fn collect_points(geom: Geometry<f64>, points: &mut Vec<Coordinate>) {
    match geom {
        Geometry::Point(p) => points.extend(p.0.map(Coordinate::from)),
        Geometry::LineString(ls) => collect_linestring(ls, points),
        Geometry::Polygon(poly) => collect_polygon(poly, points),
        Geometry::MultiPoint(mp) => {
            points.extend(mp.0.into_iter().filter_map(|p| p.0).map(Coordinate::from))
        }
        Geometry::MultiLineString(mls) => {
            mls.0.into_iter().for_each(|ls| collect_linestring(ls, points))
        }
        Geometry::MultiPolygon(mpoly) => {
            mpoly.0.into_iter().for_each(|poly| collect_polygon(poly, points))
        }
        Geometry::GeometryCollection(gc) => {
            gc.0.into_iter().for_each(|g| collect_points(g, points))
        }
    }
}

fn collect_linestring(linestring: LineString<f64>, points: &mut Vec<Coordinate>) {
    points.extend(linestring.0.into_iter().map(Coordinate::from));
}

// Shell first, then holes.
fn collect_polygon(poly: Polygon<f64>, points: &mut Vec<Coordinate>) {
    poly.0.into_iter().for_each(|ring| collect_linestring(ring, points));
}
