//! Geodesic distance math on a sphere.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::distance::DistanceCalculator;
use crate::geometry::{BBox, Circle, Point, normalize_lon};

/// Mean Earth radius in kilometers.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0087714;

/// The angular-distance primitive shared by all spherical calculators.
///
/// The three formulas are interchangeable; they differ only in numerical
/// behavior. Haversine is best conditioned for small distances, the law of
/// cosines is the simplest but loses precision near antipodal pairs, and
/// the spherical Vincenty form is robust for any pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SphereFormula {
    /// Haversine formula.
    Haversine,
    /// Spherical law of cosines.
    LawOfCosines,
    /// Vincenty's formula on a sphere.
    Vincenty,
}

impl SphereFormula {
    /// Angular distance in radians between two lat/lon pairs in radians.
    pub(crate) fn angular_distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let delta_lon = lon2 - lon1;
        match self {
            SphereFormula::Haversine => {
                let half_lat = ((lat2 - lat1) / 2.0).sin();
                let half_lon = (delta_lon / 2.0).sin();
                let a = half_lat * half_lat + lat1.cos() * lat2.cos() * half_lon * half_lon;
                2.0 * a.sqrt().atan2((1.0 - a).sqrt())
            }
            SphereFormula::LawOfCosines => {
                let cos_angle =
                    lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();
                cos_angle.clamp(-1.0, 1.0).acos()
            }
            SphereFormula::Vincenty => {
                let cos_lat1 = lat1.cos();
                let cos_lat2 = lat2.cos();
                let sin_lat1 = lat1.sin();
                let sin_lat2 = lat2.sin();
                let a = cos_lat2 * delta_lon.sin();
                let b = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * delta_lon.cos();
                let c = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * delta_lon.cos();
                (a * a + b * b).sqrt().atan2(c)
            }
        }
    }
}

/// Great-circle distance math on a sphere of a fixed radius.
///
/// Distances are in the radius' units (kilometers by default). All three
/// formulas share the same bearing projection and enclosing-box algorithm;
/// only the angular-distance primitive varies.
#[derive(Debug, Clone, Copy)]
pub struct SphereCalculator {
    formula: SphereFormula,
    radius: f64,
}

impl SphereCalculator {
    /// Create a calculator over the mean Earth radius.
    pub fn new(formula: SphereFormula) -> Self {
        SphereCalculator {
            formula,
            radius: EARTH_MEAN_RADIUS_KM,
        }
    }

    /// Use a custom sphere radius (changes the distance units).
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// The sphere radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The angular-distance formula in use.
    pub fn formula(&self) -> SphereFormula {
        self.formula
    }
}

impl DistanceCalculator for SphereCalculator {
    fn distance_xy(&self, from: &Point, x: f64, y: f64) -> f64 {
        self.radius
            * self.formula.angular_distance(
                from.y.to_radians(),
                from.x.to_radians(),
                y.to_radians(),
                x.to_radians(),
            )
    }

    fn point_on_bearing(&self, from: &Point, dist: f64, bearing_deg: f64) -> Point {
        let angular = dist / self.radius;
        let bearing = bearing_deg.to_radians();
        let lat1 = from.y.to_radians();
        let lon1 = from.x.to_radians();

        let lat2 =
            (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        Point::new(normalize_lon(lon2.to_degrees()), lat2.to_degrees())
    }

    fn box_by_distance(&self, from: &Point, dist: f64) -> BBox {
        if dist <= 0.0 {
            return BBox::new(from.x, from.x, from.y, from.y);
        }
        let angular = dist / self.radius;
        if angular >= PI {
            return BBox::WORLD;
        }

        let lat = from.y.to_radians();
        let lat_n = lat + angular;
        let lat_s = lat - angular;
        if lat_n >= FRAC_PI_2 || lat_s <= -FRAC_PI_2 {
            // the circle reaches past a pole: a longitude delta is undefined
            // there, so the box spans the full longitude range
            let max_y = if lat_n >= FRAC_PI_2 {
                90.0
            } else {
                lat_n.to_degrees()
            };
            let min_y = if lat_s <= -FRAC_PI_2 {
                -90.0
            } else {
                lat_s.to_degrees()
            };
            return BBox::new(-180.0, 180.0, min_y, max_y);
        }

        let sin_angular = angular.sin();
        let cos_lat = lat.cos();
        let half_width = sin_angular
            .atan2((cos_lat * cos_lat - sin_angular * sin_angular).sqrt())
            .to_degrees();
        let min_x = normalize_lon(from.x - half_width);
        let max_x = normalize_lon(from.x + half_width);
        BBox::new(min_x, max_x, lat_s.to_degrees(), lat_n.to_degrees())
    }

    fn area_bbox(&self, bbox: &BBox) -> f64 {
        bbox.width().to_radians()
            * (bbox.max_y.to_radians().sin() - bbox.min_y.to_radians().sin())
            * self.radius
            * self.radius
    }

    fn area_circle(&self, circle: &Circle) -> f64 {
        // spherical cap area
        2.0 * PI
            * self.radius
            * self.radius
            * (1.0 - (circle.distance() / self.radius).cos())
    }
}
