//! The naming contract between a logical spatial field and the five
//! primitive sub-fields the host index actually stores.

use crate::geometry::BBox;

use serde::{Deserialize, Serialize};

/// Sub-field names derived from one logical field prefix.
///
/// Created once per field definition and reused for every document and
/// query. The index never stores an opaque shape; a box is written as four
/// numeric sub-fields plus one boolean crossing flag under these names.
///
/// # Examples
///
/// ```
/// use graticule::query::BBoxFields;
///
/// let fields = BBoxFields::new("geo");
/// assert_eq!(fields.min_x(), "geo__minX");
/// assert_eq!(fields.crosses_dateline(), "geo__xdl");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBoxFields {
    prefix: String,
    min_x: String,
    max_x: String,
    min_y: String,
    max_y: String,
    xdl: String,
}

impl BBoxFields {
    /// Derive the five sub-field names from `prefix`.
    pub fn new(prefix: &str) -> Self {
        BBoxFields {
            prefix: prefix.to_string(),
            min_x: format!("{prefix}__minX"),
            max_x: format!("{prefix}__maxX"),
            min_y: format!("{prefix}__minY"),
            max_y: format!("{prefix}__maxY"),
            xdl: format!("{prefix}__xdl"),
        }
    }

    /// The logical field prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Name of the minimum-X sub-field.
    pub fn min_x(&self) -> &str {
        &self.min_x
    }

    /// Name of the maximum-X sub-field.
    pub fn max_x(&self) -> &str {
        &self.max_x
    }

    /// Name of the minimum-Y sub-field.
    pub fn min_y(&self) -> &str {
        &self.min_y
    }

    /// Name of the maximum-Y sub-field.
    pub fn max_y(&self) -> &str {
        &self.max_y
    }

    /// Name of the boolean crossing-flag sub-field.
    pub fn crosses_dateline(&self) -> &str {
        &self.xdl
    }

    /// The values the index writes for one document's box.
    pub fn index_value(&self, bbox: &BBox) -> IndexedBBox {
        IndexedBBox {
            min_x: bbox.min_x,
            max_x: bbox.max_x,
            min_y: bbox.min_y,
            max_y: bbox.max_y,
            crosses_dateline: bbox.crosses_dateline(),
        }
    }

    /// Resolve a numeric sub-field name against one document's values.
    pub fn numeric_value(&self, doc: &IndexedBBox, field: &str) -> Option<f64> {
        if field == self.min_x {
            Some(doc.min_x)
        } else if field == self.max_x {
            Some(doc.max_x)
        } else if field == self.min_y {
            Some(doc.min_y)
        } else if field == self.max_y {
            Some(doc.max_y)
        } else {
            None
        }
    }
}

/// One document's stored spatial values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexedBBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub crosses_dateline: bool,
}

impl IndexedBBox {
    /// Reassemble the stored values into a box.
    pub fn to_bbox(&self) -> BBox {
        BBox::new(self.min_x, self.max_x, self.min_y, self.max_y)
    }
}
