//! Core type definitions for the catalog hierarchy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a department (level 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct DepartmentId(pub u32);

impl DepartmentId {
    pub fn new(id: u32) -> Self {
        DepartmentId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DepartmentId {
    fn from(id: u32) -> Self {
        DepartmentId(id)
    }
}

/// Unique identifier for a category (level 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct CategoryId(pub u32);

impl CategoryId {
    pub fn new(id: u32) -> Self {
        CategoryId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        CategoryId(id)
    }
}

/// Unique identifier for a subcategory (level 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct SubcategoryId(pub u32);

impl SubcategoryId {
    pub fn new(id: u32) -> Self {
        SubcategoryId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SubcategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SubcategoryId {
    fn from(id: u32) -> Self {
        SubcategoryId(id)
    }
}

/// Unique identifier for a product (level 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        ProductId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

/// Per-product quality classification.
///
/// The same domain is used for the per-period observations in
/// `TemporalQualityRecord`, so a product's classification can be tracked
/// as it changes over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Good,
    Neutral,
    Poor,
}

impl Quality {
    /// All labels, in display order.
    pub const ALL: [Quality; 3] = [Quality::Good, Quality::Neutral, Quality::Poor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Good => "good",
            Quality::Neutral => "neutral",
            Quality::Poor => "poor",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review status of a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Approved,
    Recommended,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Approved => "approved",
            Status::Recommended => "recommended",
            Status::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four levels of the catalog hierarchy, parent-to-child order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Department,
    Category,
    Subcategory,
    Product,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Department => "department",
            Level::Category => "category",
            Level::Subcategory => "subcategory",
            Level::Product => "product",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
