//! Typed views over catalog strings.
//!
//! The catalog stores plain `&str` tokens. These types split a token into
//! its parts so callers can reason about families, sizes and region areas.

use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

const DB_PREFIX: &str = "db.";

/// An EC2 instance type such as `m5.large`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceType {
    pub family: String,
    pub size: String,
}

/// An RDS instance class such as `db.m5.large`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DbInstanceType {
    pub family: String,
    pub size: String,
}

/// A region code such as `us-east-1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode {
    pub area: String,
    pub direction: String,
    pub number: u32,
}

fn is_part(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

fn split_family_size(s: &str) -> Option<(&str, &str)> {
    let (family, size) = s.split_once('.')?;
    let family_ok = is_part(family) && family.starts_with(|c: char| c.is_ascii_lowercase());
    if family_ok && is_part(size) {
        Some((family, size))
    } else {
        None
    }
}

impl FromStr for InstanceType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CatalogError::MalformedToken {
            kind: "instance type",
            token: s.to_string(),
        };
        if s.starts_with(DB_PREFIX) {
            return Err(malformed());
        }
        let (family, size) = split_family_size(s).ok_or_else(malformed)?;
        Ok(Self {
            family: family.to_string(),
            size: size.to_string(),
        })
    }
}

impl FromStr for DbInstanceType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CatalogError::MalformedToken {
            kind: "database instance type",
            token: s.to_string(),
        };
        let rest = s.strip_prefix(DB_PREFIX).ok_or_else(malformed)?;
        let (family, size) = split_family_size(rest).ok_or_else(malformed)?;
        Ok(Self {
            family: family.to_string(),
            size: size.to_string(),
        })
    }
}

impl FromStr for RegionCode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CatalogError::MalformedToken {
            kind: "region code",
            token: s.to_string(),
        };

        let mut parts = s.split('-');
        let (Some(area), Some(direction), Some(number), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let letters = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase());
        if area.len() != 2 || !letters(area) || !letters(direction) {
            return Err(malformed());
        }
        // u32::from_str accepts a leading '+', which is not part of a region code
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        let number: u32 = number.parse().map_err(|_| malformed())?;
        if number == 0 {
            return Err(malformed());
        }

        Ok(Self {
            area: area.to_string(),
            direction: direction.to_string(),
            number,
        })
    }
}

impl DbInstanceType {
    /// The EC2 instance type with the same family and size
    pub fn compute_equivalent(&self) -> InstanceType {
        InstanceType {
            family: self.family.clone(),
            size: self.size.clone(),
        }
    }
}

impl InstanceType {
    /// The RDS instance class with the same family and size
    pub fn db_equivalent(&self) -> DbInstanceType {
        DbInstanceType {
            family: self.family.clone(),
            size: self.size.clone(),
        }
    }
}

impl RegionCode {
    /// `area-direction`, e.g. `us-east` for `us-east-1`
    pub fn prefix(&self) -> String {
        format!("{}-{}", self.area, self.direction)
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.family, self.size)
    }
}

impl fmt::Display for DbInstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{}", DB_PREFIX, self.family, self.size)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.area, self.direction, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DB_INSTANCE_TYPES, INSTANCE_TYPES, REGIONS};

    #[test]
    fn test_parse_instance_type() {
        let t: InstanceType = "m5.2xlarge".parse().unwrap();
        assert_eq!(t.family, "m5");
        assert_eq!(t.size, "2xlarge");
        assert_eq!(t.to_string(), "m5.2xlarge");
    }

    #[test]
    fn test_parse_instance_type_rejects_db_prefix() {
        assert!("db.m5.large".parse::<InstanceType>().is_err());
    }

    #[test]
    fn test_parse_instance_type_rejects_bad_shapes() {
        for bad in ["", "m5", "m5.", ".large", "M5.large", "m5.large.x", "5m.large", "m5 .large"] {
            assert!(bad.parse::<InstanceType>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_parse_db_instance_type() {
        let t: DbInstanceType = "db.r4.16xlarge".parse().unwrap();
        assert_eq!(t.family, "r4");
        assert_eq!(t.size, "16xlarge");
        assert_eq!(t.to_string(), "db.r4.16xlarge");
        assert_eq!(t.compute_equivalent().to_string(), "r4.16xlarge");
    }

    #[test]
    fn test_parse_db_instance_type_requires_prefix() {
        let err = "t2.medium".parse::<DbInstanceType>().unwrap_err();
        assert_eq!(
            err,
            CatalogError::MalformedToken {
                kind: "database instance type",
                token: "t2.medium".to_string(),
            }
        );
        assert!("db.".parse::<DbInstanceType>().is_err());
        assert!("db.t2".parse::<DbInstanceType>().is_err());
    }

    #[test]
    fn test_parse_region_code() {
        let r: RegionCode = "ap-southeast-2".parse().unwrap();
        assert_eq!(r.area, "ap");
        assert_eq!(r.direction, "southeast");
        assert_eq!(r.number, 2);
        assert_eq!(r.prefix(), "ap-southeast");
        assert_eq!(r.to_string(), "ap-southeast-2");
    }

    #[test]
    fn test_parse_region_code_rejects_bad_shapes() {
        for bad in [
            "",
            "us-east",
            "us-east-1-a",
            "usa-east-1",
            "us-east-0",
            "us-east-+1",
            "us.east.1",
            "US-EAST-1",
            "us--1",
        ] {
            assert!(bad.parse::<RegionCode>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_every_catalog_entry_parses() {
        for t in INSTANCE_TYPES {
            t.parse::<InstanceType>().unwrap();
        }
        for t in DB_INSTANCE_TYPES {
            t.parse::<DbInstanceType>().unwrap();
        }
        for r in REGIONS {
            r.parse::<RegionCode>().unwrap();
        }
    }

    #[test]
    fn test_db_equivalent() {
        let t: InstanceType = "t3.large".parse().unwrap();
        assert_eq!(t.db_equivalent().to_string(), "db.t3.large");
    }
}
