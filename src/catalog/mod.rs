//! Static AWS catalog: EC2 instance types, RDS instance classes and regions.
//!
//! The lists are compile-time constants. Nothing here mutates them or checks
//! membership; that is left to [`crate::lookup`].

mod instances;
mod regions;
pub mod token;

pub use instances::{DB_INSTANCE_TYPES, INSTANCE_TYPES};
pub use regions::{region_name, REGIONS};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(list: &[&str]) {
        let set: HashSet<_> = list.iter().collect();
        assert_eq!(set.len(), list.len());
    }

    #[test]
    fn test_lists_have_no_duplicates() {
        assert_unique(INSTANCE_TYPES);
        assert_unique(DB_INSTANCE_TYPES);
        assert_unique(REGIONS);
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(INSTANCE_TYPES.len(), 90);
        assert_eq!(DB_INSTANCE_TYPES.len(), 32);
        assert_eq!(REGIONS.len(), 16);
    }

    #[test]
    fn test_lists_are_disjoint() {
        let compute: HashSet<_> = INSTANCE_TYPES.iter().collect();
        let db: HashSet<_> = DB_INSTANCE_TYPES.iter().collect();
        let regions: HashSet<_> = REGIONS.iter().collect();
        assert!(compute.is_disjoint(&db));
        assert!(compute.is_disjoint(&regions));
        assert!(db.is_disjoint(&regions));
    }

    #[test]
    fn test_every_db_class_has_a_compute_counterpart() {
        for db in DB_INSTANCE_TYPES {
            let compute = db.strip_prefix("db.").unwrap();
            assert!(
                INSTANCE_TYPES.contains(&compute),
                "{} has no compute counterpart",
                db
            );
        }
    }
}
