//! Field domain definitions for the five cron time fields.

/// The legal numeric domain of one cron time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Display name, as it appears in error messages and the report.
    pub name: &'static str,
    /// Smallest legal value.
    pub min: u32,
    /// Largest legal value.
    pub max: u32,
}

impl FieldSpec {
    pub const MINUTE: FieldSpec = FieldSpec::new("minute", 0, 59);
    pub const HOUR: FieldSpec = FieldSpec::new("hour", 0, 23);
    pub const DAY_OF_MONTH: FieldSpec = FieldSpec::new("day of month", 1, 31);
    pub const MONTH: FieldSpec = FieldSpec::new("month", 1, 12);
    pub const DAY_OF_WEEK: FieldSpec = FieldSpec::new("day of week", 0, 6);

    /// The five time fields in expression order.
    pub const ALL: [FieldSpec; 5] = [
        FieldSpec::MINUTE,
        FieldSpec::HOUR,
        FieldSpec::DAY_OF_MONTH,
        FieldSpec::MONTH,
        FieldSpec::DAY_OF_WEEK,
    ];

    const fn new(name: &'static str, min: u32, max: u32) -> Self {
        Self { name, min, max }
    }

    /// Whether `value` lies inside this field's domain.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_are_well_formed() {
        for field in FieldSpec::ALL {
            assert!(field.min <= field.max, "bad domain for {}", field.name);
        }
    }

    #[test]
    fn test_field_order() {
        let names: Vec<&str> = FieldSpec::ALL.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["minute", "hour", "day of month", "month", "day of week"]
        );
    }

    #[test]
    fn test_contains() {
        assert!(FieldSpec::MINUTE.contains(0));
        assert!(FieldSpec::MINUTE.contains(59));
        assert!(!FieldSpec::MINUTE.contains(60));
        assert!(!FieldSpec::DAY_OF_MONTH.contains(0));
    }
}
