//! Column layouts of the supported sheet schemas.

use std::str::FromStr;

use crate::validation::Field;

/// Maps logical event fields to cell positions (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date_time: usize,
    pub title: usize,
    pub link: usize,
    pub region: Option<usize>,
    pub sub_region: Option<usize>,
    pub address: usize,
    pub tags: usize,
}

impl ColumnLayout {
    /// `[date, title, link, address, games]`
    pub const fn basic() -> Self {
        Self {
            date_time: 0,
            title: 1,
            link: 2,
            region: None,
            sub_region: None,
            address: 3,
            tags: 4,
        }
    }

    /// `[date, title, link, state, address, games]`
    pub const fn with_sub_region() -> Self {
        Self {
            date_time: 0,
            title: 1,
            link: 2,
            region: None,
            sub_region: Some(3),
            address: 4,
            tags: 5,
        }
    }

    /// `[date, title, link, country, state, address, games]`
    pub const fn with_regions() -> Self {
        Self {
            date_time: 0,
            title: 1,
            link: 2,
            region: Some(3),
            sub_region: Some(4),
            address: 5,
            tags: 6,
        }
    }

    /// Cell position of `field`, if the layout carries it.
    pub fn position(&self, field: Field) -> Option<usize> {
        match field {
            Field::DateTime => Some(self.date_time),
            Field::Title => Some(self.title),
            Field::Link => Some(self.link),
            Field::Region => self.region,
            Field::SubRegion => self.sub_region,
            Field::Address => Some(self.address),
            Field::Tags => Some(self.tags),
        }
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::with_regions()
    }
}

impl FromStr for ColumnLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::basic()),
            "sub-region" | "sub_region" | "states" => Ok(Self::with_sub_region()),
            "regions" | "full" => Ok(Self::with_regions()),
            other => Err(format!("unknown column layout: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let layout = ColumnLayout::with_sub_region();
        assert_eq!(layout.position(Field::Region), None);
        assert_eq!(layout.position(Field::SubRegion), Some(3));
        assert_eq!(layout.position(Field::Tags), Some(5));
    }

    #[test]
    fn test_parse_layout_name() {
        assert_eq!("basic".parse::<ColumnLayout>(), Ok(ColumnLayout::basic()));
        assert_eq!(" Regions ".parse::<ColumnLayout>(), Ok(ColumnLayout::with_regions()));
        assert_eq!("states".parse::<ColumnLayout>(), Ok(ColumnLayout::with_sub_region()));
        assert!("wide".parse::<ColumnLayout>().is_err());
    }
}
