use super::domain::{CapabilityTier, Tag, TagSet};

/// Floor construction alone decides the tier; slab wins over crawlspace, anything else is C.
pub fn classify_tier(tags: &TagSet) -> CapabilityTier {
    if tags.contains(&Tag::FloorSlab) {
        CapabilityTier::A
    } else if tags.contains(&Tag::FloorCrawlspace) {
        CapabilityTier::B
    } else {
        CapabilityTier::C
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[Tag]) -> TagSet {
        items.iter().copied().collect()
    }

    #[test]
    fn slab_is_tier_a() {
        assert_eq!(classify_tier(&tags(&[Tag::FloorSlab])), CapabilityTier::A);
    }

    #[test]
    fn crawlspace_is_tier_b() {
        assert_eq!(
            classify_tier(&tags(&[Tag::FloorWood, Tag::FloorCrawlspace])),
            CapabilityTier::B
        );
    }

    #[test]
    fn living_space_and_missing_floor_default_to_tier_c() {
        assert_eq!(
            classify_tier(&tags(&[Tag::FloorWood, Tag::FloorLivingBelow])),
            CapabilityTier::C
        );
        assert_eq!(classify_tier(&TagSet::new()), CapabilityTier::C);
    }

    #[test]
    fn slab_takes_precedence_over_crawlspace() {
        assert_eq!(
            classify_tier(&tags(&[Tag::FloorCrawlspace, Tag::FloorSlab])),
            CapabilityTier::A
        );
    }

    #[test]
    fn other_tags_never_change_the_tier() {
        let noisy = tags(&[
            Tag::FloorCrawlspace,
            Tag::SharedBuilding,
            Tag::SourceDrums,
            Tag::TimeOvernight,
            Tag::BudgetLow,
        ]);
        assert_eq!(classify_tier(&noisy), CapabilityTier::B);
    }
}
