use crate::FilterPatch;
use marquee_syntax::{ContentType, Fragment, FragmentValue};
use tracing::debug;

/// Folds confirmed fragments, in list order, into one filter-state patch.
///
/// A pure fold: the same fragment list under the same content-type context
/// always produces the same patch. Scalars are last-write-wins, date and
/// rating windows merge per endpoint, list fields are additive with
/// duplicates removed. The `current_content_type` context decides whether
/// year fragments target the movie release-date window or the TV
/// first-air-date window.
pub fn reduce(fragments: &[Fragment], current_content_type: ContentType) -> FilterPatch {
    let mut patch = FilterPatch::default();
    for fragment in fragments {
        match &fragment.value {
            FragmentValue::ContentType(content_type) => {
                patch.content_type = Some(*content_type);
            }
            FragmentValue::YearExact { year } => {
                let range = patch.date_range_mut(current_content_type);
                range.start = Some(year.clone());
                range.end = Some(year.clone());
            }
            FragmentValue::YearRange { start, end } => {
                let range = patch.date_range_mut(current_content_type);
                range.start = Some(start.clone());
                range.end = Some(end.clone());
            }
            FragmentValue::YearFrom { start } => {
                patch.date_range_mut(current_content_type).start = Some(start.clone());
            }
            FragmentValue::YearTo { end } => {
                patch.date_range_mut(current_content_type).end = Some(end.clone());
            }
            FragmentValue::RatingMin { min } | FragmentValue::RatingFloor { min } => {
                patch.rating_mut().min = Some(*min);
            }
            FragmentValue::RatingMax { max } => {
                patch.rating_mut().max = Some(*max);
            }
            FragmentValue::RatingRange { min, max } => {
                let rating = patch.rating_mut();
                rating.min = Some(*min);
                rating.max = Some(*max);
            }
            FragmentValue::Provider { id, .. } => {
                if !patch.providers.contains(id) {
                    patch.providers.push(*id);
                }
            }
            FragmentValue::Genre { id } => {
                if !patch.genres.contains(id) {
                    patch.genres.push(*id);
                }
            }
            FragmentValue::Country { code } => {
                patch.region = Some((*code).to_string());
            }
        }
    }
    debug!(
        fragments = fragments.len(),
        "reduced fragments into filter patch"
    );
    patch
}
