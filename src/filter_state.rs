use marquee_syntax::ContentType;
use serde::{Deserialize, Serialize};

pub type ProviderId = u32;
pub type GenreId = u32;

/// Inclusive endpoints of a release-year window, kept as the year strings
/// the compiler extracted. Absent endpoints leave the window open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Inclusive rating bounds on the catalog's 0-10 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingBounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
}

/// A partial update of the externally-owned [`FilterState`]. Only the
/// fields the reducer wrote are present; everything else stays untouched
/// when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Movie release-date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateRange>,
    /// TV first-air-date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingBounds>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub providers: Vec<ProviderId>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub genres: Vec<GenreId>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub excluded_genres: Vec<GenreId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl FilterPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The date window a year fragment targets under the given context.
    pub(crate) fn date_range_mut(&mut self, content_type: ContentType) -> &mut DateRange {
        let slot = match content_type {
            ContentType::Movie => &mut self.release_date,
            ContentType::Tv => &mut self.first_air_date,
        };
        slot.get_or_insert_with(DateRange::default)
    }

    pub(crate) fn rating_mut(&mut self) -> &mut RatingBounds {
        self.rating.get_or_insert_with(RatingBounds::default)
    }
}

/// The full filter record the editing surface reflects. Owned by the
/// caller; this crate only produces patches for it and knows how to merge
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub content_type: ContentType,
    pub release_date: DateRange,
    pub first_air_date: DateRange,
    pub rating: RatingBounds,
    pub providers: Vec<ProviderId>,
    pub genres: Vec<GenreId>,
    pub excluded_genres: Vec<GenreId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            content_type: ContentType::Movie,
            release_date: DateRange::default(),
            first_air_date: DateRange::default(),
            rating: RatingBounds::default(),
            providers: Vec::new(),
            genres: Vec::new(),
            excluded_genres: Vec::new(),
            region: None,
        }
    }
}

impl FilterState {
    /// Shallow-merges a patch into the state: patch values win for scalars
    /// (whole date/rating windows included), patch lists are unioned into
    /// existing lists preserving order.
    pub fn apply(&mut self, patch: &FilterPatch) {
        if let Some(content_type) = patch.content_type {
            self.content_type = content_type;
        }
        if let Some(range) = &patch.release_date {
            self.release_date = range.clone();
        }
        if let Some(range) = &patch.first_air_date {
            self.first_air_date = range.clone();
        }
        if let Some(rating) = &patch.rating {
            self.rating = rating.clone();
        }
        union_into(&mut self.providers, &patch.providers);
        union_into(&mut self.genres, &patch.genres);
        union_into(&mut self.excluded_genres, &patch.excluded_genres);
        if let Some(region) = &patch.region {
            self.region = Some(region.clone());
        }
    }
}

/// Appends values absent from `existing`, preserving first-seen order.
pub(crate) fn union_into(existing: &mut Vec<u32>, additions: &[u32]) {
    for &value in additions {
        if !existing.contains(&value) {
            existing.push(value);
        }
    }
}
