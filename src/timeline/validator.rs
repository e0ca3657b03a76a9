use std::collections::{BTreeMap, HashSet};

use crate::foundation::core::Lane;
use crate::foundation::error::{CutlineError, CutlineResult};
use crate::time::range::TimeRange;
use crate::time::value::{Duration, TimeValue};
use crate::timeline::element::{ElementKind, TimelineElement};

/// Strictness knobs for one timeline, supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Largest accepted `|lane|`; at most [`Lane::ABSOLUTE_LIMIT`].
    pub max_lanes: u32,
    /// Accept positive lanes with holes (e.g. `{1, 3}`).
    pub allow_gaps: bool,
    /// Accept same-lane overlap.
    pub allow_overlaps: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            max_lanes: Lane::DISPLAY_LIMIT.unsigned_abs(),
            allow_gaps: false,
            allow_overlaps: false,
        }
    }
}

impl TimelineConfig {
    /// Reject a lane bound past the absolute ceiling.
    pub fn validate(&self) -> CutlineResult<()> {
        if self.max_lanes > Lane::ABSOLUTE_LIMIT.unsigned_abs() {
            return Err(CutlineError::range(
                "timeline.max_lanes",
                format!(
                    "{} exceeds the absolute lane limit {}",
                    self.max_lanes,
                    Lane::ABSOLUTE_LIMIT
                ),
            ));
        }
        Ok(())
    }
}

/// Placement rules for one sequence: containment in `[0, total)`, lane bounds, contiguous
/// positive lanes and same-lane non-overlap.
///
/// Containment and lane bounds are enforced per element on [`TimelineValidator::add`]; the
/// whole-timeline rules run in [`TimelineValidator::validate_complete`].
#[derive(Clone, Debug)]
pub struct TimelineValidator {
    total: Duration,
    config: TimelineConfig,
    elements: Vec<TimelineElement>,
    by_lane: BTreeMap<Lane, Vec<usize>>,
    ids: HashSet<String>,
}

impl TimelineValidator {
    /// Validator for a timeline of length `total`.
    pub fn new(total: Duration, config: TimelineConfig) -> CutlineResult<Self> {
        config.validate()?;
        if total.is_zero() {
            return Err(CutlineError::construction(
                "timeline.duration",
                "timeline duration must be > 0s",
            ));
        }
        Ok(Self {
            total,
            config,
            elements: Vec::new(),
            by_lane: BTreeMap::new(),
            ids: HashSet::new(),
        })
    }

    /// Build and record an element.
    pub fn add_element(
        &mut self,
        id: impl Into<String>,
        offset: TimeValue,
        duration: Duration,
        lane: Lane,
        kind: ElementKind,
    ) -> CutlineResult<&TimelineElement> {
        let element = TimelineElement::new(id, offset, duration, lane, kind)?;
        self.add(element)
    }

    /// Record a prebuilt element after the per-element checks.
    pub fn add(&mut self, element: TimelineElement) -> CutlineResult<&TimelineElement> {
        let range = element.range;
        let bounds = TimeRange::from_zero(self.total);
        if range.duration().is_zero() {
            return Err(CutlineError::timeline(
                &element.id,
                "element duration must be > 0s",
            ));
        }
        if !bounds.contains_range(range) {
            return Err(CutlineError::timeline(
                &element.id,
                format!(
                    "range {range} ends at {} which is outside the timeline {bounds}",
                    range.end()
                ),
            ));
        }
        if element.lane.magnitude() > self.config.max_lanes {
            return Err(CutlineError::timeline(
                &element.id,
                format!(
                    "lane {} exceeds the limit of {} lanes",
                    element.lane, self.config.max_lanes
                ),
            ));
        }
        if self.ids.contains(&element.id) {
            return Err(CutlineError::timeline(
                &element.id,
                "element id is already used in this timeline",
            ));
        }

        let idx = self.elements.len();
        self.ids.insert(element.id.clone());
        self.by_lane.entry(element.lane).or_default().push(idx);
        tracing::trace!(id = %element.id, lane = %element.lane, %range, "added element");
        self.elements.push(element);
        Ok(&self.elements[idx])
    }

    /// Positive lanes in use must be `1..=max` without holes, unless gaps are allowed.
    /// Lane 0 and negative lanes are outside this rule.
    pub fn validate_lane_structure(&self) -> CutlineResult<()> {
        if self.config.allow_gaps {
            return Ok(());
        }
        let used: Vec<i32> = self
            .by_lane
            .keys()
            .map(|l| l.get())
            .filter(|&l| l > 0)
            .collect();
        let Some(&max) = used.last() else {
            return Ok(());
        };
        // `used` is sorted and distinct, so a hole shows up as the first index mismatch.
        for (expected, &lane) in (1..=max).zip(used.iter()) {
            if expected != lane {
                return Err(missing_lane(expected, max));
            }
        }
        Ok(())
    }

    /// No two elements on the same lane may intersect. Touching end-to-start is fine.
    pub fn validate_overlaps(&self) -> CutlineResult<()> {
        for (lane, idxs) in &self.by_lane {
            let mut sorted: Vec<&TimelineElement> =
                idxs.iter().map(|&i| &self.elements[i]).collect();
            sorted.sort_by_key(|e| (e.range.start(), e.range.end()));
            for pair in sorted.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a.range.overlaps(b.range) {
                    return Err(CutlineError::timeline(
                        &b.id,
                        format!(
                            "{} overlaps '{}' {} on lane {lane}",
                            b.range, a.id, a.range
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Lane structure always; overlaps unless the config allows them.
    #[tracing::instrument(skip(self), fields(elements = self.elements.len()))]
    pub fn validate_complete(&self) -> CutlineResult<()> {
        self.validate_lane_structure()?;
        if !self.config.allow_overlaps {
            self.validate_overlaps()?;
        }
        Ok(())
    }

    /// Elements intersecting `range`, in start order. An empty `range` selects the elements
    /// covering that instant.
    pub fn elements_in_range(&self, range: TimeRange) -> Vec<&TimelineElement> {
        let mut hits: Vec<&TimelineElement> = self
            .elements
            .iter()
            .filter(|e| e.range.intersects(range))
            .collect();
        hits.sort_by_key(|e| (e.range.start(), e.lane));
        hits
    }

    /// Elements on `lane`, in start order.
    pub fn elements_in_lane(&self, lane: Lane) -> Vec<&TimelineElement> {
        let mut hits: Vec<&TimelineElement> = self
            .by_lane
            .get(&lane)
            .map(|idxs| idxs.iter().map(|&i| &self.elements[i]).collect())
            .unwrap_or_default();
        hits.sort_by_key(|e| e.range.start());
        hits
    }

    /// Element by id.
    pub fn get(&self, id: &str) -> Option<&TimelineElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// All elements in insertion order.
    pub fn elements(&self) -> &[TimelineElement] {
        &self.elements
    }

    /// Lanes in use, ascending.
    pub fn lanes(&self) -> impl Iterator<Item = Lane> + '_ {
        self.by_lane.keys().copied()
    }

    /// Timeline length.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Active configuration.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Element count.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn missing_lane(lane: i32, max: i32) -> CutlineError {
    CutlineError::timeline(
        format!("lane {lane}"),
        format!("lane {lane} is missing; lanes 1..={max} must all be used"),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/validator.rs"]
mod tests;
