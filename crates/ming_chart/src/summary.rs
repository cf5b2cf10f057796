//! Ranking all nine palaces of a moment by normalized score.

use serde::Serialize;
use tracing::debug;

use ming_base::{Palace, Star, Topic};
use ming_time::CivilDateTime;

use crate::qmdj::generate;
use crate::qmdj_types::{QmdjChart, QmdjConfig};
use crate::scoring::{Verdict, palace_score};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalaceSummary {
    pub palace: Palace,
    pub topic: Topic,
    pub score: f64,
    pub verdict: Verdict,
    /// Friendly door name, `"Center"` for the placeholder slot.
    pub door: &'static str,
    pub star: Star,
}

/// Summaries of all nine palaces, best first. Equal scores keep palace order.
pub fn summarize_chart(chart: &QmdjChart) -> Vec<PalaceSummary> {
    let mut out: Vec<PalaceSummary> = chart
        .slots()
        .map(|slot| {
            let score = palace_score(slot);
            PalaceSummary {
                palace: slot.palace,
                topic: slot.palace.topic(),
                score,
                verdict: Verdict::from_score(score),
                door: slot.door.map_or("Center", |d| d.friendly_name()),
                star: slot.star,
            }
        })
        .collect();
    // sort_by is stable.
    out.sort_by(|a, b| b.score.total_cmp(&a.score));
    out
}

/// Generate the chart for a moment and rank its palaces.
pub fn summarize_all(moment: &CivilDateTime, config: &QmdjConfig) -> Vec<PalaceSummary> {
    let chart = generate(moment, config);
    let out = summarize_chart(&chart);
    if let Some(best) = out.first() {
        debug!(
            %moment,
            best = best.palace.number(),
            score = best.score,
            "palaces ranked"
        );
    }
    out
}
