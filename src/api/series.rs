use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DataPoint, PointSequence};
use crate::error::ChartResult;

use super::listener_registry::ListenerRegistry;

/// Change notification delivered to series listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SeriesChangeEvent {
    PointAdded { index: usize, point: DataPoint },
    PointsReplaced { len: usize },
    Cleared,
}

/// Observer of an [`XySeries`].
///
/// Listeners see the event only; they cannot reach back into the series.
pub trait SeriesChangeListener {
    fn id(&self) -> &str;
    fn series_changed(&mut self, event: &SeriesChangeEvent);
}

/// Ordered (x, y) data feeding a spline renderer.
///
/// Values are stored as given. Non-finite coordinates are reported when a
/// render pass takes its [`XySeries::snapshot`].
#[derive(Debug)]
pub struct XySeries {
    key: String,
    points: Vec<DataPoint>,
    listeners: ListenerRegistry<dyn SeriesChangeListener>,
}

impl XySeries {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            points: Vec::new(),
            listeners: ListenerRegistry::default(),
        }
    }

    #[must_use]
    pub fn with_points(key: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            key: key.into(),
            points,
            listeners: ListenerRegistry::default(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn add(&mut self, point: DataPoint) {
        self.points.push(point);
        let index = self.points.len() - 1;
        trace!(series = %self.key, index, "append series point");
        self.notify(SeriesChangeEvent::PointAdded { index, point });
    }

    /// Appends a time-based sample; `time` becomes unix seconds.
    pub fn add_time(&mut self, time: DateTime<Utc>, y: f64) {
        self.add(DataPoint::from_time(time, y));
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
        let len = self.points.len();
        trace!(series = %self.key, len, "replace series points");
        self.notify(SeriesChangeEvent::PointsReplaced { len });
    }

    pub fn clear(&mut self) {
        if self.points.is_empty() {
            return;
        }
        self.points.clear();
        self.notify(SeriesChangeEvent::Cleared);
    }

    /// Validated copy of the current points for one render pass.
    pub fn snapshot(&self) -> ChartResult<PointSequence> {
        PointSequence::from_slice(&self.points)
    }

    pub fn add_listener(&mut self, listener: Box<dyn SeriesChangeListener>) -> ChartResult<()> {
        let id = listener.id().to_owned();
        self.listeners.add(&id, listener)
    }

    /// Removes a listener by id. Returns `true` when removed.
    pub fn remove_listener(&mut self, listener_id: &str) -> bool {
        self.listeners.remove(listener_id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners.contains(listener_id)
    }

    fn notify(&mut self, event: SeriesChangeEvent) {
        self.listeners
            .for_each_mut(|listener| listener.series_changed(&event));
    }
}
