//! The analog clock layer and its lifecycle.

use bluesky_core::{LocalZone, Palette, Rect, WallTime};
use chrono::{DateTime, SubsecRound, Utc};
use log::{debug, trace, warn};

use crate::error::Result;
use crate::face;
use crate::host::{GraphicsContext, LayerHost, LayerId};

/// Per-layer clock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockState {
    /// The absolute moment to display.
    absolute_time: DateTime<Utc>,
    /// `absolute_time` in the zone that was local when it was set.
    wall_time: WallTime,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            absolute_time: DateTime::<Utc>::UNIX_EPOCH,
            wall_time: WallTime::default(),
        }
    }
}

/// A drawable showing a 24-hour sky clock.
///
/// The layer owns its host drawable from [`create`](Self::create) until
/// [`destroy`](Self::destroy). Until the first [`set_time`](Self::set_time)
/// it shows zeroed wall-clock fields, with the sun at midnight.
#[derive(Debug)]
pub struct AnalogLayer {
    layer: LayerId,
    state: ClockState,
    palette: Palette,
    /// Cleared once the drawable has been handed back to the host.
    live: bool,
}

impl AnalogLayer {
    /// Create a layer at `frame` with the default palette.
    pub fn create<H: LayerHost>(host: &mut H, frame: Rect) -> Result<Self> {
        Self::with_palette(host, frame, Palette::default())
    }

    /// Create a layer at `frame` painted with `palette`.
    ///
    /// On failure nothing has been acquired from the host.
    pub fn with_palette<H: LayerHost>(host: &mut H, frame: Rect, palette: Palette) -> Result<Self> {
        let state = ClockState::default();
        let layer = host.create_layer(frame).inspect_err(|err| {
            warn!("could not create analog layer at {frame:?}: {err}");
        })?;
        debug!("created analog layer {layer} at {frame:?}");
        Ok(Self {
            layer,
            state,
            palette,
            live: true,
        })
    }

    /// Hand the drawable back to the host.
    pub fn destroy<H: LayerHost>(mut self, host: &mut H) {
        self.live = false;
        host.destroy_layer(self.layer);
        debug!("destroyed analog layer {}", self.layer);
    }

    /// Handle of the drawable, for placing it in the host's view tree.
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    pub fn absolute_time(&self) -> DateTime<Utc> {
        self.state.absolute_time
    }

    pub fn wall_time(&self) -> WallTime {
        self.state.wall_time
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the palette and schedule a redraw.
    pub fn set_palette<H: LayerHost>(&mut self, host: &mut H, palette: Palette) {
        self.palette = palette;
        host.mark_dirty(self.layer);
    }

    /// Show `instant`, snapshotting its wall-clock fields in `zone`.
    ///
    /// Later changes to the zone do not affect the snapshot until the next
    /// call. The host redraws at its own pace.
    pub fn set_time<H: LayerHost, Z: LocalZone + ?Sized>(
        &mut self,
        host: &mut H,
        zone: &Z,
        instant: DateTime<Utc>,
    ) {
        let absolute_time = instant.trunc_subsecs(0);
        self.state = ClockState {
            absolute_time,
            wall_time: zone.wall_time(absolute_time),
        };
        trace!(
            "{} set to {absolute_time} ({:02}:{:02} local)",
            self.layer, self.state.wall_time.hour, self.state.wall_time.minute
        );
        host.mark_dirty(self.layer);
    }

    /// Paint the face into `bounds`. Called by the host when it redraws.
    pub fn render<G: GraphicsContext>(&self, bounds: Rect, ctx: &mut G) {
        face::draw(ctx, bounds, &self.state.wall_time, &self.palette);
    }
}

impl Drop for AnalogLayer {
    fn drop(&mut self) {
        if self.live {
            warn!("analog layer {} dropped without destroy", self.layer);
        }
    }
}

#[cfg(test)]
mod tests {
    use bluesky_core::{Angle, Color};
    use chrono::{FixedOffset, TimeDelta};

    use super::*;
    use crate::error::{Error, HostError};
    use crate::testing::{DrawOp, MockHost, RecordingContext};

    /// America/Toronto around the 2016-03-13 spring-forward transition.
    struct Toronto2016;

    /// 2016-03-13 07:00:00 UTC, when 02:00 EST became 03:00 EDT.
    const SPRING_FORWARD: i64 = 1_457_852_400;

    impl LocalZone for Toronto2016 {
        fn wall_time(&self, instant: DateTime<Utc>) -> WallTime {
            let hours_west = if instant.timestamp() < SPRING_FORWARD { 5 } else { 4 };
            let offset = FixedOffset::west_opt(hours_west * 3600).unwrap();
            WallTime::from_datetime(&instant.with_timezone(&offset))
        }
    }

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    #[test]
    fn test_create_acquires_layer_at_frame() {
        let mut host = MockHost::default();
        for frame in [
            Rect::new(0, 0, 144, 168),
            Rect::new(10, 20, 13, 13),
            Rect::new(0, 0, 200, 50),
        ] {
            let layer = AnalogLayer::create(&mut host, frame).unwrap();
            assert_eq!(host.frames.get(&layer.layer()), Some(&frame));
            assert_eq!(
                host.layer_bounds(layer.layer()),
                Some(Rect::new(0, 0, frame.size.w, frame.size.h))
            );
            layer.destroy(&mut host);
        }
        assert_eq!(host.created, 3);
        assert!(host.frames.is_empty());
    }

    #[test]
    fn test_create_failure_acquires_nothing() {
        let mut host = MockHost::failing(HostError::OutOfMemory);
        let err = AnalogLayer::create(&mut host, Rect::new(0, 0, 144, 168)).unwrap_err();
        assert_eq!(err, Error::Host(HostError::OutOfMemory));
        assert_eq!(host.created, 0);
        assert!(host.frames.is_empty());
        assert!(host.destroyed.is_empty());
    }

    #[test]
    fn test_destroy_releases_exactly_once() {
        let mut host = MockHost::default();
        let layer = AnalogLayer::create(&mut host, Rect::new(0, 0, 144, 168)).unwrap();
        let id = layer.layer();
        layer.destroy(&mut host);
        assert_eq!(host.destroyed, vec![id]);
        assert!(host.frames.is_empty());
    }

    #[test]
    fn test_new_layer_has_zeroed_time() {
        let mut host = MockHost::default();
        let layer = AnalogLayer::create(&mut host, Rect::new(0, 0, 60, 60)).unwrap();
        assert_eq!(layer.absolute_time(), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(layer.wall_time(), WallTime::default());
        assert!(host.dirty_marks.is_empty());
        layer.destroy(&mut host);
    }

    #[test]
    fn test_set_time_snapshots_and_marks_dirty() {
        let mut host = MockHost::default();
        let mut layer = AnalogLayer::create(&mut host, Rect::new(0, 0, 60, 60)).unwrap();
        let zone = FixedOffset::east_opt(3600).unwrap();
        let instant = at(1_456_839_930) + TimeDelta::milliseconds(750);

        layer.set_time(&mut host, &zone, instant);

        assert_eq!(layer.absolute_time(), at(1_456_839_930));
        let wall = layer.wall_time();
        assert_eq!((wall.hour, wall.minute, wall.second), (14, 45, 30));
        assert_eq!(wall.utc_offset, 3600);
        assert_eq!(host.dirty_marks, vec![layer.layer()]);
        layer.destroy(&mut host);
    }

    #[test]
    fn test_set_time_same_instant_is_idempotent() {
        let mut host = MockHost::default();
        let mut layer = AnalogLayer::create(&mut host, Rect::new(0, 0, 60, 60)).unwrap();
        layer.set_time(&mut host, &Toronto2016, at(SPRING_FORWARD));
        let first = layer.wall_time();
        layer.set_time(&mut host, &Toronto2016, at(SPRING_FORWARD));
        assert_eq!(layer.wall_time(), first);
        assert_eq!(host.dirty_marks.len(), 2);
        layer.destroy(&mut host);
    }

    #[test]
    fn test_dst_transition_changes_wall_time() {
        let mut host = MockHost::default();
        let mut layer = AnalogLayer::create(&mut host, Rect::new(0, 0, 60, 60)).unwrap();

        // 01:30 EST, then one elapsed hour later 03:30 EDT.
        layer.set_time(&mut host, &Toronto2016, at(SPRING_FORWARD - 1800));
        let before = layer.wall_time();
        layer.set_time(&mut host, &Toronto2016, at(SPRING_FORWARD + 1800));
        let after = layer.wall_time();

        assert_ne!(before, after);
        assert_eq!((before.hour, before.minute), (1, 30));
        assert_eq!((after.hour, after.minute), (3, 30));
        assert_eq!(before.utc_offset, -5 * 3600);
        assert_eq!(after.utc_offset, -4 * 3600);
        layer.destroy(&mut host);
    }

    #[test]
    fn test_snapshot_is_not_recomputed_on_render() {
        let mut host = MockHost::default();
        let mut layer = AnalogLayer::create(&mut host, Rect::new(0, 0, 61, 61)).unwrap();
        layer.set_time(&mut host, &Utc, at(6 * 3600));

        let mut ctx = RecordingContext::default();
        layer.render(Rect::new(0, 0, 61, 61), &mut ctx);
        let orbit = Rect::new(0, 0, 61, 61).trim(5);
        let expected = bluesky_core::point_from_polar(orbit, Angle::from_fraction(3, 4));
        assert!(ctx.ops.iter().any(
            |op| matches!(op, DrawOp::FillCircle { center, .. } if *center == expected)
        ));
        layer.destroy(&mut host);
    }

    #[test]
    fn test_render_follows_new_bounds() {
        let mut host = MockHost::default();
        let layer = AnalogLayer::create(&mut host, Rect::new(0, 0, 60, 60)).unwrap();

        let mut small = RecordingContext::default();
        layer.render(Rect::new(0, 0, 60, 60), &mut small);
        let mut large = RecordingContext::default();
        layer.render(Rect::new(0, 0, 120, 120), &mut large);

        let inset = |ctx: &RecordingContext| match ctx.ops[1] {
            DrawOp::FillRadial { inset, .. } => inset,
            ref other => panic!("expected sky band, got {other:?}"),
        };
        assert_eq!(inset(&small), 10 / 3);
        assert_eq!(inset(&large), 20 / 3);
        layer.destroy(&mut host);
    }

    #[test]
    fn test_set_palette_recolors_and_marks_dirty() {
        let mut host = MockHost::default();
        let mut layer = AnalogLayer::create(&mut host, Rect::new(0, 0, 60, 60)).unwrap();
        let palette = Palette {
            sun_fill: Color::Rgb(0xFF, 0x88, 0x00),
            ..Default::default()
        };
        layer.set_palette(&mut host, palette.clone());
        assert_eq!(layer.palette(), &palette);
        assert_eq!(host.dirty_marks.len(), 1);

        let mut ctx = RecordingContext::default();
        layer.render(Rect::new(0, 0, 60, 60), &mut ctx);
        assert!(ctx.ops.iter().any(|op| matches!(
            op,
            DrawOp::FillCircle { color, .. } if *color == Color::Rgb(0xFF, 0x88, 0x00)
        )));
        layer.destroy(&mut host);
    }
}
