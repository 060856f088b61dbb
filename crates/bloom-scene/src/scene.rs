//! The scene: one mode, one gesture pipeline, many layers

use crate::config::SceneConfig;
use crate::controller::GestureController;
use crate::layer::FormationLayer;
use crate::photos::PhotoLayer;
use bloom_core::{Result, Vec3};
use bloom_gesture::{GestureFrame, GestureSample, GestureSession, GestureSource};
use bloom_particles::{FrameUniforms, ParticleInstance};
use bloom_runtime::{
    FrameClock, FrameContext, Mode, ModeCell, ModeEvent, ModeEventBus, ModeReader, RuntimeSystem,
    TransitionSource,
};

/// One layer's output for a frame
pub struct LayerFrame<'a> {
    pub name: &'a str,
    /// Blended `xyz` triples
    pub positions: &'a [f32],
    pub instances: &'a [ParticleInstance],
    pub progress: f32,
    pub eased_progress: f32,
}

/// Everything the renderer needs after [`Scene::frame`]
pub struct FrameOutput<'a> {
    pub mode: Mode,
    pub uniforms: FrameUniforms,
    pub layers: Vec<LayerFrame<'a>>,
    pub photos: &'a [Vec3],
    /// Classification of the most recent gesture frame, palm center included
    pub gesture: GestureSample,
}

impl FrameOutput<'_> {
    pub fn layer(&self, name: &str) -> Option<&LayerFrame<'_>> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Packed instance data for `name`, ready for upload
    pub fn instances(&self, name: &str) -> Option<&[ParticleInstance]> {
        self.layer(name).map(|l| l.instances)
    }
}

pub struct Scene {
    mode: ModeCell,
    events: ModeEventBus,
    controller: GestureController,
    layers: Vec<FormationLayer>,
    photos: PhotoLayer,
    clock: FrameClock,
    frame_count: u64,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let initial = config.initial_mode;

        let mut layers = vec![
            FormationLayer::new("foliage", config.foliage, initial),
            FormationLayer::new("petals", config.petals, initial),
        ];
        for layer in &mut layers {
            layer.initialize()?;
        }
        let mut photos = PhotoLayer::new(config.photos, initial);
        photos.initialize()?;

        log::info!("scene ready, initial mode {initial}");

        Ok(Self {
            mode: ModeCell::new(initial),
            events: ModeEventBus::new(),
            controller: GestureController::new(&config.gesture, initial),
            layers,
            photos,
            clock: FrameClock::new(),
            frame_count: 0,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    /// Read-only handle for code outside the scene (camera rig, UI).
    /// Writes go through [`Scene::set_mode`].
    pub fn mode_handle(&self) -> ModeReader {
        self.mode.reader()
    }

    /// Called exactly once per actual transition, whatever caused it
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(ModeEvent) + 'static,
    {
        self.events.subscribe(listener);
    }

    /// Transitions since the last drain
    pub fn drain_events(&mut self) -> Vec<ModeEvent> {
        self.events.drain()
    }

    /// External override, e.g. a UI toggle. Returns true if the mode changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        self.controller.sync_external(mode);
        self.commit(mode, TransitionSource::External)
    }

    fn commit(&mut self, mode: Mode, source: TransitionSource) -> bool {
        let changed = self.mode.set(mode);
        if changed {
            self.events.publish(ModeEvent { mode, source });
        }
        changed
    }

    /// Feed one completed inference frame
    pub fn push_gesture(&mut self, frame: &GestureFrame) -> Option<Mode> {
        let committed = self.controller.push(frame)?;
        self.commit(committed, TransitionSource::Gesture)
            .then_some(committed)
    }

    /// Advance every layer one frame and return what to draw.
    pub fn frame(&mut self, elapsed: f32, delta: f32) -> Result<FrameOutput<'_>> {
        let ctx = FrameContext {
            elapsed,
            delta,
            mode: self.mode.get(),
        };
        for layer in &mut self.layers {
            layer.update(&ctx)?;
        }
        self.photos.update(&ctx)?;
        self.frame_count += 1;

        let lead = self
            .layers
            .first()
            .map(|l| l.eased_progress())
            .unwrap_or_else(|| ctx.mode.target_value());

        Ok(FrameOutput {
            mode: ctx.mode,
            uniforms: FrameUniforms {
                elapsed,
                delta,
                progress: lead,
                mode: ctx.mode.target_value(),
            },
            layers: self
                .layers
                .iter()
                .map(|l| LayerFrame {
                    name: l.name(),
                    positions: l.positions(),
                    instances: l.instances(),
                    progress: l.progress(),
                    eased_progress: l.eased_progress(),
                })
                .collect(),
            photos: self.photos.positions(),
            gesture: self.controller.last_sample(),
        })
    }

    /// Advance the internal clock by `dt` and run one frame
    pub fn step(&mut self, dt: f64) -> Result<FrameOutput<'_>> {
        self.clock.advance(dt);
        let elapsed = self.clock.total_time as f32;
        let delta = self.clock.delta_time as f32;
        self.frame(elapsed, delta)
    }

    /// One frame driven by a gesture session: poll (at most one frame), then step.
    /// An unavailable or busy session leaves the mode as it was.
    pub fn step_with_session<S: GestureSource>(
        &mut self,
        session: &mut GestureSession<S>,
        dt: f64,
    ) -> Result<FrameOutput<'_>> {
        if let Some(frame) = session.poll() {
            self.push_gesture(&frame);
        }
        self.step(dt)
    }

    pub fn layer(&self, name: &str) -> Option<&FormationLayer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    pub fn photos(&self) -> &PhotoLayer {
        &self.photos
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.total_time
    }

    /// Shut down every layer
    pub fn shutdown(&mut self) -> Result<()> {
        for layer in &mut self.layers {
            layer.shutdown()?;
        }
        self.photos.shutdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayerConfig;
    use bloom_gesture::{ScriptStep, ScriptedPose, ScriptedSource};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn small_config() -> SceneConfig {
        SceneConfig {
            foliage: LayerConfig {
                count: 100,
                ..LayerConfig::foliage()
            },
            petals: LayerConfig {
                count: 20,
                ..LayerConfig::petals()
            },
            ..Default::default()
        }
    }

    fn recorded(scene: &mut Scene) -> Rc<RefCell<Vec<ModeEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        scene.subscribe(move |e| sink.borrow_mut().push(e));
        seen
    }

    #[test]
    fn chaos_then_formed_end_to_end() {
        let mut scene = Scene::new(small_config()).unwrap();
        {
            let foliage = scene.layer("foliage").unwrap();
            for i in 0..100 {
                let p = Vec3::new(
                    foliage.positions()[i * 3],
                    foliage.positions()[i * 3 + 1],
                    foliage.positions()[i * 3 + 2],
                );
                assert_eq!(p, foliage.set().chaos(i));
            }
        }

        assert!(scene.set_mode(Mode::Formed));
        for _ in 0..600 {
            scene.step(1.0 / 60.0).unwrap();
        }

        let foliage = scene.layer("foliage").unwrap();
        assert!(foliage.progress() > 0.99);
        for i in 0..100 {
            let p = Vec3::new(
                foliage.positions()[i * 3],
                foliage.positions()[i * 3 + 1],
                foliage.positions()[i * 3 + 2],
            );
            assert!(p.distance(&foliage.set().target(i)) < 1e-3);
        }
    }

    #[test]
    fn frame_output_reports_layers() {
        let mut scene = Scene::new(small_config()).unwrap();
        let out = scene.frame(0.0, 1.0 / 60.0).unwrap();
        assert_eq!(out.mode, Mode::Chaos);
        assert_eq!(out.layers.len(), 2);
        assert_eq!(out.layer("petals").unwrap().positions.len(), 60);
        assert_eq!(out.photos.len(), 12);
        assert_eq!(out.uniforms.mode, 0.0);
        assert_eq!(out.instances("foliage").map(|i| i.len()), Some(100));
        assert!(out.instances("trunk").is_none());
    }

    #[test]
    fn gesture_commit_emits_exactly_one_event() {
        let mut scene = Scene::new(small_config()).unwrap();
        let seen = recorded(&mut scene);
        let mut session = GestureSession::open(ScriptedSource::new(&[ScriptStep::pose(
            ScriptedPose::Closed,
            60,
        )]));
        for _ in 0..60 {
            scene.step_with_session(&mut session, 1.0 / 60.0).unwrap();
        }
        assert_eq!(scene.mode(), Mode::Formed);
        let events = seen.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, TransitionSource::Gesture);
    }

    #[test]
    fn external_override_is_not_undone_by_held_pose() {
        let mut scene = Scene::new(small_config()).unwrap();
        let seen = recorded(&mut scene);
        let closed = ScriptedSource::new(&[ScriptStep::pose(ScriptedPose::Closed, 10)]);
        let mut session = GestureSession::open(closed);
        for _ in 0..10 {
            scene.step_with_session(&mut session, 1.0 / 60.0).unwrap();
        }
        assert_eq!(scene.mode(), Mode::Formed);

        // Manual toggle back to chaos; continuing to hold the fist after the
        // override must not snap straight back.
        assert!(scene.set_mode(Mode::Chaos));
        let fist = GestureFrame::Hand(
            (0..21)
                .map(|i| {
                    bloom_gesture::HandLandmarks::synthetic(
                        [false; 5],
                        bloom_core::Vec2::new(0.5, 0.8),
                    )
                    .point(i)
                    .to_array()
                })
                .collect(),
        );
        for _ in 0..3 {
            assert_eq!(scene.push_gesture(&fist), None);
        }
        assert_eq!(scene.mode(), Mode::Chaos);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn set_mode_is_idempotent() {
        let mut scene = Scene::new(small_config()).unwrap();
        let seen = recorded(&mut scene);
        assert!(!scene.set_mode(Mode::Chaos));
        assert!(scene.set_mode(Mode::Formed));
        assert!(!scene.set_mode(Mode::Formed));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(scene.drain_events().len(), 1);
    }

    #[test]
    fn unavailable_gesture_source_keeps_scene_running() {
        let mut scene = Scene::new(small_config()).unwrap();
        let mut session = GestureSession::open(ScriptedSource::failing("no camera"));
        for _ in 0..5 {
            scene.step_with_session(&mut session, 1.0 / 60.0).unwrap();
        }
        assert_eq!(scene.mode(), Mode::Chaos);
        assert!(scene.set_mode(Mode::Formed));
        assert_eq!(scene.frame_count(), 5);
    }

    #[test]
    fn pending_inference_keeps_previous_mode() {
        let mut scene = Scene::new(small_config()).unwrap();
        scene.set_mode(Mode::Formed);
        let mut session = GestureSession::open(ScriptedSource::new(&[ScriptStep::pose(
            ScriptedPose::Pending,
            30,
        )]));
        for _ in 0..30 {
            let out = scene.step_with_session(&mut session, 1.0 / 60.0).unwrap();
            assert_eq!(out.mode, Mode::Formed);
        }
    }

    #[test]
    fn mode_handle_observes_commits() {
        let mut scene = Scene::new(small_config()).unwrap();
        let handle = scene.mode_handle();
        scene.set_mode(Mode::Formed);
        assert_eq!(handle.get(), Mode::Formed);
    }

    #[test]
    fn mode_changes_only_through_the_scene() {
        let mut scene = Scene::new(small_config()).unwrap();
        let seen = recorded(&mut scene);
        let handle: ModeReader = scene.mode_handle();

        // The handle is read-only, so every observed change comes with an
        // event and a synced debouncer.
        assert!(scene.set_mode(Mode::Formed));
        assert_eq!(handle.get(), Mode::Formed);
        assert_eq!(seen.borrow().len(), 1);

        let mut session = GestureSession::open(ScriptedSource::new(&[ScriptStep::pose(
            ScriptedPose::Closed,
            20,
        )]));
        for _ in 0..20 {
            scene.step_with_session(&mut session, 1.0 / 60.0).unwrap();
        }
        assert_eq!(handle.get(), Mode::Formed);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn frame_output_carries_last_gesture() {
        let mut scene = Scene::new(small_config()).unwrap();
        let out = scene.frame(0.0, 1.0 / 60.0).unwrap();
        assert_eq!(out.gesture.kind, bloom_gesture::GestureKind::None);
        assert!(out.gesture.palm.is_none());

        let mut session = GestureSession::open(ScriptedSource::new(&[ScriptStep::pose(
            ScriptedPose::Open,
            1,
        )]));
        let out = scene.step_with_session(&mut session, 1.0 / 60.0).unwrap();
        assert_eq!(out.gesture.kind, bloom_gesture::GestureKind::Open);
        let palm = out.gesture.palm.unwrap();
        assert!((0.0..=1.0).contains(&palm.x) && (0.0..=1.0).contains(&palm.y));
    }
}
