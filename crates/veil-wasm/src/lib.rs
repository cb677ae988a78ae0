use wasm_bindgen::prelude::*;

use veil_core::config::EngineConfig;
use veil_core::engine::Engine;
use veil_core::shapes::ShapeId;

/// Engine wrapper owning the GPU-visible flat position buffer.
///
/// The page constructs one of these before the first frame, feeds it
/// pointer samples and scroll triggers, and calls [`ParticleField::tick`]
/// from its frame callback. Positions are read zero-copy through
/// [`ParticleField::positions_ptr`].
#[wasm_bindgen]
pub struct ParticleField {
    engine: Engine,
    gpu_positions: Vec<f32>,
}

#[wasm_bindgen]
impl ParticleField {
    /// `initial_shape` takes the page-facing names ("globe-small",
    /// "helix", ..); unknown names fall back to the default sphere.
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: usize, initial_shape: &str) -> ParticleField {
        web_sys::console::log_1(
            &format!(
                "ParticleField created: {} particles, shape '{}'",
                particle_count, initial_shape
            )
            .into(),
        );

        let config = EngineConfig {
            particle_count,
            ..EngineConfig::default()
        };
        let engine = Engine::new(ShapeId::parse(initial_shape), config);

        let mut field = ParticleField {
            engine,
            gpu_positions: vec![0.0; particle_count * 3],
        };
        field.write_gpu_output();
        field
    }

    /// One frame of work. Returns elapsed milliseconds for the perf HUD.
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        self.engine.tick(dt);
        if self.engine.take_dirty() {
            self.write_gpu_output();
        }
        (js_sys::Date::now() - start) as f32
    }

    /// Latest pointer sample in normalized device coordinates, from the
    /// page's pointer-move listener.
    #[wasm_bindgen]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.engine.set_pointer(x, y);
    }

    /// Scroll-trigger entry point addressing shapes by name.
    #[wasm_bindgen]
    pub fn trigger_morph(&mut self, shape: &str) {
        self.engine.trigger_morph(ShapeId::parse(shape));
    }

    /// Scroll-trigger entry point addressing shapes by page section
    /// ("hero", "about", ..). Sections that don't drive the field are
    /// ignored.
    #[wasm_bindgen]
    pub fn trigger_section(&mut self, section: &str) {
        if let Some(shape) = ShapeId::for_section(section) {
            self.engine.trigger_morph(shape);
        }
    }

    /// Viewport resize hook.
    #[wasm_bindgen]
    pub fn set_aspect(&mut self, aspect: f32) {
        self.engine.camera.aspect = aspect;
    }

    /// Reposition the eye; the pointer ray follows from here on.
    #[wasm_bindgen]
    pub fn set_camera_position(&mut self, x: f32, y: f32, z: f32) {
        self.engine.camera.position = glam::Vec3::new(x, y, z);
    }

    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.gpu_positions.as_ptr()
    }

    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.gpu_positions.len()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.engine.particles.count
    }

    /// Ambient model rotation for the renderer to apply around Y.
    #[wasm_bindgen]
    pub fn rotation_y(&self) -> f32 {
        self.engine.rotation_y()
    }

    #[wasm_bindgen]
    pub fn current_shape(&self) -> String {
        self.engine.current_shape().name().to_string()
    }

    #[wasm_bindgen]
    pub fn is_morphing(&self) -> bool {
        self.engine.is_morphing()
    }
}

impl ParticleField {
    fn write_gpu_output(&mut self) {
        self.gpu_positions
            .copy_from_slice(self.engine.positions_flat());
    }
}
