pub struct EngineConfig {
    /// Number of simulated particles. Fixed for the engine's lifetime.
    pub particle_count: usize,
    /// Squared radius of the repulsion tube around the pointer ray.
    pub influence_radius_sq: f32,
    pub repel_strength: f32,
    pub spring_stiffness: f32,
    /// Velocity retained per step.
    pub damping: f32,
    /// Seconds a shape morph takes from trigger to settle.
    pub morph_duration: f32,
    /// Radians of ambient Y rotation added per tick.
    pub rotation_step: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        // Force constants tuned against the rendered field, not derived.
        Self {
            particle_count: 12_000,
            influence_radius_sq: 1.2,
            repel_strength: 0.008,
            spring_stiffness: 0.01,
            damping: 0.90,
            morph_duration: 1.1,
            rotation_step: 0.0006,
        }
    }
}
